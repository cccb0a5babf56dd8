use anyhow::Result;
use tracing::{debug, info};

use sharedstreets_core::batch::{FeatureKind, HashedFeature};
use sharedstreets_core::config::{validate_config, CoreConfig};
use sharedstreets_core::determinism::message::format_reference;
use sharedstreets_core::model::{FormOfWay, LocationReference};

use crate::io::input;
use crate::output;

pub fn run(form_of_way: &str, input_path: &str) -> Result<()> {
    let cfg = CoreConfig::default();
    validate_config(&cfg)?;

    let form_of_way: FormOfWay = form_of_way.parse()?;
    let refs: Vec<LocationReference> = input::read_json_file(input_path)?;
    cfg.limits.check_location_references(&refs)?;

    let message = format_reference(form_of_way, &refs)?;
    debug!(%form_of_way, refs = refs.len(), canonical = %message, "canonical reference message");

    let out = HashedFeature::from_message(FeatureKind::Reference, message)?;
    info!(id = %out.id, "hashed reference");
    output::emit(&out)
}
