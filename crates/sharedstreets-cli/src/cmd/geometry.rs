use anyhow::Result;
use tracing::{debug, info};

use sharedstreets_core::batch::{FeatureKind, HashedFeature};
use sharedstreets_core::determinism::message::format_geometry;
use sharedstreets_core::model::Geometry;

use crate::io::input;
use crate::output;

pub fn run(values: &[f64]) -> Result<()> {
    let geom = Geometry::from_points(input::pair_up(values)?)?;
    let message = format_geometry(&geom);
    debug!(points = geom.len(), canonical = %message, "canonical geometry message");

    let out = HashedFeature::from_message(FeatureKind::Geometry, message)?;
    info!(id = %out.id, "hashed geometry");
    output::emit(&out)
}
