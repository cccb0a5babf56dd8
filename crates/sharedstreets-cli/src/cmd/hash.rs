use anyhow::Result;
use tracing::{debug, info};

use sharedstreets_core::batch::{FeatureKind, HashedFeature};
use sharedstreets_core::determinism::message::CanonicalMessage;

use crate::output;

pub fn run(message: &str) -> Result<()> {
    debug!(raw = message, "hashing raw message");
    let message = CanonicalMessage::from_raw(message);
    let out = HashedFeature::from_message(FeatureKind::Message, message)?;
    info!(id = %out.id, "hashed");
    output::emit(&out)
}
