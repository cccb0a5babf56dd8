use anyhow::Result;
use tracing::{debug, info};

use sharedstreets_core::batch::{FeatureKind, HashedFeature};
use sharedstreets_core::determinism::message::{format_intersection, format_intersection_with_node};
use sharedstreets_core::model::Coordinate;

use crate::output;

pub fn run(lon: f64, lat: f64, node_id: Option<&str>) -> Result<()> {
    let coord = Coordinate::new(lon, lat);
    let message = match node_id {
        Some(id) => format_intersection_with_node(coord, id),
        None => format_intersection(coord),
    };
    debug!(canonical = %message, "canonical intersection message");

    let out = HashedFeature::from_message(FeatureKind::Intersection, message)?;
    info!(id = %out.id, "hashed intersection");
    output::emit(&out)
}
