//! Canonical message formatting.
//!
//! A canonical message is the exact text that gets digested. Its rules:
//! - a fixed ASCII prefix naming the feature kind (`Intersection`, `Geometry`, `Reference`)
//! - single spaces between fields, no trailing space
//! - every coordinate component printed with exactly [`COORD_PRECISION`] digits
//!   after a `.` radix, via `core::fmt` (locale independent)
//! - negative values that round to zero keep their sign (`-0.000000`)
//!
//! Changing any of these changes every identifier, so none of them is configurable.

use std::fmt;

use itertools::Itertools;

use crate::errors::{SharedStreetsError, SharedStreetsResult};
use crate::model::{Coordinate, FormOfWay, Geometry, LocationReference};

/// Digits after the decimal point for coordinate components.
pub const COORD_PRECISION: usize = 6;

pub const INTERSECTION_PREFIX: &str = "Intersection";
pub const GEOMETRY_PREFIX: &str = "Geometry";
pub const REFERENCE_PREFIX: &str = "Reference";

/// Minimum number of location references in a street reference.
pub const MIN_LOCATION_REFERENCES: usize = 2;

/// The exact text that is digested to produce an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalMessage(String);

impl CanonicalMessage {
    /// Wrap caller-provided text. No normalization is applied.
    pub fn from_raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format one coordinate component at fixed precision.
pub fn format_component(value: f64) -> String {
    format!("{:.*}", COORD_PRECISION, value)
}

fn format_coordinate(c: Coordinate) -> String {
    format!("{} {}", format_component(c.lon), format_component(c.lat))
}

/// `Intersection <lon> <lat>`
pub fn format_intersection(coord: Coordinate) -> CanonicalMessage {
    CanonicalMessage(format!("{INTERSECTION_PREFIX} {}", format_coordinate(coord)))
}

/// `Intersection <lon> <lat> <node_id>`, for basemaps that key intersections by node.
pub fn format_intersection_with_node(
    coord: Coordinate,
    node_id: impl fmt::Display,
) -> CanonicalMessage {
    let base = format_intersection(coord);
    CanonicalMessage(format!("{base} {node_id}"))
}

/// `Geometry <lon> <lat> <lon> <lat> ...`
///
/// Non-emptiness is guaranteed by [`Geometry`].
pub fn format_geometry(geom: &Geometry) -> CanonicalMessage {
    let body = geom.coords().iter().copied().map(format_coordinate).join(" ");
    CanonicalMessage(format!("{GEOMETRY_PREFIX} {body}"))
}

/// Format a raw coordinate slice as a geometry message.
pub fn format_geometry_points(points: &[Coordinate]) -> SharedStreetsResult<CanonicalMessage> {
    let geom = Geometry::new(points.to_vec())?;
    Ok(format_geometry(&geom))
}

/// `<lon> <lat>[ <bearing> <distance>]`
///
/// Bearing and distance are only emitted when both are present, each rounded
/// to a whole number. Distance stays in centimeters.
pub fn format_location_reference(lr: &LocationReference) -> String {
    let mut out = format_coordinate(lr.coordinate());
    if let (Some(bearing), Some(distance_cm)) = (lr.outbound_bearing, lr.distance_to_next_ref) {
        let bearing = bearing.round() as i64;
        let distance_cm = distance_cm.round() as i64;
        out.push_str(&format!(" {bearing} {distance_cm}"));
    }
    out
}

/// `Reference <form_of_way> <location reference> <location reference> ...`
pub fn format_reference(
    form_of_way: FormOfWay,
    location_references: &[LocationReference],
) -> SharedStreetsResult<CanonicalMessage> {
    if location_references.len() < MIN_LOCATION_REFERENCES {
        return Err(SharedStreetsError::invalid_input(format!(
            "reference requires at least {MIN_LOCATION_REFERENCES} location references, got {}",
            location_references.len()
        )));
    }
    let body = location_references.iter().map(format_location_reference).join(" ");
    Ok(CanonicalMessage(format!(
        "{REFERENCE_PREFIX} {} {body}",
        form_of_way.number()
    )))
}
