//! Identifier generation.
//!
//! `generate_hash(message) = encode_base58(digest(message))`, and each feature
//! kind formats its canonical message first:
//!
//! ```
//! use sharedstreets_core::prelude::*;
//!
//! let id = intersection_hash(Coordinate::new(110.0, 45.0)).unwrap();
//! assert_eq!(id.as_str(), "F585H3jn72yicbJhf4791w");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::determinism::base58::encode_base58;
use crate::determinism::hashing::{digest, DigestBytes};
use crate::determinism::message::{
    format_geometry_points, format_intersection, format_intersection_with_node, format_reference,
    CanonicalMessage,
};
use crate::errors::SharedStreetsResult;
use crate::model::{Coordinate, FormOfWay, Geometry, LocationReference};

/// A base-58 SharedStreets identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identifier(String);

impl Identifier {
    pub fn from_digest(d: &DigestBytes) -> Self {
        Self(encode_base58(d.as_bytes()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identifier of an arbitrary message.
pub fn generate_hash(message: &str) -> SharedStreetsResult<Identifier> {
    let d = digest(message)?;
    Ok(Identifier::from_digest(&d))
}

/// Identifier of an already formatted canonical message.
pub fn message_hash(message: &CanonicalMessage) -> SharedStreetsResult<Identifier> {
    generate_hash(message.as_str())
}

pub fn intersection_hash(coord: Coordinate) -> SharedStreetsResult<Identifier> {
    message_hash(&format_intersection(coord))
}

pub fn intersection_hash_with_node(
    coord: Coordinate,
    node_id: impl fmt::Display,
) -> SharedStreetsResult<Identifier> {
    message_hash(&format_intersection_with_node(coord, node_id))
}

/// Fails with `InvalidInput` on an empty slice.
pub fn geometry_hash(points: &[Coordinate]) -> SharedStreetsResult<Identifier> {
    message_hash(&format_geometry_points(points)?)
}

pub fn geometry_id(geom: &Geometry) -> SharedStreetsResult<Identifier> {
    geometry_hash(geom.coords())
}

pub fn reference_hash(
    form_of_way: FormOfWay,
    location_references: &[LocationReference],
) -> SharedStreetsResult<Identifier> {
    message_hash(&format_reference(form_of_way, location_references)?)
}
