//! Batch hashing.
//!
//! Hashes a list of features and returns one result per feature, in input
//! order. A bad feature produces an `Err` in its slot and does not abort the
//! rest of the batch.
//!
//! With the `parallel` feature, features are hashed on the rayon pool. Every
//! hashing function is pure, so the output is identical to the sequential path.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::LimitsConfig;
use crate::determinism::hashing::digest;
use crate::determinism::message::{
    format_geometry, format_intersection, format_reference, CanonicalMessage,
};
use crate::errors::SharedStreetsResult;
use crate::identity::Identifier;
use crate::model::{Coordinate, FormOfWay, Geometry, LocationReference};

/// A feature to hash.
///
/// JSON shape: `{"type": "intersection", "coordinates": [lon, lat]}`,
/// `{"type": "geometry", "coordinates": [[lon, lat], ...]}`,
/// `{"type": "reference", "formOfWay": 2, "locationReferences": [...]}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Feature {
    Intersection {
        coordinates: Coordinate,
    },
    Geometry {
        coordinates: Vec<Coordinate>,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Reference {
        #[cfg_attr(feature = "serde", serde(default))]
        form_of_way: FormOfWay,
        location_references: Vec<LocationReference>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FeatureKind {
    Intersection,
    Geometry,
    Reference,
    Message,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intersection => "intersection",
            Self::Geometry => "geometry",
            Self::Reference => "reference",
            Self::Message => "message",
        }
    }
}

impl Feature {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Intersection { .. } => FeatureKind::Intersection,
            Self::Geometry { .. } => FeatureKind::Geometry,
            Self::Reference { .. } => FeatureKind::Reference,
        }
    }

    /// Build the canonical message, enforcing `limits`.
    pub fn message(&self, limits: &LimitsConfig) -> SharedStreetsResult<CanonicalMessage> {
        match self {
            Self::Intersection { coordinates } => Ok(format_intersection(*coordinates)),
            Self::Geometry { coordinates } => {
                let geom = Geometry::new(coordinates.clone())?;
                limits.check_geometry(&geom)?;
                Ok(format_geometry(&geom))
            }
            Self::Reference {
                form_of_way,
                location_references,
            } => {
                limits.check_location_references(location_references)?;
                format_reference(*form_of_way, location_references)
            }
        }
    }
}

/// A hashed feature: its canonical message, identifier and hex digest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HashedFeature {
    pub kind: FeatureKind,
    pub message: String,
    pub id: Identifier,
    pub hex: String,
}

impl HashedFeature {
    pub fn from_message(kind: FeatureKind, message: CanonicalMessage) -> SharedStreetsResult<Self> {
        let d = digest(message.as_str())?;
        Ok(Self {
            kind,
            id: Identifier::from_digest(&d),
            hex: d.to_hex(),
            message: message.into_string(),
        })
    }
}

pub fn hash_feature(
    feature: &Feature,
    limits: &LimitsConfig,
) -> SharedStreetsResult<HashedFeature> {
    HashedFeature::from_message(feature.kind(), feature.message(limits)?)
}

#[cfg(not(feature = "parallel"))]
pub fn hash_features(
    features: &[Feature],
    limits: &LimitsConfig,
) -> Vec<SharedStreetsResult<HashedFeature>> {
    features.iter().map(|f| hash_feature(f, limits)).collect()
}

#[cfg(feature = "parallel")]
pub fn hash_features(
    features: &[Feature],
    limits: &LimitsConfig,
) -> Vec<SharedStreetsResult<HashedFeature>> {
    features.par_iter().map(|f| hash_feature(f, limits)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SharedStreetsError;
    use crate::identity::{geometry_hash, intersection_hash};
    use assert_matches::assert_matches;

    fn sample() -> Vec<Feature> {
        vec![
            Feature::Intersection {
                coordinates: Coordinate::new(110.0, 45.0),
            },
            Feature::Geometry {
                coordinates: Vec::new(),
            },
            Feature::Geometry {
                coordinates: vec![
                    Coordinate::new(110.0, 45.0),
                    Coordinate::new(115.0, 50.0),
                    Coordinate::new(120.0, 55.0),
                ],
            },
        ]
    }

    #[test]
    fn results_in_input_order() {
        let out = hash_features(&sample(), &LimitsConfig::default());
        assert_eq!(out.len(), 3);

        let first = out[0].as_ref().unwrap();
        assert_eq!(first.kind, FeatureKind::Intersection);
        assert_eq!(first.id, intersection_hash(Coordinate::new(110.0, 45.0)).unwrap());

        assert_matches!(out[1], Err(SharedStreetsError::InvalidInput(_)));

        let third = out[2].as_ref().unwrap();
        assert_eq!(third.id, "SWkr931VN89aHemb4L7MDS");
        assert_eq!(
            third.message,
            "Geometry 110.000000 45.000000 115.000000 50.000000 120.000000 55.000000"
        );
    }

    #[test]
    fn limits_apply_per_item() {
        let limits = LimitsConfig {
            max_geometry_points: 2,
            ..LimitsConfig::default()
        };
        let out = hash_features(&sample(), &limits);
        assert!(out[0].is_ok());
        assert_matches!(out[2], Err(SharedStreetsError::InvalidInput(_)));
    }

    #[test]
    fn hex_matches_identifier_digest() {
        let pts = [Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)];
        let hf = hash_feature(
            &Feature::Geometry {
                coordinates: pts.to_vec(),
            },
            &LimitsConfig::default(),
        )
        .unwrap();
        assert_eq!(hf.id, geometry_hash(&pts).unwrap());
        assert_eq!(hf.hex.len(), 32);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn features_from_json() {
        let raw = r#"[
            {"type": "intersection", "coordinates": [-74.003388, 40.634538]},
            {"type": "reference", "formOfWay": "MultipleCarriageway", "locationReferences": [
                {"lon": -74.0048213, "lat": 40.7416415,
                 "outboundBearing": 208, "distanceToNextRef": 9279},
                {"lon": -74.0051265, "lat": 40.7408505, "inboundBearing": 188}
            ]}
        ]"#;
        let features: Vec<Feature> = serde_json::from_str(raw).unwrap();
        let out = hash_features(&features, &LimitsConfig::default());
        assert_eq!(out[0].as_ref().unwrap().id, "31H4rsFQijyBvkTSfoRYKP");
        assert_eq!(out[1].as_ref().unwrap().id, "WXejTYQvo2H5CJ8ZtsiapE");
    }
}
