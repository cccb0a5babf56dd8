//! sharedstreets-core
//!
//! Deterministic identifiers for street features:
//! - canonical text messages for intersections, geometries and references
//! - md5 digests of those messages
//! - base-58 encoding of the digests
//! - batch hashing with per-item results

pub mod batch;
pub mod config;
pub mod determinism;
pub mod errors;
pub mod identity;
pub mod model;

pub use crate::errors::{SharedStreetsError, SharedStreetsResult};

/// Fixed parameters of the identifier scheme.
/// These must remain stable; changing any of them changes every identifier.
pub mod scheme {
    pub use crate::determinism::base58::BASE58_ALPHABET;
    pub use crate::determinism::hashing::{DIGEST_ALGORITHM, DIGEST_LEN};
    pub use crate::determinism::message::COORD_PRECISION;
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::batch::{hash_feature, hash_features, Feature, FeatureKind, HashedFeature};
    pub use crate::config::{validate_config, CoreConfig, LimitsConfig};
    pub use crate::determinism::base58::{decode_base58, encode_base58};
    pub use crate::determinism::hashing::{digest, DigestBytes};
    pub use crate::determinism::message::{
        format_geometry, format_intersection, format_reference, CanonicalMessage,
    };
    pub use crate::identity::{
        generate_hash, geometry_hash, intersection_hash, reference_hash, Identifier,
    };
    pub use crate::model::{Coordinate, FormOfWay, Geometry, LocationReference};
    pub use crate::{SharedStreetsError, SharedStreetsResult};
}
