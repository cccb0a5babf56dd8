//! Configuration structures for sharedstreets-core.
//!
//! The identifier scheme itself (precision, digest, alphabet) is fixed and has
//! no configuration. What callers can tune are input limits applied by batch
//! entry points before any message is built.
//!
//! The core crate does not read environment variables. Configuration is
//! constructed by the caller and passed in explicitly.

use crate::errors::{SharedStreetsError, SharedStreetsResult};
use crate::model::{Geometry, LocationReference};

/// Global configuration container.
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    pub limits: LimitsConfig,
}

/// Input size limits.
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    pub max_geometry_points: usize,
    pub max_location_references: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_geometry_points: 100_000,
            max_location_references: 64,
        }
    }
}

impl LimitsConfig {
    pub fn check_geometry(&self, geom: &Geometry) -> SharedStreetsResult<()> {
        if geom.len() > self.max_geometry_points {
            return Err(SharedStreetsError::invalid_input(format!(
                "geometry has {} points, limit is {}",
                geom.len(),
                self.max_geometry_points
            )));
        }
        Ok(())
    }

    pub fn check_location_references(&self, refs: &[LocationReference]) -> SharedStreetsResult<()> {
        if refs.len() > self.max_location_references {
            return Err(SharedStreetsError::invalid_input(format!(
                "reference has {} location references, limit is {}",
                refs.len(),
                self.max_location_references
            )));
        }
        Ok(())
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &CoreConfig) -> SharedStreetsResult<()> {
    if cfg.limits.max_geometry_points == 0 {
        return Err(SharedStreetsError::invalid_input(
            "max_geometry_points must be greater than zero",
        ));
    }

    if cfg.limits.max_location_references < crate::determinism::message::MIN_LOCATION_REFERENCES {
        return Err(SharedStreetsError::invalid_input(
            "max_location_references must allow at least two references",
        ));
    }

    Ok(())
}
