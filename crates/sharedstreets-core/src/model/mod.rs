//! SharedStreets data models.
//!
//! These are the typed inputs of the identifier scheme. They are plain values:
//! immutable after construction, `Clone`, and free of policy beyond the one
//! structural invariant each type owns (a [`Geometry`] is never empty, a
//! [`FormOfWay`] is always a known code).
//!
//! Notes on serde (feature `serde`, on by default):
//! - [`Coordinate`] serializes as a GeoJSON position `[lon, lat]`.
//! - [`Geometry`] serializes as an array of positions and rejects `[]` on input.
//! - [`FormOfWay`] accepts either its number or its name and serializes as a number.
//!
//! Serialized forms exist for callers moving features in and out of JSON. The
//! bytes that get hashed are always produced by `crate::determinism::message`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{SharedStreetsError, SharedStreetsResult};

/// A (longitude, latitude) pair. No range invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lon, c.lat]
    }
}

/// An ordered, non-empty polyline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")
)]
pub struct Geometry {
    coords: Vec<Coordinate>,
}

impl Geometry {
    /// Build a geometry, rejecting an empty coordinate list.
    pub fn new(coords: Vec<Coordinate>) -> SharedStreetsResult<Self> {
        if coords.is_empty() {
            return Err(SharedStreetsError::invalid_input(
                "geometry must contain at least one coordinate",
            ));
        }
        Ok(Self { coords })
    }

    /// Build a geometry from any iterator of coordinate-like values.
    pub fn from_points<I, P>(points: I) -> SharedStreetsResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Coordinate>,
    {
        Self::new(points.into_iter().map(Into::into).collect())
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn start(&self) -> Coordinate {
        self.coords[0]
    }

    pub fn end(&self) -> Coordinate {
        self.coords[self.coords.len() - 1]
    }
}

impl TryFrom<Vec<Coordinate>> for Geometry {
    type Error = SharedStreetsError;

    fn try_from(coords: Vec<Coordinate>) -> SharedStreetsResult<Self> {
        Self::new(coords)
    }
}

impl From<Geometry> for Vec<Coordinate> {
    fn from(g: Geometry) -> Self {
        g.coords
    }
}

/// OpenLR form of way.
///
/// The numeric value is what appears in reference messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "FormOfWayRepr", into = "u8")
)]
pub enum FormOfWay {
    #[default]
    Undefined,
    Motorway,
    MultipleCarriageway,
    SingleCarriageway,
    Roundabout,
    TrafficSquare,
    SlipRoad,
    Other,
}

impl FormOfWay {
    pub const ALL: [FormOfWay; 8] = [
        Self::Undefined,
        Self::Motorway,
        Self::MultipleCarriageway,
        Self::SingleCarriageway,
        Self::Roundabout,
        Self::TrafficSquare,
        Self::SlipRoad,
        Self::Other,
    ];

    pub fn from_number(n: u8) -> SharedStreetsResult<Self> {
        Self::ALL
            .get(usize::from(n))
            .copied()
            .ok_or_else(|| {
                SharedStreetsError::invalid_input(format!("[{n}] unknown form of way number"))
            })
    }

    pub fn number(&self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Motorway => 1,
            Self::MultipleCarriageway => 2,
            Self::SingleCarriageway => 3,
            Self::Roundabout => 4,
            Self::TrafficSquare => 5,
            Self::SlipRoad => 6,
            Self::Other => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Motorway => "Motorway",
            Self::MultipleCarriageway => "MultipleCarriageway",
            Self::SingleCarriageway => "SingleCarriageway",
            Self::Roundabout => "Roundabout",
            Self::TrafficSquare => "TrafficSquare",
            Self::SlipRoad => "SlipRoad",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FormOfWay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses either the name (`"Motorway"`) or the number (`"1"`).
impl FromStr for FormOfWay {
    type Err = SharedStreetsError;

    fn from_str(s: &str) -> SharedStreetsResult<Self> {
        if let Ok(n) = s.parse::<u8>() {
            return Self::from_number(n);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                SharedStreetsError::invalid_input(format!("[{s}] unknown form of way name"))
            })
    }
}

impl From<FormOfWay> for u8 {
    fn from(f: FormOfWay) -> Self {
        f.number()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum FormOfWayRepr {
    Number(u8),
    Name(String),
}

#[cfg(feature = "serde")]
impl TryFrom<FormOfWayRepr> for FormOfWay {
    type Error = SharedStreetsError;

    fn try_from(r: FormOfWayRepr) -> SharedStreetsResult<Self> {
        match r {
            FormOfWayRepr::Number(n) => Self::from_number(n),
            FormOfWayRepr::Name(s) => s.parse(),
        }
    }
}

/// A point along a street reference.
///
/// `outbound_bearing` is in degrees and `distance_to_next_ref` in centimeters.
/// Both must be present for them to contribute to a reference message; the
/// last reference of a segment normally carries only `inbound_bearing`, which
/// never contributes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LocationReference {
    pub lon: f64,
    pub lat: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub inbound_bearing: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub outbound_bearing: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub distance_to_next_ref: Option<f64>,
}

impl LocationReference {
    pub fn new(coord: impl Into<Coordinate>) -> Self {
        let c = coord.into();
        Self {
            lon: c.lon,
            lat: c.lat,
            inbound_bearing: None,
            outbound_bearing: None,
            distance_to_next_ref: None,
        }
    }

    /// Set the outbound bearing (degrees) and distance to the next reference (centimeters).
    pub fn with_outbound(mut self, bearing: f64, distance_cm: f64) -> Self {
        self.outbound_bearing = Some(bearing);
        self.distance_to_next_ref = Some(distance_cm);
        self
    }

    pub fn with_inbound(mut self, bearing: f64) -> Self {
        self.inbound_bearing = Some(bearing);
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_geometry_rejected() {
        assert_matches!(
            Geometry::new(Vec::new()),
            Err(SharedStreetsError::InvalidInput(_))
        );
    }

    #[test]
    fn geometry_endpoints() {
        let g = Geometry::from_points([(110.0, 45.0), (115.0, 50.0), (120.0, 55.0)]).unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.start(), Coordinate::new(110.0, 45.0));
        assert_eq!(g.end(), Coordinate::new(120.0, 55.0));
    }

    #[test]
    fn form_of_way_number_and_name() {
        assert_eq!(FormOfWay::from_number(5).unwrap(), FormOfWay::TrafficSquare);
        assert_eq!("Motorway".parse::<FormOfWay>().unwrap(), FormOfWay::Motorway);
        assert_eq!("2".parse::<FormOfWay>().unwrap(), FormOfWay::MultipleCarriageway);
        assert_eq!(FormOfWay::default().number(), 0);
        for f in FormOfWay::ALL {
            assert_eq!(FormOfWay::from_number(f.number()).unwrap(), f);
        }
    }

    #[test]
    fn form_of_way_unknown() {
        let e = FormOfWay::from_number(8).unwrap_err();
        assert!(e.to_string().contains("unknown form of way"));
        assert!("Highway".parse::<FormOfWay>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_shapes() {
        let g: Geometry = serde_json::from_str("[[110, 45], [115.5, 50]]").unwrap();
        assert_eq!(g.coords()[1], Coordinate::new(115.5, 50.0));
        assert!(serde_json::from_str::<Geometry>("[]").is_err());

        let f: FormOfWay = serde_json::from_str("\"SlipRoad\"").unwrap();
        assert_eq!(f, FormOfWay::SlipRoad);
        assert_eq!(serde_json::to_string(&f).unwrap(), "6");

        let lr: LocationReference = serde_json::from_str(
            r#"{"lon": -74.0048213, "lat": 40.7416415,
                "outboundBearing": 208, "distanceToNextRef": 9279}"#,
        )
        .unwrap();
        assert_eq!(lr.outbound_bearing, Some(208.0));
        assert_eq!(lr.inbound_bearing, None);
    }
}
