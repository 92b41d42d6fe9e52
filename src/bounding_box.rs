//! Axis-aligned bounding rectangles described by two opposite corners.

use std::fmt;
use std::mem;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::position::Position;

/// Which diagonal the two stored corners of a [`BoundingBox`] represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundingBoxKind {
    /// `from` holds the northwest corner, `to` the southeast corner.
    TopLeftBottomRight,
    /// `from` holds the southwest corner, `to` the northeast corner.
    BottomLeftTopRight,
}

/// Order of the coordinate pairs in a comma-separated bounding box string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinatesOrder {
    /// Token pairs read as (latitude, longitude).
    LatitudeLongitude,
    /// Token pairs read as (longitude, latitude).
    LongitudeLatitude,
}

/// A bounding rectangle stored as two corner positions plus the
/// [`BoundingBoxKind`] describing which diagonal the corners represent.
///
/// Equality requires equal kind, `from` and `to`: a box in one kind is never
/// equal to the geometrically identical box in the other kind until
/// explicitly converted with [`convert_to`](BoundingBox::convert_to).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    kind: BoundingBoxKind,
    from: Position,
    to: Position,
}

impl BoundingBox {
    pub fn new(kind: BoundingBoxKind, from: Position, to: Position) -> Self {
        BoundingBox { kind, from, to }
    }

    /// How the stored corners map onto the rectangle.
    pub fn kind(&self) -> BoundingBoxKind {
        self.kind
    }

    /// The first stored corner.
    pub fn from(&self) -> Position {
        self.from
    }

    /// The second stored corner.
    pub fn to(&self) -> Position {
        self.to
    }

    /// Re-expresses the box along the other diagonal by swapping the latitude
    /// components of `from` and `to`; longitudes are unaffected. Converting to
    /// the current kind is a no-op.
    pub fn convert_to(&mut self, kind: BoundingBoxKind) {
        if self.kind == kind {
            return;
        }
        mem::swap(&mut self.from.latitude, &mut self.to.latitude);
        self.kind = kind;
    }

    /// Parses a comma-separated `"a,b,c,d"` string into a bounding box.
    ///
    /// The string must hold exactly 4 numeric tokens, read as two corner
    /// positions in `order`. Fails on an empty string, a wrong token count or
    /// a non-numeric token.
    pub fn parse(kind: BoundingBoxKind, order: CoordinatesOrder, text: &str) -> Result<Self> {
        let values = parse_corner_values(text)?;
        Ok(Self::build(kind, order, values))
    }

    /// Non-failing variant of [`parse`](BoundingBox::parse): returns `None`
    /// exactly where `parse` errors.
    pub fn try_parse(
        kind: BoundingBoxKind,
        order: CoordinatesOrder,
        text: &str,
    ) -> Option<Self> {
        Self::parse(kind, order, text).ok()
    }

    fn build(kind: BoundingBoxKind, order: CoordinatesOrder, values: [f64; 4]) -> Self {
        let (first, second) = match order {
            CoordinatesOrder::LatitudeLongitude => (
                Position::new(values[1], values[0]),
                Position::new(values[3], values[2]),
            ),
            CoordinatesOrder::LongitudeLatitude => (
                Position::new(values[0], values[1]),
                Position::new(values[2], values[3]),
            ),
        };

        match kind {
            BoundingBoxKind::TopLeftBottomRight => BoundingBox::new(kind, first, second),
            BoundingBoxKind::BottomLeftTopRight => {
                // Reconstruct the geographic northwest/southeast corners from
                // the two raw readings.
                let from = Position::new(first.longitude, second.latitude);
                let to = Position::new(second.longitude, first.latitude);
                BoundingBox::new(kind, from, to)
            }
        }
    }
}

fn parse_corner_values(text: &str) -> Result<[f64; 4]> {
    let malformed = || GeoJsonError::InvalidBoundingBoxString(text.to_string());

    let tokens: Vec<&str> = text.split(',').filter(|token| !token.is_empty()).collect();
    if tokens.len() != 4 {
        return Err(malformed());
    }

    let mut values = [0.0; 4];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = token.trim().parse().map_err(|_| malformed())?;
    }
    Ok(values)
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BBOX ({}, {}, {}, {})",
            self.from.latitude, self.from.longitude, self.to.latitude, self.to.longitude
        )
    }
}

/// The wire form is kind-agnostic: always the flat array
/// `[fromLon, fromLat, toLon, toLat]`.
impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(4))?;
        seq.serialize_element(&self.from.longitude)?;
        seq.serialize_element(&self.from.latitude)?;
        seq.serialize_element(&self.to.longitude)?;
        seq.serialize_element(&self.to.latitude)?;
        seq.end()
    }
}

/// Decoding always assumes [`BottomLeftTopRight`] semantics, whatever kind
/// the box was encoded with; round-tripping a [`TopLeftBottomRight`] box
/// through the wire form therefore changes its kind. This asymmetry is
/// long-standing behavior and is kept as-is.
///
/// [`BottomLeftTopRight`]: BoundingBoxKind::BottomLeftTopRight
/// [`TopLeftBottomRight`]: BoundingBoxKind::TopLeftBottomRight
impl TryFrom<&Value> for BoundingBox {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        let items = match value {
            Value::Null => return Err(GeoJsonError::NullCoordinates),
            Value::Array(items) => items,
            other => {
                return Err(GeoJsonError::UnexpectedJson {
                    expected: "a bounding box array",
                    got: crate::codec::json_type_name(other),
                })
            }
        };
        let coordinates = items
            .iter()
            .map(|item| item.as_f64().ok_or(GeoJsonError::NonNumericCoordinate))
            .collect::<Result<Vec<_>>>()?;
        match coordinates[..] {
            [from_lon, from_lat, to_lon, to_lat] => Ok(BoundingBox::new(
                BoundingBoxKind::BottomLeftTopRight,
                Position::new(from_lon, from_lat),
                Position::new(to_lon, to_lat),
            )),
            _ => Err(GeoJsonError::BoundingBoxArity(coordinates.len())),
        }
    }
}

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        BoundingBox::try_from(&value).map_err(serde::de::Error::custom)
    }
}
