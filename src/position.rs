use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::GeoJsonError;

/// Number of decimal places kept when comparing or hashing coordinates.
const PRECISION: f64 = 1e10;

fn rounded(value: f64) -> i64 {
    (value * PRECISION).round() as i64
}

/// An ordered (longitude, latitude, optional altitude) triple.
///
/// Equality and hashing tolerate floating point noise: every component is
/// rounded to 10 decimal places before comparison, so a value that drifted in
/// the last bits of its mantissa still compares equal to the original.
///
/// The wire form is `[longitude, latitude]` or `[longitude, latitude,
/// altitude]` — longitude always first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Position {
    /// Degrees east of the prime meridian.
    pub longitude: f64,
    /// Degrees north of the equator.
    pub latitude: f64,
    /// Height in meters, if known.
    pub altitude: Option<f64>,
}

impl Position {
    /// A two-dimensional position.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Position {
            longitude,
            latitude,
            altitude: None,
        }
    }

    /// A three-dimensional position.
    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Position {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        rounded(self.longitude) == rounded(other.longitude)
            && rounded(self.latitude) == rounded(other.latitude)
            && self.altitude.map(rounded) == other.altitude.map(rounded)
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        rounded(self.longitude).hash(state);
        rounded(self.latitude).hash(state);
        self.altitude.map(rounded).hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.altitude {
            Some(altitude) => write!(
                f,
                "Latitude: {}, Longitude: {}, Altitude: {}",
                self.latitude, self.longitude, altitude
            ),
            None => write!(
                f,
                "Latitude: {}, Longitude: {}",
                self.latitude, self.longitude
            ),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.altitude.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.longitude)?;
        seq.serialize_element(&self.latitude)?;
        if let Some(altitude) = self.altitude {
            seq.serialize_element(&altitude)?;
        }
        seq.end()
    }
}

impl TryFrom<&Value> for Position {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let items = match value {
            Value::Null => return Err(GeoJsonError::NullCoordinates),
            Value::Array(items) => items,
            _ => return Err(GeoJsonError::NonNumericCoordinate),
        };
        let coordinates = items
            .iter()
            .map(|item| item.as_f64().ok_or(GeoJsonError::NonNumericCoordinate))
            .collect::<Result<Vec<_>, _>>()?;
        match coordinates[..] {
            [longitude, latitude] => Ok(Position::new(longitude, latitude)),
            [longitude, latitude, altitude] => {
                Ok(Position::with_altitude(longitude, latitude, altitude))
            }
            _ => Err(GeoJsonError::PositionArity(coordinates.len())),
        }
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Position::try_from(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn equality_tolerates_floating_point_noise() {
        assert_eq!(Position::new(1.000_000_000_01, 2.0), Position::new(1.0, 2.0));
        assert_ne!(Position::new(1.1, 2.0), Position::new(1.0, 2.0));
    }

    #[test]
    fn equality_is_symmetric_and_transitive() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(1.000_000_000_01, 2.0);
        let c = Position::new(0.999_999_999_99, 2.0);

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
    }

    #[test]
    fn equal_positions_share_a_hash() {
        fn hash(position: &Position) -> u64 {
            use std::collections::hash_map::DefaultHasher;
            let mut hasher = DefaultHasher::new();
            position.hash(&mut hasher);
            hasher.finish()
        }

        let left = Position::new(1.000_000_000_01, 2.0);
        let right = Position::new(1.0, 2.0);
        assert_eq!(hash(&left), hash(&right));
    }

    #[test]
    fn altitude_participates_in_equality() {
        assert_ne!(
            Position::with_altitude(1.0, 2.0, 3.0),
            Position::new(1.0, 2.0)
        );
        assert_eq!(
            Position::with_altitude(1.0, 2.0, 3.000_000_000_001),
            Position::with_altitude(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn serializes_longitude_first() {
        let position = Position::new(125.6, 10.1);
        assert_eq!(serde_json::to_value(position).unwrap(), json!([125.6, 10.1]));

        let position = Position::with_altitude(90.65464646, 53.2455662, 200.4567);
        assert_eq!(
            serde_json::to_value(position).unwrap(),
            json!([90.65464646, 53.2455662, 200.4567])
        );
    }

    #[test]
    fn deserializes_two_or_three_numbers() {
        let position: Position = serde_json::from_value(json!([125.6, 10.1])).unwrap();
        assert_relative_eq!(position.longitude, 125.6);
        assert_relative_eq!(position.latitude, 10.1);
        assert_eq!(position.altitude, None);

        let position: Position =
            serde_json::from_value(json!([90.65464646, 53.2455662, 200.4567])).unwrap();
        assert_eq!(position.altitude, Some(200.4567));
    }

    #[test]
    fn rejects_wrong_arity_and_null() {
        assert!(matches!(
            Position::try_from(&json!([1.0])),
            Err(GeoJsonError::PositionArity(1))
        ));
        assert!(matches!(
            Position::try_from(&json!([1.0, 2.0, 3.0, 4.0])),
            Err(GeoJsonError::PositionArity(4))
        ));
        assert!(matches!(
            Position::try_from(&Value::Null),
            Err(GeoJsonError::NullCoordinates)
        ));
        assert!(matches!(
            Position::try_from(&json!(["a", "b"])),
            Err(GeoJsonError::NonNumericCoordinate)
        ));
    }
}
