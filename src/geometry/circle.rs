use std::hash::{Hash, Hasher};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::{GeoJsonError, Result};
use crate::object_type::ObjectType;
use crate::position::Position;

/// Vendor extension: a center position with a radius in meters.
#[derive(Debug, Clone)]
pub struct Circle {
    coordinates: Position,
    radius: f64,
    crs: Option<Crs>,
}

impl Circle {
    pub fn new(coordinates: Position, radius: f64) -> Self {
        Circle {
            coordinates,
            radius,
            crs: None,
        }
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    /// The center of the circle.
    pub fn coordinates(&self) -> Position {
        self.coordinates
    }

    /// The radius in meters.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::Circle)?;
        let coordinates = Position::try_from(codec::required_member(object, "coordinates")?)?;
        let radius_value = codec::required_member(object, "radius")?;
        let radius = radius_value.as_f64().ok_or(GeoJsonError::UnexpectedJson {
            expected: "a numeric \"radius\" member",
            got: codec::json_type_name(radius_value),
        })?;
        Ok(Circle {
            coordinates,
            radius,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
            && self.radius == other.radius
            && self.crs == other.crs
    }
}

impl Eq for Circle {}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.hash(state);
        self.radius.to_bits().hash(state);
        self.crs.hash(state);
    }
}

impl Serialize for Circle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::Circle.as_str())?;
        map.serialize_entry("coordinates", &self.coordinates)?;
        map.serialize_entry("radius", &self.radius)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

codec::impl_value_conversions!(Circle);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_form_carries_center_and_radius() {
        let circle = Circle::new(Position::new(37.623422, 55.771145), 48.0);
        assert_eq!(
            serde_json::to_value(&circle).unwrap(),
            json!({"type": "Circle", "coordinates": [37.623422, 55.771145], "radius": 48.0})
        );
    }

    #[test]
    fn round_trips() {
        let original = Circle::new(Position::new(37.623422, 55.771145), 48.0);
        let back: Circle =
            serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn radius_participates_in_equality() {
        let center = Position::new(37.623422, 55.771145);
        assert_ne!(Circle::new(center, 48.0), Circle::new(center, 49.0));
    }

    #[test]
    fn missing_radius_is_rejected() {
        let err =
            Circle::try_from(&json!({"type": "Circle", "coordinates": [1.0, 2.0]})).unwrap_err();
        assert!(matches!(err, GeoJsonError::MissingMember("radius")));
    }
}
