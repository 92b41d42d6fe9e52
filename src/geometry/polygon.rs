use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::{GeoJsonError, Result};
use crate::geometry::LineString;
use crate::object_type::ObjectType;
use crate::position::Position;

/// One or more closed rings: the first is the exterior boundary, any others
/// are holes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Polygon {
    rings: Vec<LineString>,
    crs: Option<Crs>,
}

impl Polygon {
    /// Fails with [`GeoJsonError::OpenRing`] unless every ring is a linear
    /// ring (closed, 4 or more positions).
    pub fn new(rings: Vec<LineString>) -> Result<Self> {
        if rings.iter().any(|ring| !ring.is_linear_ring()) {
            return Err(GeoJsonError::OpenRing);
        }
        Ok(Polygon { rings, crs: None })
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::Polygon)?;
        let rings = codec::coordinate_arrays(codec::required_member(object, "coordinates")?)?
            .iter()
            .map(|ring| LineString::new(codec::positions(ring)?))
            .collect::<Result<Vec<_>>>()?;
        let crs = codec::optional_crs(object)?;
        let mut polygon = Polygon::new(rings)?;
        polygon.crs = crs;
        Ok(polygon)
    }
}

impl Serialize for Polygon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let coordinates: Vec<&[Position]> =
            self.rings.iter().map(LineString::coordinates).collect();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::Polygon.as_str())?;
        map.serialize_entry("coordinates", &coordinates)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

codec::impl_value_conversions!(Polygon);

#[cfg(test)]
pub(crate) fn square() -> Polygon {
    Polygon::new(vec![LineString::new(vec![
        Position::new(5.3173828125, 52.379790828551016),
        Position::new(5.456085205078125, 52.36721467920585),
        Position::new(5.386047363281249, 52.303440474272755),
        Position::new(5.3173828125, 52.379790828551016),
    ])
    .unwrap()])
    .unwrap()
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn rings_must_be_closed() {
        let open = LineString::new(vec![
            Position::new(0.0, 0.0),
            Position::new(1.0, 0.0),
            Position::new(1.0, 1.0),
            Position::new(0.0, 1.0),
        ])
        .unwrap();
        assert!(matches!(
            Polygon::new(vec![open]),
            Err(GeoJsonError::OpenRing)
        ));
    }

    #[test]
    fn closed_triangles_are_too_short() {
        let triangle = LineString::new(vec![
            Position::new(0.0, 0.0),
            Position::new(1.0, 1.0),
            Position::new(0.0, 0.0),
        ])
        .unwrap();
        assert!(matches!(
            Polygon::new(vec![triangle]),
            Err(GeoJsonError::OpenRing)
        ));
    }

    #[test]
    fn wire_form_nests_rings() {
        assert_eq!(
            serde_json::to_value(square()).unwrap(),
            json!({
                "type": "Polygon",
                "coordinates": [[
                    [5.3173828125, 52.379790828551016],
                    [5.456085205078125, 52.36721467920585],
                    [5.386047363281249, 52.303440474272755],
                    [5.3173828125, 52.379790828551016]
                ]]
            })
        );
    }

    #[test]
    fn round_trips() {
        let original = square();
        let back: Polygon =
            serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }
}
