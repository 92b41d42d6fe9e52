use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::Result;
use crate::geometry::Point;
use crate::object_type::ObjectType;
use crate::position::Position;

/// A collection of [`Point`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiPoint {
    points: Vec<Point>,
    crs: Option<Crs>,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        MultiPoint { points, crs: None }
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::MultiPoint)?;
        let positions = codec::positions(codec::required_member(object, "coordinates")?)?;
        Ok(MultiPoint {
            points: positions.into_iter().map(Point::new).collect(),
            crs: codec::optional_crs(object)?,
        })
    }
}

impl Serialize for MultiPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let coordinates: Vec<Position> = self.points.iter().map(Point::coordinates).collect();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::MultiPoint.as_str())?;
        map.serialize_entry("coordinates", &coordinates)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

codec::impl_value_conversions!(MultiPoint);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn multi_point() -> MultiPoint {
        MultiPoint::new(vec![
            Point::new(Position::new(5.3173828125, 52.379790828551016)),
            Point::new(Position::new(5.456085205078125, 52.36721467920585)),
        ])
    }

    #[test]
    fn wire_form_is_an_array_of_positions() {
        assert_eq!(
            serde_json::to_value(multi_point()).unwrap(),
            json!({
                "type": "MultiPoint",
                "coordinates": [
                    [5.3173828125, 52.379790828551016],
                    [5.456085205078125, 52.36721467920585]
                ]
            })
        );
    }

    #[test]
    fn round_trips() {
        let original = multi_point();
        let json = serde_json::to_string(&original).unwrap();
        let back: MultiPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn empty_collection_is_allowed() {
        let empty = MultiPoint::new(vec![]);
        let back: MultiPoint =
            serde_json::from_str(r#"{"type":"MultiPoint","coordinates":[]}"#).unwrap();
        assert_eq!(back, empty);
    }
}
