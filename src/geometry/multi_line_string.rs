use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::Result;
use crate::geometry::LineString;
use crate::object_type::ObjectType;
use crate::position::Position;

/// A collection of [`LineString`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiLineString {
    lines: Vec<LineString>,
    crs: Option<Crs>,
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        MultiLineString { lines, crs: None }
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::MultiLineString)?;
        let lines = codec::coordinate_arrays(codec::required_member(object, "coordinates")?)?
            .iter()
            .map(|line| LineString::new(codec::positions(line)?))
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiLineString {
            lines,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl Serialize for MultiLineString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let coordinates: Vec<&[Position]> =
            self.lines.iter().map(LineString::coordinates).collect();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::MultiLineString.as_str())?;
        map.serialize_entry("coordinates", &coordinates)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

codec::impl_value_conversions!(MultiLineString);

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn multi_line_string() -> MultiLineString {
        MultiLineString::new(vec![
            LineString::new(vec![
                Position::new(5.3173828125, 52.379790828551016),
                Position::new(5.456085205078125, 52.36721467920585),
            ])
            .unwrap(),
            LineString::new(vec![
                Position::new(5.386047363281249, 52.303440474272755),
                Position::new(5.3173828125, 52.379790828551016),
            ])
            .unwrap(),
        ])
    }

    #[test]
    fn wire_form_nests_position_arrays() {
        assert_eq!(
            serde_json::to_value(multi_line_string()).unwrap(),
            json!({
                "type": "MultiLineString",
                "coordinates": [
                    [
                        [5.3173828125, 52.379790828551016],
                        [5.456085205078125, 52.36721467920585]
                    ],
                    [
                        [5.386047363281249, 52.303440474272755],
                        [5.3173828125, 52.379790828551016]
                    ]
                ]
            })
        );
    }

    #[test]
    fn round_trips() {
        let original = multi_line_string();
        let back: MultiLineString =
            serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }
}
