use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::Result;
use crate::object_type::ObjectType;
use crate::position::Position;

/// A single [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    coordinates: Position,
    crs: Option<Crs>,
}

impl Point {
    pub fn new(coordinates: Position) -> Self {
        Point {
            coordinates,
            crs: None,
        }
    }

    /// Attaches a coordinate reference system.
    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    /// The position underlying this point.
    pub fn coordinates(&self) -> Position {
        self.coordinates
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::Point)?;
        let coordinates = Position::try_from(codec::required_member(object, "coordinates")?)?;
        Ok(Point {
            coordinates,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::Point.as_str())?;
        map.serialize_entry("coordinates", &self.coordinates)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

codec::impl_value_conversions!(Point);
