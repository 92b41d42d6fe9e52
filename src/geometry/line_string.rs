use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::{GeoJsonError, Result};
use crate::object_type::ObjectType;
use crate::position::Position;

/// Two or more connected positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineString {
    coordinates: Vec<Position>,
    crs: Option<Crs>,
}

impl LineString {
    /// Fails with [`GeoJsonError::LineStringTooShort`] on fewer than 2
    /// positions.
    pub fn new(coordinates: Vec<Position>) -> Result<Self> {
        if coordinates.len() < 2 {
            return Err(GeoJsonError::LineStringTooShort(coordinates.len()));
        }
        Ok(LineString {
            coordinates,
            crs: None,
        })
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Whether the first and last positions compare equal.
    pub fn is_closed(&self) -> bool {
        self.coordinates.first() == self.coordinates.last()
    }

    /// Whether this line string closes a ring: closed with 4 or more
    /// positions.
    pub fn is_linear_ring(&self) -> bool {
        self.coordinates.len() >= 4 && self.is_closed()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::LineString)?;
        let positions = codec::positions(codec::required_member(object, "coordinates")?)?;
        let crs = codec::optional_crs(object)?;
        let mut line_string = LineString::new(positions)?;
        line_string.crs = crs;
        Ok(line_string)
    }
}

impl Serialize for LineString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::LineString.as_str())?;
        map.serialize_entry("coordinates", &self.coordinates)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

codec::impl_value_conversions!(LineString);
