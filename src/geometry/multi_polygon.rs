use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::Result;
use crate::geometry::{LineString, Polygon};
use crate::object_type::ObjectType;
use crate::position::Position;

/// A collection of [`Polygon`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    crs: Option<Crs>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        MultiPolygon { polygons, crs: None }
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::MultiPolygon)?;
        let polygons = codec::coordinate_arrays(codec::required_member(object, "coordinates")?)?
            .iter()
            .map(|polygon| {
                let rings = codec::coordinate_arrays(polygon)?
                    .iter()
                    .map(|ring| LineString::new(codec::positions(ring)?))
                    .collect::<Result<Vec<_>>>()?;
                Polygon::new(rings)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiPolygon {
            polygons,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl Serialize for MultiPolygon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let coordinates: Vec<Vec<&[Position]>> = self
            .polygons
            .iter()
            .map(|polygon| polygon.rings().iter().map(LineString::coordinates).collect())
            .collect();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::MultiPolygon.as_str())?;
        map.serialize_entry("coordinates", &coordinates)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

codec::impl_value_conversions!(MultiPolygon);
