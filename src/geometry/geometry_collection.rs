use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::object_type::ObjectType;

/// A heterogeneous collection of geometries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    crs: Option<Crs>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        GeometryCollection {
            geometries,
            crs: None,
        }
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::GeometryCollection)?;
        let geometries =
            codec::elements(codec::required_member(object, "geometries")?, "an array of geometries")?
                .iter()
                .map(Geometry::try_from)
                .collect::<Result<Vec<_>>>()?;
        Ok(GeometryCollection {
            geometries,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl Serialize for GeometryCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::GeometryCollection.as_str())?;
        map.serialize_entry("geometries", &self.geometries)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

codec::impl_value_conversions!(GeometryCollection);
