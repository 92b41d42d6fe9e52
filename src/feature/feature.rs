use std::hash::{Hash, Hasher};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::object_type::ObjectType;
use crate::properties::PropertyMap;

/// The dynamically-typed feature: a geometry bound to untyped property and
/// options bags and an optional identifier.
///
/// Equality and hashing consider the geometry alone — two features with the
/// same geometry but different ids, properties or options compare equal. A
/// `None` geometry equals only another `None` geometry. Callers who care
/// about property equality use [`TypedFeature`](crate::TypedFeature)
/// instead.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    geometry: Option<Geometry>,
    properties: PropertyMap,
    options: PropertyMap,
    id: Option<String>,
    crs: Option<Crs>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry>) -> Self {
        Feature {
            geometry,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replaces the properties bag. Build one from a plain struct with
    /// [`properties::to_map`](crate::properties::to_map).
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    /// Replaces the options bag.
    pub fn with_options(mut self, options: PropertyMap) -> Self {
        self.options = options;
        self
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// The properties bag; never missing, possibly empty.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// The options bag; never missing, possibly empty.
    pub fn options(&self) -> &PropertyMap {
        &self.options
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::Feature)?;
        Ok(Feature {
            geometry: super::geometry_member(object)?,
            properties: super::bag_member(object, "properties")?,
            options: super::bag_member(object, "options")?,
            id: codec::optional_id(object)?,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.geometry == other.geometry
    }
}

impl Eq for Feature {}

impl Hash for Feature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.geometry.hash(state);
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::Feature.as_str())?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        map.serialize_entry("geometry", &self.geometry)?;
        map.serialize_entry("properties", &self.properties)?;
        map.serialize_entry("options", &self.options)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

codec::impl_value_conversions!(Feature);
