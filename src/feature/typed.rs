//! Strongly-typed feature and cluster forms with full structural equality.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::bounding_box::BoundingBox;
use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::{GeoJsonError, Result};
use crate::geometry::{Geometry, GeometryObject};
use crate::object_type::ObjectType;
use crate::properties::PropertyMap;

/// The generic feature form: geometry, properties and options types are
/// chosen by the caller.
///
/// In contrast to [`Feature`](crate::Feature), equality is strict: two typed
/// features are equal only when id, geometry, properties, options and crs
/// are all equal. A caller who names the property type most probably cares
/// about property equality.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedFeature<G = Geometry, P = PropertyMap, O = PropertyMap> {
    geometry: Option<G>,
    properties: Option<P>,
    options: Option<O>,
    id: Option<String>,
    crs: Option<Crs>,
}

impl<G, P, O> TypedFeature<G, P, O> {
    pub fn new(geometry: Option<G>, properties: Option<P>, options: Option<O>) -> Self {
        TypedFeature {
            geometry,
            properties,
            options,
            id: None,
            crs: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn geometry(&self) -> Option<&G> {
        self.geometry.as_ref()
    }

    pub fn properties(&self) -> Option<&P> {
        self.properties.as_ref()
    }

    pub fn options(&self) -> Option<&O> {
        self.options.as_ref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }
}

impl<G: Serialize, P: Serialize, O: Serialize> Serialize for TypedFeature<G, P, O> {
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

impl<G, P, O> TryFrom<&Value> for TypedFeature<G, P, O>
where
    G: GeometryObject,
    P: DeserializeOwned,
    O: DeserializeOwned,
{
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        let object = codec::expect_object(value)?;
        codec::expect_type(object, ObjectType::Feature)?;
        Ok(TypedFeature {
            geometry: typed_geometry_member(object)?,
            properties: typed_member(object, "properties")?,
            options: typed_member(object, "options")?,
            id: codec::optional_id(object)?,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl<'de, G, P, O> Deserialize<'de> for TypedFeature<G, P, O>
where
    G: GeometryObject,
    P: DeserializeOwned,
    O: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(&value).map_err(serde::de::Error::custom)
    }
}

/// The generic cluster form, strict like [`TypedFeature`]: equality also
/// includes the element count and the bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedCluster<G = Geometry, P = PropertyMap, O = PropertyMap> {
    geometry: Option<G>,
    properties: Option<P>,
    options: Option<O>,
    id: Option<String>,
    number: i64,
    bounding_box: BoundingBox,
    crs: Option<Crs>,
}

impl<G, P, O> TypedCluster<G, P, O> {
    pub fn new(
        geometry: Option<G>,
        properties: Option<P>,
        options: Option<O>,
        number: i64,
        bounding_box: BoundingBox,
    ) -> Self {
        TypedCluster {
            geometry,
            properties,
            options,
            id: None,
            number,
            bounding_box,
            crs: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn geometry(&self) -> Option<&G> {
        self.geometry.as_ref()
    }

    pub fn properties(&self) -> Option<&P> {
        self.properties.as_ref()
    }

    pub fn options(&self) -> Option<&O> {
        self.options.as_ref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }
}

impl<G: Serialize, P: Serialize, O: Serialize> Serialize for TypedCluster<G, P, O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::Cluster.as_str())?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        map.serialize_entry("geometry", &self.geometry)?;
        map.serialize_entry("properties", &self.properties)?;
        map.serialize_entry("options", &self.options)?;
        map.serialize_entry("number", &self.number)?;
        map.serialize_entry("bbox", &self.bounding_box)?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.end()
    }
}

impl<G, P, O> TryFrom<&Value> for TypedCluster<G, P, O>
where
    G: GeometryObject,
    P: DeserializeOwned,
    O: DeserializeOwned,
{
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        let object = codec::expect_object(value)?;
        codec::expect_type(object, ObjectType::Cluster)?;
        let number_value = codec::required_member(object, "number")?;
        let number = number_value
            .as_i64()
            .ok_or(GeoJsonError::UnexpectedJson {
                expected: "an integer \"number\" member",
                got: codec::json_type_name(number_value),
            })?;
        Ok(TypedCluster {
            geometry: typed_geometry_member(object)?,
            properties: typed_member(object, "properties")?,
            options: typed_member(object, "options")?,
            id: codec::optional_id(object)?,
            number,
            bounding_box: BoundingBox::try_from(codec::required_member(object, "bbox")?)?,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl<'de, G, P, O> Deserialize<'de> for TypedCluster<G, P, O>
where
    G: GeometryObject,
    P: DeserializeOwned,
    O: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(&value).map_err(serde::de::Error::custom)
    }
}

fn typed_geometry_member<G: GeometryObject>(object: &JsonObject) -> Result<Option<G>> {
    match codec::required_member(object, "geometry")? {
        Value::Null => Ok(None),
        value => Ok(Some(G::try_from(value)?)),
    }
}

fn typed_member<T: DeserializeOwned>(
    object: &JsonObject,
    name: &'static str,
) -> Result<Option<T>> {
    match codec::required_member(object, name)? {
        Value::Null => Ok(None),
        value => Ok(Some(serde_json::from_value(value.clone())?)),
    }
}
