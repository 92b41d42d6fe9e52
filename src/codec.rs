//! The polymorphic dispatch layer: discriminator lookup, the any-object
//! [`GeoJson`] view and whole-document decode/encode.
//!
//! Decoding inspects the `"type"` member of a JSON object — key lookup and
//! tag matching are both case-insensitive — and hands the object to the
//! matching variant's decoder. Three dispatch views exist: [`GeoJson`]
//! accepts every known tag, [`Geometry`] only the eight geometry tags, and
//! [`FeatureCollectionItem`](crate::FeatureCollectionItem) only `Feature`
//! and `Cluster`.

use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::crs::Crs;
use crate::error::{GeoJsonError, Result};
use crate::feature::{Cluster, Feature, FeatureCollection};
use crate::geometry::Geometry;
use crate::object_type::ObjectType;

/// A JSON object tree node: an insertion-ordered string-keyed map.
pub type JsonObject = serde_json::Map<String, Value>;

/// Implements `TryFrom<&Value>` (via the type's `from_json_object`) and the
/// matching serde `Deserialize` for a model type.
macro_rules! impl_value_conversions {
    ($type:ty) => {
        impl TryFrom<&serde_json::Value> for $type {
            type Error = crate::error::GeoJsonError;

            fn try_from(value: &serde_json::Value) -> crate::error::Result<Self> {
                Self::from_json_object(crate::codec::expect_object(value)?)
            }
        }

        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let value = serde_json::Value::deserialize(deserializer)?;
                Self::try_from(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}
pub(crate) use impl_value_conversions;

/// Any known GeoJSON object — the widest dispatch view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    Cluster(Cluster),
    FeatureCollection(FeatureCollection),
}

impl GeoJson {
    /// The `"type"` tag of the wrapped object.
    pub fn object_type(&self) -> ObjectType {
        match self {
            GeoJson::Geometry(geometry) => geometry.object_type(),
            GeoJson::Feature(_) => ObjectType::Feature,
            GeoJson::Cluster(_) => ObjectType::Cluster,
            GeoJson::FeatureCollection(_) => ObjectType::FeatureCollection,
        }
    }

    /// The attached coordinate reference system, if any.
    pub fn crs(&self) -> Option<&Crs> {
        match self {
            GeoJson::Geometry(geometry) => geometry.crs(),
            GeoJson::Feature(feature) => feature.crs(),
            GeoJson::Cluster(cluster) => cluster.crs(),
            GeoJson::FeatureCollection(collection) => collection.crs(),
        }
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        match object_type_of(object)? {
            ObjectType::Feature => Ok(GeoJson::Feature(Feature::from_json_object(object)?)),
            ObjectType::Cluster => Ok(GeoJson::Cluster(Cluster::from_json_object(object)?)),
            ObjectType::FeatureCollection => Ok(GeoJson::FeatureCollection(
                FeatureCollection::from_json_object(object)?,
            )),
            _ => Ok(GeoJson::Geometry(Geometry::from_json_object(object)?)),
        }
    }
}

impl From<Geometry> for GeoJson {
    fn from(geometry: Geometry) -> Self {
        GeoJson::Geometry(geometry)
    }
}

impl From<Feature> for GeoJson {
    fn from(feature: Feature) -> Self {
        GeoJson::Feature(feature)
    }
}

impl From<Cluster> for GeoJson {
    fn from(cluster: Cluster) -> Self {
        GeoJson::Cluster(cluster)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(collection: FeatureCollection) -> Self {
        GeoJson::FeatureCollection(collection)
    }
}

impl Serialize for GeoJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            GeoJson::Geometry(geometry) => geometry.serialize(serializer),
            GeoJson::Feature(feature) => feature.serialize(serializer),
            GeoJson::Cluster(cluster) => cluster.serialize(serializer),
            GeoJson::FeatureCollection(collection) => collection.serialize(serializer),
        }
    }
}

impl_value_conversions!(GeoJson);

impl FromStr for GeoJson {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        GeoJson::try_from(&value)
    }
}

/// One decoded JSON document.
///
/// A document is the JSON literal `null` (no object), a single typed object,
/// or an array of typed objects decoded independently with order kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// The document was `null`.
    Null,
    /// The document was one typed object.
    Single(GeoJson),
    /// The document was an array of typed objects.
    Sequence(Vec<GeoJson>),
}

impl TryFrom<&Value> for Document {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Document::Null),
            Value::Object(object) => Ok(Document::Single(GeoJson::from_json_object(object)?)),
            Value::Array(items) => {
                let objects = items
                    .iter()
                    .map(GeoJson::try_from)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Document::Sequence(objects))
            }
            other => Err(GeoJsonError::UnexpectedJson {
                expected: "null, an object or an array",
                got: json_type_name(other),
            }),
        }
    }
}

impl FromStr for Document {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Document::try_from(&value)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Single(object) => object.serialize(serializer),
            Document::Sequence(objects) => objects.serialize(serializer),
        }
    }
}

/// Encodes any object of the model as compact JSON text.
pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encodes any object of the model as indented JSON text.
pub fn to_string_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// The object's `"type"` tag: key lookup and tag matching are both
/// case-insensitive.
pub(crate) fn object_type_of(object: &JsonObject) -> Result<ObjectType> {
    let token = object
        .iter()
        .find_map(|(key, value)| key.eq_ignore_ascii_case("type").then_some(value))
        .ok_or(GeoJsonError::MissingType)?;
    let tag = token
        .as_str()
        .ok_or_else(|| GeoJsonError::UnknownType(token.to_string()))?;
    tag.parse()
}

/// Checks the object's tag against the variant being decoded.
pub(crate) fn expect_type(object: &JsonObject, expected: ObjectType) -> Result<()> {
    let got = object_type_of(object)?;
    if got != expected {
        return Err(GeoJsonError::UnexpectedType {
            context: expected.as_str(),
            got,
        });
    }
    Ok(())
}

pub(crate) fn expect_object(value: &Value) -> Result<&JsonObject> {
    value.as_object().ok_or(GeoJsonError::UnexpectedJson {
        expected: "a geojson object",
        got: json_type_name(value),
    })
}

pub(crate) fn required_member<'a>(object: &'a JsonObject, name: &'static str) -> Result<&'a Value> {
    object.get(name).ok_or(GeoJsonError::MissingMember(name))
}

/// The optional `"crs"` member: absent stays absent, `null` decodes to
/// [`Crs::Unspecified`].
pub(crate) fn optional_crs(object: &JsonObject) -> Result<Option<Crs>> {
    object.get("crs").map(Crs::try_from).transpose()
}

/// The optional `"id"` member: a string, or absent/`null` for none.
pub(crate) fn optional_id(object: &JsonObject) -> Result<Option<String>> {
    match object.get("id") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) => Ok(Some(id.clone())),
        Some(other) => Err(GeoJsonError::UnexpectedJson {
            expected: "a string \"id\" member",
            got: json_type_name(other),
        }),
    }
}

/// Decodes a coordinates member as an array of positions.
pub(crate) fn positions(value: &Value) -> Result<Vec<crate::position::Position>> {
    coordinate_arrays(value)?
        .iter()
        .map(crate::position::Position::try_from)
        .collect()
}

/// The elements of a nested coordinates array; `null` is a dedicated error.
pub(crate) fn coordinate_arrays(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Null => Err(GeoJsonError::NullCoordinates),
        Value::Array(items) => Ok(items),
        other => Err(GeoJsonError::UnexpectedJson {
            expected: "an array of coordinates",
            got: json_type_name(other),
        }),
    }
}

/// The elements of a required array member.
pub(crate) fn elements<'a>(value: &'a Value, expected: &'static str) -> Result<&'a [Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(GeoJsonError::UnexpectedJson {
            expected,
            got: json_type_name(other),
        }),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
