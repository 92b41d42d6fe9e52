//! Coordinate reference system objects attachable to any GeoJSON object.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use url::Url;

use crate::error::{GeoJsonError, Result};

/// A coordinate reference system description.
///
/// Every typed object carries an `Option<Crs>`: `None` means the `"crs"`
/// member is absent from the wire form, while `Some(Crs::Unspecified)` is the
/// explicit JSON `null`. The two are distinct values and compare unequal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Crs {
    /// Explicitly unspecified; encodes as the JSON literal `null`.
    #[default]
    Unspecified,

    /// A CRS identified by name, e.g. `"EPSG:31370"`.
    Named {
        /// The non-empty CRS name.
        name: String,
    },

    /// A CRS dereferenced through a link.
    Linked {
        /// A dereferenceable URI, encoded exactly as given. Relative
        /// references are accepted.
        href: String,
        /// Optional hint for the format of the linked definition, e.g.
        /// `"ogcwkt"`.
        link_type: Option<String>,
    },
}

impl Crs {
    /// A named CRS. Fails on an empty name.
    pub fn named(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GeoJsonError::EmptyCrsProperty("name"));
        }
        Ok(Crs::Named { name })
    }

    /// A linked CRS without a format hint. Fails on an empty or
    /// non-dereferenceable href.
    pub fn linked(href: impl Into<String>) -> Result<Self> {
        Self::build_linked(href.into(), None)
    }

    /// A linked CRS with a format hint.
    pub fn linked_with_type(href: impl Into<String>, link_type: impl Into<String>) -> Result<Self> {
        Self::build_linked(href.into(), Some(link_type.into()))
    }

    fn build_linked(href: String, link_type: Option<String>) -> Result<Self> {
        if href.is_empty() {
            return Err(GeoJsonError::EmptyCrsProperty("href"));
        }
        if !is_dereferenceable(&href) {
            return Err(GeoJsonError::NonDereferenceableHref(href));
        }
        Ok(Crs::Linked { href, link_type })
    }
}

/// Whether `href` is an absolute URI or a relative reference that resolves
/// against some base.
fn is_dereferenceable(href: &str) -> bool {
    match Url::parse(href) {
        Ok(_) => true,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse("http://localhost/")
            .and_then(|base| base.join(href))
            .is_ok(),
        Err(_) => false,
    }
}

impl Serialize for Crs {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Crs::Unspecified => serializer.serialize_unit(),
            Crs::Named { name } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "name")?;
                map.serialize_entry("properties", &NamedProperties { name })?;
                map.end()
            }
            Crs::Linked { href, link_type } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "link")?;
                map.serialize_entry(
                    "properties",
                    &LinkedProperties {
                        href,
                        link_type: link_type.as_deref(),
                    },
                )?;
                map.end()
            }
        }
    }
}

#[derive(Serialize)]
struct NamedProperties<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct LinkedProperties<'a> {
    href: &'a str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    link_type: Option<&'a str>,
}

impl TryFrom<&Value> for Crs {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        let object = match value {
            Value::Null => return Ok(Crs::Unspecified),
            Value::Object(object) => object,
            other => {
                return Err(GeoJsonError::UnexpectedJson {
                    expected: "a crs object or null",
                    got: crate::codec::json_type_name(other),
                })
            }
        };

        let tag = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(GeoJsonError::MissingType)?;
        let properties = object
            .get("properties")
            .and_then(Value::as_object)
            .ok_or(GeoJsonError::MissingMember("properties"))?;

        match tag {
            "name" => {
                let name = properties
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or(GeoJsonError::MissingMember("name"))?;
                Crs::named(name)
            }
            "link" => {
                let href = properties
                    .get("href")
                    .and_then(Value::as_str)
                    .ok_or(GeoJsonError::MissingMember("href"))?;
                match properties.get("type").and_then(Value::as_str) {
                    Some(link_type) => Crs::linked_with_type(href, link_type),
                    None => Crs::linked(href),
                }
            }
            other => Err(GeoJsonError::UnknownCrsType(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Crs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Crs::try_from(&value).map_err(serde::de::Error::custom)
    }
}
