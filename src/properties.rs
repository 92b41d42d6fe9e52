//! Property and options bags for features and clusters.

use serde::Serialize;
use serde_json::Value;

use crate::error::{GeoJsonError, Result};

/// An insertion-ordered string-keyed bag of JSON values, used for the
/// `properties` and `options` members of features and clusters.
pub type PropertyMap = serde_json::Map<String, Value>;

/// Builds a [`PropertyMap`] from any value that serializes to a JSON object:
/// every field becomes an entry, in declaration order, with its serialized
/// value stored as-is.
///
/// A value serializing to `null` (e.g. `()` or `Option::None`) yields an
/// empty map, never a missing one. A [`PropertyMap`] needs no conversion and
/// is accepted directly wherever a bag is expected.
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Style {
///     fill: bool,
///     #[serde(rename = "fillColor")]
///     fill_color: String,
/// }
///
/// let map = geojson_model::properties::to_map(&Style {
///     fill: true,
///     fill_color: "#a0a0a0".to_string(),
/// })?;
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["fill", "fillColor"]);
/// # Ok::<(), geojson_model::GeoJsonError>(())
/// ```
pub fn to_map<T: Serialize>(source: &T) -> Result<PropertyMap> {
    match serde_json::to_value(source)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(PropertyMap::new()),
        _ => Err(GeoJsonError::InvalidPropertySource),
    }
}

#[cfg(test)]
mod test {
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Team {
        name: String,
        size: u32,
        lead: Option<String>,
    }

    #[test]
    fn fields_become_entries_in_declaration_order() {
        let map = to_map(&Team {
            name: "Foo".to_string(),
            size: 6,
            lead: None,
        })
        .unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["name", "size", "lead"]);
        assert_eq!(map["name"], json!("Foo"));
        assert_eq!(map["lead"], Value::Null);
    }

    #[test]
    fn null_sources_yield_an_empty_map() {
        assert!(to_map(&()).unwrap().is_empty());
        assert!(to_map(&Option::<Team>::None).unwrap().is_empty());
    }

    #[test]
    fn non_object_sources_are_rejected() {
        assert!(matches!(
            to_map(&42),
            Err(GeoJsonError::InvalidPropertySource)
        ));
        assert!(matches!(
            to_map(&["a", "b"]),
            Err(GeoJsonError::InvalidPropertySource)
        ));
    }

    #[test]
    fn nested_values_are_stored_as_is() {
        #[derive(Serialize)]
        struct Outer {
            inner: Team,
        }

        let map = to_map(&Outer {
            inner: Team {
                name: "Bar".to_string(),
                size: 2,
                lead: Some("b".to_string()),
            },
        })
        .unwrap();
        assert!(map["inner"].is_object());
    }
}
