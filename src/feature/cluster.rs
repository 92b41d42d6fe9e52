use std::hash::{Hash, Hasher};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::bounding_box::BoundingBox;
use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::{GeoJsonError, Result};
use crate::geometry::Geometry;
use crate::object_type::ObjectType;
use crate::properties::PropertyMap;

/// The dynamically-typed cluster: a [`Feature`](crate::Feature) shape plus an
/// element count and a bounding box.
///
/// Shares the loose equality contract of the dynamically-typed feature:
/// geometry alone decides equality and hashing.
#[derive(Debug, Clone)]
pub struct Cluster {
    geometry: Option<Geometry>,
    properties: PropertyMap,
    options: PropertyMap,
    id: Option<String>,
    number: i64,
    bounding_box: BoundingBox,
    crs: Option<Crs>,
}

impl Cluster {
    pub fn new(geometry: Option<Geometry>, number: i64, bounding_box: BoundingBox) -> Self {
        Cluster {
            geometry,
            properties: PropertyMap::new(),
            options: PropertyMap::new(),
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

    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

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

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn options(&self) -> &PropertyMap {
        &self.options
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// How many elements the cluster aggregates.
    pub fn number(&self) -> i64 {
        self.number
    }

    /// The extent covered by the clustered elements.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::Cluster)?;
        let number_value = codec::required_member(object, "number")?;
        let number = number_value
            .as_i64()
            .ok_or(GeoJsonError::UnexpectedJson {
                expected: "an integer \"number\" member",
                got: codec::json_type_name(number_value),
            })?;
        Ok(Cluster {
            geometry: super::geometry_member(object)?,
            properties: super::bag_member(object, "properties")?,
            options: super::bag_member(object, "options")?,
            id: codec::optional_id(object)?,
            number,
            bounding_box: BoundingBox::try_from(codec::required_member(object, "bbox")?)?,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl PartialEq for Cluster {
    fn eq(&self, other: &Self) -> bool {
        self.geometry == other.geometry
    }
}

impl Eq for Cluster {}

impl Hash for Cluster {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.geometry.hash(state);
    }
}

impl Serialize for Cluster {
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

codec::impl_value_conversions!(Cluster);

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::bounding_box::BoundingBoxKind;
    use crate::geometry::Circle;
    use crate::position::Position;

    use super::*;

    fn circle_cluster() -> Cluster {
        let mut properties = PropertyMap::new();
        properties.insert("Name".to_string(), json!("Foo"));
        let mut options = PropertyMap::new();
        options.insert("Foo".to_string(), json!("Bar"));

        Cluster::new(
            Some(Geometry::Circle(Circle::new(
                Position::new(37.623422, 55.771145),
                48.0,
            ))),
            42,
            BoundingBox::new(
                BoundingBoxKind::BottomLeftTopRight,
                Position::new(37.344074, 55.708352),
                Position::new(37.670746, 55.801956),
            ),
        )
        .with_id("test-id")
        .with_properties(properties)
        .with_options(options)
    }

    #[test]
    fn wire_form_adds_number_and_bbox() {
        assert_eq!(
            serde_json::to_value(circle_cluster()).unwrap(),
            json!({
                "type": "Cluster",
                "id": "test-id",
                "geometry": {
                    "type": "Circle",
                    "coordinates": [37.623422, 55.771145],
                    "radius": 48.0
                },
                "properties": {"Name": "Foo"},
                "options": {"Foo": "Bar"},
                "number": 42,
                "bbox": [37.344074, 55.708352, 37.670746, 55.801956]
            })
        );
    }

    #[test]
    fn deserializes_a_circle_cluster() {
        let cluster: Cluster =
            serde_json::from_value(serde_json::to_value(circle_cluster()).unwrap()).unwrap();

        assert_eq!(cluster.id(), Some("test-id"));
        assert_eq!(cluster.number(), 42);
        assert_eq!(cluster.properties()["Name"], json!("Foo"));
        assert_eq!(cluster.options()["Foo"], json!("Bar"));
        assert_eq!(
            cluster.bounding_box(),
            &BoundingBox::new(
                BoundingBoxKind::BottomLeftTopRight,
                Position::new(37.344074, 55.708352),
                Position::new(37.670746, 55.801956),
            )
        );
        let geometry = cluster.geometry().unwrap();
        assert_eq!(geometry.object_type(), ObjectType::Circle);
    }

    #[test]
    fn equality_considers_geometry_alone() {
        let left = circle_cluster();
        let mut right = circle_cluster();
        right = right.with_id("other-id");
        assert_eq!(left, right);

        let different = Cluster::new(None, 42, left.bounding_box().clone());
        assert_ne!(left, different);
    }

    #[test]
    fn missing_bbox_is_rejected() {
        let err = Cluster::try_from(&json!({
            "type": "Cluster",
            "geometry": null,
            "properties": {},
            "options": {},
            "number": 1
        }))
        .unwrap_err();
        assert!(matches!(err, GeoJsonError::MissingMember("bbox")));
    }
}
