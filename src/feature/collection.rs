use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::{GeoJsonError, Result};
use crate::feature::{Cluster, Feature};
use crate::geometry::Geometry;
use crate::object_type::ObjectType;

/// An element of a [`FeatureCollection`]: either a feature or a cluster.
///
/// Exposes the two members the collection needs from any element — its id
/// and its geometry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureCollectionItem {
    Feature(Feature),
    Cluster(Cluster),
}

impl FeatureCollectionItem {
    pub fn id(&self) -> Option<&str> {
        match self {
            FeatureCollectionItem::Feature(feature) => feature.id(),
            FeatureCollectionItem::Cluster(cluster) => cluster.id(),
        }
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            FeatureCollectionItem::Feature(feature) => feature.geometry(),
            FeatureCollectionItem::Cluster(cluster) => cluster.geometry(),
        }
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        match codec::object_type_of(object)? {
            ObjectType::Feature => Ok(FeatureCollectionItem::Feature(Feature::from_json_object(
                object,
            )?)),
            ObjectType::Cluster => Ok(FeatureCollectionItem::Cluster(Cluster::from_json_object(
                object,
            )?)),
            got => Err(GeoJsonError::UnexpectedType {
                context: "a feature or cluster",
                got,
            }),
        }
    }
}

impl From<Feature> for FeatureCollectionItem {
    fn from(feature: Feature) -> Self {
        FeatureCollectionItem::Feature(feature)
    }
}

impl From<Cluster> for FeatureCollectionItem {
    fn from(cluster: Cluster) -> Self {
        FeatureCollectionItem::Cluster(cluster)
    }
}

impl Serialize for FeatureCollectionItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FeatureCollectionItem::Feature(feature) => feature.serialize(serializer),
            FeatureCollectionItem::Cluster(cluster) => cluster.serialize(serializer),
        }
    }
}

codec::impl_value_conversions!(FeatureCollectionItem);

/// An ordered sequence of heterogeneous features and clusters.
///
/// The feature list is the one externally mutable surface of the model:
/// callers may append to it through [`features_mut`] or [`push`]. No
/// internal locking is provided; shared concurrent mutation requires
/// external synchronization.
///
/// Equality is order-sensitive element-wise equality (under each element's
/// loose contract) together with the crs.
///
/// [`features_mut`]: FeatureCollection::features_mut
/// [`push`]: FeatureCollection::push
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FeatureCollection {
    features: Vec<FeatureCollectionItem>,
    crs: Option<Crs>,
}

impl FeatureCollection {
    pub fn new(features: Vec<FeatureCollectionItem>) -> Self {
        FeatureCollection {
            features,
            crs: None,
        }
    }

    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn features(&self) -> &[FeatureCollectionItem] {
        &self.features
    }

    /// The growable feature list.
    pub fn features_mut(&mut self) -> &mut Vec<FeatureCollectionItem> {
        &mut self.features
    }

    /// Appends a feature or cluster.
    pub fn push(&mut self, item: impl Into<FeatureCollectionItem>) {
        self.features.push(item.into());
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        codec::expect_type(object, ObjectType::FeatureCollection)?;
        let features =
            codec::elements(codec::required_member(object, "features")?, "an array of features")?
                .iter()
                .map(|item| FeatureCollectionItem::from_json_object(codec::expect_object(item)?))
                .collect::<Result<Vec<_>>>()?;
        Ok(FeatureCollection {
            features,
            crs: codec::optional_crs(object)?,
        })
    }
}

impl Serialize for FeatureCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", ObjectType::FeatureCollection.as_str())?;
        if let Some(crs) = &self.crs {
            map.serialize_entry("crs", crs)?;
        }
        map.serialize_entry("features", &self.features)?;
        map.end()
    }
}

codec::impl_value_conversions!(FeatureCollection);

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::bounding_box::{BoundingBox, BoundingBoxKind};
    use crate::geometry::Point;
    use crate::position::Position;

    use super::*;

    fn point_feature(longitude: f64) -> Feature {
        Feature::new(Some(Geometry::Point(Point::new(Position::new(
            longitude, 10.1,
        )))))
    }

    fn cluster() -> Cluster {
        Cluster::new(
            Some(Geometry::Point(Point::new(Position::new(1.0, 2.0)))),
            7,
            BoundingBox::new(
                BoundingBoxKind::BottomLeftTopRight,
                Position::new(0.0, 0.0),
                Position::new(2.0, 3.0),
            ),
        )
    }

    #[test]
    fn empty_collection_wire_form() {
        let collection = FeatureCollection::default();
        assert_eq!(
            serde_json::to_value(&collection).unwrap(),
            json!({"type": "FeatureCollection", "features": []})
        );
    }

    #[test]
    fn explicit_unspecified_crs_serializes_to_null() {
        let collection = FeatureCollection::default().with_crs(Crs::Unspecified);
        assert_eq!(
            serde_json::to_value(&collection).unwrap(),
            json!({"type": "FeatureCollection", "crs": null, "features": []})
        );

        let back: FeatureCollection =
            serde_json::from_str(r#"{"type":"FeatureCollection","crs":null,"features":[]}"#)
                .unwrap();
        assert_eq!(back.crs(), Some(&Crs::Unspecified));
    }

    #[test]
    fn an_absent_crs_member_decodes_to_none() {
        let back: FeatureCollection =
            serde_json::from_str(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert_eq!(back.crs(), None);
    }

    #[test]
    fn holds_features_and_clusters_in_order() {
        let mut collection = FeatureCollection::default();
        collection.push(point_feature(125.6));
        collection.push(cluster());
        assert_eq!(collection.features().len(), 2);
        assert_eq!(collection.features()[1].id(), None);

        let json = serde_json::to_string(&collection).unwrap();
        let back: FeatureCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, collection);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut left = FeatureCollection::default();
        left.push(point_feature(1.0));
        left.push(point_feature(2.0));

        let mut right = FeatureCollection::default();
        right.push(point_feature(2.0));
        right.push(point_feature(1.0));

        assert_ne!(left, right);
    }

    #[test]
    fn item_exposes_id_and_geometry() {
        let item = FeatureCollectionItem::from(point_feature(125.6).with_id("test-id"));
        assert_eq!(item.id(), Some("test-id"));
        assert!(item.geometry().is_some());
    }

    #[test]
    fn missing_features_member_is_rejected() {
        let err =
            FeatureCollection::try_from(&json!({"type": "FeatureCollection"})).unwrap_err();
        assert!(matches!(err, GeoJsonError::MissingMember("features")));
    }

    #[test]
    fn nested_geometries_are_rejected_as_items() {
        let err = FeatureCollection::try_from(&json!({
            "type": "FeatureCollection",
            "features": [{"type": "Point", "coordinates": [1.0, 2.0]}]
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            GeoJsonError::UnexpectedType {
                got: ObjectType::Point,
                ..
            }
        ));
    }
}
