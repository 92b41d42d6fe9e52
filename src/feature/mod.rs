//! Features, clusters and feature collections.
//!
//! Feature and cluster each come in two forms with different equality
//! contracts: the dynamically-typed [`Feature`]/[`Cluster`] compare by
//! geometry alone, while the generic [`TypedFeature`]/[`TypedCluster`]
//! compare every member structurally.

use serde_json::Value;

use crate::codec::{self, JsonObject};
use crate::error::{GeoJsonError, Result};
use crate::geometry::Geometry;
use crate::properties::PropertyMap;

pub use cluster::Cluster;
pub use collection::{FeatureCollection, FeatureCollectionItem};
pub use feature::Feature;
pub use typed::{TypedCluster, TypedFeature};

mod cluster;
mod collection;
mod feature;
mod typed;

/// The required `"geometry"` member: present but possibly `null`.
fn geometry_member(object: &JsonObject) -> Result<Option<Geometry>> {
    match codec::required_member(object, "geometry")? {
        Value::Null => Ok(None),
        value => Ok(Some(Geometry::try_from(value)?)),
    }
}

/// A required bag member; `null` decodes to an empty map.
fn bag_member(object: &JsonObject, name: &'static str) -> Result<PropertyMap> {
    match codec::required_member(object, name)? {
        Value::Null => Ok(PropertyMap::new()),
        Value::Object(map) => Ok(map.clone()),
        other => Err(GeoJsonError::UnexpectedJson {
            expected: "a json object",
            got: codec::json_type_name(other),
        }),
    }
}
