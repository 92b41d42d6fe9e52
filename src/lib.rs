//! A typed object model for [GeoJSON](https://geojson.org/) plus a small set of
//! vendor extensions (circles, clusters, an "options" side channel and generic
//! CRS objects), with a bidirectional mapping to and from JSON text.
//!
//! Decoding inspects the `"type"` discriminator of a JSON object and
//! materializes the matching variant; encoding walks the typed object graph
//! and always derives the discriminator from the variant, so a disagreeing
//! tag is unrepresentable.
//!
//! ```
//! use geojson_model::{Feature, Geometry, Point, Position};
//!
//! let point = Point::new(Position::new(125.6, 10.1));
//! let feature = Feature::new(Some(Geometry::Point(point))).with_id("dinagat");
//!
//! let json = serde_json::to_string(&feature)?;
//! let back: Feature = serde_json::from_str(&json)?;
//! assert_eq!(feature, back);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use bounding_box::{BoundingBox, BoundingBoxKind, CoordinatesOrder};
pub use codec::{Document, GeoJson};
pub use crs::Crs;
pub use error::{GeoJsonError, Result};
pub use feature::{
    Cluster, Feature, FeatureCollection, FeatureCollectionItem, TypedCluster, TypedFeature,
};
pub use geometry::{
    Circle, Geometry, GeometryCollection, GeometryObject, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
pub use object_type::ObjectType;
pub use position::Position;
pub use properties::PropertyMap;

pub mod bounding_box;
pub mod codec;
pub mod crs;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod object_type;
pub mod position;
pub mod properties;
