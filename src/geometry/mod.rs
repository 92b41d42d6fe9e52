//! The eight geometry variants and the geometry-only dispatch.

use std::fmt::Debug;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::codec::{self, JsonObject};
use crate::crs::Crs;
use crate::error::{GeoJsonError, Result};
use crate::object_type::ObjectType;

pub use circle::Circle;
pub use geometry_collection::GeometryCollection;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

mod circle;
mod geometry_collection;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;

/// Implemented by every type usable as the geometry of a feature: the eight
/// variant structs and the [`Geometry`] sum type itself.
pub trait GeometryObject:
    Clone + Debug + Serialize + for<'a> TryFrom<&'a Value, Error = GeoJsonError>
{
    /// The `"type"` tag of this object.
    fn object_type(&self) -> ObjectType;

    /// The attached coordinate reference system, if any.
    fn crs(&self) -> Option<&Crs>;
}

/// Any of the eight geometry variants.
///
/// This is the geometry-only dispatch view: decoding accepts every geometry
/// tag and rejects `Feature`, `Cluster` and `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    Circle(Circle),
}

impl Geometry {
    /// The `"type"` tag of the wrapped variant.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Geometry::Point(_) => ObjectType::Point,
            Geometry::MultiPoint(_) => ObjectType::MultiPoint,
            Geometry::LineString(_) => ObjectType::LineString,
            Geometry::MultiLineString(_) => ObjectType::MultiLineString,
            Geometry::Polygon(_) => ObjectType::Polygon,
            Geometry::MultiPolygon(_) => ObjectType::MultiPolygon,
            Geometry::GeometryCollection(_) => ObjectType::GeometryCollection,
            Geometry::Circle(_) => ObjectType::Circle,
        }
    }

    /// The attached coordinate reference system, if any.
    pub fn crs(&self) -> Option<&Crs> {
        match self {
            Geometry::Point(g) => g.crs(),
            Geometry::MultiPoint(g) => g.crs(),
            Geometry::LineString(g) => g.crs(),
            Geometry::MultiLineString(g) => g.crs(),
            Geometry::Polygon(g) => g.crs(),
            Geometry::MultiPolygon(g) => g.crs(),
            Geometry::GeometryCollection(g) => g.crs(),
            Geometry::Circle(g) => g.crs(),
        }
    }

    pub(crate) fn from_json_object(object: &JsonObject) -> Result<Self> {
        match codec::object_type_of(object)? {
            ObjectType::Point => Ok(Geometry::Point(Point::from_json_object(object)?)),
            ObjectType::MultiPoint => {
                Ok(Geometry::MultiPoint(MultiPoint::from_json_object(object)?))
            }
            ObjectType::LineString => {
                Ok(Geometry::LineString(LineString::from_json_object(object)?))
            }
            ObjectType::MultiLineString => Ok(Geometry::MultiLineString(
                MultiLineString::from_json_object(object)?,
            )),
            ObjectType::Polygon => Ok(Geometry::Polygon(Polygon::from_json_object(object)?)),
            ObjectType::MultiPolygon => Ok(Geometry::MultiPolygon(MultiPolygon::from_json_object(
                object,
            )?)),
            ObjectType::GeometryCollection => Ok(Geometry::GeometryCollection(
                GeometryCollection::from_json_object(object)?,
            )),
            ObjectType::Circle => Ok(Geometry::Circle(Circle::from_json_object(object)?)),
            got => Err(GeoJsonError::UnexpectedType {
                context: "a geometry object",
                got,
            }),
        }
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Geometry::Point(g) => g.serialize(serializer),
            Geometry::MultiPoint(g) => g.serialize(serializer),
            Geometry::LineString(g) => g.serialize(serializer),
            Geometry::MultiLineString(g) => g.serialize(serializer),
            Geometry::Polygon(g) => g.serialize(serializer),
            Geometry::MultiPolygon(g) => g.serialize(serializer),
            Geometry::GeometryCollection(g) => g.serialize(serializer),
            Geometry::Circle(g) => g.serialize(serializer),
        }
    }
}

codec::impl_value_conversions!(Geometry);

impl FromStr for Geometry {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Geometry::try_from(&value)
    }
}

impl GeometryObject for Geometry {
    fn object_type(&self) -> ObjectType {
        Geometry::object_type(self)
    }

    fn crs(&self) -> Option<&Crs> {
        Geometry::crs(self)
    }
}

macro_rules! impl_geometry_variant {
    ($variant:ident) => {
        impl From<$variant> for Geometry {
            fn from(geometry: $variant) -> Self {
                Geometry::$variant(geometry)
            }
        }

        impl GeometryObject for $variant {
            fn object_type(&self) -> ObjectType {
                ObjectType::$variant
            }

            fn crs(&self) -> Option<&Crs> {
                $variant::crs(self)
            }
        }
    };
}

impl_geometry_variant!(Point);
impl_geometry_variant!(MultiPoint);
impl_geometry_variant!(LineString);
impl_geometry_variant!(MultiLineString);
impl_geometry_variant!(Polygon);
impl_geometry_variant!(MultiPolygon);
impl_geometry_variant!(GeometryCollection);
impl_geometry_variant!(Circle);
