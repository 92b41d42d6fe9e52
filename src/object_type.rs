use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoJsonError;

/// The `"type"` discriminator carried by every GeoJSON object.
///
/// The wire form is the canonical capitalized tag name; parsing is
/// case-insensitive. The tag is always derived from an object's variant and
/// never settable independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    /// A single position.
    Point,
    /// A collection of points.
    MultiPoint,
    /// Two or more connected positions.
    LineString,
    /// A collection of line strings.
    MultiLineString,
    /// One or more closed rings.
    Polygon,
    /// A collection of polygons.
    MultiPolygon,
    /// A heterogeneous collection of geometries.
    GeometryCollection,
    /// Vendor extension: a center position with a radius in meters.
    Circle,
    /// A geometry bound to a properties bag, an options bag and an id.
    Feature,
    /// Vendor extension: a feature with an element count and a bounding box.
    Cluster,
    /// An ordered sequence of features and clusters.
    FeatureCollection,
}

impl ObjectType {
    const ALL: [ObjectType; 11] = [
        ObjectType::Point,
        ObjectType::MultiPoint,
        ObjectType::LineString,
        ObjectType::MultiLineString,
        ObjectType::Polygon,
        ObjectType::MultiPolygon,
        ObjectType::GeometryCollection,
        ObjectType::Circle,
        ObjectType::Feature,
        ObjectType::Cluster,
        ObjectType::FeatureCollection,
    ];

    /// The canonical capitalized tag written to the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Point => "Point",
            ObjectType::MultiPoint => "MultiPoint",
            ObjectType::LineString => "LineString",
            ObjectType::MultiLineString => "MultiLineString",
            ObjectType::Polygon => "Polygon",
            ObjectType::MultiPolygon => "MultiPolygon",
            ObjectType::GeometryCollection => "GeometryCollection",
            ObjectType::Circle => "Circle",
            ObjectType::Feature => "Feature",
            ObjectType::Cluster => "Cluster",
            ObjectType::FeatureCollection => "FeatureCollection",
        }
    }

    /// Whether this tag names one of the eight geometry variants.
    pub fn is_geometry(&self) -> bool {
        !matches!(
            self,
            ObjectType::Feature | ObjectType::Cluster | ObjectType::FeatureCollection
        )
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeoJsonError::UnknownType(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "featurecollection".parse::<ObjectType>().unwrap(),
            ObjectType::FeatureCollection
        );
        assert_eq!("POINT".parse::<ObjectType>().unwrap(), ObjectType::Point);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "UnknownThing".parse::<ObjectType>().unwrap_err();
        assert!(matches!(err, GeoJsonError::UnknownType(tag) if tag == "UnknownThing"));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(ObjectType::MultiLineString.to_string(), "MultiLineString");
    }
}
