//! Defines [`GeoJsonError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::object_type::ObjectType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoJsonError {
    /// A JSON object that should carry a `"type"` discriminator does not.
    #[error("json must contain a \"type\" member")]
    MissingType,

    /// The `"type"` discriminator does not name a known object type.
    #[error("\"{0}\" is not a known geojson object type")]
    UnknownType(String),

    /// A known `"type"` appeared in a context that does not allow it.
    #[error("{got} is not allowed here: expected {context}")]
    UnexpectedType {
        /// What the decoding context accepts.
        context: &'static str,
        /// The tag that actually arrived.
        got: ObjectType,
    },

    /// The JSON shape does not match what the decoder requires.
    #[error("expected {expected}, got {got}")]
    UnexpectedJson {
        /// The shape the decoder requires.
        expected: &'static str,
        /// The JSON token that actually arrived.
        got: &'static str,
    },

    /// A required object member is absent.
    #[error("missing required \"{0}\" member")]
    MissingMember(&'static str),

    /// A coordinates value was the JSON literal `null`.
    #[error("coordinates cannot be null")]
    NullCoordinates,

    /// Positions are arrays of exactly 2 or 3 numbers.
    #[error("a position requires 2 or 3 coordinates, got {0}")]
    PositionArity(usize),

    /// A coordinate array element was not a number.
    #[error("coordinates must be numbers")]
    NonNumericCoordinate,

    /// Bounding box arrays hold exactly 4 numbers.
    #[error("a bounding box requires exactly 4 coordinates, got {0}")]
    BoundingBoxArity(usize),

    /// Malformed comma-separated bounding box text.
    #[error("invalid bounding box string {0:?}: expected 4 comma-separated numbers")]
    InvalidBoundingBoxString(String),

    /// LineStrings carry at least two positions.
    #[error("a LineString requires at least 2 positions, got {0}")]
    LineStringTooShort(usize),

    /// Polygon rings are closed LineStrings with four or more positions.
    #[error("polygon rings must be closed LineStrings with 4 or more positions")]
    OpenRing,

    /// Named CRS names and linked CRS hrefs must be non-empty.
    #[error("crs \"{0}\" must not be empty")]
    EmptyCrsProperty(&'static str),

    /// Linked CRS hrefs must be dereferenceable URIs.
    #[error("\"{0}\" must be a dereferenceable URI")]
    NonDereferenceableHref(String),

    /// The `"type"` of a CRS object must be `"name"` or `"link"`.
    #[error("\"{0}\" is not a known crs type")]
    UnknownCrsType(String),

    /// A property source must serialize to a JSON object.
    #[error("property sources must serialize to a json object")]
    InvalidPropertySource,

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoJsonError>;
