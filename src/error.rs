//! The error conditions of number construction, operations, polynomials and geometry.

use crate::{domains::NumberKind, object::ObjectKind};

/// All failures that the library can report. Every error is raised at the point
/// of violation and returned to the caller unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("there is no algebraic number kind named '{0}'")]
    InvalidKind(String),

    #[error("{value} is not a valid {kind} value")]
    InvalidValue { kind: NumberKind, value: String },

    #[error("there is no algebraic operation named '{0}'")]
    InvalidOperation(String),

    #[error("operation arguments must be algebraic numbers, found {0}")]
    InvalidArguments(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("polynomial coefficients must be a non-empty sequence of numbers: {0}")]
    InvalidCoefficients(String),

    #[error("polynomial argument must be an algebraic number, found a {0}")]
    InvalidArgument(ObjectKind),

    #[error("number of dimensions must be a non-negative integer, found {0}")]
    InvalidDimensions(String),

    #[error("coordinates must be {expected} numeric elements: {reason}")]
    InvalidCoordinates { expected: usize, reason: String },

    #[error("distances can only be computed to points, found a {0}")]
    NotPoints(ObjectKind),

    #[error("geometry space must contain only geometric objects, found a {0}")]
    NotGeometricObject(ObjectKind),

    #[error("geometry space can't contain another geometry space")]
    NestedSpace,

    #[error("space has {expected} dimensions but the object has {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("index {index} is out of range for a space with {len} objects")]
    IndexOutOfRange { index: String, len: usize },
}

/// A result whose error defaults to [Error].
pub type Result<T, E = Error> = std::result::Result<T, E>;
