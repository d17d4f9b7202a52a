//! Points in an n-dimensional space and spaces that hold them.
//!
//! ```
//! use algeo::geometry::{Point, Space};
//!
//! let mut space = Space::new(3).unwrap();
//! space.add_point(Point::new(3, [1., 2., 3.1]).unwrap()).unwrap();
//! space.add_point(Point::new(3, [2., 33., 3.1]).unwrap()).unwrap();
//!
//! let d = space.get(0).unwrap().distance(&[space.get(1).unwrap().clone()]);
//! assert!((d[0] - 31.016).abs() < 1e-3);
//! ```
pub mod point;
pub mod space;

pub use point::Point;
pub use space::Space;

use crate::{
    domains::Value,
    error::{Error, Result},
    object::Object,
    printer::{PrintOptions, Printable},
};

/// Validate a number of dimensions, which must be non-negative.
pub(crate) fn dimensions_from_i64(n_dims: i64) -> Result<usize> {
    usize::try_from(n_dims).map_err(|_| Error::InvalidDimensions(n_dims.to_string()))
}

/// Validate a dynamically typed number of dimensions, which must be a
/// non-negative whole scalar.
pub(crate) fn dimensions_from_object(n_dims: &Object) -> Result<usize> {
    let invalid = || Error::InvalidDimensions(n_dims.format_string(&PrintOptions::compact()));

    match n_dims.as_scalar() {
        Some(Value::Integer(i)) => {
            let n = i.to_i64().ok_or_else(invalid)?;
            dimensions_from_i64(n)
        }
        _ => Err(invalid()),
    }
}
