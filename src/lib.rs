//! Algeo is a small library of typed numbers and points.
//!
//! It can be used to perform arithmetic on natural, integer and real numbers
//! with automatic kind promotion, to evaluate polynomials and to compute
//! distances between points in an n-dimensional space.
//!
//! For example:
//!
//! ```
//! use algeo::{
//!     domains::number::AlgebraNumber,
//!     geometry::{Point, Space},
//!     operation::{AlgebraOperation, OperationKind},
//!     poly::Polynomial,
//! };
//!
//! let ten = AlgebraNumber::natural(10).unwrap();
//! let two = AlgebraNumber::natural(2).unwrap();
//! let q = AlgebraOperation::new(OperationKind::Divide)
//!     .evaluate(&[ten, two])
//!     .unwrap();
//! println!("10 / 2 = {}", q);
//!
//! let p = Polynomial::new([1, 2, 3, 4]).unwrap();
//! println!("{} at 1 = {}", p, p.evaluate(&AlgebraNumber::default()));
//!
//! let mut space = Space::new(3).unwrap();
//! space.add_point(Point::new(3, [1., 2., 3.1]).unwrap()).unwrap();
//! println!("{}", space.contents_string(&Default::default()));
//! ```
//!
//! The library logs its decisions with [tracing] at the debug level.

pub mod domains;
pub mod error;
pub mod geometry;
pub mod object;
pub mod operation;
pub mod poly;
pub mod printer;

pub use error::{Error, Result};
