//! Dynamically typed objects, for callers that do not know the type of their
//! arguments in advance. Every operation that accepts an [Object] checks its
//! [ObjectKind] and reports the matching error when it is of the wrong kind.
use std::fmt::{self, Display, Formatter};

use smartstring::alias::String;

use crate::{
    domains::{number::AlgebraNumber, Value},
    geometry::{Point, Space},
    operation::AlgebraOperation,
    poly::Polynomial,
    printer::{PrintOptions, Printable},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A boolean. Booleans are never accepted where a number is expected.
    Boolean(bool),
    /// A raw number without a kind.
    Scalar(Value),
    Text(String),
    Number(AlgebraNumber),
    Operation(AlgebraOperation),
    Polynomial(Polynomial),
    Point(Point),
    Space(Space),
}

/// The type tag of an [Object].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Boolean,
    Scalar,
    Text,
    Number,
    Operation,
    Polynomial,
    Point,
    Space,
}

impl ObjectKind {
    /// All known object kinds.
    pub const ALL: [ObjectKind; 8] = [
        ObjectKind::Boolean,
        ObjectKind::Scalar,
        ObjectKind::Text,
        ObjectKind::Number,
        ObjectKind::Operation,
        ObjectKind::Polynomial,
        ObjectKind::Point,
        ObjectKind::Space,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Boolean => "boolean",
            ObjectKind::Scalar => "scalar",
            ObjectKind::Text => "text",
            ObjectKind::Number => "algebraic number",
            ObjectKind::Operation => "algebraic operation",
            ObjectKind::Polynomial => "polynomial",
            ObjectKind::Point => "point",
            ObjectKind::Space => "space",
        }
    }

    /// Algebraic objects are numbers, operations and polynomials.
    pub fn is_algebraic(&self) -> bool {
        matches!(
            self,
            ObjectKind::Number | ObjectKind::Operation | ObjectKind::Polynomial
        )
    }

    /// Geometric objects are points and spaces.
    pub fn is_geometric(&self) -> bool {
        matches!(self, ObjectKind::Point | ObjectKind::Space)
    }
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Object {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::Scalar(_) => ObjectKind::Scalar,
            Object::Text(_) => ObjectKind::Text,
            Object::Number(_) => ObjectKind::Number,
            Object::Operation(_) => ObjectKind::Operation,
            Object::Polynomial(_) => ObjectKind::Polynomial,
            Object::Point(_) => ObjectKind::Point,
            Object::Space(_) => ObjectKind::Space,
        }
    }

    /// Get the raw number, if this object is a scalar.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Object::Scalar(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! object_from {
    ($($v:ident: $t:ty),*) => {
        $(
            impl From<$t> for Object {
                #[inline]
                fn from(value: $t) -> Self {
                    Object::$v(value)
                }
            }
        )*
    };
}

object_from!(
    Boolean: bool,
    Scalar: Value,
    Text: String,
    Number: AlgebraNumber,
    Operation: AlgebraOperation,
    Polynomial: Polynomial,
    Point: Point,
    Space: Space
);

macro_rules! object_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Object {
                #[inline]
                fn from(value: $t) -> Self {
                    Object::Scalar(value.into())
                }
            }
        )*
    };
}

object_from_scalar!(i32, i64, u32, u64, f64);

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::Text(value.into())
    }
}

impl Printable for Object {
    fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        match self {
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Scalar(v) => v.format(opts, f),
            Object::Text(t) => write!(f, "{:?}", t.as_str()),
            Object::Number(n) => n.format(opts, f),
            Object::Operation(o) => o.format(opts, f),
            Object::Polynomial(p) => p.format(opts, f),
            Object::Point(p) => p.format(opts, f),
            Object::Space(s) => s.format(opts, f),
        }
    }
}

crate::impl_display_with_printer!(Object);
