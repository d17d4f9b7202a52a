//! Defines the number kinds and the raw payloads that typed numbers carry.
//!
//! Every [AlgebraNumber](number::AlgebraNumber) has a [NumberKind] and a [Value]:
//! - [NumberKind::Natural] numbers carry a positive [Integer].
//! - [NumberKind::Integer] numbers carry any [Integer], including zero.
//! - [NumberKind::Real] numbers carry an `f64`.
//!
//! The kinds are ordered `Natural < Integer < Real`. Operations on numbers of
//! different kinds promote the result to the widest kind among the operands.
pub mod integer;
pub mod number;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use integer::Integer;

use crate::error::Error;
use crate::printer::{PrintOptions, Printable};

/// The kind of an algebraic number. The derived ordering is the promotion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberKind {
    Natural,
    Integer,
    Real,
}

impl NumberKind {
    pub const ALL: [NumberKind; 3] = [NumberKind::Natural, NumberKind::Integer, NumberKind::Real];

    /// The name used to refer to this kind, as accepted by [FromStr].
    pub fn name(&self) -> &'static str {
        match self {
            NumberKind::Natural => "natural",
            NumberKind::Integer => "integer",
            NumberKind::Real => "real",
        }
    }

    /// Return the widest of the two kinds.
    #[inline]
    pub fn promote(self, other: NumberKind) -> NumberKind {
        self.max(other)
    }
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumberKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::InvalidKind(s.to_owned()))
    }
}

/// A raw numeric payload: either an exact whole number or a float.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(Integer),
    Real(f64),
}

macro_rules! value_from_whole {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(value: $t) -> Self {
                    Value::Integer(Integer::from(value))
                }
            }
        )*
    };
}

value_from_whole!(i8, i16, i32, i64, i128, u8, u16, u32, u64, Integer, rug::Integer);

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Real(value as f64)
    }
}

impl Value {
    pub fn zero() -> Value {
        Value::Integer(Integer::zero())
    }

    pub fn one() -> Value {
        Value::Integer(Integer::one())
    }

    #[inline]
    pub fn is_whole_number(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Integer(i) => i.is_zero(),
            Value::Real(r) => *r == 0.,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Integer(i) => i.to_f64(),
            Value::Real(r) => *r,
        }
    }

    /// Check if the value has no fractional part. Non-finite floats have
    /// an undefined fractional part and are never whole.
    pub fn has_zero_fraction(&self) -> bool {
        match self {
            Value::Integer(_) => true,
            Value::Real(r) => r.is_finite() && r.fract() == 0.,
        }
    }

    /// Convert a float without fractional part into an exact whole number.
    /// Other values are returned unchanged.
    pub fn into_whole_if_exact(self) -> Value {
        match self {
            Value::Real(r) if r.is_finite() && r.fract() == 0. => match rug::Integer::from_f64(r) {
                Some(i) => Value::Integer(i.into()),
                None => Value::Real(r),
            },
            v => v,
        }
    }

    pub fn add(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a + b),
            (a, b) => Value::Real(a.to_f64() + b.to_f64()),
        }
    }

    pub fn sub(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a - b),
            (a, b) => Value::Real(a.to_f64() - b.to_f64()),
        }
    }

    pub fn mul(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a * b),
            (a, b) => Value::Real(a.to_f64() * b.to_f64()),
        }
    }
}

impl Printable for Value {
    fn format<W: std::fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => match opts.precision {
                Some(p) => write!(f, "{:.*}", p, r),
                None => write!(f, "{:?}", r),
            },
        }
    }
}

crate::impl_display_with_printer!(Value);

#[cfg(test)]
mod test {
    use super::{integer::Integer, NumberKind, Value};
    use crate::error::Error;

    #[test]
    fn kind_order() {
        assert!(NumberKind::Natural < NumberKind::Integer);
        assert!(NumberKind::Integer < NumberKind::Real);
        assert_eq!(NumberKind::Natural.promote(NumberKind::Real), NumberKind::Real);
        assert_eq!(NumberKind::Integer.promote(NumberKind::Natural), NumberKind::Integer);
    }

    #[test]
    fn kind_names() {
        for k in NumberKind::ALL {
            assert_eq!(k.name().parse::<NumberKind>(), Ok(k));
        }

        assert_eq!(
            "complex".parse::<NumberKind>(),
            Err(Error::InvalidKind("complex".into()))
        );
    }

    #[test]
    fn mixed_arithmetic() {
        let a = Value::from(3);
        let b = Value::from(2.5);

        assert_eq!(a.add(&b), Value::Real(5.5));
        assert_eq!(a.mul(&Value::from(4)), Value::Integer(Integer::from(12)));
        assert_eq!(a.sub(&Value::from(5)), Value::from(-2));
    }

    #[test]
    fn whole_conversion() {
        assert_eq!(Value::Real(4.0).into_whole_if_exact(), Value::from(4));
        assert_eq!(Value::Real(4.5).into_whole_if_exact(), Value::Real(4.5));
        assert!(!Value::Real(f64::INFINITY).has_zero_fraction());
        assert!(!Value::Real(f64::NAN).has_zero_fraction());
        assert!(Value::Real(-0.0).is_zero());
    }

    #[test]
    fn printing() {
        assert_eq!(Value::from(7).to_string(), "7");
        assert_eq!(Value::from(3.1).to_string(), "3.1");
        assert_eq!(Value::from(5.0).to_string(), "5.0");
    }
}
