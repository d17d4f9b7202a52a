use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
};

use rug::{Float as MultiPrecisionFloat, Integer as MultiPrecisionInteger};

/// An exact whole number. Arithmetic stores values that fit in an `i64` as
/// [Integer::Small] and larger ones as [Integer::Large]. A [Integer::Large]
/// built by hand may still hold a small value, which compares, hashes and
/// tests equal to its [Integer::Small] counterpart.
#[derive(Debug, Clone)]
pub enum Integer {
    Small(i64),
    Large(MultiPrecisionInteger),
}

macro_rules! from_with_cast {
    ($($base: ty),*) => {
        $(
            impl From<$base> for Integer {
                #[inline]
                fn from(value: $base) -> Self {
                    Integer::Small(value as i64)
                }
            }

            impl PartialEq<$base> for Integer {
                #[inline]
                fn eq(&self, other: &$base) -> bool {
                    match self {
                        Integer::Small(n) => *n == *other as i64,
                        Integer::Large(r) => *r == *other as i64,
                    }
                }
            }
        )*
    };
}

from_with_cast!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Integer {
    #[inline]
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Integer::Small(value as i64)
        } else {
            Integer::Large(MultiPrecisionInteger::from(value))
        }
    }
}

impl From<i128> for Integer {
    #[inline]
    fn from(value: i128) -> Self {
        if value >= i64::MIN as i128 && value <= i64::MAX as i128 {
            Integer::Small(value as i64)
        } else {
            Integer::Large(MultiPrecisionInteger::from(value))
        }
    }
}

impl From<MultiPrecisionInteger> for Integer {
    #[inline]
    fn from(value: MultiPrecisionInteger) -> Self {
        if let Some(n) = value.to_i64() {
            Integer::Small(n)
        } else {
            Integer::Large(value)
        }
    }
}

impl Integer {
    #[inline]
    pub fn zero() -> Integer {
        Integer::Small(0)
    }

    #[inline]
    pub fn one() -> Integer {
        Integer::Small(1)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Small(n) => *n == 0,
            Integer::Large(r) => r.cmp0() == Ordering::Equal,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Integer::Small(n) => *n < 0,
            Integer::Large(r) => r.cmp0() == Ordering::Less,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Integer::Small(n) => *n > 0,
            Integer::Large(r) => r.cmp0() == Ordering::Greater,
        }
    }

    /// Convert to the nearest `f64`, rounding ties to even.
    pub fn to_f64(&self) -> f64 {
        match self {
            Integer::Small(n) => *n as f64,
            // rug::Integer::to_f64 truncates
            Integer::Large(r) => MultiPrecisionFloat::with_val(f64::MANTISSA_DIGITS, r).to_f64(),
        }
    }

    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Integer::Small(n) => Some(*n),
            Integer::Large(r) => r.to_i64(),
        }
    }

    pub fn to_multi_prec(&self) -> MultiPrecisionInteger {
        match self {
            Integer::Small(n) => MultiPrecisionInteger::from(*n),
            Integer::Large(r) => r.clone(),
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Integer::Small(n) => n.fmt(f),
            Integer::Large(r) => r.fmt(f),
        }
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Integer::Small(n1), Integer::Small(n2)) => n1 == n2,
            (Integer::Small(n1), Integer::Large(r2)) | (Integer::Large(r2), Integer::Small(n1)) => {
                *r2 == *n1
            }
            (Integer::Large(r1), Integer::Large(r2)) => r1 == r2,
        }
    }
}

impl Eq for Integer {}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Integer::Small(n) => n.hash(state),
            Integer::Large(r) => match r.to_i64() {
                Some(n) => n.hash(state),
                None => r.hash(state),
            },
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer::Small(n1), Integer::Small(n2)) => n1.cmp(n2),
            (Integer::Small(n1), Integer::Large(n2)) => {
                MultiPrecisionInteger::from(*n1).cmp(n2)
            }
            (Integer::Large(n1), Integer::Small(n2)) => {
                n1.cmp(&MultiPrecisionInteger::from(*n2))
            }
            (Integer::Large(n1), Integer::Large(n2)) => n1.cmp(n2),
        }
    }
}

impl<'a, 'b> Add<&'b Integer> for &'a Integer {
    type Output = Integer;

    fn add(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Small(n1), Integer::Small(n2)) => {
                if let Some(num) = n1.checked_add(*n2) {
                    Integer::Small(num)
                } else {
                    Integer::Large(
                        MultiPrecisionInteger::from(*n1) + MultiPrecisionInteger::from(*n2),
                    )
                }
            }
            (Integer::Small(n1), Integer::Large(r2)) | (Integer::Large(r2), Integer::Small(n1)) => {
                (MultiPrecisionInteger::from(*n1) + r2).into()
            }
            (Integer::Large(r1), Integer::Large(r2)) => {
                MultiPrecisionInteger::from(r1 + r2).into()
            }
        }
    }
}

impl<'a, 'b> Sub<&'b Integer> for &'a Integer {
    type Output = Integer;

    fn sub(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Small(n1), Integer::Small(n2)) => {
                if let Some(num) = n1.checked_sub(*n2) {
                    Integer::Small(num)
                } else {
                    Integer::Large(
                        MultiPrecisionInteger::from(*n1) - MultiPrecisionInteger::from(*n2),
                    )
                }
            }
            (Integer::Small(n1), Integer::Large(r2)) => {
                (MultiPrecisionInteger::from(*n1) - r2).into()
            }
            (Integer::Large(r1), Integer::Small(n2)) => {
                (r1.clone() - MultiPrecisionInteger::from(*n2)).into()
            }
            (Integer::Large(r1), Integer::Large(r2)) => {
                MultiPrecisionInteger::from(r1 - r2).into()
            }
        }
    }
}

impl<'a, 'b> Mul<&'b Integer> for &'a Integer {
    type Output = Integer;

    fn mul(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Small(n1), Integer::Small(n2)) => {
                if let Some(nn) = n1.checked_mul(*n2) {
                    Integer::Small(nn)
                } else {
                    Integer::Large(
                        MultiPrecisionInteger::from(*n1) * MultiPrecisionInteger::from(*n2),
                    )
                }
            }
            (Integer::Small(n1), Integer::Large(r2)) | (Integer::Large(r2), Integer::Small(n1)) => {
                (MultiPrecisionInteger::from(*n1) * r2).into()
            }
            (Integer::Large(r1), Integer::Large(r2)) => {
                MultiPrecisionInteger::from(r1 * r2).into()
            }
        }
    }
}

impl<'a> Neg for &'a Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        match self {
            Integer::Small(n) => {
                if let Some(neg) = n.checked_neg() {
                    Integer::Small(neg)
                } else {
                    Integer::Large(MultiPrecisionInteger::from(*n).neg())
                }
            }
            Integer::Large(r) => MultiPrecisionInteger::from(-r).into(),
        }
    }
}
