use std::fmt;

use crate::{
    error::{Error, Result},
    printer::{PrintOptions, Printable},
};

use super::{integer::Integer, NumberKind, Value};

/// An immutable number tagged with its [NumberKind].
///
/// The payload is validated against the kind on construction:
/// ```
/// use algeo::domains::{number::AlgebraNumber, NumberKind};
///
/// let n = AlgebraNumber::new(12312, NumberKind::Natural).unwrap();
/// assert_eq!(n.value().to_string(), "12312");
///
/// assert!(AlgebraNumber::new(0, NumberKind::Natural).is_err());
/// assert!(AlgebraNumber::new(2.5, NumberKind::Integer).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AlgebraNumber {
    kind: NumberKind,
    value: Value,
}

impl Default for AlgebraNumber {
    /// The natural number one.
    fn default() -> Self {
        AlgebraNumber {
            kind: NumberKind::Natural,
            value: Value::one(),
        }
    }
}

impl AlgebraNumber {
    /// Create a new number of kind `kind`. Natural numbers must be positive
    /// whole numbers, integers must be whole numbers and reals must be floats.
    pub fn new(value: impl Into<Value>, kind: NumberKind) -> Result<AlgebraNumber> {
        let value = value.into();
        Self::validate(&value, kind)?;
        Ok(AlgebraNumber { kind, value })
    }

    /// Create a new number whose kind is given by name, for example `"natural"`.
    pub fn with_kind_name(value: impl Into<Value>, kind: &str) -> Result<AlgebraNumber> {
        let kind = kind.parse()?;
        Self::new(value, kind)
    }

    pub fn natural(value: impl Into<Value>) -> Result<AlgebraNumber> {
        Self::new(value, NumberKind::Natural)
    }

    pub fn integer(value: impl Into<Value>) -> Result<AlgebraNumber> {
        Self::new(value, NumberKind::Integer)
    }

    pub fn real(value: f64) -> AlgebraNumber {
        AlgebraNumber {
            kind: NumberKind::Real,
            value: Value::Real(value),
        }
    }

    /// Create an integer if `value` has no fractional part and a real otherwise.
    pub(crate) fn integer_or_real(value: Value) -> AlgebraNumber {
        match value.into_whole_if_exact() {
            v @ Value::Integer(_) => AlgebraNumber {
                kind: NumberKind::Integer,
                value: v,
            },
            v @ Value::Real(_) => AlgebraNumber {
                kind: NumberKind::Real,
                value: v,
            },
        }
    }

    fn validate(value: &Value, kind: NumberKind) -> Result<()> {
        let valid = match (kind, value) {
            (NumberKind::Natural, Value::Integer(i)) => i.is_positive(),
            (NumberKind::Integer, Value::Integer(_)) => true,
            (NumberKind::Real, Value::Real(_)) => true,
            _ => false,
        };

        if valid {
            Ok(())
        } else {
            Err(Error::InvalidValue {
                kind,
                value: value.format_string(&PrintOptions::compact()),
            })
        }
    }

    /// Read the raw payload.
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    /// Get the payload as an integer, if it is a whole number.
    pub fn as_integer(&self) -> Option<&Integer> {
        match &self.value {
            Value::Integer(i) => Some(i),
            Value::Real(_) => None,
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }
}

impl Printable for AlgebraNumber {
    fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        if opts.show_kind {
            write!(f, "<Algebraic {} Number ", self.kind)?;
            self.value.format(opts, f)?;
            f.write_char('>')
        } else {
            self.value.format(opts, f)
        }
    }
}

crate::impl_display_with_printer!(AlgebraNumber);

#[cfg(test)]
mod test {
    use super::AlgebraNumber;
    use crate::{
        domains::{integer::Integer, NumberKind, Value},
        error::Error,
        printer::{PrintOptions, Printable},
    };

    #[test]
    fn read_back() {
        for n in [1i64, 2, 17, 12312, i64::MAX] {
            let a = AlgebraNumber::new(n, NumberKind::Natural).unwrap();
            assert_eq!(a.value(), &Value::from(n));
            assert_eq!(a.kind(), NumberKind::Natural);
        }

        let big = Integer::from(1i128 << 100);
        let a = AlgebraNumber::new(big.clone(), NumberKind::Integer).unwrap();
        assert_eq!(a.as_integer(), Some(&big));

        let r = AlgebraNumber::new(0.1 + 0.2, NumberKind::Real).unwrap();
        assert_eq!(r.value(), &Value::Real(0.1 + 0.2));
    }

    #[test]
    fn validation() {
        assert_eq!(
            AlgebraNumber::natural(0),
            Err(Error::InvalidValue {
                kind: NumberKind::Natural,
                value: "0".into()
            })
        );
        assert!(AlgebraNumber::natural(-4).is_err());
        assert!(AlgebraNumber::natural(2.0).is_err());
        assert!(AlgebraNumber::integer(0).is_ok());
        assert!(AlgebraNumber::integer(-1232214).is_ok());
        assert!(AlgebraNumber::integer(1.5).is_err());
        assert!(AlgebraNumber::new(3, NumberKind::Real).is_err());
        assert!(AlgebraNumber::new(3.0, NumberKind::Real).is_ok());
    }

    #[test]
    fn kind_by_name() {
        let n = AlgebraNumber::with_kind_name(4, "integer").unwrap();
        assert_eq!(n.kind(), NumberKind::Integer);

        assert_eq!(
            AlgebraNumber::with_kind_name(4, "rational"),
            Err(Error::InvalidKind("rational".into()))
        );
    }

    #[test]
    fn default_is_one() {
        let n = AlgebraNumber::default();
        assert_eq!(n.kind(), NumberKind::Natural);
        assert_eq!(n.value(), &Value::from(1));
    }

    #[test]
    fn integer_or_real() {
        let n = AlgebraNumber::integer_or_real(Value::Real(5.0));
        assert_eq!(n, AlgebraNumber::integer(5).unwrap());

        let n = AlgebraNumber::integer_or_real(Value::Real(2.5));
        assert_eq!(n.kind(), NumberKind::Real);

        let n = AlgebraNumber::integer_or_real(Value::Real(f64::NAN));
        assert_eq!(n.kind(), NumberKind::Real);
    }

    #[test]
    fn printing() {
        let n = AlgebraNumber::natural(12312).unwrap();
        assert_eq!(n.to_string(), "<Algebraic natural Number 12312>");
        assert_eq!(n.format_string(&PrintOptions::compact()), "12312");

        let r = AlgebraNumber::real(2.0 / 3.0);
        assert_eq!(
            r.format_string(&PrintOptions::verbose()),
            "<Algebraic real Number 0.666667>"
        );
    }
}
