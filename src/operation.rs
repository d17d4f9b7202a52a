//! Arithmetic on [AlgebraNumber]s with kind promotion.
//!
//! An [AlgebraOperation] holds one of four operators and applies it to a list of numbers:
//! ```
//! use algeo::domains::number::AlgebraNumber;
//! use algeo::operation::{AlgebraOperation, OperationKind};
//!
//! let mut op = AlgebraOperation::default();
//! let a = AlgebraNumber::natural(3).unwrap();
//! let b = AlgebraNumber::real(2.5);
//! assert_eq!(op.evaluate(&[a.clone(), b.clone()]).unwrap(), AlgebraNumber::real(5.5));
//!
//! op.change_operator(OperationKind::Multiply);
//! assert_eq!(op.evaluate(&[a, b]).unwrap(), AlgebraNumber::real(7.5));
//! ```
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use rug::{Float, Rational};
use tracing::{debug, instrument};

use crate::{
    domains::{number::AlgebraNumber, NumberKind, Value},
    error::{Error, Result},
    object::Object,
    printer::{PrintOptions, Printable},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OperationKind {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
        }
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::InvalidOperation(s.to_owned()))
    }
}

/// A selector of an arithmetic operator that can be applied to algebraic numbers.
/// The default operator is [OperationKind::Add].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgebraOperation {
    kind: OperationKind,
}

/// The running value of a division. Whole numbers are divided exactly
/// until a real operand is encountered.
enum Quotient {
    Exact(Rational),
    Float(f64),
}

/// Round `q` to the nearest `f64`. [Rational::to_f64] truncates instead.
fn rational_to_f64(q: &Rational) -> f64 {
    Float::with_val(f64::MANTISSA_DIGITS, q).to_f64()
}

impl Quotient {
    fn new(v: &Value) -> Quotient {
        match v {
            Value::Integer(i) => Quotient::Exact(Rational::from(i.to_multi_prec())),
            Value::Real(r) => Quotient::Float(*r),
        }
    }

    fn div_assign(&mut self, v: &Value) {
        match self {
            Quotient::Exact(q) => match v {
                Value::Integer(i) => *q /= Rational::from(i.to_multi_prec()),
                Value::Real(r) => *self = Quotient::Float(rational_to_f64(q) / r),
            },
            Quotient::Float(f) => *f /= v.to_f64(),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Quotient::Exact(q) => {
                if q.is_integer() {
                    let (num, _) = q.into_numer_denom();
                    Value::Integer(num.into())
                } else {
                    Value::Real(rational_to_f64(&q))
                }
            }
            Quotient::Float(f) => Value::Real(f),
        }
    }
}

impl AlgebraOperation {
    pub fn new(kind: OperationKind) -> AlgebraOperation {
        AlgebraOperation { kind }
    }

    /// Create an operation from its name: `add`, `subtract`, `multiply` or `divide`.
    pub fn from_name(name: &str) -> Result<AlgebraOperation> {
        Ok(AlgebraOperation { kind: name.parse()? })
    }

    #[inline]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn change_operator(&mut self, kind: OperationKind) {
        debug!("Changing operator from {} to {}", self.kind, kind);
        self.kind = kind;
    }

    /// Change the operator by name. The operator is left unchanged if the name is unknown.
    pub fn change_operator_by_name(&mut self, name: &str) -> Result<()> {
        let kind = name.parse()?;
        self.change_operator(kind);
        Ok(())
    }

    /// Apply the operator to dynamically typed arguments, which must all be algebraic numbers.
    pub fn call(&self, args: &[Object]) -> Result<AlgebraNumber> {
        let numbers = args
            .iter()
            .map(|a| match a {
                Object::Number(n) => Ok(n.clone()),
                o => Err(Error::InvalidArguments(format!("a {}", o.kind()))),
            })
            .collect::<Result<Vec<_>>>()?;

        self.evaluate(&numbers)
    }

    /// Apply the operator to `args`.
    ///
    /// The kind of the result is the widest kind among the arguments, except for
    /// division, whose result is an integer when it has no fractional part and
    /// a real otherwise. The result is validated against its kind, so for example
    /// subtracting a larger natural number from a smaller one is an error.
    #[instrument(level = "debug", skip_all, fields(op = %self.kind, n_args = args.len()))]
    pub fn evaluate(&self, args: &[AlgebraNumber]) -> Result<AlgebraNumber> {
        if args.is_empty() {
            return Err(Error::InvalidArguments("an empty argument list".into()));
        }

        let res = match self.kind {
            OperationKind::Add => {
                Self::fold(Value::zero(), NumberKind::Natural, args, Value::add)
            }
            OperationKind::Subtract => {
                Self::fold(args[0].value().clone(), args[0].kind(), &args[1..], Value::sub)
            }
            OperationKind::Multiply => {
                Self::fold(Value::one(), NumberKind::Natural, args, Value::mul)
            }
            OperationKind::Divide => return Self::divide(args),
        };

        debug!("Result kind: {}", res.1);
        AlgebraNumber::new(res.0, res.1)
    }

    fn fold(
        mut value: Value,
        mut kind: NumberKind,
        args: &[AlgebraNumber],
        op: fn(&Value, &Value) -> Value,
    ) -> (Value, NumberKind) {
        for a in args {
            kind = kind.promote(a.kind());
            value = op(&value, a.value());
        }
        (value, kind)
    }

    fn divide(args: &[AlgebraNumber]) -> Result<AlgebraNumber> {
        let mut kind = args[0].kind();
        let mut q = Quotient::new(args[0].value());

        for a in &args[1..] {
            kind = kind.promote(a.kind());

            if a.value().is_zero() {
                debug!("Zero divisor: {}", a);
                return Err(Error::DivisionByZero);
            }

            q.div_assign(a.value());
        }

        let res = AlgebraNumber::integer_or_real(q.into_value());
        debug!("Promoted kind {} replaced by {}", kind, res.kind());
        Ok(res)
    }
}

impl Printable for AlgebraOperation {
    fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        if opts.show_kind {
            write!(f, "<Algebraic {} Operation>", self.kind)
        } else {
            f.write_str(self.kind.name())
        }
    }
}

crate::impl_display_with_printer!(AlgebraOperation);
