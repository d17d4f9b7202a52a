use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::{
    domains::{number::AlgebraNumber, Value},
    error::{Error, Result},
    object::Object,
    printer::{PrintOptions, Printable},
};

/// A univariate polynomial with numeric coefficients, stored from the highest
/// degree to the constant term.
///
/// ```
/// use algeo::domains::number::AlgebraNumber;
/// use algeo::poly::Polynomial;
///
/// // x^3 + 2*x^2 + 3*x + 4
/// let p = Polynomial::new([1, 2, 3, 4]).unwrap();
/// let r = p.evaluate(&AlgebraNumber::natural(2).unwrap());
/// assert_eq!(r, AlgebraNumber::integer(26).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: SmallVec<[Value; 6]>,
}

impl Polynomial {
    /// Create a polynomial from its coefficients, highest degree first.
    pub fn new<V: Into<Value>>(coefficients: impl IntoIterator<Item = V>) -> Result<Polynomial> {
        let coefficients: SmallVec<[Value; 6]> = coefficients.into_iter().map(Into::into).collect();

        if coefficients.is_empty() {
            return Err(Error::InvalidCoefficients("no coefficients".into()));
        }

        Ok(Polynomial { coefficients })
    }

    /// Create a polynomial from dynamically typed coefficients, which must all be scalars.
    pub fn from_objects(coefficients: &[Object]) -> Result<Polynomial> {
        let coefficients = coefficients
            .iter()
            .map(|c| match c {
                Object::Scalar(v) => Ok(v.clone()),
                o => Err(Error::InvalidCoefficients(format!(
                    "found a {}",
                    o.kind()
                ))),
            })
            .collect::<Result<SmallVec<[Value; 6]>>>()?;

        Self::new(coefficients)
    }

    /// The number of coefficients.
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always `false`: a polynomial has at least one coefficient.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[Value] {
        &self.coefficients
    }

    /// Evaluate the polynomial at `x` using Horner's scheme. The result is an
    /// integer if it has no fractional part and a real otherwise.
    ///
    /// The evaluation is exact when `x` and all coefficients are whole numbers.
    #[instrument(level = "debug", skip_all, fields(degree = self.degree()))]
    pub fn evaluate(&self, x: &AlgebraNumber) -> AlgebraNumber {
        let mut res = Value::zero();
        for c in &self.coefficients {
            res = res.mul(x.value()).add(c);
        }

        debug!("Evaluated at {}: {}", x.value(), res);
        AlgebraNumber::integer_or_real(res)
    }

    /// Evaluate the polynomial at a dynamically typed argument, which must be an algebraic number.
    pub fn call(&self, x: &Object) -> Result<AlgebraNumber> {
        match x {
            Object::Number(n) => Ok(self.evaluate(n)),
            o => Err(Error::InvalidArgument(o.kind())),
        }
    }

    /// Write the polynomial as an expression in `opts.variable`, such as `x^3+2*x^2+3*x+4`.
    fn format_expression<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        let mut first = true;
        for (c, pow) in self.coefficients.iter().zip((0..self.len()).rev()) {
            if c.is_zero() {
                continue;
            }

            let negative = match c {
                Value::Integer(i) => i.is_negative(),
                Value::Real(r) => r.is_sign_negative(),
            };

            if negative {
                f.write_char('-')?;
            } else if !first {
                f.write_char('+')?;
            }
            first = false;

            let abs = if negative {
                Value::zero().sub(c)
            } else {
                c.clone()
            };

            let is_one = abs == Value::one();
            if pow == 0 || !is_one {
                abs.format(opts, f)?;
                if pow > 0 {
                    f.write_char(opts.multiplication_operator)?;
                }
            }

            match pow {
                0 => {}
                1 => f.write_str(&opts.variable)?,
                _ => write!(f, "{}^{}", opts.variable, pow)?,
            }
        }

        if first {
            f.write_char('0')?;
        }

        Ok(())
    }
}

impl Printable for Polynomial {
    fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        if opts.show_kind {
            write!(f, "<Algebraic Polynomial of degree {}: ", self.degree())?;
            self.format_expression(opts, f)?;
            f.write_char('>')
        } else {
            self.format_expression(opts, f)
        }
    }
}

crate::impl_display_with_printer!(Polynomial);
