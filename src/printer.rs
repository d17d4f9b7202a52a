use std::fmt;

use smartstring::alias::String;

/// Options that govern how numbers, polynomials and geometric objects are printed.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    /// Wrap objects in a descriptive tag, such as `<Algebraic natural Number 5>`.
    pub show_kind: bool,
    /// The number of digits after the decimal point for real payloads.
    /// `None` prints the shortest representation that round-trips.
    pub precision: Option<usize>,
    /// The symbol of the polynomial variable.
    pub variable: String,
    /// The prefix of every member line in a space listing.
    pub indent: String,
    /// The symbol written between a coefficient and a power of the variable.
    pub multiplication_operator: char,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintOptions {
    pub fn new() -> PrintOptions {
        PrintOptions {
            show_kind: true,
            precision: None,
            variable: "x".into(),
            indent: "\t".into(),
            multiplication_operator: '*',
        }
    }

    /// Print only the values, without kind tags.
    pub fn compact() -> PrintOptions {
        PrintOptions {
            show_kind: false,
            ..Self::new()
        }
    }

    /// Print kind tags and reals with a fixed number of digits.
    pub fn verbose() -> PrintOptions {
        PrintOptions {
            show_kind: true,
            precision: Some(6),
            indent: "    ".into(),
            ..Self::new()
        }
    }
}

/// An object that can be written with custom [PrintOptions].
pub trait Printable {
    fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result;

    fn format_string(&self, opts: &PrintOptions) -> std::string::String {
        let mut s = std::string::String::new();
        self.format(opts, &mut s)
            .expect("Could not write to string");
        s
    }
}

/// Implement [Display](std::fmt::Display) through [Printable] with the default options.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_display_with_printer {
    ($($t:ty),*) => {
        $(
            impl std::fmt::Display for $t {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    $crate::printer::Printable::format(
                        self,
                        &$crate::printer::PrintOptions::default(),
                        f,
                    )
                }
            }
        )*
    };
}

/// Write `items` separated by `sep`.
pub(crate) fn format_separated<'a, W: fmt::Write, T: Printable + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    sep: &str,
    opts: &PrintOptions,
    f: &mut W,
) -> fmt::Result {
    let mut first = true;
    for x in items {
        if !first {
            f.write_str(sep)?;
        }
        first = false;
        x.format(opts, f)?;
    }
    Ok(())
}
