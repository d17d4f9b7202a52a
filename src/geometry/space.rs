use std::fmt;

use tracing::debug;

use crate::{
    domains::Value,
    error::{Error, Result},
    object::Object,
    printer::{PrintOptions, Printable},
};

use super::Point;

/// An ordered collection of points that all have the same number of dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    n_dims: usize,
    objects: Vec<Point>,
}

impl Space {
    /// Create an empty space with `n_dims` dimensions.
    pub fn new(n_dims: i64) -> Result<Space> {
        Ok(Space {
            n_dims: super::dimensions_from_i64(n_dims)?,
            objects: vec![],
        })
    }

    /// Create an empty space from a dynamically typed number of dimensions.
    pub fn from_object(n_dims: &Object) -> Result<Space> {
        Ok(Space {
            n_dims: super::dimensions_from_object(n_dims)?,
            objects: vec![],
        })
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.n_dims
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.objects.iter()
    }

    /// Append a point with the same number of dimensions as the space.
    pub fn add_point(&mut self, point: Point) -> Result<()> {
        if point.dimensions() != self.n_dims {
            debug!(
                "Rejected {}-dimensional point in {}-dimensional space",
                point.dimensions(),
                self.n_dims
            );
            return Err(Error::DimensionMismatch {
                expected: self.n_dims,
                found: point.dimensions(),
            });
        }

        self.objects.push(point);
        debug!("Space holds {} objects", self.objects.len());
        Ok(())
    }

    /// Append a dynamically typed object, which must be a point. Spaces cannot be nested.
    pub fn add(&mut self, object: Object) -> Result<()> {
        match object {
            Object::Point(p) => self.add_point(p),
            Object::Space(_) => Err(Error::NestedSpace),
            o => Err(Error::NotGeometricObject(o.kind())),
        }
    }

    /// Get the object at position `index`.
    pub fn get(&self, index: i64) -> Result<&Point> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.objects.get(i))
            .ok_or_else(|| Error::IndexOutOfRange {
                index: index.to_string(),
                len: self.objects.len(),
            })
    }

    /// Get the object at a dynamically typed position, which must be a whole scalar.
    pub fn get_object(&self, index: &Object) -> Result<&Point> {
        if let Some(Value::Integer(i)) = index.as_scalar() {
            if let Some(i) = i.to_i64() {
                return self.get(i);
            }
        }

        Err(Error::IndexOutOfRange {
            index: index.format_string(&PrintOptions::compact()),
            len: self.objects.len(),
        })
    }

    /// Write every object of the space on its own line.
    pub fn format_contents<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        writeln!(f, "Geometric {}-dimensional Space objects {{", self.n_dims)?;
        for o in &self.objects {
            f.write_str(&opts.indent)?;
            o.format(opts, f)?;
            f.write_char('\n')?;
        }
        f.write_char('}')
    }

    pub fn contents_string(&self, opts: &PrintOptions) -> String {
        let mut s = String::new();
        self.format_contents(opts, &mut s)
            .expect("Could not write to string");
        s
    }
}

impl<'a> IntoIterator for &'a Space {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl Printable for Space {
    fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        if opts.show_kind {
            write!(f, "<{}-dimensional geometric Space>", self.n_dims)
        } else {
            write!(f, "Space({})", self.n_dims)
        }
    }
}

crate::impl_display_with_printer!(Space);
