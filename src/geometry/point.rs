use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::{
    domains::Value,
    error::{Error, Result},
    object::Object,
    printer::{format_separated, PrintOptions, Printable},
};

/// An immutable point in an n-dimensional space.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: SmallVec<[Value; 4]>,
}

impl Point {
    /// Create a point in `n_dims` dimensions. The number of coordinates must be `n_dims`.
    pub fn new<V: Into<Value>>(n_dims: i64, coords: impl IntoIterator<Item = V>) -> Result<Point> {
        let n_dims = super::dimensions_from_i64(n_dims)?;
        let coords: SmallVec<[Value; 4]> = coords.into_iter().map(Into::into).collect();

        if coords.len() != n_dims {
            return Err(Error::InvalidCoordinates {
                expected: n_dims,
                reason: format!("found {} coordinates", coords.len()),
            });
        }

        Ok(Point { coords })
    }

    /// Create the origin of an `n_dims`-dimensional space.
    pub fn origin(n_dims: i64) -> Result<Point> {
        let n_dims = super::dimensions_from_i64(n_dims)?;
        Ok(Point {
            coords: smallvec![Value::zero(); n_dims],
        })
    }

    /// Create a point from dynamically typed arguments. The number of dimensions must be
    /// a non-negative whole scalar and the coordinates, if any, must be scalars.
    /// Missing coordinates yield the origin.
    pub fn from_objects(n_dims: &Object, coords: Option<&[Object]>) -> Result<Point> {
        let n = super::dimensions_from_object(n_dims)?;

        let Some(coords) = coords else {
            return Ok(Point {
                coords: smallvec![Value::zero(); n],
            });
        };

        let coords = coords
            .iter()
            .map(|c| match c {
                Object::Scalar(v) => Ok(v.clone()),
                o => Err(Error::InvalidCoordinates {
                    expected: n,
                    reason: format!("found a {}", o.kind()),
                }),
            })
            .collect::<Result<SmallVec<[Value; 4]>>>()?;

        if coords.len() != n {
            return Err(Error::InvalidCoordinates {
                expected: n,
                reason: format!("found {} coordinates", coords.len()),
            });
        }

        Ok(Point { coords })
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[Value] {
        &self.coords
    }

    /// The Euclidean distance from the origin.
    pub fn norm(&self) -> f64 {
        self.coords
            .iter()
            .map(|c| {
                let c = c.to_f64();
                c * c
            })
            .sum::<f64>()
            .sqrt()
    }

    /// The distance from `self` to `other`, coordinate by coordinate. Coordinates of
    /// `other` beyond the dimensions of `self` count as their distance to zero, while
    /// coordinates of `self` beyond the dimensions of `other` are ignored.
    pub fn distance_to(&self, other: &Point) -> f64 {
        other
            .coords
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let d = c.to_f64() - self.coords.get(i).map(Value::to_f64).unwrap_or(0.);
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Compute the distance to every point in `others`. Without points, the
    /// result holds only the distance from the origin.
    pub fn distance(&self, others: &[Point]) -> Vec<f64> {
        if others.is_empty() {
            return vec![self.norm()];
        }

        others.iter().map(|o| self.distance_to(o)).collect()
    }

    /// Compute the distance to every dynamically typed object in `others`,
    /// which must all be points.
    pub fn distance_to_objects(&self, others: &[Object]) -> Result<Vec<f64>> {
        if others.is_empty() {
            return Ok(vec![self.norm()]);
        }

        others
            .iter()
            .map(|o| match o {
                Object::Point(p) => Ok(self.distance_to(p)),
                o => Err(Error::NotPoints(o.kind())),
            })
            .collect()
    }
}

impl Printable for Point {
    fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        if opts.show_kind {
            write!(f, "<{}-dimensional geometric Point ", self.dimensions())?;
        }

        f.write_char('(')?;
        format_separated(&self.coords, ", ", opts, f)?;
        f.write_char(')')?;

        if opts.show_kind {
            f.write_char('>')?;
        }
        Ok(())
    }
}

crate::impl_display_with_printer!(Point);

#[cfg(test)]
mod test {
    use super::Point;
    use crate::{
        domains::Value,
        error::Error,
        object::{Object, ObjectKind},
        printer::{PrintOptions, Printable},
    };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn norm() {
        let p = Point::new(3, [Value::from(1), 2.into(), 3.1.into()]).unwrap();
        let d = p.distance(&[]);
        assert_eq!(d.len(), 1);
        assert!(approx(d[0], 14.61f64.sqrt()));
        assert!(approx(d[0], 3.8223029707232783));
    }

    #[test]
    fn pairwise() {
        let p = Point::new(2, [0, 0]).unwrap();
        let q = Point::new(2, [3, 4]).unwrap();
        let r = Point::new(2, [-3., -4.]).unwrap();

        assert_eq!(p.distance(&[q.clone(), r.clone()]), vec![5., 5.]);
        assert_eq!(q.distance(&[r]), vec![10.]);
        assert_eq!(q.distance(&[q.clone()]), vec![0.]);
    }

    #[test]
    fn asymmetric_dimensions() {
        let short = Point::new(1, [1]).unwrap();
        let long = Point::new(3, [1, 2, 2]).unwrap();

        // extra coordinates of the argument count towards the distance
        assert_eq!(short.distance(&[long.clone()]), vec![8f64.sqrt()]);
        // extra coordinates of self do not
        assert_eq!(long.distance(&[short]), vec![0.]);
    }

    #[test]
    fn origin() {
        let p = Point::origin(4).unwrap();
        assert_eq!(p.dimensions(), 4);
        assert!(p.coords().iter().all(|c| c.is_zero()));
        assert_eq!(p.distance(&[]), vec![0.]);

        let p = Point::origin(0).unwrap();
        assert_eq!(p.dimensions(), 0);
    }

    #[test]
    fn invalid() {
        assert_eq!(
            Point::new(-2, [1, 2]),
            Err(Error::InvalidDimensions("-2".into()))
        );
        assert!(matches!(
            Point::new(3, [1, 2]),
            Err(Error::InvalidCoordinates { expected: 3, .. })
        ));
        assert!(matches!(
            Point::from_objects(&Object::from(2), Some(&[Object::from(1), Object::from(false)][..])),
            Err(Error::InvalidCoordinates { expected: 2, .. })
        ));
        assert!(matches!(
            Point::from_objects(&Object::from(1.5), None),
            Err(Error::InvalidDimensions(_))
        ));

        let p = Point::from_objects(&Object::from(2), None).unwrap();
        assert_eq!(p, Point::origin(2).unwrap());
    }

    #[test]
    fn not_points() {
        let p = Point::new(2, [1, 1]).unwrap();
        let q = Point::new(2, [1, 2]).unwrap();

        assert_eq!(
            p.distance_to_objects(&[Object::Point(q.clone()), Object::from(3)]),
            Err(Error::NotPoints(ObjectKind::Scalar))
        );
        assert_eq!(p.distance_to_objects(&[Object::Point(q)]), Ok(vec![1.]));
        assert_eq!(p.distance_to_objects(&[]), Ok(vec![2f64.sqrt()]));
    }

    #[test]
    fn printing() {
        let p = Point::new(3, [Value::from(1), 2.into(), 3.1.into()]).unwrap();
        assert_eq!(p.to_string(), "<3-dimensional geometric Point (1, 2, 3.1)>");
        assert_eq!(p.format_string(&PrintOptions::compact()), "(1, 2, 3.1)");
    }
}
