use crate::utils::{self, Tolerance};
use crate::{Result, VectorError};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Index, Mul, Neg};
use tracing::debug;

/// An immutable Euclidean vector of one or more `f64` components.
///
/// Every operation returns a new `Vector`; the backing array is never exposed
/// mutably, so a `Vector` can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    values: Array1<f64>,
}

impl Vector {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(values))
    }

    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }

    pub fn from_array(values: Array1<f64>) -> Result<Self> {
        if values.is_empty() {
            debug!(operation = "construct", "rejecting vector with no elements");
            return Err(VectorError::InvalidDimension);
        }
        Ok(Self { values })
    }

    pub fn try_from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Result<Self> {
        Self::from_array(iter.into_iter().collect())
    }

    // Operations below only ever produce arrays of the same, non-zero length
    // as an existing vector.
    fn from_raw(values: Array1<f64>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Euclidean norm. The zero vector has length `0`.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.values.dot(&self.values)
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Read-only view of the components.
    pub fn as_array(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Scales the vector to unit length.
    ///
    /// A zero-length vector is not special-cased: every component of the
    /// result is NaN.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            debug!(size = self.size(), "normalizing a zero-length vector yields NaN components");
        }
        Self::from_raw(self.values.mapv(|v| v / length))
    }

    pub fn add(&self, other: &Vector) -> Result<Self> {
        self.ensure_same_size("add", other)?;
        Ok(Self::from_raw(&self.values + &other.values))
    }

    pub fn subtract(&self, other: &Vector) -> Result<Self> {
        self.ensure_same_size("subtract", other)?;
        Ok(Self::from_raw(&self.values - &other.values))
    }

    /// Alias of [`Vector::multiply`].
    pub fn scale(&self, factor: f64) -> Self {
        self.multiply(factor)
    }

    pub fn multiply(&self, factor: f64) -> Self {
        Self::from_raw(self.values.mapv(|v| v * factor))
    }

    /// Multiplies by `1 / factor`. A zero factor produces infinite or NaN
    /// components rather than an error.
    pub fn divide(&self, factor: f64) -> Self {
        if factor == 0.0 {
            debug!(size = self.size(), "dividing a vector by zero");
        }
        self.multiply(1.0 / factor)
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.ensure_same_size("dot", other)?;
        Ok(self.values.dot(&other.values))
    }

    /// Cross product of two 3-dimensional vectors.
    pub fn cross(&self, other: &Vector) -> Result<Self> {
        for side in [self, other] {
            if side.size() != 3 {
                debug!(
                    operation = "cross",
                    expected = 3,
                    found = side.size(),
                    "rejecting cross product outside three dimensions"
                );
                return Err(VectorError::DimensionMismatch {
                    operation: "cross",
                    expected: 3,
                    found: side.size(),
                });
            }
        }

        let (a, b) = (self, other);
        Ok(Self::from_raw(Array1::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])))
    }

    /// Returns a vector perpendicular to this one.
    ///
    /// In three dimensions this is the cross product with the z axis
    /// `(0, 0, 1)`. In two dimensions the components are swapped to
    /// `(y, x)`; note this is a reflection across `y = x`, which is only
    /// orthogonal to the input when `|x| == |y|`.
    pub fn perpendicular(&self) -> Result<Self> {
        match self.size() {
            3 => self.cross(&Self::from_raw(Array1::from_vec(vec![0.0, 0.0, 1.0]))),
            2 => Ok(Self::from_raw(Array1::from_vec(vec![self[1], self[0]]))),
            size => {
                debug!(operation = "perpendicular", found = size, "unsupported dimension");
                Err(VectorError::UnsupportedDimension(size))
            }
        }
    }

    pub fn approx_eq(&self, other: &Vector, tolerance: &Tolerance) -> bool {
        utils::approx_eq(self, other, tolerance)
    }

    fn ensure_same_size(&self, operation: &'static str, other: &Vector) -> Result<()> {
        if self.size() != other.size() {
            debug!(
                operation,
                expected = self.size(),
                found = other.size(),
                "rejecting vectors of different sizes"
            );
            return Err(VectorError::DimensionMismatch {
                operation,
                expected: self.size(),
                found: other.size(),
            });
        }
        Ok(())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<const N: usize> TryFrom<[f64; N]> for Vector {
    type Error = VectorError;

    fn try_from(values: [f64; N]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(values: Array1<f64>) -> Result<Self> {
        Self::from_array(values)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.values.to_vec()
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from_raw(-&self.values)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        self.multiply(factor)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        self.multiply(factor)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Vector {
        vector.multiply(self)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector.multiply(self)
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, factor: f64) -> Vector {
        self.divide(factor)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, factor: f64) -> Vector {
        self.divide(factor)
    }
}
