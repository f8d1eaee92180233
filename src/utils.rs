use crate::{vector::Vector, Result, VectorError};
use ndarray::Array1;
use rand::Rng;
use tracing::debug;

/// Bounds used when comparing floating-point components.
///
/// Two values `a` and `b` are considered equal when
/// `|a - b| <= max(absolute, relative * max(|a|, |b|))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub absolute: f64,
    pub relative: f64,
}

impl Tolerance {
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    pub fn with_absolute(mut self, absolute: f64) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn with_relative(mut self, relative: f64) -> Self {
        self.relative = relative;
        self
    }

    pub fn matches(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= self.absolute.max(self.relative * a.abs().max(b.abs()))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(1e-9, 1e-9)
    }
}

/// Component-wise approximate equality. Vectors of different sizes are never
/// equal.
pub fn approx_eq(v1: &Vector, v2: &Vector, tolerance: &Tolerance) -> bool {
    v1.size() == v2.size() && v1.iter().zip(v2.iter()).all(|(a, b)| tolerance.matches(a, b))
}

pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok(v1.subtract(v2)?.length())
}

pub fn manhattan_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok(v1.subtract(v2)?.iter().map(|x| x.abs()).sum())
}

/// Cosine of the angle between two vectors, or `0` when either is zero-length.
pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> Result<f64> {
    let dot_product = v1.dot(v2)?;
    let norm1 = v1.length();
    let norm2 = v2.length();

    if norm1 == 0.0 || norm2 == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm1 * norm2))
    }
}

/// Angle between two vectors in radians, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so rounding cannot
/// produce NaN for parallel vectors.
pub fn angle_between(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok(cosine_similarity(v1, v2)?.clamp(-1.0, 1.0).acos())
}

/// Generates `num` vectors of dimension `dim` with components drawn
/// uniformly from `[-1, 1)`.
///
/// Fixture for benchmarks, demos and tests; not part of the vector algebra.
pub fn generate_random_vectors(dim: usize, num: usize) -> Result<Vec<Vector>> {
    if dim == 0 {
        return Err(VectorError::InvalidDimension);
    }
    debug!(dim, num, "generating random vectors");
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            Vector::from_array(Array1::from_vec(
                (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect(),
            ))
        })
        .collect()
}
