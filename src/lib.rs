pub mod serialization;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Invalid Dimension: a vector needs at least 1 element, got size 0")]
    InvalidDimension,
    #[error("Dimension Mismatch: {operation} expected size {expected}, found size {found}")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Unsupported Dimension: perpendicular needs size 2 or 3, found size {0}")]
    UnsupportedDimension(usize),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// Builds a [`Vector`] from a list of components.
///
/// Expands to `Vector::new(vec![...])`, so it evaluates to a
/// `Result<Vector>` and an empty list yields [`VectorError::InvalidDimension`].
/// Components go through `f64::from`, so only lossless numeric types are
/// accepted.
///
/// ```
/// use euclid_vector::vector;
///
/// let v = vector![3.0, 4.0, 0.0].unwrap();
/// assert_eq!(v.size(), 3);
/// assert_eq!(v.length(), 5.0);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::vector::Vector::new(::std::vec::Vec::new())
    };
    ($($x:expr),+ $(,)?) => {
        $crate::vector::Vector::new(::std::vec![$(f64::from($x)),+])
    };
}

// Re-export main types for convenience
pub use serialization::{from_json, read_json, read_vectors, to_json, write_json, write_vectors};
pub use utils::{approx_eq, cosine_similarity, euclidean_distance, Tolerance};
pub use vector::Vector;
