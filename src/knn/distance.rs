//! Vector distance functions.

use num_traits::Float;

use crate::error::{KnnError, Result};

fn check_dimensions<F>(a: &[F], b: &[F]) -> Result<()> {
    if a.len() != b.len() {
        return Err(KnnError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Square root of the sum of squared per-dimension differences.
pub fn euclidean_distance<F: Float>(a: &[F], b: &[F]) -> Result<F> {
    check_dimensions(a, b)?;
    let sum_sq_diff = a.iter().zip(b.iter()).fold(F::zero(), |acc, (&x, &y)| {
        let diff = x - y;
        acc + diff * diff
    });
    Ok(sum_sq_diff.sqrt())
}

/// Sum of absolute per-dimension differences.
pub fn manhattan_distance<F: Float>(a: &[F], b: &[F]) -> Result<F> {
    check_dimensions(a, b)?;
    Ok(a
        .iter()
        .zip(b.iter())
        .fold(F::zero(), |acc, (&x, &y)| acc + (x - y).abs()))
}
