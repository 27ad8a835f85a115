use std::f32::consts::PI;
use std::num::NonZeroUsize;

use crate::error::{MoverError, Result};

/// Converts a raw part count into the non-zero form the helpers take.
pub fn checked_parts(n: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(n).ok_or(MoverError::ZeroParts)
}

/// Width of one part window.
pub fn inverse(n: NonZeroUsize) -> f32 {
    1.0 / n.get() as f32
}

/// How far `value` has moved past the start of part `i`.
pub fn max_scale(value: f32, i: usize, n: NonZeroUsize) -> f32 {
    (value - i as f32 * inverse(n)).max(0.0)
}

/// Interpolation factor of part `i`, in `[0, 1]`.
///
/// Progress in `[0, 1]` is split into `n` equal windows. Part `i` stays at `0`
/// until progress enters its window, ramps linearly across it, and then holds
/// at `1`.
pub fn divide_scale(value: f32, i: usize, n: NonZeroUsize) -> f32 {
    inverse(n).min(max_scale(value, i, n)) * n.get() as f32
}

/// Rises from 0 to 1 and back to 0 as `value` sweeps `[0, 1]`.
pub fn sinify(value: f32) -> f32 {
    (value * PI).sin()
}
