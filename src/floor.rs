//! Single-precision floor over strided buffers.
//!
//! Each routine rounds toward negative infinity with `f32::floor`, so NaN,
//! infinities and signed zeros come through unchanged. All of them return
//! the output buffer, and all of them are no-ops when `n <= 0`.

use crate::map::{map_in_place_ndarray, map_ndarray, map_ndarray_unchecked, try_map_ndarray};
use crate::stride::stride_to_offset;
use crate::Result;

#[inline(always)]
fn floor_f32(v: f32) -> f32 {
    v.floor()
}

/// Round each element of `x` toward negative infinity into `y`.
///
/// Starting indices follow the sign of each stride: 0 for a non-negative
/// stride, `(n - 1) * |stride|` for a negative one. `stride_x = -1` with
/// `stride_y = 1` therefore writes `x` reversed.
///
/// # Panics
/// Panics if the `n` strided indices do not fit either buffer.
///
/// # Example
/// ```
/// use strided_floor::sfloor;
///
/// let x = [1.0f32, 2.0, 3.0, 4.0];
/// let mut y = [0.0f32; 4];
/// sfloor(4, &x, -1, &mut y, 1);
/// assert_eq!(y, [4.0, 3.0, 2.0, 1.0]);
/// ```
pub fn sfloor<'y>(
    n: isize,
    x: &[f32],
    stride_x: isize,
    y: &'y mut [f32],
    stride_y: isize,
) -> &'y mut [f32] {
    sfloor_ndarray(
        n,
        x,
        stride_x,
        stride_to_offset(n, stride_x),
        y,
        stride_y,
        stride_to_offset(n, stride_y),
    )
}

/// Round each element of `x` toward negative infinity into `y`, with explicit
/// starting offsets.
///
/// `y[offset_y + i * stride_y] = floor(x[offset_x + i * stride_x])` for `i`
/// in `[0, n)`.
///
/// # Panics
/// Panics if the `n` strided indices do not fit either buffer.
///
/// # Example
/// ```
/// use strided_floor::sfloor_ndarray;
///
/// let x = [-1.1f32, 1.1, 3.8, 4.5, 5.9];
/// let mut y = [0.0f32; 5];
/// sfloor_ndarray(5, &x, 1, 0, &mut y, 1, 0);
/// assert_eq!(y, [-2.0, 1.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sfloor_ndarray<'y>(
    n: isize,
    x: &[f32],
    stride_x: isize,
    offset_x: usize,
    y: &'y mut [f32],
    stride_y: isize,
    offset_y: usize,
) -> &'y mut [f32] {
    map_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, floor_f32)
}

/// Checked [`sfloor`]: an out-of-range window is returned as an error and
/// `y` is left untouched.
pub fn try_sfloor<'y>(
    n: isize,
    x: &[f32],
    stride_x: isize,
    y: &'y mut [f32],
    stride_y: isize,
) -> Result<&'y mut [f32]> {
    try_sfloor_ndarray(
        n,
        x,
        stride_x,
        stride_to_offset(n, stride_x),
        y,
        stride_y,
        stride_to_offset(n, stride_y),
    )
}

/// Checked [`sfloor_ndarray`].
pub fn try_sfloor_ndarray<'y>(
    n: isize,
    x: &[f32],
    stride_x: isize,
    offset_x: usize,
    y: &'y mut [f32],
    stride_y: isize,
    offset_y: usize,
) -> Result<&'y mut [f32]> {
    try_map_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, floor_f32)
}

/// In-place [`sfloor`]: `x` is both input and output.
pub fn sfloor_in_place(n: isize, x: &mut [f32], stride: isize) -> &mut [f32] {
    sfloor_in_place_ndarray(n, x, stride, stride_to_offset(n, stride))
}

/// In-place [`sfloor_ndarray`].
pub fn sfloor_in_place_ndarray(
    n: isize,
    x: &mut [f32],
    stride: isize,
    offset: usize,
) -> &mut [f32] {
    map_in_place_ndarray(n, x, stride, offset, floor_f32)
}

/// [`sfloor_ndarray`] over raw pointers, with no bounds checks.
///
/// The windows may overlap arbitrarily; elements are processed one at a time
/// in increasing logical index. Returns `y`.
///
/// # Safety
/// For every `i` in `[0, n)`, `x + offset_x + i * stride_x` must be valid for
/// reads and `y + offset_y + i * stride_y` valid for writes.
pub unsafe fn sfloor_ndarray_unchecked(
    n: isize,
    x: *const f32,
    stride_x: isize,
    offset_x: usize,
    y: *mut f32,
    stride_y: isize,
    offset_y: usize,
) -> *mut f32 {
    map_ndarray_unchecked(n, x, stride_x, offset_x, y, stride_y, offset_y, floor_f32)
}
