//! Generic unary map over 1-D strided buffers.
//!
//! `y[offset_y + i * stride_y] = f(x[offset_x + i * stride_x])` for `i` in
//! `[0, n)`. The floor routines are instantiations of these functions.

use crate::kernel::unary_strided;
use crate::maybe_sync::{MaybeSendSync, MaybeSync};
use crate::stride::validate_window;
use crate::Result;

#[cfg(feature = "parallel")]
use crate::threading::{unary_threaded, SendPtr};
#[cfg(feature = "parallel")]
use crate::MIN_THREAD_LENGTH;

/// Pick the sequential or threaded kernel for an already validated window.
///
/// # Safety
/// Both windows must be in bounds, and `x`/`y` either disjoint or identical
/// (same base, same stride).
#[inline]
unsafe fn execute<T, F>(len: usize, xp: *const T, sx: isize, yp: *mut T, sy: isize, f: &F)
where
    T: Copy + MaybeSendSync,
    F: Fn(T) -> T + MaybeSync,
{
    #[cfg(feature = "parallel")]
    {
        // A zero output stride funnels every write into one slot; only the
        // sequential order defines which value survives.
        let nthreads = rayon::current_num_threads();
        if sy != 0 && nthreads > 1 && len > MIN_THREAD_LENGTH {
            unary_threaded(
                len,
                SendPtr(xp as *mut T),
                sx,
                SendPtr(yp),
                sy,
                nthreads,
                f,
            );
            return;
        }
    }
    unary_strided(len, xp, sx, yp, sy, f);
}

/// Apply `f` element-wise from strided `x` into strided `y`, reporting an
/// out-of-range window as an error.
///
/// Returns `y`. When `n <= 0` nothing is validated, read or written.
///
/// # Errors
/// [`StridedError::OutOfBounds`](crate::StridedError::OutOfBounds) or
/// [`StridedError::OffsetOverflow`](crate::StridedError::OffsetOverflow) if
/// either window does not fit its buffer. `y` is left untouched in that case.
pub fn try_map_ndarray<'y, T, F>(
    n: isize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &'y mut [T],
    stride_y: isize,
    offset_y: usize,
    f: F,
) -> Result<&'y mut [T]>
where
    T: Copy + MaybeSendSync,
    F: Fn(T) -> T + MaybeSync,
{
    if n <= 0 {
        return Ok(y);
    }
    let len = n as usize;
    validate_window("x", x.len(), len, stride_x, offset_x)?;
    validate_window("y", y.len(), len, stride_y, offset_y)?;

    // SAFETY: both windows were validated above; `x` and `y` come from
    // distinct borrows so they cannot overlap.
    unsafe {
        execute(
            len,
            x.as_ptr().add(offset_x),
            stride_x,
            y.as_mut_ptr().add(offset_y),
            stride_y,
            &f,
        );
    }
    Ok(y)
}

/// Apply `f` element-wise from strided `x` into strided `y`.
///
/// Returns `y`. When `n <= 0` nothing is read or written.
///
/// # Panics
/// Panics if either window does not fit its buffer; no element of `y` has
/// been written at that point.
///
/// # Example
/// ```
/// use strided_floor::map_ndarray;
///
/// let x = [1.0f32, 2.0, 3.0, 4.0];
/// let mut y = [0.0f32; 2];
/// map_ndarray(2, &x, -2, 3, &mut y, 1, 0, |v| v * 10.0);
/// assert_eq!(y, [40.0, 20.0]);
/// ```
pub fn map_ndarray<'y, T, F>(
    n: isize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &'y mut [T],
    stride_y: isize,
    offset_y: usize,
    f: F,
) -> &'y mut [T]
where
    T: Copy + MaybeSendSync,
    F: Fn(T) -> T + MaybeSync,
{
    match try_map_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, f) {
        Ok(y) => y,
        Err(e) => panic!("{e}"),
    }
}

/// Apply `f` element-wise in place: `x[offset + i * stride] = f(x[offset + i * stride])`.
///
/// Returns `x`. When `n <= 0` nothing is read or written.
///
/// # Panics
/// Panics if the window does not fit the buffer.
pub fn map_in_place_ndarray<T, F>(
    n: isize,
    x: &mut [T],
    stride: isize,
    offset: usize,
    f: F,
) -> &mut [T]
where
    T: Copy + MaybeSendSync,
    F: Fn(T) -> T + MaybeSync,
{
    if n <= 0 {
        return x;
    }
    let len = n as usize;
    if let Err(e) = validate_window("x", x.len(), len, stride, offset) {
        panic!("{e}");
    }

    // SAFETY: window validated; input and output are the same slots.
    unsafe {
        let p = x.as_mut_ptr().add(offset);
        execute(len, p as *const T, stride, p, stride, &f);
    }
    x
}

/// Apply `f` element-wise between raw strided buffers without any checks.
///
/// Runs sequentially in increasing logical index, so any overlap between
/// the two windows behaves as the plain loop would. Returns `y`.
///
/// # Safety
/// For every `i` in `[0, n)`, `x + offset_x + i * stride_x` must be valid for
/// reads and `y + offset_y + i * stride_y` valid for writes.
pub unsafe fn map_ndarray_unchecked<T, F>(
    n: isize,
    x: *const T,
    stride_x: isize,
    offset_x: usize,
    y: *mut T,
    stride_y: isize,
    offset_y: usize,
    f: F,
) -> *mut T
where
    T: Copy,
    F: Fn(T) -> T,
{
    if n > 0 {
        unary_strided(
            n as usize,
            x.add(offset_x),
            stride_x,
            y.add(offset_y),
            stride_y,
            &f,
        );
    }
    y
}
