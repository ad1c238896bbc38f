//! Unary strided inner loop.
//!
//! When both strides are 1 the loop runs over slices so LLVM can
//! auto-vectorize it (the Rust counterpart of Julia's `@simd`). Every other
//! stride pair uses an indexed pointer walk in increasing logical order.

use crate::simd;

/// `y[i * sy] = f(x[i * sx])` for `i` in `[0, len)`.
///
/// Overlapping `x`/`y` regions are allowed: the contiguous fast path is only
/// taken when the two regions are identical or disjoint, otherwise the
/// pointer walk preserves sequential read-then-write order.
///
/// # Safety
/// Every address `x + i * sx` must be valid for reads and every address
/// `y + i * sy` valid for writes, for `i` in `[0, len)`.
#[inline(always)]
pub(crate) unsafe fn unary_strided<T: Copy, F: Fn(T) -> T>(
    len: usize,
    xp: *const T,
    sx: isize,
    yp: *mut T,
    sy: isize,
    f: &F,
) {
    if sx == 1 && sy == 1 {
        if std::ptr::eq(xp, yp as *const T) {
            let dst = std::slice::from_raw_parts_mut(yp, len);
            simd::dispatch_if_large(len, || {
                for v in dst.iter_mut() {
                    *v = f(*v);
                }
            });
            return;
        }
        if disjoint(xp, yp as *const T, len) {
            let src = std::slice::from_raw_parts(xp, len);
            let dst = std::slice::from_raw_parts_mut(yp, len);
            simd::dispatch_if_large(len, || {
                for (d, s) in dst.iter_mut().zip(src.iter()) {
                    *d = f(*s);
                }
            });
            return;
        }
    }

    // Indexed addressing: no pointer is ever formed outside the window,
    // which matters for negative strides ending at index 0.
    for i in 0..len as isize {
        *yp.offset(i * sy) = f(*xp.offset(i * sx));
    }
}

#[inline]
fn disjoint<T>(a: *const T, b: *const T, len: usize) -> bool {
    let (a, b) = (a as usize, b as usize);
    let bytes = len * std::mem::size_of::<T>();
    a + bytes <= b || b + bytes <= a
}
