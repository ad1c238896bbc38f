//! Rayon-based parallel execution for long unary strided runs.
//!
//! The logical range is halved recursively with `rayon::join` until a piece
//! is at most [`MIN_THREAD_LENGTH`] elements or has a single thread left,
//! the 1-D case of Julia Strided.jl's `_mapreduce_threaded!`.

use crate::kernel::unary_strided;
use crate::maybe_sync::{MaybeSendSync, MaybeSync};
use crate::MIN_THREAD_LENGTH;

/// A raw pointer wrapper that is `Send` + `Sync`.
///
/// # Safety
/// The pointed-to data must outlive the parallel operation and concurrent
/// tasks must write to disjoint slots.
pub(crate) struct SendPtr<T>(pub(crate) *mut T);

impl<T> Clone for SendPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SendPtr<T> {}

unsafe impl<T> Send for SendPtr<T> {}
unsafe impl<T> Sync for SendPtr<T> {}

impl<T> SendPtr<T> {
    pub(crate) fn as_ptr(self) -> *mut T {
        self.0
    }

    pub(crate) fn as_const(self) -> *const T {
        self.0 as *const T
    }

    /// Advance by `count` elements.
    ///
    /// # Safety
    /// The result must stay inside the allocation the pointer came from.
    unsafe fn offset(self, count: isize) -> Self {
        SendPtr(self.0.offset(count))
    }
}

/// Split `[0, len)` in halves across `nthreads` and run [`unary_strided`] on
/// each leaf.
///
/// # Safety
/// Same contract as [`unary_strided`]. In addition `sy != 0` and no output
/// slot may be read as input by a different logical index, so that leaves
/// touch disjoint output slots and execution order is unobservable.
pub(crate) unsafe fn unary_threaded<T, F>(
    len: usize,
    xp: SendPtr<T>,
    sx: isize,
    yp: SendPtr<T>,
    sy: isize,
    nthreads: usize,
    f: &F,
) where
    T: Copy + MaybeSendSync,
    F: Fn(T) -> T + MaybeSync,
{
    debug_assert_ne!(sy, 0);

    if nthreads <= 1 || len <= MIN_THREAD_LENGTH {
        unary_strided(len, xp.as_const(), sx, yp.as_ptr(), sy, f);
        return;
    }

    let half = len / 2;
    let nt_left = nthreads / 2;
    let nt_right = nthreads - nt_left;

    let x_right = xp.offset(half as isize * sx);
    let y_right = yp.offset(half as isize * sy);

    rayon::join(
        || unary_threaded(half, xp, sx, yp, sy, nt_left, f),
        || unary_threaded(len - half, x_right, sx, y_right, sy, nt_right, f),
    );
}
