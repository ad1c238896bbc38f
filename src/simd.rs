//! Runtime instruction-set dispatch for the contiguous floor loop.
//!
//! With the `simd` feature, unit-stride runs execute inside
//! `pulp::Arch::dispatch`, so the plain `f32::floor` loop is compiled for
//! the widest instruction set the host supports (e.g. `roundps` on x86 with
//! SSE4.1). Strided runs never come through here.

/// Run `f` under the best instruction set `pulp` detects at runtime.
#[inline(always)]
pub(crate) fn dispatch<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "simd")]
    {
        pulp::Arch::new().dispatch(f)
    }
    #[cfg(not(feature = "simd"))]
    {
        f()
    }
}

/// Runs shorter than this skip the dispatch; its overhead dominates.
const DISPATCH_MIN_LEN: usize = 64;

#[inline(always)]
pub(crate) fn dispatch_if_large<R>(len: usize, f: impl FnOnce() -> R) -> R {
    if len >= DISPATCH_MIN_LEN {
        dispatch(f)
    } else {
        f()
    }
}
