//! Strided single-precision floor kernel.
//!
//! Rounds each element of a strided `f32` array toward negative infinity and
//! writes the results into another strided `f32` array, following the
//! BLAS-style stride/offset conventions of the `strided-rs` kernels.
//!
//! # Entry points
//!
//! - [`sfloor`]: strides only. A negative stride starts at the far end of the
//!   buffer, so `stride = -1` reads (or writes) the array back to front.
//! - [`sfloor_ndarray`]: explicit starting offsets for both arrays.
//! - [`sfloor_in_place`], [`sfloor_in_place_ndarray`]: `x` and `y` are the
//!   same buffer with the same stride and offset.
//! - [`try_sfloor`], [`try_sfloor_ndarray`]: report an out-of-range window as
//!   [`StridedError`] instead of panicking.
//! - [`sfloor_ndarray_unchecked`]: raw pointers, arbitrary overlap, no checks.
//!
//! The floor routines are instantiations of the generic unary map
//! ([`map_ndarray`] and friends), which accept any `T: Copy` and closure.
//!
//! `N <= 0` is a no-op for every entry point: nothing is read or written and
//! `y` is returned unchanged.
//!
//! # Example
//!
//! ```rust
//! use strided_floor::{sfloor, sfloor_ndarray};
//!
//! let x = [-1.1f32, 1.1, 3.8, 4.5, 5.9];
//! let mut y = [0.0f32; 5];
//! sfloor(5, &x, 1, &mut y, 1);
//! assert_eq!(y, [-2.0, 1.0, 3.0, 4.0, 5.0]);
//!
//! // Every other element, starting at index 1.
//! let x = [1.1f32, 2.1, 3.1, 4.1, 5.1, 6.1];
//! let mut y = [0.0f32; 6];
//! sfloor_ndarray(3, &x, 2, 1, &mut y, 1, 0);
//! assert_eq!(y, [2.0, 4.0, 6.0, 0.0, 0.0, 0.0]);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): long runs are split across the rayon pool.
//! - `simd`: contiguous runs are dispatched through `pulp` so the loop is
//!   compiled for the best available instruction set.

mod floor;
mod kernel;
mod map;
mod maybe_sync;
mod simd;
mod stride;
#[cfg(feature = "parallel")]
mod threading;

// ============================================================================
// Floor routines
// ============================================================================
pub use floor::{
    sfloor, sfloor_in_place, sfloor_in_place_ndarray, sfloor_ndarray, sfloor_ndarray_unchecked,
    try_sfloor, try_sfloor_ndarray,
};

// ============================================================================
// Generic unary map
// ============================================================================
pub use map::{map_in_place_ndarray, map_ndarray, map_ndarray_unchecked, try_map_ndarray};

// ============================================================================
// Stride utilities
// ============================================================================
pub use maybe_sync::{MaybeSendSync, MaybeSync};
pub use stride::{stride_to_offset, validate_window};

// ============================================================================
// Constants
// ============================================================================

/// Minimum number of logical elements before the `parallel` feature splits a
/// call across threads. Matches Julia's `MINTHREADLENGTH = 1 << 15`.
pub const MIN_THREAD_LENGTH: usize = 1 << 15;

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the checked (`try_*`) entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StridedError {
    /// The index window of an operand does not fit in its buffer.
    #[error("{operand} window [{min}, {max}] out of bounds for buffer of length {len}")]
    OutOfBounds {
        operand: &'static str,
        min: isize,
        max: isize,
        len: usize,
    },

    /// Integer overflow while computing an element index.
    #[error("offset overflow while computing index window")]
    OffsetOverflow,
}

/// Result type for strided operations.
pub type Result<T> = std::result::Result<T, StridedError>;
