//! Stride/offset conventions shared by every entry point.

use crate::{Result, StridedError};

/// Starting index of an `n`-element traversal with the given stride when no
/// explicit offset is supplied.
///
/// A non-negative stride starts at index 0. A negative stride starts at
/// `(1 - n) * stride`, so the walk ends at index 0 and touches the same
/// buffer slots as the forward walk would.
///
/// Returns 0 when `n <= 0`.
///
/// ```
/// use strided_floor::stride_to_offset;
///
/// assert_eq!(stride_to_offset(4, 1), 0);
/// assert_eq!(stride_to_offset(4, -1), 3);
/// assert_eq!(stride_to_offset(3, -2), 4);
/// ```
#[inline]
pub fn stride_to_offset(n: isize, stride: isize) -> usize {
    if n <= 0 || stride >= 0 {
        return 0;
    }
    ((n - 1) as usize).saturating_mul(stride.unsigned_abs())
}

/// Check that the `n` indices `offset + i * stride` (`i` in `[0, n)`) all fall
/// inside a buffer of length `len`.
///
/// `operand` names the array in the returned error.
///
/// # Errors
/// - [`StridedError::OffsetOverflow`] if the index arithmetic overflows `isize`.
/// - [`StridedError::OutOfBounds`] if the lowest index is negative or the
///   highest is `>= len`.
pub fn validate_window(
    operand: &'static str,
    len: usize,
    n: usize,
    stride: isize,
    offset: usize,
) -> Result<()> {
    if n == 0 {
        return Ok(());
    }

    let last = isize::try_from(n - 1).map_err(|_| StridedError::OffsetOverflow)?;
    let start = isize::try_from(offset).map_err(|_| StridedError::OffsetOverflow)?;
    let end = stride
        .checked_mul(last)
        .and_then(|span| start.checked_add(span))
        .ok_or(StridedError::OffsetOverflow)?;

    let (min, max) = if stride >= 0 { (start, end) } else { (end, start) };
    if min < 0 || max as usize >= len {
        return Err(StridedError::OutOfBounds {
            operand,
            min,
            max,
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_to_offset_non_positive_n() {
        assert_eq!(stride_to_offset(0, -3), 0);
        assert_eq!(stride_to_offset(-5, -1), 0);
    }

    #[test]
    fn test_stride_to_offset_zero_stride() {
        assert_eq!(stride_to_offset(10, 0), 0);
    }

    #[test]
    fn test_stride_to_offset_matches_formula() {
        for n in 1..6isize {
            for stride in -4..0isize {
                assert_eq!(stride_to_offset(n, stride) as isize, (1 - n) * stride);
            }
        }
    }

    #[test]
    fn test_validate_window_forward() {
        assert!(validate_window("x", 6, 3, 2, 1).is_ok());
        assert!(validate_window("x", 6, 3, 2, 0).is_ok());
        let err = validate_window("x", 6, 4, 2, 0).unwrap_err();
        assert_eq!(
            err,
            StridedError::OutOfBounds {
                operand: "x",
                min: 0,
                max: 6,
                len: 6
            }
        );
    }

    #[test]
    fn test_validate_window_reverse() {
        assert!(validate_window("y", 4, 4, -1, 3).is_ok());
        let err = validate_window("y", 4, 4, -1, 2).unwrap_err();
        assert!(matches!(
            err,
            StridedError::OutOfBounds {
                operand: "y",
                min: -1,
                max: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_window_zero_stride() {
        assert!(validate_window("x", 1, 100, 0, 0).is_ok());
        assert!(validate_window("x", 1, 100, 0, 1).is_err());
    }

    #[test]
    fn test_validate_window_empty() {
        assert!(validate_window("x", 0, 0, 7, 99).is_ok());
    }

    #[test]
    fn test_validate_window_overflow() {
        assert_eq!(
            validate_window("x", 8, 3, isize::MAX, 0),
            Err(StridedError::OffsetOverflow)
        );
        assert_eq!(
            validate_window("x", 8, 1, 1, usize::MAX),
            Err(StridedError::OffsetOverflow)
        );
    }

    #[test]
    fn test_error_message() {
        let err = validate_window("y", 2, 3, 1, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "y window [0, 2] out of bounds for buffer of length 2"
        );
    }
}
