use std::io;
use std::result::Result as StdResult;

/// Alias for `Result<T, sortlab_orst::orst::SortError>`.
pub type Result<T> = StdResult<T, SortError>;

/// Raised by the checked entry points when the caller hands over a length, an index or a range
/// that does not fit inside the slice, or when the array printer cannot write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// A single position lies outside `[0, len)`.
    #[error("index {index} out of range for slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The logical length is larger than the storage behind it.
    #[error("length {length} out of range for slice of length {len}")]
    LengthOutOfRange { length: usize, len: usize },

    /// An inclusive `[low, high]` range that reaches past the end of the slice.
    #[error("range [{low}, {high}] out of range for slice of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },

    /// The diagnostic print could not reach stdout.
    #[error("unable to print array: {0}")]
    Output(io::ErrorKind),
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SortError::IndexOutOfRange { index, len })
    }
}

pub(crate) fn check_length(length: usize, len: usize) -> Result<()> {
    if length <= len {
        Ok(())
    } else {
        Err(SortError::LengthOutOfRange { length, len })
    }
}

/// `low >= high` is the empty or singleton range and only needs `low` to sit within the slice.
pub(crate) fn check_range(low: usize, high: usize, len: usize) -> Result<()> {
    let fits = if low >= high {
        low <= len
    } else {
        high < len
    };

    if fits {
        Ok(())
    } else {
        Err(SortError::InvalidRange { low, high, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_bounds() {
        assert!(check_index(0, 1).is_ok());
        assert_eq!(
            check_index(1, 1),
            Err(SortError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(check_index(0, 0).is_err());
    }

    #[test]
    fn length_bounds() {
        assert!(check_length(0, 0).is_ok());
        assert!(check_length(3, 3).is_ok());
        assert_eq!(
            check_length(4, 3),
            Err(SortError::LengthOutOfRange { length: 4, len: 3 })
        );
    }

    #[test]
    fn range_bounds() {
        // terminal ranges
        assert!(check_range(0, 0, 0).is_ok());
        assert!(check_range(3, 2, 3).is_ok());
        assert!(check_range(4, 0, 3).is_err());

        assert!(check_range(0, 2, 3).is_ok());
        assert_eq!(
            check_range(1, 3, 3),
            Err(SortError::InvalidRange {
                low: 1,
                high: 3,
                len: 3
            })
        );
    }

    #[test]
    fn messages() {
        let err = SortError::IndexOutOfRange { index: 7, len: 2 };
        assert_eq!(err.to_string(), "index 7 out of range for slice of length 2");

        let err = SortError::InvalidRange {
            low: 0,
            high: 9,
            len: 4,
        };
        assert_eq!(err.to_string(), "range [0, 9] out of range for slice of length 4");
    }
}
