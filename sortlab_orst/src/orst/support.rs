use std::io::{self, Write};

use super::error::{check_index, check_length, Result, SortError};

/// Exchanges the values at positions `a` and `b`.
///
/// ```
/// use sortlab_orst::orst::swap;
///
/// let mut array = [1, 2, 3];
/// swap(&mut array, 0, 2).unwrap();
/// assert_eq!(array, [3, 2, 1]);
/// assert!(swap(&mut array, 0, 3).is_err());
/// ```
pub fn swap(slice: &mut [i32], a: usize, b: usize) -> Result<()> {
    check_index(a, slice.len())?;
    check_index(b, slice.len())?;

    slice.swap(a, b);
    Ok(())
}

/// Returns `true` iff `slice[..length]` is in non-decreasing order. Stops at the first
/// descending pair. Zero and one element prefixes are sorted.
pub fn is_sorted(slice: &[i32], length: usize) -> Result<bool> {
    check_length(length, slice.len())?;

    Ok(slice[..length].windows(2).all(|pair| pair[0] <= pair[1]))
}

/// Renders `slice[..length]` as one line, each value followed by two spaces.
pub fn format_array(slice: &[i32], length: usize) -> Result<String> {
    check_length(length, slice.len())?;

    let mut line = String::new();
    for value in &slice[..length] {
        line.push_str(&format!("{value}  "));
    }
    line.push('\n');

    Ok(line)
}

/// Prints [`format_array`] to stdout and flushes it.
pub fn print_array(slice: &[i32], length: usize) -> Result<()> {
    let line = format_array(slice, length)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(line.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|err| SortError::Output(err.kind()))
}
