//! Length and range addressed entry points over `i32` slices.
//!
//! Each function validates what it is given exactly once and then runs the unchecked algorithm
//! over `slice[..length]` (or the inclusive range). Nothing past that prefix or range is read or
//! written.

use tracing::trace;

use super::error::{check_length, check_range, Result};
use super::sorters::{bubble_sorter, heap_sorter, merge_sorter, quick_sorter};

/// Bubble sorts `slice[..length]`.
pub fn bubble_sort(slice: &mut [i32], length: usize) -> Result<()> {
    check_length(length, slice.len())?;
    trace!(length, "bubble sort");

    bubble_sorter::bubble_sort(&mut slice[..length]);
    Ok(())
}

/// Quick sorts `slice[..length]`, i.e. the range `[0, length - 1]`.
pub fn quick_sort(slice: &mut [i32], length: usize) -> Result<()> {
    check_length(length, slice.len())?;
    trace!(length, "quick sort");

    if let Some(high) = length.checked_sub(1) {
        quick_sorter::quicksort(slice, 0, high);
    }
    Ok(())
}

/// Quick sorts the inclusive range `[low, high]`. `low >= high` does nothing.
pub fn quick_sort_range(slice: &mut [i32], low: usize, high: usize) -> Result<()> {
    check_range(low, high, slice.len())?;
    trace!(low, high, "quick sort range");

    quick_sorter::quicksort(slice, low, high);
    Ok(())
}

/// Merge sorts `slice[..length]`, i.e. the range `[0, length - 1]`.
pub fn merge_sort(slice: &mut [i32], length: usize) -> Result<()> {
    check_length(length, slice.len())?;
    trace!(length, "merge sort");

    if let Some(r) = length.checked_sub(1) {
        merge_sorter::merge_sort(slice, 0, r);
    }
    Ok(())
}

/// Merge sorts the inclusive range `[l, r]`. `l >= r` does nothing.
pub fn merge_sort_range(slice: &mut [i32], l: usize, r: usize) -> Result<()> {
    check_range(l, r, slice.len())?;
    trace!(l, r, "merge sort range");

    merge_sorter::merge_sort(slice, l, r);
    Ok(())
}

/// Heap sorts `slice[..length]`.
pub fn heap_sort(slice: &mut [i32], length: usize) -> Result<()> {
    check_length(length, slice.len())?;
    trace!(length, "heap sort");

    heap_sorter::heap_sort(&mut slice[..length]);
    Ok(())
}
