//! Bubble sort, quick sort (Hoare partition), merge sort and heap sort over in-memory slices.
//!
//! # Example
//!
//! ```
//! use sortlab_orst::orst::{MergeSorter, Sorter};
//!
//! let mut slice = vec![5, 2, 9, 1, 5, 6];
//! MergeSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 5, 5, 6, 9], slice);
//! ```
//!
//! The free functions ([`bubble_sort`], [`quick_sort`], ...) work on `i32` slices and take an
//! explicit length, validating it once before handing over to the unchecked algorithm.
//!
//! ```
//! use sortlab_orst::orst::{is_sorted, quick_sort};
//!
//! let mut array = [3, 1, 2, 100];
//! quick_sort(&mut array, 3).unwrap();
//! assert_eq!(array, [1, 2, 3, 100]);
//! assert!(is_sorted(&array, 4).unwrap());
//!
//! assert!(quick_sort(&mut array, 5).is_err());
//! ```

mod entry;
mod error;
pub mod evaluator;
mod sorters;
mod support;

pub use entry::{
    bubble_sort, heap_sort, merge_sort, merge_sort_range, quick_sort, quick_sort_range,
};
pub use error::{Result, SortError};
pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::no_sorter::NoSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use support::{format_array, is_sorted, print_array, swap};

/// The sorting algorithm must implement the trait `Sorter`.
///
/// `Clone` is needed because quick sort holds on to a copy of its pivot and merge sort copies
/// both halves into scratch buffers before merging.
pub trait Sorter<T>
where
    T: Ord + Clone,
{
    /// Sorts the whole slice in place into non-decreasing order.
    fn sort(&self, slice: &mut [T]);

    /// Human readable name, used in tables and log lines.
    fn name(&self) -> &'static str;
}
