use crate::orst::Sorter;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort) using Hoare's
/// partition scheme.
///
/// # Usage
///```
/// use sortlab_orst::orst::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting.
///
/// # Algorithm
///
/// The pivot is the value sitting at the middle index of the range. Two cursors walk towards
/// each other: the left one stops on anything not smaller than the pivot, the right one on
/// anything not larger. Out of place pairs are swapped until the cursors meet or cross, and the
/// right cursor becomes the split point.
///
/// Unlike the Lomuto scheme the pivot is not parked at its final index, so the left half is
/// `[low, split]` with the split point *included*, and the right half is `[split + 1, high]`.
///
/// Not stable.
#[derive(Default, Debug, Clone, Copy)]
pub struct QuickSorter;

/// Sorts the inclusive range `[low, high]`. `low >= high` is the terminal case.
pub(crate) fn quicksort<T: Ord + Clone>(slice: &mut [T], low: usize, high: usize) {
    if low < high {
        let split = partition(slice, low, high);

        quicksort(slice, low, split);
        quicksort(slice, split + 1, high);
    }
}

/// Hoare partition of `[low, high]` (requires `low < high`). Returns `j` such that every
/// element of `[low, j]` is `<=` every element of `[j + 1, high]`, with `low <= j < high`.
fn partition<T: Ord + Clone>(slice: &mut [T], low: usize, high: usize) -> usize {
    let pivot = slice[low + (high - low) / 2].clone();

    let mut i = low;
    let mut j = high;

    loop {
        while slice[i] < pivot {
            i += 1;
        }

        while slice[j] > pivot {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        slice.swap(i, j);

        // i < j held before the swap, so j - 1 >= low.
        i += 1;
        j -= 1;
    }
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        if let Some(high) = slice.len().checked_sub(1) {
            quicksort(slice, 0, high)
        }
    }

    fn name(&self) -> &'static str {
        "Quick Sort"
    }
}
