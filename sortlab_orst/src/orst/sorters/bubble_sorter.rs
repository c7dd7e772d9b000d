use crate::orst::Sorter;

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use sortlab_orst::orst::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. After pass `i` the
/// largest element of the unsorted prefix has "bubbled" to
/// its final place at the end of that prefix, so the next
/// pass can stop one element earlier.
///
/// # Algorithm
///
/// All `n - 1` passes always run, there is no early exit when a pass makes no swap. The cost is
/// therefore quadratic even on input that is already sorted. Only a strict `>` triggers a swap,
/// which keeps equal elements in their original order.
#[derive(Default, Debug, Clone, Copy)]
pub struct BubbleSorter;

pub(crate) fn bubble_sort<T: Ord>(slice: &mut [T]) {
    let n = slice.len();

    for i in 0..n.saturating_sub(1) {
        // Last i elements are already in place
        for j in 0..(n - i - 1) {
            if slice[j] > slice[j + 1] {
                slice.swap(j, j + 1);
            }
        }
    }
}

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        bubble_sort(slice)
    }

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }
}
