use crate::orst::Sorter;

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use sortlab_orst::orst::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Merge sort is a divide-and-conquer algorithm invented by John von Neumann in 1945. The range
/// is split at its midpoint, both halves are sorted recursively and then merged back together.
///
/// # Algorithm
///
/// Each merge copies the two sorted halves into scratch buffers that live only for that merge,
/// then repeatedly writes back the smaller of the two fronts. On a tie the left front wins,
/// which is what makes the sort stable. Once either buffer runs dry the rest of the other one
/// is copied over as is.
///
/// O(n log n) comparisons in every case, O(n) scratch space.
#[derive(Default, Debug, Clone, Copy)]
pub struct MergeSorter;

/// Sorts the inclusive range `[l, r]`. `l >= r` is the terminal case.
pub(crate) fn merge_sort<T: Ord + Clone>(slice: &mut [T], l: usize, r: usize) {
    if l < r {
        let m = l + (r - l) / 2;

        merge_sort(slice, l, m);
        merge_sort(slice, m + 1, r);

        merge(slice, l, m, r);
    }
}

/// Merges the sorted runs `[l, m]` and `[m + 1, r]` back into `[l, r]`.
fn merge<T: Ord + Clone>(slice: &mut [T], l: usize, m: usize, r: usize) {
    let left = slice[l..=m].to_vec();
    let right = slice[m + 1..=r].to_vec();

    let (mut i, mut j, mut k) = (0, 0, l);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            slice[k] = left[i].clone();
            i += 1;
        } else {
            slice[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    // At most one of these is non-empty.
    for elem in left[i..].iter().chain(&right[j..]) {
        slice[k] = elem.clone();
        k += 1;
    }
}

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        if let Some(r) = slice.len().checked_sub(1) {
            merge_sort(slice, 0, r)
        }
    }

    fn name(&self) -> &'static str {
        "Merge Sort"
    }
}
