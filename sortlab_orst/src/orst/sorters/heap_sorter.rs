use crate::orst::Sorter;

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use sortlab_orst::orst::{HeapSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// The slice is viewed as a binary tree where node `i` has children `2i + 1` and `2i + 2`.
/// First it is rearranged into a max-heap, heapifying from the last parent `n / 2 - 1` back to
/// the root so that both subtrees of a node are already heaps by the time the node is visited.
/// Then the root, the current maximum, is swapped to the end of the heap, the heap shrinks by
/// one, and the new root is sifted down again.
///
/// In place, not stable, O(n log n) in every case.
#[derive(Default, Debug, Clone, Copy)]
pub struct HeapSorter;

pub(crate) fn heap_sort<T: Ord>(slice: &mut [T]) {
    let n = slice.len();

    // Build max heap
    for i in (0..n / 2).rev() {
        heapify(slice, n, i);
    }

    for i in (1..n).rev() {
        slice.swap(0, i);
        heapify(slice, i, 0);
    }
}

/// Restores the max-heap property for the subtree rooted at `i`, looking only at the first `n`
/// elements.
fn heapify<T: Ord>(slice: &mut [T], n: usize, i: usize) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && slice[left] > slice[largest] {
        largest = left;
    }

    if right < n && slice[right] > slice[largest] {
        largest = right;
    }

    if largest != i {
        slice.swap(i, largest);
        heapify(slice, n, largest);
    }
}

impl<T> Sorter<T> for HeapSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        heap_sort(slice)
    }

    fn name(&self) -> &'static str {
        "Heap Sort"
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::orst::sorters::fixtures::random_inputs;

    fn is_max_heap(slice: &[i32], n: usize) -> bool {
        (1..n).all(|child| slice[(child - 1) / 2] >= slice[child])
    }

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        HeapSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        HeapSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        HeapSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        HeapSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        HeapSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn duplicates() {
        let mut slice = [5, 2, 9, 1, 5, 6];
        HeapSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 5, 5, 6, 9]);

        let mut all_same = [3, 3, 3, 3];
        HeapSorter.sort(&mut all_same);
        assert_eq!(all_same, [3, 3, 3, 3]);
    }

    #[test]
    fn heapify_sifts_root_down() {
        let mut slice = [1, 9, 8, 7, 6, 5, 4];
        heapify(&mut slice, 7, 0);
        assert_eq!(slice, [9, 7, 8, 1, 6, 5, 4]);
        assert!(is_max_heap(&slice, 7));
    }

    #[test]
    fn heapify_respects_heap_size() {
        // The child at index 2 is outside the heap and must not be pulled up.
        let mut slice = [1, 2, 100];
        heapify(&mut slice, 2, 0);
        assert_eq!(slice, [2, 1, 100]);
    }

    #[test]
    fn matches_std_sort() {
        for keys in random_inputs(19) {
            let mut expected = keys.clone();
            expected.sort();

            let mut slice = keys.clone();
            HeapSorter.sort(&mut slice);
            assert_eq!(slice, expected, "input {keys:?}");

            HeapSorter.sort(&mut slice);
            assert_eq!(slice, expected, "second pass over {keys:?}");
        }
    }
}
