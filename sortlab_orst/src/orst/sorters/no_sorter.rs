use crate::orst::Sorter;

/// Leaves the slice untouched.
///
/// Used by the timing harness as a baseline: whatever it measures for `NoSorter` is the cost of
/// the harness itself.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoSorter;

impl<T> Sorter<T> for NoSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, _slice: &mut [T]) {}

    fn name(&self) -> &'static str {
        "No Sort"
    }
}

#[test]
fn leaves_input_alone() {
    let mut slice = [3, 1, 2];
    NoSorter.sort(&mut slice);
    assert_eq!(slice, [3, 1, 2]);
}
