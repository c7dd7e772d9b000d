//! Comparison counting.
//!
//! Wrap every element in a [`SortEvaluator`] that shares one counter and run any [`Sorter`]
//! over the wrapped slice. The counter then holds the number of comparisons the sorter made.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//! use sortlab_orst::orst::evaluator::SortEvaluator;
//! use sortlab_orst::orst::{HeapSorter, Sorter};
//!
//! let counter = Rc::new(Cell::new(0));
//! let mut values = SortEvaluator::wrap(&[3, 1, 2], &counter);
//!
//! HeapSorter.sort(&mut values);
//!
//! assert!(counter.get() > 0);
//! assert_eq!(SortEvaluator::unwrap_all(&values), [1, 2, 3]);
//! ```
//!
//! [`Sorter`]: crate::orst::Sorter

use std::cmp::Ordering;
use std::{cell::Cell, rc::Rc};

// In this the `elem` will be compared and the `comparison_counter` will be ignored.
#[derive(Debug, Clone)]
pub struct SortEvaluator<T> {
    elem: T,
    // Bumped on every comparison, which only ever gets `&self`, hence the cell.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    pub fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    pub fn elem(&self) -> &T {
        &self.elem
    }

    fn tick(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Clone> SortEvaluator<T> {
    /// Wraps each value, all sharing `counter`.
    pub fn wrap(values: &[T], counter: &Rc<Cell<usize>>) -> Vec<Self> {
        values
            .iter()
            .map(|value| Self::new(value.clone(), Rc::clone(counter)))
            .collect()
    }

    pub fn unwrap_all(values: &[Self]) -> Vec<T> {
        values.iter().map(|value| value.elem.clone()).collect()
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tick();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.tick();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tick();
        self.elem.cmp(&other.elem)
    }
}
