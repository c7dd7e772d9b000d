//! # Introduction
//!
//! Classic in-memory sorting routines over integer slices: bubble sort, quick sort with Hoare's
//! partition scheme, merge sort and heap sort, along with the small helpers they share.

pub mod orst;

use clap::{Args, ValueEnum};
use colored::Colorize;
use orst::{
    bubble_sort, heap_sort, is_sorted, merge_sort, print_array, quick_sort, BubbleSorter,
    HeapSorter, MergeSorter, NoSorter, QuickSorter, Sorter,
};

/// Sort a list of integers given on the command line. Install the `sortlab` crate and run
/// `sortlab sort --help` to see what options are available
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Algorithm to sort with.
    #[arg(short, long, value_enum, default_value_t = SortAlgorithm::Quick)]
    algorithm: SortAlgorithm,

    /// Report whether the values were sorted before and after.
    #[arg(long)]
    check: bool,

    /// Values to sort.
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortAlgorithm {
    Quick,
    Merge,
    Heap,
    Bubble,
    /// Leave the input as it is.
    #[value(name = "none", alias = "no-sort")]
    NoSort,
}

impl SortAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => <BubbleSorter as Sorter<i32>>::name(&BubbleSorter),
            SortAlgorithm::Quick => <QuickSorter as Sorter<i32>>::name(&QuickSorter),
            SortAlgorithm::Merge => <MergeSorter as Sorter<i32>>::name(&MergeSorter),
            SortAlgorithm::Heap => <HeapSorter as Sorter<i32>>::name(&HeapSorter),
            SortAlgorithm::NoSort => <NoSorter as Sorter<i32>>::name(&NoSorter),
        }
    }

    /// Sorts `slice[..length]` through the checked entry points.
    pub fn sort(self, slice: &mut [i32], length: usize) -> orst::Result<()> {
        match self {
            SortAlgorithm::Bubble => bubble_sort(slice, length),
            SortAlgorithm::Quick => quick_sort(slice, length),
            SortAlgorithm::Merge => merge_sort(slice, length),
            SortAlgorithm::Heap => heap_sort(slice, length),
            SortAlgorithm::NoSort => Ok(()),
        }
    }
}

impl SortArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let SortArgs {
            algorithm,
            check,
            mut values,
        } = self;
        let length = values.len();

        if check {
            report_sorted("Before", is_sorted(&values, length)?);
        }

        algorithm.sort(&mut values, length)?;

        println!("{}", algorithm.name().bold().underline().blue());
        print_array(&values, length)?;

        if check {
            report_sorted("After", is_sorted(&values, length)?);
        }

        Ok(())
    }
}

fn report_sorted(when: &str, sorted: bool) {
    let verdict = if sorted {
        "sorted".green()
    } else {
        "not sorted".red()
    };
    println!("{} {}", format!("{when} ->").bold(), verdict);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_sorts() {
        for &algorithm in SortAlgorithm::value_variants() {
            if algorithm == SortAlgorithm::NoSort {
                continue;
            }
            let mut values = vec![5, 2, 9, 1, 5, 6];
            algorithm.sort(&mut values, 6).unwrap();
            assert_eq!(values, [1, 2, 5, 5, 6, 9], "{}", algorithm.name());
        }
    }

    #[test]
    fn no_sort_leaves_values() {
        let mut values = vec![2, 1];
        SortAlgorithm::NoSort.sort(&mut values, 2).unwrap();
        assert_eq!(values, [2, 1]);
        assert_eq!(SortAlgorithm::NoSort.name(), "No Sort");
    }

    #[test]
    fn value_names() {
        for (value, algorithm) in [
            ("quick", SortAlgorithm::Quick),
            ("merge", SortAlgorithm::Merge),
            ("heap", SortAlgorithm::Heap),
            ("bubble", SortAlgorithm::Bubble),
            ("none", SortAlgorithm::NoSort),
            ("no-sort", SortAlgorithm::NoSort),
        ] {
            assert_eq!(SortAlgorithm::from_str(value, true), Ok(algorithm), "{value}");
        }
    }
}
