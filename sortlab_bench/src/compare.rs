//! Counts the comparisons each sorter makes on the same random input.

use std::{cell::Cell, rc::Rc, time::Duration, time::Instant};

use anyhow::{bail, Result};
use colored::Colorize;
use prettytable::{row, Table};
use rand::Rng;
use sortlab_orst::orst::evaluator::SortEvaluator;
use sortlab_orst::orst::{BubbleSorter, HeapSorter, MergeSorter, QuickSorter, Sorter};
use tracing::debug;

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;
const MILLION: usize = 1_000_000;

/// Sizes the comparison table is printed for.
pub const SIZES: [usize; 6] = [ZERO, ONE, HUNDRED, TEN_THOUSAND, HUNDRED_THOUSAND, MILLION];

/// Bubble sort is quadratic, anything bigger takes too long to be worth waiting for.
pub const BUBBLE_LIMIT: usize = TEN_THOUSAND;

/// What one sorter did with one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub comparisons: usize,
    pub took: Duration,
}

/// Sorts a fresh copy of `values`, counting comparisons. Fails if the result is not sorted.
pub fn run_bench<S>(sorter: &S, values: &[i32], counter: &Rc<Cell<usize>>) -> Result<Outcome>
where
    S: Sorter<SortEvaluator<i32>>,
{
    let mut wrapped = SortEvaluator::wrap(values, counter);
    counter.set(0);

    let now = Instant::now();
    sorter.sort(&mut wrapped);
    let took = now.elapsed();
    let comparisons = counter.get();

    if !wrapped.windows(2).all(|w| w[0].elem() <= w[1].elem()) {
        bail!("{} left {} values unsorted", sorter.name(), values.len())
    }

    debug!(sorter = sorter.name(), len = values.len(), comparisons, "compared");
    Ok(Outcome { comparisons, took })
}

fn add_row<S>(table: &mut Table, sorter: &S, values: &[i32], counter: &Rc<Cell<usize>>) -> Result<()>
where
    S: Sorter<SortEvaluator<i32>>,
{
    let outcome = run_bench(sorter, values, counter)?;
    table.add_row(row![
        sorter.name(),
        outcome.comparisons.to_string(),
        format!("{:?}", outcome.took)
    ]);
    Ok(())
}

/// Prints one table per size in [`SIZES`] up to `max_size`.
pub fn run_compare<R: Rng>(max_size: usize, rng: &mut R) -> Result<()> {
    let counter = Rc::new(Cell::new(0));

    for n in SIZES.into_iter().filter(|&n| n <= max_size) {
        let values = (0..n).map(|_| rng.gen::<i32>()).collect::<Vec<_>>();

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        if n <= BUBBLE_LIMIT {
            add_row(&mut table, &BubbleSorter, &values, &counter)?;
        } else {
            table.add_row(row!["Bubble Sort", "Skipped".red(), "Too slow at this size"]);
        }
        add_row(&mut table, &QuickSorter, &values, &counter)?;
        add_row(&mut table, &MergeSorter, &values, &counter)?;
        add_row(&mut table, &HeapSorter, &values, &counter)?;

        table.printstd();
        println!();
    }

    Ok(())
}
