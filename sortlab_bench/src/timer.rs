//! Wall clock timing of the sorters over generated inputs.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::ValueEnum;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{Cell, Row, Table};
use rand::Rng;
use sortlab_orst::orst::is_sorted;
use sortlab_orst::SortAlgorithm;
use tracing::debug;

use crate::patterns::{self, Order};
use crate::report;

/// Sorts one freshly generated input and returns how long the sort took, in nanoseconds.
///
/// The output is checked afterwards. An unsorted result is an error for every algorithm except
/// [`SortAlgorithm::NoSort`].
pub fn time_sort<R: Rng>(
    algorithm: SortAlgorithm,
    order: Order,
    size: usize,
    rng: &mut R,
) -> Result<u128> {
    let mut values = patterns::generate(order, size, rng)?;

    let now = Instant::now();
    algorithm.sort(&mut values, size)?;
    let took = now.elapsed().as_nanos();

    if algorithm != SortAlgorithm::NoSort && !is_sorted(&values, size)? {
        bail!("list not sorted, {order}, {size}, {}", algorithm.name())
    }

    Ok(took)
}

/// Mean running time in nanoseconds for every size, over `repeats` rounds.
pub fn average_runtimes<R: Rng>(
    algorithm: SortAlgorithm,
    order: Order,
    repeats: usize,
    sizes: &[usize],
    rng: &mut R,
) -> Result<Vec<f64>> {
    if repeats == 0 {
        bail!("Repeats must be at least 1")
    }

    let pb = ProgressBar::new(repeats as u64);
    pb.set_style(ProgressStyle::with_template(
        "{msg} -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Repeat: ({pos}/{len}, ETA: {eta})",
    )?);
    pb.set_message(format!("{} ({order})", algorithm.name()));

    let mut totals = vec![0u128; sizes.len()];
    for repeat in 0..repeats {
        debug!(repeat, algorithm = algorithm.name(), %order, "timing round");

        for (total, &size) in totals.iter_mut().zip(sizes) {
            *total += time_sort(algorithm, order, size, rng)?;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(totals
        .into_iter()
        .map(|total| total as f64 / repeats as f64)
        .collect())
}

/// One timing session: the input sizes, how often to repeat them and where to put the results.
#[derive(Debug, Clone)]
pub struct Sweep {
    pub sizes: Vec<usize>,
    pub interval: usize,
    pub repeats: usize,
    pub results_dir: PathBuf,
}

impl Sweep {
    /// Times `algorithm` over every order and saves one CSV with a column per order.
    pub fn run_with_fixed_algorithm<R: Rng>(
        &self,
        algorithm: SortAlgorithm,
        orders: &[Order],
        rng: &mut R,
    ) -> Result<PathBuf> {
        let mut columns = Vec::with_capacity(orders.len());
        for &order in orders {
            columns.push(average_runtimes(
                algorithm,
                order,
                self.repeats,
                &self.sizes,
                rng,
            )?);
        }

        let labels = orders.iter().map(Order::to_string).collect::<Vec<_>>();
        self.finish(&file_label(algorithm), algorithm.name(), &labels, columns)
    }

    /// Times every algorithm, the `NoSort` baseline included, on `order` and saves one CSV with
    /// a column per algorithm.
    pub fn run_with_fixed_order<R: Rng>(&self, order: Order, rng: &mut R) -> Result<PathBuf> {
        let algorithms = SortAlgorithm::value_variants();

        let mut columns = Vec::with_capacity(algorithms.len());
        for &algorithm in algorithms {
            columns.push(average_runtimes(
                algorithm,
                order,
                self.repeats,
                &self.sizes,
                rng,
            )?);
        }

        let labels = algorithms
            .iter()
            .map(|&algorithm| file_label(algorithm))
            .collect::<Vec<_>>();
        let title = format!("{order} Order");
        self.finish(&order.to_string(), &title, &labels, columns)
    }

    /// Prints the table and writes the CSV.
    fn finish(
        &self,
        label: &str,
        title: &str,
        labels: &[String],
        columns: Vec<Vec<f64>>,
    ) -> Result<PathBuf> {
        println!("{}", title.bold().underline().blue());
        runtime_table(&self.sizes, labels, &columns).printstd();
        println!();

        let mut header = vec![String::from("Input Size")];
        header.extend_from_slice(labels);

        let mut all_columns = vec![self.sizes.iter().map(|&n| n as f64).collect::<Vec<_>>()];
        all_columns.extend(columns);

        report::save_to_csv(&self.results_dir, &self.file_stem(label), &header, &all_columns)
    }

    /// `{label}_upto_{max}_interval_{interval}_repeats_{repeats}`
    pub fn file_stem(&self, label: &str) -> String {
        format!(
            "{label}_upto_{}_interval_{}_repeats_{}",
            self.sizes.last().copied().unwrap_or(0),
            self.interval,
            self.repeats
        )
    }
}

/// `Quick Sort` becomes `QuickSort`, keeping file names and CSV headers free of spaces.
fn file_label(algorithm: SortAlgorithm) -> String {
    algorithm.name().replace(' ', "")
}

fn runtime_table(sizes: &[usize], labels: &[String], columns: &[Vec<f64>]) -> Table {
    let mut table = Table::new();

    let mut header = vec![Cell::new("Input Size").style_spec("b")];
    header.extend(labels.iter().map(|label| Cell::new(label).style_spec("b")));
    table.add_row(Row::new(header));

    for (row, size) in sizes.iter().enumerate() {
        let mut cells = vec![Cell::new(&size.to_string())];
        cells.extend(
            columns
                .iter()
                .map(|column| Cell::new(&format!("{:.0} ns", column[row]))),
        );
        table.add_row(Row::new(cells));
    }

    table
}
