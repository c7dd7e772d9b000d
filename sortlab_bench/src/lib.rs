//! # Introduction
//!
//! Measuring the [`sortlab_orst`] sorters: wall clock sweeps over growing inputs saved as CSV,
//! a complexity fit over those files (optionally drawn as SVG charts), and a comparison counting
//! table.

pub mod compare;
pub mod complexity;
pub mod patterns;
pub mod plot;
pub mod report;
pub mod timer;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use patterns::Order;
use prettytable::{row, Table};
use rand::{rngs::StdRng, SeedableRng};
use sortlab_orst::SortAlgorithm;
use timer::Sweep;
use tracing::info;

/// Benchmark the sorters. Install the `sortlab` crate and run `sortlab bench --help` to see what
/// options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct BenchArgs {
    #[command(subcommand)]
    command: BenchCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum BenchCommands {
    /// Time the sorters over inputs of growing size and save the averages as CSV.
    Time {
        /// Algorithms to time against every order, one file per algorithm.
        #[arg(short, long, value_enum, value_delimiter = ',', num_args = 1..)]
        algorithms: Vec<SortAlgorithm>,

        /// Orders to time every algorithm on, one file per order.
        #[arg(short, long, value_enum, value_delimiter = ',', num_args = 1..)]
        orders: Vec<Order>,

        /// Largest input size is 10^exponent.
        #[arg(short, long, default_value_t = 3.0)]
        exponent: f64,

        /// Number of runs averaged for every size.
        #[arg(short, long, default_value_t = 5)]
        repeats: usize,

        /// Step between consecutive input sizes.
        #[arg(short, long, default_value_t = 100)]
        interval: usize,

        /// Seed for random input. Uses system entropy when left out.
        #[arg(long)]
        seed: Option<u64>,

        /// Directory the CSV files are written to.
        #[arg(long, env = "SORTLAB_RESULTS_DIR", default_value = "results")]
        results_dir: PathBuf,
    },

    /// Fit growth rates to a CSV file written by `time`.
    Fit {
        /// Results file to process
        #[arg(short, long, required = true)]
        file: PathBuf,

        /// Also draw every column with its fits as an SVG next to the file.
        #[arg(short, long)]
        plot: bool,
    },

    /// Count the comparisons each sorter makes on the same random input.
    Compare {
        /// Largest list size to compare on.
        #[arg(long, default_value_t = 10_000)]
        max_size: usize,

        /// Seed for random input. Uses system entropy when left out.
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl BenchArgs {
    pub fn run(self) -> Result<()> {
        match self.command {
            BenchCommands::Time {
                algorithms,
                orders,
                exponent,
                repeats,
                interval,
                seed,
                results_dir,
            } => {
                if algorithms.is_empty() && orders.is_empty() {
                    bail!("Nothing to time, pass --algorithms and/or --orders")
                }
                if repeats == 0 {
                    bail!("Repeats must be at least 1")
                }

                let sweep = Sweep {
                    sizes: patterns::input_sizes(exponent, interval)?,
                    interval,
                    repeats,
                    results_dir,
                };
                let mut rng = seeded(seed);

                let mut saved = Vec::new();
                for algorithm in algorithms {
                    let all_orders = <Order as clap::ValueEnum>::value_variants();
                    saved.push(sweep.run_with_fixed_algorithm(algorithm, all_orders, &mut rng)?);
                }
                for order in orders {
                    saved.push(sweep.run_with_fixed_order(order, &mut rng)?);
                }

                for path in saved {
                    println!("{} {}", "Saved ->".bold().green(), path.display());
                }
            }

            BenchCommands::Fit { file, plot } => {
                for path in fit_file(&file, plot)? {
                    println!("{} {}", "Saved ->".bold().green(), path.display());
                }
            }

            BenchCommands::Compare { max_size, seed } => {
                compare::run_compare(max_size, &mut seeded(seed))?
            }
        }

        Ok(())
    }
}

fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!(seed, "using a fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// `QuickSort_upto_1000_...__18.10.26.12-00-00.csv` is titled `QuickSort`.
fn title_of(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    match stem.split_once('_') {
        Some((title, _)) => title.to_string(),
        None => stem,
    }
}

/// `results/Random_upto_10__18.10.26.12-00-00.csv` plots `Quick Sort` to
/// `results/Random_upto_10__18.10.26.12-00-00__Quick_Sort.svg`.
fn chart_path(csv: &Path, column: &str) -> PathBuf {
    let stem = csv
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    csv.with_file_name(format!("{stem}__{}.svg", column.replace(' ', "_")))
}

/// Prints the fit table for every measurement column. With `plot`, also writes one chart per
/// column and returns their paths.
fn fit_file(path: &Path, plot: bool) -> Result<Vec<PathBuf>> {
    let csv = report::load_csv(path)?;
    if csv.header.len() < 2 {
        bail!("{} has no measurement columns", path.display())
    }

    let sizes = csv.column(0);
    let title = title_of(path);

    println!("{}", title.bold().underline().blue());

    let mut table = Table::new();
    table.add_row(row![
        "Column".bold(),
        "Shape".bold(),
        "Best Fit".bold(),
        "Upper Bound".bold(),
        "RMSE".bold(),
        "Bound From".bold()
    ]);

    let mut charts = Vec::new();
    for (index, name) in csv.header.iter().enumerate().skip(1) {
        let times = csv.column(index);
        let fit = complexity::analyse(&sizes, &times)?;

        if plot {
            let chart = chart_path(path, name);
            plot::plot_fit(&chart, &format!("{title}: {name}"), &sizes, &times, &fit)?;
            charts.push(chart);
        }

        table.add_row(row![
            name,
            fit.shape.to_string().green(),
            format!("{:.4} * {}", fit.coefficient, fit.shape),
            format!("{:.4} * {}", fit.upper_bound, fit.shape),
            format!("{:.2}", fit.rmse),
            format!("n = {}", fit.cutoff)
        ]);
    }

    table.printstd();
    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert_eq!(
            title_of(Path::new(
                "results/QuickSort_upto_100_interval_10_repeats_2__18.10.26.12-00-00.csv"
            )),
            "QuickSort"
        );
        assert_eq!(title_of(Path::new("Random_upto_10.csv")), "Random");
        assert_eq!(title_of(Path::new("plain.csv")), "plain");
    }

    #[test]
    fn fit_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let sizes = (0..20).map(|n| (n * 10) as f64).collect::<Vec<_>>();
        let quadratic = sizes.iter().map(|n| 2.0 * n * n).collect::<Vec<_>>();

        let path = report::save_to_csv(
            dir.path(),
            "BubbleSort_upto_190",
            &["Input Size".to_string(), "Random".to_string()],
            &[sizes, quadratic],
        )
        .unwrap();

        assert!(fit_file(&path, false).unwrap().is_empty());
    }

    #[test]
    fn chart_names() {
        assert_eq!(
            chart_path(Path::new("results/Random_upto_10__18.10.26.12-00-00.csv"), "Quick Sort"),
            Path::new("results/Random_upto_10__18.10.26.12-00-00__Quick_Sort.svg")
        );
    }

    #[test]
    fn fit_and_plot_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let sizes = (1..20).map(|n| (n * 10) as f64).collect::<Vec<_>>();
        let linear = sizes.iter().map(|n| 4.0 * n).collect::<Vec<_>>();
        let quadratic = sizes.iter().map(|n| n * n).collect::<Vec<_>>();

        let path = report::save_to_csv(
            dir.path(),
            "Random_upto_190",
            &[
                "Input Size".to_string(),
                "MergeSort".to_string(),
                "BubbleSort".to_string(),
            ],
            &[sizes, linear, quadratic],
        )
        .unwrap();

        let charts = fit_file(&path, true).unwrap();
        assert_eq!(charts.len(), 2);
        for chart in charts {
            assert_eq!(chart.parent(), path.parent());
            assert_eq!(chart.extension().unwrap(), "svg");
            assert!(std::fs::read_to_string(&chart).unwrap().contains("<svg"));
        }
    }

    #[test]
    fn fit_needs_measurements() {
        let dir = tempfile::tempdir().unwrap();
        let path = report::save_to_csv(
            dir.path(),
            "Empty",
            &["Input Size".to_string()],
            &[vec![0.0, 1.0]],
        )
        .unwrap();

        assert!(fit_file(&path, true).is_err());
    }
}
