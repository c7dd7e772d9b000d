//! Input arrays for the timing harness.

use std::fmt::{self, Display};

use anyhow::{bail, Result};
use clap::ValueEnum;
use rand::Rng;

/// Largest value (exclusive) of a random element, the C `RAND_MAX` of a 32 bit `int`.
pub const RANDOM_MAX: i32 = i32::MAX;

/// Exponents above this would ask for more elements than an `i32` can count.
pub const MAX_EXPONENT: f64 = 9.0;

/// The arrangement of the values handed to a sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// `size, size - 1, ..., 1`
    Reverse,
    /// Uniform in `[0, 2147483647)`
    Random,
    /// `0, 1, ..., size - 1`
    PreSorted,
}

impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Reverse => "Reverse",
            Order::Random => "Random",
            Order::PreSorted => "Pre-sorted",
        };
        write!(f, "{name}")
    }
}

/// Builds exactly `size` values in the given order.
///
/// ```
/// use sortlab_bench::patterns::{generate, Order};
///
/// let mut rng = rand::thread_rng();
/// assert_eq!(generate(Order::Reverse, 4, &mut rng).unwrap(), [4, 3, 2, 1]);
/// assert_eq!(generate(Order::PreSorted, 3, &mut rng).unwrap(), [0, 1, 2]);
/// ```
pub fn generate<R: Rng>(order: Order, size: usize, rng: &mut R) -> Result<Vec<i32>> {
    let Ok(top) = i32::try_from(size) else {
        bail!("Cannot generate {size} values, at most {} fit in an i32", i32::MAX)
    };

    let values = match order {
        Order::Reverse => (1..=top).rev().collect(),
        Order::Random => (0..size).map(|_| rng.gen_range(0..RANDOM_MAX)).collect(),
        Order::PreSorted => (0..top).collect(),
    };

    Ok(values)
}

/// Every input size from `0` up to and including `floor(10^exponent)`, `interval` apart.
///
/// ```
/// use sortlab_bench::patterns::input_sizes;
///
/// assert_eq!(input_sizes(2.0, 25).unwrap(), [0, 25, 50, 75, 100]);
/// assert_eq!(input_sizes(1.0, 3).unwrap(), [0, 3, 6, 9]);
/// ```
pub fn input_sizes(exponent: f64, interval: usize) -> Result<Vec<usize>> {
    if interval == 0 {
        bail!("Interval must be at least 1")
    }
    if !exponent.is_finite() || exponent < 0.0 {
        bail!("Exponent must be a non-negative number, got {exponent}")
    }
    if exponent > MAX_EXPONENT {
        bail!("Exponent {exponent} is too large, the maximum is {MAX_EXPONENT}")
    }

    // Whole exponents stay in integer arithmetic so that 10^3 is exactly 1000.
    let max = if exponent.fract() == 0.0 {
        10usize.pow(exponent as u32)
    } else {
        10f64.powf(exponent).floor() as usize
    };
    Ok((0..=max).step_by(interval).collect())
}
