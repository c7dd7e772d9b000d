//! Guessing the growth rate of measured running times.
//!
//! Every [`Shape`] is a single-coefficient model `y = a * f(n)`. The coefficient is fitted by
//! least squares, which for such a model has the closed form `a = Σ f(n) y / Σ f(n)²`. The shape
//! with the smallest root mean square error wins. On top of the best fit an upper bound
//! coefficient is derived: the largest `y / f(n)` once the first fifth of the points, where
//! start-up noise dominates, has been skipped.

use std::fmt::{self, Display};

use anyhow::{bail, Result};

/// Candidate growth rates, cheapest first. Ties go to the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Constant,
    LogN,
    N,
    NLogN,
    NSquared,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Constant,
        Shape::LogN,
        Shape::N,
        Shape::NLogN,
        Shape::NSquared,
    ];

    /// `f(n)` for this shape.
    pub fn eval(self, n: f64) -> f64 {
        match self {
            Shape::Constant => 1.0,
            Shape::LogN => n.ln(),
            Shape::N => n,
            Shape::NLogN => n * n.ln(),
            Shape::NSquared => n * n,
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Constant => "Constant",
            Shape::LogN => "log n",
            Shape::N => "n",
            Shape::NLogN => "n log n",
            Shape::NSquared => "n^2",
        };
        write!(f, "{name}")
    }
}

/// The outcome of [`analyse`] for one column of measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub shape: Shape,
    /// Least squares coefficient of `shape`.
    pub coefficient: f64,
    /// Root mean square error of the least squares fit.
    pub rmse: f64,
    /// Smallest `a` such that `a * f(n)` is above every point from `cutoff` on.
    pub upper_bound: f64,
    /// Input size at the 20% mark.
    pub cutoff: f64,
}

/// Least squares coefficient of `shape` over the points.
pub fn coefficient(shape: Shape, xs: &[f64], ys: &[f64]) -> f64 {
    let (num, den) = xs.iter().zip(ys).fold((0.0, 0.0), |(num, den), (&x, &y)| {
        let f = shape.eval(x);
        (num + f * y, den + f * f)
    });

    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

pub fn rmse(shape: Shape, a: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let sum = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (a * shape.eval(x) - y).powi(2))
        .sum::<f64>();

    (sum / xs.len() as f64).sqrt()
}

/// Largest `y / f(n)` over the points. Points where `f(n)` is zero say nothing about the bound
/// and are skipped.
pub fn upper_bound(shape: Shape, xs: &[f64], ys: &[f64]) -> f64 {
    xs.iter()
        .zip(ys)
        .filter_map(|(&x, &y)| {
            let f = shape.eval(x);
            (f != 0.0).then(|| y / f)
        })
        .fold(0.0, f64::max)
}

/// Fits every [`Shape`] and keeps the one with the smallest error.
pub fn best_fit(xs: &[f64], ys: &[f64]) -> Result<(Shape, f64, f64)> {
    check_points(xs, ys)?;

    let mut best: Option<(Shape, f64, f64)> = None;
    for shape in Shape::ALL {
        let a = coefficient(shape, xs, ys);
        let error = rmse(shape, a, xs, ys);

        match best {
            Some((_, _, best_error)) if error >= best_error => {}
            _ => best = Some((shape, a, error)),
        }
    }

    match best {
        Some(best) => Ok(best),
        None => bail!("No shape could be fitted"),
    }
}

/// Best fit plus upper bound for one column of `(input size, time)` points.
///
/// Input sizes below 1 are raised to 1 so that `log n` stays finite.
///
/// ```
/// use sortlab_bench::complexity::{analyse, Shape};
///
/// let sizes = (0..50).map(|n| (n * 10) as f64).collect::<Vec<_>>();
/// let times = sizes.iter().map(|n| 3.0 * n * n).collect::<Vec<_>>();
///
/// let fit = analyse(&sizes, &times).unwrap();
/// assert_eq!(fit.shape, Shape::NSquared);
/// assert!((fit.coefficient - 3.0).abs() < 1e-9);
/// ```
pub fn analyse(sizes: &[f64], times: &[f64]) -> Result<Fit> {
    check_points(sizes, times)?;

    let xs = sizes.iter().map(|&n| n.max(1.0)).collect::<Vec<_>>();
    let (shape, coefficient, rmse) = best_fit(&xs, times)?;

    let mark = xs.len() / 5;
    let upper_bound = upper_bound(shape, &xs[mark..], &times[mark..]);

    Ok(Fit {
        shape,
        coefficient,
        rmse,
        upper_bound,
        cutoff: xs[mark],
    })
}

fn check_points(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.is_empty() {
        bail!("Nothing to fit, there are no measurements")
    }
    if xs.len() != ys.len() {
        bail!(
            "Got {} input sizes but {} measurements",
            xs.len(),
            ys.len()
        )
    }
    if let Some(bad) = xs.iter().chain(ys).find(|v| !v.is_finite()) {
        bail!("Measurements must be finite numbers, found {bad}")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Vec<f64> {
        (1..=40).map(|n| (n * 25) as f64).collect()
    }

    fn fit_of(model: impl Fn(f64) -> f64) -> Fit {
        let xs = sizes();
        let ys = xs.iter().map(|&n| model(n)).collect::<Vec<_>>();
        analyse(&xs, &ys).unwrap()
    }

    #[test]
    fn recognises_each_shape() {
        assert_eq!(fit_of(|_| 42.0).shape, Shape::Constant);
        assert_eq!(fit_of(|n| 5.0 * n.ln()).shape, Shape::LogN);
        assert_eq!(fit_of(|n| 2.0 * n).shape, Shape::N);
        assert_eq!(fit_of(|n| 0.5 * n * n.ln()).shape, Shape::NLogN);
        assert_eq!(fit_of(|n| 7.0 * n * n).shape, Shape::NSquared);
    }

    #[test]
    fn exact_data_has_no_error() {
        let fit = fit_of(|n| 2.0 * n);
        assert!((fit.coefficient - 2.0).abs() < 1e-9);
        assert!(fit.rmse < 1e-6);
        assert!((fit.upper_bound - 2.0).abs() < 1e-9);
    }

    #[test]
    fn upper_bound_covers_points_after_the_mark() {
        let xs = sizes();
        // noisy linear data
        let ys = xs
            .iter()
            .enumerate()
            .map(|(i, &n)| n * if i % 3 == 0 { 2.5 } else { 2.0 })
            .collect::<Vec<_>>();

        let fit = analyse(&xs, &ys).unwrap();
        assert_eq!(fit.shape, Shape::N);
        assert_eq!(fit.cutoff, xs[8]);
        assert!((fit.upper_bound - 2.5).abs() < 1e-9);
        for (x, y) in xs.iter().zip(&ys).skip(8) {
            assert!(fit.upper_bound * x >= *y - 1e-9);
        }
    }

    #[test]
    fn zero_size_is_treated_as_one() {
        let xs = [0.0, 10.0, 20.0, 30.0, 40.0];
        let ys = [1.0, 10.0, 20.0, 30.0, 40.0];
        let fit = analyse(&xs, &ys).unwrap();
        assert_eq!(fit.shape, Shape::N);
        assert!(fit.coefficient.is_finite());
        assert_eq!(fit.cutoff, 10.0);
    }

    #[test]
    fn log_bound_skips_size_one() {
        // ln 1 = 0 would otherwise divide by zero
        assert_eq!(upper_bound(Shape::LogN, &[1.0], &[5.0]), 0.0);
        assert!(upper_bound(Shape::LogN, &[1.0, 10.0], &[5.0, 10.0]).is_finite());
    }

    #[test]
    fn degenerate_inputs() {
        assert!(analyse(&[], &[]).is_err());
        assert!(analyse(&[1.0, 2.0], &[1.0]).is_err());
        assert!(analyse(&[1.0], &[f64::NAN]).is_err());

        // A single point still fits.
        let fit = analyse(&[100.0], &[7.0]).unwrap();
        assert_eq!(fit.shape, Shape::Constant);
        assert_eq!(fit.upper_bound, 7.0);
    }

    #[test]
    fn shape_names() {
        let names = Shape::ALL.iter().map(Shape::to_string).collect::<Vec<_>>();
        assert_eq!(names, ["Constant", "log n", "n", "n log n", "n^2"]);
    }
}
