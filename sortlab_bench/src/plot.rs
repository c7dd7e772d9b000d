//! SVG charts of a fitted column.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::complexity::Fit;

/// Draws the measurements, the best fit, the upper bound and the 20% mark into an SVG at `path`.
///
/// Sizes below 1 are drawn at 1, the same way [`crate::complexity::analyse`] fits them.
pub fn plot_fit(path: &Path, title: &str, sizes: &[f64], times: &[f64], fit: &Fit) -> Result<()> {
    let xs = sizes.iter().map(|&n| n.max(1.0)).collect::<Vec<_>>();
    let best = |n: f64| fit.coefficient * fit.shape.eval(n);
    let bound = |n: f64| fit.upper_bound * fit.shape.eval(n);

    let x_max = xs.iter().copied().fold(1.0, f64::max);
    let y_max = times
        .iter()
        .copied()
        .chain(xs.iter().flat_map(|&n| [best(n), bound(n)]))
        .filter(|y| y.is_finite())
        .fold(1.0, f64::max)
        * 1.05;

    let root = SVGBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Size of List")
        .y_desc("Time (NanoSeconds)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(times.iter().copied()),
            &BLUE,
        ))?
        .label("Data")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(xs.iter().map(|&n| (n, best(n))), &RED))?
        .label(format!("Best fit: {:.2} * {}", fit.coefficient, fit.shape))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .draw_series(LineSeries::new(xs.iter().map(|&n| (n, bound(n))), &GREEN))?
        .label(format!("Upper Bound: {:.2} * {}", fit.upper_bound, fit.shape))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

    chart
        .draw_series(LineSeries::new(
            [(fit.cutoff, 0.0), (fit.cutoff, y_max)],
            &YELLOW,
        ))?
        .label(format!("n = {}", fit.cutoff))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &YELLOW));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("Unable to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::analyse;

    #[test]
    fn draws_a_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quadratic.svg");

        let sizes = (0..30).map(|n| (n * 10) as f64).collect::<Vec<_>>();
        let times = sizes.iter().map(|n| 2.0 * n * n + 5.0).collect::<Vec<_>>();
        let fit = analyse(&sizes, &times).unwrap();

        plot_fit(&path, "Random", &sizes, &times, &fit).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Size of List"));
        assert!(svg.contains("Best fit"));
    }

    #[test]
    fn single_point_at_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.svg");

        let fit = analyse(&[0.0], &[0.0]).unwrap();
        plot_fit(&path, "Flat", &[0.0], &[0.0], &fit).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere").join("chart.svg");

        let sizes = [1.0, 2.0, 3.0];
        let times = [1.0, 2.0, 3.0];
        let fit = analyse(&sizes, &times).unwrap();

        assert!(plot_fit(&path, "Linear", &sizes, &times, &fit).is_err());
    }
}
