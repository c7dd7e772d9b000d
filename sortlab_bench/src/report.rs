//! Saving measurements as CSV and reading them back.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use tracing::info;

/// A header row plus numeric rows, as written by [`save_to_csv`].
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl CsvTable {
    /// Values of column `index`, top to bottom.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.get(index).copied()).collect()
    }
}

/// Writes `{dir}/{stem}__{dd.mm.yy.HH-MM-SS}.csv` and returns its path.
///
/// The header comes first, followed by one row per index of the columns. Rows stop at the
/// shortest column. `dir` is created when missing.
pub fn save_to_csv(dir: &Path, stem: &str, header: &[String], columns: &[Vec<f64>]) -> Result<PathBuf> {
    if let Some(cell) = header.iter().find(|cell| cell.contains(',')) {
        bail!("Header cell {cell:?} contains a comma")
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Unable to create results directory {}", dir.display()))?;

    let timestamp = Local::now().format("%d.%m.%y.%H-%M-%S");
    let path = dir.join(format!("{stem}__{timestamp}.csv"));

    let file =
        File::create(&path).with_context(|| format!("Unable to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", header.join(","))?;

    let rows = columns.iter().map(Vec::len).min().unwrap_or(0);
    for row in 0..rows {
        let cells = columns
            .iter()
            .map(|column| column[row].to_string())
            .collect::<Vec<_>>();
        writeln!(writer, "{}", cells.join(","))?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows, "saved results");
    Ok(path)
}

/// Reads a file written by [`save_to_csv`].
pub fn load_csv(path: &Path) -> Result<CsvTable> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Unable to read {}", path.display()))?;
    parse_csv(&contents).with_context(|| format!("Malformed results file {}", path.display()))
}

fn parse_csv(contents: &str) -> Result<CsvTable> {
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());

    let Some(header) = lines.next() else {
        bail!("Missing header row")
    };
    let header = header
        .split(',')
        .map(|cell| cell.trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for (number, line) in lines.enumerate() {
        let row = line
            .split(',')
            .map(|cell| {
                cell.trim()
                    .parse::<f64>()
                    .with_context(|| format!("Row {}: {cell:?} is not a number", number + 1))
            })
            .collect::<Result<Vec<_>>>()?;

        if row.len() != header.len() {
            bail!(
                "Row {} has {} cells, the header has {}",
                number + 1,
                row.len(),
                header.len()
            )
        }
        rows.push(row);
    }

    Ok(CsvTable { header, rows })
}
