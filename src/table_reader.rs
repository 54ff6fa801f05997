//! # Whitespace-delimited trajectory table reader
//!
//! Both observed instrument files and simulated satellite extractions are plain
//! text tables: a fixed number of free-form header lines, one line of column
//! names, then one whitespace-delimited row of numeric values per time stamp.
//! Observed files carry three header lines, simulated extractions one.
//!
//! The reader is deliberately strict: a row whose width differs from the header
//! or a cell that does not parse as `f64` fails the whole read with a precise
//! error rather than producing a ragged record set.

use camino::Utf8Path;
use tracing::debug;

use crate::heliotraj_errors::HeliotrajError;
use crate::record_set::RecordSet;

/// Read a whitespace-delimited table into an unconsolidated [`RecordSet`].
///
/// Arguments
/// -----------------
/// * `path`: File to read.
/// * `skip_lines`: Header lines preceding the column-name row.
///
/// Return
/// ----------
/// * A [`RecordSet`] whose columns follow the header row order, with no time
///   index yet, or a [`HeliotrajError`] on I/O or parse failure.
pub fn read_table(
    path: &Utf8Path,
    skip_lines: usize,
) -> Result<RecordSet, HeliotrajError> {
    debug!(file = %path, skip_lines, "reading trajectory table");
    let content = std::fs::read_to_string(path)?;
    let mut lines = content.lines().skip(skip_lines);

    let header = lines.next().unwrap_or("");
    let names: Vec<&str> = header.split_whitespace().collect();

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != names.len() {
            return Err(HeliotrajError::RowLength {
                path: path.to_owned(),
                expected: names.len(),
                found: fields.len(),
            });
        }
        for (col, field) in values.iter_mut().zip(&fields) {
            let value = field
                .parse::<f64>()
                .map_err(|_| HeliotrajError::InvalidNumericField {
                    value: field.to_string(),
                    path: path.to_owned(),
                })?;
            col.push(value);
        }
    }

    let mut record_set = RecordSet::new();
    for (name, column) in names.iter().zip(values) {
        record_set.push_column(*name, column);
    }
    Ok(record_set)
}
