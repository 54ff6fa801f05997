//! # Time-indexed record sets
//!
//! A [`RecordSet`] is an ordered sequence of time-stamped rows, each row holding a
//! fixed set of named numeric fields (density, velocity components, magnetic-field
//! components, pressure, ...). Column order is preserved as read from disk; the
//! time index is built once from the raw time-component columns.
//!
//! ## Overview
//!
//! - Column access and mutation (`column`, `push_column`, `drop_column`, ...)
//! - [`RecordSet::consolidate_time`] — replace the raw `year/mo/dy/hr/mn/sc(/msc)`
//!   columns with a single [`Epoch`] index. Idempotent: a second call on already
//!   consolidated data is a no-op.
//! - [`RecordSet::select`] — restrict to a named subset of columns, order as given.
//!
//! ## Invariants
//!
//! - After consolidation, none of the raw time-component columns remain and the
//!   index holds one epoch per row.
//! - The index is strictly increasing for chronological input files; the reader
//!   stores rows in file order and never reorders them.
//!
//! ## See also
//! ------------
//! * [`crate::table_reader`] – Produces unconsolidated record sets from disk.
//! * [`crate::processing`] – Derived quantities and sanitization.

use hifitime::{Epoch, TimeScale};
use tracing::info;

use crate::heliotraj_errors::HeliotrajError;
use crate::selector::SourceKind;

/// One named numeric column.
#[derive(Debug, Clone)]
struct Column {
    name: String,
    values: Vec<f64>,
}

/// An ordered, optionally time-indexed numeric table.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    time: Option<Vec<Epoch>>,
    columns: Vec<Column>,
}

impl RecordSet {
    /// Create an empty record set with no index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        if let Some(time) = &self.time {
            time.len()
        } else {
            self.columns.first().map_or(0, |c| c.values.len())
        }
    }

    /// True when the record set holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The time index, present once [`RecordSet::consolidate_time`] has run.
    pub fn index(&self) -> Option<&[Epoch]> {
        self.time.as_deref()
    }

    /// Column names in storage order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// True when a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Values of a named column.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Mutable values of a named column.
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Vec<f64>> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .map(|c| &mut c.values)
    }

    /// Append a column after the existing ones.
    ///
    /// Panics when `values` does not match the current row count of a non-empty
    /// record set; callers build columns row-aligned by construction.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        if !self.columns.is_empty() || self.time.is_some() {
            assert_eq!(values.len(), self.len(), "column length mismatch");
        }
        self.columns.push(Column {
            name: name.into(),
            values,
        });
    }

    /// Remove a column. Returns its values when it existed.
    pub fn drop_column(&mut self, name: &str) -> Option<Vec<f64>> {
        let pos = self.columns.iter().position(|c| c.name == name)?;
        Some(self.columns.remove(pos).values)
    }

    /// Rename a column in place. No-op when the old name is absent.
    pub fn rename_column(&mut self, old: &str, new: &str) {
        if let Some(col) = self.columns.iter_mut().find(|c| c.name == old) {
            col.name = new.to_string();
        }
    }

    /// Consolidate the raw time-component columns into a single epoch index.
    ///
    /// Renames the raw columns (`year/mo/dy/hr/mn/sc`, plus `msc` for simulated
    /// extractions) to canonical names, combines them into one UTC [`Epoch`] per
    /// row, sets the result as the index, and drops the component columns.
    ///
    /// Arguments
    /// -----------------
    /// * `kind`: Source kind, selecting the expected raw time-column layout.
    /// * `verbose`: Narrate the consolidation as a `tracing` info event.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` on success, or when the record set is already consolidated
    ///   (idempotent no-op).
    /// * `Err(HeliotrajError::MissingTimeColumns)` when the raw columns are
    ///   absent and no time index exists.
    pub fn consolidate_time(
        &mut self,
        kind: SourceKind,
        verbose: bool,
    ) -> Result<(), HeliotrajError> {
        let layout = kind.time_columns();

        if !layout.iter().all(|(raw, _)| self.has_column(raw)) {
            // Expected to be a no-op only on already-processed data
            if self.time.is_some() {
                return Ok(());
            }
            return Err(HeliotrajError::MissingTimeColumns);
        }

        for (raw, canonical) in layout {
            self.rename_column(raw, canonical);
        }

        let n_rows = self.len();
        let epochs = {
            let col = |name: &str| self.column(name).expect("time columns checked above");
            let years = col("year");
            let months = col("month");
            let days = col("day");
            let hours = col("hour");
            let minutes = col("minute");
            let seconds = col("second");
            let millis = self.column("ms");

            let mut epochs = Vec::with_capacity(n_rows);
            for row in 0..n_rows {
                let nanos = millis.map_or(0, |ms| (ms[row] * 1.0e6) as u32);
                let epoch = Epoch::maybe_from_gregorian(
                    years[row] as i32,
                    months[row] as u8,
                    days[row] as u8,
                    hours[row] as u8,
                    minutes[row] as u8,
                    seconds[row] as u8,
                    nanos,
                    TimeScale::UTC,
                )?;
                epochs.push(epoch);
            }
            epochs
        };

        for (_, canonical) in layout {
            self.drop_column(canonical);
        }
        self.time = Some(epochs);

        if verbose {
            info!(rows = n_rows, "replaced time columns with an epoch index");
        }
        Ok(())
    }

    /// Restrict the record set to exactly the named columns, order as given.
    ///
    /// The time index is carried over unchanged.
    ///
    /// Arguments
    /// -----------------
    /// * `names`: Columns to keep, in the order the result should expose them.
    ///
    /// Return
    /// ----------
    /// * A new [`RecordSet`], or `HeliotrajError::MissingColumn` for the first
    ///   requested name that does not exist.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<RecordSet, HeliotrajError> {
        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let col = self
                .columns
                .iter()
                .find(|c| c.name == name)
                .ok_or_else(|| HeliotrajError::MissingColumn(name.to_string()))?;
            columns.push(col.clone());
        }
        Ok(RecordSet {
            time: self.time.clone(),
            columns,
        })
    }
}
