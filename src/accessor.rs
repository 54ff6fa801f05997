//! # TrajAccessor: the trajectory data access façade
//!
//! This module defines the [`TrajAccessor`] struct, the entry point that wires
//! together:
//!
//! 1. **Request configuration** — a bound [`SourceKind`], results root, and
//!    default [`Selector`], overridable per call.
//! 2. **Path resolution** — observed file naming and single-match event-directory
//!    resolution ([`crate::resolve`]).
//! 3. **The processing pipeline** — table read, time consolidation, derived
//!    quantities, sanitization ([`crate::table_reader`], [`crate::record_set`],
//!    [`crate::processing`]).
//! 4. **Memoization** — an optional bounded LRU over processed record sets
//!    ([`crate::cache::BoundedCache`]).
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use heliotraj::accessor::TrajAccessor;
//! use heliotraj::selector::{SelectorOverrides, SourceKind, VarFilter};
//!
//! # fn demo() -> Result<(), heliotraj::heliotraj_errors::HeliotrajError> {
//! let sim = TrajAccessor::new(SourceKind::Simulated, "/data/Results")
//!     .with_caching(true);
//!
//! let overrides = SelectorOverrides {
//!     param: Some("0.4e6".into()),
//!     run_num: Some(3),
//!     ..Default::default()
//! };
//! let vars = VarFilter::names(["Rho", "V_tot", "Temperature", "B_tot"]);
//! let data = sim.fetch(&vars, &overrides)?;
//!
//! let runs = sim.run_numbers(&overrides)?;
//! # Ok(()) }
//! ```
//!
//! ## Notes
//!
//! - A cache hit returns the memoized record set without re-reading the file
//!   and without re-running the verbose narration of the processing steps.
//! - The cache sits behind a [`Mutex`]; the original workload is single-threaded
//!   but a shared accessor must not corrupt its memoization.
//!
//! ## See also
//! ------------
//! * [`crate::selector::Selector`] – Construction-time defaults.
//! * [`crate::selector::SelectorOverrides`] – Per-call overrides.
//! * [`crate::ensemble::RunEnsemble`] – Observed + all runs for one parameter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::cache::BoundedCache;
use crate::constants::{RunNumber, CACHE_CAPACITY};
use crate::heliotraj_errors::HeliotrajError;
use crate::processing::{derive_sim_quantities, sanitize_magnitudes};
use crate::record_set::RecordSet;
use crate::resolve;
use crate::selector::{Selector, SelectorOverrides, SourceKind, VarFilter};
use crate::table_reader::read_table;

/// Resolves logical trajectory requests to processed, time-indexed record sets.
#[derive(Debug)]
pub struct TrajAccessor {
    kind: SourceKind,
    root: Utf8PathBuf,
    defaults: Selector,
    cached: bool,
    verbose: bool,
    cache: Mutex<BoundedCache>,
    file_reads: AtomicUsize,
}

impl TrajAccessor {
    /// Construct an accessor for one source kind rooted at a results directory.
    ///
    /// Defaults to the reference-event [`Selector`], caching disabled, verbose
    /// narration disabled.
    ///
    /// Arguments
    /// -----------------
    /// * `kind`: Observed instrument data or simulated extractions.
    /// * `root`: Results root directory.
    pub fn new(kind: SourceKind, root: impl Into<Utf8PathBuf>) -> Self {
        TrajAccessor {
            kind,
            root: root.into(),
            defaults: Selector::default(),
            cached: false,
            verbose: false,
            cache: Mutex::new(BoundedCache::new(CACHE_CAPACITY)),
            file_reads: AtomicUsize::new(0),
        }
    }

    /// Replace the construction-time default selector.
    pub fn with_defaults(mut self, defaults: Selector) -> Self {
        self.defaults = defaults;
        self
    }

    /// Enable or disable memoization of processed record sets.
    pub fn with_caching(mut self, cached: bool) -> Self {
        self.cached = cached;
        self
    }

    /// Enable or disable verbose narration of the processing steps.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The bound source kind.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// The bound results root.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// The construction-time default selector.
    pub fn defaults(&self) -> &Selector {
        &self.defaults
    }

    /// Number of files read so far. A cache hit does not increment this.
    pub fn file_reads(&self) -> usize {
        self.file_reads.load(Ordering::Relaxed)
    }

    /// Fetch a processed record set.
    ///
    /// Merges `overrides` onto the bound defaults, resolves the file path for
    /// the bound source kind, runs the processing pipeline (read → consolidate
    /// time → derive → sanitize) or retrieves the memoized result, and finally
    /// restricts the columns to `vars`.
    ///
    /// Arguments
    /// -----------------
    /// * `vars`: Variable filter; [`VarFilter::All`] returns every column.
    /// * `overrides`: Per-call selector overrides; explicit values win over the
    ///   bound defaults.
    ///
    /// Return
    /// ----------
    /// * The processed (and possibly restricted) [`RecordSet`], or a
    ///   [`HeliotrajError`] from resolution, parsing, or processing.
    pub fn fetch(
        &self,
        vars: &VarFilter,
        overrides: &SelectorOverrides,
    ) -> Result<RecordSet, HeliotrajError> {
        let selector = overrides.apply(&self.defaults);
        let path = match self.kind {
            SourceKind::Observed => {
                resolve::obs_file_path(&self.root, &selector.location, &selector.obs_time)
            }
            SourceKind::Simulated => resolve::sim_file_path(&self.root, &selector)?,
        };

        let record_set = if self.cached {
            let mut cache = self.cache.lock().expect("cache mutex poisoned");
            match cache.get(&path).cloned() {
                Some(hit) => {
                    debug!(file = %path, "memoized record set, skipping read");
                    hit
                }
                None => {
                    let fresh = self.process_file(&path)?;
                    cache.insert(path, fresh.clone());
                    fresh
                }
            }
        } else {
            self.process_file(&path)?
        };

        match vars {
            VarFilter::All => Ok(record_set),
            VarFilter::Names(names) => record_set.select(names),
        }
    }

    /// Enumerate the run numbers available for the merged selector.
    ///
    /// Scans the immediate subdirectories of the resolved event directory for
    /// `run<NN>` names and returns the parsed numbers in ascending order.
    pub fn run_numbers(
        &self,
        overrides: &SelectorOverrides,
    ) -> Result<Vec<RunNumber>, HeliotrajError> {
        let selector = overrides.apply(&self.defaults);
        resolve::run_numbers(&self.root, &selector)
    }

    /// Read and process one resolved file.
    fn process_file(&self, path: &Utf8Path) -> Result<RecordSet, HeliotrajError> {
        if self.verbose {
            info!(file = %path, "reading trajectory data");
        }
        self.file_reads.fetch_add(1, Ordering::Relaxed);

        let mut record_set = read_table(path, self.kind.header_lines())?;
        record_set.consolidate_time(self.kind, self.verbose)?;
        if self.kind == SourceKind::Simulated {
            derive_sim_quantities(&mut record_set, self.verbose)?;
        }
        sanitize_magnitudes(&mut record_set, self.verbose)?;
        Ok(record_set)
    }
}
