//! # Source descriptors and request selectors
//!
//! A trajectory request is described by a [`SourceKind`] (observed instrument data
//! or simulated satellite extraction) and a [`Selector`] carrying every parameter
//! the path resolution needs. An accessor binds one full `Selector` of defaults at
//! construction; each call may supply a [`SelectorOverrides`] whose set fields win
//! over the bound defaults.
//!
//! ## Overview
//!
//! - [`SourceKind`] — observed vs. simulated, with the per-kind header-skip count
//!   and raw time-column layout.
//! - [`Selector`] — the full parameter set. [`Selector::default`] reproduces the
//!   reference event (CR2152, AWSoMR, Poynting-flux parameter sweep).
//! - [`SelectorOverrides`] — per-call partial override, merged field-by-field.
//! - [`VarFilter`] — optional restriction of the returned variables.
//!
//! ## See also
//! ------------
//! * [`crate::accessor::TrajAccessor`] – Binds a `Selector` as defaults.
//! * [`crate::resolve`] – Consumes the merged selector for path resolution.

use serde::{Deserialize, Serialize};

use crate::constants::{RunNumber, VarName, OBS_HEADER_LINES, SIM_HEADER_LINES};

/// Whether a record set comes from a fixed instrument source or a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// In-situ instrument data (OMNI at Earth, STEREO-A/B elsewhere)
    Observed,
    /// Satellite extraction from one simulation run
    Simulated,
}

impl SourceKind {
    /// Header lines preceding the column-name row for this kind of file.
    pub(crate) fn header_lines(&self) -> usize {
        match self {
            SourceKind::Observed => OBS_HEADER_LINES,
            SourceKind::Simulated => SIM_HEADER_LINES,
        }
    }

    /// Raw time-component columns and their canonical names, in timestamp order.
    ///
    /// Simulated extractions carry an extra millisecond column.
    pub(crate) fn time_columns(&self) -> &'static [(&'static str, &'static str)] {
        const COMMON: [(&str, &str); 6] = [
            ("year", "year"),
            ("mo", "month"),
            ("dy", "day"),
            ("hr", "hour"),
            ("mn", "minute"),
            ("sc", "second"),
        ];
        const SIM: [(&str, &str); 7] = [
            ("year", "year"),
            ("mo", "month"),
            ("dy", "day"),
            ("hr", "hour"),
            ("mn", "minute"),
            ("sc", "second"),
            ("msc", "ms"),
        ];
        match self {
            SourceKind::Observed => &COMMON,
            SourceKind::Simulated => &SIM,
        }
    }
}

/// Map a physical location to its instrument-source name.
///
/// Observed files at Earth come from the OMNI composite; every other location
/// (e.g. `sta`, `stb`) is its own source.
///
/// Arguments
/// -----------------
/// * `location`: Physical location of the trajectory (e.g. `"earth"`, `"sta"`).
///
/// Return
/// ----------
/// * The instrument-source name used in observed file names.
pub fn instrument_source(location: &str) -> &str {
    if location == "earth" {
        "omni"
    } else {
        location
    }
}

/// Full set of request parameters bound by an accessor as defaults.
///
/// The `Default` impl reproduces the reference event of the uncertainty study:
/// the 2012-05-16 AWSoMR map with the Poynting-flux parameter sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    /// Physical location of the trajectory (`"earth"`, `"sta"`, `"stb"`)
    pub location: String,
    /// Timestamp string embedded in observed file names
    pub obs_time: String,
    /// Swept parameter value (e.g. `"0.35e6"`)
    pub param: String,
    /// Run number within the event list
    pub run_num: RunNumber,
    /// Simulation model name
    pub model: String,
    /// Magnetogram method name
    pub mag_method: String,
    /// Reference map time of the simulated event
    pub map_time: String,
    /// Name of the swept parameter
    pub param_name: String,
    /// Record-type tag of the extraction file (e.g. `"trj"`)
    pub record_type: String,
    /// Extension of the extraction file (e.g. `"sat"`)
    pub ext: String,
}

impl Default for Selector {
    fn default() -> Self {
        Selector {
            location: "earth".into(),
            obs_time: "2012_05_11T20_00_00".into(),
            param: "0.35e6".into(),
            run_num: 1,
            model: "AWSoMR".into(),
            mag_method: "HARMONICS_adapt".into(),
            map_time: "201205162000".into(),
            param_name: "MapTime_PoyntingFluxPerBSi".into(),
            record_type: "trj".into(),
            ext: "sat".into(),
        }
    }
}

/// Per-call partial override of a bound [`Selector`].
///
/// Every field is optional; [`SelectorOverrides::apply`] merges the set fields
/// onto a base selector, explicit per-call values winning over the bound
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOverrides {
    pub location: Option<String>,
    pub obs_time: Option<String>,
    pub param: Option<String>,
    pub run_num: Option<RunNumber>,
    pub model: Option<String>,
    pub mag_method: Option<String>,
    pub map_time: Option<String>,
    pub param_name: Option<String>,
    pub record_type: Option<String>,
    pub ext: Option<String>,
}

impl SelectorOverrides {
    /// Merge these overrides onto `base`, field by field.
    ///
    /// Arguments
    /// -----------------
    /// * `base`: The accessor's construction-time defaults.
    ///
    /// Return
    /// ----------
    /// * A fully resolved [`Selector`] for one request.
    pub fn apply(&self, base: &Selector) -> Selector {
        Selector {
            location: self.location.clone().unwrap_or_else(|| base.location.clone()),
            obs_time: self.obs_time.clone().unwrap_or_else(|| base.obs_time.clone()),
            param: self.param.clone().unwrap_or_else(|| base.param.clone()),
            run_num: self.run_num.unwrap_or(base.run_num),
            model: self.model.clone().unwrap_or_else(|| base.model.clone()),
            mag_method: self
                .mag_method
                .clone()
                .unwrap_or_else(|| base.mag_method.clone()),
            map_time: self.map_time.clone().unwrap_or_else(|| base.map_time.clone()),
            param_name: self
                .param_name
                .clone()
                .unwrap_or_else(|| base.param_name.clone()),
            record_type: self
                .record_type
                .clone()
                .unwrap_or_else(|| base.record_type.clone()),
            ext: self.ext.clone().unwrap_or_else(|| base.ext.clone()),
        }
    }
}

/// Restriction of the variables returned by a fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarFilter {
    /// Return every column of the processed record set
    #[default]
    All,
    /// Return exactly these columns, in this order
    Names(Vec<VarName>),
}

impl VarFilter {
    /// Build a filter from variable names.
    pub fn names<S: Into<VarName>, I: IntoIterator<Item = S>>(names: I) -> Self {
        VarFilter::Names(names.into_iter().map(Into::into).collect())
    }
}
