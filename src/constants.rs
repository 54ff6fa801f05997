//! # Constants and type definitions for heliotraj
//!
//! This module centralizes the **physical constants**, **unit-conversion factors**, and
//! **common type definitions** used throughout the `heliotraj` library.
//!
//! ## Overview
//!
//! - Plasma constants used by the derived-quantity computations
//! - Conversion factors between the raw simulation units and the units shared
//!   with the observed trajectories
//! - File-format literals for the trajectory extraction layout on disk
//! - Core type aliases used across the crate
//!
//! These definitions are used by the table reader, the record-set processing step,
//! and the accessor façade.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Proton mass in grams, the unit of the raw simulation mass density
pub const PROTON_MASS_G: f64 = 1.67e-24;

/// Boltzmann constant in J/K
pub const BOLTZMANN: f64 = 1.3807e-23;

/// Post-factor applied to the ideal-gas temperature estimate
pub const TEMPERATURE_SCALE: f64 = 1e-7;

/// Cartesian field components → total-field units
pub const B_FIELD_SCALE: f64 = 1e5;

// -------------------------------------------------------------------------------------------------
// File-format literals
// -------------------------------------------------------------------------------------------------

/// Header lines to skip before the column-name row in an observed file
pub const OBS_HEADER_LINES: usize = 3;

/// Header lines to skip before the column-name row in a simulated extraction
pub const SIM_HEADER_LINES: usize = 1;

/// Subdirectory of the root holding observed instrument files
pub const OBSDATA_DIR: &str = "obsdata";

/// File extension of observed instrument files
pub const OBS_FILE_EXT: &str = "out";

/// Fixed sub-path below each run directory holding the satellite extractions
pub const RUN_SUBPATH: &str = "IH";

/// Iteration-count column emitted by the simulation, dropped before processing
pub const ITERATION_COLUMN: &str = "it";

/// The four physical magnitude fields that can never be negative.
///
/// Negative entries in any of these columns are sensor dropouts or numerical
/// artifacts and are replaced with NaN during sanitization.
pub const MAGNITUDE_VARS: [&str; 4] = ["Rho", "V_tot", "Temperature", "B_tot"];

// -------------------------------------------------------------------------------------------------
// Caching
// -------------------------------------------------------------------------------------------------

/// Capacity of the per-accessor memoization cache (entries)
pub const CACHE_CAPACITY: usize = 64;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Index of one simulation execution within an event list
pub type RunNumber = u32;

/// Name of a physical variable column (e.g. `"Rho"`, `"V_tot"`)
pub type VarName = String;
