//! # Ensemble assembly
//!
//! The uncertainty study compares one observed trajectory against every
//! available simulation run of a parameter value. [`RunEnsemble::load`] gathers
//! exactly that: the observed record set for a location plus the record set of
//! each enumerated run, all restricted to one shared variable filter.

use crate::accessor::TrajAccessor;
use crate::constants::RunNumber;
use crate::heliotraj_errors::HeliotrajError;
use crate::record_set::RecordSet;
use crate::selector::{SelectorOverrides, VarFilter};

/// One observed trajectory alongside every simulated run of a parameter value.
#[derive(Debug)]
pub struct RunEnsemble {
    /// The observed record set at the requested location
    pub observed: RecordSet,
    /// `(run number, record set)` for each enumerated run, ascending
    pub runs: Vec<(RunNumber, RecordSet)>,
}

impl RunEnsemble {
    /// Load the observed trajectory and all runs for one location and parameter.
    ///
    /// Arguments
    /// -----------------
    /// * `obs`: Accessor bound to the observed source.
    /// * `sim`: Accessor bound to the simulated source.
    /// * `location`: Physical location of the trajectory.
    /// * `param`: Swept parameter value selecting the event directory.
    /// * `vars`: Variable filter applied to the observed and every simulated
    ///   record set.
    ///
    /// Return
    /// ----------
    /// * A [`RunEnsemble`] with one entry per enumerated run, or the first
    ///   [`HeliotrajError`] encountered.
    pub fn load(
        obs: &TrajAccessor,
        sim: &TrajAccessor,
        location: &str,
        param: &str,
        vars: &VarFilter,
    ) -> Result<Self, HeliotrajError> {
        let obs_overrides = SelectorOverrides {
            location: Some(location.to_string()),
            ..Default::default()
        };
        let observed = obs.fetch(vars, &obs_overrides)?;

        let sim_overrides = SelectorOverrides {
            location: Some(location.to_string()),
            param: Some(param.to_string()),
            ..Default::default()
        };
        let run_numbers = sim.run_numbers(&sim_overrides)?;

        let mut runs = Vec::with_capacity(run_numbers.len());
        for run_num in run_numbers {
            let overrides = SelectorOverrides {
                run_num: Some(run_num),
                ..sim_overrides.clone()
            };
            let record_set = sim.fetch(vars, &overrides)?;
            runs.push((run_num, record_set));
        }

        Ok(RunEnsemble { observed, runs })
    }
}
