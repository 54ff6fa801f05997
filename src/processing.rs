//! # Derived quantities and sanitization
//!
//! Simulated satellite extractions carry the raw state vector of the MHD solution
//! (position, velocity, magnetic field, mass density, pressure) in code units.
//! This module derives the physical magnitudes the analysis compares against
//! observations, and replaces negative entries of the four magnitude fields with
//! NaN.
//!
//! Derivation order matters: the temperature estimate uses the **raw** mass
//! density, which is rescaled to a particle density only afterwards.

use nalgebra::Vector3;
use tracing::info;

use crate::constants::{
    B_FIELD_SCALE, BOLTZMANN, ITERATION_COLUMN, MAGNITUDE_VARS, PROTON_MASS_G,
    TEMPERATURE_SCALE,
};
use crate::heliotraj_errors::HeliotrajError;
use crate::record_set::RecordSet;

/// Compute the derived physical quantities of a simulated record set.
///
/// Drops the iteration-count column when present, then appends, in order:
///
/// 1. `B_tot` — Euclidean norm of `(Bx, By, Bz)` scaled by [`B_FIELD_SCALE`],
/// 2. `Temperature` — ideal-gas estimate from pressure and raw mass density,
/// 3. `V_tot` — radial projection of the velocity vector onto the position
///    vector,
///
/// and finally rescales `Rho` from mass density to a particle density.
///
/// Arguments
/// -----------------
/// * `record_set`: Consolidated simulated record set, modified in place.
/// * `verbose`: Narrate each step as a `tracing` info event.
///
/// Return
/// ----------
/// * `Ok(())`, or `HeliotrajError::MissingColumn` when a required input column
///   is absent.
pub fn derive_sim_quantities(
    record_set: &mut RecordSet,
    verbose: bool,
) -> Result<(), HeliotrajError> {
    if record_set.drop_column(ITERATION_COLUMN).is_some() && verbose {
        info!(column = ITERATION_COLUMN, "dropped iteration column");
    }

    let n_rows = record_set.len();
    let (b_tot, temperature, v_tot, rho_scaled) = {
        let col = |name: &str| {
            record_set
                .column(name)
                .ok_or_else(|| HeliotrajError::MissingColumn(name.to_string()))
        };

        let (bx, by, bz) = (col("Bx")?, col("By")?, col("Bz")?);
        let (ux, uy, uz) = (col("Ux")?, col("Uy")?, col("Uz")?);
        let (x, y, z) = (col("X")?, col("Y")?, col("Z")?);
        let rho = col("Rho")?;
        let pressure = col("P")?;

        let mut b_tot = Vec::with_capacity(n_rows);
        let mut temperature = Vec::with_capacity(n_rows);
        let mut v_tot = Vec::with_capacity(n_rows);
        let mut rho_scaled = Vec::with_capacity(n_rows);

        for i in 0..n_rows {
            let field = Vector3::new(bx[i], by[i], bz[i]);
            b_tot.push(field.norm() * B_FIELD_SCALE);

            // Ideal-gas estimate from the raw mass density, pre-rescale
            temperature
                .push(pressure[i] * (PROTON_MASS_G / rho[i]) / BOLTZMANN * TEMPERATURE_SCALE);

            let position = Vector3::new(x[i], y[i], z[i]);
            let velocity = Vector3::new(ux[i], uy[i], uz[i]);
            v_tot.push(velocity.dot(&position) / position.norm());

            rho_scaled.push(rho[i] / PROTON_MASS_G);
        }
        (b_tot, temperature, v_tot, rho_scaled)
    };

    record_set.push_column("B_tot", b_tot);
    record_set.push_column("Temperature", temperature);
    record_set.push_column("V_tot", v_tot);
    *record_set
        .column_mut("Rho")
        .expect("Rho column checked above") = rho_scaled;

    if verbose {
        info!("computed B_tot, Temperature, V_tot");
    }
    Ok(())
}

/// Replace negative values of the four magnitude fields with NaN.
///
/// Arguments
/// -----------------
/// * `record_set`: Processed record set, modified in place.
/// * `verbose`: Narrate per-column replacement counts as `tracing` info events.
///
/// Return
/// ----------
/// * `Ok(())`, or `HeliotrajError::MissingColumn` when a magnitude column is
///   absent.
pub fn sanitize_magnitudes(
    record_set: &mut RecordSet,
    verbose: bool,
) -> Result<(), HeliotrajError> {
    for var in MAGNITUDE_VARS {
        let values = record_set
            .column_mut(var)
            .ok_or_else(|| HeliotrajError::MissingColumn(var.to_string()))?;

        let mut replaced = 0usize;
        for value in values.iter_mut() {
            if *value < 0.0 {
                *value = f64::NAN;
                replaced += 1;
            }
        }
        if verbose && replaced > 0 {
            info!(column = var, replaced, "replaced negative value(s) with NaN");
        }
    }
    Ok(())
}
