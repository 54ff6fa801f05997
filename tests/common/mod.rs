//! Shared on-disk fixtures: a results root with an observed instrument file and
//! a simulated event directory holding `run<NN>/IH` satellite extractions.

use camino::Utf8PathBuf;
use heliotraj::Selector;

/// Event-directory name matching the default selector, with the free-form
/// prefix the resolution pattern ignores.
pub fn event_dir_name(selector: &Selector) -> String {
    format!(
        "event_list_2021_06_02_{}_{}_{}_{}_{}",
        selector.model, selector.mag_method, selector.map_time, selector.param_name, selector.param
    )
}

/// Create a temp results root. The `TempDir` guard must stay alive for the
/// duration of the test.
pub fn results_root() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, root)
}

/// Write an observed instrument file for `source` at the default timestamp.
///
/// Three header lines, then hourly rows carrying the four magnitude fields.
/// The second `V_tot` entry is negative to exercise sanitization.
pub fn write_obs_file(root: &Utf8PathBuf, source: &str, obs_time: &str) {
    let obsdata = root.join("obsdata");
    std::fs::create_dir_all(&obsdata).unwrap();

    let content = "\
OMNI composite, hourly averages
units: cm^-3 km/s K nT
---
year mo dy hr mn sc Rho V_tot Temperature B_tot
2012 5 11 20 0 0 5.1 380.0 90000.0 4.2
2012 5 11 21 0 0 5.3 -9999.9 95000.0 4.5
2012 5 11 22 0 0 5.0 402.0 99000.0 4.1
";
    std::fs::write(obsdata.join(format!("{source}_{obs_time}.out")), content).unwrap();
}

/// Write the simulated event directory with one extraction per run number.
///
/// One header line, then three rows whose derived quantities are exact:
/// the first row has position (1,0,0) and velocity (2,3,4), so the radial
/// velocity is 2; rows two and three have negative radial velocities and are
/// sanitized to NaN.
pub fn write_sim_tree(root: &Utf8PathBuf, selector: &Selector, runs: &[u32]) {
    let event_dir = root.join(event_dir_name(selector));
    for run in runs {
        let ih = event_dir.join(format!("run{run:02}")).join("IH");
        std::fs::create_dir_all(&ih).unwrap();

        let content = "\
trajectory extraction
it year mo dy hr mn sc msc X Y Z Ux Uy Uz Bx By Bz Rho P
1 2012 5 16 20 0 0 0 1.0 0.0 0.0 2.0 3.0 4.0 3.0e-5 4.0e-5 0.0 1.67e-24 1.3807e-16
2 2012 5 16 20 1 0 0 0.0 2.0 0.0 5.0 -6.0 7.0 0.0 0.0 1.0e-5 3.34e-24 1.3807e-16
3 2012 5 16 20 2 0 500 0.0 0.0 2.0 1.0 2.0 -3.0 0.0 1.0e-5 0.0 1.67e-24 1.3807e-16
";
        std::fs::write(
            ih.join(format!("trj_{}_n00005000.sat", selector.location)),
            content,
        )
        .unwrap();
    }
}
