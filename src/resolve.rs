//! # Path resolution for trajectory requests
//!
//! Maps a logical request (source kind + merged [`Selector`]) to the concrete
//! file holding the trajectory table, following the on-disk layout of the
//! ensemble results directory:
//!
//! ```text
//! <root>/obsdata/<source>_<time>.out                          observed
//! <root>/<event-dir>/run<NN>/IH/<type>_<location>_*.<ext>     simulated
//! ```
//!
//! The event directory is the unique immediate subdirectory of the root whose
//! name matches the selector's model, magnetogram method, map time, parameter
//! name, and parameter value. Resolution asserts a **single** match: zero
//! candidates fail with [`HeliotrajError::NotFound`], several with
//! [`HeliotrajError::Ambiguous`]. Every selector component is regex-escaped
//! before interpolation.

use camino::{Utf8Path, Utf8PathBuf};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::constants::{RunNumber, OBSDATA_DIR, OBS_FILE_EXT, RUN_SUBPATH};
use crate::heliotraj_errors::HeliotrajError;
use crate::selector::{instrument_source, Selector};

/// Trailing run-number pattern of the per-run subdirectories.
static RUN_DIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"run(\d+)$").expect("static regex must compile"));

/// Observed-data file path for a location and timestamp.
///
/// The instrument-source mapping replaces `earth` with `omni`; all other
/// locations are their own source.
pub fn obs_file_path(root: &Utf8Path, location: &str, obs_time: &str) -> Utf8PathBuf {
    let source = instrument_source(location);
    root.join(OBSDATA_DIR)
        .join(format!("{source}_{obs_time}.{OBS_FILE_EXT}"))
}

/// Resolve the unique event directory matching the selector.
///
/// Arguments
/// -----------------
/// * `root`: Results root directory.
/// * `selector`: Merged request parameters.
///
/// Return
/// ----------
/// * The matched directory path, or `NotFound` / `Ambiguous` when the
///   single-match assertion fails.
pub fn sim_dir(root: &Utf8Path, selector: &Selector) -> Result<Utf8PathBuf, HeliotrajError> {
    let pattern = format!(
        "^.*_{}_{}_{}_{}_{}$",
        regex::escape(&selector.model),
        regex::escape(&selector.mag_method),
        regex::escape(&selector.map_time),
        regex::escape(&selector.param_name),
        regex::escape(&selector.param),
    );
    let re = Regex::new(&pattern).expect("escaped selector components must compile");

    let candidates = entry_names(root, EntryKind::Dir)?;
    let name = single_match(root, &pattern, &re, candidates)?;
    debug!(dir = %name, "resolved event directory");
    Ok(root.join(name))
}

/// Resolve the unique satellite-extraction file of one run.
///
/// Descends into `run<NN>/IH` below the event directory (run number zero-padded
/// to two digits) and asserts a single file matching
/// `<record_type>_<location>_*.<ext>`.
pub fn sim_file_path(
    root: &Utf8Path,
    selector: &Selector,
) -> Result<Utf8PathBuf, HeliotrajError> {
    let run_dir = sim_dir(root, selector)?
        .join(format!("run{:02}", selector.run_num))
        .join(RUN_SUBPATH);

    let pattern = format!(
        r"^{}_{}_.*\.{}$",
        regex::escape(&selector.record_type),
        regex::escape(&selector.location),
        regex::escape(&selector.ext),
    );
    let re = Regex::new(&pattern).expect("escaped selector components must compile");

    let candidates = entry_names(&run_dir, EntryKind::File)?;
    let name = single_match(&run_dir, &pattern, &re, candidates)?;
    Ok(run_dir.join(name))
}

/// Enumerate the run numbers available below the selector's event directory.
///
/// Scans the immediate subdirectories for names with a trailing `run<digits>`
/// component and returns the parsed integers in ascending order.
pub fn run_numbers(
    root: &Utf8Path,
    selector: &Selector,
) -> Result<Vec<RunNumber>, HeliotrajError> {
    let event_dir = sim_dir(root, selector)?;

    let numbers = entry_names(&event_dir, EntryKind::Dir)?
        .into_iter()
        .filter_map(|name| {
            RUN_DIR_RE
                .captures(&name)
                .and_then(|c| c[1].parse::<RunNumber>().ok())
        })
        .sorted()
        .collect();
    Ok(numbers)
}

#[derive(Clone, Copy, PartialEq)]
enum EntryKind {
    Dir,
    File,
}

/// Names of the immediate entries of `dir` with the requested kind.
fn entry_names(dir: &Utf8Path, kind: EntryKind) -> Result<Vec<String>, HeliotrajError> {
    let mut names = Vec::new();
    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let is_dir = entry.file_type()?.is_dir();
        if (kind == EntryKind::Dir) == is_dir {
            names.push(entry.file_name().to_string());
        }
    }
    names.sort_unstable();
    Ok(names)
}

/// Assert that exactly one candidate matches the pattern.
fn single_match(
    dir: &Utf8Path,
    pattern: &str,
    re: &Regex,
    candidates: Vec<String>,
) -> Result<String, HeliotrajError> {
    let mut matches: Vec<String> = candidates
        .into_iter()
        .filter(|name| re.is_match(name))
        .collect();

    match matches.len() {
        1 => Ok(matches.pop().expect("length checked")),
        0 => Err(HeliotrajError::NotFound {
            dir: dir.to_owned(),
            pattern: pattern.to_string(),
        }),
        _ => Err(HeliotrajError::Ambiguous {
            dir: dir.to_owned(),
            pattern: pattern.to_string(),
            matches,
        }),
    }
}

#[cfg(test)]
mod resolve_test {
    use super::*;

    fn utf8(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    fn event_dir_name(selector: &Selector) -> String {
        format!(
            "event_list_{}_{}_{}_{}_{}",
            selector.model,
            selector.mag_method,
            selector.map_time,
            selector.param_name,
            selector.param
        )
    }

    #[test]
    fn test_obs_file_path_maps_earth_to_omni() {
        let root = Utf8Path::new("/results");
        let path = obs_file_path(root, "earth", "2012_05_11T20_00_00");
        assert_eq!(
            path,
            Utf8PathBuf::from("/results/obsdata/omni_2012_05_11T20_00_00.out")
        );

        let path = obs_file_path(root, "sta", "2012_05_11T20_00_00");
        assert_eq!(
            path,
            Utf8PathBuf::from("/results/obsdata/sta_2012_05_11T20_00_00.out")
        );
    }

    #[test]
    fn test_sim_dir_single_match() {
        let dir = tempfile::tempdir().unwrap();
        let root = utf8(&dir);
        let selector = Selector::default();
        std::fs::create_dir(root.join(event_dir_name(&selector))).unwrap();
        std::fs::create_dir(root.join("unrelated_dir")).unwrap();

        let resolved = sim_dir(&root, &selector).unwrap();
        assert_eq!(resolved, root.join(event_dir_name(&selector)));
    }

    #[test]
    fn test_sim_dir_zero_matches_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let root = utf8(&dir);

        let err = sim_dir(&root, &Selector::default()).unwrap_err();
        assert!(matches!(err, HeliotrajError::NotFound { .. }));
    }

    #[test]
    fn test_sim_dir_multiple_matches_is_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        let root = utf8(&dir);
        let selector = Selector::default();
        std::fs::create_dir(root.join(format!("a_{}", &event_dir_name(&selector)[6..])))
            .unwrap();
        std::fs::create_dir(root.join(format!("b_{}", &event_dir_name(&selector)[6..])))
            .unwrap();

        let err = sim_dir(&root, &selector).unwrap_err();
        assert!(matches!(
            err,
            HeliotrajError::Ambiguous { matches, .. } if matches.len() == 2
        ));
    }

    #[test]
    fn test_sim_dir_escapes_parameter_value() {
        let dir = tempfile::tempdir().unwrap();
        let root = utf8(&dir);
        let selector = Selector::default();
        // '.' in "0.35e6" must not match an arbitrary character
        let decoy = event_dir_name(&selector).replace("0.35e6", "0x35e6");
        std::fs::create_dir(root.join(decoy)).unwrap();

        let err = sim_dir(&root, &selector).unwrap_err();
        assert!(matches!(err, HeliotrajError::NotFound { .. }));
    }

    #[test]
    fn test_sim_file_path_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let root = utf8(&dir);
        let selector = Selector::default();
        let ih = root
            .join(event_dir_name(&selector))
            .join("run01")
            .join(RUN_SUBPATH);
        std::fs::create_dir_all(&ih).unwrap();
        std::fs::write(ih.join("trj_earth_n00005000.sat"), "x").unwrap();
        std::fs::write(ih.join("trj_sta_n00005000.sat"), "x").unwrap();

        let resolved = sim_file_path(&root, &selector).unwrap();
        assert_eq!(resolved, ih.join("trj_earth_n00005000.sat"));
    }

    #[test]
    fn test_run_enumeration_sorted_ascending() {
        let dir = tempfile::tempdir().unwrap();
        let root = utf8(&dir);
        let selector = Selector::default();
        let event = root.join(event_dir_name(&selector));
        for run in ["run10", "run02", "run01", "notes"] {
            std::fs::create_dir_all(event.join(run)).unwrap();
        }

        let numbers = run_numbers(&root, &selector).unwrap();
        assert_eq!(numbers, vec![1, 2, 10]);
    }
}
