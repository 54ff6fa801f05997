use heliotraj::{RunEnsemble, Selector, SourceKind, TrajAccessor, VarFilter};

mod common;

#[test]
fn test_ensemble_gathers_observed_and_all_runs() {
    let (_guard, root) = common::results_root();
    common::write_obs_file(&root, "omni", "2012_05_11T20_00_00");
    common::write_sim_tree(&root, &Selector::default(), &[3, 1, 2]);

    let obs = TrajAccessor::new(SourceKind::Observed, root.clone());
    let sim = TrajAccessor::new(SourceKind::Simulated, root).with_caching(true);

    let vars = VarFilter::names(["Rho", "V_tot", "Temperature", "B_tot"]);
    let ensemble = RunEnsemble::load(&obs, &sim, "earth", "0.35e6", &vars).unwrap();

    assert_eq!(ensemble.observed.len(), 3);
    assert_eq!(
        ensemble.observed.column_names(),
        vec!["Rho", "V_tot", "Temperature", "B_tot"]
    );

    let run_nums: Vec<u32> = ensemble.runs.iter().map(|(n, _)| *n).collect();
    assert_eq!(run_nums, vec![1, 2, 3]);
    for (_, record_set) in &ensemble.runs {
        assert_eq!(
            record_set.column_names(),
            vec!["Rho", "V_tot", "Temperature", "B_tot"]
        );
        assert_eq!(record_set.len(), 3);
    }
}

#[test]
fn test_ensemble_fails_without_observed_file() {
    let (_guard, root) = common::results_root();
    common::write_sim_tree(&root, &Selector::default(), &[1]);

    let obs = TrajAccessor::new(SourceKind::Observed, root.clone());
    let sim = TrajAccessor::new(SourceKind::Simulated, root);

    let result = RunEnsemble::load(&obs, &sim, "earth", "0.35e6", &VarFilter::All);
    assert!(result.is_err());
}
