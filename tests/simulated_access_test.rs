use heliotraj::{
    HeliotrajError, Selector, SelectorOverrides, SourceKind, TrajAccessor, VarFilter,
};

mod common;

#[test]
fn test_simulated_fetch_derives_physical_quantities() {
    let (_guard, root) = common::results_root();
    common::write_sim_tree(&root, &Selector::default(), &[1]);

    let sim = TrajAccessor::new(SourceKind::Simulated, root);
    let data = sim
        .fetch(&VarFilter::All, &SelectorOverrides::default())
        .unwrap();

    assert_eq!(data.len(), 3);
    assert!(!data.has_column("it"));
    let index = data.index().unwrap();
    assert!(index.windows(2).all(|w| w[0] < w[1]));

    // Position (1,0,0), velocity (2,3,4): radial velocity is exactly 2
    let v_tot = data.column("V_tot").unwrap();
    assert_eq!(v_tot[0], 2.0);
    // Negative radial velocities are sanitized away
    assert!(v_tot[1].is_nan());
    assert!(v_tot[2].is_nan());

    // Raw density 1.67e-24 g/cm^3 is one proton per cm^3
    let rho = data.column("Rho").unwrap();
    assert_eq!(rho[0], 1.0);
    assert_eq!(rho[1], 2.0);

    let b_tot = data.column("B_tot").unwrap();
    assert!((b_tot[0] - 5.0).abs() < 1e-12);

    let temperature = data.column("Temperature").unwrap();
    assert!((temperature[0] - 1.0).abs() < 1e-12);
    assert!((temperature[1] - 0.5).abs() < 1e-12);
}

#[test]
fn test_per_call_overrides_win_over_defaults() {
    let (_guard, root) = common::results_root();
    let default_sel = Selector::default();
    common::write_sim_tree(&root, &default_sel, &[1]);

    let other_param = Selector {
        param: "0.5e6".into(),
        ..Selector::default()
    };
    common::write_sim_tree(&root, &other_param, &[1, 2]);

    let sim = TrajAccessor::new(SourceKind::Simulated, root);

    // Bound default param resolves the 0.35e6 event directory
    assert!(sim
        .fetch(&VarFilter::All, &SelectorOverrides::default())
        .is_ok());

    // Explicit per-call value selects the other event directory
    let overrides = SelectorOverrides {
        param: Some("0.5e6".into()),
        run_num: Some(2),
        ..Default::default()
    };
    assert!(sim.fetch(&VarFilter::All, &overrides).is_ok());

    // A parameter nothing matches fails loudly
    let missing = SelectorOverrides {
        param: Some("0.7e6".into()),
        ..Default::default()
    };
    let err = sim.fetch(&VarFilter::All, &missing).unwrap_err();
    assert!(matches!(err, HeliotrajError::NotFound { .. }));
}

#[test]
fn test_ambiguous_event_directory_fails_loudly() {
    let (_guard, root) = common::results_root();
    let selector = Selector::default();
    common::write_sim_tree(&root, &selector, &[1]);

    // A second directory with the same matched suffix
    let twin = format!("other_{}", common::event_dir_name(&selector));
    std::fs::create_dir(root.join(twin)).unwrap();

    let sim = TrajAccessor::new(SourceKind::Simulated, root);
    let err = sim
        .fetch(&VarFilter::All, &SelectorOverrides::default())
        .unwrap_err();
    assert!(matches!(
        err,
        HeliotrajError::Ambiguous { matches, .. } if matches.len() == 2
    ));
}

#[test]
fn test_run_enumeration_is_sorted_and_distinct() {
    let (_guard, root) = common::results_root();
    common::write_sim_tree(&root, &Selector::default(), &[7, 2, 10, 1]);

    let sim = TrajAccessor::new(SourceKind::Simulated, root);
    let runs = sim.run_numbers(&SelectorOverrides::default()).unwrap();

    assert_eq!(runs, vec![1, 2, 7, 10]);
    assert!(runs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_missing_run_directory_is_io_error() {
    let (_guard, root) = common::results_root();
    common::write_sim_tree(&root, &Selector::default(), &[1]);

    let sim = TrajAccessor::new(SourceKind::Simulated, root);
    let overrides = SelectorOverrides {
        run_num: Some(9),
        ..Default::default()
    };
    let err = sim.fetch(&VarFilter::All, &overrides).unwrap_err();
    assert!(matches!(err, HeliotrajError::IoError(_)));
}
