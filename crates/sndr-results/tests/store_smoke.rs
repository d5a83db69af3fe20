//! Smoke test: save a run and read it back.

use sndr_core::Params;
use sndr_results::{RunManifest, RunStore, run_id_for};
use sndr_sim::TimeSeries;

#[test]
fn save_and_reload_run() {
    let dir = std::env::temp_dir().join(format!("sndr-store-test-{}", std::process::id()));
    let store = RunStore::new(dir.clone()).unwrap();

    let params = Params {
        max_steps: 2,
        output: false,
        ..Params::default()
    };
    let mut series = TimeSeries::new();
    series.push(0.1, 100.0, 0.01, 0.0);
    series.push(0.2, 110.0, 0.02, 0.001);

    let manifest = RunManifest {
        run_id: run_id_for(&params),
        timestamp: "2026-01-01T00:00:00Z".to_string(),
        params,
        steps: 2,
    };

    assert!(!store.has_run(&manifest.run_id));
    store.save_run(&manifest, &series).unwrap();
    assert!(store.has_run(&manifest.run_id));

    let loaded = store.load_manifest(&manifest.run_id).unwrap();
    assert_eq!(loaded.run_id, manifest.run_id);
    assert_eq!(loaded.steps, 2);
    assert_eq!(loaded.params.max_steps, 2);

    let csv = std::fs::read_to_string(store.timeseries_path(&manifest.run_id).unwrap()).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next().unwrap(), "step,time_s,sup,cupric,theta,eta");
    assert_eq!(csv.lines().count(), 3);

    assert!(matches!(
        store.load_manifest("missing"),
        Err(sndr_results::ResultsError::RunNotFound { .. })
    ));

    std::fs::remove_dir_all(dir).ok();
}
