// Session flow: initialize, train, evaluate, introspect, persist.

use std::path::PathBuf;

use parity_nn::{Error, NetworkConfig, ParitySession};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("parity-nn-{name}-{}.json", std::process::id()))
}

#[test]
fn session_requires_a_single_output() {
    let result = ParitySession::new(NetworkConfig::new(3, 3, 2, 0.5));
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn evaluate_covers_the_full_truth_table() {
    let session = ParitySession::new(NetworkConfig::new(3, 3, 1, 0.5)).unwrap();
    let rows = session.evaluate().unwrap();

    assert_eq!(rows.len(), 8);
    for (row, example) in rows.iter().zip(session.training_set()) {
        assert_eq!(row.inputs, example.inputs);
        assert_eq!(row.expected, example.expected[0]);
        assert!(row.raw_output > 0.0 && row.raw_output < 1.0);
        assert!(row.predicted == 0.0 || row.predicted == 1.0);
    }
}

#[test]
fn train_returns_a_report_over_the_owned_set() {
    let mut session = ParitySession::new(NetworkConfig::new(2, 2, 1, 0.5)).unwrap();
    // Per-row squared error is below 1, so MSE always beats a threshold of 2.
    let report = session.train(10, 2.0).unwrap();
    assert_eq!(report.epochs_run, 10);
    assert!(report.converged);
}

#[test]
fn reinitialize_discards_network_and_dataset() {
    let mut session = ParitySession::new(NetworkConfig::new(3, 3, 1, 0.5)).unwrap();
    session.train(5, 0.0).unwrap();

    session.reinitialize(NetworkConfig::new(4, 3, 1, 0.1)).unwrap();
    assert_eq!(session.training_set().len(), 16);
    assert_eq!(session.network().topology(), vec![(4, 3), (3, 1)]);
    assert_eq!(session.config().learning_rate, 0.1);
}

#[test]
fn save_load_round_trips_the_parameters() {
    let path = temp_path("roundtrip");
    let path_str = path.to_str().unwrap();

    let mut trained = ParitySession::new(NetworkConfig::new(3, 3, 1, 0.5)).unwrap();
    trained.train(50, 0.0).unwrap();
    trained.save(path_str).unwrap();

    let mut fresh = ParitySession::new(NetworkConfig::new(3, 3, 1, 0.5)).unwrap();
    assert_ne!(fresh.parameters(), trained.parameters());

    fresh.load(path_str).unwrap();
    assert_eq!(fresh.parameters(), trained.parameters());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_rejects_a_mismatched_topology() {
    let path = temp_path("mismatch");
    let path_str = path.to_str().unwrap();

    let narrow = ParitySession::new(NetworkConfig::new(3, 3, 1, 0.5)).unwrap();
    narrow.save(path_str).unwrap();

    let mut wide = ParitySession::new(NetworkConfig::new(4, 3, 1, 0.5)).unwrap();
    let before = wide.parameters();
    let err = wide.load(path_str).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert_eq!(wide.parameters(), before);

    std::fs::remove_file(&path).unwrap();
}
