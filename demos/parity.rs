use parity_nn::{NetworkConfig, ParitySession};

fn main() {
    env_logger::init();

    let config = NetworkConfig::new(3, 3, 1, 0.5);
    let mut session = ParitySession::new(config).expect("3-3-1 is a valid configuration");

    let report = session
        .train(20_000, 0.01)
        .expect("truth table matches the network shape");
    if report.converged {
        println!(
            "error threshold reached at epoch {}: mse = {:.6}",
            report.epochs_run, report.final_error
        );
    } else {
        println!(
            "epoch limit hit after {} epochs: mse = {:.6}",
            report.epochs_run, report.final_error
        );
    }

    for row in session.evaluate().expect("truth table matches the network shape") {
        println!(
            "{:?} -> {:.4} (expected {}, predicted {})",
            row.inputs, row.raw_output, row.expected, row.predicted
        );
    }
}
