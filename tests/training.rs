use std::io::{self, Write};

use linear_descent::{
    display::Pair,
    training::{EpochReport, Trainer},
    TrainError, TrainingConfig,
};

const LINES_PER_EPOCH: usize = 1 + 2 * 7 + 4;

fn run_reference() -> (String, Vec<EpochReport>) {
    let mut trainer = Trainer::from_config(&TrainingConfig::default()).unwrap();
    let mut out = Vec::new();
    let reports = trainer.train(&mut out).unwrap();
    (String::from_utf8(out).unwrap(), reports)
}

#[test]
fn first_epoch_trace_matches_hand_computation() {
    let (trace, _) = run_reference();

    let expected = [
        "----START EPOCH 0----",
        "--START ITER --",
        "x = 2 y = 3",
        "prediction = 1.5",
        "error = 2.25",
        "dedl = 2.25",
        "gradient = {6,3}",
        "--END ITER --",
        "--START ITER --",
        "x = 4 y = 5",
        "prediction = 0.5",
        "error = 20.25",
        "dedl = 20.25",
        "gradient = {36,9}",
        "--END ITER --",
        "avgError = 11.25",
        "average gradient = {21,6}",
        "new weights = {-0.71,2.44}",
        "----END EPOCH 0----",
    ];

    let got: Vec<_> = trace.lines().take(LINES_PER_EPOCH).collect();
    assert_eq!(got, expected);
}

#[test]
fn full_run_has_ten_epochs() {
    let (trace, reports) = run_reference();
    let lines: Vec<_> = trace.lines().collect();

    assert_eq!(reports.len(), 10);
    assert_eq!(lines.len(), 10 * LINES_PER_EPOCH);

    for (epoch, chunk) in lines.chunks(LINES_PER_EPOCH).enumerate() {
        let report = &reports[epoch];
        assert_eq!(report.epoch, epoch);
        assert_eq!(chunk[0], format!("----START EPOCH {epoch}----"));
        assert_eq!(
            chunk[LINES_PER_EPOCH - 2],
            format!("new weights = {}", Pair(&report.weights))
        );
        assert_eq!(chunk[LINES_PER_EPOCH - 1], format!("----END EPOCH {epoch}----"));
    }
}

#[test]
fn runs_are_bit_for_bit_reproducible() {
    let (trace_a, reports_a) = run_reference();
    let (trace_b, reports_b) = run_reference();

    assert_eq!(trace_a, trace_b);
    for (a, b) in reports_a.iter().zip(&reports_b) {
        assert_eq!(a.avg_error.to_bits(), b.avg_error.to_bits());
        assert_eq!(a.weights.map(f32::to_bits), b.weights.map(f32::to_bits));
    }
}

#[test]
fn second_epoch_trace_matches_hand_computation() {
    let (trace, reports) = run_reference();
    let lines: Vec<_> = trace.lines().skip(LINES_PER_EPOCH).collect();

    assert_eq!(lines[0], "----START EPOCH 1----");
    assert_eq!(lines[2], "x = 2 y = 3");
    assert_eq!(lines[9], "x = 4 y = 5");
    assert_eq!(lines[15], "avgError = 16.5402");

    let weights = reports[1].weights;
    assert!((weights[0] - -0.9656).abs() < 1e-4, "w0 = {}", weights[0]);
    assert!((weights[1] - 2.3662).abs() < 1e-4, "w1 = {}", weights[1]);
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failures_surface_as_io_errors() {
    let mut trainer = Trainer::from_config(&TrainingConfig::default()).unwrap();
    let res = trainer.train(&mut BrokenSink);

    assert!(matches!(res, Err(TrainError::Io(_))));
    assert_eq!(trainer.layer().weights(), [-0.5, 2.5]);
}
