//! End-to-end checks over the public API: a caller generating a signal,
//! pairing it with the matching time axis, and mapping it to an IQ
//! trajectory, the way the scope binary does.

use std::f64::consts::TAU;

use signalscope::dsp::{iq, GeneratorError, SignalGenerator};

#[test]
fn signal_and_time_axis_align_index_for_index() {
    let generator = SignalGenerator::new();
    let (duration, sample_rate) = (0.25, 4_000);

    let signal = generator
        .generate_fm(1.0, 200.0, 2.0, 10.0, duration, sample_rate)
        .unwrap();
    let time = SignalGenerator::time_array(duration, sample_rate).unwrap();

    assert_eq!(signal.len(), 1_000);
    assert_eq!(time.len(), signal.len());
    for (i, &t) in time.iter().enumerate() {
        assert!((t - i as f64 / sample_rate as f64).abs() < 1e-12);
    }
}

#[test]
fn am_matches_manual_formula() {
    let generator = SignalGenerator::new();
    let sample_rate = 1_000;
    let signal = generator
        .generate_am(0.8, 50.0, 0.5, 5.0, 0.2, sample_rate)
        .unwrap();

    for (i, &s) in signal.iter().enumerate() {
        let t = i as f64 / sample_rate as f64;
        let message = 0.5 * (TAU * 5.0 * t).sin();
        let expected = 0.8 * (1.0 + message) * (TAU * 50.0 * t).sin();
        assert!((s - expected).abs() < 1e-9, "sample {i}");
    }
}

#[test]
fn truncated_generation_still_pairs_with_time_axis() {
    // The caller's contract after a stop: truncate the time axis to the
    // signal length before handing both to the chart.
    let generator = SignalGenerator::new();
    let token = generator.token();
    let (duration, sample_rate) = (30.0, 48_000);

    let stopper = std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(1));
        token.stop();
    });
    let signal = generator
        .generate_sine(1.0, 440.0, 0.0, duration, sample_rate)
        .unwrap();
    stopper.join().unwrap();

    let mut time = SignalGenerator::time_array(duration, sample_rate).unwrap();
    assert!(time.len() >= signal.len());
    time.truncate(signal.len());
    assert_eq!(time.len(), signal.len());
}

#[test]
fn iq_trajectory_tracks_generated_am_envelope() {
    let generator = SignalGenerator::new();
    let (duration, sample_rate) = (1.0, 100);

    let signal = generator
        .generate_am(1.0, 25.0, 0.5, 1.0, duration, sample_rate)
        .unwrap();
    let trajectory = iq::am_trajectory(1.0, 0.5, 1.0, duration, sample_rate).unwrap();

    assert_eq!(trajectory.len(), signal.len());
    // The signal is bounded by the envelope the trajectory traces.
    for (&s, &(envelope, q)) in signal.iter().zip(trajectory.iter()) {
        assert_eq!(q, 0.0);
        assert!(s.abs() <= envelope.abs() + 1e-9);
    }
}

#[test]
fn invalid_parameters_fail_uniformly() {
    let generator = SignalGenerator::new();

    let expected = GeneratorError::InvalidParameter {
        name: "duration",
        value: -2.0,
    };
    assert_eq!(
        generator.generate_sine(1.0, 1.0, 0.0, -2.0, 10).unwrap_err(),
        expected
    );
    assert_eq!(
        SignalGenerator::time_array(-2.0, 10).unwrap_err(),
        expected
    );
    assert_eq!(
        iq::fm_trajectory(1.0, 2.0, 1.0, -2.0, 10).unwrap_err(),
        expected
    );
}
