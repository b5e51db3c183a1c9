//! Baseband (I, Q) trajectories for constellation views.
//!
//! The constellation chart plots in-phase against quadrature components as
//! 2-D points. [`SignalGenerator`](super::SignalGenerator) deliberately does
//! not produce IQ pairs - the mapping from waveform parameters to baseband
//! points lives here, on the caller's side of that contract.
//!
//! In the baseband picture the carrier itself is factored out:
//!
//! - an unmodulated carrier is a single phasor at its phase offset,
//! - AM moves the phasor along the in-phase axis as the envelope breathes,
//! - FM swings the phasor around the circle by `β·m(t)` at constant radius.

use super::generator::{sample_count, GeneratorError};
use super::waveform::message_sample;

/// Phasor for an unmodulated carrier: `(A·cos φ, A·sin φ)`.
#[inline]
pub fn tone_point(amplitude: f64, phase: f64) -> (f64, f64) {
    (amplitude * phase.cos(), amplitude * phase.sin())
}

/// AM baseband trajectory: envelope `A·(1 + Am·m(t))` on the in-phase axis,
/// quadrature identically zero.
pub fn am_trajectory(
    carrier_amplitude: f64,
    message_amplitude: f64,
    message_frequency: f64,
    duration: f64,
    sample_rate: u32,
) -> Result<Vec<(f64, f64)>, GeneratorError> {
    let count = sample_count(duration, sample_rate)?;
    let rate = sample_rate as f64;
    Ok((0..count)
        .map(|i| {
            let t = i as f64 / rate;
            let message = message_amplitude * message_sample(message_frequency, t);
            (carrier_amplitude * (1.0 + message), 0.0)
        })
        .collect())
}

/// FM baseband trajectory: constant-magnitude phasor at angle `β·m(t)`.
pub fn fm_trajectory(
    carrier_amplitude: f64,
    modulation_index: f64,
    message_frequency: f64,
    duration: f64,
    sample_rate: u32,
) -> Result<Vec<(f64, f64)>, GeneratorError> {
    let count = sample_count(duration, sample_rate)?;
    let rate = sample_rate as f64;
    Ok((0..count)
        .map(|i| {
            let t = i as f64 / rate;
            let angle = modulation_index * message_sample(message_frequency, t);
            (carrier_amplitude * angle.cos(), carrier_amplitude * angle.sin())
        })
        .collect())
}
