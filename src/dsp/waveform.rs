//! Per-sample waveform math.

/*
Sine, AM, and FM Samples
========================

Everything in this crate reduces to evaluating one of three closed-form
formulas at a time point t = i / sample_rate.

Vocabulary
----------

  carrier       The high-frequency base waveform being modulated.

  message       The lower-frequency waveform encoding information. It never
                appears in the output directly; it shapes the carrier.

  phase         Offset (radians) added inside the sine argument. Shifts the
                waveform in time without changing its shape.

  modulation    Varying a property of the carrier (amplitude or instantaneous
                phase) in proportion to the message.

  β (beta)      FM modulation index. Scales how far the message deflects the
                carrier's phase.


The Formulas
------------

PURE SINE
    s(t) = A · sin(2π·f·t + φ)

AMPLITUDE MODULATION (AM)
    m(t) = Am · sin(2π·fm·t)
    s(t) = Ac · (1 + m(t)) · sin(2π·fc·t)

    The message scales the carrier's amplitude. The carrier phase term is
    plain 2π·fc·t - the message never enters the sine argument. With
    Am ≤ 1 the envelope stays non-negative and traces the message shape;
    Am > 1 overmodulates and the envelope folds over itself.

FREQUENCY MODULATION (FM)
    m(t) = sin(2π·fm·t)
    s(t) = Ac · sin(2π·fc·t + β·m(t))

    The message deflects the carrier's instantaneous phase. Amplitude stays
    constant - all the information lives in the phase term, which is why FM
    constellations sit on a circle while AM constellations sit on a line.

AM identity: with Am = 0 the envelope is constantly 1 and the output is a
plain sine at the carrier frequency. FM identity: with β = 0 the phase
deflection vanishes, same result. Both identities are pinned by tests.
*/

use std::f64::consts::TAU;

/// Pure sine sample: `amplitude * sin(2π·frequency·t + phase)`.
#[inline]
pub fn sine_sample(amplitude: f64, frequency: f64, phase: f64, t: f64) -> f64 {
    amplitude * (TAU * frequency * t + phase).sin()
}

/// Message value shared by the AM and FM formulas: `sin(2π·frequency·t)`.
#[inline]
pub fn message_sample(frequency: f64, t: f64) -> f64 {
    (TAU * frequency * t).sin()
}

/// AM sample: `carrier_amplitude * (1 + m(t)) * sin(2π·carrier_frequency·t)`.
///
/// The message only scales the envelope; the carrier phase term stays
/// unmodulated.
#[inline]
pub fn am_sample(
    carrier_amplitude: f64,
    carrier_frequency: f64,
    message_amplitude: f64,
    message_frequency: f64,
    t: f64,
) -> f64 {
    let message = message_amplitude * message_sample(message_frequency, t);
    carrier_amplitude * (1.0 + message) * (TAU * carrier_frequency * t).sin()
}

/// FM sample: `carrier_amplitude * sin(2π·carrier_frequency·t + β·m(t))`.
#[inline]
pub fn fm_sample(
    carrier_amplitude: f64,
    carrier_frequency: f64,
    modulation_index: f64,
    message_frequency: f64,
    t: f64,
) -> f64 {
    let message = message_sample(message_frequency, t);
    carrier_amplitude * (TAU * carrier_frequency * t + modulation_index * message).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn sine_quarter_points() {
        // 1 Hz sine sampled at t = 0, 0.25, 0.5, 0.75 hits 0, 1, 0, -1
        assert!(sine_sample(1.0, 1.0, 0.0, 0.0).abs() < TOL);
        assert!((sine_sample(1.0, 1.0, 0.0, 0.25) - 1.0).abs() < TOL);
        assert!(sine_sample(1.0, 1.0, 0.0, 0.5).abs() < TOL);
        assert!((sine_sample(1.0, 1.0, 0.0, 0.75) + 1.0).abs() < TOL);
    }

    #[test]
    fn sine_phase_shift() {
        // φ = π/2 turns sine into cosine
        let phase = std::f64::consts::FRAC_PI_2;
        assert!((sine_sample(1.0, 1.0, phase, 0.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn sine_amplitude_scales() {
        let base = sine_sample(1.0, 3.0, 0.1, 0.37);
        let scaled = sine_sample(2.5, 3.0, 0.1, 0.37);
        assert!((scaled - 2.5 * base).abs() < TOL);
    }

    #[test]
    fn am_identity_without_message() {
        // message_amplitude = 0 reduces AM to a plain carrier sine
        for i in 0..100 {
            let t = i as f64 / 100.0;
            let am = am_sample(1.0, 10.0, 0.0, 2.0, t);
            let sine = sine_sample(1.0, 10.0, 0.0, t);
            assert!((am - sine).abs() < TOL, "mismatch at t = {t}");
        }
    }

    #[test]
    fn fm_identity_without_index() {
        // modulation_index = 0 reduces FM to a plain carrier sine
        for i in 0..100 {
            let t = i as f64 / 100.0;
            let fm = fm_sample(0.8, 10.0, 0.0, 2.0, t);
            let sine = sine_sample(0.8, 10.0, 0.0, t);
            assert!((fm - sine).abs() < TOL, "mismatch at t = {t}");
        }
    }

    #[test]
    fn am_envelope_peaks() {
        // At a message peak (m = +Am) the sample is scaled by (1 + Am).
        // Pick t so both message and carrier sit on a peak:
        // fm = 1 Hz peaks at t = 0.25; fc = 5 Hz also peaks there (5·0.25 = 1.25 cycles).
        let t = 0.25;
        let sample = am_sample(1.0, 5.0, 0.5, 1.0, t);
        assert!((sample - 1.5).abs() < 1e-9);
    }

    #[test]
    fn fm_amplitude_bounded() {
        // FM output never exceeds the carrier amplitude
        for i in 0..1000 {
            let t = i as f64 / 250.0;
            let s = fm_sample(0.7, 50.0, 5.0, 3.0, t);
            assert!(s.abs() <= 0.7 + 1e-12);
        }
    }
}
