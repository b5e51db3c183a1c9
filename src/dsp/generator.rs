//! Array-producing signal generation with cooperative stop.
//!
//! [`SignalGenerator`] evaluates the formulas from [`waveform`](super::waveform)
//! over `floor(duration * sample_rate)` indices and returns the samples as a
//! `Vec<f64>`. A generation loop checks its [`StopToken`] once per sample, so
//! a `stop()` from another thread truncates the result to the prefix produced
//! so far instead of aborting it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::waveform;

/// Cancellation token shared between a generation loop and whoever may want
/// to stop it.
///
/// Clones observe the same flag, so a token can be handed to another thread
/// while the generator keeps running on this one. Stopping is cooperative:
/// the loop notices the flag at its next iteration, finishes nothing further,
/// and returns what it has.
#[derive(Debug, Clone)]
pub struct StopToken {
    running: Arc<AtomicBool>,
}

impl StopToken {
    fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request that the in-progress generation stop.
    ///
    /// No-op when nothing is generating; the next generation call rearms the
    /// token, so a stale stop request never cancels a future run.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// True while a generation loop on this token is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    fn rearm(&self) {
        self.running.store(true, Ordering::Relaxed);
    }

    fn disarm(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Errors returned by generation operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// A numeric parameter is outside its valid range
    /// (negative duration or zero sample rate).
    InvalidParameter { name: &'static str, value: f64 },
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name} = {value}")
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Validate (duration, sample_rate) and compute `floor(duration * sample_rate)`.
pub(crate) fn sample_count(duration: f64, sample_rate: u32) -> Result<usize, GeneratorError> {
    if duration < 0.0 {
        return Err(GeneratorError::InvalidParameter {
            name: "duration",
            value: duration,
        });
    }
    if sample_rate == 0 {
        return Err(GeneratorError::InvalidParameter {
            name: "sample_rate",
            value: sample_rate as f64,
        });
    }
    Ok((duration * sample_rate as f64).floor() as usize)
}

/// Stateless-per-call synthesis engine for sine, AM, and FM sample arrays.
///
/// The engine holds no signal state between calls; the only shared state is
/// the stop token. Run one generation at a time per instance - concurrent
/// calls on the same instance would race on the token. The `scope` binary
/// serializes requests through a single worker thread for exactly this
/// reason.
#[derive(Debug)]
pub struct SignalGenerator {
    token: StopToken,
}

impl SignalGenerator {
    pub fn new() -> Self {
        Self {
            token: StopToken::new(),
        }
    }

    /// A clonable handle that can stop this generator's in-progress loop,
    /// including from another thread.
    pub fn token(&self) -> StopToken {
        self.token.clone()
    }

    /// Stop the in-progress generation, if any.
    pub fn stop(&self) {
        self.token.stop();
    }

    /// True while one of the `generate_*` calls is iterating.
    pub fn is_generating(&self) -> bool {
        self.token.is_running()
    }

    /// Generate a pure sine: `amplitude * sin(2π·frequency·t + phase)`.
    ///
    /// Returns `floor(duration * sample_rate)` samples, or the prefix
    /// produced before a stop request (never empty when the full count is
    /// nonzero - sample 0 always lands).
    pub fn generate_sine(
        &self,
        amplitude: f64,
        frequency: f64,
        phase: f64,
        duration: f64,
        sample_rate: u32,
    ) -> Result<Vec<f64>, GeneratorError> {
        let count = sample_count(duration, sample_rate)?;
        Ok(self.collect(count, sample_rate, |t| {
            waveform::sine_sample(amplitude, frequency, phase, t)
        }))
    }

    /// Generate an amplitude-modulated signal.
    ///
    /// `carrier_amplitude * (1 + message_amplitude·sin(2π·message_frequency·t))
    ///  * sin(2π·carrier_frequency·t)` - the message scales the envelope only,
    /// the carrier phase term stays unmodulated.
    pub fn generate_am(
        &self,
        carrier_amplitude: f64,
        carrier_frequency: f64,
        message_amplitude: f64,
        message_frequency: f64,
        duration: f64,
        sample_rate: u32,
    ) -> Result<Vec<f64>, GeneratorError> {
        let count = sample_count(duration, sample_rate)?;
        Ok(self.collect(count, sample_rate, |t| {
            waveform::am_sample(
                carrier_amplitude,
                carrier_frequency,
                message_amplitude,
                message_frequency,
                t,
            )
        }))
    }

    /// Generate a frequency-modulated signal.
    ///
    /// `carrier_amplitude * sin(2π·carrier_frequency·t
    ///  + modulation_index·sin(2π·message_frequency·t))`.
    pub fn generate_fm(
        &self,
        carrier_amplitude: f64,
        carrier_frequency: f64,
        modulation_index: f64,
        message_frequency: f64,
        duration: f64,
        sample_rate: u32,
    ) -> Result<Vec<f64>, GeneratorError> {
        let count = sample_count(duration, sample_rate)?;
        Ok(self.collect(count, sample_rate, |t| {
            waveform::fm_sample(
                carrier_amplitude,
                carrier_frequency,
                modulation_index,
                message_frequency,
                t,
            )
        }))
    }

    /// Time axis matching a generation call: `t[i] = i / sample_rate` over
    /// `floor(duration * sample_rate)` indices.
    ///
    /// Pure - no stop token involvement. The caller pairs this with the
    /// (duration, sample_rate) it passed to a `generate_*` call so the two
    /// arrays align index for index; after a truncated generation, truncate
    /// the time axis to the signal length.
    pub fn time_array(duration: f64, sample_rate: u32) -> Result<Vec<f64>, GeneratorError> {
        let count = sample_count(duration, sample_rate)?;
        let rate = sample_rate as f64;
        Ok((0..count).map(|i| i as f64 / rate).collect())
    }

    /// Shared generation loop: rearm the token, append one sample per index
    /// until done or stopped, disarm on the way out.
    fn collect(
        &self,
        count: usize,
        sample_rate: u32,
        sample_at: impl Fn(f64) -> f64,
    ) -> Vec<f64> {
        self.token.rearm();
        let rate = sample_rate as f64;
        let mut samples = Vec::with_capacity(count);
        for i in 0..count {
            // Sample 0 always lands; after that the token is checked once
            // per iteration, so a stopped run still returns a prefix of at
            // least one sample.
            if i > 0 && !self.token.is_running() {
                break;
            }
            samples.push(sample_at(i as f64 / rate));
        }
        self.token.disarm();
        samples
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new()
    }
}
