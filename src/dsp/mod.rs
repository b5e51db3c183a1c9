//! Signal synthesis primitives.
//!
//! These components are pure, synchronous, in-memory math: closed-form
//! trigonometric formulas evaluated per sample index. No filtering, no
//! spectral analysis, no audio I/O. The only shared state is the atomic
//! stop token used for cooperative cancellation of an in-progress
//! generation loop.

/// Array-producing generation engine with cooperative stop.
pub mod generator;
/// Caller-side baseband (I, Q) mappings for constellation views.
pub mod iq;
/// Per-sample waveform math.
pub mod waveform;

pub use generator::{GeneratorError, SignalGenerator, StopToken};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Waveform kinds the generation engine knows how to synthesize.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Am,
    Fm,
}

impl Waveform {
    /// Human-readable label, as shown in chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Waveform::Sine => "Sine Wave",
            Waveform::Am => "Amplitude Modulated Signal",
            Waveform::Fm => "Frequency Modulated Signal",
        }
    }
}
