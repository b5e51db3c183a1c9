//! Editable generation parameters.

use signalscope::dsp::Waveform;
use signalscope::DEFAULT_SAMPLE_RATE;

/// Full parameter set for one generation request.
///
/// Each waveform kind reads the subset it needs; `amplitude` and `frequency`
/// double as the carrier amplitude/frequency for AM and FM.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Params {
    pub waveform: Waveform,
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub message_amplitude: f64,
    pub modulation_index: f64,
    pub message_frequency: f64,
    pub duration: f64,
    pub sample_rate: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            waveform: Waveform::Sine,
            amplitude: 1.0,
            frequency: 5.0,
            phase: 0.0,
            message_amplitude: 0.5,
            modulation_index: 2.0,
            message_frequency: 1.0,
            duration: 1.0,
            sample_rate: DEFAULT_SAMPLE_RATE / 48,
        }
    }
}

/// One editable field in the parameter panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Amplitude,
    Frequency,
    Phase,
    MessageAmplitude,
    ModulationIndex,
    MessageFrequency,
    Duration,
    SampleRate,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Amplitude => "amp",
            Field::Frequency => "freq",
            Field::Phase => "phase",
            Field::MessageAmplitude => "msg amp",
            Field::ModulationIndex => "beta",
            Field::MessageFrequency => "msg freq",
            Field::Duration => "dur",
            Field::SampleRate => "rate",
        }
    }
}

const SINE_FIELDS: &[Field] = &[
    Field::Amplitude,
    Field::Frequency,
    Field::Phase,
    Field::Duration,
    Field::SampleRate,
];

const AM_FIELDS: &[Field] = &[
    Field::Amplitude,
    Field::Frequency,
    Field::MessageAmplitude,
    Field::MessageFrequency,
    Field::Duration,
    Field::SampleRate,
];

const FM_FIELDS: &[Field] = &[
    Field::Amplitude,
    Field::Frequency,
    Field::ModulationIndex,
    Field::MessageFrequency,
    Field::Duration,
    Field::SampleRate,
];

impl Params {
    /// Fields shown for the current waveform, in panel order.
    pub fn fields(&self) -> &'static [Field] {
        match self.waveform {
            Waveform::Sine => SINE_FIELDS,
            Waveform::Am => AM_FIELDS,
            Waveform::Fm => FM_FIELDS,
        }
    }

    /// Nudge a field up (`+1`) or down (`-1`) by its step size.
    pub fn adjust(&mut self, field: Field, direction: i32) {
        let sign = direction.signum() as f64;
        match field {
            Field::Amplitude => {
                self.amplitude = (self.amplitude + sign * 0.1).max(0.0);
            }
            Field::Frequency => {
                self.frequency = (self.frequency + sign * 1.0).max(0.0);
            }
            Field::Phase => {
                self.phase += sign * std::f64::consts::FRAC_PI_8;
            }
            Field::MessageAmplitude => {
                self.message_amplitude = (self.message_amplitude + sign * 0.1).max(0.0);
            }
            Field::ModulationIndex => {
                self.modulation_index = (self.modulation_index + sign * 0.5).max(0.0);
            }
            Field::MessageFrequency => {
                self.message_frequency = (self.message_frequency + sign * 0.5).max(0.0);
            }
            Field::Duration => {
                self.duration = (self.duration + sign * 0.25).max(0.0);
            }
            Field::SampleRate => {
                // Step through powers of two; never below 1 (zero is invalid).
                if direction > 0 {
                    self.sample_rate = self.sample_rate.saturating_mul(2);
                } else {
                    self.sample_rate = (self.sample_rate / 2).max(1);
                }
            }
        }
    }

    /// Display value for a field.
    pub fn value_label(&self, field: Field) -> String {
        match field {
            Field::Amplitude => format!("{:.1}", self.amplitude),
            Field::Frequency => format!("{:.0} Hz", self.frequency),
            Field::Phase => format!("{:.2} rad", self.phase),
            Field::MessageAmplitude => format!("{:.1}", self.message_amplitude),
            Field::ModulationIndex => format!("{:.1}", self.modulation_index),
            Field::MessageFrequency => format!("{:.1} Hz", self.message_frequency),
            Field::Duration => format!("{:.2} s", self.duration),
            Field::SampleRate => format!("{}/s", self.sample_rate),
        }
    }

    /// Full sample count this request will produce if it runs to completion.
    pub fn expected_samples(&self) -> usize {
        (self.duration * self.sample_rate as f64).floor() as usize
    }
}
