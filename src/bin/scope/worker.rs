//! Generation worker thread.
//!
//! Owns the single [`SignalGenerator`] instance and serializes generation
//! requests onto it - the engine allows one generation in progress at a
//! time, so all requests funnel through this thread. Finished samples
//! stream to the UI over an rtrb ring buffer; lifecycle events go over a
//! second ring.

use std::sync::mpsc::Receiver;
use std::thread;
use std::time::Duration;

use rtrb::{Producer, PushError};
use signalscope::dsp::{SignalGenerator, StopToken, Waveform};

use crate::params::Params;

/// Lifecycle events reported back to the UI.
///
/// Each event echoes the request id it belongs to, so the UI can tell a
/// superseded request's output apart from the active one's even though the
/// sample ring itself is untagged.
#[derive(Debug)]
pub enum WorkerEvent {
    /// Generation finished; `produced < expected` means it was stopped
    /// mid-loop and the result is a truncated prefix.
    Finished {
        id: u64,
        produced: usize,
        expected: usize,
    },
    /// Parameter validation failed. No samples were streamed for this id.
    Failed { id: u64, message: String },
}

/// Spawn the worker thread. Returns a stop token for the engine so the UI
/// can cancel an in-flight generation.
pub fn spawn(
    requests: Receiver<(u64, Params)>,
    mut samples: Producer<f64>,
    mut events: Producer<WorkerEvent>,
) -> StopToken {
    let generator = SignalGenerator::new();
    let token = generator.token();

    thread::spawn(move || {
        // Exits when the UI drops its sender.
        while let Ok((id, params)) = requests.recv() {
            let result = match params.waveform {
                Waveform::Sine => generator.generate_sine(
                    params.amplitude,
                    params.frequency,
                    params.phase,
                    params.duration,
                    params.sample_rate,
                ),
                Waveform::Am => generator.generate_am(
                    params.amplitude,
                    params.frequency,
                    params.message_amplitude,
                    params.message_frequency,
                    params.duration,
                    params.sample_rate,
                ),
                Waveform::Fm => generator.generate_fm(
                    params.amplitude,
                    params.frequency,
                    params.modulation_index,
                    params.message_frequency,
                    params.duration,
                    params.sample_rate,
                ),
            };

            match result {
                Ok(signal) => {
                    for &sample in &signal {
                        push_blocking(&mut samples, sample);
                    }
                    let _ = events.push(WorkerEvent::Finished {
                        id,
                        produced: signal.len(),
                        expected: params.expected_samples(),
                    });
                }
                Err(err) => {
                    let _ = events.push(WorkerEvent::Failed {
                        id,
                        message: err.to_string(),
                    });
                }
            }
        }
    });

    token
}

/// Push one sample, waiting for the UI to drain the ring when it fills.
/// The UI polls every frame, so the wait is short.
fn push_blocking(producer: &mut Producer<f64>, sample: f64) {
    let mut pending = sample;
    loop {
        match producer.push(pending) {
            Ok(()) => return,
            Err(PushError::Full(value)) => {
                pending = value;
                thread::sleep(Duration::from_millis(1));
            }
        }
    }
}
