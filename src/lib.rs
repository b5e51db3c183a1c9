pub mod dsp;

/// Sample rate used by the `scope` binary and most examples.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;
