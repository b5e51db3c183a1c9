//! TUI widgets for the scope.
//!
//! Chart state lives in owned objects with an explicit update/dispose
//! lifecycle rather than a shared global handle; render functions take the
//! state by reference each frame.

mod constellation;
mod panel;
mod signal;

pub use constellation::{render_constellation, ConstellationChart};
pub use panel::render_panel;
pub use signal::{render_signal, SignalChart};

/// Errors at the visualization data boundary.
///
/// A failed update leaves the chart's stored dataset and bounds untouched;
/// the caller reports the failure (the app surfaces it on the status line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartDataError {
    /// The two input sequences have different lengths.
    LengthMismatch { left: usize, right: usize },
}

impl std::fmt::Display for ChartDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartDataError::LengthMismatch { left, right } => {
                write!(f, "mismatched sequence lengths: {left} vs {right}")
            }
        }
    }
}

impl std::error::Error for ChartDataError {}
