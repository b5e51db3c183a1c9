//! IQ constellation scatter chart.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::ChartDataError;

/// Fixed axis range for both I and Q, independent of the data.
pub const IQ_BOUNDS: [f64; 2] = [-1.2, 1.2];

/// Owned chart state for the constellation view.
///
/// Same update/dispose lifecycle as [`SignalChart`](super::SignalChart),
/// but the axes never rescale: constellations are read against a fixed
/// [-1.2, 1.2] frame.
pub struct ConstellationChart {
    points: Vec<(f64, f64)>,
    active: bool,
}

impl ConstellationChart {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            active: true,
        }
    }

    /// Replace the plotted point set with (I, Q) pairs.
    pub fn update(&mut self, i_data: &[f64], q_data: &[f64]) -> Result<(), ChartDataError> {
        if i_data.len() != q_data.len() {
            return Err(ChartDataError::LengthMismatch {
                left: i_data.len(),
                right: q_data.len(),
            });
        }

        if !self.active {
            *self = Self::new();
        }

        self.points = i_data
            .iter()
            .copied()
            .zip(q_data.iter().copied())
            .collect();
        Ok(())
    }

    pub fn dispose(&mut self) {
        self.points = Vec::new();
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.points
    }
}

impl Default for ConstellationChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the constellation scatter plot.
pub fn render_constellation(frame: &mut Frame, area: Rect, chart: &ConstellationChart) {
    let block = Block::default().title(" Constellation ").borders(Borders::ALL);

    if !chart.is_active() {
        frame.render_widget(block, area);
        return;
    }

    let dataset = Dataset::default()
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(Color::Magenta))
        .data(chart.data());

    let widget = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds(IQ_BOUNDS)
                .labels(vec!["-1.2", "0", "1.2"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds(IQ_BOUNDS)
                .labels(vec!["-1.2", "0", "1.2"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(widget, area);
}
