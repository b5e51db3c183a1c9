//! Time-domain signal chart.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::ChartDataError;

/// Owned chart state for the time-domain view.
///
/// `update` replaces the plotted point set, rescales the vertical axis to
/// ±1.1× the peak absolute amplitude, and extends the horizontal axis to the
/// maximum observed time. `dispose` tears the chart down; the next `update`
/// re-initializes it from a clean state.
pub struct SignalChart {
    points: Vec<(f64, f64)>,
    y_bounds: [f64; 2],
    x_max: f64,
    label: String,
    active: bool,
}

impl SignalChart {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            y_bounds: [-1.0, 1.0],
            x_max: 1.0,
            label: String::new(),
            active: true,
        }
    }

    /// Replace the plotted dataset with (time, signal) pairs.
    ///
    /// The two sequences must have equal lengths; on mismatch the stored
    /// state is left unchanged and the error is returned for the caller to
    /// report.
    pub fn update(
        &mut self,
        time: &[f64],
        signal: &[f64],
        label: &str,
    ) -> Result<(), ChartDataError> {
        if time.len() != signal.len() {
            return Err(ChartDataError::LengthMismatch {
                left: time.len(),
                right: signal.len(),
            });
        }

        if !self.active {
            *self = Self::new();
        }

        self.points = time.iter().copied().zip(signal.iter().copied()).collect();
        self.label = label.to_string();

        let peak = signal.iter().fold(0.0f64, |acc, &y| acc.max(y.abs()));
        if peak > 0.0 {
            self.y_bounds = [-1.1 * peak, 1.1 * peak];
        }
        let max_time = time.iter().fold(0.0f64, |acc, &t| acc.max(t));
        if max_time > 0.0 {
            self.x_max = max_time;
        }

        Ok(())
    }

    /// Tear the chart down, releasing its dataset.
    pub fn dispose(&mut self) {
        self.points = Vec::new();
        self.label.clear();
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for SignalChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the time-domain chart.
pub fn render_signal(frame: &mut Frame, area: Rect, chart: &SignalChart) {
    let title = if chart.label().is_empty() {
        " Signal ".to_string()
    } else {
        format!(" {} ", chart.label())
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if !chart.is_active() {
        frame.render_widget(block, area);
        return;
    }

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(chart.data());

    let [y_min, y_max] = chart.y_bounds();
    let widget = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, chart.x_max()])
                .labels(vec!["0".to_string(), format!("{:.2}s", chart.x_max())])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(vec![
                    format!("{y_min:.2}"),
                    "0".to_string(),
                    format!("{y_max:.2}"),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(widget, area);
}
