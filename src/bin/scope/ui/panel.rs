//! Parameter and status panel - waveform, editable fields, engine state.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use signalscope::dsp::Waveform;

use crate::params::{Field, Params};

/// Render the top panel: waveform selector, parameter fields with the
/// selected one highlighted, engine state, and any boundary warning.
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    params: &Params,
    selected: Field,
    state: &str,
    warning: Option<&str>,
) {
    let block = Block::default().title(" scope ").borders(Borders::ALL);

    let mut top = vec![Span::raw(" ")];
    for waveform in [Waveform::Sine, Waveform::Am, Waveform::Fm] {
        let name = match waveform {
            Waveform::Sine => "[1] Sine",
            Waveform::Am => "[2] AM",
            Waveform::Fm => "[3] FM",
        };
        let style = if waveform == params.waveform {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        top.push(Span::styled(name, style));
        top.push(Span::raw("  "));
    }
    top.push(Span::styled(state.to_string(), Style::default().fg(Color::Green)));
    if let Some(message) = warning {
        top.push(Span::raw("  "));
        top.push(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ));
    }

    let mut bottom = vec![Span::raw(" ")];
    for &field in params.fields() {
        let style = if field == selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        bottom.push(Span::styled(
            format!("{}: {}", field.label(), params.value_label(field)),
            style,
        ));
        bottom.push(Span::raw("   "));
    }

    let paragraph = Paragraph::new(vec![Line::from(top), Line::from(bottom)]).block(block);
    frame.render_widget(paragraph, area);
}
