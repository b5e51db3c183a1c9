//! Scope application - event loop, key handling, chart ownership.

use std::collections::VecDeque;
use std::sync::mpsc::Sender;
use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;

use signalscope::dsp::{iq, SignalGenerator, StopToken, Waveform};

use crate::params::Params;
use crate::ui::{render_constellation, render_panel, render_signal, ConstellationChart, SignalChart};
use crate::worker::WorkerEvent;

/// Engine state as seen from the UI.
enum EngineState {
    Idle,
    Generating,
    Done { produced: usize },
    Stopped { produced: usize, expected: usize },
    Failed { message: String },
}

impl EngineState {
    fn describe(&self) -> String {
        match self {
            EngineState::Idle => "idle".to_string(),
            EngineState::Generating => "generating...".to_string(),
            EngineState::Done { produced } => format!("done - {produced} samples"),
            EngineState::Stopped { produced, expected } => {
                format!("stopped at {produced}/{expected}")
            }
            EngineState::Failed { message } => format!("error: {message}"),
        }
    }
}

pub struct App {
    requests: Sender<(u64, Params)>,
    samples_rx: Consumer<f64>,
    events_rx: Consumer<WorkerEvent>,
    stop: StopToken,

    params: Params,
    selected: usize,
    state: EngineState,

    /// Id assigned to the next request.
    next_id: u64,
    /// Id of the most recently sent request - the only one whose output
    /// gets rendered. Requests it superseded still drain through the rings
    /// but are discarded.
    active_id: u64,
    /// Id of the request whose samples sit at the front of the sample ring.
    /// The worker is strictly serial, so this advances one id at a time as
    /// events are consumed.
    streaming_id: u64,
    /// Parameters of the active request, frozen at send time so later edits
    /// don't skew the time axis or IQ mapping.
    active_request: Option<Params>,
    /// Full time axis for the active request, truncated to match the signal.
    time_axis: Vec<f64>,
    /// Samples drained from the ring and not yet consumed by an event.
    received: Vec<f64>,
    /// Worker events waiting for their samples to finish draining.
    pending_events: VecDeque<WorkerEvent>,

    signal_chart: SignalChart,
    constellation: ConstellationChart,
    /// Most recent chart boundary failure, shown on the panel.
    warning: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(
        requests: Sender<(u64, Params)>,
        samples_rx: Consumer<f64>,
        events_rx: Consumer<WorkerEvent>,
        stop: StopToken,
    ) -> Self {
        Self {
            requests,
            samples_rx,
            events_rx,
            stop,
            params: Params::default(),
            selected: 0,
            state: EngineState::Idle,
            next_id: 0,
            active_id: 0,
            streaming_id: 0,
            active_request: None,
            time_axis: Vec::new(),
            received: Vec::new(),
            pending_events: VecDeque::new(),
            signal_chart: SignalChart::new(),
            constellation: ConstellationChart::new(),
            warning: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop (~60 fps poll cadence).
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_samples();
            self.poll_events();
            self.process_finished();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    /// Drain the sample ring and live-update the signal chart with the
    /// prefix received so far - but only while the front of the stream
    /// belongs to the active request.
    fn poll_samples(&mut self) {
        let before = self.received.len();
        while let Ok(sample) = self.samples_rx.pop() {
            self.received.push(sample);
        }

        if self.received.len() == before
            || self.active_request.is_none()
            || self.streaming_id != self.active_id
        {
            return;
        }
        let n = self.received.len().min(self.time_axis.len());
        if n == 0 {
            return;
        }
        let label = self
            .active_request
            .map(|p| p.waveform.label())
            .unwrap_or("Signal");
        if let Err(err) = self
            .signal_chart
            .update(&self.time_axis[..n], &self.received[..n], label)
        {
            self.warning = Some(err.to_string());
        }
    }

    fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.pop() {
            self.pending_events.push_back(event);
        }
    }

    /// Consume worker events in stream order.
    ///
    /// The worker pushes all of a request's samples before its event, so the
    /// front event tells how many samples at the front of `received` belong
    /// to which request id. A `Finished` whose tail is still in flight waits
    /// for a later frame; output of a superseded request is drained and
    /// discarded instead of rendered under the active request's label.
    fn process_finished(&mut self) {
        loop {
            let ready = match self.pending_events.front() {
                None => return,
                Some(WorkerEvent::Finished { produced, .. }) => self.received.len() >= *produced,
                Some(WorkerEvent::Failed { .. }) => true,
            };
            if !ready {
                return;
            }
            let Some(event) = self.pending_events.pop_front() else {
                return;
            };

            match event {
                WorkerEvent::Finished {
                    id,
                    produced,
                    expected,
                } => {
                    let signal: Vec<f64> = self.received.drain(..produced).collect();
                    self.streaming_id = id + 1;
                    if id != self.active_id {
                        continue;
                    }

                    let Some(request) = self.active_request.take() else {
                        self.state = EngineState::Done { produced };
                        continue;
                    };

                    let n = produced.min(self.time_axis.len());
                    if let Err(err) = self.signal_chart.update(
                        &self.time_axis[..n],
                        &signal[..n],
                        request.waveform.label(),
                    ) {
                        self.warning = Some(err.to_string());
                    }

                    self.update_constellation(&request, produced);

                    self.state = if produced < expected {
                        EngineState::Stopped { produced, expected }
                    } else {
                        EngineState::Done { produced }
                    };
                }
                WorkerEvent::Failed { id, message } => {
                    self.streaming_id = id + 1;
                    if id == self.active_id {
                        self.state = EngineState::Failed { message };
                        self.active_request = None;
                    }
                }
            }
        }
    }

    /// Map the finished request to a baseband IQ trajectory and push it to
    /// the constellation chart.
    fn update_constellation(&mut self, request: &Params, produced: usize) {
        let trajectory = match request.waveform {
            Waveform::Sine => Ok(vec![iq::tone_point(request.amplitude, request.phase)]),
            Waveform::Am => iq::am_trajectory(
                request.amplitude,
                request.message_amplitude,
                request.message_frequency,
                request.duration,
                request.sample_rate,
            ),
            Waveform::Fm => iq::fm_trajectory(
                request.amplitude,
                request.modulation_index,
                request.message_frequency,
                request.duration,
                request.sample_rate,
            ),
        };

        let mut points = match trajectory {
            Ok(points) => points,
            Err(err) => {
                self.warning = Some(err.to_string());
                return;
            }
        };
        // A stopped generation gets a matching truncated trajectory.
        if request.waveform != Waveform::Sine {
            points.truncate(produced);
        }

        let (i_data, q_data): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
        if let Err(err) = self.constellation.update(&i_data, &q_data) {
            self.warning = Some(err.to_string());
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.select_waveform(Waveform::Sine),
            KeyCode::Char('2') => self.select_waveform(Waveform::Am),
            KeyCode::Char('3') => self.select_waveform(Waveform::Fm),
            KeyCode::Left => {
                let len = self.params.fields().len();
                self.selected = (self.selected + len - 1) % len;
            }
            KeyCode::Right => {
                self.selected = (self.selected + 1) % self.params.fields().len();
            }
            KeyCode::Up => {
                let field = self.params.fields()[self.selected];
                self.params.adjust(field, 1);
            }
            KeyCode::Down => {
                let field = self.params.fields()[self.selected];
                self.params.adjust(field, -1);
            }
            KeyCode::Char('g') | KeyCode::Enter => self.request_generation(),
            KeyCode::Char('s') => self.stop.stop(),
            KeyCode::Char('c') => {
                self.signal_chart.dispose();
                self.constellation.dispose();
                self.warning = None;
            }
            _ => {}
        }
    }

    fn select_waveform(&mut self, waveform: Waveform) {
        self.params.waveform = waveform;
        self.selected = self.selected.min(self.params.fields().len() - 1);
    }

    fn request_generation(&mut self) {
        let request = self.params;
        let id = self.next_id;
        self.next_id += 1;
        self.active_id = id;
        // `received` is NOT cleared here: it may hold the tail of a
        // superseded request, which its own event will drain and discard.
        self.time_axis =
            SignalGenerator::time_array(request.duration, request.sample_rate).unwrap_or_default();
        self.warning = None;
        self.active_request = Some(request);
        self.state = EngineState::Generating;
        // The worker outlives the UI loop; a send failure only happens at
        // teardown and the quit path handles that.
        let _ = self.requests.send((id, request));
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Parameter panel
                Constraint::Min(8),     // Signal chart
                Constraint::Length(14), // Constellation
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        let selected = self.params.fields()[self.selected];
        render_panel(
            frame,
            chunks[0],
            &self.params,
            selected,
            &self.state.describe(),
            self.warning.as_deref(),
        );
        render_signal(frame, chunks[1], &self.signal_chart);
        render_constellation(frame, chunks[2], &self.constellation);

        let help = Paragraph::new(
            " [1/2/3] Waveform  [</>] Field  [^/v] Adjust  [G] Generate  [S] Stop  [C] Clear  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{channel, Receiver};

    fn test_app() -> (
        App,
        rtrb::Producer<f64>,
        rtrb::Producer<WorkerEvent>,
        Receiver<(u64, Params)>,
    ) {
        let (request_tx, request_rx) = channel();
        let (sample_tx, sample_rx) = rtrb::RingBuffer::new(1 << 12);
        let (event_tx, event_rx) = rtrb::RingBuffer::new(16);
        let stop = SignalGenerator::new().token();
        let app = App::new(request_tx, sample_rx, event_rx, stop);
        (app, sample_tx, event_tx, request_rx)
    }

    fn pump(app: &mut App) {
        app.poll_samples();
        app.poll_events();
        app.process_finished();
    }

    #[test]
    fn superseded_request_output_is_discarded() {
        let (mut app, mut samples, mut events, _requests) = test_app();

        // Default params: 1 s at 1000 samples/s -> 1000 samples expected.
        app.request_generation();
        // The first request's output streams back while a second request
        // is fired mid-flight.
        for _ in 0..1000 {
            samples.push(7.0).unwrap();
        }
        app.request_generation();
        events
            .push(WorkerEvent::Finished {
                id: 0,
                produced: 1000,
                expected: 1000,
            })
            .unwrap();
        pump(&mut app);

        // The old output is drained and dropped, never attributed to the
        // new request: state stays Generating with the request still armed.
        assert!(matches!(app.state, EngineState::Generating));
        assert!(app.active_request.is_some());
        assert!(app.received.is_empty());
        assert!(!app.signal_chart.data().iter().any(|&(_, y)| y == 7.0));

        // The new request's own output then completes normally.
        for _ in 0..1000 {
            samples.push(3.0).unwrap();
        }
        events
            .push(WorkerEvent::Finished {
                id: 1,
                produced: 1000,
                expected: 1000,
            })
            .unwrap();
        pump(&mut app);

        assert!(matches!(app.state, EngineState::Done { produced: 1000 }));
        assert!(app.active_request.is_none());
        assert_eq!(app.signal_chart.data().len(), 1000);
        assert!(app.signal_chart.data().iter().all(|&(_, y)| y == 3.0));
    }

    #[test]
    fn no_live_update_while_stale_stream_drains() {
        let (mut app, mut samples, _events, _requests) = test_app();

        app.request_generation();
        for _ in 0..10 {
            samples.push(7.0).unwrap();
        }
        app.request_generation();
        // Old samples are at the front of the ring but belong to id 0;
        // the active request is id 1, so the chart must not pick them up.
        pump(&mut app);

        assert!(app.signal_chart.data().is_empty());
        assert_eq!(app.received.len(), 10);
    }

    #[test]
    fn stale_failure_does_not_clobber_active_state() {
        let (mut app, _samples, mut events, _requests) = test_app();

        app.request_generation();
        app.request_generation();
        events
            .push(WorkerEvent::Failed {
                id: 0,
                message: "invalid parameter duration = -1".to_string(),
            })
            .unwrap();
        pump(&mut app);

        assert!(matches!(app.state, EngineState::Generating));
        assert!(app.active_request.is_some());
        assert_eq!(app.streaming_id, 1);
    }
}
