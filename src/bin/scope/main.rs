//! scope - terminal oscilloscope for the signalscope synthesis engine
//!
//! Run with: cargo run --bin scope

mod app;
mod params;
mod ui;
mod worker;

use std::sync::mpsc;

use app::App;

/// Sample ring capacity; the UI drains every frame, the worker waits when full.
const SAMPLE_RING_CAPACITY: usize = 1 << 15;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let (request_tx, request_rx) = mpsc::channel();
    let (sample_tx, sample_rx) = rtrb::RingBuffer::new(SAMPLE_RING_CAPACITY);
    let (event_tx, event_rx) = rtrb::RingBuffer::new(64);

    let stop = worker::spawn(request_rx, sample_tx, event_tx);

    let mut terminal = ratatui::init();
    let result = App::new(request_tx, sample_rx, event_rx, stop).run(&mut terminal);
    ratatui::restore();
    result
}
