//! Interactive weather panel
//!
//! Terminal events are read on a dedicated thread and forwarded to the
//! async loop. Searches run as spawned tasks and report back over a
//! channel tagged with their generation, so the spinner keeps animating.
//! A newer search aborts the one in flight, and any result that still
//! slips through is dropped by the controller as stale.

mod app;
mod theme;
mod ui;

use std::time::Duration;

use application::{SearchError, SearchPipeline, SearchTicket, WeatherReport};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{self, Event},
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

pub use app::App;

/// Spinner frame interval
const TICK_RATE: Duration = Duration::from_millis(100);

type SearchOutcome = (u64, Result<WeatherReport, SearchError>);

/// Take over the terminal and run the panel until the user quits
pub async fn run(mut app: App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    info!("Interactive panel started");

    let result = event_loop(&mut terminal, &mut app).await;
    app.cancel_search();

    ratatui::restore();
    info!("Interactive panel stopped");
    result
}

async fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    let mut events = spawn_event_reader();
    let (result_tx, mut results) = mpsc::unbounded_channel::<SearchOutcome>();
    let mut ticker = tokio::time::interval(TICK_RATE);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            event = events.recv() => match event {
                Some(Event::Key(key)) => {
                    if let Some(ticket) = app.handle_key(key) {
                        let pipeline = app.controller.pipeline().clone();
                        app.track_search(spawn_search(pipeline, ticket, result_tx.clone()));
                    }
                },
                Some(_) => {},
                None => anyhow::bail!("Terminal event stream closed"),
            },
            Some((generation, outcome)) = results.recv() => app.complete(generation, outcome),
            _ = ticker.tick() => app.on_tick(),
        }
    }

    Ok(())
}

fn spawn_event_reader() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                },
                Err(e) => {
                    error!(error = %e, "Failed to read terminal event");
                    break;
                },
            }
        }
    });

    rx
}

fn spawn_search(
    pipeline: SearchPipeline,
    ticket: SearchTicket,
    results: mpsc::UnboundedSender<SearchOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = pipeline.run(&ticket.city).await;
        if results.send((ticket.generation, outcome)).is_err() {
            debug!(generation = ticket.generation, "Panel closed before search finished");
        }
    })
}
