use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::{handle_input, App, FetchOutcome, SpotFetcher};
use crate::ui;

/// Run the interactive map until the user quits.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    fetcher: &SpotFetcher,
    outcomes: &mut UnboundedReceiver<FetchOutcome>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    fetcher.request(app.start());

    loop {
        // Fetches finish in any order; each one is applied as it lands.
        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_outcome(outcome);
        }

        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(endpoint) = handle_input(app, key.code) {
                        fetcher.request(endpoint);
                    }
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        tracing::warn!("redraw after resize failed");
                    }
                }
                _ => {}
            }
        }

        tokio::task::yield_now().await;
    }
    Ok(())
}
