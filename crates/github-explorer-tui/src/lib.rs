//! Terminal UI for searching GitHub repositories and browsing their files.

mod app;
mod errors;
mod events;
mod explorer;
mod search;
mod terminal;

use std::{sync::Arc, time::Duration};

use crossterm::event::{self, Event};
use github_explorer_config::Config;
use github_explorer_ghapi_interface::ApiService;
use tokio::sync::mpsc;

pub use crate::errors::{Result, UiError};
use crate::{app::App, terminal::TerminalWrapper};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the interactive UI until the user quits.
pub async fn run_tui(config: Config, api_service: Arc<dyn ApiService>) -> Result<()> {
    let mut terminal = TerminalWrapper::new()?;
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, api_service, events_tx);

    loop {
        while let Ok(app_event) = events_rx.try_recv() {
            app.on_event(app_event);
        }

        terminal.draw(|f| app.draw(f))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
