use anyhow::{Context, Result};
use coursedesk_client::Client;
use log::{debug, warn};
use ratatui::{prelude::CrosstermBackend, Frame, Terminal};
use simplelog::WriteLogger;
use std::{fs::File, io, path::PathBuf, thread};
use xdg::BaseDirectories;

mod config;
mod courses_screen;
mod event;
mod store;
mod styles;
mod tui;
mod widgets;

use config::Config;
use courses_screen::CoursesScreen;
use event::{Event, EventBus};
use tui::Tui;

const LOG_FILE: &str = "coursedesk.log";

/// Something that takes up the whole terminal
pub trait Screen {
    fn draw(&mut self, frame: &mut Frame);
    fn handle_event(&mut self, event: Event) -> Result<ExitState>;
}

/// Whether to keep going after an event
pub enum ExitState {
    Running,
    Quit,
}

fn main() -> Result<()> {
    // the logger isn't up until we have a config, so remember where it came from
    let (config, created) = match Config::load()? {
        Some(config) => (config, false),
        None => (Config::init()?, true),
    };
    init_logging(&config)?;
    if created {
        debug!("no config file found, wrote defaults");
    }
    debug!("loaded config: {:?}", config);

    let client = Client::with_timeout(&config.api_base, config.token.clone(), config.timeout())
        .context("error creating api client")?;

    let events = EventBus::new();
    spawn_health_check(client.clone())?;
    events.spawn_terminal_listener()?;

    let mut screen = CoursesScreen::new(&events, client, config.admin_base.clone())?;

    // Dropped before the screen and event bus, so the terminal is restored before we wait on any threads
    let mut tui = Tui::enter(Terminal::new(CrosstermBackend::new(io::stderr()))?)?;

    loop {
        tui.draw(&mut screen)?;
        match screen.handle_event(events.next()?)? {
            ExitState::Running => (),
            ExitState::Quit => break,
        }
    }

    debug!("exiting");
    Ok(())
}

/// We can't log to stderr while the UI is up, so log to a file in the state dir instead.
fn init_logging(config: &Config) -> Result<()> {
    let file = File::create(log_path()?).context("error creating log file")?;

    WriteLogger::init(config.log_level()?, simplelog::Config::default(), file)
        .context("error initialising logger")?;

    Ok(())
}

fn log_path() -> Result<PathBuf> {
    Ok(BaseDirectories::with_prefix("coursedesk")?.place_state_file(LOG_FILE)?)
}

/// Check the API is reachable, without holding up startup or shutdown.
/// Detached rather than on the event bus, which joins its threads when dropped.
fn spawn_health_check(client: Client) -> Result<()> {
    thread::Builder::new()
        .name("health_check".to_string())
        .spawn(move || match client.health() {
            Ok(h) => debug!("api at {} is up, status {:?}", client.base(), h.status),
            Err(e) => warn!("api at {} failed health check: {}", client.base(), e),
        })?;

    Ok(())
}
