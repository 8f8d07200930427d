use crate::Screen;
use anyhow::Result;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use log::error;
use ratatui::backend::Backend;
use ratatui::Terminal;

use std::io;
use std::panic;

/// Owns the terminal while the UI is running, and puts it back how we found it when dropped.
pub struct Tui<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> Tui<B> {
    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(mut terminal: Terminal<B>) -> Result<Self> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stderr(), EnterAlternateScreen)?;

        // Reset the terminal before printing a panic, otherwise it gets lost
        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic| {
            if let Err(e) = reset() {
                eprintln!("failed to reset the terminal: {}", e);
            }
            panic_hook(panic);
        }));

        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self { terminal })
    }

    pub fn draw(&mut self, screen: &mut dyn Screen) -> Result<()> {
        self.terminal.draw(|frame| screen.draw(frame))?;

        Ok(())
    }
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        if let Err(e) = reset() {
            error!("error resetting terminal: {}", e);
        }
        if let Err(e) = self.terminal.show_cursor() {
            error!("error showing cursor: {}", e);
        }
    }
}

/// Leave raw mode and the alternate screen.
fn reset() -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(io::stderr(), LeaveAlternateScreen)?;
    Ok(())
}
