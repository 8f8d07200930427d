use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{store::Question, styles::key_hints};

/// A modal yes/no prompt, shown while the store worker waits for an answer
#[derive(Debug)]
pub struct ConfirmDialog {
    question: Question,
}

impl ConfirmDialog {
    pub fn new(question: Question) -> Self {
        Self { question }
    }

    /// Returns the dialog back if the key didn't answer it
    pub fn handle_key(self, key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.question.answer(true);
                None
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.question.answer(false);
                None
            }
            _ => Some(self),
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let target = centered(area, dialog_width(&self.question.message), 6);

        frame.render_widget(Clear, target);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(self.question.message.clone()),
                Line::default(),
                key_hints(&[("y", "yes"), ("n", "no")]),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Confirm")
                    .borders(Borders::ALL)
                    .title_alignment(Alignment::Center),
            ),
            target,
        );
    }
}

/// Wide enough for the message on one line, plus the border and a space either side
fn dialog_width(message: &str) -> u16 {
    let width = Line::from(message).width().saturating_add(4);
    u16::try_from(width).unwrap_or(u16::MAX).max(30)
}

/// A `width` x `height` rect in the middle of `area`, shrunk to fit if needed
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
