use ratatui::{
    prelude::{Line, Span, Text},
    style::{Color, Style, Stylize},
};

pub fn error_text(t: impl Into<Text<'static>>) -> Text<'static> {
    let mut t = t.into();
    t.patch_style(Style::default().fg(Color::Red));
    t
}

/// A line of `key description` pairs, with the keys highlighted
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![];
    for (key, desc) in hints {
        if !spans.is_empty() {
            spans.push("  ".into());
        }
        spans.push((*key).blue());
        spans.push(Span::raw(" "));
        spans.push(Span::raw(*desc));
    }

    spans.into()
}
