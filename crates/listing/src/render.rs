//! Turns a [`CourseList`] into ratatui widgets.
//!
//! Each course first becomes a [`CourseRow`] of display strings, which is what the table is built from.

use coursedesk_client::Course;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::{CourseList, CourseStats};

/// How many trailing characters of a course id we show as its reference
pub const REFERENCE_LEN: usize = 6;

/// The last [`REFERENCE_LEN`] characters of `id`, or all of it if it's shorter.
pub fn reference(id: &str) -> &str {
    match id.char_indices().rev().nth(REFERENCE_LEN - 1) {
        Some((i, _)) => &id[i..],
        None => id,
    }
}

/// Display fields for one course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    pub id: String,
    pub title: String,
    pub reference: String,
    pub duration: String,

    /// Shown as-is
    pub status: String,

    /// Lower-cased but not trimmed, and matched like a CSS class list by [`badge_style`]
    pub badge_class: String,
}

impl From<&Course> for CourseRow {
    fn from(c: &Course) -> Self {
        Self {
            id: c.id.clone(),
            title: c.title.clone(),
            reference: reference(&c.id).to_string(),
            duration: format!("{} min", c.overall_duration),
            status: c.status.clone(),
            badge_class: c.status.to_lowercase(),
        }
    }
}

/// What goes in the main area of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    Empty,
    Rows(Vec<CourseRow>),
}

impl Body {
    pub fn of(list: &CourseList) -> Self {
        if list.is_loading() {
            return Body::Loading;
        }

        match list.courses() {
            [] => Body::Empty,
            cs => Body::Rows(cs.iter().map(CourseRow::from).collect()),
        }
    }
}

pub fn badge_style(class: &str) -> Style {
    class
        .split_whitespace()
        .find_map(|c| match c {
            "published" => Some(Style::new().fg(Color::Green).add_modifier(Modifier::BOLD)),
            "draft" => Some(Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            _ => None,
        })
        .unwrap_or_default()
}

pub fn status_badge(row: &CourseRow) -> Span<'static> {
    Span::styled(row.status.clone(), badge_style(&row.badge_class))
}

pub fn header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from("Courses Management".blue().bold()),
        Line::from("Manage and organize your course content".dim()),
    ])
}

pub fn stat_card(label: &'static str, value: usize, style: Style) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            value.to_string(),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(label),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL))
}

/// Published, draft and total, in that order
pub fn stat_cards(stats: CourseStats) -> [Paragraph<'static>; 3] {
    [
        stat_card("Published", stats.published, badge_style("published")),
        stat_card("Draft", stats.draft, badge_style("draft")),
        stat_card("Total Courses", stats.total, Style::new().fg(Color::Blue)),
    ]
}

pub fn toolbar() -> Line<'static> {
    Line::from(vec![
        "All Courses".bold(),
        "    ".into(),
        "n".blue(),
        " New Course".into(),
    ])
}

pub fn loading() -> Paragraph<'static> {
    Paragraph::new("Loading courses...").alignment(Alignment::Center)
}

pub fn empty_state_text() -> Text<'static> {
    Text::from(vec![
        Line::from("No courses found".bold()),
        Line::from("Get started by creating your first course"),
        Line::default(),
        Line::from(vec!["n".blue(), " Create Course".into()]),
    ])
}

pub fn empty_state() -> Paragraph<'static> {
    Paragraph::new(empty_state_text())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL))
}

fn actions() -> Line<'static> {
    Line::from(vec!["e".blue(), " edit  ".into(), "d".red(), " delete".into()])
}

pub fn row(r: &CourseRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(Text::from(vec![
            Line::from(Span::styled(
                r.title.clone(),
                Style::new().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Course ID: {}", r.reference),
                Style::new().add_modifier(Modifier::DIM),
            )),
        ])),
        Cell::from(r.duration.clone()),
        Cell::from(Line::from(status_badge(r))),
        Cell::from(actions()),
    ])
    .height(2)
}

pub fn table(rows: &[CourseRow]) -> Table<'static> {
    Table::new(
        rows.iter().map(row),
        [
            Constraint::Percentage(45),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
        ],
    )
    .header(
        Row::new(vec!["Course Title", "Duration", "Status", "Actions"])
            .style(Style::new().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(Block::default().borders(Borders::ALL))
    .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
    .highlight_symbol(">> ")
}
