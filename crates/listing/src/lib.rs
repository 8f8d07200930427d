//! Manages a list of courses fetched from the admin API.
//!
//! [`CourseList`] holds the fetched courses and whether we're still loading them.
//! The fallible parts (the API, asking the user, and reporting errors) are passed in
//! as [`CourseApi`], [`Confirm`] and [`Observer`], so the terminal front end and the
//! tests can each supply their own.
//!
//! [`render`] turns the list into ratatui widgets.

mod confirm;
mod diagnostics;
pub mod render;
mod routes;
mod state;
mod stats;

pub use confirm::{Confirm, DELETE_PROMPT};
pub use coursedesk_client::{Course, CourseApi};
pub use diagnostics::{Diagnostic, LogObserver, Observer};
pub use routes::Route;
pub use state::{confirm_and_delete, CourseList, DeleteOutcome, LoadState};
pub use stats::{count, is_draft, is_published, normalise_status, CourseStats};
