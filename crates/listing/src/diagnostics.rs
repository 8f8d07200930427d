use std::fmt;

use coursedesk_client::Error;
use log::error;

/// A failure we recovered from, but that someone should know about
#[derive(Debug)]
pub enum Diagnostic {
    /// Fetching the course list failed, so we're showing an empty list
    FetchFailed { error: Error },

    /// Deleting a course failed, so it's still in the list
    DeleteFailed { id: String, error: Error },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FetchFailed { error } => write!(f, "Failed to fetch courses: {}", error),
            Diagnostic::DeleteFailed { id, error } => {
                write!(f, "Failed to delete course {}: {}", id, error)
            }
        }
    }
}

/// Receives [`Diagnostic`]s as they happen
pub trait Observer {
    fn observe(&self, diagnostic: &Diagnostic);
}

impl<F> Observer for F
where
    F: Fn(&Diagnostic),
{
    fn observe(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Writes diagnostics to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&self, diagnostic: &Diagnostic) {
        error!("{}", diagnostic);
    }
}
