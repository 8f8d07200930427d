use std::sync::Arc;

use coursedesk_client::{Course, CourseApi, Error};
use log::debug;

use crate::{CourseStats, Confirm, Diagnostic, Observer, DELETE_PROMPT};

/// Whether the courses have arrived yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(Arc<[Course]>),
}

/// The result of trying to delete a course on the server
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The user said no, so nothing was sent
    Declined,

    /// The server deleted the course with this id
    Deleted(String),

    /// The server call failed
    Failed { id: String, error: Error },
}

/// Our local copy of the course list.
///
/// The courses are never mutated in place: every change swaps in a new snapshot, so anything
/// holding a snapshot from [`CourseList::snapshot`] keeps seeing what it saw.
#[derive(Debug)]
pub struct CourseList {
    state: LoadState,
    load_requested: bool,
}

impl Default for CourseList {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseList {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            load_requested: false,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// The current courses, or `None` if they haven't loaded yet
    pub fn snapshot(&self) -> Option<Arc<[Course]>> {
        match &self.state {
            LoadState::Loading => None,
            LoadState::Loaded(cs) => Some(cs.clone()),
        }
    }

    /// The current courses. Empty while loading.
    pub fn courses(&self) -> &[Course] {
        match &self.state {
            LoadState::Loading => &[],
            LoadState::Loaded(cs) => &cs[..],
        }
    }

    pub fn stats(&self) -> CourseStats {
        CourseStats::of(self.courses())
    }

    /// Returns true the first time it's called, meaning the caller should go and fetch the courses.
    /// Every later call returns false.
    pub fn begin_load(&mut self) -> bool {
        !std::mem::replace(&mut self.load_requested, true)
    }

    /// Store the result of fetching the courses.
    /// On failure the list ends up loaded but empty, and the failure goes to `observer`.
    pub fn finish_load(&mut self, result: Result<Vec<Course>, Error>, observer: &dyn Observer) {
        if !self.is_loading() {
            debug!("ignoring course list that arrived after loading finished");
            return;
        }

        let courses = match result {
            Ok(cs) => cs,
            Err(error) => {
                observer.observe(&Diagnostic::FetchFailed { error });
                vec![]
            }
        };
        debug!("loaded {} courses", courses.len());

        self.state = LoadState::Loaded(courses.into());
    }

    /// Fetch the courses from `api`, if that hasn't been done already.
    pub fn load_all(&mut self, api: &(impl CourseApi + ?Sized), observer: &dyn Observer) {
        if !self.begin_load() {
            return;
        }

        let result = api.list_courses();
        self.finish_load(result, observer);
    }

    /// Reconcile local state with the result of a delete.
    /// Returns true if a course was removed.
    pub fn apply_delete(&mut self, outcome: DeleteOutcome, observer: &dyn Observer) -> bool {
        match outcome {
            DeleteOutcome::Declined => false,
            DeleteOutcome::Failed { id, error } => {
                observer.observe(&Diagnostic::DeleteFailed { id, error });
                false
            }
            DeleteOutcome::Deleted(id) => self.without(&id),
        }
    }

    /// Ask for confirmation, delete the course on the server, then drop it from our list.
    /// Returns true if a course was removed.
    pub fn remove(
        &mut self,
        id: &str,
        confirm: &mut (impl Confirm + ?Sized),
        api: &(impl CourseApi + ?Sized),
        observer: &dyn Observer,
    ) -> bool {
        let outcome = confirm_and_delete(id, confirm, api);
        self.apply_delete(outcome, observer)
    }

    fn without(&mut self, id: &str) -> bool {
        let LoadState::Loaded(courses) = &self.state else {
            debug!("delete of {} finished before the list loaded", id);
            return false;
        };

        if !courses.iter().any(|c| c.id == id) {
            debug!("course {} was already gone", id);
            return false;
        }

        let remaining: Vec<Course> = courses.iter().filter(|c| c.id != id).cloned().collect();
        self.state = LoadState::Loaded(remaining.into());

        true
    }
}

/// Ask `confirm` whether to delete the course, and if so, delete it with `api`.
pub fn confirm_and_delete(
    id: &str,
    confirm: &mut (impl Confirm + ?Sized),
    api: &(impl CourseApi + ?Sized),
) -> DeleteOutcome {
    if !confirm.confirm(DELETE_PROMPT) {
        return DeleteOutcome::Declined;
    }

    match api.delete_course(id) {
        Ok(()) => DeleteOutcome::Deleted(id.to_string()),
        Err(error) => DeleteOutcome::Failed {
            id: id.to_string(),
            error,
        },
    }
}
