#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use course_listing::{Course, CourseApi, Diagnostic};
use coursedesk_client::{Error, Result};

pub fn course(id: &str, title: &str, status: &str, duration: u32) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        overall_duration: duration,
        status: status.to_string(),
    }
}

pub fn server_error() -> Error {
    Error::Status {
        status: 500,
        body: "internal server error".to_string(),
    }
}

/// A backend that serves a fixed list and records what it was asked to do
#[derive(Default)]
pub struct FakeApi {
    pub courses: Vec<Course>,
    pub fail_list: bool,
    pub fail_delete: bool,
    pub list_calls: Cell<usize>,
    pub deleted: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn serving(courses: Vec<Course>) -> Self {
        Self {
            courses,
            ..Default::default()
        }
    }
}

impl CourseApi for FakeApi {
    fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail_list {
            return Err(server_error());
        }
        Ok(self.courses.clone())
    }

    fn delete_course(&self, id: &str) -> Result<()> {
        self.deleted.borrow_mut().push(id.to_string());
        if self.fail_delete {
            return Err(server_error());
        }
        Ok(())
    }
}

/// Keeps the text of every diagnostic it sees
#[derive(Default)]
pub struct Recorder {
    pub seen: RefCell<Vec<String>>,
}

impl course_listing::Observer for Recorder {
    fn observe(&self, diagnostic: &Diagnostic) {
        self.seen.borrow_mut().push(diagnostic.to_string());
    }
}
