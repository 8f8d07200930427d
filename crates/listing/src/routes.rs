use std::fmt;

use coursedesk_client::join_url;

/// Pages of the admin site we link out to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Create a new course
    NewCourse,

    /// Edit the course with the given id
    EditCourse(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::NewCourse => "/admin/courses/new".to_string(),
            Route::EditCourse(id) => format!("/admin/courses/{}", id),
        }
    }

    /// Full URL of this route on the admin site at `admin_base`
    pub fn url(&self, admin_base: &str) -> String {
        join_url(admin_base, &self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
