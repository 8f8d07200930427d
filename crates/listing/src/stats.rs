use coursedesk_client::Course;

/// Lower-case and trim a status, so `" Published "` and `"PUBLISHED"` compare equal
pub fn normalise_status(status: &str) -> String {
    status.trim().to_lowercase()
}

pub fn is_published(course: &Course) -> bool {
    normalise_status(&course.status) == "published"
}

pub fn is_draft(course: &Course) -> bool {
    normalise_status(&course.status) == "draft"
}

/// Count the courses matching `pred`
pub fn count(courses: &[Course], pred: impl Fn(&Course) -> bool) -> usize {
    courses.iter().filter(|c| pred(c)).count()
}

/// The numbers shown in the stat cards above the table.
/// Courses with any other status only count towards `total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CourseStats {
    pub published: usize,
    pub draft: usize,
    pub total: usize,
}

impl CourseStats {
    pub fn of(courses: &[Course]) -> Self {
        Self {
            published: count(courses, is_published),
            draft: count(courses, is_draft),
            total: count(courses, |_| true),
        }
    }
}
