/// Asked before a course is deleted
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this course?";

/// Something that can ask the user a yes/no question, blocking until they answer.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
