use serde::{Deserialize, Deserializer, Serialize};

use crate::{Client, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Minutes
    #[serde(rename = "overallDuration", default)]
    pub overall_duration: u32,
    /// Free text, usually `published` or `draft`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// The operations the course list needs from the backend.
pub trait CourseApi {
    /// Fetch every course, in server order
    fn list_courses(&self) -> Result<Vec<Course>>;

    /// Delete the course with the given id
    fn delete_course(&self, id: &str) -> Result<()>;
}

impl CourseApi for Client {
    fn list_courses(&self) -> Result<Vec<Course>> {
        self.get("api/admin/courses")
    }

    fn delete_course(&self, id: &str) -> Result<()> {
        self.delete(&format!("api/admin/courses/{}", id))
    }
}
