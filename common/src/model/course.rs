use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRecord;

/// One Udemy course entry. `students` keeps the comma-grouped display string
/// from the feed ("12,345"); sorting parses a copy and leaves it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub students: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl CatalogRecord for Course {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn students(&self) -> Option<&str> {
        self.students.as_deref()
    }
}
