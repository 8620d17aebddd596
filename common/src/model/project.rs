use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRecord;

/// One freelance project case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
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
    pub client: Option<String>,
    #[serde(default, rename = "completionDate")]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl CatalogRecord for Project {
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
}
