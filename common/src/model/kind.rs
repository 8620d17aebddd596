use serde::{Deserialize, Serialize};

/// Discriminant for the three catalog variants. Cards and pages use it to
/// pick variant-specific copy; the filter engine never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Video,
    Course,
    Project,
}

impl ContentKind {
    /// Singular noun for result counts ("Showing 3 videos").
    pub fn noun(&self) -> &'static str {
        match self {
            ContentKind::Video => "video",
            ContentKind::Course => "course",
            ContentKind::Project => "project",
        }
    }

    /// Label for the card's external-link row.
    pub fn link_label(&self) -> &'static str {
        match self {
            ContentKind::Video => "View Video",
            ContentKind::Course => "View Course",
            ContentKind::Project => "View Project",
        }
    }
}
