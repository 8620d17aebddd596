pub mod course;
pub mod kind;
pub mod project;
pub mod video;

pub use course::Course;
pub use kind::ContentKind;
pub use project::Project;
pub use video::Video;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_when_absent() {
        let video: Video =
            serde_json::from_str(r#"{"id": 8, "title": "Q&A", "description": "Subscriber questions"}"#)
                .unwrap();
        assert!(video.category.is_none());
        assert!(video.tags.is_empty());
        assert!(video.url.is_none());
        assert!(video.views.is_none());

        let course: Course =
            serde_json::from_str(r#"{"id": 1, "title": "Docker", "description": ""}"#).unwrap();
        assert!(course.rating.is_none());
        assert!(course.students.is_none());
    }

    #[test]
    fn project_completion_date_uses_the_wire_name() {
        let project: Project = serde_json::from_str(
            r#"{"id": 1, "title": "Migration", "description": "", "completionDate": "March 2023"}"#,
        )
        .unwrap();
        assert_eq!(project.completion_date.as_deref(), Some("March 2023"));

        let wire = serde_json::to_string(&project).unwrap();
        assert!(wire.contains("completionDate"));
    }
}
