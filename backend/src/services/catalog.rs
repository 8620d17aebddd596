//! # Catalog Fixture Service
//!
//! Serves the three content collections consumed by the frontend catalog
//! pages. There is no database behind these endpoints: the JSON fixtures are
//! compiled into the binary and returned verbatim, so each collection is an
//! independently fetchable static resource.
//!
//! ## Registered routes
//!
//! *   **`GET /api/catalog/videos`**: the YouTube tutorial collection.
//! *   **`GET /api/catalog/courses`**: the Udemy course collection.
//! *   **`GET /api/catalog/projects`**: the freelance project collection.
//!
//! Each body is a JSON array of records matching the `common::model` shapes;
//! optional fields may be absent on any record and consumers must tolerate
//! that. Collections are stored oldest-first, which is what the frontend's
//! "Most Recent" sort (a reversal) relies on.

use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Responder, Scope};

/// The base path for the catalog endpoints.
const API_PATH: &str = "/api/catalog";

const VIDEOS_JSON: &str = include_str!("../../data/videos.json");
const COURSES_JSON: &str = include_str!("../../data/courses.json");
const PROJECTS_JSON: &str = include_str!("../../data/projects.json");

/// Configures and returns the Actix `Scope` for the catalog routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/videos", get().to(videos))
        .route("/courses", get().to(courses))
        .route("/projects", get().to(projects))
}

async fn videos() -> impl Responder {
    fixture(VIDEOS_JSON)
}

async fn courses() -> impl Responder {
    fixture(COURSES_JSON)
}

async fn projects() -> impl Responder {
    fixture(PROJECTS_JSON)
}

fn fixture(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json; charset=utf-8")
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::App;
    use common::model::{Course, Project, Video};

    #[test]
    fn video_fixture_matches_the_model() {
        let videos: Vec<Video> = serde_json::from_str(VIDEOS_JSON).unwrap();
        assert!(!videos.is_empty());
        let mut ids: Vec<u32> = videos.iter().map(|v| v.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), videos.len(), "duplicate video id in fixture");
    }

    #[test]
    fn course_fixture_matches_the_model() {
        let courses: Vec<Course> = serde_json::from_str(COURSES_JSON).unwrap();
        assert!(courses.iter().any(|c| c.rating.is_some()));
    }

    #[test]
    fn project_fixture_matches_the_model() {
        let projects: Vec<Project> = serde_json::from_str(PROJECTS_JSON).unwrap();
        assert!(projects.iter().any(|p| !p.technologies.is_empty()));
    }

    #[actix_web::test]
    async fn endpoints_serve_json_arrays() {
        let app = actix_test::init_service(App::new().service(configure_routes())).await;

        for path in ["/api/catalog/videos", "/api/catalog/courses", "/api/catalog/projects"] {
            let req = actix_test::TestRequest::get().uri(path).to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert!(resp.status().is_success(), "{path}");

            let body: serde_json::Value = actix_test::read_body_json(resp).await;
            assert!(body.is_array(), "{path} did not return an array");
        }
    }
}
