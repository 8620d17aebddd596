//! Loaders for the three catalog collections. Each collection is an
//! independently fetchable JSON array; errors are returned to the caller so
//! the owning view can decide how to surface them (the catalog pages show
//! an error panel with a retry action).

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::fmt;

use common::model::{Course, Project, Video};

pub const VIDEOS_ENDPOINT: &str = "/api/catalog/videos";
pub const COURSES_ENDPOINT: &str = "/api/catalog/courses";
pub const PROJECTS_ENDPOINT: &str = "/api/catalog/projects";

/// Why a collection could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never completed (network down, server unreachable).
    Request(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body was not a valid JSON array of records.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "request failed: {}", msg),
            FetchError::Status(status) => write!(f, "server answered with status {}", status),
            FetchError::Decode(msg) => write!(f, "response was not a valid collection: {}", msg),
        }
    }
}

/// Fetches one collection endpoint and decodes it into records.
pub async fn fetch_collection<T: DeserializeOwned>(endpoint: &str) -> Result<Vec<T>, FetchError> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|err| FetchError::Request(err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))
}

pub async fn fetch_videos() -> Result<Vec<Video>, FetchError> {
    fetch_collection(VIDEOS_ENDPOINT).await
}

pub async fn fetch_courses() -> Result<Vec<Course>, FetchError> {
    fetch_collection(COURSES_ENDPOINT).await
}

pub async fn fetch_projects() -> Result<Vec<Project>, FetchError> {
    fetch_collection(PROJECTS_ENDPOINT).await
}
