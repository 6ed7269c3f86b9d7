//! Course endpoints of the backend API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use coursehub_core::constants::{course_path, COURSES_PATH, COURSE_UPLOAD_PATH, UPLOAD_FIELD_NAME};
use coursehub_core::{CourseDraft, CourseRecord, CourseService, MediaFile, MediaUploadResponse};
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::ApiClient;

impl ApiClient {
    /// Get a single course by ID.
    pub async fn get_course(&self, course_id: &str) -> Result<CourseRecord> {
        debug!(course_id, "fetching course");
        self.get(&course_path(course_id)).await
    }

    /// Create a course from the draft.
    pub async fn create_course(&self, draft: &CourseDraft) -> Result<()> {
        debug!(title = %draft.title, "creating course");
        self.post_json(COURSES_PATH, draft).await
    }

    /// Replace an existing course with the draft.
    pub async fn update_course(&self, course_id: &str, draft: &CourseDraft) -> Result<()> {
        debug!(course_id, title = %draft.title, "updating course");
        self.put_json(&course_path(course_id), draft).await
    }

    /// Upload a media file to blob storage and return its URL.
    pub async fn upload_media(&self, file: &MediaFile) -> Result<MediaUploadResponse> {
        debug!(
            file_name = %file.file_name,
            size = file.len() as u64,
            "uploading course media"
        );
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .with_context(|| format!("Invalid content type: {}", content_type))?;
        }
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        self.post_multipart(COURSE_UPLOAD_PATH, form).await
    }
}

#[async_trait]
impl CourseService for ApiClient {
    async fn get_course(&self, course_id: &str) -> Result<CourseRecord> {
        ApiClient::get_course(self, course_id).await
    }

    async fn create_course(&self, draft: &CourseDraft) -> Result<()> {
        ApiClient::create_course(self, draft).await
    }

    async fn update_course(&self, course_id: &str, draft: &CourseDraft) -> Result<()> {
        ApiClient::update_course(self, course_id, draft).await
    }

    async fn upload_media(&self, file: &MediaFile) -> Result<MediaUploadResponse> {
        ApiClient::upload_media(self, file).await
    }
}
