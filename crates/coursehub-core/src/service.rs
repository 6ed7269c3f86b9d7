//! Service seam between the course form and the backend
//!
//! The form only talks to the backend through this trait. The HTTP client in
//! `coursehub-api-client` implements it; tests substitute in-memory doubles.

use async_trait::async_trait;

use crate::models::{CourseDraft, CourseRecord, MediaFile, MediaUploadResponse};

#[async_trait]
pub trait CourseService: Send + Sync {
    /// Fetch an existing course (`GET /courses/{id}`)
    async fn get_course(&self, course_id: &str) -> anyhow::Result<CourseRecord>;

    /// Create a course from the draft. `Ok` means the backend accepted it.
    async fn create_course(&self, draft: &CourseDraft) -> anyhow::Result<()>;

    /// Update an existing course from the draft. `Ok` means the backend accepted it.
    async fn update_course(&self, course_id: &str, draft: &CourseDraft) -> anyhow::Result<()>;

    /// Store a media file and return its public URL (`POST /courses/upload`)
    async fn upload_media(&self, file: &MediaFile) -> anyhow::Result<MediaUploadResponse>;
}
