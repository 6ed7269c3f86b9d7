//! Coursehub Core Library
//!
//! This crate provides the course domain models, error types, configuration and the
//! service seam shared by the HTTP client, the course form and the CLI.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::FormError;
pub use models::{
    CourseDraft, CourseField, CourseId, CourseRecord, MediaFile, MediaUploadResponse,
    UploadOption, UploadStatus,
};
pub use service::CourseService;
