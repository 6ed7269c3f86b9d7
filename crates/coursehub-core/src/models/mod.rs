//! Domain models

pub mod course;
pub mod media_file;

pub use course::{
    CourseDraft, CourseField, CourseId, CourseRecord, MediaUploadResponse, UploadOption,
    UploadStatus,
};
pub use media_file::MediaFile;
