//! Routes, endpoint paths and user-facing messages

/// Host route the form navigates to after a successful save.
pub const INSTRUCTOR_COURSES_ROUTE: &str = "/instructor/courses";

pub const COURSES_PATH: &str = "/courses";
pub const COURSE_UPLOAD_PATH: &str = "/courses/upload";

/// Multipart field name the upload endpoint reads the file from.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Substring that marks a stored media URL as a YouTube link.
pub const YOUTUBE_MARKER: &str = "youtube";

pub const YOUTUBE_PLACEHOLDER: &str = "https://www.youtube.com/playlist?list=...";

pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load course.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save course.";

/// Path of a single course resource.
pub fn course_path(course_id: &str) -> String {
    format!("{}/{}", COURSES_PATH, urlencoding::encode(course_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_path_plain_id() {
        assert_eq!(course_path("42"), "/courses/42");
    }

    #[test]
    fn course_path_escapes_separators() {
        assert_eq!(course_path("a/b c"), "/courses/a%2Fb%20c");
    }
}
