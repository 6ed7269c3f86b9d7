use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::YOUTUBE_MARKER;
use crate::error::FormError;

/// Course identifiers are opaque path segments assigned by the backend.
pub type CourseId = String;

/// In-progress course record held by the form. Serialized as the create/update body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub media_url: String,
}

impl CourseDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        media_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            media_url: media_url.into(),
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: CourseField, value: impl Into<String>) {
        let slot = match field {
            CourseField::Title => &mut self.title,
            CourseField::Description => &mut self.description,
            CourseField::MediaUrl => &mut self.media_url,
        };
        *slot = value.into();
    }

    /// Required-field check. The URL input only exists in YouTube mode, so the URL is
    /// only required there.
    pub fn validate_for(&self, option: UploadOption) -> Result<(), FormError> {
        self.validate()?;
        if option == UploadOption::Youtube && self.media_url.is_empty() {
            return Err(FormError::Validation(
                "YouTube playlist URL is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Editable draft fields, addressable by their wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseField {
    Title,
    Description,
    MediaUrl,
}

impl CourseField {
    pub const ALL: [CourseField; 3] = [
        CourseField::Title,
        CourseField::Description,
        CourseField::MediaUrl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CourseField::Title => "title",
            CourseField::Description => "description",
            CourseField::MediaUrl => "mediaUrl",
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CourseField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Course as returned by `GET /courses/{id}`. Extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media_url: Option<String>,
}

impl CourseRecord {
    pub fn upload_option(&self) -> UploadOption {
        UploadOption::infer(self.media_url.as_deref())
    }
}

impl From<CourseRecord> for CourseDraft {
    fn from(record: CourseRecord) -> Self {
        Self {
            title: record.title,
            description: record.description,
            media_url: record.media_url.unwrap_or_default(),
        }
    }
}

/// Body of a successful `POST /courses/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadResponse {
    pub media_url: String,
}

/// Which input supplies `mediaUrl`. UI-only, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadOption {
    #[default]
    Youtube,
    File,
}

impl UploadOption {
    /// Case-sensitive substring heuristic: stored URLs mentioning "youtube" were typed in,
    /// anything else (including no URL) came from a file upload.
    pub fn infer(media_url: Option<&str>) -> Self {
        match media_url {
            Some(url) if url.contains(YOUTUBE_MARKER) => UploadOption::Youtube,
            _ => UploadOption::File,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadOption::Youtube => "YouTube Playlist URL",
            UploadOption::File => "Upload File to Blob",
        }
    }
}

/// Transient upload flags, reset on every attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadStatus {
    pub uploading: bool,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(draft: &CourseDraft, field: CourseField) -> &str {
        match field {
            CourseField::Title => &draft.title,
            CourseField::Description => &draft.description,
            CourseField::MediaUrl => &draft.media_url,
        }
    }

    #[test]
    fn set_replaces_only_named_field() {
        let original = CourseDraft::new("T", "D", "U");
        for field in CourseField::ALL {
            let mut draft = original.clone();
            draft.set(field, "changed");
            assert_eq!(value_of(&draft, field), "changed");
            for other in CourseField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(value_of(&draft, other), value_of(&original, other));
            }
        }
    }

    #[test]
    fn field_names_round_trip() {
        for field in CourseField::ALL {
            assert_eq!(field.name().parse::<CourseField>().unwrap(), field);
        }
        assert!(matches!(
            "media_url".parse::<CourseField>(),
            Err(FormError::UnknownField(name)) if name == "media_url"
        ));
    }

    #[test]
    fn infer_is_case_sensitive_substring() {
        assert_eq!(
            UploadOption::infer(Some("https://www.youtube.com/playlist?list=PL1")),
            UploadOption::Youtube
        );
        assert_eq!(
            UploadOption::infer(Some("https://cdn.example.com/youtube-intro.mp4")),
            UploadOption::Youtube
        );
        assert_eq!(
            UploadOption::infer(Some("https://www.YouTube.com/playlist?list=PL1")),
            UploadOption::File
        );
        assert_eq!(
            UploadOption::infer(Some("https://youtu.be/abc")),
            UploadOption::File
        );
        assert_eq!(UploadOption::infer(Some("")), UploadOption::File);
        assert_eq!(UploadOption::infer(None), UploadOption::File);
    }

    #[test]
    fn draft_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(CourseDraft::new("T", "D", "U")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "T", "description": "D", "mediaUrl": "U" })
        );
    }

    #[test]
    fn record_tolerates_null_and_extra_fields() {
        let record: CourseRecord = serde_json::from_str(
            r#"{"id": 7, "title": "Rust", "description": "Ownership", "mediaUrl": null, "instructorId": 3}"#,
        )
        .unwrap();
        assert_eq!(record.media_url, None);
        assert_eq!(record.upload_option(), UploadOption::File);

        let draft = CourseDraft::from(record);
        assert_eq!(draft, CourseDraft::new("Rust", "Ownership", ""));
    }

    #[test]
    fn validate_requires_title_and_description() {
        let err = CourseDraft::new("", "", "u")
            .validate_for(UploadOption::File)
            .unwrap_err();
        match err {
            FormError::Validation(message) => {
                assert!(message.contains("Title is required"));
                assert!(message.contains("Description is required"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn media_url_required_only_for_youtube() {
        let draft = CourseDraft::new("T", "D", "");
        assert!(draft.validate_for(UploadOption::File).is_ok());
        assert!(matches!(
            draft.validate_for(UploadOption::Youtube),
            Err(FormError::Validation(_))
        ));
    }
}
