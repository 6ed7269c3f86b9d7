//! Render model for the course form
//!
//! A host draws exactly what `FormView` describes. The `Display` impl is the plain-text
//! rendering the terminal host prints.

use std::fmt;

use coursehub_core::constants::YOUTUBE_PLACEHOLDER;
use coursehub_core::UploadOption;

use crate::form::CourseForm;

pub const FILE_INPUT_LABEL: &str = "Upload File (MP4, PDF, etc.)";
pub const UPLOADING_TEXT: &str = "Uploading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: String,
    /// Form-level error (failed load or save)
    pub banner: Option<String>,
    pub title: String,
    pub description: String,
    pub upload_option: UploadOption,
    pub media: MediaInput,
    pub submit_label: String,
}

/// The single media input visible for the current upload option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaInput {
    YoutubeUrl {
        value: String,
        placeholder: &'static str,
        required: bool,
    },
    FileUpload {
        uploading: bool,
        uploaded_url: Option<String>,
        error: Option<String>,
    },
}

impl FormView {
    pub fn from_form(form: &CourseForm) -> Self {
        let draft = form.draft();
        let status = form.upload_status();
        let media = match form.upload_option() {
            UploadOption::Youtube => MediaInput::YoutubeUrl {
                value: draft.media_url.clone(),
                placeholder: YOUTUBE_PLACEHOLDER,
                required: true,
            },
            UploadOption::File => MediaInput::FileUpload {
                uploading: status.uploading,
                uploaded_url: (!draft.media_url.is_empty() && !status.uploading)
                    .then(|| draft.media_url.clone()),
                error: status.error.clone(),
            },
        };

        Self {
            heading: format!("{} Course", form.mode().verb()),
            banner: form.banner().map(str::to_string),
            title: draft.title.clone(),
            description: draft.description.clone(),
            upload_option: form.upload_option(),
            media,
            submit_label: format!("{} Course", form.mode().submit_verb()),
        }
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        if let Some(banner) = &self.banner {
            writeln!(f, "! {}", banner)?;
        }
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Media Source:")?;
        for option in [UploadOption::Youtube, UploadOption::File] {
            let mark = if option == self.upload_option { '*' } else { ' ' };
            writeln!(f, "  ({}) {}", mark, option.label())?;
        }
        match &self.media {
            MediaInput::YoutubeUrl {
                value, placeholder, ..
            } => {
                let shown = if value.is_empty() { *placeholder } else { value.as_str() };
                writeln!(f, "{}: {}", UploadOption::Youtube.label(), shown)?;
            }
            MediaInput::FileUpload {
                uploading,
                uploaded_url,
                error,
            } => {
                writeln!(f, "{}", FILE_INPUT_LABEL)?;
                if *uploading {
                    writeln!(f, "  {}", UPLOADING_TEXT)?;
                }
                if let Some(url) = uploaded_url {
                    writeln!(f, "  Uploaded: {}", url)?;
                }
                if let Some(error) = error {
                    writeln!(f, "  {}", error)?;
                }
            }
        }
        write!(f, "[{}]", self.submit_label)
    }
}
