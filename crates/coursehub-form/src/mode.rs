use coursehub_core::CourseId;

/// Whether the form creates a new course or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CourseId),
}

impl FormMode {
    /// Entering with an identifier means edit mode. An empty identifier counts as none.
    pub fn from_course_id(course_id: Option<impl Into<CourseId>>) -> Self {
        match course_id.map(Into::into) {
            Some(id) if !id.is_empty() => FormMode::Edit(id),
            _ => FormMode::Create,
        }
    }

    pub fn course_id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit(_) => "Edit",
        }
    }

    pub fn submit_verb(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit(_) => "Update",
        }
    }
}
