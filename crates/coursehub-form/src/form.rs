use coursehub_core::constants::{
    INSTRUCTOR_COURSES_ROUTE, LOAD_FAILED_MESSAGE, SAVE_FAILED_MESSAGE, UPLOAD_FAILED_MESSAGE,
};
use coursehub_core::{
    CourseDraft, CourseField, CourseId, CourseRecord, CourseService, FormError, MediaFile,
    MediaUploadResponse, UploadOption, UploadStatus,
};
use tracing::{error, info, warn};

use crate::mode::FormMode;
use crate::navigation::Navigator;
use crate::view::FormView;

/// What a validated submit sends to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(CourseDraft),
    Update {
        course_id: CourseId,
        draft: CourseDraft,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Backend accepted the draft and the host was sent to the course list
    Saved,
    /// Required fields missing; nothing was sent
    Rejected(String),
    /// Backend call failed; the banner says so
    Failed,
}

/// State of one create/edit form. Dropped when the host leaves the view.
#[derive(Debug, Clone)]
pub struct CourseForm {
    mode: FormMode,
    draft: CourseDraft,
    upload_option: UploadOption,
    upload: UploadStatus,
    banner: Option<String>,
    load_started: bool,
}

impl CourseForm {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            draft: CourseDraft::default(),
            upload_option: UploadOption::default(),
            upload: UploadStatus::default(),
            banner: None,
            load_started: false,
        }
    }

    pub fn create() -> Self {
        Self::new(FormMode::Create)
    }

    /// Edit form for `course_id`. An empty id has nothing to edit and opens a create form.
    pub fn edit(course_id: impl Into<CourseId>) -> Self {
        Self::new(FormMode::from_course_id(Some(course_id)))
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &CourseDraft {
        &self.draft
    }

    pub fn upload_option(&self) -> UploadOption {
        self.upload_option
    }

    pub fn upload_status(&self) -> &UploadStatus {
        &self.upload
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn view(&self) -> FormView {
        FormView::from_form(self)
    }

    /// Id to fetch, handed out once per form and only in edit mode.
    pub fn begin_load(&mut self) -> Option<CourseId> {
        if self.load_started {
            return None;
        }
        let course_id = self.mode.course_id()?.to_string();
        self.load_started = true;
        Some(course_id)
    }

    pub fn finish_load(&mut self, result: anyhow::Result<CourseRecord>) {
        match result {
            Ok(record) => {
                self.upload_option = record.upload_option();
                self.draft = record.into();
                info!(
                    course_id = self.mode.course_id().unwrap_or_default(),
                    upload_option = ?self.upload_option,
                    "Loaded course"
                );
            }
            Err(err) => {
                error!(
                    course_id = self.mode.course_id().unwrap_or_default(),
                    "Error loading course: {:#}", err
                );
                self.banner = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Fetch the course being edited and seed the draft. No-op in create mode and on
    /// every call after the first.
    pub async fn load<S: CourseService + ?Sized>(&mut self, service: &S) {
        if let Some(course_id) = self.begin_load() {
            let result = service.get_course(&course_id).await;
            self.finish_load(result);
        }
    }

    pub fn set_field(&mut self, field: CourseField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Update a field addressed by its input name (`title`, `description`, `mediaUrl`).
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field: CourseField = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Switch the visible media input. `mediaUrl` is left as is.
    pub fn select_upload_option(&mut self, option: UploadOption) {
        self.upload_option = option;
    }

    /// Mark an upload as in flight. Returns the file to send, or `None` (and changes
    /// nothing) when no file was chosen.
    pub fn begin_upload(&mut self, file: Option<MediaFile>) -> Option<MediaFile> {
        let file = file?;
        self.upload.uploading = true;
        self.upload.error = None;
        Some(file)
    }

    pub fn finish_upload(&mut self, result: anyhow::Result<MediaUploadResponse>) {
        match result {
            Ok(response) => {
                info!(media_url = %response.media_url, "Uploaded course media");
                self.draft.media_url = response.media_url;
            }
            Err(err) => {
                error!("Course media upload failed: {:#}", err);
                self.upload.error = Some(UPLOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.upload.uploading = false;
    }

    pub async fn upload_file<S: CourseService + ?Sized>(
        &mut self,
        service: &S,
        file: Option<MediaFile>,
    ) {
        let Some(file) = self.begin_upload(file) else {
            return;
        };
        let result = service.upload_media(&file).await;
        self.finish_upload(result);
    }

    /// Validate the draft and decide between create and update. Clears the banner.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, FormError> {
        self.banner = None;
        self.draft.validate_for(self.upload_option)?;
        let request = match &self.mode {
            FormMode::Create => SubmitRequest::Create(self.draft.clone()),
            FormMode::Edit(course_id) => SubmitRequest::Update {
                course_id: course_id.clone(),
                draft: self.draft.clone(),
            },
        };
        Ok(request)
    }

    pub fn finish_submit<N: Navigator + ?Sized>(
        &mut self,
        result: anyhow::Result<()>,
        navigator: &mut N,
    ) -> SubmitOutcome {
        match result {
            Ok(()) => {
                info!(mode = self.mode.verb(), title = %self.draft.title, "Saved course");
                navigator.navigate(INSTRUCTOR_COURSES_ROUTE);
                SubmitOutcome::Saved
            }
            Err(err) => {
                error!(mode = self.mode.verb(), "Saving course failed: {:#}", err);
                self.banner = Some(SAVE_FAILED_MESSAGE.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit<S, N>(&mut self, service: &S, navigator: &mut N) -> SubmitOutcome
    where
        S: CourseService + ?Sized,
        N: Navigator + ?Sized,
    {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(err) => {
                warn!("Course form rejected: {}", err);
                return SubmitOutcome::Rejected(err.to_string());
            }
        };
        let result = match &request {
            SubmitRequest::Create(draft) => service.create_course(draft).await,
            SubmitRequest::Update { course_id, draft } => {
                service.update_course(course_id, draft).await
            }
        };
        self.finish_submit(result, navigator)
    }
}
