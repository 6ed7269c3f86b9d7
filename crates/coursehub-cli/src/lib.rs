//! Terminal host for the course form: applies command-line edits, runs the form's
//! load/upload/submit steps and reports the result.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use coursehub_core::{CourseField, CourseService, MediaFile, UploadOption};
use coursehub_form::{CourseForm, Navigator, RecordingNavigator, SubmitOutcome};
use serde::Serialize;
use tracing::info;

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Field edits given on the command line. `None` leaves the field as loaded.
#[derive(Debug, Default, Clone)]
pub struct FormEdits {
    pub title: Option<String>,
    pub description: Option<String>,
    pub youtube: Option<String>,
    pub file: Option<PathBuf>,
}

/// Printed once the form has been submitted.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SaveReport {
    pub saved: bool,
    pub navigated_to: Option<String>,
}

/// Navigator that remembers routes and tells the user where the UI would go.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    inner: RecordingNavigator,
}

impl TerminalNavigator {
    pub fn last(&self) -> Option<&str> {
        self.inner.last()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, route: &str) {
        info!(route, "navigating");
        self.inner.navigate(route);
    }
}

/// Load (edit mode), apply edits, upload the file if one was given, then submit.
pub async fn run_form<S>(
    form: &mut CourseForm,
    edits: FormEdits,
    service: &S,
    navigator: &mut TerminalNavigator,
) -> Result<SaveReport>
where
    S: CourseService + ?Sized,
{
    form.load(service).await;
    if let Some(banner) = form.banner() {
        bail!("{banner}");
    }

    if let Some(title) = edits.title {
        form.set_field(CourseField::Title, title);
    }
    if let Some(description) = edits.description {
        form.set_field(CourseField::Description, description);
    }
    if let Some(url) = edits.youtube {
        form.select_upload_option(UploadOption::Youtube);
        form.set_field(CourseField::MediaUrl, url);
    }
    if let Some(path) = edits.file {
        form.select_upload_option(UploadOption::File);
        let file = MediaFile::from_path(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        form.upload_file(service, Some(file)).await;
        if let Some(error) = &form.upload_status().error {
            bail!("{error}");
        }
    }

    match form.submit(service, navigator).await {
        SubmitOutcome::Saved => Ok(SaveReport {
            saved: true,
            navigated_to: navigator.last().map(str::to_string),
        }),
        SubmitOutcome::Rejected(reason) => bail!("{reason}"),
        SubmitOutcome::Failed => bail!("{}", form.banner().unwrap_or("Failed to save course.")),
    }
}

/// Load a course into an edit form and render it as text.
pub async fn render_course<S>(course_id: &str, service: &S) -> Result<String>
where
    S: CourseService + ?Sized,
{
    let mut form = CourseForm::edit(course_id);
    if form.mode().course_id().is_none() {
        bail!("Course ID must not be empty");
    }
    form.load(service).await;
    if let Some(banner) = form.banner() {
        bail!("{banner}");
    }
    Ok(form.view().to_string())
}

pub fn print_json(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursehub_api_client::{ApiClient, Auth};
    use coursehub_core::constants::INSTRUCTOR_COURSES_ROUTE;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::new(server.url(), Auth::None, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn create_with_youtube_url() {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/courses")
            .match_body(Matcher::PartialJsonString(
                r#"{"mediaUrl":"https://www.youtube.com/playlist?list=A"}"#.to_string(),
            ))
            .with_status(201)
            .create_async()
            .await;

        let client = client_for(&server);
        let mut form = CourseForm::create();
        let mut navigator = TerminalNavigator::default();
        let report = run_form(
            &mut form,
            FormEdits {
                title: Some("T".to_string()),
                description: Some("D".to_string()),
                youtube: Some("https://www.youtube.com/playlist?list=A".to_string()),
                file: None,
            },
            &client,
            &mut navigator,
        )
        .await
        .unwrap();

        assert_eq!(
            report,
            SaveReport {
                saved: true,
                navigated_to: Some(INSTRUCTOR_COURSES_ROUTE.to_string()),
            }
        );
        create.assert_async().await;
    }

    #[tokio::test]
    async fn create_with_file_uploads_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week1.mp4");
        std::fs::write(&path, b"video").unwrap();

        let mut server = Server::new_async().await;
        let upload = server
            .mock("POST", "/courses/upload")
            .with_status(200)
            .with_body(r#"{"mediaUrl":"https://blob.example.com/week1.mp4"}"#)
            .create_async()
            .await;
        let create = server
            .mock("POST", "/courses")
            .match_body(Matcher::PartialJsonString(
                r#"{"mediaUrl":"https://blob.example.com/week1.mp4"}"#.to_string(),
            ))
            .with_status(201)
            .create_async()
            .await;

        let client = client_for(&server);
        let mut form = CourseForm::create();
        let mut navigator = TerminalNavigator::default();
        run_form(
            &mut form,
            FormEdits {
                title: Some("T".to_string()),
                description: Some("D".to_string()),
                youtube: None,
                file: Some(path),
            },
            &client,
            &mut navigator,
        )
        .await
        .unwrap();

        upload.assert_async().await;
        create.assert_async().await;
        assert_eq!(form.upload_option(), UploadOption::File);
    }

    #[tokio::test]
    async fn edit_stops_when_load_fails() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/courses/8")
            .with_status(404)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/courses/8")
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        let mut form = CourseForm::edit("8");
        let mut navigator = TerminalNavigator::default();
        let err = run_form(&mut form, FormEdits::default(), &client, &mut navigator)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to load course.");
        assert_eq!(navigator.last(), None);
        update.assert_async().await;
    }

    #[tokio::test]
    async fn edit_loads_then_updates() {
        let mut server = Server::new_async().await;
        let get = server
            .mock("GET", "/courses/12")
            .with_status(200)
            .with_body(
                r#"{"title":"Old","description":"D","mediaUrl":"https://www.youtube.com/playlist?list=B"}"#,
            )
            .expect(1)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/courses/12")
            .match_body(Matcher::JsonString(
                r#"{"title":"New","description":"D","mediaUrl":"https://www.youtube.com/playlist?list=B"}"#
                    .to_string(),
            ))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;
        let create = server.mock("POST", "/courses").expect(0).create_async().await;

        let client = client_for(&server);
        let mut form = CourseForm::edit("12");
        let mut navigator = TerminalNavigator::default();
        let report = run_form(
            &mut form,
            FormEdits {
                title: Some("New".to_string()),
                ..FormEdits::default()
            },
            &client,
            &mut navigator,
        )
        .await
        .unwrap();

        assert!(report.saved);
        assert_eq!(navigator.last(), Some(INSTRUCTOR_COURSES_ROUTE));
        assert_eq!(form.upload_option(), UploadOption::Youtube);
        get.assert_async().await;
        update.assert_async().await;
        create.assert_async().await;
    }

    #[tokio::test]
    async fn render_course_shows_loaded_form() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/courses/5")
            .with_status(200)
            .with_body(
                r#"{"title":"Rust","description":"Traits","mediaUrl":"https://blob.example.com/t.pdf"}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let text = render_course("5", &client).await.unwrap();

        assert!(text.starts_with("Edit Course\n"));
        assert!(text.contains("Title: Rust\n"));
        assert!(text.contains("  (*) Upload File to Blob\n"));
        assert!(text.contains("  Uploaded: https://blob.example.com/t.pdf\n"));
        assert!(text.ends_with("[Update Course]"));
    }

    #[tokio::test]
    async fn render_course_reports_load_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/courses/5")
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = render_course("5", &client).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load course.");

        let err = render_course("", &client).await.unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[tokio::test]
    async fn missing_required_fields_rejected_locally() {
        let server = Server::new_async().await;
        let client = client_for(&server);
        let mut form = CourseForm::create();
        let mut navigator = TerminalNavigator::default();
        let err = run_form(
            &mut form,
            FormEdits {
                title: Some("T".to_string()),
                ..FormEdits::default()
            },
            &client,
            &mut navigator,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("Description is required"));
    }
}
