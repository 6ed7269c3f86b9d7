//! Coursehub CLI: create and edit courses from the terminal.
//!
//! Set COURSEHUB_API_URL (or API_URL) and optionally COURSEHUB_API_TOKEN.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use coursehub_api_client::ApiClient;
use coursehub_cli::{
    init_tracing, print_json, render_course, run_form, FormEdits, TerminalNavigator,
};
use coursehub_form::CourseForm;

#[derive(Parser)]
#[command(name = "coursehub", about = "Create and edit courses")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new course
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[command(flatten)]
        media: RequiredMedia,
    },
    /// Load an existing course, apply the given changes and save it
    Edit {
        /// Course ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        media: OptionalMedia,
    },
    /// Print the form for an existing course
    Show {
        /// Course ID
        id: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct RequiredMedia {
    /// YouTube playlist URL
    #[arg(long)]
    youtube: Option<String>,
    /// Local file to upload to blob storage (MP4, PDF, etc.)
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = false, multiple = false)]
struct OptionalMedia {
    /// YouTube playlist URL
    #[arg(long)]
    youtube: Option<String>,
    /// Local file to upload to blob storage (MP4, PDF, etc.)
    #[arg(long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let client = ApiClient::from_env().context(
        "Failed to create API client. Set COURSEHUB_API_URL (or API_URL)",
    )?;

    let cli = Cli::parse();

    let (mut form, edits) = match cli.command {
        Commands::Create {
            title,
            description,
            media,
        } => (
            CourseForm::create(),
            FormEdits {
                title: Some(title),
                description: Some(description),
                youtube: media.youtube,
                file: media.file,
            },
        ),
        Commands::Edit {
            id,
            title,
            description,
            media,
        } => (
            CourseForm::edit(id),
            FormEdits {
                title,
                description,
                youtube: media.youtube,
                file: media.file,
            },
        ),
        Commands::Show { id } => {
            println!("{}", render_course(&id, &client).await?);
            return Ok(());
        }
    };

    let mut navigator = TerminalNavigator::default();
    let result = run_form(&mut form, edits, &client, &mut navigator).await;
    println!("{}", form.view());
    print_json(&result?)?;

    Ok(())
}
