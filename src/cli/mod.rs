//! CLI module for snooze.
//!
//! - Argument parsing ([`args`])
//! - Story and session rendering ([`output`])
//!
//! # Usage
//!
//! ```ignore
//! use clap::Parser;
//! use snooze::cli::{run, Cli};
//!
//! let command = Cli::parse().into_command();
//! run(command, &mut app, &mut std::io::stdout(), |p| rpassword::prompt_password(p)).await?;
//! ```

pub mod args;
pub mod output;

pub use args::{Cli, CliCommand};

use std::io::{self, Write};

use color_eyre::Result;

use crate::app::App;
use crate::error::SnoozeError;
use crate::models::StoryDraft;
use crate::traits::{CredentialsProvider, HttpClient};

/// Execute `command` against `app`, printing results to `out`.
///
/// `prompt` reads a secret from the user; the binary passes
/// `rpassword::prompt_password`.
pub async fn run<H, P, W, F>(
    command: CliCommand,
    app: &mut App<H, P>,
    out: &mut W,
    mut prompt: F,
) -> Result<()>
where
    H: HttpClient,
    P: CredentialsProvider,
    W: Write,
    F: FnMut(&str) -> io::Result<String>,
{
    match command {
        CliCommand::Stories => {
            app.start().await?;
            output::write_stories(out, app.stories(), app.session(), "No stories yet.")?;
        }
        CliCommand::Mine => {
            let session = restored_session(app).await?;
            output::write_stories(
                out,
                session.own_stories(),
                Some(session),
                "You have not posted any stories.",
            )?;
        }
        CliCommand::Favorites => {
            let session = restored_session(app).await?;
            output::write_stories(
                out,
                session.favorites(),
                Some(session),
                "No favorites added.",
            )?;
        }
        CliCommand::WhoAmI => {
            if app.restore_remembered_user().await {
                if let Some(session) = app.session() {
                    writeln!(out, "{}", output::session_summary(session))?;
                }
            } else {
                writeln!(out, "Not logged in.")?;
            }
        }

        CliCommand::SignUp {
            username,
            display_name,
        } => {
            let password = prompt("Choose a password: ")?;
            let display_name = display_name.join(" ");
            let session = app.signup(&username, &password, &display_name).await?;
            writeln!(out, "Welcome, {}!", session.display_name())?;
        }
        CliCommand::LogIn { username } => {
            let password = prompt("Password: ")?;
            let session = app.login(&username, &password).await?;
            writeln!(out, "Logged in as {}.", session.username())?;
        }
        CliCommand::LogOut => {
            app.logout().await?;
            writeln!(out, "Logged out.")?;
        }

        CliCommand::Submit { title, author, url } => {
            restored_session(app).await?;
            let story = app
                .submit_story(&StoryDraft::new(title, author, url))
                .await?;
            writeln!(out, "Posted:")?;
            writeln!(out, "{}", output::story_line(&story, app.session()))?;
        }
        CliCommand::Delete { story_id } => {
            restored_session(app).await?;
            app.delete_story(&story_id).await?;
            writeln!(out, "Deleted {}.", story_id)?;
        }
        CliCommand::Favorite { story_id } => {
            restored_session(app).await?;
            app.refresh_stories().await?;
            let story = app.favorite(&story_id).await?;
            writeln!(out, "Added to favorites: {}", story.title())?;
        }
        CliCommand::Unfavorite { story_id } => {
            restored_session(app).await?;
            app.refresh_stories().await?;
            let story = app.unfavorite(&story_id).await?;
            writeln!(out, "Removed from favorites: {}", story.title())?;
        }
    }
    Ok(())
}

/// What the binary prints for a domain error: the message plus a next step.
pub fn error_report(err: &SnoozeError) -> String {
    format!(
        "Error: {}\nHint: {}",
        err.user_message(),
        err.category().recovery_hint()
    )
}

/// Restore the remembered user or fail with [`SnoozeError::NotLoggedIn`].
async fn restored_session<H, P>(app: &mut App<H, P>) -> Result<&crate::models::UserSession>
where
    H: HttpClient,
    P: CredentialsProvider,
{
    if !app.is_logged_in() {
        app.restore_remembered_user().await;
    }
    app.session().ok_or_else(|| SnoozeError::NotLoggedIn.into())
}
