//! Command-line argument parsing.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "snooze",
    about = "Read, post and favorite stories on Hack or Snooze",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Cli {
    /// The command to run; a bare `snooze` lists stories.
    pub fn into_command(self) -> CliCommand {
        self.command.unwrap_or(CliCommand::Stories)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CliCommand {
    /// List all stories (default)
    Stories,
    /// List your stories
    Mine,
    /// List your favorite stories
    Favorites,
    /// Show the logged-in user
    #[command(name = "whoami")]
    WhoAmI,
    /// Create an account (prompts for a password)
    #[command(name = "signup")]
    SignUp {
        username: String,
        /// Display name; several words are joined with spaces
        #[arg(required = true)]
        display_name: Vec<String>,
    },
    /// Log in (prompts for a password)
    #[command(name = "login")]
    LogIn { username: String },
    /// Forget the saved session
    #[command(name = "logout")]
    LogOut,
    /// Post a story
    Submit {
        title: String,
        author: String,
        url: String,
    },
    /// Delete one of your stories
    Delete { story_id: String },
    /// Add a story to your favorites
    Favorite { story_id: String },
    /// Remove a story from your favorites
    Unfavorite { story_id: String },
}
