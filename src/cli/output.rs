//! Plain-text rendering of stories and sessions.

use std::io::{self, Write};

use crate::models::{Story, UserSession};

/// One line per story:
/// `* title (host) by author, posted by username [id]`.
///
/// The leading marker is `*` for a favorite of `session` and a space
/// otherwise.
pub fn story_line(story: &Story, session: Option<&UserSession>) -> String {
    let marker = match session {
        Some(session) if session.is_favorite(story.story_id()) => '*',
        _ => ' ',
    };
    let host = story
        .hostname()
        .unwrap_or_else(|_| "invalid url".to_string());

    format!(
        "{} {} ({}) by {}, posted by {} [{}]",
        marker,
        story.title(),
        host,
        story.author(),
        story.username(),
        story.story_id()
    )
}

/// Write `stories`, or `empty_note` when there are none.
pub fn write_stories<'a, W: Write>(
    out: &mut W,
    stories: impl IntoIterator<Item = &'a Story>,
    session: Option<&UserSession>,
    empty_note: &str,
) -> io::Result<()> {
    let mut any = false;
    for story in stories {
        writeln!(out, "{}", story_line(story, session))?;
        any = true;
    }
    if !any {
        writeln!(out, "{}", empty_note)?;
    }
    Ok(())
}

pub fn session_summary(session: &UserSession) -> String {
    format!(
        "{} ({}), member since {}, {} stories, {} favorites",
        session.username(),
        session.display_name(),
        session.created_at().format("%Y-%m-%d"),
        session.own_stories().len(),
        session.favorites().len()
    )
}
