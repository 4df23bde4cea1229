//! The authenticated user and their favorites.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::api::{ApiClient, UserRecord};
use crate::auth::Credentials;
use crate::error::{SnoozeError, SnoozeResult};
use crate::models::Story;
use crate::traits::HttpClient;

/// An authenticated user.
///
/// Owns the session token plus two id-keyed story lists: stories the user
/// posted (newest first) and favorites. Neither list ever holds two stories
/// with the same id.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    username: String,
    display_name: String,
    created_at: DateTime<Utc>,
    own_stories: Vec<Story>,
    favorites: Vec<Story>,
    token: String,
}

impl UserSession {
    /// Build a session from a server profile and the token that fetched it.
    pub fn from_record(record: UserRecord, token: impl Into<String>) -> Self {
        Self {
            username: record.username,
            display_name: record.name,
            created_at: record.created_at,
            own_stories: dedup_by_id(record.stories),
            favorites: dedup_by_id(record.favorites),
            token: token.into(),
        }
    }

    /// Register a new account.
    ///
    /// A taken username surfaces as [`SnoozeError::Validation`].
    pub async fn sign_up<H: HttpClient>(
        api: &ApiClient<H>,
        username: &str,
        password: &str,
        display_name: &str,
    ) -> SnoozeResult<Self> {
        let auth = api.sign_up(username, password, display_name).await?;
        tracing::info!("Signed up as {}", auth.user.username);
        Ok(Self::from_record(auth.user, auth.token))
    }

    /// Authenticate existing credentials.
    ///
    /// Both a wrong password and an unknown username surface as
    /// [`SnoozeError::Auth`].
    pub async fn log_in<H: HttpClient>(
        api: &ApiClient<H>,
        username: &str,
        password: &str,
    ) -> SnoozeResult<Self> {
        let auth = api.log_in(username, password).await.map_err(|err| match err {
            SnoozeError::Server { status: 404, message } => SnoozeError::Auth { message },
            other => other,
        })?;
        tracing::info!("Logged in as {}", auth.user.username);
        Ok(Self::from_record(auth.user, auth.token))
    }

    /// Re-validate a previously issued token by fetching the profile.
    ///
    /// Any failure yields `None`: an expired or revoked stored token is an
    /// expected condition, not a fault.
    pub async fn restore_from_stored_credentials<H: HttpClient>(
        api: &ApiClient<H>,
        token: &str,
        username: &str,
    ) -> Option<Self> {
        match api.fetch_user(token, username).await {
            Ok(record) => {
                tracing::info!("Restored session for {}", record.username);
                Some(Self::from_record(record, token))
            }
            Err(err) => {
                tracing::warn!("Could not restore session for {}: {}", username, err);
                None
            }
        }
    }

    /// Mark `story` as a favorite.
    ///
    /// The story is added locally before the server call. If the call fails
    /// the local insertion is undone and the error returned; on success the
    /// server's favorites list replaces the local one.
    pub async fn add_favorite<H: HttpClient>(
        &mut self,
        api: &ApiClient<H>,
        story: &Story,
    ) -> SnoozeResult<()> {
        let inserted = if self.is_favorite(story.story_id()) {
            false
        } else {
            self.favorites.push(story.clone());
            true
        };

        match api
            .add_favorite(&self.token, &self.username, story.story_id())
            .await
        {
            Ok(record) => {
                self.favorites = dedup_by_id(record.favorites);
                Ok(())
            }
            Err(err) => {
                if inserted {
                    self.favorites.retain(|s| s.story_id() != story.story_id());
                }
                tracing::warn!("Favoriting {} failed: {}", story.story_id(), err);
                Err(err)
            }
        }
    }

    /// Unmark `story` as a favorite.
    ///
    /// Same rollback rule as [`add_favorite`](Self::add_favorite): on failure
    /// the story goes back where it was.
    pub async fn remove_favorite<H: HttpClient>(
        &mut self,
        api: &ApiClient<H>,
        story: &Story,
    ) -> SnoozeResult<()> {
        let removed = self
            .favorites
            .iter()
            .position(|s| s.story_id() == story.story_id())
            .map(|index| (index, self.favorites.remove(index)));

        match api
            .remove_favorite(&self.token, &self.username, story.story_id())
            .await
        {
            Ok(record) => {
                self.favorites = dedup_by_id(record.favorites);
                Ok(())
            }
            Err(err) => {
                if let Some((index, original)) = removed {
                    self.favorites.insert(index, original);
                }
                tracing::warn!("Unfavoriting {} failed: {}", story.story_id(), err);
                Err(err)
            }
        }
    }

    /// Flip the favorite state of `story`. Returns whether it is now a favorite.
    pub async fn toggle_favorite<H: HttpClient>(
        &mut self,
        api: &ApiClient<H>,
        story: &Story,
    ) -> SnoozeResult<bool> {
        if self.is_favorite(story.story_id()) {
            self.remove_favorite(api, story).await?;
            Ok(false)
        } else {
            self.add_favorite(api, story).await?;
            Ok(true)
        }
    }

    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.favorites.iter().any(|s| s.story_id() == story_id)
    }

    pub fn is_own_story(&self, story_id: &str) -> bool {
        self.own_stories.iter().any(|s| s.story_id() == story_id)
    }

    /// A story from either of the session's lists.
    pub fn find_story(&self, story_id: &str) -> Option<&Story> {
        self.own_stories
            .iter()
            .chain(self.favorites.iter())
            .find(|s| s.story_id() == story_id)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Stories posted by this user, newest first.
    pub fn own_stories(&self) -> &[Story] {
        &self.own_stories
    }

    pub fn favorites(&self) -> &[Story] {
        &self.favorites
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Snapshot of what gets persisted for the next run.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            token: Some(self.token.clone()),
            username: Some(self.username.clone()),
            favorites: self
                .favorites
                .iter()
                .map(|s| s.story_id().to_string())
                .collect(),
        }
    }

    pub(crate) fn prepend_own_story(&mut self, story: Story) {
        self.own_stories.retain(|s| s.story_id() != story.story_id());
        self.own_stories.insert(0, story);
    }

    /// Drop a deleted story from both lists.
    pub(crate) fn forget_story(&mut self, story_id: &str) {
        self.own_stories.retain(|s| s.story_id() != story_id);
        self.favorites.retain(|s| s.story_id() != story_id);
    }
}

/// Keep the first story for each id, preserving order.
fn dedup_by_id(stories: Vec<Story>) -> Vec<Story> {
    let mut seen = HashSet::new();
    stories
        .into_iter()
        .filter(|s| seen.insert(s.story_id().to_string()))
        .collect()
}
