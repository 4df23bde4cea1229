//! Wire shapes of the story API.
//!
//! Response envelopes are deserialized as-is; request bodies borrow from the
//! caller so nothing is cloned just to be serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Story, StoryDraft};

/// A user profile as returned by signup, login and the user endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    /// Display name.
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub favorites: Vec<Story>,
    /// Stories posted by this user.
    #[serde(default)]
    pub stories: Vec<Story>,
}

/// Response of `POST /signup` and `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: UserRecord,
    pub token: String,
}

/// Response of `GET /stories`.
#[derive(Debug, Deserialize)]
pub(crate) struct StoriesEnvelope {
    pub stories: Vec<Story>,
}

/// Response of `POST /stories`.
#[derive(Debug, Deserialize)]
pub(crate) struct StoryEnvelope {
    pub story: Story,
}

/// Response of the user and favorite endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: UserRecord,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenBody<'a> {
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewStoryBody<'a> {
    pub token: &'a str,
    pub story: &'a StoryDraft,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserBody<'a> {
    pub user: UserFields<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserFields<'a> {
    pub username: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}
