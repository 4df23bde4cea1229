//! Story value type and the draft used to create one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{SnoozeError, SnoozeResult};

/// One shared link and its metadata.
///
/// Stories are immutable once built: fields are only readable through
/// accessors, and a changed story is represented by a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    story_id: String,
    title: String,
    author: String,
    url: String,
    username: String,
    created_at: DateTime<Utc>,
}

impl Story {
    pub fn new(
        story_id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        username: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            story_id: story_id.into(),
            title: title.into(),
            author: author.into(),
            url: url.into(),
            username: username.into(),
            created_at,
        }
    }

    pub fn story_id(&self) -> &str {
        &self.story_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Handle of the user who posted the story.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Host component of the story URL.
    ///
    /// Fails with [`SnoozeError::InvalidUrl`] when the URL does not parse or
    /// has no host (e.g. `mailto:` links).
    pub fn hostname(&self) -> SnoozeResult<String> {
        let parsed = Url::parse(&self.url).map_err(|e| SnoozeError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        parsed
            .host_str()
            .map(str::to_string)
            .ok_or_else(|| SnoozeError::InvalidUrl {
                url: self.url.clone(),
                reason: "URL has no host".to_string(),
            })
    }
}

/// The user-supplied fields of a new story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl StoryDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
        }
    }
}
