//! Shared client for the story API.
//!
//! Knows the endpoint layout, where the token goes for each call, and how to
//! turn responses into domain values or [`SnoozeError`]s. Transport is
//! delegated to an [`HttpClient`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::payloads::{
    AuthResponse, NewStoryBody, StoriesEnvelope, StoryEnvelope, TokenBody, UserBody,
    UserEnvelope, UserFields, UserRecord,
};
use crate::error::{SnoozeError, SnoozeResult};
use crate::models::{Story, StoryDraft};
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Default base URL of the hosted API.
pub const DEFAULT_API_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

/// Client for the story API.
#[derive(Debug, Clone)]
pub struct ApiClient<H> {
    base_url: Url,
    http: H,
}

impl<H: HttpClient> ApiClient<H> {
    /// Create a client rooted at `base_url`.
    ///
    /// Fails with [`SnoozeError::InvalidUrl`] if the URL does not parse or
    /// cannot carry a path.
    pub fn new(base_url: &str, http: H) -> SnoozeResult<Self> {
        let parsed = Url::parse(base_url).map_err(|e| SnoozeError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(SnoozeError::InvalidUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as an API base".to_string(),
            });
        }
        Ok(Self {
            base_url: parsed,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying transport.
    pub fn http(&self) -> &H {
        &self.http
    }

    /// GET /stories
    pub async fn list_stories(&self) -> SnoozeResult<Vec<Story>> {
        let url = self.endpoint(&["stories"]);
        tracing::debug!("Fetching stories from {}", url);

        let response = self.http.get(url.as_str(), &Headers::new()).await?;
        let envelope: StoriesEnvelope = Self::decode(response)?;
        Ok(envelope.stories)
    }

    /// POST /stories, token in body.
    pub async fn create_story(&self, token: &str, draft: &StoryDraft) -> SnoozeResult<Story> {
        let url = self.endpoint(&["stories"]);
        let body = Self::encode(&NewStoryBody {
            token,
            story: draft,
        })?;
        tracing::debug!("Creating story '{}'", draft.title);

        let response = self
            .http
            .post(url.as_str(), &body, &Self::json_headers())
            .await?;
        let envelope: StoryEnvelope = Self::decode(response)?;
        Ok(envelope.story)
    }

    /// DELETE /stories/{id}, token in body.
    pub async fn delete_story(&self, token: &str, story_id: &str) -> SnoozeResult<()> {
        let url = self.endpoint(&["stories", story_id]);
        let body = Self::encode(&TokenBody { token })?;
        tracing::debug!("Deleting story {}", story_id);

        let response = self
            .http
            .delete(url.as_str(), Some(&body), &Self::json_headers())
            .await?;
        Self::expect_success(response)
    }

    /// POST /signup
    pub async fn sign_up(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> SnoozeResult<AuthResponse> {
        let url = self.endpoint(&["signup"]);
        let body = Self::encode(&UserBody {
            user: UserFields {
                username,
                password,
                name: Some(name),
            },
        })?;
        tracing::debug!("Signing up {}", username);

        let response = self
            .http
            .post(url.as_str(), &body, &Self::json_headers())
            .await?;
        Self::decode(response)
    }

    /// POST /login
    pub async fn log_in(&self, username: &str, password: &str) -> SnoozeResult<AuthResponse> {
        let url = self.endpoint(&["login"]);
        let body = Self::encode(&UserBody {
            user: UserFields {
                username,
                password,
                name: None,
            },
        })?;
        tracing::debug!("Logging in {}", username);

        let response = self
            .http
            .post(url.as_str(), &body, &Self::json_headers())
            .await?;
        Self::decode(response)
    }

    /// GET /users/{username}?token=...
    pub async fn fetch_user(&self, token: &str, username: &str) -> SnoozeResult<UserRecord> {
        let url = Self::with_token(self.endpoint(&["users", username]), token);
        tracing::debug!("Fetching profile of {}", username);

        let response = self.http.get(url.as_str(), &Headers::new()).await?;
        let envelope: UserEnvelope = Self::decode(response)?;
        Ok(envelope.user)
    }

    /// POST /users/{username}/favorites/{storyId}?token=...
    pub async fn add_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> SnoozeResult<UserRecord> {
        let url = Self::with_token(
            self.endpoint(&["users", username, "favorites", story_id]),
            token,
        );
        tracing::debug!("Adding favorite {} for {}", story_id, username);

        let response = self
            .http
            .post(url.as_str(), "{}", &Self::json_headers())
            .await?;
        let envelope: UserEnvelope = Self::decode(response)?;
        Ok(envelope.user)
    }

    /// DELETE /users/{username}/favorites/{storyId}?token=...
    pub async fn remove_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> SnoozeResult<UserRecord> {
        let url = Self::with_token(
            self.endpoint(&["users", username, "favorites", story_id]),
            token,
        );
        tracing::debug!("Removing favorite {} for {}", story_id, username);

        let response = self.http.delete(url.as_str(), None, &Headers::new()).await?;
        let envelope: UserEnvelope = Self::decode(response)?;
        Ok(envelope.user)
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn with_token(mut url: Url, token: &str) -> Url {
        url.query_pairs_mut().append_pair("token", token);
        url
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    fn encode<T: Serialize>(body: &T) -> SnoozeResult<String> {
        serde_json::to_string(body).map_err(|e| {
            SnoozeError::Network(HttpError::Other(format!(
                "failed to encode request body: {}",
                e
            )))
        })
    }

    fn expect_success(response: Response) -> SnoozeResult<()> {
        if response.is_success() {
            Ok(())
        } else {
            Err(SnoozeError::from_status(response.status, &response.body))
        }
    }

    fn decode<T: DeserializeOwned>(response: Response) -> SnoozeResult<T> {
        if !response.is_success() {
            return Err(SnoozeError::from_status(response.status, &response.body));
        }
        response
            .json()
            .map_err(|e| SnoozeError::invalid_body(response.status, e))
    }
}
