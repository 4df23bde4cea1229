//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `snooze::adapters::mock` and adds a builder for
//! a mocked story API.

pub use snooze::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
pub use snooze::traits::{HttpClient, HttpError};

use serde_json::{json, Value};

use super::{user_json, BASE};

/// Configuration for a mocked story API.
pub struct MockApiConfig {
    client: MockHttpClient,
}

impl MockApiConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// `GET /stories` returns `stories` in the given order.
    pub fn with_stories(self, stories: Vec<Value>) -> Self {
        self.client.set_response(
            "GET",
            &format!("{}/stories", BASE),
            MockResponse::json(200, json!({ "stories": stories })),
        );
        self
    }

    /// `POST /login` and `POST /signup` succeed for `username` with `token`.
    pub fn with_auth(self, username: &str, token: &str, favorites: Vec<Value>) -> Self {
        let body = json!({ "user": user_json(username, favorites, vec![]), "token": token });
        self.client.set_response(
            "POST",
            &format!("{}/login", BASE),
            MockResponse::json(200, body.clone()),
        );
        self.client.set_response(
            "POST",
            &format!("{}/signup", BASE),
            MockResponse::json(201, body),
        );
        self
    }

    /// `GET /users/{username}` returns the profile.
    pub fn with_profile(self, username: &str, favorites: Vec<Value>, stories: Vec<Value>) -> Self {
        self.client.set_response(
            "GET",
            &format!("{}/users/{}", BASE, username),
            MockResponse::json(200, json!({ "user": user_json(username, favorites, stories) })),
        );
        self
    }

    /// `GET /users/{username}` rejects the token.
    pub fn with_rejected_token(self, username: &str) -> Self {
        self.client.set_response(
            "GET",
            &format!("{}/users/{}", BASE, username),
            MockResponse::json(401, json!({ "error": { "status": 401, "message": "Invalid token" } })),
        );
        self
    }

    /// Any `method` + path under the base URL answers with `response`.
    pub fn with_response(self, method: &str, path: &str, response: MockResponse) -> Self {
        self.client
            .set_response(method, &format!("{}{}", BASE, path), response);
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self::new()
    }
}
