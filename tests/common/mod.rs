//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! use common::{test_app, MockApiConfig};
//!
//! let http = MockApiConfig::new().with_stories(vec![]).build();
//! let app = test_app(http, InMemoryCredentials::new());
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use serde_json::{json, Value};
use snooze::api::ApiClient;
use snooze::app::App;
use snooze::auth::Credentials;

pub const BASE: &str = "https://api.test";

/// A story record as the API serializes it.
pub fn story_json(story_id: &str, username: &str) -> Value {
    json!({
        "storyId": story_id,
        "title": format!("Story {}", story_id),
        "author": "Test Author",
        "url": format!("https://{}.example.com/", story_id),
        "username": username,
        "createdAt": "2024-05-01T12:00:00.000Z",
        "updatedAt": "2024-05-01T12:00:00.000Z"
    })
}

/// A user record as the API serializes it.
pub fn user_json(username: &str, favorites: Vec<Value>, stories: Vec<Value>) -> Value {
    json!({
        "username": username,
        "name": format!("{} display", username),
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "favorites": favorites,
        "stories": stories
    })
}

/// Credentials a previous run would have saved.
pub fn remembered(token: &str, username: &str) -> Credentials {
    Credentials {
        token: Some(token.to_string()),
        username: Some(username.to_string()),
        favorites: Vec::new(),
    }
}

pub fn test_app(
    http: MockHttpClient,
    store: InMemoryCredentials,
) -> App<MockHttpClient, InMemoryCredentials> {
    let api = ApiClient::new(BASE, http).expect("test base URL parses");
    App::new(api, store)
}
