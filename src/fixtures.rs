//! Shared fixtures for unit tests.

use serde_json::{json, Value};

use crate::adapters::mock::{MockHttpClient, MockResponse};
use crate::api::ApiClient;
use crate::models::{Story, UserSession};

pub const BASE: &str = "https://api.test";

pub fn story_json(story_id: &str, username: &str) -> Value {
    json!({
        "storyId": story_id,
        "title": format!("Story {}", story_id),
        "author": "Some Author",
        "url": format!("https://{}.example.com/post", story_id),
        "username": username,
        "createdAt": "2024-05-01T12:00:00.000Z",
        "updatedAt": "2024-05-01T12:00:00.000Z"
    })
}

pub fn story(story_id: &str, username: &str) -> Story {
    serde_json::from_value(story_json(story_id, username)).unwrap()
}

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

pub fn api() -> ApiClient<MockHttpClient> {
    ApiClient::new(BASE, MockHttpClient::new()).unwrap()
}

/// A session for `alice` with token `tok` built through a mocked login.
pub async fn logged_in(
    api: &ApiClient<MockHttpClient>,
    favorites: Vec<Value>,
    stories: Vec<Value>,
) -> UserSession {
    api.http().set_response(
        "POST",
        &format!("{}/login", BASE),
        MockResponse::json(
            200,
            json!({ "user": user_json("alice", favorites, stories), "token": "tok" }),
        ),
    );
    let session = UserSession::log_in(api, "alice", "pw").await.unwrap();
    api.http().clear_requests();
    session
}
