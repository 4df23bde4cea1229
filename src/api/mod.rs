//! Client for the remote story API.
//!
//! | Operation | Method | Path | Token |
//! |---|---|---|---|
//! | List stories | GET | `/stories` | none |
//! | Create story | POST | `/stories` | body |
//! | Delete story | DELETE | `/stories/{id}` | body |
//! | Sign up | POST | `/signup` | none |
//! | Log in | POST | `/login` | none |
//! | Fetch profile | GET | `/users/{username}` | query |
//! | Add favorite | POST | `/users/{username}/favorites/{storyId}` | query |
//! | Remove favorite | DELETE | `/users/{username}/favorites/{storyId}` | query |

pub mod client;
pub mod payloads;

pub use client::{ApiClient, DEFAULT_API_URL};
pub use payloads::{AuthResponse, UserRecord};
