//! Domain models: stories, the public story list, and the logged-in user.

mod collection;
mod session;
mod story;

pub use collection::StoryCollection;
pub use session::UserSession;
pub use story::{Story, StoryDraft};
