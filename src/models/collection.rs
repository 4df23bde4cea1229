//! The public story list.

use crate::api::ApiClient;
use crate::error::{SnoozeError, SnoozeResult};
use crate::models::{Story, StoryDraft, UserSession};
use crate::traits::HttpClient;

/// Ordered list of stories as served by the API, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryCollection {
    stories: Vec<Story>,
}

impl StoryCollection {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// Load the public story list, keeping server order.
    pub async fn fetch_all<H: HttpClient>(api: &ApiClient<H>) -> SnoozeResult<Self> {
        let stories = api.list_stories().await?;
        tracing::debug!("Fetched {} stories", stories.len());
        Ok(Self::new(stories))
    }

    /// Post a new story as the session user.
    ///
    /// On success the created story is prepended both here and to the
    /// user's own stories. On failure nothing changes.
    pub async fn add_story<H: HttpClient>(
        &mut self,
        api: &ApiClient<H>,
        session: &mut UserSession,
        draft: &StoryDraft,
    ) -> SnoozeResult<Story> {
        let story = api.create_story(session.token(), draft).await?;
        tracing::info!("Created story {}", story.story_id());

        self.stories.retain(|s| s.story_id() != story.story_id());
        self.stories.insert(0, story.clone());
        session.prepend_own_story(story.clone());
        Ok(story)
    }

    /// Delete a story owned by the session user.
    ///
    /// The server call goes first. Only after it succeeds is the story
    /// dropped from this list and from the user's own stories and favorites.
    ///
    /// A 404 for an id that none of those lists holds counts as success:
    /// there is nothing to remove on either side. A 404 for a known id is
    /// returned as an error.
    pub async fn remove_story<H: HttpClient>(
        &mut self,
        api: &ApiClient<H>,
        session: &mut UserSession,
        story_id: &str,
    ) -> SnoozeResult<()> {
        match api.delete_story(session.token(), story_id).await {
            Ok(()) => {}
            Err(SnoozeError::Server { status: 404, .. })
                if !self.contains(story_id) && session.find_story(story_id).is_none() =>
            {
                tracing::debug!("Story {} is unknown locally and on the server", story_id);
                return Ok(());
            }
            Err(err) => return Err(err),
        }
        tracing::info!("Deleted story {}", story_id);

        self.stories.retain(|s| s.story_id() != story_id);
        session.forget_story(story_id);
        Ok(())
    }

    pub fn find(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.story_id() == story_id)
    }

    pub fn contains(&self, story_id: &str) -> bool {
        self.find(story_id).is_some()
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Story> {
        self.stories.iter()
    }
}

impl<'a> IntoIterator for &'a StoryCollection {
    type Item = &'a Story;
    type IntoIter = std::slice::Iter<'a, Story>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
