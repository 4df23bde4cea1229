//! Application state and the commands that drive it.
//!
//! [`App`] owns everything a running client needs: the API client, the
//! credential store, the current story list and the authentication state.
//! Every user-facing action is one async method returning [`SnoozeResult`].

use crate::api::ApiClient;
use crate::error::{SnoozeError, SnoozeResult};
use crate::models::{Story, StoryCollection, StoryDraft, UserSession};
use crate::traits::{CredentialsProvider, HttpClient};

/// Who is using the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(UserSession),
}

impl AuthState {
    pub fn session(&self) -> Option<&UserSession> {
        match self {
            AuthState::Anonymous => None,
            AuthState::Authenticated(session) => Some(session),
        }
    }
}

pub struct App<H, P> {
    api: ApiClient<H>,
    store: P,
    stories: StoryCollection,
    auth: AuthState,
}

impl<H: HttpClient, P: CredentialsProvider> App<H, P> {
    /// Anonymous, with an empty story list.
    pub fn new(api: ApiClient<H>, store: P) -> Self {
        Self {
            api,
            store,
            stories: StoryCollection::default(),
            auth: AuthState::Anonymous,
        }
    }

    /// Load the public stories, then pick up a remembered user if there is one.
    pub async fn start(&mut self) -> SnoozeResult<()> {
        self.refresh_stories().await?;
        self.restore_remembered_user().await;
        Ok(())
    }

    /// Try to resume the session saved by a previous run.
    ///
    /// Returns whether a session was restored. Nothing here fails the caller:
    /// an unreadable store, missing fields or a rejected token all leave the
    /// app anonymous.
    pub async fn restore_remembered_user(&mut self) -> bool {
        let stored = match self.store.load().await {
            Ok(Some(creds)) => creds,
            Ok(None) => return false,
            Err(err) => {
                tracing::warn!("Ignoring stored credentials: {}", err);
                return false;
            }
        };

        let Some((token, username)) = stored.login_pair() else {
            tracing::debug!("Stored credentials are incomplete");
            return false;
        };

        let Some(session) =
            UserSession::restore_from_stored_credentials(&self.api, token, username).await
        else {
            return false;
        };

        let server_ids: Vec<&str> = session.favorites().iter().map(|s| s.story_id()).collect();
        if server_ids != stored.favorites {
            tracing::debug!(
                "Stored favorites {:?} differ from server {:?}",
                stored.favorites,
                server_ids
            );
        }

        self.auth = AuthState::Authenticated(session);
        if let Err(err) = self.persist().await {
            tracing::warn!("Could not refresh stored credentials: {}", err);
        }
        true
    }

    /// Create an account and log into it.
    pub async fn signup(
        &mut self,
        username: &str,
        password: &str,
        display_name: &str,
    ) -> SnoozeResult<&UserSession> {
        let session = UserSession::sign_up(&self.api, username, password, display_name).await?;
        self.become_authenticated(session).await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> SnoozeResult<&UserSession> {
        let session = UserSession::log_in(&self.api, username, password).await?;
        self.become_authenticated(session).await
    }

    /// Forget the session locally. The server is not told.
    pub async fn logout(&mut self) -> SnoozeResult<()> {
        if let AuthState::Authenticated(session) = &self.auth {
            tracing::info!("Logging out {}", session.username());
        }
        self.auth = AuthState::Anonymous;
        self.store.clear().await?;
        Ok(())
    }

    pub async fn refresh_stories(&mut self) -> SnoozeResult<&StoryCollection> {
        self.stories = StoryCollection::fetch_all(&self.api).await?;
        Ok(&self.stories)
    }

    pub async fn submit_story(&mut self, draft: &StoryDraft) -> SnoozeResult<Story> {
        let session = require_session(&mut self.auth)?;
        self.stories.add_story(&self.api, session, draft).await
    }

    /// Delete a story on the server and drop it locally.
    ///
    /// The deletion cannot be undone once the server accepts it, so a
    /// failure to save the updated favorites is only logged.
    pub async fn delete_story(&mut self, story_id: &str) -> SnoozeResult<()> {
        let session = require_session(&mut self.auth)?;
        self.stories.remove_story(&self.api, session, story_id).await?;
        if let Err(err) = self.persist().await {
            tracing::warn!("Story {} deleted but credentials were not saved: {}", story_id, err);
        }
        Ok(())
    }

    pub async fn favorite(&mut self, story_id: &str) -> SnoozeResult<Story> {
        let session = require_session(&mut self.auth)?;
        let story = lookup_story(&self.stories, session, story_id)?;
        session.add_favorite(&self.api, &story).await?;
        self.persist().await?;
        Ok(story)
    }

    pub async fn unfavorite(&mut self, story_id: &str) -> SnoozeResult<Story> {
        let session = require_session(&mut self.auth)?;
        let story = lookup_story(&self.stories, session, story_id)?;
        session.remove_favorite(&self.api, &story).await?;
        self.persist().await?;
        Ok(story)
    }

    /// Returns whether the story is a favorite afterwards.
    pub async fn toggle_favorite(&mut self, story_id: &str) -> SnoozeResult<bool> {
        let session = require_session(&mut self.auth)?;
        let story = lookup_story(&self.stories, session, story_id)?;
        let now_favorite = session.toggle_favorite(&self.api, &story).await?;
        self.persist().await?;
        Ok(now_favorite)
    }

    pub fn stories(&self) -> &StoryCollection {
        &self.stories
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn session(&self) -> Option<&UserSession> {
        self.auth.session()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_some()
    }

    pub fn api(&self) -> &ApiClient<H> {
        &self.api
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Install a fresh session and save it.
    ///
    /// If saving fails the session stays active for this run and the
    /// storage error is returned.
    async fn become_authenticated(&mut self, session: UserSession) -> SnoozeResult<&UserSession> {
        self.auth = AuthState::Authenticated(session);
        self.persist().await?;
        self.session().ok_or(SnoozeError::NotLoggedIn)
    }

    async fn persist(&self) -> SnoozeResult<()> {
        if let Some(session) = self.session() {
            self.store.save(&session.credentials()).await?;
        }
        Ok(())
    }
}

fn require_session(auth: &mut AuthState) -> SnoozeResult<&mut UserSession> {
    match auth {
        AuthState::Authenticated(session) => Ok(session),
        AuthState::Anonymous => Err(SnoozeError::NotLoggedIn),
    }
}

/// Public list first, then the user's own lists.
fn lookup_story(
    stories: &StoryCollection,
    session: &UserSession,
    story_id: &str,
) -> SnoozeResult<Story> {
    stories
        .find(story_id)
        .or_else(|| session.find_story(story_id))
        .cloned()
        .ok_or_else(|| SnoozeError::StoryNotFound(story_id.to_string()))
}
