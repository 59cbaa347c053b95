use super::RemoteBackend;
use crate::error::{Result, StoreError};
use crate::model::{Post, PostDraft};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory stand-in for the remote collection, used in tests.
///
/// Mimics the remote's observable behavior: ids are assigned on create,
/// updates to unknown ids are accepted, deletes of unknown ids are
/// not-found errors. [`fail_next`](Self::fail_next) arms a single-shot
/// failure so error paths can be exercised deterministically.
#[derive(Default)]
pub struct InMemoryBackend {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    fail_next: bool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(posts: Vec<Post>) -> Self {
        Self {
            state: Mutex::new(State {
                posts,
                fail_next: false,
            }),
        }
    }

    /// Make the next request fail with a remote error.
    pub fn fail_next(&self) {
        self.state.lock().unwrap().fail_next = true;
    }

    /// Snapshot of the remote-side collection.
    pub fn posts(&self) -> Vec<Post> {
        self.state.lock().unwrap().posts.clone()
    }
}

impl State {
    fn check_failure(&mut self) -> Result<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(StoreError::Remote("connection refused".to_string()));
        }
        Ok(())
    }

    fn next_id(&self) -> u64 {
        self.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl RemoteBackend for InMemoryBackend {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        Ok(state.posts.clone())
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        let post = Post {
            id: state.next_id(),
            title: draft.title.clone(),
            body: draft.body.clone(),
            user_id: draft.user_id,
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, post: &Post) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        // Unknown ids are tolerated, matching the demo API.
        if let Some(entry) = state.posts.iter_mut().find(|p| p.id == post.id) {
            *entry = post.clone();
        }
        Ok(())
    }

    async fn delete_post(&self, id: u64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(StoreError::Remote(format!("post {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            title: title.into(),
            body: String::new(),
            user_id: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_the_next_id() {
        let backend = InMemoryBackend::seeded(vec![post(1, "A"), post(5, "B")]);
        let created = backend.create_post(&PostDraft::new("C", "c")).await.unwrap();
        assert_eq!(created.id, 6);
        assert_eq!(backend.posts().len(), 3);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let backend = InMemoryBackend::seeded(vec![post(1, "A")]);
        backend.delete_post(1).await.unwrap();
        let err = backend.delete_post(1).await.unwrap_err();
        assert!(matches!(err, StoreError::Remote(_)));
    }

    #[tokio::test]
    async fn injected_failure_is_single_shot() {
        let backend = InMemoryBackend::seeded(vec![post(1, "A")]);
        backend.fail_next();
        assert!(backend.list_posts().await.is_err());
        assert!(backend.list_posts().await.is_ok());
    }
}
