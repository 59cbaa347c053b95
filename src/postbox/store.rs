//! # Post Collection Store
//!
//! [`PostStore`] owns an in-memory ordered list of posts mirroring the
//! remote collection. Every operation performs exactly one remote call and
//! applies the matching local mutation only when that call succeeds, so the
//! local list never gets ahead of the remote (no optimistic updates, no
//! rollback).
//!
//! The store is an explicitly constructed value: build one per session and
//! hand it (by `&mut`) to whatever layer drives it. There is no global
//! instance.
//!
//! ## The loading flag
//!
//! `is_loading()` starts `true` and flips to `false` exactly once, when the
//! first [`load`](PostStore::load) settles—success or failure. It is a
//! one-shot initial-loading indicator, not a general busy flag: later
//! operations never set it again, so a UI spinner bound to it only covers
//! the first fetch.
//!
//! ## Failure behavior
//!
//! Every failure is logged through `tracing` and returned as a typed
//! [`StoreError`](crate::error::StoreError). Nothing is retried, and local
//! state is untouched on any failed call.

use crate::error::Result;
use crate::model::{Post, PostDraft};
use crate::notify::Notifier;
use crate::remote::RemoteBackend;
use tracing::{debug, error};

const DELETE_SUCCESS_MESSAGE: &str = "Post successfully deleted";

pub struct PostStore<B: RemoteBackend, N: Notifier> {
    backend: B,
    notifier: N,
    posts: Vec<Post>,
    loading_posts: bool,
}

impl<B: RemoteBackend, N: Notifier> PostStore<B, N> {
    pub fn new(backend: B, notifier: N) -> Self {
        Self {
            backend,
            notifier,
            posts: Vec::new(),
            loading_posts: true,
        }
    }

    /// The mirrored collection, in remote order with created posts first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// True until the first `load` settles.
    pub fn is_loading(&self) -> bool {
        self.loading_posts
    }

    /// Fetch the collection and replace the local list wholesale.
    ///
    /// The loading flag clears once the request settles, whether or not it
    /// succeeded; on failure the local list is left as it was.
    pub async fn load(&mut self) -> Result<()> {
        let outcome = self.backend.list_posts().await;
        self.loading_posts = false;
        match outcome {
            Ok(posts) => {
                debug!(count = posts.len(), "loaded posts");
                self.posts = posts;
                Ok(())
            }
            Err(err) => {
                error!("failed to load posts: {err}");
                Err(err)
            }
        }
    }

    /// Create a post from a draft and prepend the remote-assigned record,
    /// so created posts read most-recent-first.
    pub async fn create(&mut self, draft: PostDraft) -> Result<()> {
        match self.backend.create_post(&draft).await {
            Ok(created) => {
                debug!(id = created.id, "created post");
                self.posts.insert(0, created);
                Ok(())
            }
            Err(err) => {
                error!("failed to create post: {err}");
                Err(err)
            }
        }
    }

    /// Push a full record to the remote, then replace the first local entry
    /// with the same id in place. If no entry matches, the remote call still
    /// happens and the local list is untouched.
    pub async fn update(&mut self, updated: Post) -> Result<()> {
        match self.backend.update_post(&updated).await {
            Ok(()) => {
                debug!(id = updated.id, "updated post");
                if let Some(entry) = self.posts.iter_mut().find(|p| p.id == updated.id) {
                    *entry = updated;
                }
                Ok(())
            }
            Err(err) => {
                error!("failed to update post {}: {err}", updated.id);
                Err(err)
            }
        }
    }

    /// Delete the remote post, drop every local entry with that id, and
    /// emit one success notification.
    ///
    /// Removal is a filter rather than a single-removal: remote data is not
    /// guaranteed to have unique ids, and a delete should clear all copies.
    pub async fn delete(&mut self, id: u64) -> Result<()> {
        match self.backend.delete_post(id).await {
            Ok(()) => {
                debug!(id, "deleted post");
                self.posts.retain(|p| p.id != id);
                self.notifier.success(DELETE_SUCCESS_MESSAGE);
                Ok(())
            }
            Err(err) => {
                error!("failed to delete post {id}: {err}");
                Err(err)
            }
        }
    }
}
