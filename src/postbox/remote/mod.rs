//! # Remote Layer
//!
//! This module defines the remote-endpoint abstraction for postbox. The
//! [`RemoteBackend`] trait lets the store work against different backends.
//!
//! ## Design Rationale
//!
//! The remote calls are abstracted behind a trait to:
//! - Enable **testing** with `InMemoryBackend` (no network needed)
//! - Allow **future backends** (other wire formats, local fixtures) without
//!   changing the store
//! - Keep the store's collection logic **decoupled** from transport details
//!
//! ## Implementations
//!
//! - [`http::HttpBackend`]: Production HTTP backend
//!   - `GET /posts`, `POST /posts`, `PUT /posts/{id}`, `DELETE /posts/{id}`
//!   - JSON request and response bodies
//!   - Non-2xx statuses surface as [`crate::error::StoreError::Remote`]
//!
//! - [`memory::InMemoryBackend`]: In-memory backend for testing
//!   - Seedable, assigns ids the way the remote would
//!   - Supports single-shot failure injection

use crate::error::Result;
use crate::model::{Post, PostDraft};
use async_trait::async_trait;

pub mod http;
pub mod memory;

/// Abstract interface to the remote post collection.
///
/// Each method maps to exactly one remote request. Implementations must not
/// retry and must report every failure as a single error value.
#[async_trait]
pub trait RemoteBackend {
    /// Fetch the full post collection, in remote order
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Create a post from a draft; the remote assigns the id
    async fn create_post(&self, draft: &PostDraft) -> Result<Post>;

    /// Replace the post identified by `post.id` with the given record
    async fn update_post(&self, post: &Post) -> Result<()>;

    /// Delete the post with the given id
    async fn delete_post(&self, id: u64) -> Result<()>;
}

/// Lets one backend be owned by the store and observed elsewhere.
#[async_trait]
impl<B> RemoteBackend for std::sync::Arc<B>
where
    B: RemoteBackend + Send + Sync + ?Sized,
{
    async fn list_posts(&self) -> Result<Vec<Post>> {
        (**self).list_posts().await
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        (**self).create_post(draft).await
    }

    async fn update_post(&self, post: &Post) -> Result<()> {
        (**self).update_post(post).await
    }

    async fn delete_post(&self, id: u64) -> Result<()> {
        (**self).delete_post(id).await
    }
}
