use super::RemoteBackend;
use crate::config::RemoteConfig;
use crate::error::Result;
use crate::model::{Post, PostDraft};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP backend speaking the remote's JSON REST protocol.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn resource_url(&self, id: u64) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }
}

#[async_trait]
impl RemoteBackend for HttpBackend {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn update_post(&self, post: &Post) -> Result<()> {
        // Response body is ignored; only the status matters.
        self.client
            .put(self.resource_url(post.id))
            .json(post)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_post(&self, id: u64) -> Result<()> {
        self.client
            .delete(self.resource_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
