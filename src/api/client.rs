//! HTTP client for JSONPlaceholder

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ApiError, BlogApi};
use crate::models::{Comment, Post, PostsQuery};

#[derive(Clone)]
pub struct JsonPlaceholderClient {
    base_url: String,
    http: reqwest::Client,
}

impl JsonPlaceholderClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl BlogApi for JsonPlaceholderClient {
    async fn get_post(&self, id: u32) -> Result<Post, ApiError> {
        self.get(&format!("/posts/{}", id), &[]).await
    }

    async fn get_post_comments(&self, id: u32) -> Result<Vec<Comment>, ApiError> {
        self.get(&format!("/posts/{}/comments", id), &[]).await
    }

    async fn list_posts(&self, query: &PostsQuery, default_limit: u32) -> Result<Vec<Post>, ApiError> {
        self.get("/posts", &query.to_params(default_limit)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = JsonPlaceholderClient::new("https://jsonplaceholder.typicode.com/");
        assert_eq!(client.base_url(), "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }
}
