//! Blog API
//!
//! Read-only bindings to the JSONPlaceholder REST endpoints, organized by resource.

mod client;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Comment, Post, PostsQuery};

pub use client::JsonPlaceholderClient;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Remote source of posts and comments.
///
/// Futures are `?Send`: in the browser everything runs on the event loop.
#[async_trait(?Send)]
pub trait BlogApi {
    /// `GET /posts/{id}`
    async fn get_post(&self, id: u32) -> Result<Post, ApiError>;

    /// `GET /posts/{id}/comments`
    async fn get_post_comments(&self, id: u32) -> Result<Vec<Comment>, ApiError>;

    /// `GET /posts?_page=&_limit=[&userId=]`
    async fn list_posts(&self, query: &PostsQuery, default_limit: u32) -> Result<Vec<Post>, ApiError>;
}
