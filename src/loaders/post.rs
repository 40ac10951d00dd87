//! Single Post Loader
//!
//! Loads one post and its comments, re-fetching whenever the watched post id
//! changes.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, BlogApi, JsonPlaceholderClient};
use crate::config::use_blog_config;
use crate::models::{Comment, Post};
use crate::session::BestEffort;

/// Post loader. Public signals are read-only; write halves stay private.
#[derive(Clone)]
pub struct UsePost {
    api: Rc<dyn BlogApi>,
    post_id: Signal<u32>,
    pub post: ReadSignal<Option<Post>>,
    set_post: WriteSignal<Option<Post>>,
    pub comments: ReadSignal<Vec<Comment>>,
    set_comments: WriteSignal<Vec<Comment>>,
    pub loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
    /// Message of the last failed post fetch
    pub error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
}

impl UsePost {
    pub fn new(post_id: Signal<u32>, api: Rc<dyn BlogApi>) -> Self {
        let (post, set_post) = signal(None);
        let (comments, set_comments) = signal(Vec::new());
        let (loading, set_loading) = signal(false);
        let (error, set_error) = signal(None);
        Self {
            api,
            post_id,
            post,
            set_post,
            comments,
            set_comments,
            loading,
            set_loading,
            error,
            set_error,
        }
    }

    /// Explicit id when non-zero, otherwise the watched id
    fn target_id(&self, id: Option<u32>) -> u32 {
        id.filter(|id| *id != 0)
            .unwrap_or_else(|| self.post_id.get_untracked())
    }

    /// Fetch the post; failures land in `error` and keep the previous post
    pub async fn fetch_post(&self, id: Option<u32>) -> Result<(), ApiError> {
        let target_id = self.target_id(id);
        self.set_loading.set(true);
        self.set_error.set(None);

        let result = self.api.get_post(target_id).await;
        match &result {
            Ok(post) => {
                tracing::info!("Fetched post with ID: {}", target_id);
                self.set_post.set(Some(post.clone()));
            }
            Err(e) => {
                tracing::error!("Error fetching post {}: {}", target_id, e);
                self.set_error.set(Some(e.to_string()));
            }
        }

        self.set_loading.set(false);
        result.map(|_| ())
    }

    /// Fetch the comments; failures are only logged
    pub async fn fetch_comments(&self, id: Option<u32>) -> BestEffort {
        let target_id = self.target_id(id);

        match self.api.get_post_comments(target_id).await {
            Ok(comments) => {
                tracing::info!("Fetched comments for post ID: {}", target_id);
                self.set_comments.set(comments);
                BestEffort::Done
            }
            Err(e) => {
                tracing::error!("Error fetching comments for post {}: {}", target_id, e);
                BestEffort::Failed
            }
        }
    }

    /// Fetch post and comments concurrently; returns once both have settled
    pub async fn fetch_post_with_comments(&self, id: Option<u32>) -> Result<(), ApiError> {
        let (post, _) = futures::join!(self.fetch_post(id), self.fetch_comments(id));
        post
    }
}

/// The id a watched-id change should load, if any.
///
/// Only a change to a different, non-zero id triggers a load.
pub fn refetch_target(new_id: u32, prev_id: Option<u32>) -> Option<u32> {
    (new_id != 0 && prev_id != Some(new_id)).then_some(new_id)
}

/// Call `on_change` for the initial id and for every later change of
/// `post_id` to a different non-zero value.
pub fn watch_post_id(post_id: Signal<u32>, mut on_change: impl FnMut(u32) + 'static) {
    Effect::watch(
        move || post_id.get(),
        move |new_id, prev_id, _| {
            if let Some(id) = refetch_target(*new_id, prev_id.copied()) {
                on_change(id);
            }
        },
        true,
    );
}

/// Create a post loader against the configured API and watch `post_id`.
///
/// Fetches immediately for the initial id and again on every change.
pub fn use_post(post_id: Signal<u32>) -> UsePost {
    let config = use_blog_config();
    let api: Rc<dyn BlogApi> = Rc::new(JsonPlaceholderClient::new(&config.api_base_url));
    let loader = UsePost::new(post_id, api);

    let watcher = loader.clone();
    watch_post_id(post_id, move |id| {
        let loader = watcher.clone();
        spawn_local(async move {
            let _ = loader.fetch_post_with_comments(Some(id)).await;
        });
    });

    loader
}
