//! Post List Loader
//!
//! Paginated post list with "load more", refresh, and session-scoped
//! persistence of the list and the scroll offset so a remount can pick up
//! where the user left off without refetching.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiError, BlogApi, JsonPlaceholderClient};
use crate::config::{use_blog_config, BlogConfig};
use crate::models::{Post, PostsQuery};
use crate::session::{
    parse_scroll_offset, read_json, write_json, BestEffort, BrowserSessionStore, BrowserViewport,
    SessionStore, Viewport,
};
use crate::store::{PostsSnapshot, PostsState, PostsStateStoreFields, PostsStore, PostsView};

#[derive(Clone)]
pub struct UsePosts {
    api: Rc<dyn BlogApi>,
    session: Option<Rc<dyn SessionStore>>,
    viewport: Option<Rc<dyn Viewport>>,
    config: BlogConfig,
    state: PostsStore,
}

impl UsePosts {
    pub fn new(
        api: Rc<dyn BlogApi>,
        session: Option<Rc<dyn SessionStore>>,
        viewport: Option<Rc<dyn Viewport>>,
        config: BlogConfig,
    ) -> Self {
        let state = Store::new(PostsState::new());
        Self {
            api,
            session,
            viewport,
            config,
            state,
        }
    }

    /// Read-only view for components
    pub fn view(&self) -> PostsView {
        PostsView::new(self.state)
    }

    /// Fetch one page. Page 1 replaces the list, later pages append.
    pub async fn fetch_posts(&self, query: PostsQuery) -> Result<(), ApiError> {
        let page = query.resolved_page();
        let limit = query.resolved_limit(self.config.page_size);

        self.state.loading().set(true);
        self.state.error().set(None);

        let result = self.api.list_posts(&query, self.config.page_size).await;
        let result = match result {
            Ok(fetched) => {
                tracing::info!("Fetched {} posts for page {}", fetched.len(), page);
                let has_more = self.config.page_end.has_more(page, limit, fetched.len());

                if page == 1 {
                    self.state.posts().set(fetched);
                } else {
                    self.state.posts().write().extend(fetched);
                }
                self.state.current_page().set(page);
                self.state.has_more().set(has_more);
                self.save_state();
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching posts page {}: {}", page, e);
                self.state.error().set(Some(e.to_string()));
                Err(e)
            }
        };

        self.state.loading().set(false);
        result
    }

    /// Fetch the next page unless the list is exhausted or a fetch is running
    pub async fn load_more(&self) -> Result<(), ApiError> {
        if self.state.has_more().get_untracked() && !self.state.loading().get_untracked() {
            let next = self.state.current_page().get_untracked() + 1;
            self.fetch_posts(PostsQuery::page(next)).await
        } else {
            Ok(())
        }
    }

    /// Start over from page 1
    pub async fn refresh(&self) -> Result<(), ApiError> {
        self.state.current_page().set(1);
        self.state.has_more().set(true);
        self.fetch_posts(PostsQuery::page(1)).await
    }

    /// Seed the list with posts obtained elsewhere, without a request
    #[allow(dead_code)] // entry point for pre-rendered data; the CSR app always fetches
    pub fn initialize_posts(&self, posts: Vec<Post>, page: u32) {
        let has_more = posts.len() == self.config.page_size as usize;
        self.state.posts().set(posts);
        self.state.current_page().set(page.max(1));
        self.state.has_more().set(has_more);
        self.state.loading().set(false);
        self.state.error().set(None);
        self.save_state();
    }

    // ========================
    // Session Persistence
    // ========================

    pub fn save_state(&self) -> BestEffort {
        let Some(session) = &self.session else {
            return BestEffort::Skipped;
        };
        let snapshot = PostsSnapshot::capture(&self.state);
        match write_json(session.as_ref(), &self.config.posts_storage_key, &snapshot) {
            Ok(()) => BestEffort::Done,
            Err(e) => {
                tracing::warn!("Failed to save posts state: {}", e);
                BestEffort::Failed
            }
        }
    }

    /// Apply the saved snapshot; true when one was found and applied
    pub fn restore_state(&self) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        match read_json::<PostsSnapshot>(session.as_ref(), &self.config.posts_storage_key) {
            Ok(Some(snapshot)) => {
                snapshot.apply(&self.state);
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Failed to restore posts state: {}", e);
                false
            }
        }
    }

    pub fn save_scroll_position(&self) -> BestEffort {
        let (Some(session), Some(viewport)) = (&self.session, &self.viewport) else {
            return BestEffort::Skipped;
        };
        let Some(scroll_y) = viewport.scroll_y() else {
            return BestEffort::Skipped;
        };
        let offset = scroll_y.trunc() as i32;
        match session.set_item(&self.config.scroll_storage_key, &offset.to_string()) {
            Ok(()) => BestEffort::Done,
            Err(e) => {
                tracing::warn!("Failed to save scroll position: {}", e);
                BestEffort::Failed
            }
        }
    }

    /// Schedule a scroll to the saved offset and consume the saved key
    pub fn restore_scroll_position(&self) -> BestEffort {
        let (Some(session), Some(viewport)) = (&self.session, &self.viewport) else {
            return BestEffort::Skipped;
        };
        let key = &self.config.scroll_storage_key;

        let saved = match session.get_item(key) {
            Ok(Some(saved)) if !saved.is_empty() => saved,
            Ok(_) => return BestEffort::Skipped,
            Err(e) => {
                tracing::warn!("Failed to restore scroll position: {}", e);
                return BestEffort::Failed;
            }
        };

        let outcome = match parse_scroll_offset(&saved) {
            Ok(y) => {
                viewport.scroll_to_later(y, self.config.scroll_restore_delay_ms);
                BestEffort::Done
            }
            Err(e) => {
                tracing::warn!("Failed to restore scroll position: {}", e);
                BestEffort::Failed
            }
        };

        if let Err(e) = session.remove_item(key) {
            tracing::warn!("Failed to clear scroll position: {}", e);
            return BestEffort::Failed;
        }
        outcome
    }
}

/// Create a list loader against the configured API, persisting through the
/// browser's sessionStorage when it is available.
pub fn use_posts() -> UsePosts {
    let config = use_blog_config();
    let api: Rc<dyn BlogApi> = Rc::new(JsonPlaceholderClient::new(&config.api_base_url));
    let session = BrowserSessionStore::from_window().map(|s| Rc::new(s) as Rc<dyn SessionStore>);
    let viewport = BrowserViewport::from_window().map(|v| Rc::new(v) as Rc<dyn Viewport>);
    UsePosts::new(api, session, viewport, config)
}
