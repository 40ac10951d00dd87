//! Post List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is owned
//! by a list loader; consumers only ever see a [`PostsView`].

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::Post;

/// List loader state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct PostsState {
    /// Loaded posts in page order
    pub posts: Vec<Post>,
    pub loading: bool,
    /// Message of the last failed page fetch
    pub error: Option<String>,
    pub has_more: bool,
    pub current_page: u32,
}

impl PostsState {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            loading: false,
            error: None,
            has_more: true,
            current_page: 1,
        }
    }
}

/// Type alias for the store
pub type PostsStore = Store<PostsState>;

/// Read-only view of a list loader's state
#[derive(Clone, Copy)]
pub struct PostsView {
    pub posts: Signal<Vec<Post>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub has_more: Signal<bool>,
    pub current_page: Signal<u32>,
}

impl PostsView {
    pub fn new(store: PostsStore) -> Self {
        Self {
            posts: Signal::derive(move || store.posts().get()),
            loading: Signal::derive(move || store.loading().get()),
            error: Signal::derive(move || store.error().get()),
            has_more: Signal::derive(move || store.has_more().get()),
            current_page: Signal::derive(move || store.current_page().get()),
        }
    }
}

// ========================
// Session Snapshot
// ========================

/// What survives a remount: the list itself and where paging stopped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SnapshotRecord")]
pub struct PostsSnapshot {
    pub posts: Vec<Post>,
    pub current_page: u32,
    pub has_more: bool,
}

impl PostsSnapshot {
    pub fn capture(store: &PostsStore) -> Self {
        Self {
            posts: store.posts().get_untracked(),
            current_page: store.current_page().get_untracked(),
            has_more: store.has_more().get_untracked(),
        }
    }

    pub fn apply(self, store: &PostsStore) {
        store.posts().set(self.posts);
        store.current_page().set(self.current_page);
        store.has_more().set(self.has_more);
    }
}

/// Lenient wire form: missing or null fields fall back to a fresh list
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRecord {
    #[serde(default)]
    posts: Option<Vec<Post>>,
    #[serde(default)]
    current_page: Option<u32>,
    #[serde(default)]
    has_more: Option<bool>,
}

impl From<SnapshotRecord> for PostsSnapshot {
    fn from(record: SnapshotRecord) -> Self {
        Self {
            posts: record.posts.unwrap_or_default(),
            current_page: record.current_page.filter(|p| *p > 0).unwrap_or(1),
            has_more: record.has_more.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32) -> Post {
        Post { user_id: 1, id, title: format!("title {}", id), body: String::new() }
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = PostsSnapshot { posts: vec![post(1)], current_page: 2, has_more: false };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["hasMore"], false);
        assert_eq!(json["posts"][0]["userId"], 1);
    }

    #[test]
    fn test_snapshot_missing_fields() {
        let snapshot: PostsSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.posts.is_empty());
        assert_eq!(snapshot.current_page, 1);
        assert!(snapshot.has_more);
    }

    #[test]
    fn test_snapshot_null_and_zero_fields() {
        let snapshot: PostsSnapshot =
            serde_json::from_str(r#"{"posts":null,"currentPage":0,"hasMore":null}"#).unwrap();
        assert!(snapshot.posts.is_empty());
        assert_eq!(snapshot.current_page, 1);
        assert!(snapshot.has_more);
    }

    #[test]
    fn test_capture_and_apply() {
        let store = Store::new(PostsState::new());
        PostsSnapshot { posts: vec![post(1), post(2)], current_page: 3, has_more: false }
            .apply(&store);

        let captured = PostsSnapshot::capture(&store);
        assert_eq!(captured.posts.len(), 2);
        assert_eq!(captured.current_page, 3);
        assert!(!captured.has_more);
        // loading/error are not part of the snapshot
        assert!(!store.loading().get_untracked());
        assert_eq!(store.error().get_untracked(), None);
    }
}
