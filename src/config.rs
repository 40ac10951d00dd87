//! Blog Configuration
//!
//! Runtime settings shared with components via Leptos context.

use leptos::prelude::*;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Number of posts JSONPlaceholder serves
pub const DEFAULT_TOTAL_POSTS: u32 = 100;
pub const POSTS_STORAGE_KEY: &str = "nuxt-blog-posts";
pub const SCROLL_STORAGE_KEY: &str = "nuxt-blog-scroll";
pub const DEFAULT_SCROLL_RESTORE_DELAY_MS: u32 = 100;

/// How the list loader decides whether another page exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageEnd {
    /// Collection size is known up front
    KnownTotal(u32),
    /// More pages exist until one comes back shorter than the limit
    ShortPage,
}

impl PageEnd {
    pub fn has_more(&self, page: u32, limit: u32, returned: usize) -> bool {
        if returned == 0 {
            return false;
        }
        match *self {
            PageEnd::KnownTotal(total) => u64::from(page) * u64::from(limit) < u64::from(total),
            PageEnd::ShortPage => returned >= limit as usize,
        }
    }
}

impl Default for PageEnd {
    fn default() -> Self {
        PageEnd::KnownTotal(DEFAULT_TOTAL_POSTS)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub page_end: PageEnd,
    pub posts_storage_key: String,
    pub scroll_storage_key: String,
    pub scroll_restore_delay_ms: u32,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_end: PageEnd::default(),
            posts_storage_key: POSTS_STORAGE_KEY.to_string(),
            scroll_storage_key: SCROLL_STORAGE_KEY.to_string(),
            scroll_restore_delay_ms: DEFAULT_SCROLL_RESTORE_DELAY_MS,
        }
    }
}

/// Get the blog config from context, or the defaults when none was provided
pub fn use_blog_config() -> BlogConfig {
    use_context::<BlogConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_total_last_page() {
        let policy = PageEnd::KnownTotal(100);
        assert!(policy.has_more(9, 10, 10));
        assert!(!policy.has_more(10, 10, 10));
    }

    #[test]
    fn test_empty_page_ends_list() {
        assert!(!PageEnd::KnownTotal(100).has_more(1, 10, 0));
        assert!(!PageEnd::ShortPage.has_more(1, 10, 0));
    }

    #[test]
    fn test_short_page_policy() {
        assert!(PageEnd::ShortPage.has_more(4, 10, 10));
        assert!(!PageEnd::ShortPage.has_more(5, 10, 3));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BlogConfig =
            serde_json::from_str(r#"{"page_size": 20, "page_end": "short_page"}"#).unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.page_end, PageEnd::ShortPage);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.posts_storage_key, POSTS_STORAGE_KEY);
        assert_eq!(config.scroll_restore_delay_ms, 100);
    }

    #[test]
    fn test_known_total_from_json() {
        let config: BlogConfig =
            serde_json::from_str(r#"{"page_end": {"known_total": 42}}"#).unwrap();
        assert_eq!(config.page_end, PageEnd::KnownTotal(42));
    }
}
