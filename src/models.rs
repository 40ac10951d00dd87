//! Frontend Models
//!
//! Data structures matching the JSONPlaceholder API.

use serde::{Deserialize, Serialize};

/// Post data structure (matches `/posts`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Comment data structure (matches `/posts/{id}/comments`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u32,
    pub id: u32,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Query for one page of posts. Zero values count as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub user_id: Option<u32>,
}

impl PostsQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[cfg(test)]
    pub fn with_user(mut self, user_id: u32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Requested page, 1 when unset
    pub fn resolved_page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// Requested page size, `default_limit` when unset
    pub fn resolved_limit(&self, default_limit: u32) -> u32 {
        self.limit.filter(|l| *l > 0).unwrap_or(default_limit)
    }

    /// Query string pairs in json-server's `_page`/`_limit` convention
    pub fn to_params(&self, default_limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("_page", self.resolved_page().to_string()),
            ("_limit", self.resolved_limit(default_limit).to_string()),
        ];
        if let Some(user_id) = self.user_id.filter(|u| *u > 0) {
            params.push(("userId", user_id.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialization() {
        let json = r#"{"userId":1,"id":3,"title":"ea molestias","body":"et iusto"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 3);
        assert_eq!(post.title, "ea molestias");
    }

    #[test]
    fn test_comment_deserialization() {
        let json = r#"{"postId":1,"id":2,"name":"quo vero","email":"Jayne@kuhic.sh","body":"est natus"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.post_id, 1);
        assert_eq!(comment.email, "Jayne@kuhic.sh");
    }

    #[test]
    fn test_query_defaults() {
        let query = PostsQuery::default();
        assert_eq!(query.resolved_page(), 1);
        assert_eq!(query.resolved_limit(10), 10);
        assert_eq!(
            query.to_params(10),
            vec![("_page", "1".to_string()), ("_limit", "10".to_string())]
        );
    }

    #[test]
    fn test_query_zero_counts_as_unset() {
        let query = PostsQuery { page: Some(0), limit: Some(0), user_id: Some(0) };
        assert_eq!(query.resolved_page(), 1);
        assert_eq!(query.resolved_limit(10), 10);
        assert_eq!(query.to_params(10).len(), 2);
    }

    #[test]
    fn test_query_with_user_filter() {
        let params = PostsQuery::page(3).with_limit(5).with_user(7).to_params(10);
        assert_eq!(
            params,
            vec![
                ("_page", "3".to_string()),
                ("_limit", "5".to_string()),
                ("userId", "7".to_string()),
            ]
        );
    }
}
