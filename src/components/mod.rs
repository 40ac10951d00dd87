//! UI Components
//!
//! Leptos components over the post loaders.

mod post_detail;
mod post_list;

pub use post_detail::PostDetail;
pub use post_list::PostList;
