//! Data Loaders
//!
//! Component-scoped state containers over the blog API.

mod post;
mod posts;

pub use post::use_post;
pub use posts::{use_posts, UsePosts};
