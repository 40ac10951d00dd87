//! Blog Frontend App
//!
//! Switches between the post list and a single post.

use leptos::prelude::*;

use crate::components::{PostDetail, PostList};
use crate::config::BlogConfig;

#[component]
pub fn App() -> impl IntoView {
    // 0 = list view
    let (selected_post, set_selected_post) = signal(0u32);

    provide_context(BlogConfig::default());

    let on_back = Callback::new(move |_| set_selected_post.set(0));

    view! {
        <main class="blog">
            <Show
                when=move || selected_post.get() != 0
                fallback=move || view! { <PostList set_selected_post=set_selected_post /> }
            >
                <PostDetail post_id=selected_post on_back=on_back />
            </Show>
        </main>
    }
}
