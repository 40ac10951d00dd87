//! Post List Component
//!
//! Infinitely scrolling list of posts. Restores the previous list and scroll
//! offset when remounted within the same session.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::loaders::{use_posts, UsePosts};
use crate::models::PostsQuery;

/// Distance from the page bottom (px) at which the next page is requested
const LOAD_MORE_THRESHOLD: f64 = 300.0;

fn near_page_bottom() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let viewport_bottom = window.scroll_y().unwrap_or(0.0)
        + window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
    let page_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0);
    page_height > 0.0 && viewport_bottom >= page_height - LOAD_MORE_THRESHOLD
}

fn spawn_load_more(loader: StoredValue<UsePosts, LocalStorage>) {
    if let Some(loader) = loader.try_get_value() {
        spawn_local(async move {
            let _ = loader.load_more().await;
        });
    }
}

#[component]
pub fn PostList(set_selected_post: WriteSignal<u32>) -> impl IntoView {
    let posts = use_posts();
    let state = posts.view();
    let loader = StoredValue::new_local(posts);

    // Remount within the session: reuse the saved list instead of refetching
    let restored = loader.with_value(|l| l.restore_state());
    if restored {
        loader.with_value(|l| {
            l.restore_scroll_position();
        });
    } else {
        let l = loader.get_value();
        spawn_local(async move {
            let _ = l.fetch_posts(PostsQuery::default()).await;
        });
    }

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        if near_page_bottom() {
            spawn_load_more(loader);
        }
    });
    on_cleanup(move || scroll_handle.remove());

    let on_refresh = move |_| {
        let l = loader.get_value();
        spawn_local(async move {
            let _ = l.refresh().await;
        });
    };

    view! {
        <section class="post-list">
            <header class="post-list-header">
                <h1>"Posts"</h1>
                <button
                    class="refresh-btn"
                    disabled=move || state.loading.get()
                    on:click=on_refresh
                >
                    "Refresh"
                </button>
            </header>

            <Show when=move || state.error.get().is_some()>
                <p class="error">{move || state.error.get().unwrap_or_default()}</p>
            </Show>

            <ul class="posts">
                <For
                    each=move || state.posts.get()
                    key=|post| post.id
                    children=move |post| {
                        let id = post.id;
                        view! {
                            <li
                                class="post-card"
                                on:click=move |_| {
                                    loader.with_value(|l| {
                                        l.save_scroll_position();
                                    });
                                    set_selected_post.set(id);
                                }
                            >
                                <h2 class="post-title">{post.title}</h2>
                                <p class="post-excerpt">{post.body}</p>
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || state.loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show
                when=move || state.has_more.get()
                fallback=|| view! { <p class="list-end">"No more posts"</p> }
            >
                <button
                    class="load-more-btn"
                    disabled=move || state.loading.get()
                    on:click=move |_| spawn_load_more(loader)
                >
                    {move || format!("Load more (page {})", state.current_page.get() + 1)}
                </button>
            </Show>
        </section>
    }
}
