//! Post Detail Component
//!
//! One post with its comments.

use leptos::prelude::*;

use crate::loaders::use_post;

#[component]
pub fn PostDetail(
    #[prop(into)] post_id: Signal<u32>,
    on_back: Callback<()>,
) -> impl IntoView {
    let loader = use_post(post_id);
    let post = loader.post;
    let comments = loader.comments;
    let loading = loader.loading;
    let error = loader.error;

    view! {
        <article class="post-detail">
            <button class="back-btn" on:click=move |_| on_back.run(())>"← Back"</button>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || post.get().map(|p| view! {
                <h1 class="post-title">{p.title}</h1>
                <p class="post-author">{format!("User #{}", p.user_id)}</p>
                <div class="post-body">{p.body}</div>
            })}

            <section class="comments">
                <h2>{move || format!("Comments ({})", comments.get().len())}</h2>
                <For
                    each=move || comments.get()
                    key=|comment| comment.id
                    children=move |comment| {
                        view! {
                            <div class="comment">
                                <div class="comment-header">
                                    <strong>{comment.name}</strong>
                                    <span class="comment-email">{comment.email}</span>
                                </div>
                                <p class="comment-body">{comment.body}</p>
                            </div>
                        }
                    }
                />
            </section>
        </article>
    }
}
