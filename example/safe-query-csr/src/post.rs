use std::time::Duration;

use leptos::*;
use leptos_query::{create_query, QueryOptions, QueryScope};
use safe_query::{safe_query_view, SafeQuery};
use serde::*;
use thiserror::Error;

#[component]
pub fn PostPage() -> impl IntoView {
    let post_id = create_rw_signal(1_u32);

    view! {
        <div>
            <div class="w-24">
                <label class="text-sm font-medium leading-none" for="post-id">
                    Post ID
                </label>
                <input
                    type="number"
                    id="post-id"
                    on:input=move |ev| {
                        let new_post = event_target_value(&ev).parse().unwrap_or(0);
                        post_id.set(new_post);
                    }

                    prop:value=move || post_id.get()
                    class="flex h-9 w-full rounded-md border bg-transparent px-3 py-1 text-sm"
                />
            </div>
            <SafeQuery
                key=move || PostId(post_id.get())
                fetcher=fetch_post
                loading_fallback=|| view! { <PostSkeleton/> }
                error_fallback=|error: FetchError| view! { <FetchFailed error/> }
                let:post
            >
                <Post post/>
            </SafeQuery>
        </div>
    }
}

/// Same query through a [`QueryScope`], with a button to trigger a background refetch.
#[component]
pub fn RefetchablePost() -> impl IntoView {
    let result = post_query().use_query(|| PostId(1));
    let refetch = result.refetch.clone();

    view! {
        <div class="flex flex-col items-start gap-2">
            <button class="rounded-md border px-3 py-1 text-sm" on:click=move |_| refetch()>
                "Refetch"
            </button>
            {safe_query_view(
                result,
                |post| view! { <Post post/> },
                (|| view! { <PostSkeleton/> }).into(),
                None,
            )}

        </div>
    }
}

#[component]
fn Post(post: PostValue) -> impl IntoView {
    view! {
        <div class="flex flex-col items-start gap-2 bg-card border rounded-md p-4">
            <div class="space-y-0.5">
                <h2 class="text-2xl font-bold tracking-tight">{post.title}</h2>
                <p class="text-muted-foreground">{post.body}</p>
            </div>
        </div>
    }
}

#[component]
fn FetchFailed(error: FetchError) -> impl IntoView {
    view! {
        <div class="border border-destructive rounded-md p-4 text-destructive">
            {format!("Error: {error}")}
        </div>
    }
}

#[component]
fn PostSkeleton() -> impl IntoView {
    view! {
        <div class="flex flex-col items-start gap-2 bg-card border rounded-md p-4">
            <div class="animate-pulse rounded-md bg-primary/10 h-8 w-full"></div>
            <div class="animate-pulse rounded-md bg-primary/10 h-20 w-full"></div>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PostId(u32);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostValue {
    user_id: u32,
    id: u32,
    title: String,
    body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("post {0} not found")]
    NotFound(u32),

    #[error("malformed response: {0}")]
    Decode(String),
}

fn post_query() -> QueryScope<PostId, Result<PostValue, FetchError>> {
    create_query(fetch_post, QueryOptions::default())
}

async fn fetch_post(id: PostId) -> Result<PostValue, FetchError> {
    gloo_timers::future::sleep(Duration::from_millis(1000)).await;
    log::debug!("Fetching post {}", id.0);

    let response = reqwest::get(&format!(
        "https://jsonplaceholder.typicode.com/posts/{}",
        id.0
    ))
    .await
    .map_err(|e| FetchError::Request(e.to_string()))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound(id.0));
    }

    response
        .json::<PostValue>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
