use leptos::*;
use leptos_query::{provide_query_client_with_options, DefaultQueryOptions, ResourceOption};

mod post;

use crate::post::{PostPage, RefetchablePost};

#[component]
pub fn App() -> impl IntoView {
    // Provide the query client with options to use local resource.
    provide_query_client_with_options(DefaultQueryOptions {
        resource_option: ResourceOption::Local,
        ..DefaultQueryOptions::default()
    });

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <h1>"Uh oh! Something went wrong!"</h1>
                <ul>
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                    }}

                </ul>
            }
        }>
            <main class="flex flex-col gap-8 p-6">
                <PostPage/>
                <RefetchablePost/>
            </main>
        </ErrorBoundary>
    }
}
