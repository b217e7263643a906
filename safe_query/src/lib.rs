#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # About Safe Query
//!
//! Loading, error and success rendering for [Leptos Query](https://crates.io/crates/leptos_query).
//!
//! [`SafeQuery`] runs a query whose fetcher returns a `Result` and renders exactly one of:
//! - a loading fallback while the query is fetching
//! - an error fallback when the query failed
//! - its children with the data once it is available
//!
//! Fetching always wins. While a background refetch is in flight the loading fallback is shown,
//! even if the query still holds stale data or a previous error.
//!
//! Caching, de-duplication, invalidation and refetching are all handled by `leptos_query`.
//!
//! # Feature Flags
//! - `csr` Client-side rendering: Use queries on the client.
//! - `ssr` Server-side rendering: Initiate queries on the server.
//! - `hydrate` Hydration: Ensure that queries are hydrated on the client, when using server-side rendering.
//!
//! # A Simple Example
//!
//! Provide a query client in the root of your App.
//!
//! ```rust
//! use leptos::*;
//! use safe_query::leptos_query::provide_query_client;
//!
//! #[component]
//! pub fn App() -> impl IntoView {
//!     provide_query_client();
//!
//!     // Rest of App...
//! }
//! ```
//!
//! Then render a query anywhere below it.
//!
//! ```rust
//! use leptos::*;
//! use safe_query::SafeQuery;
//! use serde::*;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Track {
//!     name: String,
//! }
//!
//! async fn get_track(id: u32) -> Result<Track, String> {
//!     todo!()
//! }
//!
//! #[component]
//! fn TrackView(id: u32) -> impl IntoView {
//!     view! {
//!         <SafeQuery
//!             key=move || id
//!             fetcher=get_track
//!             loading_fallback=|| view! { <h2>"Loading..."</h2> }
//!             error_fallback=|error: String| view! { <h2>{error}</h2> }
//!             let:track
//!         >
//!             <h2>{track.name}</h2>
//!         </SafeQuery>
//!     }
//! }
//! ```

mod error_view_fn;
mod query_view;
mod safe_query;

pub use error_view_fn::*;
pub use query_view::*;
pub use safe_query::*;

pub use leptos_query;
