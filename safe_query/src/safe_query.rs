use crate::{ErrorViewFn, QueryView};
use leptos::*;
use leptos_query::{use_query, QueryKey, QueryOptions, QueryResult, QueryValue, RefetchFn};
use std::fmt::Debug;
use std::future::Future;

/// Runs a query and renders its loading, error or success state.
///
/// The fetcher returns a `Result`; an `Err` is treated as a failed query.
/// Exactly one of the following is rendered, checked in order:
///
/// 1. `loading_fallback` while the query is fetching, including background refetches
///    that still hold stale data or a previous error.
/// 2. `error_fallback` with the error, or nothing if no error fallback was given.
/// 3. `children` with the data.
/// 4. Nothing, if the query has not produced a value yet.
///
/// The query client must be provided higher up with
/// [`provide_query_client`](leptos_query::provide_query_client).
///
/// Example
/// ```
/// use leptos::*;
/// use safe_query::SafeQuery;
/// use serde::*;
///
/// #[derive(Debug, Clone, Hash, Eq, PartialEq)]
/// struct UserId(u32);
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct User {
///     name: String,
/// }
///
/// async fn get_user(id: UserId) -> Result<User, String> {
///     todo!()
/// }
///
/// #[component]
/// fn UserName(id: UserId) -> impl IntoView {
///     view! {
///         <SafeQuery
///             key=move || id.clone()
///             fetcher=get_user
///             loading_fallback=|| view! { <p>"Loading..."</p> }
///             error_fallback=|error: String| view! { <p>"Error: " {error}</p> }
///             let:user
///         >
///             <h2>{user.name}</h2>
///         </SafeQuery>
///     }
/// }
/// ```
#[component]
pub fn SafeQuery<K, T, E, Fu, KF, FF, C, N>(
    /// Reactive key of the query.
    key: KF,
    /// Fetches the value for a key.
    fetcher: FF,
    /// Forwarded untouched to [`use_query`]. Defaults to the client's default options.
    #[prop(optional)]
    options: Option<QueryOptions<Result<T, E>>>,
    /// Renders the data.
    children: C,
    /// Shown while the query is fetching.
    #[prop(optional, into)]
    loading_fallback: ViewFn,
    /// Renders the error of a failed query.
    #[prop(optional, into)]
    error_fallback: Option<ErrorViewFn<E>>,
) -> impl IntoView
where
    K: QueryKey + 'static,
    T: Clone + 'static,
    E: Clone + Debug + 'static,
    Result<T, E>: QueryValue,
    Fu: Future<Output = Result<T, E>> + 'static,
    KF: Fn() -> K + 'static,
    FF: Fn(K) -> Fu + 'static,
    C: Fn(T) -> N + 'static,
    N: IntoView + 'static,
{
    let result = use_query(key, fetcher, options.unwrap_or_default());

    safe_query_view(result, children, loading_fallback, error_fallback)
}

/// Renders an existing query the same way [`SafeQuery`] does.
///
/// Useful with queries created through [`create_query`](leptos_query::create_query).
pub fn safe_query_view<T, E, R, C, N>(
    result: QueryResult<Result<T, E>, R>,
    children: C,
    loading_fallback: ViewFn,
    error_fallback: Option<ErrorViewFn<E>>,
) -> impl IntoView
where
    T: Clone + 'static,
    E: Clone + Debug + 'static,
    R: RefetchFn,
    C: Fn(T) -> N + 'static,
    N: IntoView,
{
    let query_view = use_query_view(result.data, result.is_fetching);

    move || {
        query_view.get().render(
            |data| children(data).into_view(),
            || Some(loading_fallback.run()),
            |error| match &error_fallback {
                Some(error_fallback) => Some(error_fallback.run(error)),
                None => {
                    logging::debug_warn!("Query failed with no error fallback: {error:?}");
                    None
                }
            },
        )
    }
}

/// Derives the [`QueryView`] of a query from its reactive data and fetching flag.
pub fn use_query_view<T, E>(
    data: Signal<Option<Result<T, E>>>,
    is_fetching: Signal<bool>,
) -> Signal<QueryView<T, E>>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    Signal::derive(move || {
        // Reading data first starts the query if it hasn't run yet.
        let data = data.get();
        QueryView::from_parts(is_fetching.get(), data)
    })
}
