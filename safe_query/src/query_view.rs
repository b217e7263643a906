use leptos_query::QueryState;

/// What a [`SafeQuery`](crate::SafeQuery) shows for a single observation of a query.
///
/// The reduction from the engine's state is prioritized:
/// fetching wins over an error, and an error wins over data.
/// This means an error (or stale data) is hidden for as long as a refetch is in flight.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum QueryView<T, E> {
    /// A fetch is in flight, either the first load or a background refetch.
    Fetching,

    /// The last fetch resolved to an error.
    Errored(E),

    /// Not fetching and not errored.
    ///
    /// `None` when the query has not run yet, for example a freshly created or disabled query.
    Settled(Option<T>),
}

impl<T, E> QueryView<T, E> {
    /// Reduces the engine's reported flags to a single view.
    pub fn from_parts(is_fetching: bool, data: Option<Result<T, E>>) -> Self {
        if is_fetching {
            return QueryView::Fetching;
        }
        match data {
            Some(Err(error)) => QueryView::Errored(error),
            Some(Ok(data)) => QueryView::Settled(Some(data)),
            None => QueryView::Settled(None),
        }
    }

    /// Reduces a [`QueryState`] to a view.
    ///
    /// `Loading` and `Fetching` are both in flight, whatever stale data `Fetching` holds.
    pub fn from_state(state: &QueryState<Result<T, E>>) -> Self
    where
        T: Clone,
        E: Clone,
    {
        let is_fetching = matches!(state, QueryState::Loading | QueryState::Fetching(_));
        QueryView::from_parts(is_fetching, state.data().cloned())
    }

    /// Projects the view onto an output.
    ///
    /// `loading` and `on_error` may return `None` to render nothing.
    pub fn render<O>(
        self,
        on_success: impl FnOnce(T) -> O,
        loading: impl FnOnce() -> Option<O>,
        on_error: impl FnOnce(E) -> Option<O>,
    ) -> Option<O> {
        match self {
            QueryView::Fetching => loading(),
            QueryView::Errored(error) => on_error(error),
            QueryView::Settled(Some(data)) => Some(on_success(data)),
            QueryView::Settled(None) => None,
        }
    }

    /// Returns true if a fetch is in flight.
    pub fn is_fetching(&self) -> bool {
        matches!(self, QueryView::Fetching)
    }

    /// Returns true if the last fetch failed and nothing is in flight.
    pub fn is_errored(&self) -> bool {
        matches!(self, QueryView::Errored(_))
    }

    /// Returns true if the query is neither fetching nor errored.
    pub fn is_settled(&self) -> bool {
        matches!(self, QueryView::Settled(_))
    }

    /// The data to render, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryView::Settled(data) => data.as_ref(),
            _ => None,
        }
    }

    /// The error to render, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            QueryView::Errored(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_query::QueryData;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: u32,
    }

    type Fetched = Result<Record, String>;

    fn show(view: QueryView<Record, String>) -> Option<String> {
        view.render(
            |record| format!("ID={}", record.id),
            || Some("Loading...".to_string()),
            |error| Some(format!("Error: {error}")),
        )
    }

    fn show_without_fallbacks(view: QueryView<Record, String>) -> Option<String> {
        view.render(|record| format!("ID={}", record.id), || None, |_| None)
    }

    fn every_value() -> Vec<Option<Fetched>> {
        vec![
            None,
            Some(Ok(Record { id: 1 })),
            Some(Err("network down".to_string())),
        ]
    }

    #[test]
    fn fetching_shows_loading_regardless_of_value() {
        for data in every_value() {
            let view = QueryView::from_parts(true, data.clone());
            assert_eq!(QueryView::Fetching, view, "data: {data:?}");
            assert_eq!(Some("Loading...".to_string()), show(view.clone()));
            assert_eq!(None, show_without_fallbacks(view));
        }
    }

    #[test]
    fn fetching_with_error_shows_loading() {
        let view = QueryView::<Record, String>::from_parts(true, Some(Err("boom".to_string())));

        assert_eq!(Some("Loading...".to_string()), show(view));
    }

    #[test]
    fn error_is_passed_to_error_renderer() {
        let view = QueryView::from_parts(false, Some(Err("network down".to_string())));

        assert!(view.is_errored());
        assert_eq!(Some("Error: network down".to_string()), show(view));
    }

    #[test]
    fn error_without_renderer_is_swallowed() {
        let view = QueryView::from_parts(false, Some(Err("network down".to_string())));

        assert_eq!(None, show_without_fallbacks(view));
    }

    #[test]
    fn success_is_passed_to_success_renderer() {
        let view = QueryView::from_parts(false, Some(Ok(Record { id: 1 })));

        assert_eq!(Some(&Record { id: 1 }), view.data());
        assert_eq!(Some("ID=1".to_string()), show(view));
    }

    #[test]
    fn missing_data_renders_nothing() {
        let view = QueryView::<Record, String>::from_parts(false, None);

        assert_eq!(QueryView::Settled(None), view);
        assert_eq!(None, show(view.clone()));
        assert_eq!(None, show_without_fallbacks(view));
    }

    #[test]
    fn render_is_idempotent() {
        for is_fetching in [true, false] {
            for data in every_value() {
                let view = QueryView::from_parts(is_fetching, data);
                assert_eq!(show(view.clone()), show(view));
            }
        }
    }

    #[test]
    fn predicates_are_exclusive() {
        for is_fetching in [true, false] {
            for data in every_value() {
                let view = QueryView::from_parts(is_fetching, data);
                let flags = [view.is_fetching(), view.is_errored(), view.is_settled()];
                assert_eq!(1, flags.iter().filter(|f| **f).count(), "{view:?}");
            }
        }
    }

    #[test]
    fn from_state_matches_from_parts() {
        let loaded = QueryData::now(Ok::<_, String>(Record { id: 1 }));
        let failed = QueryData::now(Err::<Record, _>("network down".to_string()));

        assert_eq!(
            QueryView::Settled(None),
            QueryView::from_state(&QueryState::<Fetched>::Created)
        );
        assert_eq!(
            QueryView::Fetching,
            QueryView::from_state(&QueryState::<Fetched>::Loading)
        );
        assert_eq!(
            QueryView::Fetching,
            QueryView::from_state(&QueryState::Fetching(loaded.clone()))
        );
        assert_eq!(
            QueryView::Fetching,
            QueryView::from_state(&QueryState::Fetching(failed.clone()))
        );
        assert_eq!(
            QueryView::Settled(Some(Record { id: 1 })),
            QueryView::from_state(&QueryState::Loaded(loaded.clone()))
        );
        assert_eq!(
            QueryView::Settled(Some(Record { id: 1 })),
            QueryView::from_state(&QueryState::Invalid(loaded))
        );
        assert_eq!(
            QueryView::Errored("network down".to_string()),
            QueryView::from_state(&QueryState::Loaded(failed))
        );
    }
}
