use leptos::{IntoView, View};
use std::rc::Rc;

/// Renders a query error.
///
/// Any `Fn(E) -> impl IntoView` converts into this, so it can be passed directly as a prop.
pub struct ErrorViewFn<E>(Rc<dyn Fn(E) -> View>);

impl<E> ErrorViewFn<E> {
    /// Renders the error.
    pub fn run(&self, error: E) -> View {
        (self.0)(error)
    }
}

impl<E, F, IV> From<F> for ErrorViewFn<E>
where
    F: Fn(E) -> IV + 'static,
    IV: IntoView,
{
    fn from(value: F) -> Self {
        Self(Rc::new(move |error| value(error).into_view()))
    }
}

impl<E> Clone for ErrorViewFn<E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<E> std::fmt::Debug for ErrorViewFn<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorViewFn").finish_non_exhaustive()
    }
}
