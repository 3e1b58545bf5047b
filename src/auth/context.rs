use leptos::prelude::*;

use crate::auth::{User, current_user};

/// Reactive view of the auth query: loading, failed, or done with an optional user.
/// You probably don't want to build this directly, but rather use [`provide_auth_context`]
/// and read it back with [`expect_auth_context`].
#[derive(Copy, Clone)]
pub struct AuthContext {
    pub user: Signal<Option<User>>,
    pub is_loading: Signal<bool>,
    pub is_error: Signal<bool>,
}

impl AuthContext {
    /// Builds a context from arbitrary signals, e.g. when the host has its own session source.
    pub fn new(
        user: impl Into<Signal<Option<User>>>,
        is_loading: impl Into<Signal<bool>>,
        is_error: impl Into<Signal<bool>>,
    ) -> Self {
        Self {
            user: user.into(),
            is_loading: is_loading.into(),
            is_error: is_error.into(),
        }
    }

    fn from_query() -> Self {
        let query = Resource::new(|| (), |_| current_user());

        // Memoized so subscribers only rerun when the user actually changes.
        let user = Memo::new(move |_| query.get().and_then(Result::ok).flatten());

        Self {
            user: user.into(),
            is_loading: Signal::derive(move || query.get().is_none()),
            is_error: Signal::derive(move || matches!(query.get(), Some(Err(_)))),
        }
    }
}

/// Call this in your root component to query the current user and provide the auth context.
#[inline(always)]
pub fn provide_auth_context() {
    provide_context(AuthContext::from_query());
}

/// Call this when a component needs the current user or the auth query state.
#[inline(always)]
pub fn expect_auth_context() -> AuthContext {
    expect_context()
}
