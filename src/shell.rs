use leptos::{either::Either, prelude::*};
use leptos_meta::Body;
use leptos_router::hooks::use_location;

use crate::{
    activity::track_last_active,
    auth::expect_auth_context,
    components::{AppNavBar, LoadingIndicator, ServerUnreachable},
    footer::FooterWrapper,
    route::{RouteAnchor, RouteFlags},
};

/// Class put on `<body>` while the auth query is failing.
pub const SERVER_ERROR_CLASS: &str = "server-error";

/// What the width-constrained wrapper of the standard frame shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameContent {
    Children,
    Loading,
}

impl FrameContent {
    /// A failed auth query still renders the page; only a pending one shows the loader.
    pub fn choose(is_error: bool, is_loading: bool) -> Self {
        if !is_error && is_loading {
            Self::Loading
        } else {
            Self::Children
        }
    }
}

/// Next value of the server-error marker.
///
/// An error always sets it. It is cleared only once the standard frame renders its
/// children normally; while loading, and on chat pages, it keeps its previous value.
pub fn next_server_error(previous: bool, is_error: bool, is_loading: bool, is_chat: bool) -> bool {
    if is_error {
        true
    } else if is_chat || is_loading {
        previous
    } else {
        false
    }
}

/// Binds the server-error marker to the single [`SERVER_ERROR_CLASS`] class, leaving any
/// other class on the element alone.
pub fn server_error_class(
    marker: Signal<bool>,
) -> (&'static str, impl Fn() -> bool + Copy + Send + Sync + 'static) {
    (SERVER_ERROR_CLASS, move || marker.get())
}

/// Wraps page content with the nav bar, footer, loading state and server-error banner.
///
/// Expects an [`AuthContext`](crate::AuthContext) (see [`provide_auth_context`](crate::provide_auth_context)),
/// a router, and a `leptos_meta` context from `provide_meta_context()`.
#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let auth = expect_auth_context();
    let location = use_location();

    let flags = Memo::new(move |_| RouteFlags::from_path(&location.pathname.get()));
    let is_chat = Memo::new(move |_| flags.get().is_chat);

    let server_error = Memo::new(move |previous: Option<&bool>| {
        next_server_error(
            previous.copied().unwrap_or(false),
            auth.is_error.get(),
            auth.is_loading.get(),
            is_chat.get(),
        )
    });

    track_last_active(auth);
    scroll_to_anchor(Memo::new(move |_| {
        RouteAnchor::new(&location.pathname.get(), &location.hash.get())
    }));

    let show_nav_bar = move || flags.get().show_nav_bar;

    view! {
        <Body {..} class=server_error_class(server_error.into()) />

        <div class="bg-gradient-to-b from-hero-gradient-start via-hero-gradient-middle to-secondary min-h-screen dark:text-white dark:bg-boxdark-2">
            // Reads the auth resource
            <Transition>
                <Show when=move || auth.is_error.get()>
                    <ServerUnreachable />
                </Show>
            </Transition>

            {move || {
                let children = children.clone();

                if is_chat.get() {
                    Either::Left(
                        view! {
                            <Show when=show_nav_bar>
                                <AppNavBar />
                            </Show>
                            {children()}
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <div class="flex relative flex-col justify-between min-h-screen">
                                <Show when=show_nav_bar>
                                    <AppNavBar />
                                </Show>
                                <div class="mx-auto w-full max-w-7xl sm:px-6 lg:px-8">
                                    <Transition fallback=|| view! { <LoadingIndicator /> }>
                                        {move || match FrameContent::choose(
                                            auth.is_error.get(),
                                            auth.is_loading.get(),
                                        ) {
                                            FrameContent::Children => Either::Left(children()),
                                            FrameContent::Loading => {
                                                Either::Right(view! { <LoadingIndicator /> })
                                            }
                                        }}
                                    </Transition>
                                </div>
                                <FooterWrapper />
                            </div>
                        },
                    )
                }
            }}
        </div>
    }
}

/// Scrolls the anchored element into view after every navigation that lands on an anchor.
fn scroll_to_anchor(anchor: Memo<Option<RouteAnchor>>) {
    Effect::new(move || {
        let Some(RouteAnchor { id, .. }) = anchor.get() else {
            return;
        };

        let Some(document) = window().document() else {
            return;
        };

        match document.get_element_by_id(&id) {
            Some(element) => element.scroll_into_view(),
            None => leptos::logging::log!("No element with id {:?} to scroll to", id),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_beats_loading() {
        assert_eq!(FrameContent::choose(true, true), FrameContent::Children);
        assert_eq!(FrameContent::choose(true, false), FrameContent::Children);
        assert_eq!(FrameContent::choose(false, true), FrameContent::Loading);
        assert_eq!(FrameContent::choose(false, false), FrameContent::Children);
    }

    #[test]
    fn error_sets_marker() {
        assert!(next_server_error(false, true, false, false));
        assert!(next_server_error(false, true, true, false));
        assert!(next_server_error(false, true, false, true));
    }

    #[test]
    fn settled_query_clears_marker() {
        assert!(!next_server_error(true, false, false, false));
        assert!(!next_server_error(false, false, false, false));
    }

    #[test]
    fn loading_keeps_marker() {
        assert!(next_server_error(true, false, true, false));
        assert!(!next_server_error(false, false, true, false));
    }

    #[test]
    fn chat_page_never_clears_marker() {
        assert!(next_server_error(true, false, false, true));
        assert!(!next_server_error(false, false, false, true));
    }
}
