//! Page layout shell for Leptos applications.
//!
//! [`AppShell`] wraps your routes with the app nav bar, the footer, a loading state while the
//! current user is being fetched, and a "server unreachable" banner when that fetch fails.
//! Pages under `/chat` get a bare frame without footer. On top of that the shell keeps the
//! user's "last active" timestamp fresh and scrolls to the element named by the URL hash.
//!
//! ## Usage
//!
//! Provide the contexts in your root component and wrap your routes:
//!
//! ```ignore
//! use leptos::prelude::*;
//! use leptos_app_shell::{AppShell, provide_auth_context};
//! use leptos_meta::provide_meta_context;
//! use leptos_router::{components::{Route, Router, Routes}, path};
//!
//! #[component]
//! pub fn App() -> impl IntoView {
//!     // The shell toggles a class on <body> through leptos_meta
//!     provide_meta_context();
//!
//!     // Queries the current user through the `current_user` server function
//!     provide_auth_context();
//!
//!     view! {
//!         <Router>
//!             <AppShell>
//!                 <Routes fallback=|| "Page not found.".into_view()>
//!                     <Route path=path!("/") view=Landing />
//!                     <Route path=path!("/chat") view=Chat />
//!                 </Routes>
//!             </AppShell>
//!         </Router>
//!     }
//! }
//! ```
//!
//! The display name in the footer comes from the `APP_NAME` environment variable at build
//! time. Override it at runtime with [`provide_shell_config`].
//!
//! On the server, provide a `UserStore` and the `SessionUser` of the request to the
//! Leptos context. How a request maps to a user is up to your auth layer:
//!
//! ```ignore
//! let users = UserStore::new();
//!
//! let app = Router::new()
//!     .leptos_routes_with_context(
//!         &state,
//!         routes,
//!         {
//!             let users = users.clone();
//!             move || {
//!                 provide_context(users.clone());
//!                 if let Some(id) = session_user_id() {
//!                     provide_context(SessionUser(id));
//!                 }
//!             }
//!         },
//!         move || shell(leptos_options.clone()),
//!     )
//!     .with_state(state);
//! ```

pub mod activity;
pub mod auth;
pub mod components;
pub mod config;
pub mod footer;
pub mod route;
pub mod shell;

pub use crate::auth::*;
pub use crate::config::{ShellConfig, provide_shell_config};
pub use crate::footer::FooterWrapper;
pub use crate::shell::AppShell;
