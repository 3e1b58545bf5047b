use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::server_fn::codec::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod context;
#[cfg(feature = "ssr")]
mod server;

pub use context::*;
#[cfg(feature = "ssr")]
pub use server::{SessionUser, UserStore};

/// The signed-in user as seen by the shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub last_active_timestamp: DateTime<Utc>,
}

/// Partial update of a [`User`]. Fields left as `None` are not touched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_timestamp: Option<DateTime<Utc>>,
}

impl UserPatch {
    /// A patch that only moves the "last active" timestamp.
    pub fn last_active(at: DateTime<Utc>) -> Self {
        Self {
            last_active_timestamp: Some(at),
            ..Default::default()
        }
    }

    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(at) = self.last_active_timestamp {
            user.last_active_timestamp = at;
        }
    }
}

/// Returns the user of the current session, or `None` when nobody is signed in.
#[server]
pub async fn current_user() -> Result<Option<User>, ServerFnError> {
    let store = server::user_store()?;

    Ok(use_context::<SessionUser>().and_then(|SessionUser(id)| store.get(id)))
}

/// Applies `patch` to the user of the current session and returns the updated user.
#[server(input = Json)]
pub async fn update_current_user(patch: UserPatch) -> Result<User, ServerFnError> {
    let store = server::user_store()?;

    let Some(SessionUser(id)) = use_context::<SessionUser>() else {
        return Err(ServerFnError::new("not signed in"));
    };

    store.apply(id, patch).map_err(ServerFnError::new)
}
