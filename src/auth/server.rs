use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use leptos::prelude::*;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::auth::{User, UserPatch};

/// Id of the user the current request belongs to.
///
/// Your auth layer resolves the session and provides this into the Leptos context,
/// for example with `leptos_routes_with_context` and `handle_server_fns_with_context`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionUser(pub Uuid);

/// In-memory registry of users that the shell's server functions read and patch.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field(
                "users",
                &self
                    .users
                    .lock()
                    .expect("Failed to acquire lock on user map")
                    .len(),
            )
            .finish()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user.
    pub fn insert(&self, user: User) {
        self.users
            .lock()
            .expect("Failed to acquire lock on user map")
            .insert(user.id, user);
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users
            .lock()
            .expect("Failed to acquire lock on user map")
            .get(&id)
            .cloned()
    }

    #[instrument(skip(self))]
    pub fn apply(&self, id: Uuid, patch: UserPatch) -> anyhow::Result<User> {
        let mut users = self
            .users
            .lock()
            .expect("Failed to acquire lock on user map");

        let user = users
            .get_mut(&id)
            .ok_or_else(|| anyhow!("unknown user {id}"))?;

        patch.apply_to(user);
        debug!("Patched user");

        Ok(user.clone())
    }
}

/// Fetches the [`UserStore`] that the host provided into the server function context.
pub(crate) fn user_store() -> Result<UserStore, ServerFnError> {
    use_context::<UserStore>().ok_or_else(|| {
        tracing::warn!("UserStore missing from server context");
        ServerFnError::new("user store is not available")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ada() -> User {
        User {
            id: Uuid::new_v4(),
            username: "ada".to_string(),
            last_active_timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn apply_patches_stored_user() {
        let store = UserStore::new();
        let user = ada();
        store.insert(user.clone());

        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let updated = store.apply(user.id, UserPatch::last_active(at)).unwrap();

        assert_eq!(updated.last_active_timestamp, at);
        assert_eq!(store.get(user.id), Some(updated));
    }

    #[test]
    fn apply_to_unknown_user_fails() {
        let store = UserStore::new();

        assert!(store.apply(Uuid::new_v4(), UserPatch::default()).is_err());
    }

    #[test]
    fn clones_share_users() {
        let store = UserStore::new();
        let user = ada();

        store.clone().insert(user.clone());

        assert_eq!(store.get(user.id).map(|u| u.username), Some("ada".to_string()));
    }
}
