use chrono::{DateTime, Utc};
use leptos::{prelude::*, task::spawn_local};

use crate::auth::{AuthContext, User, UserPatch, update_current_user};

/// How long a "last active" timestamp stays fresh before the shell refreshes it.
pub const LAST_ACTIVE_REFRESH_MS: i64 = 5 * 60 * 1000;

/// `true` if more than [`LAST_ACTIVE_REFRESH_MS`] have passed since `last_active`.
pub fn is_stale(last_active: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(last_active).num_milliseconds() > LAST_ACTIVE_REFRESH_MS
}

/// Hands `send` a patch moving the "last active" timestamp to `now`, if `user` is
/// present and stale. Otherwise `send` is not called.
pub fn refresh_if_stale(user: Option<&User>, now: DateTime<Utc>, send: impl FnOnce(UserPatch)) {
    let Some(user) = user else {
        return;
    };

    if is_stale(user.last_active_timestamp, now) {
        send(UserPatch::last_active(now));
    }
}

/// Whenever the signed-in user changes, push a new "last active" timestamp if the
/// stored one is stale.
///
/// The update is fire-and-forget: it is not retried or cancelled, and a failure only
/// produces a warning in the console. Losing one heartbeat is harmless.
pub fn track_last_active(auth: AuthContext) {
    Effect::new(move || {
        let user = auth.user.get();

        refresh_if_stale(user.as_ref(), Utc::now(), |patch| {
            spawn_local(async move {
                if let Err(err) = update_current_user(patch).await {
                    leptos::logging::warn!("Failed to update last active timestamp: {}", err);
                }
            });
        });
    });
}
