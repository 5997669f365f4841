//! The signed-in user, persisted under its own key.

use canteen_core::errors::{CanteenError, CanteenResult};
use canteen_core::models::user::User;
use eyre::{Result, WrapErr};
use tracing::{info, warn};

use super::user::find_user_by_credentials;
use crate::store::KeyValueStore;

pub const CURRENT_USER_KEY: &str = "university_canteen_current_user";

/// Checks the credentials against the stored users and records the match as the session.
pub fn login<S>(store: &S, username: &str, password: &str) -> CanteenResult<User>
where
    S: KeyValueStore + ?Sized,
{
    let Some(user) = find_user_by_credentials(store, username, password)? else {
        warn!("Login failed for username={}", username);
        return Err(CanteenError::Authentication(
            "Invalid username or password".to_string(),
        ));
    };

    let json = serde_json::to_string(&user).map_err(eyre::Report::from)?;
    store.set(CURRENT_USER_KEY, &json)?;
    info!("Logged in: username={}, role={}", user.username, user.role);
    Ok(user)
}

pub fn logout<S>(store: &S) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    store.remove(CURRENT_USER_KEY)?;
    info!("Logged out");
    Ok(())
}

pub fn current_user<S>(store: &S) -> Result<Option<User>>
where
    S: KeyValueStore + ?Sized,
{
    match store.get(CURRENT_USER_KEY)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .wrap_err("Failed to parse stored session"),
        None => Ok(None),
    }
}
