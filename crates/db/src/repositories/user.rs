use canteen_core::models::user::User;
use eyre::{Result, WrapErr};

use crate::store::KeyValueStore;

pub const USERS_KEY: &str = "university_canteen_users";

pub fn get_all_users<S>(store: &S) -> Result<Vec<User>>
where
    S: KeyValueStore + ?Sized,
{
    match store.get(USERS_KEY)? {
        Some(json) => serde_json::from_str(&json).wrap_err("Failed to parse stored users"),
        None => Ok(Vec::new()),
    }
}

pub fn get_user_by_id<S>(store: &S, id: &str) -> Result<Option<User>>
where
    S: KeyValueStore + ?Sized,
{
    Ok(get_all_users(store)?.into_iter().find(|user| user.id == id))
}

/// Exact, case-sensitive match on both username and password.
pub fn find_user_by_credentials<S>(
    store: &S,
    username: &str,
    password: &str,
) -> Result<Option<User>>
where
    S: KeyValueStore + ?Sized,
{
    Ok(get_all_users(store)?
        .into_iter()
        .find(|user| user.username == username && user.password == password))
}
