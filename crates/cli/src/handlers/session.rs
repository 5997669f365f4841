use canteen_core::errors::{CanteenError, CanteenResult};
use canteen_core::models::user::User;
use canteen_db::repositories::session;
use canteen_db::KeyValueStore;

use super::HandlerContext;
use crate::output::render_user;

pub fn login<S>(
    ctx: &HandlerContext<'_, S>,
    username: &str,
    password: &str,
) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let user = session::login(ctx.store, username, password)?;
    Ok(format!("Logged in as {}", render_user(&user)))
}

pub fn logout<S>(ctx: &HandlerContext<'_, S>) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    session::logout(ctx.store)?;
    Ok("Logged out".to_string())
}

pub fn whoami<S>(ctx: &HandlerContext<'_, S>) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    Ok(match session::current_user(ctx.store)? {
        Some(user) => render_user(&user),
        None => "Not logged in".to_string(),
    })
}

/// The signed-in user, or an authentication error when nobody is.
pub fn require_user<S>(ctx: &HandlerContext<'_, S>) -> CanteenResult<User>
where
    S: KeyValueStore + ?Sized,
{
    session::current_user(ctx.store)?
        .ok_or_else(|| CanteenError::Authentication("Please log in first".to_string()))
}
