use canteen_core::directory::{admin_stats, ensure_admin};
use canteen_core::errors::CanteenResult;
use canteen_db::repositories::canteen::get_all_canteens;
use canteen_db::KeyValueStore;

use super::session::require_user;
use super::HandlerContext;
use crate::output::render_stats;

pub fn stats<S>(ctx: &HandlerContext<'_, S>) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let user = require_user(ctx)?;
    ensure_admin(&user)?;

    let canteens = get_all_canteens(ctx.store)?;
    Ok(render_stats(&admin_stats(&canteens)))
}
