use canteen_core::directory::search;
use canteen_core::errors::{CanteenError, CanteenResult};
use canteen_db::repositories::canteen::{get_all_canteens, get_canteen_by_id};
use canteen_db::KeyValueStore;

use super::HandlerContext;
use crate::commands::ListArgs;
use crate::output::{render_detail, render_list};

pub fn list_canteens<S>(ctx: &HandlerContext<'_, S>, args: &ListArgs) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let canteens = get_all_canteens(ctx.store)?;
    let term = args.search.as_deref().unwrap_or("");
    let matches = search(&canteens, term, args.open_only);

    Ok(render_list(&matches, ctx.now))
}

pub fn show_canteen<S>(ctx: &HandlerContext<'_, S>, id: &str) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let canteen = get_canteen_by_id(ctx.store, id)?
        .ok_or_else(|| CanteenError::NotFound(format!("Canteen {} not found", id)))?;

    Ok(render_detail(&canteen, ctx.now))
}
