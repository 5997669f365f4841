//! Commands an owner runs against the canteen they manage.

use canteen_core::directory::managed_canteen_id;
use canteen_core::errors::{CanteenError, CanteenResult};
use canteen_core::hours::format_shift;
use canteen_core::models::canteen::{Canteen, MAX_MENU_IMAGES};
use canteen_core::models::menu::MenuItem;
use canteen_core::models::schedule::{DayOfWeek, Shift};
use canteen_core::validation::{
    validate_canteen_details, validate_closed_date_reason, validate_day_shifts, validate_menu_item,
};
use canteen_db::repositories::canteen::{
    add_closed_date, add_menu_image, add_menu_item, delete_menu_item, get_canteen_by_id,
    new_menu_item_id, remove_closed_date, remove_menu_image, set_day_shifts,
    update_canteen_details, update_canteen_status, update_menu_item, update_profile_image,
};
use canteen_db::KeyValueStore;
use chrono::NaiveTime;
use tracing::info;

use super::session::require_user;
use super::HandlerContext;
use crate::commands::{
    ClosedAction, DetailsArgs, HoursAction, ImageAction, MenuAction, MenuItemChanges,
    NewMenuItemArgs, OpenState, ShiftRange,
};
use crate::output::{render_closed_dates, render_weekly_hours};
use crate::uploads::upload_image;

/// The canteen of the signed-in owner.
fn managed_canteen<S>(ctx: &HandlerContext<'_, S>) -> CanteenResult<Canteen>
where
    S: KeyValueStore + ?Sized,
{
    let user = require_user(ctx)?;
    let canteen_id = managed_canteen_id(&user)?;

    get_canteen_by_id(ctx.store, canteen_id)?
        .ok_or_else(|| CanteenError::NotFound(format!("Canteen {} not found", canteen_id)))
}

fn target(canteen: &Canteen) -> String {
    format!("Canteen {}", canteen.id)
}

pub fn set_status<S>(ctx: &HandlerContext<'_, S>, state: OpenState) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let canteen = managed_canteen(ctx)?;
    update_canteen_status(ctx.store, &canteen.id, state.is_open())?.into_result(&target(&canteen))?;

    info!("Canteen status changed: id={}, open={}", canteen.id, state.is_open());
    Ok(if state.is_open() {
        format!("{} is now open", canteen.name)
    } else {
        format!("{} is now closed", canteen.name)
    })
}

pub fn update_details<S>(ctx: &HandlerContext<'_, S>, args: &DetailsArgs) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let canteen = managed_canteen(ctx)?;
    let name = args.name.as_deref().unwrap_or(&canteen.name);
    let description = args.description.as_deref().unwrap_or(&canteen.description);
    let location = args.location.as_deref().unwrap_or(&canteen.location);

    validate_canteen_details(name, description, location)?;
    update_canteen_details(
        ctx.store,
        &canteen.id,
        name.trim(),
        description.trim(),
        location.trim(),
    )?
    .into_result(&target(&canteen))?;

    Ok("Canteen details updated".to_string())
}

pub fn menu<S>(ctx: &HandlerContext<'_, S>, action: MenuAction) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let canteen = managed_canteen(ctx)?;

    match action {
        MenuAction::Add(args) => add_item(ctx, &canteen, args),
        MenuAction::Update { id, changes } => update_item(ctx, &canteen, &id, changes),
        MenuAction::Delete { id } => {
            let name = canteen
                .menu_item(&id)
                .map(|item| item.name.clone())
                .unwrap_or_else(|| id.clone());
            delete_menu_item(ctx.store, &canteen.id, &id)?
                .into_result(&format!("Menu item {}", id))?;
            Ok(format!("Deleted {}", name))
        }
    }
}

fn add_item<S>(
    ctx: &HandlerContext<'_, S>,
    canteen: &Canteen,
    args: NewMenuItemArgs,
) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let item = MenuItem {
        id: new_menu_item_id(),
        name: args.name.trim().to_string(),
        description: args.description.trim().to_string(),
        price: args.price,
        category: args.category,
        image: args.image.filter(|image| !image.trim().is_empty()),
        available: !args.unavailable,
        canteen_id: canteen.id.clone(),
    };
    validate_menu_item(&item)?;

    add_menu_item(ctx.store, &canteen.id, &item)?
        .into_result(&format!("Menu item {}", item.id))?;
    Ok(format!("Added {} ({})", item.name, item.id))
}

fn update_item<S>(
    ctx: &HandlerContext<'_, S>,
    canteen: &Canteen,
    item_id: &str,
    changes: MenuItemChanges,
) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let mut item = canteen
        .menu_item(item_id)
        .cloned()
        .ok_or_else(|| CanteenError::NotFound(format!("Menu item {} not found", item_id)))?;

    if let Some(name) = changes.name {
        item.name = name.trim().to_string();
    }
    if let Some(description) = changes.description {
        item.description = description.trim().to_string();
    }
    if let Some(price) = changes.price {
        item.price = price;
    }
    if let Some(category) = changes.category {
        item.category = category;
    }
    if let Some(image) = changes.image {
        item.image = (!image.trim().is_empty()).then(|| image.trim().to_string());
    }
    if let Some(available) = changes.available {
        item.available = available;
    }
    validate_menu_item(&item)?;

    update_menu_item(ctx.store, &canteen.id, &item)?
        .into_result(&format!("Menu item {}", item.id))?;
    Ok(format!("Updated {}", item.name))
}

pub fn hours<S>(ctx: &HandlerContext<'_, S>, action: HoursAction) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let canteen = managed_canteen(ctx)?;

    match action {
        HoursAction::Show => Ok(render_weekly_hours(&canteen)),
        HoursAction::Set { day, shifts } => {
            let shifts = build_shifts(day, &shifts);
            validate_day_shifts(&shifts)?;

            set_day_shifts(ctx.store, &canteen.id, day, &shifts)?.into_result(&target(&canteen))?;
            if shifts.is_empty() {
                Ok(format!("{} is now closed on {}", canteen.name, day))
            } else {
                let ranges: Vec<String> = shifts.iter().map(format_shift).collect();
                Ok(format!("{} hours on {}: {}", canteen.name, day, ranges.join(", ")))
            }
        }
    }
}

fn build_shifts(day: DayOfWeek, ranges: &[ShiftRange]) -> Vec<Shift> {
    ranges
        .iter()
        .enumerate()
        .map(|(index, range)| Shift {
            id: format!("{}-shift{}", day, index + 1),
            start: range.start,
            end: range.end,
        })
        .collect()
}

pub fn closed_dates<S>(ctx: &HandlerContext<'_, S>, action: ClosedAction) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let canteen = managed_canteen(ctx)?;

    match action {
        ClosedAction::List => Ok(render_closed_dates(&canteen)),
        ClosedAction::Add { date, reason } => {
            validate_closed_date_reason(&reason)?;

            add_closed_date(ctx.store, &canteen.id, date.and_time(NaiveTime::MIN), reason.trim())?
                .into_result(&target(&canteen))?;
            Ok(format!("{} will be closed on {}", canteen.name, date))
        }
        ClosedAction::Remove { id } => {
            remove_closed_date(ctx.store, &canteen.id, &id)?
                .into_result(&format!("Closed date {}", id))?;
            Ok("Closed date removed".to_string())
        }
    }
}

pub async fn image<S>(ctx: &HandlerContext<'_, S>, action: ImageAction) -> CanteenResult<String>
where
    S: KeyValueStore + ?Sized,
{
    let canteen = managed_canteen(ctx)?;

    match action {
        ImageAction::Profile { url: Some(url), clear: false } => {
            let url = upload_image(&url, ctx.config.upload_delay).await?;
            update_profile_image(ctx.store, &canteen.id, &url)?.into_result(&target(&canteen))?;
            Ok("Profile image updated".to_string())
        }
        ImageAction::Profile { .. } => {
            update_profile_image(ctx.store, &canteen.id, "")?.into_result(&target(&canteen))?;
            Ok("Profile image removed".to_string())
        }
        ImageAction::Add { url } => {
            if canteen.menu_images_full() {
                return Err(CanteenError::LimitReached(format!(
                    "You can only upload up to {} menu images",
                    MAX_MENU_IMAGES
                )));
            }
            let url = upload_image(&url, ctx.config.upload_delay).await?;
            add_menu_image(ctx.store, &canteen.id, &url)?.into_result(&target(&canteen))?;
            Ok(format!(
                "Menu image added ({}/{})",
                canteen.menu_images.len() + 1,
                MAX_MENU_IMAGES
            ))
        }
        ImageAction::Remove { url } => {
            remove_menu_image(ctx.store, &canteen.id, url.trim())?
                .into_result(&format!("Menu image {}", url.trim()))?;
            Ok("Menu image removed".to_string())
        }
    }
}
