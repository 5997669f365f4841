use canteen_core::models::{
    canteen::{Canteen, MAX_MENU_IMAGES},
    menu::MenuItem,
    schedule::{ClosedDate, DayOfWeek, Schedule, Shift, ShiftTime},
};
use chrono::NaiveDateTime;
use eyre::{Result, WrapErr};
use tracing::{debug, warn};
use uuid::Uuid;

use super::UpdateOutcome;
use crate::store::KeyValueStore;

pub const CANTEENS_KEY: &str = "university_canteen_canteens";

/// All canteens in seed order, or an empty list if the store was never seeded.
pub fn get_all_canteens<S>(store: &S) -> Result<Vec<Canteen>>
where
    S: KeyValueStore + ?Sized,
{
    match store.get(CANTEENS_KEY)? {
        Some(json) => serde_json::from_str(&json).wrap_err("Failed to parse stored canteens"),
        None => Ok(Vec::new()),
    }
}

fn save_all_canteens<S>(store: &S, canteens: &[Canteen]) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(canteens)?;
    store.set(CANTEENS_KEY, &json)
}

pub fn get_canteen_by_id<S>(store: &S, id: &str) -> Result<Option<Canteen>>
where
    S: KeyValueStore + ?Sized,
{
    debug!("Getting canteen by id: {}", id);
    let canteen = get_all_canteens(store)?
        .into_iter()
        .find(|canteen| canteen.id == id);

    if canteen.is_none() {
        debug!("Canteen not found: id={}", id);
    }
    Ok(canteen)
}

pub fn find_canteen_by_owner<S>(store: &S, owner_id: &str) -> Result<Option<Canteen>>
where
    S: KeyValueStore + ?Sized,
{
    Ok(get_all_canteens(store)?
        .into_iter()
        .find(|canteen| canteen.owner_id == owner_id))
}

/// Loads the collection, applies `change` to the canteen with `canteen_id` and
/// writes everything back when the change reports `Updated`.
fn modify_canteen<S, F>(store: &S, canteen_id: &str, change: F) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
    F: FnOnce(&mut Canteen) -> UpdateOutcome,
{
    let mut canteens = get_all_canteens(store)?;

    let Some(canteen) = canteens.iter_mut().find(|canteen| canteen.id == canteen_id) else {
        warn!("Canteen not found: id={}", canteen_id);
        return Ok(UpdateOutcome::NotFound);
    };

    let outcome = change(canteen);
    if outcome.is_updated() {
        save_all_canteens(store, &canteens)?;
        debug!("Canteen saved: id={}", canteen_id);
    }
    Ok(outcome)
}

/// Replaces the stored record that has the same id.
pub fn update_canteen<S>(store: &S, updated: &Canteen) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, &updated.id, |canteen| {
        *canteen = updated.clone();
        UpdateOutcome::Updated
    })
}

pub fn update_canteen_details<S>(
    store: &S,
    canteen_id: &str,
    name: &str,
    description: &str,
    location: &str,
) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        canteen.name = name.to_string();
        canteen.description = description.to_string();
        canteen.location = location.to_string();
        UpdateOutcome::Updated
    })
}

/// Appends `item`; `Duplicate` if the menu already has an item with its id.
pub fn add_menu_item<S>(store: &S, canteen_id: &str, item: &MenuItem) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        if canteen.menu_item(&item.id).is_some() {
            warn!("Menu item already exists: canteen={}, item={}", canteen_id, item.id);
            return UpdateOutcome::Duplicate;
        }
        canteen.menu.push(item.clone());
        UpdateOutcome::Updated
    })
}

/// Replaces the menu item with the same id; `NotFound` if the canteen has no such item.
pub fn update_menu_item<S>(store: &S, canteen_id: &str, item: &MenuItem) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        match canteen.menu.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                *existing = item.clone();
                UpdateOutcome::Updated
            }
            None => {
                warn!("Menu item not found: canteen={}, item={}", canteen_id, item.id);
                UpdateOutcome::NotFound
            }
        }
    })
}

/// Updates the item with the same id, or appends it when there is none.
pub fn upsert_menu_item<S>(store: &S, canteen_id: &str, item: &MenuItem) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        match canteen.menu.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => canteen.menu.push(item.clone()),
        }
        UpdateOutcome::Updated
    })
}

pub fn delete_menu_item<S>(store: &S, canteen_id: &str, item_id: &str) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        let before = canteen.menu.len();
        canteen.menu.retain(|item| item.id != item_id);
        if canteen.menu.len() == before {
            warn!("Menu item not found: canteen={}, item={}", canteen_id, item_id);
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated
        }
    })
}

/// Fresh id for a menu item created by an owner.
pub fn new_menu_item_id() -> String {
    format!("item-{}", Uuid::new_v4())
}

pub fn update_schedule<S>(store: &S, canteen_id: &str, schedule: &Schedule) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        canteen.schedule = schedule.clone();
        UpdateOutcome::Updated
    })
}

/// Replaces the shifts of one weekday, creating the day entry if the table lacks it.
pub fn set_day_shifts<S>(
    store: &S,
    canteen_id: &str,
    day: DayOfWeek,
    shifts: &[Shift],
) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        match canteen.schedule.day_mut(day) {
            Some(entry) => entry.shifts = shifts.to_vec(),
            None => canteen.schedule.regular_hours.push(ShiftTime {
                id: format!("shift-{}", Uuid::new_v4()),
                day,
                shifts: shifts.to_vec(),
            }),
        }
        UpdateOutcome::Updated
    })
}

pub fn add_closed_date<S>(
    store: &S,
    canteen_id: &str,
    date: NaiveDateTime,
    reason: &str,
) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        canteen.schedule.closed_dates.push(ClosedDate {
            id: format!("closed-{}", Uuid::new_v4()),
            date,
            reason: reason.to_string(),
        });
        UpdateOutcome::Updated
    })
}

pub fn remove_closed_date<S>(
    store: &S,
    canteen_id: &str,
    closed_date_id: &str,
) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        let closed_dates = &mut canteen.schedule.closed_dates;
        let before = closed_dates.len();
        closed_dates.retain(|closed| closed.id != closed_date_id);
        if closed_dates.len() == before {
            warn!(
                "Closed date not found: canteen={}, closed_date={}",
                canteen_id, closed_date_id
            );
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated
        }
    })
}

/// Sets the owner's manual open switch.
pub fn update_canteen_status<S>(store: &S, canteen_id: &str, is_open: bool) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        canteen.is_open = is_open;
        UpdateOutcome::Updated
    })
}

/// An empty `image_url` clears the profile image.
pub fn update_profile_image<S>(
    store: &S,
    canteen_id: &str,
    image_url: &str,
) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        canteen.profile_image = image_url.to_string();
        UpdateOutcome::Updated
    })
}

/// Appends a menu image unless the canteen already has [`MAX_MENU_IMAGES`].
pub fn add_menu_image<S>(store: &S, canteen_id: &str, image_url: &str) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        if canteen.menu_images.len() >= MAX_MENU_IMAGES {
            warn!(
                "Menu image limit reached: canteen={}, images={}",
                canteen_id,
                canteen.menu_images.len()
            );
            return UpdateOutcome::LimitReached;
        }
        canteen.menu_images.push(image_url.to_string());
        UpdateOutcome::Updated
    })
}

/// Removes every menu image equal to `image_url`.
pub fn remove_menu_image<S>(store: &S, canteen_id: &str, image_url: &str) -> Result<UpdateOutcome>
where
    S: KeyValueStore + ?Sized,
{
    modify_canteen(store, canteen_id, |canteen| {
        let before = canteen.menu_images.len();
        canteen.menu_images.retain(|image| image != image_url);
        if canteen.menu_images.len() == before {
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated
        }
    })
}
