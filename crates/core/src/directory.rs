//! Read-side helpers for the guest listing and the admin dashboard.

use serde::Serialize;

use crate::errors::{CanteenError, CanteenResult};
use crate::models::canteen::Canteen;
use crate::models::menu::{MenuCategory, MenuItem};
use crate::models::user::User;

/// Canteens whose name or location contains `term` (case-insensitive).
/// With `open_only`, canteens switched closed by their owner are dropped.
pub fn search<'a>(canteens: &'a [Canteen], term: &str, open_only: bool) -> Vec<&'a Canteen> {
    let needle = term.trim().to_lowercase();

    canteens
        .iter()
        .filter(|canteen| !open_only || canteen.is_open)
        .filter(|canteen| {
            needle.is_empty()
                || canteen.name.to_lowercase().contains(&needle)
                || canteen.location.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_canteens: usize,
    /// Counts the owners' manual switch, not the schedule.
    pub open_canteens: usize,
    pub total_menu_items: usize,
}

pub fn admin_stats(canteens: &[Canteen]) -> AdminStats {
    AdminStats {
        total_canteens: canteens.len(),
        open_canteens: canteens.iter().filter(|canteen| canteen.is_open).count(),
        total_menu_items: canteens.iter().map(|canteen| canteen.menu.len()).sum(),
    }
}

/// Menu items grouped by category, categories in their fixed order, empty ones omitted.
pub fn menu_by_category(canteen: &Canteen) -> Vec<(MenuCategory, Vec<&MenuItem>)> {
    MenuCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let items: Vec<&MenuItem> = canteen
                .menu
                .iter()
                .filter(|item| item.category == category)
                .collect();
            (!items.is_empty()).then_some((category, items))
        })
        .collect()
}

pub fn ensure_admin(user: &User) -> CanteenResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(CanteenError::Authorization("Admin access required".to_string()))
    }
}

/// The canteen id an owner may manage.
pub fn managed_canteen_id(user: &User) -> CanteenResult<&str> {
    match user.canteen_id.as_deref() {
        Some(id) if user.owns(id) => Ok(id),
        _ => Err(CanteenError::Authorization(format!(
            "User '{}' does not own a canteen",
            user.username
        ))),
    }
}
