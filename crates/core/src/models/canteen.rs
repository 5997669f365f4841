use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::menu::MenuItem;
use super::schedule::Schedule;

/// Most menu images a canteen can carry.
pub const MAX_MENU_IMAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canteen {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub owner_id: String,
    /// Empty when no profile image is set.
    pub profile_image: String,
    pub menu_images: Vec<String>,
    /// Owner-controlled switch; `false` keeps the canteen closed whatever the schedule says.
    pub is_open: bool,
    pub special_offers: Vec<SpecialOffer>,
    pub menu: Vec<MenuItem>,
    pub schedule: Schedule,
}

impl Canteen {
    pub fn menu_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == item_id)
    }

    pub fn menu_images_full(&self) -> bool {
        self.menu_images.len() >= MAX_MENU_IMAGES
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOffer {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub canteen_id: String,
}

impl SpecialOffer {
    pub fn is_active(&self, now: NaiveDateTime) -> bool {
        self.start_date <= now && now <= self.end_date
    }
}
