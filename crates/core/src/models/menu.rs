use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CanteenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    Breakfast,
    Lunch,
    Dinner,
    Beverages,
    Snacks,
    Desserts,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 6] = [
        MenuCategory::Breakfast,
        MenuCategory::Lunch,
        MenuCategory::Dinner,
        MenuCategory::Beverages,
        MenuCategory::Snacks,
        MenuCategory::Desserts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "Breakfast",
            MenuCategory::Lunch => "Lunch",
            MenuCategory::Dinner => "Dinner",
            MenuCategory::Beverages => "Beverages",
            MenuCategory::Snacks => "Snacks",
            MenuCategory::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = CanteenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CanteenError::Validation(format!("Unknown menu category '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub available: bool,
    pub canteen_id: String,
}

/// Prices are shown in rupees with two decimals.
pub fn format_price(price: f64) -> String {
    format!("₹{:.2}", price)
}
