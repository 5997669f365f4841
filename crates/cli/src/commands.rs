//! Command line definitions.
//!
//! Guests browse with `list` and `show`, owners manage their own canteen with
//! the `status`, `details`, `menu`, `hours`, `closed` and `image` commands, and
//! admins read the dashboard with `stats`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use canteen_core::errors::CanteenError;
use canteen_core::models::menu::MenuCategory;
use canteen_core::models::schedule::{ClockTime, DayOfWeek};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// University canteen directory
#[derive(Parser, Debug)]
#[command(name = "canteen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory, overrides CANTEEN_DATA_DIR
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List canteens with their current status and today's hours
    List(ListArgs),

    /// Show a canteen's details, weekly hours, offers and menu
    Show {
        /// Canteen id (e.g., "canteen1")
        id: String,
    },

    /// Sign in as a seeded user
    Login { username: String, password: String },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Directory statistics (admin only)
    Stats,

    /// Switch your canteen open or closed
    Status {
        #[arg(value_enum)]
        state: OpenState,
    },

    /// Edit your canteen's name, description or location
    Details(DetailsArgs),

    /// Manage your canteen's menu
    Menu(MenuArgs),

    /// Manage your canteen's regular hours
    Hours(HoursArgs),

    /// Manage your canteen's closed dates
    Closed(ClosedArgs),

    /// Manage your canteen's images
    Image(ImageArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Match on name or location
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only canteens whose owner has them switched open
    #[arg(long)]
    pub open_only: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenState {
    Open,
    Closed,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        self == OpenState::Open
    }
}

#[derive(Args, Debug, Default)]
pub struct DetailsArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Args, Debug)]
pub struct MenuArgs {
    #[command(subcommand)]
    pub action: MenuAction,
}

#[derive(Subcommand, Debug)]
pub enum MenuAction {
    /// Add a new item
    Add(NewMenuItemArgs),

    /// Change fields of an existing item
    Update {
        /// Menu item id
        id: String,

        #[command(flatten)]
        changes: MenuItemChanges,
    },

    /// Remove an item
    Delete {
        /// Menu item id
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct NewMenuItemArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub price: f64,

    /// Breakfast, Lunch, Dinner, Beverages, Snacks or Desserts
    #[arg(long)]
    pub category: MenuCategory,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Add the item as currently unavailable
    #[arg(long)]
    pub unavailable: bool,
}

#[derive(Args, Debug, Default)]
pub struct MenuItemChanges {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub category: Option<MenuCategory>,

    #[arg(long)]
    pub image: Option<String>,

    /// Mark the item available (true) or unavailable (false)
    #[arg(long)]
    pub available: Option<bool>,
}

#[derive(Args, Debug)]
pub struct HoursArgs {
    #[command(subcommand)]
    pub action: HoursAction,
}

#[derive(Subcommand, Debug)]
pub enum HoursAction {
    /// Show the weekly table
    Show,

    /// Replace one day's shifts; no shifts leaves the day closed
    Set {
        /// Day of week (e.g., "monday" or "mon")
        day: DayOfWeek,

        /// Shifts as HH:MM-HH:MM
        shifts: Vec<ShiftRange>,
    },
}

/// A shift given on the command line as `HH:MM-HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl FromStr for ShiftRange {
    type Err = CanteenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once('-').ok_or_else(|| {
            CanteenError::Validation(format!("Invalid shift '{}', expected HH:MM-HH:MM", s))
        })?;
        Ok(Self {
            start: start.trim().parse()?,
            end: end.trim().parse()?,
        })
    }
}

impl fmt::Display for ShiftRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Args, Debug)]
pub struct ClosedArgs {
    #[command(subcommand)]
    pub action: ClosedAction,
}

#[derive(Subcommand, Debug)]
pub enum ClosedAction {
    /// List closed dates
    List,

    /// Close the canteen for a whole day
    Add {
        /// Date as YYYY-MM-DD
        date: NaiveDate,

        reason: String,
    },

    /// Remove a closed date by id
    Remove { id: String },
}

#[derive(Args, Debug)]
pub struct ImageArgs {
    #[command(subcommand)]
    pub action: ImageAction,
}

#[derive(Subcommand, Debug)]
pub enum ImageAction {
    /// Upload or clear the profile image
    Profile {
        /// JPEG image URL
        #[arg(required_unless_present = "clear", conflicts_with = "clear")]
        url: Option<String>,

        #[arg(long)]
        clear: bool,
    },

    /// Upload a menu image (at most 5)
    Add {
        /// JPEG image URL
        url: String,
    },

    /// Remove a menu image
    Remove { url: String },
}
