//! # Canteen CLI
//!
//! Command line front end of the canteen directory. Guests browse canteens
//! and their opening hours, owners manage their own canteen, and admins read
//! directory statistics. Every command runs against a [`canteen_db::KeyValueStore`]
//! and returns the text to print.

pub mod commands;
pub mod config;
pub mod handlers;
pub mod output;
pub mod uploads;

pub use commands::{Cli, Commands};
pub use handlers::{handle_command, HandlerContext};
