//! # Canteen Core
//!
//! Domain types and pure logic for the canteen directory: the data model
//! persisted by `canteen-db`, the weekly schedule evaluation that decides
//! whether a canteen is open, form validation rules, and the helpers behind
//! the guest listing and admin dashboard.
//!
//! Nothing in this crate reads the wall clock directly. Every time-dependent
//! function takes the reference instant as a parameter; [`clock::Clock`]
//! is the seam callers use to obtain it.

pub mod clock;
pub mod directory;
pub mod errors;
pub mod hours;
pub mod models;
pub mod validation;
