pub mod canteen;
pub mod menu;
pub mod schedule;
pub mod user;
