//! Data models for the users service.
//!
//! The wire models match the backend JSON contract exactly (camelCase keys).

mod user;
mod user_item;

pub use user::*;
pub use user_item::*;
