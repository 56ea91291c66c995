//! Presentation layer.
//!
//! Presenters own display logic and drive passive view collaborators through
//! explicit commands; views are told, never queried.

mod edit_user;
mod users_list;
mod view;

pub use edit_user::*;
pub use users_list::*;
pub use view::*;
