//! View collaborator contracts and the detach/reattach replay cache.

use crate::models::{User, UserItem};

/// Display surface for the users list screen.
///
/// The presenter pushes commands; the view never reports state back.
pub trait UsersView {
    /// Hide the add-user action.
    fn hide_add(&mut self);
    /// Show the add-user action.
    fn show_add(&mut self);
    /// Show the loading/refreshing indicator.
    fn show_refreshing(&mut self);
    /// Hide the loading/refreshing indicator.
    fn hide_refreshing(&mut self);
    /// Rebuild the full list from the presenter's current state.
    fn init_users(&mut self);
    /// Apply `users` incrementally to an already-rendered list.
    fn update_users(&mut self, users: &[User]);
    /// Display an error message.
    fn show_error(&mut self, message: &str);
}

/// Receiver for one bound list row.
pub trait UserItemHolder {
    fn set_data(&mut self, item: UserItem);
}

/// Last rendered content, per the content command category.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Rendered,
    Failed(String),
}

/// Stored-state cache of the last-issued display command per category.
///
/// A detached screen misses commands; on reattachment the cache replays one
/// command per category, in fixed order: add visibility, refreshing
/// indicator, content. Content always replays as a full rebuild, since a
/// fresh view has no prior render to diff against.
#[derive(Debug, Default)]
pub struct ViewState {
    add_visible: Option<bool>,
    refreshing: Option<bool>,
    content: Option<Content>,
}

impl ViewState {
    pub fn record_add_visible(&mut self, visible: bool) {
        self.add_visible = Some(visible);
    }

    pub fn record_refreshing(&mut self, refreshing: bool) {
        self.refreshing = Some(refreshing);
    }

    pub fn record_rendered(&mut self) {
        self.content = Some(Content::Rendered);
    }

    pub fn record_failed(&mut self, message: &str) {
        self.content = Some(Content::Failed(message.to_string()));
    }

    /// Replay the buffered commands onto a freshly attached view.
    pub fn replay(&self, view: &mut impl UsersView) {
        match self.add_visible {
            Some(true) => view.show_add(),
            Some(false) => view.hide_add(),
            None => {}
        }
        match self.refreshing {
            Some(true) => view.show_refreshing(),
            Some(false) => view.hide_refreshing(),
            None => {}
        }
        match &self.content {
            Some(Content::Rendered) => view.init_users(),
            Some(Content::Failed(message)) => view.show_error(message),
            None => {}
        }
    }
}
