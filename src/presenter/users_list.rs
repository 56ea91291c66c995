//! Presenter for the users list screen.

use crate::manager::UsersGateway;
use crate::models::{User, UserItem};

use super::view::{UserItemHolder, UsersView, ViewState};

/// Owns the authoritative in-memory users list and its loading/error state,
/// and drives the attached view through explicit commands.
///
/// Operations take `&mut self` and run to completion, so a second load cannot
/// start while one is outstanding; every command issued while no view is
/// attached is buffered in [`ViewState`] and replayed on reattachment.
#[derive(Debug)]
pub struct UsersListPresenter<G, V> {
    gateway: G,
    view: Option<V>,
    view_state: ViewState,
    users: Vec<User>,
    has_loaded_once: bool,
    is_error_state: bool,
}

impl<G: UsersGateway, V: UsersView> UsersListPresenter<G, V> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            view: None,
            view_state: ViewState::default(),
            users: Vec::new(),
            has_loaded_once: false,
            is_error_state: false,
        }
    }

    /// Attach a view, replaying the last-issued command per category so the
    /// fresh surface catches up with the current state.
    pub fn attach_view(&mut self, mut view: V) {
        self.view_state.replay(&mut view);
        self.view = Some(view);
    }

    /// Detach and return the current view, if any. Commands issued while
    /// detached are buffered for the next [`attach_view`].
    ///
    /// [`attach_view`]: Self::attach_view
    pub fn detach_view(&mut self) -> Option<V> {
        self.view.take()
    }

    /// Initial load. The add action stays hidden until the list arrives;
    /// after a failure it remains hidden.
    pub async fn init_users(&mut self) {
        self.set_add_visible(false);
        self.set_refreshing(true);

        match self.gateway.load_users_list().await {
            Ok(users) => {
                tracing::debug!("Initial load returned {} users", users.len());
                self.users = users;
                self.has_loaded_once = true;
                self.is_error_state = false;
                self.render_full();
                self.set_add_visible(true);
            }
            Err(err) => {
                tracing::warn!("Initial load failed: {}", err);
                self.is_error_state = true;
                self.render_error(&err.display_message());
            }
        }

        self.set_refreshing(false);
    }

    /// Reload the list. A healthy previous state gets an incremental update;
    /// after a failed attempt the next success rebuilds the view from
    /// scratch, as the prior render is considered stale.
    pub async fn refresh_users(&mut self) {
        self.set_refreshing(true);

        match self.gateway.load_users_list().await {
            Ok(users) => {
                tracing::debug!("Refresh returned {} users", users.len());
                // After a failure (or before any load) the view's prior
                // render is stale, so rebuild instead of diffing
                let needs_rebuild = self.is_error_state || !self.has_loaded_once;
                self.users = users;
                self.has_loaded_once = true;
                if needs_rebuild {
                    self.is_error_state = false;
                    self.render_full();
                    self.set_add_visible(true);
                } else {
                    self.render_update();
                }
            }
            Err(err) => {
                tracing::warn!("Refresh failed: {}", err);
                // The displayed list stays as-is
                self.is_error_state = true;
                self.render_error(&err.display_message());
            }
        }

        self.set_refreshing(false);
    }

    /// Clamped window into the current list: at most `count` users starting
    /// at `offset`, truncated silently at the end of the list.
    pub fn users_at(&self, offset: usize, count: usize) -> &[User] {
        let start = offset.min(self.users.len());
        let end = offset.saturating_add(count).min(self.users.len());
        &self.users[start..end]
    }

    /// Number of users currently held.
    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// Push the user at `position` into `holder` as a presentation row.
    ///
    /// Panics if `position` is out of range; callers bind within `count()`.
    pub fn bind_user_at(&self, position: usize, holder: &mut impl UserItemHolder) {
        holder.set_data(UserItem::new(self.users[position].clone()));
    }

    fn set_add_visible(&mut self, visible: bool) {
        self.view_state.record_add_visible(visible);
        if let Some(view) = self.view.as_mut() {
            if visible {
                view.show_add();
            } else {
                view.hide_add();
            }
        }
    }

    fn set_refreshing(&mut self, refreshing: bool) {
        self.view_state.record_refreshing(refreshing);
        if let Some(view) = self.view.as_mut() {
            if refreshing {
                view.show_refreshing();
            } else {
                view.hide_refreshing();
            }
        }
    }

    fn render_full(&mut self) {
        self.view_state.record_rendered();
        if let Some(view) = self.view.as_mut() {
            view.init_users();
        }
    }

    fn render_update(&mut self) {
        self.view_state.record_rendered();
        if let Some(view) = self.view.as_mut() {
            view.update_users(&self.users);
        }
    }

    fn render_error(&mut self, message: &str) {
        self.view_state.record_failed(message);
        if let Some(view) = self.view.as_mut() {
            view.show_error(message);
        }
    }
}
