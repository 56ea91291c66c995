//! Presentation model for one user row in a list display.

use super::User;

/// A thin view-model over [`User`], shaped for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserItem {
    user: User,
}

impl UserItem {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// "First Last" as one display string.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.user.first_name, self.user.last_name)
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// The avatar URL, with the empty string normalized to `None`.
    pub fn avatar_url(&self) -> Option<&str> {
        if self.user.avatar_url.is_empty() {
            None
        } else {
            Some(&self.user.avatar_url)
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self::new(user)
    }
}
