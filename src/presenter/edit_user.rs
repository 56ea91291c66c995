//! Presenter for the add-user and edit-user screens.

use crate::errors::ApiError;
use crate::manager::UsersGateway;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};

/// Display surface for the user editing screen.
pub trait EditUserView {
    fn show_saving(&mut self);
    fn hide_saving(&mut self);
    /// The server accepted the submission and returned the stored record.
    fn on_saved(&mut self, user: &User);
    fn show_error(&mut self, message: &str);
}

/// Drives a create-or-update submission: saving indicator brackets the
/// request, the outcome is exactly one `on_saved` or `show_error`.
#[derive(Debug)]
pub struct EditUserPresenter<G, V> {
    gateway: G,
    view: V,
}

impl<G: UsersGateway, V: EditUserView> EditUserPresenter<G, V> {
    pub fn new(gateway: G, view: V) -> Self {
        Self { gateway, view }
    }

    /// Submit a new user. Rejects locally before contacting the server when
    /// required fields are blank.
    pub async fn create_user(&mut self, request: CreateUserRequest) {
        if request.first_name.trim().is_empty() {
            self.view
                .show_error(&ApiError::other("First name is required").display_message());
            return;
        }
        if request.email.trim().is_empty() {
            self.view
                .show_error(&ApiError::other("Email is required").display_message());
            return;
        }

        self.view.show_saving();
        match self.gateway.create_user(&request).await {
            Ok(user) => self.view.on_saved(&user),
            Err(err) => {
                tracing::warn!("Create failed: {}", err);
                self.view.show_error(&err.display_message());
            }
        }
        self.view.hide_saving();
    }

    /// Submit a partial update for an existing user.
    pub async fn update_user(&mut self, id: i64, request: UpdateUserRequest) {
        if request.is_empty() {
            self.view
                .show_error(&ApiError::other("Nothing to update").display_message());
            return;
        }

        self.view.show_saving();
        match self.gateway.update_user(id, &request).await {
            Ok(user) => self.view.on_saved(&user),
            Err(err) => {
                tracing::warn!("Update failed: {}", err);
                self.view.show_error(&err.display_message());
            }
        }
        self.view.hide_saving();
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubGateway {
        outcome: Result<User, ApiError>,
    }

    impl UsersGateway for StubGateway {
        async fn load_users_list(&self) -> Result<Vec<User>, ApiError> {
            unreachable!("edit presenter never lists")
        }

        async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
            self.outcome.clone().map(|mut user| {
                user.first_name = request.first_name.clone();
                user
            })
        }

        async fn update_user(
            &self,
            id: i64,
            _request: &UpdateUserRequest,
        ) -> Result<User, ApiError> {
            self.outcome.clone().map(|mut user| {
                user.id = id;
                user
            })
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ViewCall {
        ShowSaving,
        HideSaving,
        Saved(User),
        Error(String),
    }

    #[derive(Debug, Default)]
    struct RecordingView {
        calls: Vec<ViewCall>,
    }

    impl EditUserView for RecordingView {
        fn show_saving(&mut self) {
            self.calls.push(ViewCall::ShowSaving);
        }
        fn hide_saving(&mut self) {
            self.calls.push(ViewCall::HideSaving);
        }
        fn on_saved(&mut self, user: &User) {
            self.calls.push(ViewCall::Saved(user.clone()));
        }
        fn show_error(&mut self, message: &str) {
            self.calls.push(ViewCall::Error(message.to_string()));
        }
    }

    fn saved_user() -> User {
        User {
            id: 42,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            avatar_url: String::new(),
        }
    }

    fn create_request() -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            avatar_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_successful_create_brackets_saving() {
        let gateway = StubGateway {
            outcome: Ok(saved_user()),
        };
        let mut presenter = EditUserPresenter::new(gateway, RecordingView::default());
        presenter.create_user(create_request()).await;

        assert_eq!(
            presenter.view().calls,
            vec![
                ViewCall::ShowSaving,
                ViewCall::Saved(saved_user()),
                ViewCall::HideSaving,
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_create_shows_classified_error() {
        let gateway = StubGateway {
            outcome: Err(ApiError::Http(422)),
        };
        let mut presenter = EditUserPresenter::new(gateway, RecordingView::default());
        presenter.create_user(create_request()).await;

        assert_eq!(
            presenter.view().calls,
            vec![
                ViewCall::ShowSaving,
                ViewCall::Error("Something wrong with server (422)".to_string()),
                ViewCall::HideSaving,
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_first_name_is_rejected_locally() {
        let gateway = StubGateway {
            outcome: Ok(saved_user()),
        };
        let mut presenter = EditUserPresenter::new(gateway, RecordingView::default());

        let mut request = create_request();
        request.first_name = "  ".to_string();
        presenter.create_user(request).await;

        assert_eq!(
            presenter.view().calls,
            vec![ViewCall::Error("Error: First name is required".to_string())]
        );
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected_locally() {
        let gateway = StubGateway {
            outcome: Ok(saved_user()),
        };
        let mut presenter = EditUserPresenter::new(gateway, RecordingView::default());
        presenter.update_user(42, UpdateUserRequest::default()).await;

        assert_eq!(
            presenter.view().calls,
            vec![ViewCall::Error("Error: Nothing to update".to_string())]
        );
    }

    #[tokio::test]
    async fn test_update_reports_saved_user() {
        let gateway = StubGateway {
            outcome: Ok(saved_user()),
        };
        let mut presenter = EditUserPresenter::new(gateway, RecordingView::default());

        let request = UpdateUserRequest {
            email: Some("new@example.com".to_string()),
            ..UpdateUserRequest::default()
        };
        presenter.update_user(7, request).await;

        let calls = &presenter.view().calls;
        assert!(matches!(&calls[1], ViewCall::Saved(user) if user.id == 7));
    }
}
