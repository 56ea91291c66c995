//! User model matching the backend user object.

use serde::{Deserialize, Serialize};

/// A user as returned by the backend.
///
/// Immutable once deserialized; the id is server-assigned and unique.
/// An empty `avatar_url` means the user has no avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// Request body for creating a new user. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// Request body for partially updating an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UpdateUserRequest {
    /// True when the request carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.avatar_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_names_are_camel_case() {
        let user = User {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            avatar_url: String::new(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["avatarUrl"], "");
    }

    #[test]
    fn test_user_deserializes_without_avatar() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.avatar_url, "");
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let request = UpdateUserRequest {
            email: Some("new@example.com".to_string()),
            ..UpdateUserRequest::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "new@example.com");
        assert!(json.get("firstName").is_none());
        assert!(json.get("avatarUrl").is_none());
    }
}
