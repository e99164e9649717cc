//! # Session user
//!
//! [`SessionUser`] is the authenticated subject as seen by this application. It is
//! deserialized straight from the identity provider's `/userinfo` response during the
//! login callback, stored in the server-side session under
//! [`SESSION_USER_KEY`](crate::auth::SESSION_USER_KEY), and handed to views as an explicit
//! prop rather than looked up from ambient state.
//!
//! Only `sub` is required; every product query is scoped by it.

use serde::{Deserialize, Serialize};

/// The signed-in user, identified by the provider's subject id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    /// Provider subject identifier, e.g. `auth0|123`.
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl SessionUser {
    /// A user known only by subject id.
    pub fn new(sub: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            name: None,
            email: None,
            picture: None,
        }
    }

    /// Get display name, falling back to email and then to the subject id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_userinfo_payload_ignores_unknown_claims() {
        let json = r#"{
            "sub": "auth0|123",
            "nickname": "vendor",
            "name": "Vendor One",
            "picture": "https://cdn.example/avatar.png",
            "updated_at": "2024-01-01T00:00:00.000Z",
            "email": "vendor@example.com",
            "email_verified": true
        }"#;

        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.sub, "auth0|123");
        assert_eq!(user.email.as_deref(), Some("vendor@example.com"));
        assert_eq!(user.display_name(), "Vendor One");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user = SessionUser::new("auth0|123");
        assert_eq!(user.display_name(), "auth0|123");

        user.email = Some("vendor@example.com".to_string());
        assert_eq!(user.display_name(), "vendor@example.com");
    }
}
