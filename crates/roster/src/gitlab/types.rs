//! GitLab API data types.

use serde::{Deserialize, Deserializer};

/// GitLab user - the fields exported from `/api/v4/users`.
///
/// Other fields in the response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitLabUser {
    /// User ID.
    pub id: u64,
    /// Username (unique handle).
    pub username: String,
    /// Display name.
    pub name: String,
    /// Email. Empty when hidden by the instance's privacy settings; GitLab
    /// omits the field or sends `null` for non-admin tokens.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Account state label, e.g. "active" or "blocked".
    pub state: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Connection settings for a GitLab instance.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Scheme + host (+ port), used as given.
    pub base_url: String,
    /// Personal access token, sent as `PRIVATE-TOKEN`.
    pub token: String,
}

impl Credentials {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_and_ignores_unknown_fields() {
        let json = r#"{
            "id": 7,
            "username": "alice",
            "name": "Alice A",
            "email": "a@x.com",
            "state": "active",
            "avatar_url": "https://gitlab.test/a.png",
            "web_url": "https://gitlab.test/alice",
            "locked": false
        }"#;

        let user: GitLabUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
        assert_eq!(user.name, "Alice A");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.state, "active");
    }

    #[test]
    fn test_user_email_null_or_missing_is_empty() {
        let null_email = r#"{"id":1,"username":"u","name":"U","email":null,"state":"active"}"#;
        let user: GitLabUser = serde_json::from_str(null_email).unwrap();
        assert_eq!(user.email, "");

        let no_email = r#"{"id":2,"username":"v","name":"V","state":"blocked"}"#;
        let user: GitLabUser = serde_json::from_str(no_email).unwrap();
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_user_requires_id() {
        let json = r#"{"username":"u","name":"U","email":"","state":"active"}"#;
        assert!(serde_json::from_str::<GitLabUser>(json).is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let creds = Credentials::new("https://gitlab.test", "glpat-secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("https://gitlab.test"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("glpat-secret"));
    }
}
