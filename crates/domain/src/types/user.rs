//! User profile and authentication payloads
//!
//! The profile is cached client-side at login time and never refreshed from
//! the server.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role attached to a user profile
///
/// Unknown roles are preserved verbatim rather than rejected so a backend
/// that adds a role does not break session restore.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Manager,
    Sales,
    Hr,
    Warehouse,
    Employee,
    Other(String),
}

impl Role {
    /// Wire spelling of the role.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Sales => "sales",
            Self::Hr => "hr",
            Self::Warehouse => "warehouse",
            Self::Employee => "employee",
            Self::Other(other) => other.as_str(),
        }
    }

    /// Roles allowed to see staff records and reset passwords.
    pub fn can_manage_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager | Self::Hr)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "manager" => Self::Manager,
            "sales" => Self::Sales,
            "hr" => Self::Hr,
            "warehouse" => Self::Warehouse,
            "employee" => Self::Employee,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::from).unwrap_or_default())
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Employee
    }
}

/// User profile as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(flatten, with = "crate::utils::serde::record_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Successful login/registration response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_accepts_mongo_id() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"_id":"u1","name":"Asha","email":"asha@example.com","role":"HR"}"#,
        )
        .unwrap();
        assert_eq!(profile.id, "u1");
        assert_eq!(profile.role, Role::Hr);
    }

    #[test]
    fn profile_with_both_id_keys_decodes() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"_id":"u1","id":"u1","name":"Asha","email":"asha@example.com","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(profile.id, "u1");
        assert_eq!(serde_json::to_value(&profile).unwrap()["id"], "u1");
    }

    #[test]
    fn null_role_falls_back_to_default() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"_id":"u2","name":"Ravi","email":"ravi@example.com","role":null}"#,
        )
        .unwrap();
        assert_eq!(profile.role, Role::Employee);

        let missing: UserProfile =
            serde_json::from_str(r#"{"id":"u3","name":"Kiran","email":"kiran@example.com"}"#)
                .unwrap();
        assert_eq!(missing.role, Role::default());
    }

    #[test]
    fn unknown_role_is_preserved() {
        let role: Role = serde_json::from_str(r#""auditor""#).unwrap();
        assert_eq!(role, Role::Other("auditor".into()));
        assert_eq!(serde_json::to_string(&role).unwrap(), r#""auditor""#);
        assert!(!role.can_manage_staff());
    }

    #[test]
    fn registration_omits_missing_role() {
        let body = Registration {
            name: "A".into(),
            email: "a@example.com".into(),
            password: "pw".into(),
            role: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("role").is_none());
    }
}
