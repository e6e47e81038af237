//! Staff records: employees and trainers

use serde::{Deserialize, Serialize};

use super::user::Role;

/// An employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(flatten, with = "crate::utils::serde::record_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: Option<String>,
}

/// A trainer running course batches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    #[serde(flatten, with = "crate::utils::serde::record_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub active_batches: u32,
}

/// Body of `POST /users/{id}/reset-password`
#[derive(Debug, Clone, Serialize)]
pub struct PasswordReset {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_with_null_role_is_default_role() {
        let employee: Employee = serde_json::from_str(
            r#"{"_id":"e1","id":"e1","name":"Kiran","email":"kiran@example.com","role":null}"#,
        )
        .unwrap();
        assert_eq!(employee.id, "e1");
        assert_eq!(employee.role, Role::Employee);
    }
}
