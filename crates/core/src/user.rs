//! The connected user kept in the session store.

use serde::{Deserialize, Serialize};

/// Session key the current user is stored under.
pub const CURRENT_USER_KEY: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Current user record, stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
    pub password: String,
    pub status: String,
}

impl CurrentUser {
    /// A connected employee.
    pub fn employee(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
            password: password.into(),
            status: "connected".to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == "connected"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_json() {
        let raw = r#"{"type":"Employee","email":"employee@tld.com","password":"employee","status":"connected"}"#;
        let user: CurrentUser = serde_json::from_str(raw).unwrap();

        assert_eq!(user, CurrentUser::employee("employee@tld.com", "employee"));
        assert!(user.is_connected());
    }
}
