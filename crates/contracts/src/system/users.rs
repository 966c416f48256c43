use crate::domain::common::resource::is_filled;
use crate::domain::common::{RecordId, Resource};
use crate::system::auth::UserRole;
use serde::{Deserialize, Serialize};

/// Dashboard account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Write-only: required on create, omitted on update to keep the old one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Resource for User {
    const ENDPOINT: &'static str = "admin/users";
    const ELEMENT_NAME: &'static str = "User";
    const LIST_NAME: &'static str = "Users";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if !is_filled(&self.name) {
            return Some("Name");
        }
        if !is_filled(&self.email) {
            return Some("Email");
        }
        if self.role == UserRole::Unknown {
            return Some("Role");
        }
        let has_password = self.password.as_deref().map(is_filled).unwrap_or(false);
        if self.id.is_none() && !has_password {
            return Some("Password");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_required_only_on_create() {
        let mut user = User {
            name: "Sari".into(),
            email: "sari@playpro.id".into(),
            role: UserRole::Staff,
            ..Default::default()
        };
        assert_eq!(user.missing_required(), Some("Password"));

        user.id = Some(5);
        assert_eq!(user.missing_required(), None);
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
    }
}
