use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionInfo,
}

/// Profile stored in the `session` cookie; drives menu gating only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Coach,
    Staff,
    #[default]
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Coach => "coach",
            UserRole::Staff => "staff",
            UserRole::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Coach => "Coach",
            UserRole::Staff => "Staff",
            UserRole::Unknown => "Unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "admin" => UserRole::Admin,
            "coach" => UserRole::Coach,
            "staff" => UserRole::Staff,
            _ => UserRole::Unknown,
        }
    }

    /// Roles that can be assigned from the users screen.
    pub fn assignable() -> [UserRole; 3] {
        [UserRole::Admin, UserRole::Coach, UserRole::Staff]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_does_not_fail_parsing() {
        let info: SessionInfo =
            serde_json::from_str(r#"{"name":"Rina","email":"rina@playpro.id","role":"owner"}"#)
                .unwrap();
        assert_eq!(info.role, UserRole::Unknown);

        let info: SessionInfo =
            serde_json::from_str(r#"{"name":"Rina","email":"rina@playpro.id"}"#).unwrap();
        assert_eq!(info.role, UserRole::Unknown);
    }

    #[test]
    fn test_login_response_shape() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token":"abc","user":{"name":"Budi","email":"budi@playpro.id","role":"coach"}}"#,
        )
        .unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.user.role, UserRole::Coach);
    }
}
