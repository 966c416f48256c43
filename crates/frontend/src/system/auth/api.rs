use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_client::{post_json, post_unit, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_json("api/login", &request).await
}

/// Logout (revoke token on the backend)
pub async fn logout() -> Result<(), ApiError> {
    post_unit("api/logout", &serde_json::json!({})).await
}
