//! DTOs for account endpoints.

use serde::Deserialize;
use validator::Validate;

/// Credentials submitted on signup and admin creation.
#[derive(Debug, Deserialize, Validate)]
pub struct AccountRequest {
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// Query string of `PUT /users/changePassword`.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordParams {
    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}
