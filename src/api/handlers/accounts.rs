//! Handlers for account endpoints.

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{AccountRequest, ChangePasswordParams};
use crate::domain::entities::ActiveIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Signs up a regular user.
///
/// # Endpoint
///
/// `POST /users/create`
///
/// # Errors
///
/// Returns 400 if the body fails validation.
/// Returns 409 if the name is taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<AccountRequest>,
) -> Result<(StatusCode, &'static str), AppError> {
    payload.validate()?;

    state
        .account_service
        .create_user(&payload.name, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, "User created"))
}

/// Creates an administrator.
///
/// # Endpoint
///
/// `POST /users/admin/create` (ADMIN)
pub async fn create_admin_handler(
    State(state): State<AppState>,
    Json(payload): Json<AccountRequest>,
) -> Result<(StatusCode, &'static str), AppError> {
    payload.validate()?;

    state
        .account_service
        .create_admin(&payload.name, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, "Admin created"))
}

/// Deletes the caller's own account.
///
/// # Endpoint
///
/// `DELETE /users/delete` (USER)
///
/// # Errors
///
/// Returns 401 `Session Expired` if the account vanished mid-request.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<ActiveIdentity>,
) -> Result<(StatusCode, &'static str), AppError> {
    state.account_service.delete_account(&identity).await?;

    Ok((StatusCode::ACCEPTED, "User deleted"))
}

/// Replaces the caller's password.
///
/// # Endpoint
///
/// `PUT /users/changePassword?password=...` (USER)
pub async fn change_password_handler(
    State(state): State<AppState>,
    identity: Option<Extension<ActiveIdentity>>,
    Query(params): Query<ChangePasswordParams>,
) -> Result<(StatusCode, &'static str), AppError> {
    params.validate()?;

    let identity = identity.map(|Extension(identity)| identity);
    state
        .account_service
        .change_password(identity.as_ref(), &params.password)
        .await?;

    Ok((StatusCode::ACCEPTED, "User updated"))
}
