//! HTTP Basic authentication and role guards.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::domain::entities::{ActiveIdentity, Role};
use crate::{error::AppError, state::AppState};

/// Admits any authenticated account holding the `USER` role.
///
/// The resolved [`ActiveIdentity`] is inserted into request extensions for
/// handlers to extract with `Extension<ActiveIdentity>`.
///
/// # Example
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/users/delete", delete(delete_user_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_user));
/// ```
pub async fn require_user(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(st, Role::User, req, next).await
}

/// Admits authenticated accounts holding the `ADMIN` role.
pub async fn require_admin(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(st, Role::Admin, req, next).await
}

/// Resolves Basic credentials and checks `role`.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, malformed or the
/// credentials are wrong. Returns `403 Forbidden` if the account lacks `role`.
async fn authorize(
    st: AppState,
    role: Role,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Authorization header is missing or invalid"))?;

    let identity = st
        .account_service
        .authenticate(&username, password.as_deref().unwrap_or_default())
        .await?;

    if !identity.has_role(role) {
        tracing::debug!(username = %identity.username, required = %role, "role check failed");
        return Err(AppError::forbidden(format!("{role} role required")));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert::<ActiveIdentity>(identity);

    Ok(next.run(req).await)
}
