use axum::{
    Json,
    extract::{Json as JsonExtract, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AppState, auth_middleware::AuthenticatedUser, error::AppError};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    success: bool,
    token: String,
    name: String,
    email: String,
    expires_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct LogoutResponse {
    success: bool,
}

// Handler for POST /login
pub async fn handle_login(
    State(app_state): State<AppState>,
    WithRejection(JsonExtract(form), _): WithRejection<JsonExtract<LoginForm>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Login attempt for: {}", form.email);

    let session = app_state.sessions.login(&form.email, &form.password).await?;
    Ok(Json(LoginResponse {
        success: true,
        token: session.token,
        name: session.name,
        email: session.email,
        expires_at: session.expires_at,
    }))
}

// Handler for POST /logout
pub async fn handle_logout(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let removed = app_state.sessions.logout(&user.token).await;
    tracing::info!(user = %user.name, removed, "Logout");
    Ok(Json(LogoutResponse { success: removed }))
}
