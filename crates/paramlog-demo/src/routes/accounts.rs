use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogInForm {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AccountResponse {
    pub email: String,
}

pub async fn sign_up(Form(form): Form<SignUpForm>) -> Result<Json<AccountResponse>, ApiError> {
    if form.password.is_empty() {
        return Err(ApiError::BadRequest("password must not be empty".to_string()));
    }
    if form.password != form.password_confirmation {
        return Err(ApiError::BadRequest("passwords do not match".to_string()));
    }
    Ok(Json(AccountResponse { email: form.email }))
}

/// Always rejects; the request is still logged with the password filtered.
pub async fn log_in(Form(form): Form<LogInForm>) -> Result<Json<AccountResponse>, ApiError> {
    tracing::debug!(email = %form.email, password_len = form.password.len(), "login attempt");
    Err(ApiError::Unauthorized("invalid credentials".to_string()))
}
