//! Registration, login, profile and password-reset handlers

use crate::api::rest::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::Backoffice;
use axum::{
    extract::{Multipart, Path},
    http::StatusCode,
    Extension, Json,
};
use motorparts_auth::Claims;
use std::sync::Arc;

/// Register a new user and return a signed token
pub async fn register(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), Problem> {
    let (user, token) = state
        .identity
        .register(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// Authenticate with email and password
pub async fn login(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, Problem> {
    let (user, token) = state
        .identity
        .login(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// Profile of the authenticated user
pub async fn get_profile(
    Extension(state): Extension<Arc<Backoffice>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserDto>, Problem> {
    let user = state
        .identity
        .get_profile(claims.sub)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(user.into()))
}

/// Update the authenticated user's profile
pub async fn update_profile(
    Extension(state): Extension<Arc<Backoffice>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserDto>, Problem> {
    let user = state
        .identity
        .update_profile(claims.sub, &req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(user.into()))
}

/// Replace the authenticated user's avatar
pub async fn update_avatar(
    Extension(state): Extension<Arc<Backoffice>>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<Json<UserDto>, Problem> {
    let path = super::save_upload(&state.config.uploads_dir, "avatars", multipart).await?;
    let user = state
        .identity
        .update_avatar(claims.sub, path)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(user.into()))
}

/// Start a password reset; always acknowledges neutrally
pub async fn forgot_password(
    Extension(state): Extension<Arc<Backoffice>>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, Problem> {
    state
        .identity
        .forgot_password(req.email.as_deref())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MessageResponse {
        message: "Si un compte existe pour cette adresse, un e-mail de réinitialisation a été envoyé"
            .to_string(),
    }))
}

/// Complete a password reset with the mailed token
pub async fn reset_password(
    Extension(state): Extension<Arc<Backoffice>>,
    Path(token): Path<String>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, Problem> {
    state
        .identity
        .reset_password(&token, req.password.as_deref())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MessageResponse {
        message: "Mot de passe réinitialisé".to_string(),
    }))
}
