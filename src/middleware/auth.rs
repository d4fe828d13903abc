use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Pulls the bearer credential out of the request headers, if any.
///
/// This is the only place the application reads the raw `Authorization`
/// header; everything downstream works with the extracted token or the
/// claims derived from it.
pub fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

fn unauthorized() -> AppError {
    AppError::unauthorized(anyhow::anyhow!("Authentication required"))
}

/// Extractor that validates the JWT and provides the authenticated user's
/// claims.
///
/// Rejection is a single uniform 401 response: a missing header, a bad
/// signature, an expired token, and a garbled token are indistinguishable
/// to the caller. The specific reason is logged server-side only.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the user ID as UUID
    pub fn user_id(&self) -> Result<uuid::Uuid, AppError> {
        uuid::Uuid::parse_str(&self.0.sub).map_err(|_| {
            tracing::debug!("token subject is not a valid user id");
            unauthorized()
        })
    }

    /// Get the user's email
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Get the user's role
    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn is_admin(&self) -> bool {
        self.0.role == UserRole::Admin
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            tracing::debug!("request carried no bearer credential");
            return Err(unauthorized());
        };

        match verify_token(token, &state.jwt_config) {
            Ok(claims) => Ok(AuthUser(claims)),
            Err(reason) => {
                tracing::debug!(%reason, "bearer token failed verification");
                Err(unauthorized())
            }
        }
    }
}

/// Never-rejecting variant of [`AuthUser`] for endpoints where anonymous
/// access is valid. A missing token and a token that fails verification
/// both come back as `None`; the distinction is collapsed at this layer.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}
