//! Axum extractor for authenticated requests
//!
//! Looks up the shared [`TokenVerifier`] in the request extensions (the
//! server layers it once for the whole router) and validates the bearer
//! token from the `Authorization` header.

use crate::claims::{Claims, Role, TokenError, TokenVerifier};
use axum::{extract::FromRequestParts, http::request::Parts};
use http_problem::Problem;
use std::sync::Arc;

/// Authenticated caller, extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub nik: String,
    pub name: String,
    pub role: Role,
}

impl AuthUser {
    /// Reject non-admin callers with a 403 problem
    pub fn require_admin(&self) -> Result<(), Problem> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(Problem::forbidden("This endpoint requires the admin role"))
        }
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            nik: claims.sub,
            name: claims.name,
            role: claims.role,
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Reuse a previous extraction on the same request
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let verifier = parts
            .extensions
            .get::<Arc<TokenVerifier>>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("TokenVerifier extension missing; auth layer not installed");
                Problem::internal()
            })?;

        let token = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or_else(|| Problem::unauthorized("Missing bearer token"))?;

        let claims = verifier.verify(token).map_err(|e| {
            tracing::warn!(uri = %parts.uri, error = %e, "rejected bearer token");
            match e {
                TokenError::Expired => Problem::unauthorized("Token expired"),
                TokenError::Invalid(_) => Problem::unauthorized("Invalid token"),
            }
        })?;

        let user = AuthUser::from(claims);
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
