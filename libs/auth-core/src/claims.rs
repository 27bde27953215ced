//! JWT claims, roles and the HS256 verifier

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Role carried in the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

/// Claims stored in the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Employee NIK (subject)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Role for authorization checks
    pub role: Role,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Build claims for an employee valid for `ttl_minutes`
    pub fn new(nik: impl Into<String>, name: impl Into<String>, role: Role, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: nik.into(),
            name: name.into(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(ttl_minutes)).timestamp(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Token verification failures
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0}")]
    Invalid(String),
}

/// HS256 signer/verifier built from the configured secret
pub struct TokenVerifier {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    /// Sign claims into a compact token
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::default(), claims, &self.encoding)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }

    /// Verify a compact token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_round_trip() {
        let verifier = TokenVerifier::new("test-secret-at-least-32-bytes-long!");
        let claims = Claims::new("199103052019031007", "Siti Rahma", Role::Employee, 60);

        let token = claims_token(&verifier, &claims);
        let parsed = verifier.verify(&token).ok();
        let parsed = match parsed {
            Some(c) => c,
            None => panic!("fresh token must verify"),
        };
        assert_eq!(parsed.sub, claims.sub);
        assert_eq!(parsed.role, Role::Employee);
        assert!(!parsed.is_admin());
    }

    #[test]
    fn expired_token_is_rejected() {
        let verifier = TokenVerifier::new("test-secret-at-least-32-bytes-long!");
        // exp in the past, beyond jsonwebtoken's default leeway
        let claims = Claims::new("199103052019031007", "Siti Rahma", Role::Admin, -10);

        let token = claims_token(&verifier, &claims);
        assert!(matches!(verifier.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let signer = TokenVerifier::new("one-secret-that-is-long-enough-0000");
        let verifier = TokenVerifier::new("another-secret-that-is-long-enough");
        let claims = Claims::new("123", "X", Role::Employee, 60);

        let token = claims_token(&signer, &claims);
        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid(_))));
    }

    fn claims_token(verifier: &TokenVerifier, claims: &Claims) -> String {
        match verifier.sign(claims) {
            Ok(t) => t,
            Err(e) => panic!("signing must succeed: {}", e),
        }
    }
}
