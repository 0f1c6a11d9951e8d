//! JWT issuance and verification for the Motorparts back office.
//!
//! This crate is transport-agnostic: it knows nothing about HTTP headers or
//! extractors. The REST layer parses the `Authorization` header and hands the
//! raw token to [`TokenService::verify`].

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Claims carried by every bearer token.
///
/// `role` stays a plain string here so the lib does not depend on the
/// back-office domain types; callers parse it on their side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i32,
    /// User email at issuance time
    pub email: String,
    /// Role name (`admin`, `employee`)
    pub role: String,
    /// Expiry, seconds since epoch
    pub exp: i64,
    /// Issued-at, seconds since epoch
    pub iat: i64,
}

/// Token errors surfaced to callers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
    #[error("failed to sign token")]
    Signing,
}

/// Stateless HS256 token service.
///
/// Tokens carry their own expiry; there is no revocation list.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Default token lifetime: one hour.
    pub const DEFAULT_TTL_SECS: i64 = 3600;

    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, Duration::seconds(Self::DEFAULT_TTL_SECS))
    }

    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl,
        }
    }

    /// Issue a signed token for the given user.
    pub fn issue(&self, user_id: i32, email: &str, role: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            role: role.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| AuthError::Signing)
    }

    /// Verify signature and expiry, returning the claims on success.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => Err(AuthError::Expired),
                _ => Err(AuthError::Invalid),
            },
        }
    }
}
