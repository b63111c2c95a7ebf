//! Signed access tokens.
//!
//! A token only proves who the caller is: the claims carry the identity id
//! and timing fields. Privilege is read from the `users` row on each request
//! by [`AuthUser`](crate::middleware::auth::AuthUser), so deactivating or
//! demoting an account takes effect immediately.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use learning_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::TokenConfig;

/// Payload of an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Identity id (`users.id`).
    pub sub: DbId,
    pub iat: i64,
    pub exp: i64,
    /// Per-token id, logged on rejection.
    pub jti: Uuid,
}

/// An issued token and its lifetime.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in_secs: i64,
}

/// HS256 keys derived once from the configured secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl TokenKeys {
    pub fn new(config: &TokenConfig) -> Self {
        let secret = config.secret.as_bytes();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            lifetime: Duration::minutes(config.lifetime_mins),
        }
    }

    /// Sign a fresh token for `user_id`.
    pub fn issue(&self, user_id: DbId) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
        let issued_at = Utc::now();
        let claims = AccessClaims {
            sub: user_id,
            iat: issued_at.timestamp(),
            exp: (issued_at + self.lifetime).timestamp(),
            jti: Uuid::new_v4(),
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(IssuedToken {
            token,
            expires_in_secs: self.lifetime.num_seconds(),
        })
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        jsonwebtoken::decode::<AccessClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
    }
}
