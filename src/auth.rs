//! Bearer credential verification against the process-wide signing secret.
//!
//! Verification is pure: given the raw `authorization` header value and the
//! secret, it either resolves the caller's user id or rejects. A missing
//! header, a malformed header, an unsigned token and an expired token all
//! collapse into the same `AuthenticationFailed` rejection so that an
//! unauthenticated caller learns nothing from the failure mode.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id the credential asserts.
    sub: i32,
    /// Expiry as a unix timestamp.
    exp: i64,
}

/// Sign a credential for `user_id`, valid for `ttl`. Used when issuing
/// tokens on signup and by the test harness to mint authorization headers.
pub fn mint_token(user_id: i32, secret: &str, ttl: Duration) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + ttl).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

/// Resolve the caller's user id from a raw `authorization` header value.
///
/// The header must be present and of the form `Bearer <token>`, and the
/// token must verify under `secret` and not be expired.
pub fn verify_bearer(header: Option<&str>, secret: &str) -> Result<i32, AppError> {
    let header = header.ok_or(AppError::AuthenticationFailed)?;
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AppError::AuthenticationFailed)?;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::AuthenticationFailed)?;

    Ok(data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[test]
    fn minted_token_resolves_to_subject() {
        let token = mint_token(42, SECRET, Duration::hours(1)).unwrap();
        let subject = verify_bearer(Some(&bearer(&token)), SECRET).unwrap();
        assert_eq!(subject, 42);
    }

    #[test]
    fn missing_header_is_rejected() {
        let err = verify_bearer(None, SECRET).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationFailed));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let err = verify_bearer(Some("Bearer xxxxx"), SECRET).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationFailed));
    }

    #[test]
    fn header_without_bearer_prefix_is_rejected() {
        let token = mint_token(42, SECRET, Duration::hours(1)).unwrap();
        let err = verify_bearer(Some(&token), SECRET).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationFailed));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = mint_token(42, "other-secret", Duration::hours(1)).unwrap();
        let err = verify_bearer(Some(&bearer(&token)), SECRET).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationFailed));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the default validation leeway of 60 seconds.
        let token = mint_token(42, SECRET, Duration::hours(-2)).unwrap();
        let err = verify_bearer(Some(&bearer(&token)), SECRET).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationFailed));
    }
}
