// Session token issue and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// Session tokens are valid for 30 days from issuance.
pub const SESSION_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// JWT claims carried by a session token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user identifier
    iat: i64,
    exp: i64,
}

/// Outcome of verifying an inbound token. Missing, malformed, expired and
/// tampered tokens all collapse into `Invalid`; callers treat that as
/// anonymous, never as a request-fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    Valid { subject: String },
    Invalid,
}

/// Signs and verifies session tokens with a server-held secret.
pub struct TokenCodec {
    secret: String,
}

impl TokenCodec {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Issue a signed session token for the given subject, expiring
    /// [`SESSION_TTL_SECS`] from now.
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        self.issue_at(subject, Utc::now().timestamp())
    }

    fn issue_at(&self, subject: &str, issued_at: i64) -> Result<String, AuthError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at,
            exp: issued_at + SESSION_TTL_SECS,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Decode and verify a token: signature and expiry must both check out.
    pub fn verify(&self, token: &str) -> TokenOutcome {
        // No leeway: a token past its expiry is invalid immediately.
        let mut validation = Validation::default();
        validation.leeway = 0;

        match decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => TokenOutcome::Valid {
                subject: data.claims.sub,
            },
            Err(_) => TokenOutcome::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_codec() -> TokenCodec {
        TokenCodec::new("test_secret_key_for_testing_purposes".to_string())
    }

    /// Flip one character of a token so the signature no longer matches.
    fn tamper(token: &str) -> String {
        let mut chars: Vec<char> = token.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == 'A' { 'B' } else { 'A' };
        chars.into_iter().collect()
    }

    #[test]
    fn test_round_trip() {
        let codec = test_codec();
        let token = codec.issue("65b2f0c8a1d4e9f3b7c6a5d4").unwrap();
        assert_eq!(
            codec.verify(&token),
            TokenOutcome::Valid {
                subject: "65b2f0c8a1d4e9f3b7c6a5d4".to_string()
            }
        );
    }

    #[test]
    fn test_expiry_is_30_days() {
        let codec = test_codec();
        let now = Utc::now().timestamp();
        let token = codec.issue_at("user-1", now).unwrap();
        let claims = decode::<Claims>(
            &token,
            &DecodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
            &Validation::default(),
        )
        .unwrap()
        .claims;
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECS);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let codec = test_codec();
        // Issued 60 days ago with a 30-day lifetime
        let past = Utc::now().timestamp() - 60 * 24 * 60 * 60;
        let token = codec.issue_at("user-1", past).unwrap();
        assert_eq!(codec.verify(&token), TokenOutcome::Invalid);
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let codec = test_codec();
        let token = codec.issue("user-1").unwrap();
        assert_eq!(codec.verify(&tamper(&token)), TokenOutcome::Invalid);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuing = TokenCodec::new("secret1".to_string());
        let verifying = TokenCodec::new("secret2".to_string());
        let token = issuing.issue("user-1").unwrap();
        assert_eq!(verifying.verify(&token), TokenOutcome::Invalid);
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        let codec = test_codec();
        assert_eq!(codec.verify(""), TokenOutcome::Invalid);
        assert_eq!(codec.verify("not.a.token"), TokenOutcome::Invalid);
        assert_eq!(codec.verify("no-dots-at-all"), TokenOutcome::Invalid);
    }

    proptest! {
        #[test]
        fn prop_round_trip(subject in "[0-9a-f]{24}") {
            let codec = test_codec();
            let token = codec.issue(&subject)?;
            prop_assert_eq!(codec.verify(&token), TokenOutcome::Valid { subject });
        }

        #[test]
        fn prop_random_strings_rejected(garbage in "[a-zA-Z0-9]{10,50}") {
            let codec = test_codec();
            prop_assert_eq!(codec.verify(&garbage), TokenOutcome::Invalid);
        }
    }
}
