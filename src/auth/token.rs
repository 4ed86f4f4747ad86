use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Lifetime of an access token, in minutes.
const TOKEN_TTL_MINUTES: i64 = 30;

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the authenticated user's email address.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Issues and verifies signed, time-limited bearer tokens.
///
/// The service owns the HS256 signing key. It is constructed once at startup
/// and shared with the request handlers as application data; with
/// [`TokenService::with_random_key`] the key lives only as long as the
/// process, so a restart invalidates every outstanding token.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Creates a token service signing with the given secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Creates a token service with a fresh 32-byte key from the OS RNG.
    ///
    /// The key is never persisted; tokens issued before a restart will no
    /// longer verify afterwards.
    pub fn with_random_key() -> Self {
        let mut secret = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self::new(&secret)
    }

    /// Issues a token for the given email, expiring in 30 minutes.
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::minutes(TOKEN_TTL_MINUTES))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: email.to_string(),
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token string and decodes its claims.
    ///
    /// Returns `AppError::Unauthorized` if the token is malformed, its
    /// signature does not match, the `sub` claim is missing, or the token has
    /// expired. Expiry is checked without leeway.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}
