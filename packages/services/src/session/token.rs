use crate::session::claims::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::Error, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use models::users;
use std::env;
use uuid::Uuid;

/// The raw value of the session cookie.
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn new(value: String) -> Self {
        SessionToken(value)
    }

    pub fn verify(&self) -> Result<TokenData<Claims>, Error> {
        decode::<Claims>(
            &self.0,
            &DecodingKey::from_secret(secret().as_ref()),
            &Validation::default(),
        )
    }
}

/// Mints a session token for an already-known user. The upstream identity
/// provider issues these in production; this is used by tooling and tests.
pub fn generate_session_token(user: &users::Model) -> String {
    let expiration = Utc::now() + Duration::seconds(expiration_seconds());
    let claims = Claims {
        iss: issuer(),
        sub: user.open_id.clone(),
        exp: expiration.timestamp(),
        iat: Utc::now().timestamp(),
        jti: Uuid::new_v4().to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        login_method: user.login_method.clone(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret().as_ref()),
    )
    .expect("session token encoding cannot fail with an HMAC key")
}

fn secret() -> String {
    env::var("SESSION_SECRET").unwrap_or_else(|_| "secret".to_string())
}

fn issuer() -> String {
    env::var("HOST_NAME").unwrap_or_else(|_| "localhost".to_string())
}

fn expiration_seconds() -> i64 {
    env::var("SESSION_TTL_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60 * 60 * 24 * 7)
}
