use serde::{Deserialize, Serialize};

/// Claims carried by the session cookie. `sub` is the caller's external
/// identity (`openId`); the optional profile fields are applied when an
/// unknown identity is provisioned on first sight.
#[derive(Deserialize, Serialize, Debug)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_method: Option<String>,
}
