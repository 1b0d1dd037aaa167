use crate::errors::AuthError;
use actix_web::cookie::{Cookie, SameSite};
use async_graphql::{Context, Object, Result};
use services::admin_gate;
use services::session::SESSION_COOKIE;

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Expires the session cookie. Safe to call anonymously.
    async fn logout(&self, ctx: &Context<'_>) -> bool {
        let expired = Cookie::build(SESSION_COOKIE, "")
            .http_only(true)
            .secure(false)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .finish();

        ctx.insert_http_header("Set-Cookie", expired.to_string());

        tracing::info!("logout");

        true
    }

    /// Legacy shared-password gate for the old admin UI shell. Deprecated in
    /// favor of the role-based session; grants nothing at the procedure
    /// layer.
    async fn verify_admin_password(
        &self,
        ctx: &Context<'_>,
        password: String,
    ) -> Result<bool, AuthError> {
        if !admin_gate::verify_password(&password) {
            tracing::warn!("admin gate challenge failed");
            return Err(AuthError {
                message: "Invalid password".to_string(),
            });
        }

        let cookie = Cookie::build(admin_gate::ADMIN_GATE_COOKIE, "true")
            .secure(false)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(actix_web::cookie::time::Duration::hours(12))
            .finish();

        ctx.insert_http_header("Set-Cookie", cookie.to_string());

        Ok(true)
    }

    /// Clears the legacy gate cookie.
    async fn admin_gate_logout(&self, ctx: &Context<'_>) -> bool {
        let expired = Cookie::build(admin_gate::ADMIN_GATE_COOKIE, "")
            .secure(false)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .finish();

        ctx.insert_http_header("Set-Cookie", expired.to_string());

        true
    }
}
