use models::sea_orm_active_enums::Role;
use models::users;
use async_graphql::Context;
use std::fmt;

/// Fixed message every admin-only procedure rejects with.
pub const ADMIN_ONLY_MESSAGE: &str = "Restricted to administrators";

/// The caller identity the HTTP layer resolved from the session cookie and
/// attached to the request; `None` is an anonymous caller.
pub struct CurrentUser(pub Option<users::Model>);

pub struct AuthorizationError {
    pub message: String,
}

impl fmt::Display for AuthorizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

pub trait RequiresAuth {
    fn current_user<'a>(&self, ctx: &Context<'a>) -> Option<&'a users::Model> {
        ctx.data_opt::<CurrentUser>().and_then(|c| c.0.as_ref())
    }

    fn require_authenticate_as_admin<'a>(
        &self,
        ctx: &Context<'a>,
    ) -> Result<&'a users::Model, AuthorizationError> {
        match self.current_user(ctx) {
            Some(user) if user.role == Role::Admin => Ok(user),
            _ => Err(AuthorizationError {
                message: ADMIN_ONLY_MESSAGE.to_string(),
            }),
        }
    }
}
