use async_graphql::{Context, Object};

use crate::types::user::User;
use crate::utilities::requires_auth::RequiresAuth;

#[derive(Default)]
pub struct AuthQueries;

impl RequiresAuth for AuthQueries {}

#[Object]
impl AuthQueries {
    /// The caller identity resolved from the session, or null for an
    /// anonymous visitor.
    async fn me(&self, ctx: &Context<'_>) -> Option<User> {
        self.current_user(ctx).map(User::from)
    }
}
