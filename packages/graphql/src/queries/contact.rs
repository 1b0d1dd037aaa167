use async_graphql::{Context, Object, Result};
use repositories::ContactRepository;
use sea_orm::DatabaseConnection;

use crate::errors::AuthError;
use crate::types::contact::ContactSubmission;
use crate::utilities::requires_auth::RequiresAuth;

#[derive(Default)]
pub struct ContactQueries;

impl RequiresAuth for ContactQueries {}

#[Object]
impl ContactQueries {
    /// Every contact-form submission, newest first.
    async fn contact_submissions(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Vec<ContactSubmission>, AuthError> {
        self.require_authenticate_as_admin(ctx)?;
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let submissions = ContactRepository::list(db)
            .await
            .map_err(|message| AuthError { message })?;

        Ok(submissions.iter().map(ContactSubmission::from).collect())
    }
}
