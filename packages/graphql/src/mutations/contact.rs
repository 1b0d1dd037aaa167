use crate::errors::{AuthError, DbError, ValidationErrorType};
use crate::types::contact::{ContactSubmission as SubmissionType, DeletedSubmission};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, InputObject, Object, Result, Union};
use repositories::ContactRepository;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;
use services::validation::input_validator::InputValidator;
use services::validation::validation_errors_to_message;

use super::input_validators::ContactInput;

#[derive(Union)]
pub enum ContactMutationResult {
    ChangedSubmission(SubmissionType),
    DeletedSubmission(DeletedSubmission),
    ValidationError(ValidationErrorType),
    DbError(DbError),
    AuthError(AuthError),
}

#[derive(InputObject)]
struct SubmissionIdInput {
    id: Uuid,
}

#[derive(Default)]
pub struct ContactMutation;

impl RequiresAuth for ContactMutation {}

#[Object]
impl ContactMutation {
    /// Public contact form; anyone may submit.
    async fn submit_contact(
        &self,
        ctx: &Context<'_>,
        submission: ContactInput,
    ) -> Result<ContactMutationResult> {
        if let Err(errors) = submission.validate() {
            return Ok(ContactMutationResult::ValidationError(
                ValidationErrorType {
                    message: validation_errors_to_message(&errors),
                },
            ));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match ContactRepository::submit(
            db,
            submission.name,
            submission.email,
            submission.phone,
            submission.company,
            submission.message,
        )
        .await
        {
            Ok(s) => Ok(ContactMutationResult::ChangedSubmission(SubmissionType::from(&s))),
            Err(e) => {
                tracing::error!("failed to store contact submission");
                Ok(ContactMutationResult::DbError(DbError { message: e }))
            }
        }
    }

    async fn mark_contact_as_read(
        &self,
        ctx: &Context<'_>,
        submission: SubmissionIdInput,
    ) -> Result<ContactMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(ContactMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match ContactRepository::mark_as_read(db, submission.id).await {
            Ok(s) => Ok(ContactMutationResult::ChangedSubmission(SubmissionType::from(&s))),
            Err(e) => Ok(ContactMutationResult::DbError(DbError { message: e })),
        }
    }

    async fn delete_contact_submission(
        &self,
        ctx: &Context<'_>,
        submission: SubmissionIdInput,
    ) -> Result<ContactMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(ContactMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match ContactRepository::delete(db, submission.id).await {
            Ok(id) => Ok(ContactMutationResult::DeletedSubmission(DeletedSubmission {
                id,
            })),
            Err(e) => Ok(ContactMutationResult::DbError(DbError { message: e })),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use crate::utilities::requires_auth::CurrentUser;
    use async_graphql::Request;
    use repositories::ContactRepository;

    #[tokio::test]
    async fn test_submit_contact_is_public_and_starts_unread() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let email = format!("publico_{}@example.com", uuid::Uuid::new_v4());

        let query = format!(
            r#"mutation {{
                submitContact(submission: {{
                    name: "Maria", email: "{}", message: "Quero ajuda com o caixa."
                }}) {{
                    ... on ContactSubmission {{ id read }}
                }}
            }}"#,
            email
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(None)))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["submitContact"]["read"], false);

        let id = data["submitContact"]["id"].as_str().unwrap().parse().unwrap();
        ContactRepository::delete(&db, id).await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_contact_invalid_email_returns_validation_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());

        let query = r#"mutation {
            submitContact(submission: {
                name: "Maria", email: "sem-arroba", message: "Olá"
            }) {
                ... on ValidationErrorType { message }
                ... on ContactSubmission { id }
            }
        }"#;

        let res = schema
            .execute(Request::new(query).data(CurrentUser(None)))
            .await;
        let data = res.data.into_json().unwrap();

        assert!(data["submitContact"]["message"]
            .as_str()
            .unwrap()
            .contains("Email"));
    }

    #[tokio::test]
    async fn test_mark_as_read_requires_admin() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());

        let query = format!(
            r#"mutation {{
                markContactAsRead(submission: {{ id: "{}" }}) {{
                    ... on AuthError {{ message }}
                    ... on ContactSubmission {{ id }}
                }}
            }}"#,
            uuid::Uuid::new_v4()
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(None)))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(
            data["markContactAsRead"]["message"],
            "Restricted to administrators"
        );
    }

    #[tokio::test]
    async fn test_mark_as_read_flips_flag_for_admin() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "contact_read").await;

        let submission = ContactRepository::submit(
            &db,
            "João".to_string(),
            format!("joao_{}@example.com", uuid::Uuid::new_v4()),
            None,
            None,
            "Mensagem".to_string(),
        )
        .await
        .unwrap();

        let query = format!(
            r#"mutation {{
                markContactAsRead(submission: {{ id: "{}" }}) {{
                    ... on ContactSubmission {{ read }}
                }}
            }}"#,
            submission.id
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(Some(admin.clone()))))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["markContactAsRead"]["read"], true);

        ContactRepository::delete(&db, submission.id).await.unwrap();
        cleanup_user_by_open_id(&db, &open_id).await;
    }
}
