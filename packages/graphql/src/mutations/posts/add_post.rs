use super::{AddPostInput, PostMutation, PostMutationResult};
use crate::errors::{AuthError, DbError, ValidationErrorType};
use crate::types::post::Post as PostType;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use repositories::{NewPost, PostRepository};
use sea_orm::*;
use services::validation::input_validator::InputValidator;
use services::validation::validation_errors_to_message;

pub(super) async fn add_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    new_post: AddPostInput,
) -> Result<PostMutationResult> {
    let user = match mutation.require_authenticate_as_admin(ctx) {
        Ok(user) => user,
        Err(e) => {
            return Ok(PostMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }
    };

    if let Err(errors) = new_post.validate() {
        return Ok(PostMutationResult::ValidationError(ValidationErrorType {
            message: validation_errors_to_message(&errors),
        }));
    }

    let db = ctx.data::<DatabaseConnection>().unwrap();

    let input = NewPost {
        title: new_post.title,
        slug: new_post.slug,
        excerpt: new_post.excerpt,
        content: new_post.content,
        image_url: new_post.image_url,
        category_id: new_post.category_id,
        published: new_post.published.unwrap_or(false),
    };

    match PostRepository::create_post(db, user.id, input).await {
        Ok(p) => Ok(PostMutationResult::ChangedPost(PostType::from_model(&p, None))),
        Err(e) => {
            tracing::error!("failed to insert post");
            Ok(PostMutationResult::DbError(DbError { message: e }))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use crate::utilities::requires_auth::CurrentUser;
    use async_graphql::Request;

    #[tokio::test]
    async fn test_add_post_unauthenticated_returns_auth_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());

        let query = r#"mutation {
            addPost(newPost: { title: "Teste", content: "corpo" }) {
                ... on AuthError { message }
                ... on Post { id }
            }
        }"#;

        let res = schema
            .execute(Request::new(query).data(CurrentUser(None)))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addPost"]["message"], "Restricted to administrators");
    }

    #[tokio::test]
    async fn test_add_post_non_admin_returns_auth_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (user, open_id) = create_test_user(&db, "add_nonadmin").await;

        let query = r#"mutation {
            addPost(newPost: { title: "Teste", content: "corpo" }) {
                ... on AuthError { message }
                ... on Post { id }
            }
        }"#;

        let res = schema
            .execute(Request::new(query).data(CurrentUser(Some(user))))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addPost"]["message"], "Restricted to administrators");

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_add_post_empty_title_returns_validation_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "add_blank").await;

        let query = r#"mutation {
            addPost(newPost: { title: "  ", content: "corpo" }) {
                ... on ValidationErrorType { message }
                ... on Post { id }
            }
        }"#;

        let res = schema
            .execute(Request::new(query).data(CurrentUser(Some(admin.clone()))))
            .await;
        let data = res.data.into_json().unwrap();

        assert!(data["addPost"]["message"]
            .as_str()
            .unwrap()
            .contains("title"));

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_add_post_published_stamps_published_at() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "add_pub").await;
        let slug = unique_slug("lancado");

        let query = format!(
            r#"mutation {{
                addPost(newPost: {{
                    title: "Post de Teste", content: "conteúdo", slug: "{}", published: true
                }}) {{
                    ... on Post {{ id slug published publishedAt authorId }}
                    ... on ValidationErrorType {{ message }}
                }}
            }}"#,
            slug
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(Some(admin.clone()))))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["addPost"]["slug"], slug);
        assert_eq!(data["addPost"]["published"], true);
        assert!(data["addPost"]["publishedAt"].as_str().is_some());
        assert_eq!(data["addPost"]["authorId"], admin.id.to_string());

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_add_post_derives_slug_from_title() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "add_slug").await;
        let marker = uuid::Uuid::new_v4().simple().to_string();

        let query = format!(
            r#"mutation {{
                addPost(newPost: {{ title: "Gestão Financeira {}", content: "corpo" }}) {{
                    ... on Post {{ slug }}
                }}
            }}"#,
            marker
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(Some(admin.clone()))))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(
            data["addPost"]["slug"],
            format!("gestao-financeira-{}", marker)
        );

        cleanup_user_by_open_id(&db, &open_id).await;
    }
}
