use super::{PostMutation, PostMutationResult};
use crate::errors::{AuthError, DbError};
use crate::types::post::DeletedPost;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use repositories::PostRepository;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub(super) async fn delete_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    id: Uuid,
) -> Result<PostMutationResult> {
    if let Err(e) = mutation.require_authenticate_as_admin(ctx) {
        return Ok(PostMutationResult::AuthError(AuthError {
            message: e.to_string(),
        }));
    }

    let db = ctx.data::<DatabaseConnection>().unwrap();

    if let Ok(cache) = ctx.data::<crate::utilities::MarkdownCache>() {
        cache.invalidate(&id);
    }

    match PostRepository::delete_post(db, id).await {
        Ok(id) => Ok(PostMutationResult::DeletedPost(DeletedPost { id })),
        Err(e) => Ok(PostMutationResult::DbError(DbError { message: e })),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use crate::utilities::requires_auth::CurrentUser;
    use async_graphql::Request;
    use repositories::PostRepository;

    #[tokio::test]
    async fn test_delete_post_unauthenticated_returns_auth_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "del_unauth").await;
        let post = create_test_post(&db, admin.id, "Fica", false).await;

        let query = format!(
            r#"mutation {{
                deletePost(post: {{ id: "{}" }}) {{
                    ... on AuthError {{ message }}
                    ... on DeletedPost {{ id }}
                }}
            }}"#,
            post.id
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(None)))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(
            data["deletePost"]["message"],
            "Restricted to administrators"
        );

        // still there
        let found = PostRepository::get_by_id(&db, post.id).await.unwrap();
        assert!(found.is_some());

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_delete_post_removes_row() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "del_ok").await;
        let post = create_test_post(&db, admin.id, "Some", false).await;

        let query = format!(
            r#"mutation {{
                deletePost(post: {{ id: "{}" }}) {{
                    ... on DeletedPost {{ id }}
                }}
            }}"#,
            post.id
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(Some(admin.clone()))))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["deletePost"]["id"], post.id.to_string());

        let found = PostRepository::get_by_id(&db, post.id).await.unwrap();
        assert!(found.is_none());

        cleanup_user_by_open_id(&db, &open_id).await;
    }
}
