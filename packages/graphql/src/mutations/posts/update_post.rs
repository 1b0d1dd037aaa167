use super::{PostMutation, PostMutationResult, UpdatePostInput};
use crate::errors::{AuthError, DbError, ValidationErrorType};
use crate::types::post::Post as PostType;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, MaybeUndefined, Result};
use repositories::{PostChanges, PostRepository};
use sea_orm::*;
use services::validation::input_validator::InputValidator;
use services::validation::validation_errors_to_message;

pub(super) async fn update_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    post: UpdatePostInput,
) -> Result<PostMutationResult> {
    if let Err(e) = mutation.require_authenticate_as_admin(ctx) {
        return Ok(PostMutationResult::AuthError(AuthError {
            message: e.to_string(),
        }));
    }

    if let Err(errors) = post.validate() {
        return Ok(PostMutationResult::ValidationError(ValidationErrorType {
            message: validation_errors_to_message(&errors),
        }));
    }

    let db = ctx.data::<DatabaseConnection>().unwrap();

    // Drop the stale rendered body for this post
    if let Ok(cache) = ctx.data::<crate::utilities::MarkdownCache>() {
        cache.invalidate(&post.id);
    }

    let category_id = match post.category_id {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(id) => Some(Some(id)),
    };

    let changes = PostChanges {
        title: post.title,
        slug: post.slug,
        excerpt: post.excerpt,
        content: post.content,
        image_url: post.image_url,
        category_id,
        published: post.published,
    };

    match PostRepository::update_post(db, post.id, changes).await {
        Ok(p) => Ok(PostMutationResult::ChangedPost(PostType::from_model(&p, None))),
        Err(e) => Ok(PostMutationResult::DbError(DbError { message: e })),
    }
}
