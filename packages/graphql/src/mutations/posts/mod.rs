use crate::errors::{AuthError, DbError, ValidationErrorType};
use crate::types::post::{DeletedPost, Post as PostType};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, InputObject, Object, Result, Union};
use sea_orm::entity::prelude::Uuid;

pub(super) use super::input_validators::{AddPostInput, UpdatePostInput};

mod add_post;
mod delete_post;
mod update_post;

#[derive(Union)]
pub enum PostMutationResult {
    ChangedPost(PostType),
    DeletedPost(DeletedPost),
    ValidationError(ValidationErrorType),
    DbError(DbError),
    AuthError(AuthError),
}

#[derive(InputObject)]
struct DeletePostInput {
    id: Uuid,
}

#[derive(Default)]
pub struct PostMutation;

impl RequiresAuth for PostMutation {}

#[Object]
impl PostMutation {
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        new_post: AddPostInput,
    ) -> Result<PostMutationResult> {
        add_post::add_post(self, ctx, new_post).await
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        post: UpdatePostInput,
    ) -> Result<PostMutationResult> {
        update_post::update_post(self, ctx, post).await
    }

    async fn delete_post(
        &self,
        ctx: &Context<'_>,
        post: DeletePostInput,
    ) -> Result<PostMutationResult> {
        delete_post::delete_post(self, ctx, post.id).await
    }
}
