use crate::errors::{AuthError, DbError, ValidationErrorType};
use crate::types::tag::{DeletedTag, PostTagList, Tag as TagType};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, InputObject, Object, Result, Union};
use repositories::{TagChanges, TagRepository};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;
use services::validation::input_validator::InputValidator;
use services::validation::validation_errors_to_message;

use super::input_validators::{AddTagInput, UpdateTagInput};

#[derive(Union)]
pub enum TagMutationResult {
    ChangedTag(TagType),
    DeletedTag(DeletedTag),
    PostTagList(PostTagList),
    ValidationError(ValidationErrorType),
    DbError(DbError),
    AuthError(AuthError),
}

#[derive(InputObject)]
struct DeleteTagInput {
    id: Uuid,
}

/// The full replacement set; an empty list clears every tag off the post.
#[derive(InputObject)]
struct SetPostTagsInput {
    post_id: Uuid,
    tag_ids: Vec<Uuid>,
}

#[derive(Default)]
pub struct TagMutation;

impl RequiresAuth for TagMutation {}

#[Object]
impl TagMutation {
    async fn add_tag(&self, ctx: &Context<'_>, new_tag: AddTagInput) -> Result<TagMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(TagMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        if let Err(errors) = new_tag.validate() {
            return Ok(TagMutationResult::ValidationError(ValidationErrorType {
                message: validation_errors_to_message(&errors),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match TagRepository::create_tag(db, new_tag.name, new_tag.slug, new_tag.color).await {
            Ok(t) => Ok(TagMutationResult::ChangedTag(TagType::from(&t))),
            Err(e) => Ok(TagMutationResult::DbError(DbError { message: e })),
        }
    }

    async fn update_tag(&self, ctx: &Context<'_>, tag: UpdateTagInput) -> Result<TagMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(TagMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        if let Err(errors) = tag.validate() {
            return Ok(TagMutationResult::ValidationError(ValidationErrorType {
                message: validation_errors_to_message(&errors),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        let changes = TagChanges {
            name: tag.name,
            slug: tag.slug,
            color: tag.color,
        };

        match TagRepository::update_tag(db, tag.id, changes).await {
            Ok(t) => Ok(TagMutationResult::ChangedTag(TagType::from(&t))),
            Err(e) => Ok(TagMutationResult::DbError(DbError { message: e })),
        }
    }

    async fn delete_tag(&self, ctx: &Context<'_>, tag: DeleteTagInput) -> Result<TagMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(TagMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match TagRepository::delete_tag(db, tag.id).await {
            Ok(id) => Ok(TagMutationResult::DeletedTag(DeletedTag { id })),
            Err(e) => Ok(TagMutationResult::DbError(DbError { message: e })),
        }
    }

    /// Replaces a post's whole tag set and returns the set as stored.
    async fn set_post_tags(
        &self,
        ctx: &Context<'_>,
        input: SetPostTagsInput,
    ) -> Result<TagMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(TagMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        if let Err(e) = TagRepository::set_post_tags(db, input.post_id, input.tag_ids).await {
            return Ok(TagMutationResult::DbError(DbError { message: e }));
        }

        match TagRepository::get_post_tags(db, input.post_id).await {
            Ok(tags) => Ok(TagMutationResult::PostTagList(PostTagList {
                post_id: input.post_id,
                tags: tags.iter().map(TagType::from).collect(),
            })),
            Err(e) => Ok(TagMutationResult::DbError(DbError { message: e })),
        }
    }
}
