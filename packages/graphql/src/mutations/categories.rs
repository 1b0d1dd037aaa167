use crate::errors::{AuthError, DbError, ValidationErrorType};
use crate::types::category::{Category as CategoryType, DeletedCategory};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, InputObject, Object, Result, Union};
use repositories::{CategoryChanges, CategoryRepository};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;
use services::validation::input_validator::InputValidator;
use services::validation::validation_errors_to_message;

use super::input_validators::{AddCategoryInput, UpdateCategoryInput};

#[derive(Union)]
pub enum CategoryMutationResult {
    ChangedCategory(CategoryType),
    DeletedCategory(DeletedCategory),
    ValidationError(ValidationErrorType),
    DbError(DbError),
    AuthError(AuthError),
}

#[derive(InputObject)]
struct DeleteCategoryInput {
    id: Uuid,
}

#[derive(Default)]
pub struct CategoryMutation;

impl RequiresAuth for CategoryMutation {}

#[Object]
impl CategoryMutation {
    async fn add_category(
        &self,
        ctx: &Context<'_>,
        new_category: AddCategoryInput,
    ) -> Result<CategoryMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(CategoryMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        if let Err(errors) = new_category.validate() {
            return Ok(CategoryMutationResult::ValidationError(
                ValidationErrorType {
                    message: validation_errors_to_message(&errors),
                },
            ));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match CategoryRepository::create_category(
            db,
            new_category.name,
            new_category.slug,
            new_category.description,
        )
        .await
        {
            Ok(c) => Ok(CategoryMutationResult::ChangedCategory(CategoryType::from(&c))),
            Err(e) => Ok(CategoryMutationResult::DbError(DbError { message: e })),
        }
    }

    async fn update_category(
        &self,
        ctx: &Context<'_>,
        category: UpdateCategoryInput,
    ) -> Result<CategoryMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(CategoryMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        if let Err(errors) = category.validate() {
            return Ok(CategoryMutationResult::ValidationError(
                ValidationErrorType {
                    message: validation_errors_to_message(&errors),
                },
            ));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        let changes = CategoryChanges {
            name: category.name,
            slug: category.slug,
            description: category.description,
        };

        match CategoryRepository::update_category(db, category.id, changes).await {
            Ok(c) => Ok(CategoryMutationResult::ChangedCategory(CategoryType::from(&c))),
            Err(e) => Ok(CategoryMutationResult::DbError(DbError { message: e })),
        }
    }

    async fn delete_category(
        &self,
        ctx: &Context<'_>,
        category: DeleteCategoryInput,
    ) -> Result<CategoryMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(CategoryMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match CategoryRepository::delete_category(db, category.id).await {
            Ok(id) => Ok(CategoryMutationResult::DeletedCategory(DeletedCategory { id })),
            Err(e) => Ok(CategoryMutationResult::DbError(DbError { message: e })),
        }
    }
}
