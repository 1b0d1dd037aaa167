use async_graphql::{Context, Object, Result};
use repositories::CategoryRepository;
use sea_orm::DatabaseConnection;

use crate::errors::DbError;
use crate::types::category::Category;

#[derive(Default)]
pub struct CategoryQueries;

#[Object]
impl CategoryQueries {
    /// All categories, ordered by name.
    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<Category>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let categories = CategoryRepository::list(db).await.map_err(DbError::from)?;

        Ok(categories.iter().map(Category::from).collect())
    }

    async fn category_by_slug(
        &self,
        ctx: &Context<'_>,
        slug: String,
    ) -> Result<Option<Category>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let category = CategoryRepository::get_by_slug(db, &slug)
            .await
            .map_err(DbError::from)?;

        Ok(category.as_ref().map(Category::from))
    }
}
