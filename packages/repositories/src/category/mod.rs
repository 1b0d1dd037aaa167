use data_access_objects::{CategoryDao, PostDao};
use models::categories::Model;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use crate::slug::slugify;

/// Partial update; renaming does not regenerate the slug unless one is
/// supplied, so existing links keep working.
#[derive(Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, String> {
        CategoryDao::find_all(db)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn get_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<Model>, String> {
        CategoryDao::find_by_slug(db, slug)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, String> {
        CategoryDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn create_category(
        db: &DatabaseConnection,
        name: String,
        slug: Option<String>,
        description: Option<String>,
    ) -> Result<Model, String> {
        let slug = slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&name));

        let model = models::categories::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            name: ActiveValue::set(name),
            slug: ActiveValue::set(slug),
            description: ActiveValue::set(description),
            created_at: ActiveValue::set(chrono::Utc::now().naive_utc()),
        };

        CategoryDao::insert(db, model)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn update_category(
        db: &DatabaseConnection,
        id: Uuid,
        changes: CategoryChanges,
    ) -> Result<Model, String> {
        let existing = CategoryDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Category not found".to_string())?;

        let mut am = existing.into_active_model();
        if let Some(name) = changes.name {
            am.name = ActiveValue::set(name);
        }
        if let Some(slug) = changes.slug {
            am.slug = ActiveValue::set(slug);
        }
        if let Some(description) = changes.description {
            am.description = ActiveValue::set(Some(description));
        }

        CategoryDao::update(db, am)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Deletes the category and detaches referencing posts in one
    /// transaction; the posts themselves stay.
    pub async fn delete_category(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, String> {
        CategoryDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Category not found".to_string())?;

        db.transaction::<_, (), DbErr>(|txn| {
            Box::pin(async move {
                PostDao::clear_category(txn, id).await?;
                CategoryDao::delete_by_id(txn, id).await?;
                Ok(())
            })
        })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        Ok(id)
    }
}
