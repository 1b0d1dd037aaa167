use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::{PostChanges, PostRepository};

impl PostRepository {
    /// Applies only the supplied fields. The first transition to published
    /// stamps `published_at`; once set it is never overwritten.
    pub async fn update_post(
        db: &DatabaseConnection,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Model, String> {
        let existing = PostDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Post not found".to_string())?;

        let had_published_at = existing.published_at.is_some();

        let mut am = existing.into_active_model();
        if let Some(title) = changes.title {
            am.title = ActiveValue::set(title);
        }
        if let Some(slug) = changes.slug {
            am.slug = ActiveValue::set(slug);
        }
        if let Some(excerpt) = changes.excerpt {
            am.excerpt = ActiveValue::set(Some(excerpt));
        }
        if let Some(content) = changes.content {
            am.content = ActiveValue::set(content);
        }
        if let Some(image_url) = changes.image_url {
            am.image_url = ActiveValue::set(Some(image_url));
        }
        if let Some(category_id) = changes.category_id {
            am.category_id = ActiveValue::set(category_id);
        }
        if let Some(published) = changes.published {
            am.published = ActiveValue::set(published);
            if published && !had_published_at {
                am.published_at = ActiveValue::set(Some(chrono::Utc::now().naive_utc()));
            }
        }
        am.updated_at = ActiveValue::set(chrono::Utc::now().naive_utc());

        PostDao::update(db, am)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}
