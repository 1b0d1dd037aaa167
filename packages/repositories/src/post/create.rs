use data_access_objects::PostDao;
use models::posts;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::{NewPost, PostRepository};
use crate::slug::slugify;

impl PostRepository {
    pub async fn create_post(
        db: &DatabaseConnection,
        author_id: Uuid,
        new_post: NewPost,
    ) -> Result<posts::Model, String> {
        let slug = new_post
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&new_post.title));

        let now = chrono::Utc::now().naive_utc();
        let published_at = if new_post.published { Some(now) } else { None };

        let model = posts::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            title: ActiveValue::set(new_post.title),
            slug: ActiveValue::set(slug),
            excerpt: ActiveValue::set(new_post.excerpt),
            content: ActiveValue::set(new_post.content),
            image_url: ActiveValue::set(new_post.image_url),
            category_id: ActiveValue::set(new_post.category_id),
            author_id: ActiveValue::set(author_id),
            published: ActiveValue::set(new_post.published),
            published_at: ActiveValue::set(published_at),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
        };

        PostDao::insert(db, model)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}
