use data_access_objects::{CategoryDao, PostDao};
use models::{categories, posts};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::{PostPage, PostRepository, DEFAULT_RECENT_LIMIT, RELATED_POSTS_LIMIT};

impl PostRepository {
    /// Published posts for the public listing, each with its category.
    /// An unknown category slug yields an empty list rather than an error.
    pub async fn list_published(
        db: &DatabaseConnection,
        category_slug: Option<&str>,
    ) -> Result<Vec<(posts::Model, Option<categories::Model>)>, String> {
        if let Some(slug) = category_slug {
            let category = CategoryDao::find_by_slug(db, slug)
                .await
                .map_err(|e| format!("Database error: {}", e))?;

            let Some(category) = category else {
                return Ok(Vec::new());
            };

            let posts = PostDao::find_published_by_category(db, category.id)
                .await
                .map_err(|e| format!("Database error: {}", e))?;

            return Ok(posts
                .into_iter()
                .map(|post| (post, Some(category.clone())))
                .collect());
        }

        PostDao::find_published_with_category(db)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Every post regardless of publish state, for the admin listing.
    pub async fn list_all(
        db: &DatabaseConnection,
    ) -> Result<Vec<(posts::Model, Option<categories::Model>)>, String> {
        PostDao::find_all_with_category(db)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn recent(
        db: &DatabaseConnection,
        limit: Option<u64>,
    ) -> Result<Vec<(posts::Model, Option<categories::Model>)>, String> {
        PostDao::find_recent_with_category(db, limit.unwrap_or(DEFAULT_RECENT_LIMIT))
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// The public detail page: post, category and up to three related posts.
    pub async fn get_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<PostPage>, String> {
        let post = PostDao::find_by_slug(db, slug)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        let Some(post) = post else {
            return Ok(None);
        };

        let category = match post.category_id {
            Some(category_id) => CategoryDao::find_by_id(db, category_id)
                .await
                .map_err(|e| format!("Database error: {}", e))?,
            None => None,
        };

        let related = PostDao::find_related(db, post.id, post.category_id, RELATED_POSTS_LIMIT)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        Ok(Some(PostPage {
            post,
            category,
            related,
        }))
    }

    pub async fn get_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<posts::Model>, String> {
        PostDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}
