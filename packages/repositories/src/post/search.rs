use data_access_objects::PostDao;
use models::{categories, posts};
use sea_orm::*;

use super::PostRepository;

impl PostRepository {
    /// Case-insensitive substring search over title, excerpt and content of
    /// published posts. A query that matches nothing yields an empty list.
    pub async fn search(
        db: &DatabaseConnection,
        query: &str,
    ) -> Result<Vec<(posts::Model, Option<categories::Model>)>, String> {
        PostDao::search_published_with_category(db, query)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }
}
