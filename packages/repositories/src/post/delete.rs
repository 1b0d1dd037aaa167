use data_access_objects::{GalleryDao, PostDao, PostTagDao};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::PostRepository;

impl PostRepository {
    /// Removes the post together with its gallery images and tag links, all
    /// in one transaction.
    pub async fn delete_post(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, String> {
        PostDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Post not found".to_string())?;

        db.transaction::<_, (), DbErr>(|txn| {
            Box::pin(async move {
                GalleryDao::delete_for_post(txn, id).await?;
                PostTagDao::delete_for_post(txn, id).await?;
                PostDao::delete_by_id(txn, id).await?;
                Ok(())
            })
        })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::PostRepository;
    use crate::test_helpers::*;
    use data_access_objects::{GalleryDao, PostDao, PostTagDao};
    use sea_orm::entity::prelude::Uuid;
    use sea_orm::*;

    #[tokio::test]
    async fn test_delete_post_deletes_row() {
        let db = setup_test_db().await;
        let (admin, open_id) = create_test_admin(&db, "del_post").await;
        let post = create_test_post(&db, admin.id, "Apagar", false).await;

        let id = PostRepository::delete_post(&db, post.id).await.unwrap();
        assert_eq!(id, post.id);

        let found = PostDao::find_by_id(&db, post.id).await.unwrap();
        assert!(found.is_none());

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_delete_post_nonexistent_returns_error() {
        let db = setup_test_db().await;

        let result = PostRepository::delete_post(&db, Uuid::new_v4()).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }

    #[tokio::test]
    async fn test_delete_post_removes_gallery_and_links() {
        let db = setup_test_db().await;
        let (admin, open_id) = create_test_admin(&db, "del_cascade").await;
        let post = create_test_post(&db, admin.id, "Com Anexos", false).await;
        let tag = create_test_tag(&db, "Anexada").await;

        PostTagDao::insert_many(&db, post.id, &[tag.id]).await.unwrap();
        GalleryDao::insert(
            &db,
            models::post_gallery_images::ActiveModel {
                id: ActiveValue::set(Uuid::new_v4()),
                post_id: ActiveValue::set(post.id),
                image_url: ActiveValue::set("https://cdn.example.com/a.jpg".to_string()),
                caption: ActiveValue::set(None),
                sort_order: ActiveValue::set(0),
            },
        )
        .await
        .unwrap();

        PostRepository::delete_post(&db, post.id).await.unwrap();

        let images = GalleryDao::find_by_post(&db, post.id).await.unwrap();
        assert!(images.is_empty());

        let linked = PostTagDao::find_tags_for_post(&db, post.id).await.unwrap();
        assert!(linked.is_empty());

        cleanup_user_by_open_id(&db, &open_id).await;
        cleanup_tag(&db, tag.id).await;
    }
}
