use data_access_objects::GalleryDao;
use models::post_gallery_images::Model;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

#[derive(Default)]
pub struct GalleryImageChanges {
    pub caption: Option<String>,
    pub sort_order: Option<i32>,
}

pub struct GalleryRepository;

impl GalleryRepository {
    /// Images of a post, ordered by `sort_order` ascending.
    pub async fn get_by_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<Model>, String> {
        GalleryDao::find_by_post(db, post_id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn add_image(
        db: &DatabaseConnection,
        post_id: Uuid,
        image_url: String,
        caption: Option<String>,
        sort_order: Option<i32>,
    ) -> Result<Model, String> {
        let model = models::post_gallery_images::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            post_id: ActiveValue::set(post_id),
            image_url: ActiveValue::set(image_url),
            caption: ActiveValue::set(caption),
            sort_order: ActiveValue::set(sort_order.unwrap_or(0)),
        };

        GalleryDao::insert(db, model)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn update_image(
        db: &DatabaseConnection,
        id: Uuid,
        changes: GalleryImageChanges,
    ) -> Result<Model, String> {
        let existing = GalleryDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Gallery image not found".to_string())?;

        let mut am = existing.into_active_model();
        if let Some(caption) = changes.caption {
            am.caption = ActiveValue::set(Some(caption));
        }
        if let Some(sort_order) = changes.sort_order {
            am.sort_order = ActiveValue::set(sort_order);
        }

        GalleryDao::update(db, am)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn delete_image(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, String> {
        GalleryDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Gallery image not found".to_string())?;

        GalleryDao::delete_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        Ok(id)
    }

    /// Purges every image of a post.
    pub async fn delete_all_for_post(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<(), String> {
        GalleryDao::delete_for_post(db, post_id)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        Ok(())
    }
}
