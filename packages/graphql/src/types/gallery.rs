use async_graphql::SimpleObject;
use uuid::Uuid;

#[derive(SimpleObject)]
pub struct GalleryImage {
    pub id: Uuid,
    pub post_id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub sort_order: i32,
}

#[derive(SimpleObject)]
pub struct DeletedGalleryImage {
    pub id: Uuid,
}

/// Result of purging a post's whole gallery.
#[derive(SimpleObject)]
pub struct ClearedGallery {
    pub post_id: Uuid,
}

impl From<&models::post_gallery_images::Model> for GalleryImage {
    fn from(g: &models::post_gallery_images::Model) -> Self {
        GalleryImage {
            id: g.id,
            post_id: g.post_id,
            image_url: g.image_url.clone(),
            caption: g.caption.clone(),
            sort_order: g.sort_order,
        }
    }
}
