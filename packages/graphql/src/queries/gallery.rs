use async_graphql::{Context, Object, Result};
use repositories::GalleryRepository;
use sea_orm::entity::prelude::Uuid;
use sea_orm::DatabaseConnection;

use crate::errors::DbError;
use crate::types::gallery::GalleryImage;

#[derive(Default)]
pub struct GalleryQueries;

#[Object]
impl GalleryQueries {
    /// Images of a post in display order. Galleries are part of the public
    /// post page, so no caller check.
    async fn post_gallery(
        &self,
        ctx: &Context<'_>,
        post_id: Uuid,
    ) -> Result<Vec<GalleryImage>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let images = GalleryRepository::get_by_post(db, post_id)
            .await
            .map_err(DbError::from)?;

        Ok(images.iter().map(GalleryImage::from).collect())
    }
}
