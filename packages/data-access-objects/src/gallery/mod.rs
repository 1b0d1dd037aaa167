use models::post_gallery_images::{ActiveModel, Column, Entity, Model};
use models::prelude::PostGalleryImages;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct GalleryDao;

impl GalleryDao {
    pub async fn find_by_post(
        db: &impl ConnectionTrait,
        post_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        PostGalleryImages::find()
            .filter(Column::PostId.eq(post_id))
            .order_by_asc(Column::SortOrder)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &impl ConnectionTrait,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        PostGalleryImages::find_by_id(id).one(db).await
    }

    pub async fn insert(db: &impl ConnectionTrait, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn update(db: &impl ConnectionTrait, model: ActiveModel) -> Result<Model, DbErr> {
        model.update(db).await
    }

    pub async fn delete_by_id(
        db: &impl ConnectionTrait,
        id: Uuid,
    ) -> Result<DeleteResult, DbErr> {
        Entity::delete_by_id(id).exec(db).await
    }

    pub async fn delete_for_post(
        db: &impl ConnectionTrait,
        post_id: Uuid,
    ) -> Result<DeleteResult, DbErr> {
        Entity::delete_many()
            .filter(Column::PostId.eq(post_id))
            .exec(db)
            .await
    }
}
