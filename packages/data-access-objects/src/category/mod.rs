use models::categories::{ActiveModel, Column, Entity, Model};
use models::prelude::Categories;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct CategoryDao;

impl CategoryDao {
    pub async fn find_all(db: &impl ConnectionTrait) -> Result<Vec<Model>, DbErr> {
        Categories::find().order_by_asc(Column::Name).all(db).await
    }

    pub async fn find_by_id(
        db: &impl ConnectionTrait,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Categories::find_by_id(id).one(db).await
    }

    pub async fn find_by_slug(
        db: &impl ConnectionTrait,
        slug: &str,
    ) -> Result<Option<Model>, DbErr> {
        Categories::find()
            .filter(Column::Slug.eq(slug))
            .one(db)
            .await
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
}
