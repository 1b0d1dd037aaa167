use models::contact_submissions::{ActiveModel, Column, Entity, Model};
use models::prelude::ContactSubmissions;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct ContactDao;

impl ContactDao {
    pub async fn find_all(db: &impl ConnectionTrait) -> Result<Vec<Model>, DbErr> {
        ContactSubmissions::find()
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &impl ConnectionTrait,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        ContactSubmissions::find_by_id(id).one(db).await
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
