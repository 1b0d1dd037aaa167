use models::prelude::Users;
use models::users::{ActiveModel, Column, Model};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct UserDao;

impl UserDao {
    pub async fn find_by_id(
        db: &impl ConnectionTrait,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Users::find_by_id(id).one(db).await
    }

    pub async fn find_by_open_id(
        db: &impl ConnectionTrait,
        open_id: &str,
    ) -> Result<Option<Model>, DbErr> {
        Users::find()
            .filter(Column::OpenId.eq(open_id))
            .one(db)
            .await
    }

    pub async fn insert(db: &impl ConnectionTrait, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn update(db: &impl ConnectionTrait, model: ActiveModel) -> Result<Model, DbErr> {
        model.update(db).await
    }
}
