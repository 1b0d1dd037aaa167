use models::posts::{ActiveModel, Column, Entity, Model};
use models::prelude::{Categories, Posts};
use models::{categories, posts};
use sea_orm::entity::prelude::Uuid;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::*;

pub struct PostDao;

impl PostDao {
    pub async fn find_by_id(
        db: &impl ConnectionTrait,
        id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Posts::find_by_id(id).one(db).await
    }

    pub async fn find_by_slug(
        db: &impl ConnectionTrait,
        slug: &str,
    ) -> Result<Option<Model>, DbErr> {
        Posts::find().filter(Column::Slug.eq(slug)).one(db).await
    }

    /// Published posts with their category, newest publish first.
    pub async fn find_published_with_category(
        db: &impl ConnectionTrait,
    ) -> Result<Vec<(Model, Option<categories::Model>)>, DbErr> {
        Posts::find()
            .filter(Column::Published.eq(true))
            .find_also_related(Categories)
            .order_by_desc(Column::PublishedAt)
            .all(db)
            .await
    }

    /// Every post regardless of publish state, newest creation first.
    pub async fn find_all_with_category(
        db: &impl ConnectionTrait,
    ) -> Result<Vec<(Model, Option<categories::Model>)>, DbErr> {
        Posts::find()
            .find_also_related(Categories)
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn find_published_by_category(
        db: &impl ConnectionTrait,
        category_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Posts::find()
            .filter(Column::Published.eq(true))
            .filter(Column::CategoryId.eq(category_id))
            .order_by_desc(Column::PublishedAt)
            .all(db)
            .await
    }

    pub async fn find_recent_with_category(
        db: &impl ConnectionTrait,
        limit: u64,
    ) -> Result<Vec<(Model, Option<categories::Model>)>, DbErr> {
        Posts::find()
            .filter(Column::Published.eq(true))
            .find_also_related(Categories)
            .order_by_desc(Column::PublishedAt)
            .limit(limit)
            .all(db)
            .await
    }

    /// Other published posts from the same category, or from anywhere when the
    /// post has no category.
    pub async fn find_related(
        db: &impl ConnectionTrait,
        post_id: Uuid,
        category_id: Option<Uuid>,
        limit: u64,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Posts::find()
            .filter(Column::Published.eq(true))
            .filter(Column::Id.ne(post_id));

        if let Some(category_id) = category_id {
            query = query.filter(Column::CategoryId.eq(category_id));
        }

        query
            .order_by_desc(Column::PublishedAt)
            .limit(limit)
            .all(db)
            .await
    }

    /// Case-insensitive substring match over title, excerpt and content,
    /// restricted to published posts.
    pub async fn search_published_with_category(
        db: &impl ConnectionTrait,
        query: &str,
    ) -> Result<Vec<(Model, Option<categories::Model>)>, DbErr> {
        let pattern = format!("%{}%", query);

        Posts::find()
            .filter(Column::Published.eq(true))
            .filter(
                Condition::any()
                    .add(Expr::col((posts::Entity, Column::Title)).ilike(pattern.clone()))
                    .add(Expr::col((posts::Entity, Column::Excerpt)).ilike(pattern.clone()))
                    .add(Expr::col((posts::Entity, Column::Content)).ilike(pattern)),
            )
            .find_also_related(Categories)
            .order_by_desc(Column::PublishedAt)
            .all(db)
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

    /// Detach every post that references a category, leaving the posts in
    /// place with no category.
    pub async fn clear_category(
        db: &impl ConnectionTrait,
        category_id: Uuid,
    ) -> Result<UpdateResult, DbErr> {
        Entity::update_many()
            .col_expr(Column::CategoryId, Expr::value(Value::Uuid(None)))
            .filter(Column::CategoryId.eq(category_id))
            .exec(db)
            .await
    }
}
