use models::prelude::{PostTags, Posts, Tags};
use models::{post_tags, posts, tags};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct PostTagDao;

impl PostTagDao {
    /// Tags linked to a post, by name.
    pub async fn find_tags_for_post(
        db: &impl ConnectionTrait,
        post_id: Uuid,
    ) -> Result<Vec<tags::Model>, DbErr> {
        Tags::find()
            .join(JoinType::InnerJoin, tags::Relation::PostTags.def())
            .filter(post_tags::Column::PostId.eq(post_id))
            .order_by_asc(tags::Column::Name)
            .all(db)
            .await
    }

    /// Published posts linked to a tag, newest publish first.
    pub async fn find_published_posts_for_tag(
        db: &impl ConnectionTrait,
        tag_id: Uuid,
    ) -> Result<Vec<posts::Model>, DbErr> {
        Posts::find()
            .join(JoinType::InnerJoin, post_tags::Relation::Posts.def().rev())
            .filter(post_tags::Column::TagId.eq(tag_id))
            .filter(posts::Column::Published.eq(true))
            .order_by_desc(posts::Column::PublishedAt)
            .all(db)
            .await
    }

    /// Number of published posts linked to a tag.
    pub async fn count_published_posts(
        db: &impl ConnectionTrait,
        tag_id: Uuid,
    ) -> Result<u64, DbErr> {
        PostTags::find()
            .join(JoinType::InnerJoin, post_tags::Relation::Posts.def())
            .filter(post_tags::Column::TagId.eq(tag_id))
            .filter(posts::Column::Published.eq(true))
            .count(db)
            .await
    }

    pub async fn insert_many(
        db: &impl ConnectionTrait,
        post_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<(), DbErr> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let links = tag_ids.iter().map(|tag_id| post_tags::ActiveModel {
            post_id: ActiveValue::set(post_id),
            tag_id: ActiveValue::set(*tag_id),
        });

        PostTags::insert_many(links).exec(db).await?;
        Ok(())
    }

    pub async fn delete_for_post(
        db: &impl ConnectionTrait,
        post_id: Uuid,
    ) -> Result<DeleteResult, DbErr> {
        PostTags::delete_many()
            .filter(post_tags::Column::PostId.eq(post_id))
            .exec(db)
            .await
    }

    pub async fn delete_for_tag(
        db: &impl ConnectionTrait,
        tag_id: Uuid,
    ) -> Result<DeleteResult, DbErr> {
        PostTags::delete_many()
            .filter(post_tags::Column::TagId.eq(tag_id))
            .exec(db)
            .await
    }
}
