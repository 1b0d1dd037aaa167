use async_graphql::{Context, Object, Result};
use repositories::{CategoryRepository, TagRepository};
use sea_orm::entity::prelude::Uuid;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::errors::DbError;
use crate::types::post::Post;
use crate::types::tag::{Tag, TagWithCount};

#[derive(Default)]
pub struct TagQueries;

#[Object]
impl TagQueries {
    /// All tags, ordered by name.
    async fn tags(&self, ctx: &Context<'_>) -> Result<Vec<Tag>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let tags = TagRepository::list(db).await.map_err(DbError::from)?;

        Ok(tags.iter().map(Tag::from).collect())
    }

    /// All tags with their published-post counts, for the tag cloud.
    async fn tags_with_count(&self, ctx: &Context<'_>) -> Result<Vec<TagWithCount>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let tags = TagRepository::list_with_count(db).await.map_err(DbError::from)?;

        Ok(tags
            .iter()
            .map(|(tag, count)| TagWithCount::from_model(tag, *count))
            .collect())
    }

    async fn tag_by_slug(
        &self,
        ctx: &Context<'_>,
        slug: String,
    ) -> Result<Option<Tag>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let tag = TagRepository::get_by_slug(db, &slug)
            .await
            .map_err(DbError::from)?;

        Ok(tag.as_ref().map(Tag::from))
    }

    /// Tags linked to one post.
    async fn post_tags(&self, ctx: &Context<'_>, post_id: Uuid) -> Result<Vec<Tag>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let tags = TagRepository::get_post_tags(db, post_id)
            .await
            .map_err(DbError::from)?;

        Ok(tags.iter().map(Tag::from).collect())
    }

    /// Published posts carrying a tag, newest first, each with its category.
    async fn posts_by_tag(&self, ctx: &Context<'_>, tag_id: Uuid) -> Result<Vec<Post>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let posts = TagRepository::get_posts_by_tag(db, tag_id)
            .await
            .map_err(DbError::from)?;

        let categories = CategoryRepository::list(db).await.map_err(DbError::from)?;
        let by_id: HashMap<_, _> = categories.iter().map(|c| (c.id, c)).collect();

        Ok(posts
            .iter()
            .map(|post| {
                let category = post.category_id.and_then(|id| by_id.get(&id).copied());
                Post::from_model(post, category)
            })
            .collect())
    }
}
