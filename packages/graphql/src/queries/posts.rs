use async_graphql::{Context, Object, Result};
use repositories::{CategoryRepository, PostRepository};
use sea_orm::entity::prelude::Uuid;
use sea_orm::DatabaseConnection;

use crate::errors::{AuthError, DbError};
use crate::types::post::{Post, PostDetail};
use crate::utilities::requires_auth::RequiresAuth;
use crate::utilities::MarkdownCache;

#[derive(Default)]
pub struct PostQueries;

impl RequiresAuth for PostQueries {}

#[Object]
impl PostQueries {
    /// Published posts for the blog listing, optionally narrowed to one
    /// category. An unknown category slug yields an empty list.
    async fn posts(
        &self,
        ctx: &Context<'_>,
        category_slug: Option<String>,
    ) -> Result<Vec<Post>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let posts = PostRepository::list_published(db, category_slug.as_deref())
            .await
            .map_err(DbError::from)?;

        Ok(posts
            .iter()
            .map(|(post, category)| Post::from_model(post, category.as_ref()))
            .collect())
    }

    /// Every post, drafts included, for the admin panel.
    async fn all_posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>, AuthError> {
        self.require_authenticate_as_admin(ctx)?;
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let posts = PostRepository::list_all(db)
            .await
            .map_err(|message| AuthError { message })?;

        Ok(posts
            .iter()
            .map(|(post, category)| Post::from_model(post, category.as_ref()))
            .collect())
    }

    /// A post page by slug: the post, its category, rendered HTML and up to
    /// three related posts. Null when no post carries the slug.
    async fn post_by_slug(
        &self,
        ctx: &Context<'_>,
        slug: String,
    ) -> Result<Option<PostDetail>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let page = PostRepository::get_by_slug(db, &slug)
            .await
            .map_err(DbError::from)?;

        let Some(page) = page else {
            return Ok(None);
        };

        let content_html = match ctx.data::<MarkdownCache>() {
            Ok(cache) => cache.render(page.post.id, &page.post.content),
            Err(_) => crate::utilities::markdown::render_markdown(&page.post.content),
        };

        let related_posts = page
            .related
            .iter()
            .map(|post| Post::from_model(post, None))
            .collect();

        Ok(Some(PostDetail {
            post: Post::from_model(&page.post, page.category.as_ref()),
            content_html,
            related_posts,
        }))
    }

    /// Raw post for the admin edit form.
    async fn post_by_id(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
    ) -> Result<Option<Post>, AuthError> {
        self.require_authenticate_as_admin(ctx)?;
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let post = PostRepository::get_by_id(db, id)
            .await
            .map_err(|message| AuthError { message })?;

        let Some(post) = post else {
            return Ok(None);
        };

        let category = match post.category_id {
            Some(category_id) => CategoryRepository::get_by_id(db, category_id)
                .await
                .map_err(|message| AuthError { message })?,
            None => None,
        };

        Ok(Some(Post::from_model(&post, category.as_ref())))
    }

    /// Latest published posts for the home page, default 5.
    async fn recent_posts(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
    ) -> Result<Vec<Post>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let limit = limit.filter(|l| *l > 0).map(|l| l as u64);
        let posts = PostRepository::recent(db, limit).await.map_err(DbError::from)?;

        Ok(posts
            .iter()
            .map(|(post, category)| Post::from_model(post, category.as_ref()))
            .collect())
    }

    /// Case-insensitive substring search over title, excerpt and content of
    /// published posts.
    async fn search_posts(
        &self,
        ctx: &Context<'_>,
        query: String,
    ) -> Result<Vec<Post>, DbError> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let posts = PostRepository::search(db, &query).await.map_err(DbError::from)?;

        Ok(posts
            .iter()
            .map(|(post, category)| Post::from_model(post, category.as_ref()))
            .collect())
    }
}
