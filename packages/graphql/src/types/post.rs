use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use uuid::Uuid;

use super::category::Category;

#[derive(SimpleObject)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub author_id: Uuid,
    pub published: bool,
    pub published_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub category: Option<Category>,
}

/// A post resolved for its public page: the post, its body rendered to HTML
/// and up to three related posts.
#[derive(SimpleObject)]
pub struct PostDetail {
    pub post: Post,
    pub content_html: String,
    pub related_posts: Vec<Post>,
}

#[derive(SimpleObject)]
pub struct DeletedPost {
    pub id: Uuid,
}

impl Post {
    pub fn from_model(
        post: &models::posts::Model,
        category: Option<&models::categories::Model>,
    ) -> Self {
        Post {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            image_url: post.image_url.clone(),
            category_id: post.category_id,
            author_id: post.author_id,
            published: post.published,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
            category: category.map(Category::from),
        }
    }
}
