mod create;
mod delete;
mod read;
mod search;
mod update;

use models::{categories, posts};
use sea_orm::entity::prelude::Uuid;

/// How many related posts accompany a post detail page.
const RELATED_POSTS_LIMIT: u64 = 3;
const DEFAULT_RECENT_LIMIT: u64 = 5;

pub struct NewPost {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub published: bool,
}

/// Partial update; `None` leaves a field untouched. `category_id` carries an
/// extra level so the category can be explicitly cleared.
#[derive(Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Option<Uuid>>,
    pub published: Option<bool>,
}

/// A post resolved for its public detail page.
#[derive(Debug)]
pub struct PostPage {
    pub post: posts::Model,
    pub category: Option<categories::Model>,
    pub related: Vec<posts::Model>,
}

pub struct PostRepository;
