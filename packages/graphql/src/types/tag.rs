use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use uuid::Uuid;

#[derive(SimpleObject)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub created_at: NaiveDateTime,
}

/// A tag annotated with how many published posts carry it; the count is
/// computed at read time.
#[derive(SimpleObject)]
pub struct TagWithCount {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub post_count: i64,
}

#[derive(SimpleObject)]
pub struct DeletedTag {
    pub id: Uuid,
}

/// Result of replacing a post's tag set.
#[derive(SimpleObject)]
pub struct PostTagList {
    pub post_id: Uuid,
    pub tags: Vec<Tag>,
}

impl From<&models::tags::Model> for Tag {
    fn from(t: &models::tags::Model) -> Self {
        Tag {
            id: t.id,
            name: t.name.clone(),
            slug: t.slug.clone(),
            color: t.color.clone(),
            created_at: t.created_at,
        }
    }
}

impl TagWithCount {
    pub fn from_model(tag: &models::tags::Model, post_count: u64) -> Self {
        TagWithCount {
            id: tag.id,
            name: tag.name.clone(),
            slug: tag.slug.clone(),
            color: tag.color.clone(),
            created_at: tag.created_at,
            post_count: post_count as i64,
        }
    }
}
