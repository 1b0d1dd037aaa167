use data_access_objects::{PostTagDao, TagDao};
use models::{posts, tags};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use crate::slug::slugify;

const DEFAULT_TAG_COLOR: &str = "#3B82F6";

#[derive(Default)]
pub struct TagChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub color: Option<String>,
}

pub struct TagRepository;

impl TagRepository {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<tags::Model>, String> {
        TagDao::find_all(db)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Tags annotated with how many published posts reference them. The
    /// count is recomputed on every read, never stored.
    pub async fn list_with_count(
        db: &DatabaseConnection,
    ) -> Result<Vec<(tags::Model, u64)>, String> {
        let tags = TagDao::find_all(db)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        let mut result = Vec::with_capacity(tags.len());
        for tag in tags {
            let count = PostTagDao::count_published_posts(db, tag.id)
                .await
                .map_err(|e| format!("Database error: {}", e))?;
            result.push((tag, count));
        }

        Ok(result)
    }

    pub async fn get_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<tags::Model>, String> {
        TagDao::find_by_slug(db, slug)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn get_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<tags::Model>, String> {
        TagDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn create_tag(
        db: &DatabaseConnection,
        name: String,
        slug: Option<String>,
        color: Option<String>,
    ) -> Result<tags::Model, String> {
        let slug = slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&name));

        let model = tags::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            name: ActiveValue::set(name),
            slug: ActiveValue::set(slug),
            color: ActiveValue::set(color.unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string())),
            created_at: ActiveValue::set(chrono::Utc::now().naive_utc()),
        };

        TagDao::insert(db, model)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn update_tag(
        db: &DatabaseConnection,
        id: Uuid,
        changes: TagChanges,
    ) -> Result<tags::Model, String> {
        let existing = TagDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Tag not found".to_string())?;

        let mut am = existing.into_active_model();
        if let Some(name) = changes.name {
            am.name = ActiveValue::set(name);
        }
        if let Some(slug) = changes.slug {
            am.slug = ActiveValue::set(slug);
        }
        if let Some(color) = changes.color {
            am.color = ActiveValue::set(color);
        }

        TagDao::update(db, am)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Removes the tag and its post links in one transaction.
    pub async fn delete_tag(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, String> {
        TagDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Tag not found".to_string())?;

        db.transaction::<_, (), DbErr>(|txn| {
            Box::pin(async move {
                PostTagDao::delete_for_tag(txn, id).await?;
                TagDao::delete_by_id(txn, id).await?;
                Ok(())
            })
        })
        .await
        .map_err(|e| format!("Database error: {}", e))?;

        Ok(id)
    }

    pub async fn get_post_tags(
        db: &DatabaseConnection,
        post_id: Uuid,
    ) -> Result<Vec<tags::Model>, String> {
        PostTagDao::find_tags_for_post(db, post_id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn get_posts_by_tag(
        db: &DatabaseConnection,
        tag_id: Uuid,
    ) -> Result<Vec<posts::Model>, String> {
        PostTagDao::find_published_posts_for_tag(db, tag_id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Replaces the whole tag set of a post: delete-then-insert inside one
    /// transaction, so a failed insert never leaves the post untagged.
    pub async fn set_post_tags(
        db: &DatabaseConnection,
        post_id: Uuid,
        tag_ids: Vec<Uuid>,
    ) -> Result<(), String> {
        db.transaction::<_, (), DbErr>(move |txn| {
            Box::pin(async move {
                PostTagDao::delete_for_post(txn, post_id).await?;
                PostTagDao::insert_many(txn, post_id, &tag_ids).await?;
                Ok(())
            })
        })
        .await
        .map_err(|e| format!("Database error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::{TagChanges, TagRepository};
    use crate::test_helpers::*;
    use sea_orm::entity::prelude::Uuid;

    #[tokio::test]
    async fn test_create_tag_derives_slug_and_default_color() {
        let db = setup_test_db().await;

        let tag = TagRepository::create_tag(
            &db,
            format!("Crédito {}", Uuid::new_v4()),
            None,
            None,
        )
        .await
        .unwrap();

        assert!(tag.slug.starts_with("credito-"));
        assert_eq!(tag.color, "#3B82F6");

        cleanup_tag(&db, tag.id).await;
    }

    #[tokio::test]
    async fn test_update_tag_changes_color_only() {
        let db = setup_test_db().await;
        let tag = create_test_tag(&db, "Cores").await;

        let updated = TagRepository::update_tag(
            &db,
            tag.id,
            TagChanges {
                color: Some("#EF4444".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.color, "#EF4444");
        assert_eq!(updated.name, tag.name);
        assert_eq!(updated.slug, tag.slug);

        cleanup_tag(&db, tag.id).await;
    }

    #[tokio::test]
    async fn test_set_post_tags_replaces_set() {
        let db = setup_test_db().await;
        let (admin, open_id) = create_test_admin(&db, "tag_set").await;
        let post = create_test_post(&db, admin.id, "Etiquetado", true).await;
        let first = create_test_tag(&db, "Primeira").await;
        let second = create_test_tag(&db, "Segunda").await;

        TagRepository::set_post_tags(&db, post.id, vec![first.id]).await.unwrap();
        TagRepository::set_post_tags(&db, post.id, vec![second.id]).await.unwrap();

        let linked = TagRepository::get_post_tags(&db, post.id).await.unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, second.id);

        cleanup_user_by_open_id(&db, &open_id).await;
        cleanup_tag(&db, first.id).await;
        cleanup_tag(&db, second.id).await;
    }

    #[tokio::test]
    async fn test_set_post_tags_empty_clears() {
        let db = setup_test_db().await;
        let (admin, open_id) = create_test_admin(&db, "tag_clear").await;
        let post = create_test_post(&db, admin.id, "Sem Etiquetas", true).await;
        let tag = create_test_tag(&db, "Descartada").await;

        TagRepository::set_post_tags(&db, post.id, vec![tag.id]).await.unwrap();
        TagRepository::set_post_tags(&db, post.id, Vec::new()).await.unwrap();

        let linked = TagRepository::get_post_tags(&db, post.id).await.unwrap();
        assert!(linked.is_empty());

        cleanup_user_by_open_id(&db, &open_id).await;
        cleanup_tag(&db, tag.id).await;
    }

    #[tokio::test]
    async fn test_list_with_count_counts_published_only() {
        let db = setup_test_db().await;
        let (admin, open_id) = create_test_admin(&db, "tag_count").await;
        let tag = create_test_tag(&db, "Contada").await;

        let published = create_test_post(&db, admin.id, "Publicado", true).await;
        let draft = create_test_post(&db, admin.id, "Rascunho", false).await;
        TagRepository::set_post_tags(&db, published.id, vec![tag.id]).await.unwrap();
        TagRepository::set_post_tags(&db, draft.id, vec![tag.id]).await.unwrap();

        let listed = TagRepository::list_with_count(&db).await.unwrap();
        let entry = listed.iter().find(|(t, _)| t.id == tag.id).unwrap();

        assert_eq!(entry.1, 1);

        cleanup_user_by_open_id(&db, &open_id).await;
        cleanup_tag(&db, tag.id).await;
    }

    #[tokio::test]
    async fn test_get_posts_by_tag_newest_first() {
        let db = setup_test_db().await;
        let (admin, open_id) = create_test_admin(&db, "tag_posts").await;
        let tag = create_test_tag(&db, "Ordenada").await;

        let older = create_test_post(&db, admin.id, "Antigo", true).await;
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        let newer = create_test_post(&db, admin.id, "Recente", true).await;

        TagRepository::set_post_tags(&db, older.id, vec![tag.id]).await.unwrap();
        TagRepository::set_post_tags(&db, newer.id, vec![tag.id]).await.unwrap();

        let posts = TagRepository::get_posts_by_tag(&db, tag.id).await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, newer.id);
        assert_eq!(posts[1].id, older.id);

        cleanup_user_by_open_id(&db, &open_id).await;
        cleanup_tag(&db, tag.id).await;
    }

    #[tokio::test]
    async fn test_delete_tag_removes_links_first() {
        let db = setup_test_db().await;
        let (admin, open_id) = create_test_admin(&db, "tag_del").await;
        let post = create_test_post(&db, admin.id, "Ligado", true).await;
        let tag = create_test_tag(&db, "Removida").await;

        TagRepository::set_post_tags(&db, post.id, vec![tag.id]).await.unwrap();
        TagRepository::delete_tag(&db, tag.id).await.unwrap();

        let linked = TagRepository::get_post_tags(&db, post.id).await.unwrap();
        assert!(linked.is_empty());

        let found = TagRepository::get_by_id(&db, tag.id).await.unwrap();
        assert!(found.is_none());

        cleanup_user_by_open_id(&db, &open_id).await;
    }
}
