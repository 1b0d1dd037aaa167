use data_access_objects::ContactDao;
use models::contact_submissions::Model;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct ContactRepository;

impl ContactRepository {
    pub async fn submit(
        db: &DatabaseConnection,
        name: String,
        email: String,
        phone: Option<String>,
        company: Option<String>,
        message: String,
    ) -> Result<Model, String> {
        let model = models::contact_submissions::ActiveModel {
            id: ActiveValue::set(Uuid::new_v4()),
            name: ActiveValue::set(name),
            email: ActiveValue::set(email),
            phone: ActiveValue::set(phone),
            company: ActiveValue::set(company),
            message: ActiveValue::set(message),
            read: ActiveValue::set(false),
            created_at: ActiveValue::set(chrono::Utc::now().naive_utc()),
        };

        ContactDao::insert(db, model)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// All submissions, newest first.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, String> {
        ContactDao::find_all(db)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn mark_as_read(db: &DatabaseConnection, id: Uuid) -> Result<Model, String> {
        let existing = ContactDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Submission not found".to_string())?;

        let mut am = existing.into_active_model();
        am.read = ActiveValue::set(true);

        ContactDao::update(db, am)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, String> {
        ContactDao::find_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?
            .ok_or_else(|| "Submission not found".to_string())?;

        ContactDao::delete_by_id(db, id)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::ContactRepository;
    use crate::test_helpers::*;
    use sea_orm::entity::prelude::Uuid;

    async fn submit_test(db: &sea_orm::DatabaseConnection, name: &str) -> models::contact_submissions::Model {
        ContactRepository::submit(
            db,
            name.to_string(),
            format!("contato_{}@example.com", Uuid::new_v4()),
            Some("+55 11 99999-0000".to_string()),
            None,
            "Preciso de ajuda com fluxo de caixa.".to_string(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_submit_starts_unread() {
        let db = setup_test_db().await;

        let submission = submit_test(&db, "Maria").await;

        assert!(!submission.read);
        assert_eq!(submission.name, "Maria");

        ContactRepository::delete(&db, submission.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_mark_as_read_flips_flag() {
        let db = setup_test_db().await;
        let submission = submit_test(&db, "João").await;

        let updated = ContactRepository::mark_as_read(&db, submission.id).await.unwrap();

        assert!(updated.read);

        ContactRepository::delete(&db, submission.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = setup_test_db().await;

        let older = submit_test(&db, "Primeiro").await;
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        let newer = submit_test(&db, "Segundo").await;

        let listed = ContactRepository::list(&db).await.unwrap();
        let older_pos = listed.iter().position(|s| s.id == older.id).unwrap();
        let newer_pos = listed.iter().position(|s| s.id == newer.id).unwrap();

        assert!(newer_pos < older_pos);

        ContactRepository::delete(&db, older.id).await.unwrap();
        ContactRepository::delete(&db, newer.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_nonexistent_returns_error() {
        let db = setup_test_db().await;

        let result = ContactRepository::delete(&db, Uuid::new_v4()).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }
}
