use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use uuid::Uuid;

#[derive(SimpleObject)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(SimpleObject)]
pub struct DeletedSubmission {
    pub id: Uuid,
}

impl From<&models::contact_submissions::Model> for ContactSubmission {
    fn from(s: &models::contact_submissions::Model) -> Self {
        ContactSubmission {
            id: s.id,
            name: s.name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            company: s.company.clone(),
            message: s.message.clone(),
            read: s.read,
            created_at: s.created_at,
        }
    }
}
