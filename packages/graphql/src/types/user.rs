use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use models::sea_orm_active_enums::Role;
use uuid::Uuid;

#[derive(SimpleObject)]
pub struct User {
    pub id: Uuid,
    pub open_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub login_method: Option<String>,
    pub role: Role,
    pub last_signed_in: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<&models::users::Model> for User {
    fn from(u: &models::users::Model) -> Self {
        User {
            id: u.id,
            open_id: u.open_id.clone(),
            email: u.email.clone(),
            name: u.name.clone(),
            login_method: u.login_method.clone(),
            role: u.role,
            last_signed_in: u.last_signed_in,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
