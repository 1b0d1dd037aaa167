use data_access_objects::UserDao;
use models::sea_orm_active_enums::Role;
use models::users::{ActiveModel, Model};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

/// Identity fields carried by a verified session; `None` leaves the stored
/// value untouched on an existing user.
pub struct UserIdentity {
    pub open_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub login_method: Option<String>,
}

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_open_id(
        db: &DatabaseConnection,
        open_id: &str,
    ) -> Result<Option<Model>, String> {
        UserDao::find_by_open_id(db, open_id)
            .await
            .map_err(|e| format!("Database error: {}", e))
    }

    /// Creates or refreshes the row for an external identity. New identities
    /// get `Role::Admin` only when they match the configured owner, otherwise
    /// `Role::User`; the role of an existing row is never touched here.
    pub async fn upsert_user(
        db: &DatabaseConnection,
        identity: UserIdentity,
        owner_open_id: Option<&str>,
    ) -> Result<Model, String> {
        let now = chrono::Utc::now().naive_utc();

        let existing = UserDao::find_by_open_id(db, &identity.open_id)
            .await
            .map_err(|e| format!("Database error: {}", e))?;

        match existing {
            Some(user) => {
                let mut am = user.into_active_model();
                if let Some(email) = identity.email {
                    am.email = ActiveValue::set(Some(email));
                }
                if let Some(name) = identity.name {
                    am.name = ActiveValue::set(Some(name));
                }
                if let Some(login_method) = identity.login_method {
                    am.login_method = ActiveValue::set(Some(login_method));
                }
                am.last_signed_in = ActiveValue::set(Some(now));
                am.updated_at = ActiveValue::set(now);

                UserDao::update(db, am)
                    .await
                    .map_err(|e| format!("Database error: {}", e))
            }
            None => {
                let role = if owner_open_id == Some(identity.open_id.as_str()) {
                    Role::Admin
                } else {
                    Role::User
                };

                let model = ActiveModel {
                    id: ActiveValue::set(Uuid::new_v4()),
                    open_id: ActiveValue::set(identity.open_id),
                    email: ActiveValue::set(identity.email),
                    name: ActiveValue::set(identity.name),
                    login_method: ActiveValue::set(identity.login_method),
                    role: ActiveValue::set(role),
                    last_signed_in: ActiveValue::set(Some(now)),
                    created_at: ActiveValue::set(now),
                    updated_at: ActiveValue::set(now),
                };

                UserDao::insert(db, model)
                    .await
                    .map_err(|e| format!("Database error: {}", e))
            }
        }
    }
}
