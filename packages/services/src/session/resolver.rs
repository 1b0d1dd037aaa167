use crate::session::token::SessionToken;
use models::users::Model;
use repositories::{UserIdentity, UserRepository};
use sea_orm::DatabaseConnection;
use std::env;
use std::fmt;

#[derive(Debug)]
pub struct BadSessionError {
    pub message: String,
}

#[derive(Debug)]
pub struct DbError {
    pub message: String,
}

#[derive(Debug)]
pub enum SessionError {
    BadSession(BadSessionError),
    DbError(DbError),
}

impl From<jsonwebtoken::errors::Error> for SessionError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        SessionError::BadSession(BadSessionError {
            message: e.to_string(),
        })
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::BadSession(e) => f.write_str(e.message.as_str()),
            SessionError::DbError(e) => f.write_str(e.message.as_str()),
        }
    }
}

/// Resolves a session cookie into a caller row. Unknown identities with a
/// valid token are provisioned on first sight; the configured owner identity
/// comes in as an administrator.
pub async fn resolve_user(
    db: &DatabaseConnection,
    token: &SessionToken,
) -> Result<Model, SessionError> {
    let data = token.verify()?;
    let claims = data.claims;

    let existing = UserRepository::find_by_open_id(db, &claims.sub)
        .await
        .map_err(|message| SessionError::DbError(DbError { message }))?;

    if let Some(user) = existing {
        return Ok(user);
    }

    tracing::info!(open_id = %claims.sub, "provisioning first-time caller");

    let identity = UserIdentity {
        open_id: claims.sub,
        email: claims.email,
        name: claims.name,
        login_method: claims.login_method,
    };

    UserRepository::upsert_user(db, identity, owner_open_id().as_deref())
        .await
        .map_err(|message| SessionError::DbError(DbError { message }))
}

fn owner_open_id() -> Option<String> {
    env::var("OWNER_OPEN_ID").ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use models::sea_orm_active_enums::Role;

    #[tokio::test]
    async fn test_resolve_known_user() {
        let db = setup_test_db().await;
        let (user, open_id) = create_test_admin(&db, "resolve_known").await;
        let token = create_session_token(&user);

        let resolved = resolve_user(&db, &token).await.unwrap();

        assert_eq!(resolved.id, user.id);
        assert_eq!(resolved.role, Role::Admin);

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_resolve_malformed_token_fails() {
        let db = setup_test_db().await;
        let token = create_malformed_token();

        let result = resolve_user(&db, &token).await;

        assert!(matches!(result, Err(SessionError::BadSession(_))));
    }

    #[tokio::test]
    async fn test_resolve_expired_token_fails() {
        let db = setup_test_db().await;
        let (user, open_id) = create_test_admin(&db, "resolve_expired").await;
        let token = create_expired_session_token(&user);

        let result = resolve_user(&db, &token).await;

        assert!(matches!(result, Err(SessionError::BadSession(_))));

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_resolve_wrong_signature_fails() {
        let db = setup_test_db().await;
        let (user, open_id) = create_test_admin(&db, "resolve_forged").await;
        let token = create_forged_session_token(&user);

        let result = resolve_user(&db, &token).await;

        assert!(matches!(result, Err(SessionError::BadSession(_))));

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_resolve_unknown_identity_provisions_regular_user() {
        let db = setup_test_db().await;
        let open_id = format!("newcomer_{}", uuid::Uuid::new_v4());
        let token = create_session_token_for_open_id(&open_id);

        let resolved = resolve_user(&db, &token).await.unwrap();

        assert_eq!(resolved.open_id, open_id);
        assert_eq!(resolved.role, Role::User);

        cleanup_user_by_open_id(&db, &open_id).await;
    }
}
