use async_graphql::SimpleObject;
use std::fmt;

#[derive(SimpleObject, Debug)]
pub struct DbError {
    pub message: String,
}

impl From<String> for DbError {
    fn from(message: String) -> Self {
        DbError { message }
    }
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug)]
pub struct AuthError {
    pub message: String,
}

impl From<crate::utilities::requires_auth::AuthorizationError> for AuthError {
    fn from(e: crate::utilities::requires_auth::AuthorizationError) -> Self {
        AuthError { message: e.to_string() }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug)]
pub struct ValidationErrorType {
    pub message: String,
}

#[derive(SimpleObject, Debug)]
pub struct StorageError {
    pub message: String,
}
