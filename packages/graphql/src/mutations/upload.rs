use crate::errors::{AuthError, StorageError, ValidationErrorType};
use crate::types::upload::UploadedImage;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, InputObject, Object, Result, Union};
use services::storage::{store_image, BlobStore, UploadError};
use std::sync::Arc;

#[derive(Union)]
pub enum UploadMutationResult {
    UploadedImage(UploadedImage),
    ValidationError(ValidationErrorType),
    StorageError(StorageError),
    AuthError(AuthError),
}

#[derive(InputObject)]
struct UploadImageInput {
    filename: String,
    content_type: String,
    base64_data: String,
}

#[derive(Default)]
pub struct UploadMutation;

impl RequiresAuth for UploadMutation {}

#[Object]
impl UploadMutation {
    /// Decodes and stores an image for the blog, returning its public URL.
    async fn upload_image(
        &self,
        ctx: &Context<'_>,
        image: UploadImageInput,
    ) -> Result<UploadMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(UploadMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        let store = ctx.data::<Arc<dyn BlobStore>>().unwrap();

        match store_image(
            store.as_ref(),
            &image.filename,
            &image.content_type,
            &image.base64_data,
        ) {
            Ok(uploaded) => Ok(UploadMutationResult::UploadedImage(UploadedImage {
                url: uploaded.url,
                key: uploaded.key,
            })),
            Err(UploadError::Validation(message)) => Ok(
                UploadMutationResult::ValidationError(ValidationErrorType { message }),
            ),
            Err(UploadError::Storage(message)) => {
                tracing::error!("image upload failed at the blob store");
                Ok(UploadMutationResult::StorageError(StorageError { message }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use crate::utilities::requires_auth::CurrentUser;
    use async_graphql::Request;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use url::Url;

    fn gif_base64() -> String {
        STANDARD.encode(b"GIF89a\x01\x00\x01\x00\x00\x00\x00;")
    }

    #[tokio::test]
    async fn test_upload_image_unauthenticated_returns_auth_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());

        let query = format!(
            r#"mutation {{
                uploadImage(image: {{
                    filename: "a.gif", contentType: "image/gif", base64Data: "{}"
                }}) {{
                    ... on AuthError {{ message }}
                    ... on UploadedImage {{ url }}
                }}
            }}"#,
            gif_base64()
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(None)))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(
            data["uploadImage"]["message"],
            "Restricted to administrators"
        );
    }

    #[tokio::test]
    async fn test_upload_image_stores_under_blog_prefix() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "upload_ok").await;

        let query = format!(
            r#"mutation {{
                uploadImage(image: {{
                    filename: "banner.gif", contentType: "image/gif", base64Data: "{}"
                }}) {{
                    ... on UploadedImage {{ url key }}
                }}
            }}"#,
            gif_base64()
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(Some(admin.clone()))))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        let key = data["uploadImage"]["key"].as_str().unwrap();
        let url = data["uploadImage"]["url"].as_str().unwrap();

        assert!(key.starts_with("blog-images/"));
        assert!(key.ends_with(".gif"));
        assert!(Url::parse(url).is_ok());

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_upload_image_rejects_non_image() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "upload_reject").await;

        let query = format!(
            r#"mutation {{
                uploadImage(image: {{
                    filename: "notas.txt", contentType: "text/plain", base64Data: "{}"
                }}) {{
                    ... on ValidationErrorType {{ message }}
                    ... on UploadedImage {{ url }}
                }}
            }}"#,
            gif_base64()
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(Some(admin.clone()))))
            .await;
        let data = res.data.into_json().unwrap();

        assert!(data["uploadImage"]["message"].as_str().is_some());

        cleanup_user_by_open_id(&db, &open_id).await;
    }
}
