use crate::errors::{AuthError, DbError, ValidationErrorType};
use crate::types::gallery::{ClearedGallery, DeletedGalleryImage, GalleryImage};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, InputObject, Object, Result, Union};
use repositories::{GalleryImageChanges, GalleryRepository};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;
use services::validation::input_validator::InputValidator;
use services::validation::validation_errors_to_message;

use super::input_validators::AddGalleryImageInput;

#[derive(Union)]
pub enum GalleryMutationResult {
    ChangedImage(GalleryImage),
    DeletedImage(DeletedGalleryImage),
    ClearedGallery(ClearedGallery),
    ValidationError(ValidationErrorType),
    DbError(DbError),
    AuthError(AuthError),
}

#[derive(InputObject)]
struct UpdateGalleryImageInput {
    id: Uuid,
    caption: Option<String>,
    sort_order: Option<i32>,
}

#[derive(InputObject)]
struct DeleteGalleryImageInput {
    id: Uuid,
}

#[derive(InputObject)]
struct ClearPostGalleryInput {
    post_id: Uuid,
}

#[derive(Default)]
pub struct GalleryMutation;

impl RequiresAuth for GalleryMutation {}

#[Object]
impl GalleryMutation {
    async fn add_gallery_image(
        &self,
        ctx: &Context<'_>,
        new_image: AddGalleryImageInput,
    ) -> Result<GalleryMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(GalleryMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        if let Err(errors) = new_image.validate() {
            return Ok(GalleryMutationResult::ValidationError(
                ValidationErrorType {
                    message: validation_errors_to_message(&errors),
                },
            ));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match GalleryRepository::add_image(
            db,
            new_image.post_id,
            new_image.image_url,
            new_image.caption,
            new_image.sort_order,
        )
        .await
        {
            Ok(image) => Ok(GalleryMutationResult::ChangedImage(GalleryImage::from(&image))),
            Err(e) => Ok(GalleryMutationResult::DbError(DbError { message: e })),
        }
    }

    async fn update_gallery_image(
        &self,
        ctx: &Context<'_>,
        image: UpdateGalleryImageInput,
    ) -> Result<GalleryMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(GalleryMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        let changes = GalleryImageChanges {
            caption: image.caption,
            sort_order: image.sort_order,
        };

        match GalleryRepository::update_image(db, image.id, changes).await {
            Ok(image) => Ok(GalleryMutationResult::ChangedImage(GalleryImage::from(&image))),
            Err(e) => Ok(GalleryMutationResult::DbError(DbError { message: e })),
        }
    }

    async fn delete_gallery_image(
        &self,
        ctx: &Context<'_>,
        image: DeleteGalleryImageInput,
    ) -> Result<GalleryMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(GalleryMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match GalleryRepository::delete_image(db, image.id).await {
            Ok(id) => Ok(GalleryMutationResult::DeletedImage(DeletedGalleryImage { id })),
            Err(e) => Ok(GalleryMutationResult::DbError(DbError { message: e })),
        }
    }

    /// Purges a post's whole gallery, e.g. right before deleting the post.
    async fn clear_post_gallery(
        &self,
        ctx: &Context<'_>,
        gallery: ClearPostGalleryInput,
    ) -> Result<GalleryMutationResult> {
        if let Err(e) = self.require_authenticate_as_admin(ctx) {
            return Ok(GalleryMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }

        let db = ctx.data::<DatabaseConnection>().unwrap();

        match GalleryRepository::delete_all_for_post(db, gallery.post_id).await {
            Ok(()) => Ok(GalleryMutationResult::ClearedGallery(ClearedGallery {
                post_id: gallery.post_id,
            })),
            Err(e) => Ok(GalleryMutationResult::DbError(DbError { message: e })),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use crate::utilities::requires_auth::CurrentUser;
    use async_graphql::Request;
    use repositories::GalleryRepository;

    #[tokio::test]
    async fn test_add_gallery_image_unauthenticated_returns_auth_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "gal_unauth").await;
        let post = create_test_post(&db, admin.id, "Com Fotos", false).await;

        let query = format!(
            r#"mutation {{
                addGalleryImage(newImage: {{
                    postId: "{}", imageUrl: "https://cdn.example.com/x.jpg"
                }}) {{
                    ... on AuthError {{ message }}
                    ... on GalleryImage {{ id }}
                }}
            }}"#,
            post.id
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(None)))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(
            data["addGalleryImage"]["message"],
            "Restricted to administrators"
        );

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_add_gallery_image_blank_url_returns_validation_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "gal_blank").await;
        let post = create_test_post(&db, admin.id, "Sem URL", false).await;

        let query = format!(
            r#"mutation {{
                addGalleryImage(newImage: {{ postId: "{}", imageUrl: "  " }}) {{
                    ... on ValidationErrorType {{ message }}
                    ... on GalleryImage {{ id }}
                }}
            }}"#,
            post.id
        );

        let res = schema
            .execute(Request::new(&query).data(CurrentUser(Some(admin.clone()))))
            .await;
        let data = res.data.into_json().unwrap();

        assert!(data["addGalleryImage"]["message"].as_str().is_some());

        cleanup_user_by_open_id(&db, &open_id).await;
    }

    #[tokio::test]
    async fn test_gallery_image_lifecycle() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let (admin, open_id) = create_test_admin(&db, "gal_cycle").await;
        let post = create_test_post(&db, admin.id, "Ciclo", false).await;

        let add = format!(
            r#"mutation {{
                addGalleryImage(newImage: {{
                    postId: "{}", imageUrl: "https://cdn.example.com/g.jpg", sortOrder: 4
                }}) {{
                    ... on GalleryImage {{ id sortOrder }}
                }}
            }}"#,
            post.id
        );

        let res = schema
            .execute(Request::new(&add).data(CurrentUser(Some(admin.clone()))))
            .await;
        let data = res.data.into_json().unwrap();
        assert_eq!(data["addGalleryImage"]["sortOrder"], 4);
        let image_id = data["addGalleryImage"]["id"].as_str().unwrap().to_string();

        let update = format!(
            r#"mutation {{
                updateGalleryImage(image: {{ id: "{}", caption: "Equipe" }}) {{
                    ... on GalleryImage {{ caption }}
                }}
            }}"#,
            image_id
        );

        let res = schema
            .execute(Request::new(&update).data(CurrentUser(Some(admin.clone()))))
            .await;
        let data = res.data.into_json().unwrap();
        assert_eq!(data["updateGalleryImage"]["caption"], "Equipe");

        let clear = format!(
            r#"mutation {{
                clearPostGallery(gallery: {{ postId: "{}" }}) {{
                    ... on ClearedGallery {{ postId }}
                }}
            }}"#,
            post.id
        );

        let res = schema
            .execute(Request::new(&clear).data(CurrentUser(Some(admin.clone()))))
            .await;
        let data = res.data.into_json().unwrap();
        assert_eq!(data["clearPostGallery"]["postId"], post.id.to_string());

        let images = GalleryRepository::get_by_post(&db, post.id).await.unwrap();
        assert!(images.is_empty());

        cleanup_user_by_open_id(&db, &open_id).await;
    }
}
