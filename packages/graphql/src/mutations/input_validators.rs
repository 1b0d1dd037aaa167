use async_graphql::{InputObject, MaybeUndefined};
use sea_orm::entity::prelude::Uuid;
use services::validation::field_validators::FieldValidator;
use services::validation::input_validator::{InputValidator, ValidationErrors};

#[derive(InputObject)]
pub struct AddPostInput {
    pub title: String,
    pub content: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub published: Option<bool>,
}

impl InputValidator for AddPostInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.title, "title", &mut errors);
        FieldValidator::validate_required_string(&self.content, "content", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Only supplied fields change; `category_id` distinguishes "leave alone"
/// (undefined) from "clear" (explicit null).
#[derive(InputObject)]
pub struct UpdatePostInput {
    pub id: Uuid,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category_id: MaybeUndefined<Uuid>,
    pub published: Option<bool>,
}

impl InputValidator for UpdatePostInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(title) = &self.title {
            FieldValidator::validate_required_string(title, "title", &mut errors);
        }
        if let Some(content) = &self.content {
            FieldValidator::validate_required_string(content, "content", &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(InputObject)]
pub struct AddCategoryInput {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl InputValidator for AddCategoryInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.name, "name", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(InputObject)]
pub struct UpdateCategoryInput {
    pub id: Uuid,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl InputValidator for UpdateCategoryInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(name) = &self.name {
            FieldValidator::validate_required_string(name, "name", &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(InputObject)]
pub struct AddTagInput {
    pub name: String,
    pub slug: Option<String>,
    pub color: Option<String>,
}

impl InputValidator for AddTagInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.name, "name", &mut errors);
        if let Some(color) = &self.color {
            FieldValidator::validate_hex_color(color, "color", &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(InputObject)]
pub struct UpdateTagInput {
    pub id: Uuid,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub color: Option<String>,
}

impl InputValidator for UpdateTagInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(name) = &self.name {
            FieldValidator::validate_required_string(name, "name", &mut errors);
        }
        if let Some(color) = &self.color {
            FieldValidator::validate_hex_color(color, "color", &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(InputObject)]
pub struct AddGalleryImageInput {
    pub post_id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub sort_order: Option<i32>,
}

impl InputValidator for AddGalleryImageInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.image_url, "imageUrl", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(InputObject)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
}

impl InputValidator for ContactInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.name, "name", &mut errors);
        FieldValidator::validate_email(&self.email, &mut errors);
        FieldValidator::validate_required_string(&self.message, "message", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
