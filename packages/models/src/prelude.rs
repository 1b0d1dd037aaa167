pub use super::categories::Entity as Categories;
pub use super::contact_submissions::Entity as ContactSubmissions;
pub use super::post_gallery_images::Entity as PostGalleryImages;
pub use super::post_tags::Entity as PostTags;
pub use super::posts::Entity as Posts;
pub use super::tags::Entity as Tags;
pub use super::users::Entity as Users;
