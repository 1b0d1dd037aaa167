pub mod prelude;

pub mod categories;
pub mod contact_submissions;
pub mod post_gallery_images;
pub mod post_tags;
pub mod posts;
pub mod sea_orm_active_enums;
pub mod tags;
pub mod users;
