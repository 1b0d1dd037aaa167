pub mod category;
pub mod contact;
pub mod gallery;
pub mod post;
pub mod tag;
pub mod upload;
pub mod user;
