pub mod category;
pub mod contact;
pub mod gallery;
pub mod post;
pub mod slug;
pub mod tag;
pub mod user;

pub use category::{CategoryChanges, CategoryRepository};
pub use contact::ContactRepository;
pub use gallery::{GalleryImageChanges, GalleryRepository};
pub use post::{NewPost, PostChanges, PostPage, PostRepository};
pub use slug::slugify;
pub use tag::{TagChanges, TagRepository};
pub use user::{UserIdentity, UserRepository};

#[cfg(test)]
mod test_helpers;
