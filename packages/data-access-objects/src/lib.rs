pub mod category;
pub mod contact;
pub mod gallery;
pub mod post;
pub mod post_tag;
pub mod tag;
pub mod user;

pub use category::CategoryDao;
pub use contact::ContactDao;
pub use gallery::GalleryDao;
pub use post::PostDao;
pub use post_tag::PostTagDao;
pub use tag::TagDao;
pub use user::UserDao;
