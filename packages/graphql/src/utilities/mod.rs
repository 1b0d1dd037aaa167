pub mod markdown;
pub mod requires_auth;

pub use markdown::MarkdownCache;
pub use requires_auth::CurrentUser;
