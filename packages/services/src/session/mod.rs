pub mod claims;
pub mod resolver;
pub mod token;

/// Name of the HttpOnly cookie the session token travels in.
pub const SESSION_COOKIE: &str = "session";

pub use resolver::*;
pub use token::*;
