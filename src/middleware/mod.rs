pub mod auth;
pub mod security;

pub use auth::AuthUser;
pub use security::{cors, security_headers};
