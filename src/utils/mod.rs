pub mod jwt;
pub mod serde_helpers;
