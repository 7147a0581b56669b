//! Backend REST du dossier santé personnel: profil (table `user_info`) et
//! prescriptions (table `prescriptions`), identité fournie par Auth0.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
