use actix_web::{get, HttpResponse};

use crate::middleware::AuthUser;
use crate::models::dto::ExternalResponse;

/// GET /api/external - Vérifie qu'un access token Auth0 est valide (PROTÉGÉE)
#[get("/external")]
pub async fn external_api(auth_user: AuthUser) -> HttpResponse {
    tracing::debug!(subject = %auth_user.subject, "access token validated");

    HttpResponse::Ok().json(ExternalResponse {
        msg: "Your access token was successfully validated!",
    })
}
