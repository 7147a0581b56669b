use actix_web::{get, post, put, web, HttpResponse};
use sea_orm::DatabaseConnection;
use tracing::info;
use validator::Validate;

use crate::error::AppError;
use crate::models::dto::{EmailQuery, ProfileRequest};
use crate::services::profile_service::ProfileService;

/// GET /get-user-info?email=... - Profil de l'utilisateur
#[get("/get-user-info")]
pub async fn get_user_info(
    db: web::Data<DatabaseConnection>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    let email = query.email.as_deref().unwrap_or_default();
    let profile = ProfileService::get_profile(&db, email).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// POST /save-user-info - Premier enregistrement du profil
#[post("/save-user-info")]
pub async fn save_user_info(
    db: web::Data<DatabaseConnection>,
    body: web::Json<ProfileRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let ProfileRequest { email, fields } = body.into_inner();

    let id = ProfileService::create_profile(&db, fields, &email).await?;
    info!(id, "profile saved");

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Data saved successfully"))
}

/// PUT /update-user-info - Remplace le profil existant
#[put("/update-user-info")]
pub async fn update_user_info(
    db: web::Data<DatabaseConnection>,
    body: web::Json<ProfileRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let ProfileRequest { email, fields } = body.into_inner();

    ProfileService::update_profile(&db, fields, &email).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Data updated successfully"))
}

pub fn profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_user_info)
        .service(save_user_info)
        .service(update_user_info);
}
