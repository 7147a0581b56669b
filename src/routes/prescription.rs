use actix_web::{delete, get, post, put, web, HttpResponse};
use sea_orm::DatabaseConnection;
use tracing::info;
use validator::Validate;

use crate::error::AppError;
use crate::models::dto::{CreatePrescriptionRequest, CreatedResponse, EmailQuery, MessageResponse, PrescriptionFields};
use crate::services::prescription_service::PrescriptionService;

/// GET /get-prescriptions?email=... - Liste des prescriptions d'un utilisateur
#[get("/get-prescriptions")]
pub async fn get_prescriptions(
    db: web::Data<DatabaseConnection>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    let email = query.email.as_deref().unwrap_or_default();
    let prescriptions = PrescriptionService::list_prescriptions(&db, email).await?;

    Ok(HttpResponse::Ok().json(prescriptions))
}

/// POST /save-prescription - Nouvelle prescription
#[post("/save-prescription")]
pub async fn save_prescription(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePrescriptionRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let CreatePrescriptionRequest { user_email, fields } = body.into_inner();

    let id = PrescriptionService::create_prescription(&db, fields, &user_email).await?;
    info!(id, "prescription saved");

    Ok(HttpResponse::Created().json(CreatedResponse {
        message: "Prescription saved successfully",
        id,
    }))
}

/// GET /get-prescription/{id}
#[get("/get-prescription/{id}")]
pub async fn get_prescription(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let prescription = PrescriptionService::get_prescription(&db, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(prescription))
}

/// PUT /update-prescription/{id} - Remplacement complet
#[put("/update-prescription/{id}")]
pub async fn update_prescription(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    body: web::Json<PrescriptionFields>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;
    let id = path.into_inner();

    PrescriptionService::update_prescription(&db, id, body.into_inner()).await?;
    info!(id, "prescription updated");

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Prescription updated successfully",
    }))
}

/// DELETE /delete-prescription/{id}
#[delete("/delete-prescription/{id}")]
pub async fn delete_prescription(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    PrescriptionService::delete_prescription(&db, id).await?;
    info!(id, "prescription deleted");

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Prescription deleted successfully",
    }))
}

pub fn prescription_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_prescriptions)
        .service(save_prescription)
        .service(get_prescription)
        .service(update_prescription)
        .service(delete_prescription);
}
