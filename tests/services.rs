mod common;

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait};

use common::setup_db;
use health_record_api::db::establish_connection;
use health_record_api::error::AppError;
use health_record_api::models::dto::{PrescriptionFields, ProfileFields};
use health_record_api::models::user_info::{self, Rhesus};
use health_record_api::services::{
    prescription_service::PrescriptionService, profile_service::ProfileService,
};

fn fields() -> ProfileFields {
    ProfileFields {
        firstname: "Louis".to_string(),
        lastname: "Tremblay".to_string(),
        age: 0,
        poids: 3.4,
        taille: 51.0,
        rhesus: Rhesus::Positive,
        allergies: None,
    }
}

fn prescription(name: &str) -> PrescriptionFields {
    PrescriptionFields {
        medication_name: name.to_string(),
        dosage_quantity: 2.5,
        dosage_frequency: "Tous les jours".to_string(),
        dosage_duration: "10 jours".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        end_date: None,
        notes: None,
    }
}

#[tokio::test]
async fn test_missing_email_fails_before_database() {
    // pas de connexion: une requête BD donnerait AppError::Database
    let db = DatabaseConnection::Disconnected;

    let result = ProfileService::get_profile(&db, "").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = PrescriptionService::list_prescriptions(&db, "   ").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn test_establish_connection() {
    let db = establish_connection("sqlite::memory:").await.unwrap();

    assert!(db.ping().await.is_ok());
    assert_eq!(db.get_database_backend(), sea_orm::DatabaseBackend::Sqlite);
    db.close().await.unwrap();
}

#[tokio::test]
async fn test_create_then_get_profile() {
    let db = setup_db().await;

    ProfileService::create_profile(&db, fields(), "louis@example.com").await.unwrap();
    let profile = ProfileService::get_profile(&db, "louis@example.com").await.unwrap();

    assert_eq!(profile.email, "louis@example.com");
    assert_eq!(profile.firstname, "Louis");
    assert_eq!(profile.age, 0);
    assert_eq!(profile.poids, 3.4);
    assert_eq!(profile.rhesus, Rhesus::Positive);
    assert_eq!(profile.allergies, None);
}

#[tokio::test]
async fn test_update_missing_profile_leaves_table_unchanged() {
    let db = setup_db().await;
    ProfileService::create_profile(&db, fields(), "louis@example.com").await.unwrap();

    let result = ProfileService::update_profile(&db, fields(), "ghost@example.com").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let rows = user_info::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "louis@example.com");
    assert_eq!(rows[0].firstname, "Louis");
}

#[tokio::test]
async fn test_duplicate_profile_is_inserted() {
    let db = setup_db().await;

    ProfileService::create_profile(&db, fields(), "louis@example.com").await.unwrap();
    let mut second = fields();
    second.firstname = "Louise".to_string();
    ProfileService::create_profile(&db, second, "louis@example.com").await.unwrap();

    // pas de contrainte d'unicité: deux lignes, la première est renvoyée
    let count = user_info::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 2);
    let profile = ProfileService::get_profile(&db, "louis@example.com").await.unwrap();
    assert_eq!(profile.firstname, "Louis");
}

#[tokio::test]
async fn test_prescription_lifecycle() {
    let db = setup_db().await;

    let id = PrescriptionService::create_prescription(&db, prescription("Amoxicilline"), "louis@example.com")
        .await
        .unwrap();
    let stored = PrescriptionService::get_prescription(&db, id).await.unwrap();
    assert_eq!(stored.user_email, "louis@example.com");
    assert_eq!(stored.dosage_duration, "10 jours");

    let mut changed = prescription("Amoxicilline");
    changed.end_date = NaiveDate::from_ymd_opt(2024, 5, 10);
    PrescriptionService::update_prescription(&db, id, changed).await.unwrap();
    let stored = PrescriptionService::get_prescription(&db, id).await.unwrap();
    assert_eq!(stored.end_date, NaiveDate::from_ymd_opt(2024, 5, 10));

    PrescriptionService::delete_prescription(&db, id).await.unwrap();
    let result = PrescriptionService::get_prescription(&db, id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = PrescriptionService::update_prescription(&db, id, prescription("X")).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_prescription_lookup_is_not_owner_scoped() {
    let db = setup_db().await;

    let id = PrescriptionService::create_prescription(&db, prescription("Ventoline"), "a@x.com")
        .await
        .unwrap();

    // n'importe quel appelant qui connaît l'id peut lire la prescription
    let stored = PrescriptionService::get_prescription(&db, id).await.unwrap();
    assert_eq!(stored.user_email, "a@x.com");
    assert!(PrescriptionService::list_prescriptions(&db, "b@x.com").await.unwrap().is_empty());
}
