#![allow(dead_code)]

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use serde_json::{json, Value};

use health_record_api::models::{prescription, user_info};

/// SQLite en mémoire avec les deux tables créées depuis les entités.
/// Une seule connexion: chaque connexion :memory: a sa propre base.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.expect("sqlite connection");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(user_info::Entity)))
        .await
        .expect("create user_info");
    db.execute(backend.build(&schema.create_table_from_entity(prescription::Entity)))
        .await
        .expect("create prescriptions");

    db
}

pub fn profile_body(email: &str) -> Value {
    json!({
        "firstname": "Camille",
        "lastname": "Roy",
        "age": 41,
        "poids": 63.5,
        "taille": 168.0,
        "rhesus": "negative",
        "allergies": "Pénicilline",
        "email": email,
    })
}

pub fn prescription_body(email: &str, medication: &str) -> Value {
    json!({
        "user_email": email,
        "medication_name": medication,
        "dosage_quantity": 500,
        "dosage_frequency": "daily",
        "dosage_duration": "7 days",
        "start_date": "2024-01-01",
        "end_date": "",
        "notes": "",
    })
}
