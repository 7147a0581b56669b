//pour les corps de requêtes / réponses
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user_info::Rhesus;
use crate::utils::serde_helpers::{empty_string_as_none, lenient_number};

// ---------------------------------------------------------------------------
// Profil
// ---------------------------------------------------------------------------

/// Champs modifiables d'un profil (tout sauf l'email)
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct ProfileFields {
    #[validate(length(min = 1, message = "firstname is required"))]
    pub firstname: String,
    #[validate(length(min = 1, message = "lastname is required"))]
    pub lastname: String,
    #[serde(deserialize_with = "lenient_number")]
    #[validate(range(min = 0, message = "age must be >= 0"))]
    pub age: i32,
    #[serde(deserialize_with = "lenient_number")]
    #[validate(range(exclusive_min = 0.0, message = "poids must be > 0"))]
    pub poids: f64,
    #[serde(deserialize_with = "lenient_number")]
    #[validate(range(exclusive_min = 0.0, message = "taille must be > 0"))]
    pub taille: f64,
    pub rhesus: Rhesus,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub allergies: Option<String>,
}

/// Body de POST /save-user-info et PUT /update-user-info
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub fields: ProfileFields,
}

// ---------------------------------------------------------------------------
// Prescription
// ---------------------------------------------------------------------------

/// Body de PUT /update-prescription/:id (remplacement complet)
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct PrescriptionFields {
    #[validate(length(min = 1, message = "medication_name is required"))]
    pub medication_name: String,
    #[serde(deserialize_with = "lenient_number")]
    pub dosage_quantity: f64,
    pub dosage_frequency: String,
    pub dosage_duration: String,
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

/// Body de POST /save-prescription
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePrescriptionRequest {
    #[validate(length(min = 1, message = "user_email is required"))]
    pub user_email: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub fields: PrescriptionFields,
}

// ---------------------------------------------------------------------------
// Query / réponses
// ---------------------------------------------------------------------------

/// ?email=... (optionnel pour pouvoir répondre 400 nous-mêmes)
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i32,
}

/// Réponse de GET /api/external
#[derive(Debug, Serialize)]
pub struct ExternalResponse {
    pub msg: &'static str,
}
