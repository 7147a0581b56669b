use sea_orm::*;

use crate::error::AppError;
use crate::models::dto::PrescriptionFields;
use crate::models::prescription::{self, Entity as Prescription};

const NOT_FOUND: &str = "Prescription not found";

pub struct PrescriptionService;

impl PrescriptionService {
    /// Toutes les prescriptions d'un utilisateur (vide si aucune)
    pub async fn list_prescriptions(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Vec<prescription::Model>, AppError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::BadRequest("Email query parameter is required".to_string()));
        }

        let prescriptions = Prescription::find()
            .filter(prescription::Column::UserEmail.eq(email))
            .order_by_asc(prescription::Column::Id)
            .all(db)
            .await?;

        Ok(prescriptions)
    }

    /// Lecture par id seulement (pas filtrée par propriétaire)
    pub async fn get_prescription(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<prescription::Model, AppError> {
        Prescription::find_by_id(id)
            .one(db)
            .await?
            .ok_or(AppError::NotFound(NOT_FOUND))
    }

    /// Crée une prescription et retourne l'id attribué par la BD
    pub async fn create_prescription(
        db: &DatabaseConnection,
        fields: PrescriptionFields,
        owner_email: &str,
    ) -> Result<i32, AppError> {
        let new_prescription = prescription::ActiveModel {
            user_email: Set(owner_email.to_string()),
            ..fields_to_active_model(fields)
        };

        let result = Prescription::insert(new_prescription).exec(db).await?;
        Ok(result.last_insert_id)
    }

    /// Remplacement complet (sauf id et user_email), le dernier écrit gagne
    pub async fn update_prescription(
        db: &DatabaseConnection,
        id: i32,
        fields: PrescriptionFields,
    ) -> Result<(), AppError> {
        let result = Prescription::update_many()
            .set(fields_to_active_model(fields))
            .filter(prescription::Column::Id.eq(id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND));
        }
        Ok(())
    }

    /// Suppression définitive
    pub async fn delete_prescription(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
        let result = Prescription::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND));
        }
        Ok(())
    }
}

fn fields_to_active_model(fields: PrescriptionFields) -> prescription::ActiveModel {
    prescription::ActiveModel {
        medication_name: Set(fields.medication_name),
        dosage_quantity: Set(fields.dosage_quantity),
        dosage_frequency: Set(fields.dosage_frequency),
        dosage_duration: Set(fields.dosage_duration),
        start_date: Set(fields.start_date),
        end_date: Set(fields.end_date),
        notes: Set(fields.notes),
        ..Default::default()
    }
}
