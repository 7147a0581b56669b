use sea_orm::*;

use crate::error::AppError;
use crate::models::dto::ProfileFields;
use crate::models::user_info::{self, Entity as UserInfo};

pub struct ProfileService;

impl ProfileService {
    /// Récupère le profil associé à un email.
    /// L'email est vérifié avant tout appel à la BD.
    pub async fn get_profile(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<user_info::Model, AppError> {
        let email = require_email(email)?;

        UserInfo::find()
            .filter(user_info::Column::Email.eq(email))
            .order_by_asc(user_info::Column::Id)
            .one(db)
            .await?
            .ok_or(AppError::NotFound("No data found"))
    }

    /// Insère un nouveau profil (un seul INSERT, pas de vérification d'unicité)
    pub async fn create_profile(
        db: &DatabaseConnection,
        fields: ProfileFields,
        email: &str,
    ) -> Result<i32, AppError> {
        let email = require_email(email)?;

        let profile = user_info::ActiveModel {
            email: Set(email.to_string()),
            ..fields_to_active_model(fields)
        };

        let result = UserInfo::insert(profile).exec(db).await?;
        Ok(result.last_insert_id)
    }

    /// Remplace tous les champs du profil sauf l'email
    pub async fn update_profile(
        db: &DatabaseConnection,
        fields: ProfileFields,
        email: &str,
    ) -> Result<(), AppError> {
        let email = require_email(email)?;

        let result = UserInfo::update_many()
            .set(fields_to_active_model(fields))
            .filter(user_info::Column::Email.eq(email))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("No user found with this email"));
        }
        Ok(())
    }
}

fn require_email(email: &str) -> Result<&str, AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest("Email query parameter is required".to_string()));
    }
    Ok(email)
}

// id et email restent NotSet
fn fields_to_active_model(fields: ProfileFields) -> user_info::ActiveModel {
    user_info::ActiveModel {
        firstname: Set(fields.firstname),
        lastname: Set(fields.lastname),
        age: Set(fields.age),
        poids: Set(fields.poids),
        taille: Set(fields.taille),
        rhesus: Set(fields.rhesus),
        allergies: Set(fields.allergies),
        ..Default::default()
    }
}
