use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Une prescription = un traitement médicamenteux d'un utilisateur.
/// `user_email` est fixé à la création, jamais modifié par un update.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prescriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_email: String,
    pub medication_name: String,
    pub dosage_quantity: f64,
    pub dosage_frequency: String, // "Tous les jours", "Une fois par semaine", ...
    pub dosage_duration: String,  // "<valeur> <unité>", ex: "10 jours"
    pub start_date: Date,
    pub end_date: Option<Date>, // NULL = traitement en cours / sans fin connue
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
