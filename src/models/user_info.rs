// ============================================================================
// MODÈLE : USER_INFO (profil santé)
// ============================================================================
//
// Colonnes de la table user_info:
//   - id (INT, PRIMARY KEY, AUTO_INCREMENT)
//   - email (VARCHAR, NOT NULL) - fourni par Auth0, jamais modifié
//   - firstname, lastname (VARCHAR, NOT NULL)
//   - age (INT, NOT NULL)
//   - poids (DOUBLE, NOT NULL) - kg
//   - taille (DOUBLE, NOT NULL) - cm
//   - rhesus (VARCHAR, NOT NULL) - 'positive' | 'negative'
//   - allergies (TEXT, NULL)
//
// Points d'attention:
//   - Pas de contrainte UNIQUE sur email: un deuxième POST /save-user-info
//     pour le même email crée un doublon (get_profile renvoie le premier)
//   - Un profil n'est jamais supprimé par l'API
//
// ============================================================================

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub poids: f64,
    pub taille: f64,
    pub rhesus: Rhesus,
    #[sea_orm(column_type = "Text", nullable)]
    pub allergies: Option<String>,
}

/// Facteur rhésus, stocké en minuscules comme le front l'envoie
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "lowercase")]
pub enum Rhesus {
    #[sea_orm(string_value = "positive")]
    Positive,
    #[sea_orm(string_value = "negative")]
    Negative,
}

// Les prescriptions référencent user_info.email sans clé étrangère
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
