// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Liste des modules:
//   - health : Health check API
//   - user_info : Profil santé d'un utilisateur (table user_info)
//   - prescription : Prescriptions médicamenteuses (table prescriptions)
//   - dto : Corps de requêtes/réponses de l'API
//
// Points d'attention:
//   - Les deux tables sont liées par l'email Auth0, sans clé étrangère
//   - Les requêtes passent toutes par SeaORM (pas de SQL brut)
//
// ============================================================================

pub mod health;
pub mod user_info;
pub mod prescription;
pub mod dto;
