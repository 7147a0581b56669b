use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::jwt::JwksVerifier;

/// Utilisateur authentifié par un access token Auth0.
/// Utilisé comme extracteur dans les routes protégées.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub subject: String,
    pub scopes: Vec<String>,
}

/// Implémentation de FromRequest pour AuthUser.
/// Asynchrone: la vérification peut recharger le JWKS d'Auth0.
impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = req.app_data::<web::Data<JwksVerifier>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let verifier = verifier
                .ok_or_else(|| AppError::Internal("JWKS verifier is not registered".to_string()))?;
            let token = token?;

            let claims = verifier.verify(&token).await?;

            Ok(AuthUser {
                subject: claims.sub,
                scopes: claims
                    .scope
                    .map(|s| s.split_whitespace().map(str::to_string).collect())
                    .unwrap_or_default(),
            })
        })
    }
}

/// Extrait le token du header "Authorization: Bearer <token>"
fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let header = req
        .headers()
        .get("Authorization")
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let value = header
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid Authorization header".to_string()))?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AppError::Unauthorized(
            "Invalid Authorization format (expected: Bearer <token>)".to_string(),
        )),
    }
}
