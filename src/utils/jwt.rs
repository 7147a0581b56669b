use std::time::{Duration, Instant};

use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::AppError;

/// Pas plus d'un rechargement du JWKS par fenêtre, même si on reçoit des kid inconnus en boucle
const REFRESH_COOLDOWN: Duration = Duration::from_secs(30);

/// Claims d'un access token Auth0 (aud/iss/exp sont vérifiés par `Validation`)
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("token header has no kid")]
    MissingKeyId,

    #[error("no signing key matches kid {0}")]
    UnknownKey(String),

    #[error("failed to fetch JWKS: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            // Auth0 injoignable: problème serveur, pas du client
            JwtError::Fetch(_) => AppError::Internal(err.to_string()),
            _ => AppError::Unauthorized(err.to_string()),
        }
    }
}

struct KeyCache {
    keys: JwkSet,
    fetched_at: Option<Instant>,
}

/// Vérifie les access tokens RS256 émis par Auth0.
/// Les clés publiques viennent de https://<domain>/.well-known/jwks.json et sont
/// gardées en cache; un kid inconnu déclenche un rechargement (rotation des clés).
pub struct JwksVerifier {
    jwks_uri: String,
    issuer: String,
    audience: String,
    http: reqwest::Client,
    cache: RwLock<KeyCache>,
}

impl JwksVerifier {
    pub fn new(domain: &str, audience: &str) -> Self {
        let domain = domain.trim_end_matches('/');
        Self::with_keys(
            format!("https://{domain}/.well-known/jwks.json"),
            format!("https://{domain}/"),
            audience,
            JwkSet { keys: Vec::new() },
        )
    }

    /// Construit un vérificateur avec un jeu de clés déjà connu
    pub fn with_keys(jwks_uri: String, issuer: String, audience: &str, keys: JwkSet) -> Self {
        Self {
            jwks_uri,
            issuer,
            audience: audience.to_string(),
            http: reqwest::Client::new(),
            cache: RwLock::new(KeyCache {
                keys,
                fetched_at: None,
            }),
        }
    }

    /// Recharge le JWKS depuis Auth0
    pub async fn refresh(&self) -> Result<(), JwtError> {
        let keys: JwkSet = self
            .http
            .get(&self.jwks_uri)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(count = keys.keys.len(), uri = %self.jwks_uri, "JWKS loaded");

        let mut cache = self.cache.write().await;
        cache.keys = keys;
        cache.fetched_at = Some(Instant::now());
        Ok(())
    }

    /// Vérifie signature, audience, issuer et expiration
    pub async fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let header = decode_header(token)?;
        let kid = header.kid.ok_or(JwtError::MissingKeyId)?;

        let key = match self.decoding_key(&kid).await? {
            Some(key) => key,
            None => {
                self.refresh_if_stale().await?;
                self.decoding_key(&kid)
                    .await?
                    .ok_or_else(|| JwtError::UnknownKey(kid.clone()))?
            }
        };

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<Claims>(token, &key, &validation)?;
        Ok(data.claims)
    }

    async fn decoding_key(&self, kid: &str) -> Result<Option<DecodingKey>, JwtError> {
        let cache = self.cache.read().await;
        match cache.keys.find(kid) {
            Some(jwk) => Ok(Some(DecodingKey::from_jwk(jwk)?)),
            None => Ok(None),
        }
    }

    async fn refresh_if_stale(&self) -> Result<(), JwtError> {
        let recently_fetched = self
            .cache
            .read()
            .await
            .fetched_at
            .is_some_and(|at| at.elapsed() < REFRESH_COOLDOWN);

        if recently_fetched {
            warn!("unknown kid but JWKS was refreshed recently, skipping reload");
            return Ok(());
        }
        self.refresh().await
    }
}
