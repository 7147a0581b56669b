// Configuration du serveur, chargée une seule fois au démarrage.
// Les variables viennent de l'environnement (ou du .env chargé par dotenv dans main).

use std::{env, fmt::Display, str::FromStr};

use actix_web::http::Uri;
use thiserror::Error;
use tracing::info;

/// Valeur laissée par le template Auth0 quand l'API n'est pas encore configurée
const PLACEHOLDER_AUDIENCE: &str = "YOUR_API_IDENTIFIER";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("please make sure AUTH0_DOMAIN and AUTH0_AUDIENCE are populated with valid values")]
    IdentityProvider,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Origine du front React autorisée par CORS
    pub app_origin: String,
    pub auth0_domain: String,
    pub auth0_audience: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Même chose que `from_env` mais avec une source de variables injectable (tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = try_load(&lookup, "API_PORT", 3001u16)?;
        let app_port = try_load(&lookup, "SERVER_PORT", 3000u16)?;
        let app_origin = lookup("APP_ORIGIN")
            .filter(|origin| !origin.is_empty())
            .unwrap_or_else(|| format!("http://localhost:{app_port}"));
        validate_origin(&app_origin)?;

        let auth0_domain = lookup("AUTH0_DOMAIN").unwrap_or_default();
        let auth0_audience = lookup("AUTH0_AUDIENCE").unwrap_or_default();
        if auth0_domain.is_empty() || auth0_audience.is_empty() || auth0_audience == PLACEHOLDER_AUDIENCE {
            return Err(ConfigError::IdentityProvider);
        }

        Ok(Self {
            database_url,
            host,
            port,
            app_origin,
            auth0_domain,
            auth0_audience,
        })
    }

    /// Issuer attendu dans les tokens: https://<domain>/
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.auth0_domain.trim_end_matches('/'))
    }
}

/// actix-cors n'accepte qu'une origine exacte: "http(s)://hôte[:port]"
fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "APP_ORIGIN",
        reason,
    };

    let uri: Uri = origin
        .parse()
        .map_err(|e: actix_web::http::uri::InvalidUri| invalid(e.to_string()))?;
    if !matches!(uri.scheme_str(), Some("http" | "https")) || uri.host().is_none() {
        return Err(invalid(format!("{origin} is not an http(s) origin")));
    }
    if uri.path() != "/" || uri.query().is_some() || origin.ends_with('/') {
        return Err(invalid(format!("{origin} must not contain a path")));
    }
    Ok(())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://root@localhost/health"),
            ("AUTH0_DOMAIN", "dev-health.eu.auth0.com"),
            ("AUTH0_AUDIENCE", "https://health-api"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.app_origin, "http://localhost:3000");
        assert_eq!(config.issuer(), "https://dev-health.eu.auth0.com/");
    }

    #[test]
    fn test_app_origin_follows_server_port() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://root@localhost/health"),
            ("SERVER_PORT", "5173"),
            ("AUTH0_DOMAIN", "dev-health.eu.auth0.com"),
            ("AUTH0_AUDIENCE", "https://health-api"),
        ]))
        .unwrap();

        assert_eq!(config.app_origin, "http://localhost:5173");
    }

    #[test]
    fn test_placeholder_audience_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://root@localhost/health"),
            ("AUTH0_DOMAIN", "dev-health.eu.auth0.com"),
            ("AUTH0_AUDIENCE", "YOUR_API_IDENTIFIER"),
        ]));

        assert_eq!(result.unwrap_err(), ConfigError::IdentityProvider);
    }

    #[test]
    fn test_missing_database_url() {
        let result = Config::from_lookup(lookup_from(&[
            ("AUTH0_DOMAIN", "dev-health.eu.auth0.com"),
            ("AUTH0_AUDIENCE", "https://health-api"),
        ]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_app_origin_must_be_an_exact_origin() {
        for origin in ["*", "localhost:3000", "ftp://files.example.com", "http://localhost:3000/app", "http://localhost:3000/"] {
            let result = Config::from_lookup(lookup_from(&[
                ("DATABASE_URL", "mysql://root@localhost/health"),
                ("APP_ORIGIN", origin),
                ("AUTH0_DOMAIN", "dev-health.eu.auth0.com"),
                ("AUTH0_AUDIENCE", "https://health-api"),
            ]));

            assert!(
                matches!(result, Err(ConfigError::Invalid { key: "APP_ORIGIN", .. })),
                "{origin} accepted"
            );
        }
    }

    #[test]
    fn test_explicit_app_origin() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://root@localhost/health"),
            ("APP_ORIGIN", "https://sante.example.com"),
            ("AUTH0_DOMAIN", "dev-health.eu.auth0.com"),
            ("AUTH0_AUDIENCE", "https://health-api"),
        ]))
        .unwrap();

        assert_eq!(config.app_origin, "https://sante.example.com");
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "mysql://root@localhost/health"),
            ("API_PORT", "http"),
            ("AUTH0_DOMAIN", "dev-health.eu.auth0.com"),
            ("AUTH0_AUDIENCE", "https://health-api"),
        ]));

        assert!(matches!(result, Err(ConfigError::Invalid { key: "API_PORT", .. })));
    }
}
