use actix_cors::Cors;
use actix_web::{http::header, middleware::DefaultHeaders};

/// En-têtes de sécurité ajoutés à toutes les réponses
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .add((header::REFERRER_POLICY, "no-referrer"))
        .add((header::X_DNS_PREFETCH_CONTROL, "off"))
        .add((header::STRICT_TRANSPORT_SECURITY, "max-age=15552000; includeSubDomains"))
}

/// CORS: seul le front React (APP_ORIGIN) peut appeler l'API depuis un navigateur
pub fn cors(app_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(app_origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
