pub mod external;
pub mod health;
pub mod prescription;
pub mod profile;

use actix_web::{error, web, HttpResponse};

/// Routes CRUD à la racine (chemins attendus par le front),
/// health check et route protégée sous /api
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .configure(profile::profile_routes)
        .configure(prescription::prescription_routes)
        .service(
            web::scope("/api")
                .service(health::health_check)
                .service(external::external_api),
        );
}

/// Body JSON illisible ou mal typé => 400 en texte brut
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(message),
        )
        .into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(message),
        )
        .into()
    })
}
