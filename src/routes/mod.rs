//! JSON routes mounted under `/api`.

use actix_web::{HttpRequest, HttpResponse, error, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod client;
pub mod task;

/// Registers every API route together with the JSON extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(client::list_clients)
                .service(client::show_client)
                .service(client::show_client_tasks)
                .service(client::create_client)
                .service(client::update_client)
                .service(client::delete_client)
                .service(task::list_tasks)
                .service(task::show_task)
                .service(task::create_task)
                .service(task::update_task)
                .service(task::delete_task),
        );
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    error::InternalError::from_response(err, response).into()
}

/// Translates a service failure into the matching HTTP response.
pub fn error_response(err: ServiceError, context: &str) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Validation(_) => HttpResponse::BadRequest().json(body),
        ServiceError::ClientNotFound => HttpResponse::UnprocessableEntity().json(body),
        ServiceError::MissingClient => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().json(body)
        }
        ServiceError::Repository(_) => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
        }
    }
}
