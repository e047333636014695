use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::client::ClientDto;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::client as client_service;

#[get("/clients")]
pub async fn list_clients(repo: web::Data<DieselRepository>) -> impl Responder {
    match client_service::list_clients(repo.get_ref()) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(err) => error_response(err, "Failed to list clients"),
    }
}

#[get("/clients/{client_id}")]
pub async fn show_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::get_client(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(err, "Failed to get client"),
    }
}

#[get("/clients/{client_id}/tasks")]
pub async fn show_client_tasks(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::list_client_tasks(repo.get_ref(), client_id.into_inner()) {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(err) => error_response(err, "Failed to list client tasks"),
    }
}

#[post("/clients")]
pub async fn create_client(
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<ClientDto>,
) -> impl Responder {
    match client_service::create_client(repo.get_ref(), payload) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(err, "Failed to create client"),
    }
}

#[put("/clients/{client_id}")]
pub async fn update_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<ClientDto>,
) -> impl Responder {
    match client_service::update_client(repo.get_ref(), client_id.into_inner(), payload) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => error_response(err, "Failed to update client"),
    }
}

#[delete("/clients/{client_id}")]
pub async fn delete_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::delete_client(repo.get_ref(), client_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "Failed to delete client"),
    }
}
