use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::task::TaskDto;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::task as task_service;

#[get("/tasks")]
pub async fn list_tasks(repo: web::Data<DieselRepository>) -> impl Responder {
    match task_service::list_tasks(repo.get_ref()) {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(err) => error_response(err, "Failed to list tasks"),
    }
}

#[get("/tasks/{task_id}")]
pub async fn show_task(
    task_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match task_service::get_task(repo.get_ref(), task_id.into_inner()) {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(err) => error_response(err, "Failed to get task"),
    }
}

#[post("/tasks")]
pub async fn create_task(
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<TaskDto>,
) -> impl Responder {
    match task_service::create_task(repo.get_ref(), payload) {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(err) => error_response(err, "Failed to create task"),
    }
}

#[put("/tasks/{task_id}")]
pub async fn update_task(
    task_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<TaskDto>,
) -> impl Responder {
    match task_service::update_task(repo.get_ref(), task_id.into_inner(), payload) {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(err) => error_response(err, "Failed to update task"),
    }
}

#[delete("/tasks/{task_id}")]
pub async fn delete_task(
    task_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match task_service::delete_task(repo.get_ref(), task_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "Failed to delete task"),
    }
}
