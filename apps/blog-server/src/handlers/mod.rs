//! HTTP handlers and route configuration.

mod blog;
mod health;
mod pages;

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::home))
        .route("/about_me/", web::get().to(pages::about_me))
        .route("/about_me", web::get().to(blog::append_slash))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/blog")
                .route("", web::get().to(blog::append_slash))
                .route("/", web::get().to(blog::post_list))
                .route("/{id}", web::get().to(blog::append_slash))
                .route("/{id}/", web::get().to(blog::post_detail)),
        )
        .default_service(web::to(not_found));
}

async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("No route matches the request".to_string()))
}
