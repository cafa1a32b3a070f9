//! Static pages linked from the navigation bar.

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppResult;
use crate::render::html;
use crate::state::AppState;

/// GET /
pub async fn home(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(html(state.templates.render_static("single_pages/home.html")?))
}

/// GET /about_me/
pub async fn about_me(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(html(state.templates.render_static("single_pages/about_me.html")?))
}
