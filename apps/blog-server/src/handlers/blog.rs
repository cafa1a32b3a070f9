//! Blog pages - post listing and post detail.

use actix_web::{HttpRequest, HttpResponse, http::header, web};
use serde::Deserialize;

use blog_core::domain::PageRequest;
use blog_core::views;

use crate::middleware::error::{AppError, AppResult};
use crate::render::html;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Kept raw so a malformed value is only an error when pagination is on.
    pub page: Option<String>,
}

/// GET /blog/
///
/// `?page=N` only applies when a page size is configured.
pub async fn post_list(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let page = match state.page_size {
        Some(per_page) => {
            let number = page_number(query.page.as_deref())?;
            Some(PageRequest::new(number, per_page))
        }
        None => None,
    };

    let context = views::post_list(&state.repos, page).await?;
    tracing::debug!(posts = context.object_list.len(), "Rendering post list");

    Ok(html(state.templates.render("blog/post_list.html", &context)?))
}

/// A missing `page` means the first page; anything but a page number is 404.
fn page_number(raw: Option<&str>) -> AppResult<u64> {
    match raw {
        None => Ok(1),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::NotFound(format!("page {:?}", raw))),
    }
}

/// GET /blog/{id}/
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let context = views::post_detail(&state.repos, id).await?;

    Ok(html(state.templates.render("blog/post_detail.html", &context)?))
}

/// Redirect a path missing its trailing slash to the slashed form.
pub async fn append_slash(req: HttpRequest) -> HttpResponse {
    let mut location = format!("{}/", req.path());
    if !req.query_string().is_empty() {
        location.push('?');
        location.push_str(req.query_string());
    }

    HttpResponse::MovedPermanently()
        .insert_header((header::LOCATION, location))
        .finish()
}
