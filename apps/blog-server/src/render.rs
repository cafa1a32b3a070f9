//! Template rendering with Tera.
//!
//! Templates are compiled into the binary and registered together so that
//! `{% extends %}` chains resolve at startup.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use serde::Serialize;
use tera::{Context, Tera};

use crate::middleware::error::AppResult;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("blog/base.html", include_str!("../templates/blog/base.html")),
    ("blog/post_list.html", include_str!("../templates/blog/post_list.html")),
    ("blog/post_detail.html", include_str!("../templates/blog/post_detail.html")),
    ("single_pages/home.html", include_str!("../templates/single_pages/home.html")),
    ("single_pages/about_me.html", include_str!("../templates/single_pages/about_me.html")),
];

/// Compiled page templates plus the values every page shares.
pub struct Templates {
    tera: Tera,
    site_name: String,
}

impl Templates {
    pub fn new(site_name: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;

        Ok(Self {
            tera,
            site_name: site_name.to_string(),
        })
    }

    /// Render `name` with the fields of `context` as top-level variables.
    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> AppResult<String> {
        let mut context = Context::from_serialize(context)?;
        context.insert("site_name", &self.site_name);

        Ok(self.tera.render(name, &context)?)
    }

    /// Render a page without view data.
    pub fn render_static(&self, name: &str) -> AppResult<String> {
        let mut context = Context::new();
        context.insert("site_name", &self.site_name);

        Ok(self.tera.render(name, &context)?)
    }
}

/// Wrap rendered HTML in a 200 response.
pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_compile() {
        let templates = Templates::new("MyBlog").unwrap();
        for (name, _) in TEMPLATES {
            assert!(templates.tera.get_template_names().any(|n| n == *name));
        }
    }

    #[test]
    fn test_site_name_is_shared() {
        let templates = Templates::new("Notes").unwrap();
        let page = templates.render_static("single_pages/about_me.html").unwrap();
        assert!(page.contains(">Notes</a>"));
    }
}
