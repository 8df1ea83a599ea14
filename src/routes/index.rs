use actix_web::{web, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../templates/index.html");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(render_index));
}

/// Static landing page
async fn render_index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
