use actix_web::{HttpResponse, Responder};
use log::info;

const INDEX_TITLE: &str = "Book Reading Tracker";
const INDEX_TEMPLATE: &str = include_str!("../../../templates/index.html");
const APP_JS: &str = include_str!("../../../static/js/app.js");

pub async fn index() -> impl Responder {
    info!("Received request on / endpoint");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_TEMPLATE.replace("{{ title }}", INDEX_TITLE))
}

pub async fn app_js() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(APP_JS)
}
