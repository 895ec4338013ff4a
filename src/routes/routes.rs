use actix_web::web;
use log::warn;

use crate::error::AppError;

use super::index::index_handlers;

pub fn index_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handlers::index))
        .route("/static/js/app.js", web::get().to(index_handlers::app_js));
}

use super::users::users_handlers;

pub fn users_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .app_data(json_config())
            .route("", web::get().to(users_handlers::get_users))
            .route("", web::post().to(users_handlers::create_user))
    );
}

// Bodies that fail to parse never reach a handler.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        AppError::BadRequest(err.to_string()).into()
    })
}
