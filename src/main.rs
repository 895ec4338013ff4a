use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;

mod config;
mod db;
mod error;
mod models;
mod routes;

use config::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if config.uses_default_secret() {
        warn!("SECRET_KEY is not set, using the development default");
    }

    let pool = db::init_db(&config.database_url)
        .await
        .map_err(io::Error::other)?;
    let pool = web::Data::new(pool);

    let server_address = config.bind_address();
    info!("Server running at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(pool.clone())
            .configure(routes::routes::index_configure)
            .configure(routes::routes::users_configure)
    })
    .bind(server_address)?
    .run()
    .await
}
