mod config;
mod db;
mod errors;
mod graphql;
mod handlers;
mod models;
mod store;
mod utils;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use log::{error, info};
use std::process;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            process::exit(1);
        }
    };

    // A store that cannot be reached at startup is fatal.
    let state = match db::connect(&config).await {
        Ok(state) => state,
        Err(err) => {
            error!("Error connecting to MongoDB: {}", err);
            process::exit(1);
        }
    };

    let schema = graphql::build_schema(state);
    let port = config.port;

    info!("Server running on http://localhost:{}{}", port, graphql::GRAPHQL_PATH);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(web::Data::new(schema.clone()))
            .configure(graphql::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
