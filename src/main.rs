use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use taskrelay::auth::{AuthMiddleware, TokenService};
use taskrelay::config::Config;
use taskrelay::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    // The signing key lives only as long as this process; restarting the
    // server invalidates every outstanding token.
    let token_service = web::Data::new(TokenService::with_random_key());

    info!("Starting TaskRelay server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(token_service.clone())
            // wrap() runs in reverse registration order: CORS outermost, so
            // preflight requests never reach the auth check.
            .wrap(AuthMiddleware)
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .service(routes::health::health)
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
