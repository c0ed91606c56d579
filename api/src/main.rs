use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use std::sync::Arc;

use eg_api::middleware::cors::create_cors;
use eg_api::routes;
use eg_api::routes::egov::AppState;
use eg_core::services::{LoginService, LoginServiceConfig};
use eg_infra::database::{DatabasePool, MySqlProfileRepository};
use eg_infra::http::EgovHttpClient;
use eg_shared::config::{DatabaseConfig, EgovConfig, ServerConfig};

fn boot_error(error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting eGov Link API Server");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env().map_err(boot_error)?;
    let egov_config = EgovConfig::from_env().map_err(boot_error)?;

    // A deployment without credentials still boots; every login attempt
    // answers with a configuration error until an operator fixes it.
    if let Err(error) = egov_config.validate() {
        warn!("eGov credentials incomplete: {}", error);
    }

    let pool = DatabasePool::new(&database_config)
        .await
        .map_err(boot_error)?;

    let profiles = Arc::new(MySqlProfileRepository::new(pool.get_pool().clone()));
    let client = Arc::new(EgovHttpClient::new(egov_config.clone()).map_err(boot_error)?);
    let login_service = Arc::new(LoginService::new(
        Arc::clone(&client),
        Arc::clone(&profiles),
        LoginServiceConfig {
            notify_message: egov_config.notify_message.clone(),
        },
    ));

    let state = web::Data::new(AppState {
        login_service,
        profiles,
    });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(state.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route(
                        "/egov",
                        web::post()
                            .to(routes::egov::login::<EgovHttpClient, MySqlProfileRepository>),
                    )
                    .route(
                        "/profile",
                        web::get().to(
                            routes::profile::latest_profile::<
                                EgovHttpClient,
                                MySqlProfileRepository,
                            >,
                        ),
                    ),
            )
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "status": "error",
                    "message": "The requested resource was not found",
                }))
            }))
    })
    .bind(&bind_address)?
    .run()
    .await
}
