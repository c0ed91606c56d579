//! CORS middleware configuration for cross-origin requests.
//!
//! The login endpoint is called from a web frontend hosted separately, so
//! CORS is environment-aware: permissive in development, restricted to
//! `ALLOWED_ORIGINS` in production.
//!
//! # Environment Variables
//! - `ENVIRONMENT`: Set to "production" for production settings
//! - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
//! - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current environment.
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![Method::GET, Method::POST, Method::OPTIONS]
}

fn allowed_headers() -> Vec<header::HeaderName> {
    vec![
        header::ACCEPT,
        header::CONTENT_TYPE,
        header::ORIGIN,
        header::USER_AGENT,
    ]
}

/// Permissive configuration for local development.
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(allowed_headers())
        .max_age(max_age)
}

/// Restrictive configuration for production.
///
/// Only origins listed in `ALLOWED_ORIGINS` may call the API; an empty
/// list means no browser origin is accepted.
fn create_production_cors(max_age: usize) -> Cors {
    let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();
    log::info!("Configuring CORS for production: {}", allowed_origins);

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(allowed_headers())
        .max_age(max_age);

    for origin in allowed_origins.split(',') {
        let origin = origin.trim();
        if !origin.is_empty() {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
