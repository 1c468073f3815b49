#[macro_use]
extern crate rocket;

pub mod config;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;
pub mod telemetry;

use config::{Config, CorsOrigins};
use service::SharedBlogService;

fn cors(origins: &CorsOrigins) -> Result<rocket_cors::Cors, rocket_cors::Error> {
    let allowed = match origins {
        CorsOrigins::All => rocket_cors::AllowedOrigins::all(),
        CorsOrigins::Exact(list) => rocket_cors::AllowedOrigins::some_exact(list.as_slice()),
    };
    rocket_cors::CorsOptions::default()
        .allowed_origins(allowed)
        .to_cors()
}

/// Builds the blog API around `service`. Fails only on an unusable CORS
/// origin list.
pub fn create_rocket(service: SharedBlogService, config: &Config) -> Result<rocket::Rocket<rocket::Build>, rocket_cors::Error> {
    let cors = cors(&config.cors_origins)?;

    Ok(rocket::build()
        .manage(service)
        .attach(cors)
        .attach(telemetry::RequestLogger)
        .mount("/api/v1", routes![
            routes::health,
            routes::create_blog,
            routes::list_blogs,
            routes::get_blog,
            routes::update_blog,
            routes::delete_blog,
        ])
        .register("/", catchers![
            routes::bad_request,
            routes::unknown_route,
            routes::unprocessable,
            routes::internal_error,
        ]))
}
