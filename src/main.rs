use std::sync::Arc;

use blog_api::config::Config;
use blog_api::service::SharedBlogService;
use blog_api::store::MemoryBlogService;
use blog_api::{create_rocket, telemetry};

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    telemetry::init_tracing(&config);

    let service: SharedBlogService = if config.seed_demo {
        Arc::new(MemoryBlogService::demo())
    } else {
        Arc::new(MemoryBlogService::new())
    };
    tracing::info!(seed_demo = config.seed_demo, cors = ?config.cors_origins, "starting blog api");

    let _rocket = create_rocket(service, &config)?.launch().await?;
    Ok(())
}
