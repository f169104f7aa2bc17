//! Outfit Color Matcher - clothing color coordination service
//!
//! Accepts clothing photos, extracts their dominant color with k-means
//! clustering, and suggests matching pieces from static color theory
//! tables and the user's own wardrobe.

mod api;
mod config;
mod core;
mod errors;
mod models;
mod stores;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::api::AppState;
use crate::config::Settings;
use crate::stores::{ColorTables, MemoryWardrobe, WardrobeStore};

/// Outfit Color Matcher - clothing color coordination service
#[derive(Parser, Debug)]
#[command(name = "outfit-matcher")]
#[command(version = "1.0.0")]
#[command(about = "Extracts dominant clothing colors and suggests matching outfits")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(log_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Outfit Color Matcher starting...");

    let settings = Settings::from_env();
    info!(
        "Extraction settings: {} clusters, {} runs, {}px thumbnails",
        settings.clusters, settings.kmeans_runs, settings.thumbnail
    );

    let tables = ColorTables::new();
    let counts = tables.counts();
    info!("Color tables initialized:");
    info!("  - Named colors: {}", counts.named_colors);
    info!("  - Compatibility rules: {}", counts.compatibility_rules);
    info!("  - Category rules: {}", counts.category_rules);
    info!("  - Harmony rules: {}", counts.harmony_rules);
    info!("  - Seasonal palettes: {}", counts.seasons);
    info!("  - Style palettes: {}", counts.styles);

    let wardrobe: Arc<dyn WardrobeStore> = Arc::new(MemoryWardrobe::new());
    let state = web::Data::new(AppState {
        tables,
        wardrobe,
        settings,
    });

    let addr = format!("{}:{}", args.host, args.port);
    info!("Server listening on http://{}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
