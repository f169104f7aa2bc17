//! REST API routes for the outfit matcher

pub mod colors;
pub mod outfit;
pub mod stats;
pub mod upload;
pub mod wardrobe;

use std::sync::Arc;

use actix_web::web;

use crate::config::Settings;
use crate::stores::{ColorTables, WardrobeStore};

/// Shared application state, injected into handlers via `web::Data`
pub struct AppState {
    pub tables: ColorTables,
    pub wardrobe: Arc<dyn WardrobeStore>,
    pub settings: Settings,
}

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Upload + analyze
        .service(upload::upload_item)
        // Wardrobe routes
        .service(web::scope("/wardrobe").configure(wardrobe::configure))
        // Outfit routes
        .service(web::scope("/outfit").configure(outfit::configure))
        // Color table routes
        .service(web::scope("/colors").configure(colors::configure))
        // Stats routes
        .service(web::scope("/stats").configure(stats::configure));
}

#[cfg(test)]
pub(crate) fn test_state() -> web::Data<AppState> {
    use crate::stores::MemoryWardrobe;

    web::Data::new(AppState {
        tables: ColorTables::new(),
        wardrobe: Arc::new(MemoryWardrobe::new()),
        settings: Settings::default(),
    })
}
