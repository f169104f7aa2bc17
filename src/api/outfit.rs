//! Outfit suggestion API routes

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::api::AppState;
use crate::core::outfit::suggest_outfit;

/// GET /outfit/{user_id}
#[get("/{user_id}")]
pub async fn get_outfit(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();
    let outfit = suggest_outfit(&state.tables, state.wardrobe.as_ref(), &user_id);

    HttpResponse::Ok().json(json!({
        "user_id": user_id,
        "outfit": outfit,
    }))
}

/// Configure outfit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_outfit);
}
