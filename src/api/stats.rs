//! Stats API routes

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::api::AppState;

/// GET /stats: wardrobe totals and static table sizes
#[get("")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let available_colors: Vec<&str> =
        state.tables.named_colors().iter().map(|c| c.name).collect();

    HttpResponse::Ok().json(json!({
        "system_stats": {
            "total_users": state.wardrobe.user_count(),
            "total_items": state.wardrobe.item_count(),
            "color_distribution": state.wardrobe.color_distribution(),
            "available_colors": available_colors,
            "tables": state.tables.counts(),
        },
    }))
}

/// Configure stats routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_stats);
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::models::{Category, ClothingItem, Rgb};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn stats_report_table_sizes_and_items() {
        let state = api::test_state();
        state.wardrobe.add(ClothingItem::new(
            "Red Shirt",
            Category::Tops,
            "red",
            Rgb(255, 0, 0),
            "user1",
        ));

        let app = test::init_service(
            App::new().app_data(state.clone()).configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/stats").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let stats = &resp["system_stats"];
        assert_eq!(stats["total_users"], 1);
        assert_eq!(stats["total_items"], 1);
        assert_eq!(stats["color_distribution"]["red"], 1);
        assert_eq!(stats["tables"]["named_colors"], 30);
        assert_eq!(stats["tables"]["compatibility_rules"], 14);
    }
}
