//! Wardrobe API routes

use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::api::AppState;
use crate::models::Category;

#[derive(Debug, Deserialize)]
pub struct WardrobeQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// GET /wardrobe/{user_id}
///
/// Unknown users get an empty wardrobe, not an error.
#[get("/{user_id}")]
pub async fn get_wardrobe(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<WardrobeQuery>,
) -> impl Responder {
    let user_id = path.into_inner();

    if let Some(raw) = &query.category {
        let Some(category) = Category::from_str(raw) else {
            return HttpResponse::BadRequest()
                .json(json!({ "error": format!("Unknown category: '{}'", raw) }));
        };

        let items = state.wardrobe.items(&user_id, Some(category));
        return HttpResponse::Ok().json(json!({
            "user_id": user_id,
            "category": category,
            "items": items,
        }));
    }

    let wardrobe = state.wardrobe.wardrobe(&user_id);
    let total_items: usize = wardrobe.iter().map(|(_, items)| items.len()).sum();

    let mut by_category = Map::new();
    let mut per_category = Map::new();
    for (category, items) in &wardrobe {
        per_category.insert(category.as_str().to_string(), Value::from(items.len()));
        by_category.insert(category.as_str().to_string(), json!(items));
    }

    let categories: Vec<&str> = wardrobe.iter().map(|(c, _)| c.as_str()).collect();

    HttpResponse::Ok().json(json!({
        "user_id": user_id,
        "wardrobe": by_category,
        "stats": {
            "total_items": total_items,
            "categories": categories,
            "items_per_category": per_category,
        },
    }))
}

/// Configure wardrobe routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_wardrobe);
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::models::{Category, ClothingItem, Rgb};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn unknown_user_gets_empty_wardrobe() {
        let state = api::test_state();
        let app = test::init_service(
            App::new().app_data(state.clone()).configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/wardrobe/nobody").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["stats"]["total_items"], 0);
        assert!(resp["wardrobe"].as_object().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn category_filter_returns_matching_items() {
        let state = api::test_state();
        state.wardrobe.add(ClothingItem::new(
            "Red Shirt",
            Category::Tops,
            "red",
            Rgb(255, 0, 0),
            "user1",
        ));
        state.wardrobe.add(ClothingItem::new(
            "Blue Jeans",
            Category::Bottoms,
            "blue",
            Rgb(0, 0, 255),
            "user1",
        ));

        let app = test::init_service(
            App::new().app_data(state.clone()).configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/wardrobe/user1?category=tops")
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let items = resp["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Red Shirt");
    }

    #[actix_web::test]
    async fn invalid_category_filter_is_rejected() {
        let state = api::test_state();
        let app =
            test::init_service(App::new().app_data(state).configure(api::configure)).await;

        let req = test::TestRequest::get()
            .uri("/wardrobe/user1?category=belts")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
