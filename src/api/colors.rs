//! Color table API routes

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::{json, Map, Value};

use crate::api::AppState;
use crate::core::matcher;
use crate::models::{HarmonyKind, Rgb, Season, Style};

/// GET /colors: all static rule tables
#[get("")]
pub async fn get_color_rules(state: web::Data<AppState>) -> impl Responder {
    let tables = &state.tables;

    let mut named = Map::new();
    for color in tables.named_colors() {
        named.insert(color.name.to_string(), json!(color.rgb));
    }

    let mut compatibility = Map::new();
    for (name, colors) in tables.compatibility_rules() {
        compatibility.insert(name.to_string(), json!(colors));
    }

    let mut categories = Map::new();
    for (category, partners) in tables.category_rules() {
        categories.insert(category.as_str().to_string(), json!(partners));
    }

    let mut harmony = Map::new();
    for kind in HarmonyKind::ALL {
        let mut entries = Map::new();
        for base in tables.harmony_bases(kind) {
            entries.insert(base.to_string(), json!(tables.harmony_colors(kind, base)));
        }
        harmony.insert(kind.as_str().to_string(), Value::Object(entries));
    }

    let mut seasonal = Map::new();
    for season in Season::ALL {
        seasonal.insert(season.as_str().to_string(), json!(tables.seasonal_palette(season)));
    }

    let mut styles = Map::new();
    for style in Style::ALL {
        styles.insert(style.as_str().to_string(), json!(tables.style_colors(style)));
    }

    HttpResponse::Ok().json(json!({
        "named_colors": named,
        "compatibility": compatibility,
        "categories": categories,
        "harmony": harmony,
        "seasonal": seasonal,
        "styles": styles,
        "counts": tables.counts(),
    }))
}

/// GET /colors/match/{hex}: nearest named color for a hex RGB value
#[get("/match/{hex}")]
pub async fn match_color(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let raw = path.into_inner();
    let Some(rgb) = Rgb::from_hex(&raw) else {
        return HttpResponse::BadRequest()
            .json(json!({ "error": format!("Invalid hex color: '{}'", raw) }));
    };

    let named = matcher::nearest_named(&state.tables, rgb);

    HttpResponse::Ok().json(json!({
        "rgb": rgb,
        "hex": rgb.to_hex(),
        "name": named.name,
        "reference_rgb": state.tables.rgb_of(named.name),
        "temperature": matcher::temperature(rgb),
        "compatible": state.tables.compatible_colors(named.name),
    }))
}

/// GET /colors/season/{season}
#[get("/season/{season}")]
pub async fn get_seasonal_palette(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let raw = path.into_inner();
    let Some(season) = Season::from_str(&raw) else {
        return HttpResponse::BadRequest()
            .json(json!({ "error": format!("Unknown season: '{}'", raw) }));
    };

    HttpResponse::Ok().json(json!({
        "season": season,
        "palette": state.tables.seasonal_palette(season),
    }))
}

/// GET /colors/style/{style}
#[get("/style/{style}")]
pub async fn get_style_colors(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let raw = path.into_inner();
    let Some(style) = Style::from_str(&raw) else {
        return HttpResponse::BadRequest()
            .json(json!({ "error": format!("Unknown style: '{}'", raw) }));
    };

    HttpResponse::Ok().json(json!({
        "style": style,
        "colors": state.tables.style_colors(style),
    }))
}

/// Configure color routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_color_rules)
        .service(match_color)
        .service(get_seasonal_palette)
        .service(get_style_colors);
}

#[cfg(test)]
mod tests {
    use crate::api;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn match_endpoint_finds_nearest_named_color() {
        let state = api::test_state();
        let app =
            test::init_service(App::new().app_data(state).configure(api::configure)).await;

        let req = test::TestRequest::get().uri("/colors/match/0000fe").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["name"], "blue");
        assert_eq!(resp["temperature"], "cool");
        assert_eq!(resp["reference_rgb"], serde_json::json!([0, 0, 255]));
    }

    #[actix_web::test]
    async fn invalid_hex_is_rejected() {
        let state = api::test_state();
        let app =
            test::init_service(App::new().app_data(state).configure(api::configure)).await;

        let req = test::TestRequest::get().uri("/colors/match/xyz").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn seasonal_palette_lookup() {
        let state = api::test_state();
        let app =
            test::init_service(App::new().app_data(state).configure(api::configure)).await;

        let req = test::TestRequest::get().uri("/colors/season/winter").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            resp["palette"],
            serde_json::json!(["black", "white", "navy", "red", "royal_blue", "silver"])
        );
    }
}
