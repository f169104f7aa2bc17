//! Upload API route: analyze a clothing photo, store it, suggest pairings

use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use futures::StreamExt;
use serde_json::json;
use tracing::info;

use crate::api::AppState;
use crate::core::{extractor, matcher};
use crate::errors::MatchError;
use crate::models::{Category, ClothingItem};

/// POST /upload
///
/// Multipart fields: `file` (image bytes), `item_name`, `category`,
/// `user_id`. The item is stored only after extraction succeeds; a decode
/// failure leaves the wardrobe untouched.
#[post("/upload")]
pub async fn upload_item(state: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    let mut image_bytes: Option<Vec<u8>> = None;
    let mut item_name: Option<String> = None;
    let mut category_raw: Option<String> = None;
    let mut user_id: Option<String> = None;

    while let Some(Ok(mut field)) = payload.next().await {
        let disp = field.content_disposition().clone();
        let name = disp.get_name().map(|s| s.to_string()).unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(data) => bytes.extend_from_slice(&data),
                Err(_) => {
                    return HttpResponse::BadRequest()
                        .json(json!({ "error": "Malformed multipart payload" }))
                }
            }
        }

        match name.as_str() {
            "file" | "cloth_image" => image_bytes = Some(bytes),
            "item_name" => item_name = Some(String::from_utf8_lossy(&bytes).trim().to_string()),
            "category" => category_raw = Some(String::from_utf8_lossy(&bytes).trim().to_string()),
            "user_id" => user_id = Some(String::from_utf8_lossy(&bytes).trim().to_string()),
            _ => {}
        }
    }

    let Some(image_bytes) = image_bytes else {
        let err = MatchError::validation("No image file uploaded");
        return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    };

    let category_raw = category_raw.unwrap_or_default();
    let Some(category) = Category::from_str(&category_raw) else {
        let err = MatchError::validation(format!("Unknown category: '{}'", category_raw));
        return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    };

    let item_name = item_name
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Unnamed Item".to_string());
    let user_id = user_id
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "user1".to_string());

    let palette = match extractor::extract_palette(&image_bytes, &state.settings) {
        Ok(palette) => palette,
        Err(err @ MatchError::Decode(_)) => {
            return HttpResponse::UnprocessableEntity().json(json!({ "error": err.to_string() }))
        }
        Err(err) => return HttpResponse::BadRequest().json(json!({ "error": err.to_string() })),
    };

    let Some(dominant) = palette.first().copied() else {
        return HttpResponse::UnprocessableEntity()
            .json(json!({ "error": "Image produced no usable pixels" }));
    };
    let named = matcher::nearest_named(&state.tables, dominant);
    let temperature = matcher::temperature(dominant);

    let item = ClothingItem::new(item_name, category, named.name, dominant, user_id);

    // Matches are computed against the wardrobe as it stood before this
    // upload, then the item is stored
    let matches = matcher::wardrobe_matches(
        &state.tables,
        state.wardrobe.as_ref(),
        &item.owner,
        category,
        named.name,
    );
    state.wardrobe.add(item.clone());

    let suggestions = matcher::build_suggestions(&state.tables, named.name, category);

    info!(
        "Stored '{}' ({} {}) for {}",
        item.name,
        item.color,
        item.category.as_str(),
        item.owner
    );

    HttpResponse::Ok().json(json!({
        "item": item,
        "dominant": {
            "rgb": dominant,
            "hex": dominant.to_hex(),
            "name": named.name,
            "temperature": temperature,
            "text_color": dominant.text_color().to_hex(),
        },
        "palette": palette,
        "suggestions": suggestions,
        "wardrobe_matches": matches,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use actix_web::{test, App};
    use image::{ImageOutputFormat, RgbImage};
    use std::io::Cursor;

    const BOUNDARY: &str = "----test-boundary";

    fn png_bytes(rgb: [u8; 3]) -> Vec<u8> {
        let img = RgbImage::from_pixel(32, 32, image::Rgb(rgb));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
            .unwrap();
        buf
    }

    fn multipart_body(file: &[u8], category: &str, item_name: &str, user_id: &str) -> Vec<u8> {
        let mut body = Vec::new();

        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"item.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(file);
        body.extend_from_slice(b"\r\n");

        for (name, value) in [
            ("category", category),
            ("item_name", item_name),
            ("user_id", user_id),
        ] {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }

        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn content_type() -> (&'static str, String) {
        ("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
    }

    #[actix_web::test]
    async fn upload_solid_blue_stores_item_and_suggests() {
        let state = api::test_state();
        let app = test::init_service(
            App::new().app_data(state.clone()).configure(api::configure),
        )
        .await;

        let body = multipart_body(&png_bytes([0, 0, 255]), "tops", "Blue Polo", "user1");
        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header(content_type())
            .set_payload(body)
            .to_request();

        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["dominant"]["name"], "blue");
        assert_eq!(resp["dominant"]["rgb"], serde_json::json!([0, 0, 255]));
        assert_eq!(resp["dominant"]["hex"], "#0000ff");
        assert_eq!(resp["item"]["category"], "tops");
        assert!(resp["suggestions"].as_array().unwrap().len() > 0);
        assert_eq!(state.wardrobe.item_count(), 1);
    }

    #[actix_web::test]
    async fn corrupt_upload_leaves_wardrobe_unchanged() {
        let state = api::test_state();
        let app = test::init_service(
            App::new().app_data(state.clone()).configure(api::configure),
        )
        .await;

        let body = multipart_body(b"not an image at all", "tops", "Broken", "user1");
        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header(content_type())
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);
        assert_eq!(state.wardrobe.item_count(), 0);
    }

    #[actix_web::test]
    async fn unknown_category_is_rejected() {
        let state = api::test_state();
        let app = test::init_service(
            App::new().app_data(state.clone()).configure(api::configure),
        )
        .await;

        let body = multipart_body(&png_bytes([255, 0, 0]), "hats", "Red Hat", "user1");
        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header(content_type())
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert_eq!(state.wardrobe.item_count(), 0);
    }

    #[actix_web::test]
    async fn second_upload_reports_wardrobe_matches() {
        let state = api::test_state();
        let app = test::init_service(
            App::new().app_data(state.clone()).configure(api::configure),
        )
        .await;

        // Black jeans first, then a red top; black pairs with red
        let body = multipart_body(&png_bytes([0, 0, 0]), "bottoms", "Black Jeans", "user1");
        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header(content_type())
            .set_payload(body)
            .to_request();
        test::call_service(&app, req).await;

        let body = multipart_body(&png_bytes([255, 0, 0]), "tops", "Red Shirt", "user1");
        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header(content_type())
            .set_payload(body)
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let matches = resp["wardrobe_matches"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["name"], "Black Jeans");
    }
}
