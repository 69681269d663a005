use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::AUTHORIZATION},
};
use carverse::{AppState, config::Settings, routes, store::Inventory};
use serde_json::{Value, json};
use tower::ServiceExt; // for oneshot

fn app() -> Router {
    let state = AppState::new(Settings::default(), Inventory::seeded().unwrap());
    routes::create_router(state)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn login(app: &Router) -> String {
    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from(json!({"email": "asha@example.com", "password": "pw"}).to_string()))
        .unwrap();
    let (status, body) = send_json(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "asha");
    body["token"].as_str().unwrap().to_string()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn ids(body: &Value, key: &str) -> Vec<String> {
    body[key]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn listings_require_a_session() {
    let app = app();
    let req = Request::builder().uri("/api/listings/buy").body(Body::empty()).unwrap();
    let (status, body) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, get("/api/listings/buy", "bogus")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn blank_login_is_rejected() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from(json!({"email": "asha@example.com"}).to_string()))
        .unwrap();
    let (status, body) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please enter both email and password");
}

#[tokio::test]
async fn unfiltered_buy_returns_whole_inventory_in_order() {
    let app = app();
    let token = login(&app).await;
    let (status, body) = send_json(&app, get("/api/listings/buy", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 9);
    assert_eq!(body["priceDivisor"], 1);
    assert_eq!(ids(&body, "listings"), vec!["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    assert_eq!(body["listings"][0]["priceLabel"], "₹85.0 L");
    assert_eq!(body["listings"][0]["type"], "Coupe");
}

#[tokio::test]
async fn buy_filters_combine() {
    let app = app();
    let token = login(&app).await;
    let uri = "/api/listings/buy?priceMin=0&priceMax=7000000&fuelType=electric";
    let (status, body) = send_json(&app, get(uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body, "listings"), vec!["3"]);

    let (_, body) = send_json(&app, get("/api/listings/buy?q=SUV&transmission=Automatic", &token)).await;
    assert_eq!(ids(&body, "listings"), vec!["2", "4", "7", "9"]);
}

#[tokio::test]
async fn rent_divides_purchase_bounds() {
    let app = app();
    let token = login(&app).await;
    // 0..=2.1 lakh in purchase units is 0..=7_000 per day
    let (status, body) = send_json(&app, get("/api/listings/rent?priceMax=210000", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["priceDivisor"], 30);
    assert_eq!(ids(&body, "listings"), vec!["r1", "r3", "r4", "r7"]);

    // Explicit divisor of 1 compares the bounds as daily rates
    let (_, body) = send_json(&app, get("/api/listings/rent?priceMax=7000&priceDivisor=1", &token)).await;
    assert_eq!(ids(&body, "listings"), vec!["r1", "r3", "r4", "r7"]);
}

#[tokio::test]
async fn bad_query_values_are_rejected() {
    let app = app();
    let token = login(&app).await;
    let (status, _) = send(&app, get("/api/listings/buy?fuelType=steam", &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, get("/api/listings/rent?priceDivisor=0", &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, get("/api/listings/lease", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listings_echo_the_applied_criteria() {
    let app = app();
    let token = login(&app).await;
    let uri = "/api/listings/buy?priceMax=7000000&fuelType=electric&q=tes";
    let (status, body) = send_json(&app, get(uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["criteria"]["priceMin"], 0);
    assert_eq!(body["criteria"]["priceMax"], 7_000_000);
    assert_eq!(body["criteria"]["fuelType"], json!({"only": "Electric"}));
    assert_eq!(body["criteria"]["transmission"], "any");
    assert_eq!(body["criteria"]["searchQuery"], "tes");
}

#[tokio::test]
async fn malformed_query_gets_json_error() {
    let app = app();
    let token = login(&app).await;
    let (status, body) = send_json(&app, get("/api/listings/buy?priceMin=abc", &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("query string"));

    let (status, body) = send_json(&app, get("/api/export/buy?priceMax=-1", &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let token = login(&app).await;
    let req = Request::builder()
        .method("POST")
        .uri("/api/rentals/r2/quote")
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(json!({"pickupDate": "June 1st"}).to_string()))
        .unwrap();
    let (status, body) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn inverted_range_is_empty_not_an_error() {
    let app = app();
    let token = login(&app).await;
    let (status, body) = send_json(&app, get("/api/listings/buy?priceMin=9000000&priceMax=100", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn single_listing_lookup() {
    let app = app();
    let token = login(&app).await;
    let (status, body) = send_json(&app, get("/api/listings/rent/r5", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "Model Y");
    assert_eq!(body["priceType"], "day");
    assert_eq!(body["priceLabel"], "₹9,000/day");

    let (status, _) = send(&app, get("/api/listings/buy/r5", &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_greets_and_limits() {
    let app = app();
    let token = login(&app).await;
    let (status, body) = send_json(&app, get("/api/dashboard", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "asha");
    assert_eq!(ids(&body, "recentListings"), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(ids(&body, "rentalHighlights"), vec!["r1", "r2"]);

    let (_, body) = send_json(&app, get("/api/dashboard?fuelType=hybrid", &token)).await;
    assert_eq!(ids(&body, "recentListings"), vec!["4"]);
}

#[tokio::test]
async fn export_writes_csv() {
    let app = app();
    let token = login(&app).await;
    let resp = app
        .clone()
        .oneshot(get("/api/export/buy?bodyType=coupe", &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(text.lines().count(), 4); // header + three coupes
    assert!(text.lines().nth(1).unwrap().starts_with("1,Porsche,718 Cayman S,Coupe"));
}

#[tokio::test]
async fn rental_quote_flow() {
    let app = app();
    let token = login(&app).await;
    let req = Request::builder()
        .method("POST")
        .uri("/api/rentals/r2/quote")
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(json!({"pickupDate": "2025-06-01", "returnDate": "2025-06-05"}).to_string()))
        .unwrap();
    let (status, body) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 4);
    assert_eq!(body["total"], 32_000);

    let req = Request::builder()
        .method("POST")
        .uri("/api/rentals/r2/quote")
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(json!({"pickupDate": "2025-06-05", "returnDate": "2025-06-01"}).to_string()))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_ends_session() {
    let app = app();
    let token = login(&app).await;
    let req = Request::builder()
        .method("POST")
        .uri("/logout")
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send_json(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, get("/api/dashboard", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
