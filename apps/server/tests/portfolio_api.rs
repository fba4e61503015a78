use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use folio_server::{api::app_router, config::Config, state_from_snapshot};
use folio_storage_json::{parse_snapshot, sample_snapshot};
use tower::ServiceExt;

fn sample_router() -> axum::Router {
    let config = Config::default();
    let state = state_from_snapshot(&sample_snapshot().unwrap()).unwrap();
    app_router(state, &config)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn chart_splits_value_by_type() {
    let (status, body) = get(sample_router(), "/portfolio-chart?user_id=user_2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"total_value":2000.00,"chart":{"bonds":50.00,"stock":50.00}}"#
    );
}

#[tokio::test]
async fn chart_for_user_without_wallets_is_empty() {
    let (status, body) = get(sample_router(), "/portfolio-chart?user_id=user_4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"total_value":0.00,"chart":{}}"#);
}

#[tokio::test]
async fn chart_skips_unrecognized_and_unknown_assets() {
    let (status, body) = get(sample_router(), "/portfolio-chart?user_id=user_3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"total_value":2000.25,"chart":{"bonds":40.00,"stock":60.00}}"#
    );
}

#[tokio::test]
async fn holdings_are_sorted_by_value() {
    let (status, body) = get(sample_router(), "/portfolio-holdings?user_id=user_3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        concat!(
            r#"[{"ticker":"GOOGL","name":"Alphabet","type":"stock","value":1200.25,"percentage":60.00},"#,
            r#"{"ticker":"BOND2","name":"Corporate Bond Fund","type":"bonds","value":800.00,"percentage":40.00}]"#
        )
    );
}

#[tokio::test]
async fn holdings_filter_recomputes_percentages() {
    let (status, body) = get(
        sample_router(),
        "/portfolio-holdings?user_id=user_2&asset_type=bonds",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"[{"ticker":"BOND1","name":"US Treasury 10Y","type":"bonds","value":1000.00,"percentage":100.00}]"#
    );
}

#[tokio::test]
async fn holdings_filter_without_matches_returns_empty_list() {
    let (status, body) = get(
        sample_router(),
        "/portfolio-holdings?user_id=user_2&asset_type=crypto",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn missing_user_id_is_a_bad_request() {
    let (status, body) = get(sample_router(), "/portfolio-chart").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["code"], 400);
    assert!(json["message"].as_str().unwrap().contains("user_id"));

    let (status, _) = get(sample_router(), "/portfolio-holdings?asset_type=stock").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_user_id_is_a_bad_request() {
    let (status, _) = get(sample_router(), "/portfolio-chart?user_id=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let (status, body) = get(sample_router(), "/portfolio-holdings?user_id=nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["code"], 404);
}

#[tokio::test]
async fn asset_types_are_listed_in_order() {
    let (status, body) = get(sample_router(), "/asset-types").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"["bonds","crypto","defi","nft","real_estate","stock"]"#
    );
}

#[tokio::test]
async fn health_probes_respond() {
    let (status, body) = get(sample_router(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = get(sample_router(), "/readyz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let response = sample_router()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn custom_snapshot_is_served() {
    let snapshot = parse_snapshot(
        r#"{
            "assets": { "X": { "ticker": "X", "name": "Xcorp", "type": "stock" } },
            "users": { "u": { "w": { "X": "0.005" } } }
        }"#,
    )
    .unwrap();
    let state = state_from_snapshot(&snapshot).unwrap();
    let app = app_router(state, &Config::default());

    let (status, body) = get(app, "/portfolio-chart?user_id=u").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"total_value":0.00,"chart":{"stock":100.00}}"#);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let response = sample_router()
        .oneshot(
            Request::builder()
                .uri("/portfolio-chart?user_id=user_2")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
