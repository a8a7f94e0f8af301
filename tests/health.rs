use axum_shop_api::routes::health::root;

#[tokio::test]
async fn liveness_reports_healthy() {
    let response = root().await;
    assert_eq!(response.0.body.code, "200");
    assert_eq!(response.0.body.message, "Shop API is up and running");

    let data = response.0.body.data.expect("health data");
    assert_eq!(data.status, "healthy");
}
