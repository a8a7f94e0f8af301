use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::Envelope;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness", body = Envelope<HealthData>),
    ),
    tag = "Health"
)]
pub async fn root() -> Json<Envelope<HealthData>> {
    let data = HealthData {
        status: "healthy".to_string(),
    };

    Json(Envelope::ok("Shop API is up and running", data))
}
