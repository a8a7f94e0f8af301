use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Server tag reported in every envelope header.
pub const SERVER_TAG: &str = "axum-shop-api";

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct EnvelopeHeader {
    #[serde(rename = "content-type")]
    pub content_type: String,
    pub server: String,
    pub date: DateTime<Utc>,
}

impl EnvelopeHeader {
    fn now() -> Self {
        Self {
            content_type: "application/json; charset=utf-8".to_string(),
            server: SERVER_TAG.to_string(),
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnvelopeBody<T> {
    /// Mirrors the HTTP status of the response.
    pub code: String,
    pub message: String,
    pub data: Option<T>,
}

/// Uniform wrapper applied to every response payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope<T> {
    pub header: EnvelopeHeader,
    pub body: EnvelopeBody<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_status(StatusCode::OK, message, Some(data))
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            header: EnvelopeHeader::now(),
            body: EnvelopeBody {
                code: status.as_u16().to_string(),
                message: message.into(),
                data,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_reports_200() {
        let envelope = Envelope::ok("Products", vec![1, 2, 3]);
        assert_eq!(envelope.body.code, "200");
        assert_eq!(envelope.body.message, "Products");
        assert_eq!(envelope.body.data, Some(vec![1, 2, 3]));
        assert_eq!(envelope.header.server, SERVER_TAG);
    }

    #[test]
    fn envelope_code_follows_status() {
        let envelope: Envelope<()> =
            Envelope::with_status(StatusCode::NOT_FOUND, "Not Found", None);
        assert_eq!(envelope.body.code, "404");
        assert!(envelope.body.data.is_none());
    }

    #[test]
    fn header_serializes_with_dashed_content_type_key() {
        let envelope = Envelope::ok("ok", serde_json::json!({}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value["header"]["content-type"].is_string());
        assert!(value["header"]["date"].is_string());
    }
}
