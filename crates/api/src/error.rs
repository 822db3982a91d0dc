use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use solar_core::domain::location::InvalidCoordinate;

#[derive(Debug)]
pub enum ApiError {
    InvalidCoordinate(InvalidCoordinate),
    Unexpected(anyhow::Error),
}

impl From<InvalidCoordinate> for ApiError {
    fn from(err: InvalidCoordinate) -> Self {
        Self::InvalidCoordinate(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unexpected(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCoordinate(err) => {
                tracing::info!(field = err.field.as_str(), value = err.value, "rejected coordinate");
                (StatusCode::BAD_REQUEST, Json(json!({ "detail": err.to_string() }))).into_response()
            }
            Self::Unexpected(err) => {
                sentry_anyhow::capture_anyhow(&err);
                tracing::error!(error = %format!("{err:#}"), "solar analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": format!("Solar analysis failed: {err}") })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use solar_core::domain::location::LocationQuery;

    async fn body_json(res: Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_coordinate_maps_to_400() {
        let err = LocationQuery::new(91.0, 0.0, false).unwrap_err();
        let res = ApiError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert_eq!(
            body["detail"],
            "Invalid latitude. Must be between -90 and 90 (got 91)."
        );
    }

    #[tokio::test]
    async fn anything_else_maps_to_500_with_detail() {
        let res = ApiError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert_eq!(body["detail"], "Solar analysis failed: boom");
        assert_eq!(body.as_object().unwrap().len(), 1);
    }
}
