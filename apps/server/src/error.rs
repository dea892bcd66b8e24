use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marketgate_market_data::MarketDataError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unprocessable(String),
    #[error("{0}")]
    RequestTimeout(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    GatewayTimeout(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Map a provider failure, using `not_found` as the message when the id
    /// does not exist upstream.
    pub fn from_market_data(err: MarketDataError, not_found: impl FnOnce() -> String) -> Self {
        match err {
            MarketDataError::NotFound(_) => ApiError::NotFound(not_found()),
            MarketDataError::Upstream { .. } => ApiError::BadGateway(err.to_string()),
            MarketDataError::Timeout { .. } => ApiError::GatewayTimeout(err.to_string()),
            MarketDataError::Parse { .. } => ApiError::Unprocessable(err.to_string()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<MarketDataError> for ApiError {
    fn from(err: MarketDataError) -> Self {
        let message = err.to_string();
        ApiError::from_market_data(err, || message)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: MarketDataError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn market_data_errors_map_to_statuses() {
        assert_eq!(status_of(MarketDataError::NotFound("X".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(MarketDataError::upstream("NPS_NAV", "request failed: 503")),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(MarketDataError::Timeout {
                provider: "METALS".into()
            }),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_of(MarketDataError::parse("MFAPI", "bad nav")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(MarketDataError::Cache("disk full".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_uses_route_message() {
        let err = ApiError::from_market_data(MarketDataError::NotFound("120503".into()), || {
            "NAV not found for scheme code 120503".to_string()
        });
        assert_eq!(err.to_string(), "NAV not found for scheme code 120503");
    }
}
