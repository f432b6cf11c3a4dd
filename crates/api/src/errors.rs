use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nsgate_domain::DomainError;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Query-path failures surface as 403, distinguishable from an
        // authorization denial only by the body.
        let (status, message) = match &self.0 {
            DomainError::InvalidDomainName(_)
            | DomainError::InvalidResolverAddress(_)
            | DomainError::InvalidDnsResponse(_)
            | DomainError::QueryTimeout
            | DomainError::Transport { .. } => (StatusCode::FORBIDDEN, "dns lookup failed"),
        };

        (status, message).into_response()
    }
}
