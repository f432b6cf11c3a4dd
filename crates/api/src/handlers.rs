use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use nsgate_application::use_cases::HostVerdict;
use tracing::{debug, info, instrument, warn};

use crate::dto::CheckHostQuery;
use crate::errors::ApiError;
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn health_check() -> &'static str {
    debug!("Health check requested");
    "OK"
}

#[instrument(skip(state), name = "api_check_host")]
pub async fn check_host(
    State(state): State<AppState>,
    Query(params): Query<CheckHostQuery>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Some(domain) = params.domain.filter(|d| !d.is_empty()) else {
        debug!("Rejecting request without a domain parameter");
        return Ok((StatusCode::BAD_REQUEST, "missing domain"));
    };

    match state.check_host.execute(&domain).await {
        Ok(HostVerdict::Authorized { nameserver }) => {
            info!(domain = %domain, nameserver = %nameserver, "Delegation authorized");
            Ok((StatusCode::OK, "ok"))
        }
        Ok(HostVerdict::Denied) => {
            info!(domain = %domain, "Delegation denied");
            Ok((StatusCode::FORBIDDEN, "forbidden"))
        }
        Err(e) => {
            warn!(domain = %domain, error = %e, "NS lookup failed");
            Err(ApiError(e))
        }
    }
}
