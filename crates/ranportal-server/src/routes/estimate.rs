//! Estimate preview endpoint
//!
//! Runs the built-in estimator only. Nothing is stored and metrics are
//! left untouched.

use axum::{Json, extract::rejection::JsonRejection};
use ranportal_estimate::EstimateBreakdown;
use ranportal_types::ConfigurationRequest;

use crate::error::ApiError;

/// Preview the estimate for a configuration
pub async fn preview_estimate(
    body: Result<Json<ConfigurationRequest>, JsonRejection>,
) -> Result<Json<EstimateBreakdown>, ApiError> {
    let Json(request) = body?;
    let params = request.validate()?;
    Ok(Json(ranportal_estimate::explain(&params)))
}
