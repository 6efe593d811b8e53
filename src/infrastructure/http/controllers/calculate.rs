use crate::{
    domain::entities::{BusinessTimeInput, BusinessTimeResult},
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

/// Raw query string of `/calculate`; values are validated by hand so that
/// malformed input is reported as `InvalidParameters`.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateQuery {
    pub days: Option<String>,
    pub hours: Option<String>,
    pub date: Option<String>,
}

impl CalculateQuery {
    pub fn into_input(self) -> ApiResult<BusinessTimeInput> {
        Ok(BusinessTimeInput {
            days: parse_count("days", self.days)?,
            hours: parse_count("hours", self.hours)?,
            date: self.date.filter(|d| !d.trim().is_empty()),
        })
    }
}

fn parse_count(name: &str, raw: Option<String>) -> ApiResult<Option<i64>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<i64>().map(Some).map_err(|_| {
            ApiError::InvalidParameters(format!(
                "Parameter '{}' must be an integer, got '{}'",
                name, value
            ))
        }),
    }
}

/// GET /calculate?days=&hours=&date= - Add business time to a date
pub async fn calculate(
    State(state): State<AppState>,
    query: Result<Query<CalculateQuery>, QueryRejection>,
) -> ApiResult<Json<BusinessTimeResult>> {
    let Query(query) =
        query.map_err(|rejection| ApiError::InvalidParameters(rejection.body_text()))?;
    let input = query.into_input()?;

    let result = state
        .business_time_service
        .add_business_time(input)
        .await?;

    Ok(Json(result))
}
