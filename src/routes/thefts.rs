use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::app::AppState;
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::error::{AppError, AppResult};
use crate::models::{TheftCountParams, TheftQuery, TheftSearchParams};
use crate::utils::parse_coordinate;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/thefts", get(search_thefts))
        .route("/thefts/count", get(count_thefts))
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Turn raw parameters into a normalized filter. Missing both selectors is
/// rejected; when both are supplied the city wins.
fn build_query(
    city: Option<String>,
    coordinate: Option<String>,
    radius: u32,
    page_size: u32,
    page: u32,
) -> AppResult<TheftQuery> {
    if page_size == 0 {
        return Err(AppError::Validation(
            "pageSize must be greater than zero".to_string(),
        ));
    }
    if page == 0 {
        return Err(AppError::Validation("page must be at least 1".to_string()));
    }

    if let Some(city) = normalize(city) {
        return Ok(TheftQuery {
            city: Some(city),
            coordinate: None,
            radius,
            page_size,
            page,
        });
    }

    let Some(text) = normalize(coordinate) else {
        return Err(AppError::Validation(
            "Either city or coordinate must be supplied".to_string(),
        ));
    };

    let coordinate = parse_coordinate(&text).map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(TheftQuery {
        city: None,
        coordinate: Some(coordinate),
        radius,
        page_size,
        page,
    })
}

async fn search_thefts(
    State(state): State<AppState>,
    Query(params): Query<TheftSearchParams>,
) -> AppResult<Response> {
    let query = build_query(
        params.city,
        params.coordinate,
        params.radius,
        params.page_size,
        params.page,
    )?;

    // An absent result means the upstream could not answer, distinct from an
    // empty page. Contract: bare 400, no body.
    match state.provider.search(&query).await {
        Some(found) => Ok(Json(found).into_response()),
        None => Ok(StatusCode::BAD_REQUEST.into_response()),
    }
}

async fn count_thefts(
    State(state): State<AppState>,
    Query(params): Query<TheftCountParams>,
) -> AppResult<Response> {
    let query = build_query(
        params.city,
        params.coordinate,
        params.radius,
        DEFAULT_PAGE_SIZE,
        DEFAULT_PAGE,
    )?;

    match state.provider.count(&query).await {
        Some(found) => Ok(Json(found).into_response()),
        None => Ok(StatusCode::BAD_REQUEST.into_response()),
    }
}
