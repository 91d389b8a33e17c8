#![cfg(test)]

use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;

use crate::app::create_app;
use crate::config::Config;
use crate::models::{TheftCountResponse, TheftQuery, TheftRecord, TheftSearchResponse};
use crate::provider::TheftProvider;

/// Provider double returning canned answers; `None` simulates an upstream
/// failure.
pub struct StubProvider {
    pub search_response: Option<TheftSearchResponse>,
    pub count_response: Option<TheftCountResponse>,
}

#[async_trait]
impl TheftProvider for StubProvider {
    async fn search(&self, _query: &TheftQuery) -> Option<TheftSearchResponse> {
        self.search_response.clone()
    }

    async fn count(&self, _query: &TheftQuery) -> Option<TheftCountResponse> {
        self.count_response.clone()
    }
}

/// Test fixture: a small page of stolen-bike reports.
pub fn fake_thefts() -> TheftSearchResponse {
    let bikes = vec![
        TheftRecord {
            id: 101,
            title: "2019 Cube Touring Hybrid".to_string(),
            serial: Some("WBL127".to_string()),
            status: Some("stolen".to_string()),
            stolen_location: Some("Amsterdam, NL".to_string()),
            date_stolen: Some(1_672_531_200),
        },
        TheftRecord {
            id: 102,
            title: "Gazelle Orange C7".to_string(),
            serial: None,
            status: Some("stolen".to_string()),
            stolen_location: Some("Amsterdam, NL".to_string()),
            date_stolen: Some(1_675_209_600),
        },
        TheftRecord {
            id: 103,
            title: "VanMoof S3".to_string(),
            serial: Some("SVM-2281".to_string()),
            status: Some("stolen".to_string()),
            stolen_location: Some("Amstelveen, NL".to_string()),
            date_stolen: None,
        },
    ];

    TheftSearchResponse {
        bikes,
        message: String::new(),
        status: 200,
    }
}

/// Create a test app wired to a stubbed provider.
pub fn create_test_app(provider: StubProvider) -> Router {
    create_app(Arc::new(Config::default()), Arc::new(provider))
}
