use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use crate::config::UpstreamConfig;
use crate::models::{TheftCountResponse, TheftQuery, TheftRecord, TheftSearchResponse};
use crate::provider::TheftProvider;

/// Client for a BikeIndex-style search API (`/search`, `/search/count`).
/// Every transport or decode failure collapses to an absent result.
pub struct BikeIndexProvider {
    client: reqwest::Client,
    base_url: String,
}

impl BikeIndexProvider {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn filter_params(query: &TheftQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(location) = location(query) {
            params.push(("location", location));
            params.push(("stolenness", "proximity".to_string()));
        }

        if query.radius > 0 {
            params.push(("distance", query.radius.to_string()));
        }

        params
    }
}

fn location(query: &TheftQuery) -> Option<String> {
    query.city.clone().or_else(|| {
        query
            .coordinate
            .map(|c| format!("{},{}", c.latitude, c.longitude))
    })
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    bikes: Vec<UpstreamBike>,
}

#[derive(Debug, Deserialize)]
struct UpstreamBike {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    title: String,
    serial: Option<String>,
    status: Option<String>,
    stolen_location: Option<String>,
    date_stolen: Option<i64>,
}

impl From<UpstreamBike> for TheftRecord {
    fn from(bike: UpstreamBike) -> Self {
        Self {
            id: bike.id,
            title: bike.title,
            serial: bike.serial,
            status: bike.status,
            stolen_location: bike.stolen_location,
            date_stolen: bike.date_stolen,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CountBody {
    #[serde(default)]
    proximity: u64,
}

#[async_trait]
impl TheftProvider for BikeIndexProvider {
    async fn search(&self, query: &TheftQuery) -> Option<TheftSearchResponse> {
        let url = format!("{}/search", self.base_url);
        let mut params = Self::filter_params(query);
        params.push(("page", query.page.to_string()));
        params.push(("per_page", query.page_size.to_string()));

        let response = match self.client.get(&url).query(&params).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Upstream search request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Upstream search returned {}", response.status());
            return None;
        }

        let body: SearchBody = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                warn!("Upstream search body unreadable: {}", e);
                return None;
            }
        };

        Some(TheftSearchResponse {
            bikes: body.bikes.into_iter().map(Into::into).collect(),
            message: String::new(),
            status: 200,
        })
    }

    async fn count(&self, query: &TheftQuery) -> Option<TheftCountResponse> {
        let url = format!("{}/search/count", self.base_url);
        let params = Self::filter_params(query);

        let response = match self.client.get(&url).query(&params).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Upstream count request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Upstream count returned {}", response.status());
            return None;
        }

        let body: CountBody = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                warn!("Upstream count body unreadable: {}", e);
                return None;
            }
        };

        Some(TheftCountResponse {
            count: body.proximity,
            message: String::new(),
            status: 200,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Coordinate;

    fn city_query(city: &str, radius: u32) -> TheftQuery {
        TheftQuery {
            city: Some(city.to_string()),
            coordinate: None,
            radius,
            page_size: 20,
            page: 1,
        }
    }

    #[test]
    fn city_becomes_location_param() {
        let params = BikeIndexProvider::filter_params(&city_query("Amsterdam", 20));
        assert!(params.contains(&("location", "Amsterdam".to_string())));
        assert!(params.contains(&("stolenness", "proximity".to_string())));
        assert!(params.contains(&("distance", "20".to_string())));
    }

    #[test]
    fn zero_radius_omits_distance() {
        let params = BikeIndexProvider::filter_params(&city_query("Amsterdam", 0));
        assert!(!params.iter().any(|(k, _)| *k == "distance"));
    }

    #[test]
    fn coordinate_formats_as_lat_lng() {
        let query = TheftQuery {
            city: None,
            coordinate: Some(Coordinate {
                latitude: 50.23,
                longitude: 13.405,
            }),
            radius: 20,
            page_size: 20,
            page: 1,
        };
        assert_eq!(location(&query), Some("50.23,13.405".to_string()));
    }

    #[test]
    fn upstream_bike_maps_to_record() {
        let bike: UpstreamBike = serde_json::from_value(serde_json::json!({
            "id": 42,
            "title": "2019 Cube Touring",
            "serial": "WBL127",
            "status": "stolen",
            "stolen_location": "Amsterdam, NL",
            "date_stolen": 1672531200
        }))
        .expect("Should deserialize");

        let record = TheftRecord::from(bike);
        assert_eq!(record.id, 42);
        assert_eq!(record.stolen_location.as_deref(), Some("Amsterdam, NL"));
    }

    #[test]
    fn missing_upstream_fields_default() {
        let body: SearchBody =
            serde_json::from_value(serde_json::json!({ "bikes": [{}] })).expect("Should deserialize");
        assert_eq!(body.bikes.len(), 1);
        assert_eq!(body.bikes[0].id, 0);
        assert!(body.bikes[0].serial.is_none());
    }
}
