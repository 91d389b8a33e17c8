use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::utils::Coordinate;

/// Raw query-string parameters for the search endpoint. Either `city` or
/// `coordinate` ("lat,lng") selects the search area; empty strings count as
/// not supplied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheftSearchParams {
    pub city: Option<String>,
    pub coordinate: Option<String>,
    #[serde(default)]
    pub radius: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheftCountParams {
    pub city: Option<String>,
    pub coordinate: Option<String>,
    #[serde(default)]
    pub radius: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

/// Normalized filter handed to the provider. Exactly one of `city` or
/// `coordinate` is set; a radius of 0 means no distance constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct TheftQuery {
    pub city: Option<String>,
    pub coordinate: Option<Coordinate>,
    pub radius: u32,
    pub page_size: u32,
    pub page: u32,
}

/// One stolen-bike report as reported upstream. The service passes these
/// through untouched, so every field is defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TheftRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub stolen_location: Option<String>,
    #[serde(default)]
    pub date_stolen: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheftSearchResponse {
    pub bikes: Vec<TheftRecord>,
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TheftCountResponse {
    pub count: u64,
    pub message: String,
    pub status: u16,
}
