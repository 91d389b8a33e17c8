pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod routes;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub const VERSION: &str = "0.1.0";
