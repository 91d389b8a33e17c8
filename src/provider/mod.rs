mod bike_index;

pub use bike_index::BikeIndexProvider;

use async_trait::async_trait;

use crate::models::{TheftCountResponse, TheftQuery, TheftSearchResponse};

/// Capability boundary to the upstream theft-record source.
///
/// Both operations signal upstream failure by returning `None`; an empty
/// record list or a zero count is a successful answer, not an absence.
/// Dropping the returned future cancels the in-flight upstream call.
#[async_trait]
pub trait TheftProvider: Send + Sync {
    /// Matching records for the filter, limited to the requested page.
    async fn search(&self, query: &TheftQuery) -> Option<TheftSearchResponse>;

    /// Number of records matching the filter.
    async fn count(&self, query: &TheftQuery) -> Option<TheftCountResponse>;
}
