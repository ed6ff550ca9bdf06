use crate::domain::model::Search;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Read-only view of the query options, whatever their source.
pub trait ConfigProvider: Send + Sync {
    fn service(&self) -> &str;
    fn min_magnitude(&self) -> f64;
    fn max_magnitude(&self) -> f64;
    fn since(&self) -> Duration;
    fn ago(&self) -> Duration;
    fn event_type(&self) -> &str;
    fn evaluation_status(&self) -> &str;
    fn evaluation_mode(&self) -> &str;
    fn limit(&self) -> usize;
}

#[async_trait]
pub trait EventSource: Send + Sync {
    async fn search(&self, url: &Url) -> Result<Search>;
}
