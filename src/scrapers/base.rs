use crate::errors::Result;
use crate::models::observation::ObservationRecord;
use async_trait::async_trait;

/// Base trait for market data scrapers
#[async_trait]
pub trait MarketScraper {
    /// Get the source this scraper reads from
    fn source_name(&self) -> &'static str;

    /// Fetch one snapshot of the tracked market fields
    async fn fetch_snapshot(&self) -> Result<ObservationRecord>;

    /// Release the underlying browser session
    ///
    /// 整个进程生命周期内只应调用一次。
    async fn close(&self) -> Result<()>;
}
