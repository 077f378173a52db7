use log::{error, info, warn};
use std::sync::Arc;

use crate::config::Config;
use crate::data_store::ObservationStore;
use crate::errors::Result;
use crate::scrapers::base::MarketScraper;

/// 数据服务，处理行情的抓取和存储
pub struct DataService {
    scraper: Arc<dyn MarketScraper + Send + Sync>,
    store: ObservationStore,
}

impl DataService {
    /// 创建新的数据服务实例
    pub fn new(config: &Config, scraper: Arc<dyn MarketScraper + Send + Sync>) -> Self {
        let store = match &config.output_path {
            Some(path) => ObservationStore::new(path.clone()),
            None => ObservationStore::new(ObservationStore::default_path()),
        };

        Self { scraper, store }
    }

    pub fn store(&self) -> &ObservationStore {
        &self.store
    }

    /// 执行一次抓取并保存，返回本轮是否写入了记录
    ///
    /// 抓取失败只记录日志，按本轮无数据处理；存储失败向上传播。
    pub async fn run_once(&self) -> Result<bool> {
        info!("Scraping from {}", self.scraper.source_name());

        let record = match self.scraper.fetch_snapshot().await {
            Ok(record) => record,
            Err(e) => {
                error!("Scraping error: {}", e);
                warn!("No data scraped this run.");
                return Ok(false);
            }
        };

        self.store.append(&record)?;
        info!("Data saved successfully.");

        Ok(true)
    }

    /// 关闭底层浏览器会话
    ///
    /// 消费self，保证整个进程生命周期内恰好关闭一次。
    pub async fn shutdown(self) -> Result<()> {
        self.scraper.close().await?;
        info!("Driver closed successfully.");
        Ok(())
    }
}
