use crate::config::Config;
use crate::errors::Result;
use crate::models::observation::{ObservationRecord, NOT_AVAILABLE};
use crate::scrapers::base::MarketScraper;
use crate::util;
use async_trait::async_trait;
use log::{debug, info};
use std::time::Duration;
use thirtyfour::prelude::*;
use thirtyfour::ChromiumLikeCapabilities;

/// CoinMarketCap比特币行情页抓取器
///
/// 页面由JS渲染，需要真实浏览器会话；会话由本结构体持有，
/// 通过 [`MarketScraper::close`] 释放。
pub struct CoinMarketCapScraper {
    driver: WebDriver,
    price_wait: Duration,
    sentiment_wait: Duration,
    scroll_step_px: u32,
    scroll_limit_px: u32,
    scroll_pause: Duration,
    settle: Duration,
}

const TARGET_URL: &str = "https://coinmarketcap.com/currencies/bitcoin/";

// 页面元素定位依赖目标站点当前的DOM结构，站点改版时这里首先失效
const PRICE_XPATH: &str = r#"//span[@data-test="text-cdp-price-display"]"#;
const MARKET_CAP_XPATH: &str =
    "//dt[.//div[contains(text(),'Market cap')]]/following-sibling::dd//span";
const VOLUME_24H_XPATH: &str =
    "//dt[.//div[contains(text(),'Volume (24h')]]/following-sibling::dd//span";
const CIRCULATING_SUPPLY_XPATH: &str =
    "//dt[.//div[contains(text(),'Circulating supply')]]/following-sibling::dd//span";
const PRICE_CHANGE_24H_XPATH: &str = "//p[contains(@class, 'change-text')]";
const BULLISH_XPATH: &str = "//span[contains(@class,'cOjBdO') and contains(@class,'ratio')]";
const BEARISH_XPATH: &str = "//span[contains(@class,'iKkbth') and contains(@class,'ratio')]";

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(500);

impl CoinMarketCapScraper {
    /// 创建新的抓取器并启动浏览器会话
    pub async fn new(config: &Config) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()?;
        }
        caps.add_arg("--disable-gpu")?;
        caps.add_arg("--window-size=1920,1080")?;
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;
        caps.add_arg(&format!("--user-agent={}", util::random_user_agent()))?;

        let driver = WebDriver::new(&config.webdriver_url, caps).await?;

        Ok(Self {
            driver,
            price_wait: Duration::from_secs(config.price_wait_secs),
            sentiment_wait: Duration::from_secs(config.sentiment_wait_secs),
            scroll_step_px: config.scroll_step_px,
            scroll_limit_px: config.scroll_limit_px,
            scroll_pause: Duration::from_millis(config.scroll_pause_ms),
            settle: Duration::from_secs(config.settle_secs),
        })
    }

    async fn field_text(&self, xpath: &str) -> Result<String> {
        let element = self.driver.find(By::XPath(xpath)).await?;
        Ok(element.text().await?)
    }

    /// 尽力读取单个字段，失败时返回占位值，不影响其他字段
    async fn text_or_default(&self, field: &str, xpath: &str) -> String {
        match self.field_text(xpath).await {
            Ok(text) => text,
            Err(e) => {
                debug!("字段 {} 读取失败: {}", field, e);
                NOT_AVAILABLE.to_string()
            }
        }
    }

    /// 限时等待元素出现并读取文本，超时返回占位值
    async fn wait_text_or_default(&self, field: &str, xpath: &str, timeout: Duration) -> String {
        let found = self
            .driver
            .query(By::XPath(xpath))
            .wait(timeout, WAIT_POLL_INTERVAL)
            .first()
            .await;

        match found {
            Ok(element) => match element.text().await {
                Ok(text) => text,
                Err(e) => {
                    debug!("字段 {} 读取失败: {}", field, e);
                    NOT_AVAILABLE.to_string()
                }
            },
            Err(e) => {
                debug!("字段 {} 等待超时: {}", field, e);
                NOT_AVAILABLE.to_string()
            }
        }
    }

    async fn scroll_to(&self, y: u32) -> Result<()> {
        self.driver
            .execute(&format!("window.scrollTo(0, {});", y), Vec::new())
            .await?;
        Ok(())
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.driver
            .execute("window.scrollTo(0, document.body.scrollHeight);", Vec::new())
            .await?;
        Ok(())
    }

    /// 分步滚动页面，触发情绪指标的懒加载
    ///
    /// 任一指标出现即停止；滚动到上限后交给后续的限时等待兜底。
    async fn scroll_until_sentiment_visible(&self) -> Result<()> {
        let step = self.scroll_step_px.max(1);
        let mut y = 0u32;

        while y < self.scroll_limit_px {
            self.scroll_to(y).await?;
            tokio::time::sleep(self.scroll_pause).await;

            let bullish = self.driver.find_all(By::XPath(BULLISH_XPATH)).await?;
            let bearish = self.driver.find_all(By::XPath(BEARISH_XPATH)).await?;
            if !bullish.is_empty() || !bearish.is_empty() {
                debug!("情绪指标在滚动到 {}px 时出现", y);
                break;
            }

            y = y.saturating_add(step);
        }

        Ok(())
    }
}

#[async_trait]
impl MarketScraper for CoinMarketCapScraper {
    fn source_name(&self) -> &'static str {
        "CoinMarketCap"
    }

    async fn fetch_snapshot(&self) -> Result<ObservationRecord> {
        self.driver.goto(TARGET_URL).await?;

        // 价格元素是页面渲染完成的标志，等不到则本轮抓取整体失败
        self.driver
            .query(By::XPath(PRICE_XPATH))
            .wait(self.price_wait, WAIT_POLL_INTERVAL)
            .first()
            .await?;

        self.scroll_to_bottom().await?;
        tokio::time::sleep(self.settle).await;

        let price = self.field_text(PRICE_XPATH).await?;

        let market_cap = self.text_or_default("market_cap", MARKET_CAP_XPATH).await;
        let volume_24h = self.text_or_default("volume_24h", VOLUME_24H_XPATH).await;
        let circulating_supply = self
            .text_or_default("circulating_supply", CIRCULATING_SUPPLY_XPATH)
            .await;
        let price_change_24h = self
            .text_or_default("price_change_24h", PRICE_CHANGE_24H_XPATH)
            .await;

        self.scroll_until_sentiment_visible().await?;

        let bullish_sentiment = self
            .wait_text_or_default("bullish_sentiment", BULLISH_XPATH, self.sentiment_wait)
            .await;
        let bearish_sentiment = self
            .wait_text_or_default("bearish_sentiment", BEARISH_XPATH, self.sentiment_wait)
            .await;

        let record = ObservationRecord {
            timestamp: util::capture_timestamp(),
            price,
            market_cap,
            volume_24h,
            circulating_supply,
            price_change_24h,
            bullish_sentiment,
            bearish_sentiment,
        };

        info!("Scraped data: {:?}", record);
        Ok(record)
    }

    async fn close(&self) -> Result<()> {
        self.driver.clone().quit().await?;
        Ok(())
    }
}
