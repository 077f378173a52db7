use std::path::PathBuf;

/// 单次抓取运行的配置
///
/// 滚动相关的数值是针对目标页面布局调出来的，作为可配置项保留。
pub struct Config {
    pub webdriver_url: String,
    pub output_path: Option<PathBuf>,
    pub headless: bool,
    pub price_wait_secs: u64,
    pub sentiment_wait_secs: u64,
    pub scroll_step_px: u32,
    pub scroll_limit_px: u32,
    pub scroll_pause_ms: u64,
    pub settle_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            output_path: None,
            headless: true,
            price_wait_secs: 20,
            sentiment_wait_secs: 10,
            scroll_step_px: 500,
            scroll_limit_px: 4000,
            scroll_pause_ms: 800,
            settle_secs: 3,
        }
    }

    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.webdriver_url = url.to_string();
        self
    }

    pub fn with_output_path(mut self, path: &str) -> Self {
        self.output_path = Some(PathBuf::from(path));
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_price_wait_secs(mut self, secs: u64) -> Self {
        self.price_wait_secs = secs;
        self
    }

    pub fn with_scroll_step_px(mut self, step: u32) -> Self {
        self.scroll_step_px = step;
        self
    }

    pub fn with_scroll_limit_px(mut self, limit: u32) -> Self {
        self.scroll_limit_px = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = Config::new();
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert!(config.output_path.is_none());
        assert!(config.headless);
        assert_eq!(config.price_wait_secs, 20);
        assert_eq!(config.sentiment_wait_secs, 10);
        assert_eq!(config.scroll_step_px, 500);
        assert_eq!(config.scroll_limit_px, 4000);
        assert_eq!(config.scroll_pause_ms, 800);
        assert_eq!(config.settle_secs, 3);
    }

    #[test]
    fn builders_override_defaults() {
        let config = Config::new()
            .with_webdriver_url("http://localhost:4444")
            .with_output_path("out/observations.csv")
            .with_headless(false)
            .with_scroll_limit_px(6000);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(
            config.output_path,
            Some(PathBuf::from("out/observations.csv"))
        );
        assert!(!config.headless);
        assert_eq!(config.scroll_limit_px, 6000);
    }
}
