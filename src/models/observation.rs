use serde::{Deserialize, Serialize};

/// 字段抓取失败时写入的占位值
pub const NOT_AVAILABLE: &str = "N/A";

/// 一次行情快照记录
///
/// 除时间戳外，所有字段都保留页面上渲染出的原始文本，
/// 抓取失败的字段为 [`NOT_AVAILABLE`]。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub timestamp: String,
    pub price: String,
    pub market_cap: String,
    pub volume_24h: String,
    pub circulating_supply: String,
    pub price_change_24h: String,
    pub bullish_sentiment: String,
    pub bearish_sentiment: String,
}

impl ObservationRecord {
    /// 存储文件的固定列顺序，与字段声明顺序一致
    pub const COLUMNS: [&'static str; 8] = [
        "timestamp",
        "price",
        "market_cap",
        "volume_24h",
        "circulating_supply",
        "price_change_24h",
        "bullish_sentiment",
        "bearish_sentiment",
    ];
}
