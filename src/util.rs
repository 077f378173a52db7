use chrono::Local;
use rand::seq::SliceRandom;

/// 采集时间戳，与存储文件中的timestamp列格式一致
pub fn capture_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

// 浏览器请求使用的User-Agent池
const USER_AGENTS: [&str; 5] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.3 Safari/605.1.15",
];

/// 随机选取一个User-Agent
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

/// CSV读写工具
pub mod csv_utils {
    use csv::{ReaderBuilder, WriterBuilder};
    use log::info;
    use std::path::Path;

    use crate::errors::Result;
    use crate::models::observation::ObservationRecord;

    /// 从CSV文件读取全部行情记录
    pub fn read_observations_from_csv(path: &Path) -> Result<Vec<ObservationRecord>> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

        let mut result = Vec::new();
        for record in reader.deserialize() {
            result.push(record?);
        }

        Ok(result)
    }

    /// 将全部行情记录写入CSV文件，表头始终写在首行
    pub fn save_observations_to_csv(data: &[ObservationRecord], path: &Path) -> Result<()> {
        info!("Saving {} observations to {}", data.len(), path.display());

        let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(ObservationRecord::COLUMNS)?;
        for record in data {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }
}
