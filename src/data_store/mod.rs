use log::info;
use std::env;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::models::observation::ObservationRecord;
use crate::util::csv_utils;

/// 默认的存储文件名
pub const STORE_FILE_NAME: &str = "bitcoin_hourly_data_enhanced.csv";

/// 行情记录存储，追加式CSV文件
///
/// 存储预期保持很小，追加采用读全量、追加一行、整体重写的朴素方式。
pub struct ObservationStore {
    path: PathBuf,
}

impl ObservationStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// 默认存储路径：可执行文件所在目录
    pub fn default_path() -> PathBuf {
        let dir = env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(STORE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载全部已有记录，文件不存在时返回空集
    pub fn load(&self) -> Result<Vec<ObservationRecord>> {
        if self.path.exists() {
            csv_utils::read_observations_from_csv(&self.path)
        } else {
            info!(
                "No existing data found at {}, starting fresh",
                self.path.display()
            );
            Ok(Vec::new())
        }
    }

    /// 追加一条记录并整体重写存储文件
    ///
    /// 文件不存在时会连同表头一起创建。
    pub fn append(&self, record: &ObservationRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record.clone());
        csv_utils::save_observations_to_csv(&records, &self.path)?;
        Ok(())
    }
}
