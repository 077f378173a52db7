use thiserror::Error;

#[derive(Error, Debug)]
pub enum BtcWatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("WebDriver error: {0}")]
    WebDriverError(#[from] thirtyfour::error::WebDriverError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, BtcWatchError>;

// 用于从字符串创建错误
impl From<String> for BtcWatchError {
    fn from(s: String) -> Self {
        BtcWatchError::Unknown(s)
    }
}

// 用于从&str创建错误
impl From<&str> for BtcWatchError {
    fn from(s: &str) -> Self {
        BtcWatchError::Unknown(s.to_string())
    }
}
