// ==========================================
// 礼仪年历 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::IdParseError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("标识无效 (行 {row}): {source}")]
    InvalidId {
        row: usize,
        #[source]
        source: IdParseError,
    },

    #[error("日期无效 (行 {row}): {value}")]
    InvalidDate { row: usize, value: String },

    #[error("日期属性不符 (行 {row}): 期望 {expected}，实际 id={id}")]
    FlexibilityMismatch {
        row: usize,
        expected: String,
        id: String,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
