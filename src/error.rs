// ==========================================
// 礼仪年历 - 统一错误类型
// ==========================================
// 汇总各层错误，供编排器与调用方使用
// ==========================================

use crate::config::ConfigError;
use crate::engine::error::ResolutionError;
use crate::importer::error::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KalendarError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("候选导入错误: {0}")]
    Import(#[from] ImportError),

    #[error("裁决错误: {0}")]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
