// ==========================================
// 礼仪年历 - 运行配置
// ==========================================
// 职责: 配置加载、默认值、环境变量覆写
// 存储: JSON 文件（默认位于系统配置目录）
// ==========================================

use crate::config::precedence::PrecedenceTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 环境变量: 覆写语言
pub const ENV_LANGUAGE: &str = "MISSAL_KALENDAR_LANG";

/// 默认语言（拉丁文）
pub const DEFAULT_LANGUAGE: &str = "la";

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 (path={path}): {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败 (path={path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置值无效: {0}")]
    Invalid(String),
}

// ==========================================
// KalendarConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KalendarConfig {
    /// 显示语言
    pub language: String,

    /// 外部圣人历 CSV（None 使用内置表）
    pub sanctoral_table: Option<PathBuf>,

    /// 优先级常量表
    pub precedence: PrecedenceTable,
}

impl Default for KalendarConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            sanctoral_table: None,
            precedence: PrecedenceTable::default(),
        }
    }
}

impl KalendarConfig {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: KalendarConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        config.validate()?;
        info!(path = %path.display(), language = %config.language, "配置加载完成");
        Ok(config)
    }

    /// 加载默认位置的配置；文件不存在时使用默认值，随后应用环境变量覆写
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let mut config = match default_config_path() {
            Some(path) if path.exists() => Self::load(&path)?,
            _ => {
                debug!("未找到配置文件，使用默认配置");
                Self::default()
            }
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 应用环境变量覆写
    pub fn apply_env_overrides(&mut self) {
        if let Ok(lang) = std::env::var(ENV_LANGUAGE) {
            let lang = lang.trim();
            if !lang.is_empty() {
                debug!(language = %lang, "语言由环境变量覆写");
                self.language = lang.to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::Invalid("language 不能为空".to_string()));
        }
        self.precedence.validate().map_err(ConfigError::Invalid)
    }
}

/// 默认配置文件路径: <config_dir>/missal-kalendar/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("missal-kalendar").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KalendarConfig::default();
        assert_eq!(config.language, "la");
        assert!(config.sanctoral_table.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_language_rejected() {
        let config = KalendarConfig {
            language: "  ".to_string(),
            ..KalendarConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_default_path_layout() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("missal-kalendar/config.json"));
        }
    }
}
