// ==========================================
// 礼仪年历 (1962 罗马礼) - 核心库
// ==========================================
// 职责: 逐日裁决庆节候选，给出庆节、纪念与移动
// 分层: domain / importer / config / engine
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 庆节候选与裁决结果
pub mod domain;

// 引擎层 - 匹配、规则链、裁决驱动
pub mod engine;

// 导入层 - 节期 / 圣人历来源
pub mod importer;

// 配置层
pub mod config;

// 统一错误类型
pub mod error;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{KalendarConfig, PrecedenceTable};
pub use domain::{
    Day, Flexibility, Observance, ObservanceId, Resolution, ResolvedDay, ResolvedYear, Season,
    Shift,
};
pub use engine::{KalendarOrchestrator, Pattern, Resolver, Rule, YearCalendar, RULE_CHAIN};
pub use error::KalendarError;
pub use i18n::{LocaleTexts, TextResolver};
pub use importer::{SanctoralProvider, SanctoralTable, TemporaProvider, TemporaTable};

// ==========================================
// 常量定义
// ==========================================

// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
