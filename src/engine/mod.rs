// ==========================================
// 礼仪年历 - 引擎层
// ==========================================
// 职责: 模式匹配、年历、冲突裁决规则链、裁决驱动
// 红线: 引擎内部为纯内存计算，无 I/O（I/O 只在 importer/config）
// ==========================================

pub mod calendar;
pub mod error;
pub mod matcher;
pub mod orchestrator;
pub mod resolver;
pub mod rules;

pub use calendar::{days_in_year, is_leap_year, YearCalendar};
pub use error::{ResolutionError, ResolutionResult};
pub use matcher::Pattern;
pub use orchestrator::KalendarOrchestrator;
pub use resolver::Resolver;
pub use rules::{evaluate, Rule, RuleContext, RULE_CHAIN};
