// ==========================================
// 礼仪年历 - 配置层
// ==========================================
// 职责: 运行配置 + 优先级常量表
// 存储: JSON 文件（可选），缺省使用内置默认值
// ==========================================

pub mod kalendar_config;
pub mod precedence;

pub use kalendar_config::{default_config_path, ConfigError, KalendarConfig};
pub use precedence::{LeapYearFeast, MarianSaturdayOffices, PrecedenceTable};
