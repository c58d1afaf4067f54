// ==========================================
// 礼仪年历 - 导入层
// ==========================================
// 职责: 外部候选来源（节期 / 圣人历）
// 支持: CSV
// ==========================================

pub mod error;
pub mod provider;
pub mod sanctoral;
pub mod tempora;

pub use error::{ImportError, ImportResult};
pub use provider::{SanctoralProvider, TemporaProvider};
pub use sanctoral::{SanctoralEntry, SanctoralTable};
pub use tempora::{TemporaEntry, TemporaTable};
