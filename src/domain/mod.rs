// ==========================================
// 礼仪年历 - 领域层
// ==========================================
// 职责: 庆节候选、单日候选集合、裁决结果
// ==========================================

pub mod day;
pub mod observance;
pub mod resolution;
pub mod types;

pub use day::Day;
pub use observance::{IdParseError, Observance, ObservanceId};
pub use resolution::{Resolution, ResolvedDay, ResolvedYear, Shift};
pub use types::{Flexibility, Season};
