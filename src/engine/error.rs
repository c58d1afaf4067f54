// ==========================================
// 礼仪年历 - 裁决引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::IdParseError;
use crate::engine::rules::Rule;
use chrono::NaiveDate;
use thiserror::Error;

/// 裁决引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    // ===== 向前搜索 =====
    #[error("未找到可移入的空闲日: origin={origin}, observance={observance}")]
    NoFreeDay { origin: NaiveDate, observance: String },

    // ===== 候选集合 =====
    #[error("候选集合不完整 (date={date}, rule={rule}): {reason}")]
    MalformedCandidatePool {
        date: NaiveDate,
        rule: Rule,
        reason: String,
    },

    #[error("年历缺少节期锚点: year={year}, id={id}")]
    MissingLandmark { year: i32, id: String },

    // ===== 内部一致性 =====
    #[error("规则内部不一致 (date={date}, rule={rule}): 外层条件已满足但未匹配到 {pattern}")]
    PatternInvariant {
        date: NaiveDate,
        rule: Rule,
        pattern: String,
    },

    // ===== 移动 =====
    #[error("移动目标无效: origin={origin}, target={target}（只能移入同年之后的日期）")]
    InvalidShiftTarget { origin: NaiveDate, target: NaiveDate },

    // ===== 合成候选 =====
    #[error("日期无效: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("合成候选标识无效: {0}")]
    SynthesizedId(#[from] IdParseError),
}

/// Result 类型别名
pub type ResolutionResult<T> = Result<T, ResolutionError>;
