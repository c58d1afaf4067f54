// ==========================================
// 礼仪年历 - 庆节候选 (Observance)
// ==========================================
// 职责: 描述某一日期的一个庆节候选
// 标识格式: <flexibility>:<key>:<rank>
//   例: tempora:Adv4-0:1 / sancti:12-25m1:1 / commune:C10a:4
// 红线: 构造后不可变，只允许选择、分组或整体移动到其他日期
// ==========================================

use crate::domain::types::{Flexibility, Season};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 标识解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    #[error("标识格式错误 (期望 <flexibility>:<key>:<rank>): {0}")]
    Malformed(String),

    #[error("未知日期属性: {flexibility} (id={id})")]
    UnknownFlexibility { id: String, flexibility: String },

    #[error("等级超出范围 [1, 4]: {rank} (id={id})")]
    RankOutOfRange { id: String, rank: String },
}

// ==========================================
// ObservanceId - 结构化标识
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObservanceId {
    pub flexibility: Flexibility,
    pub key: String,
    pub rank: u8,
}

impl ObservanceId {
    /// 解析 `<flexibility>:<key>:<rank>` 形式的标识
    pub fn parse(id: &str) -> Result<Self, IdParseError> {
        let mut parts = id.split(':');
        let (flex, key, rank) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(f), Some(k), Some(r), None) if !k.is_empty() => (f, k, r),
            _ => return Err(IdParseError::Malformed(id.to_string())),
        };

        let flexibility = flex
            .parse::<Flexibility>()
            .map_err(|_| IdParseError::UnknownFlexibility {
                id: id.to_string(),
                flexibility: flex.to_string(),
            })?;

        let rank = match rank.parse::<u8>() {
            Ok(r) if (1..=4).contains(&r) => r,
            _ => {
                return Err(IdParseError::RankOutOfRange {
                    id: id.to_string(),
                    rank: rank.to_string(),
                })
            }
        };

        Ok(Self {
            flexibility,
            key: key.to_string(),
            rank,
        })
    }
}

impl fmt::Display for ObservanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.flexibility, self.key, self.rank)
    }
}

// ==========================================
// Observance - 庆节候选
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observance {
    /// 完整标识
    pub id: String,

    /// 标识中的中段 key（如 "Adv4-0"、"12-25m1"）
    pub key: String,

    /// 等级 1-4（1 最高）
    pub rank: u8,

    /// 优先级表位置（值越小越优先）
    pub priority: u32,

    /// 日期属性
    pub flexibility: Flexibility,

    /// 名义日期（被移动后保持不变）
    pub date: NaiveDate,

    /// 语言（仅用于显示文本）
    pub language: String,

    /// 显示标题
    pub title: String,
}

impl Observance {
    /// 由标识构造庆节候选
    ///
    /// # 参数
    /// - id: `<flexibility>:<key>:<rank>` 形式的标识
    /// - date: 名义日期
    /// - priority: 优先级表位置
    /// - language: 语言代码
    /// - title: 已解析的显示标题
    pub fn new(
        id: &str,
        date: NaiveDate,
        priority: u32,
        language: &str,
        title: String,
    ) -> Result<Self, IdParseError> {
        let parsed = ObservanceId::parse(id)?;
        Ok(Self {
            id: id.to_string(),
            key: parsed.key,
            rank: parsed.rank,
            priority,
            flexibility: parsed.flexibility,
            date,
            language: language.to_string(),
            title,
        })
    }

    pub fn is_tempora(&self) -> bool {
        self.flexibility == Flexibility::Tempora
    }

    pub fn is_sancti(&self) -> bool {
        self.flexibility == Flexibility::Sancti
    }

    /// 节期条目的周内序号（0 = 主日）
    ///
    /// key 形如 "Adv4-0"，取最后一个 '-' 之后的数字
    pub fn tempora_weekday(&self) -> Option<u32> {
        if !self.is_tempora() {
            return None;
        }
        self.key
            .rsplit_once('-')
            .and_then(|(_, day)| day.chars().next())
            .and_then(|c| c.to_digit(10))
    }

    pub fn is_tempora_sunday(&self) -> bool {
        self.tempora_weekday() == Some(0)
    }

    /// 节期条目所属季节（圣人历条目返回 None）
    pub fn season(&self) -> Option<Season> {
        if !self.is_tempora() {
            return None;
        }
        Season::from_tempora_key(&self.key)
    }

    /// 默认优先规则的排序键: (priority, rank, flexibility)
    pub fn precedence_key(&self) -> (u32, u8, Flexibility) {
        (self.priority, self.rank, self.flexibility)
    }
}

impl fmt::Display for Observance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.date)
    }
}
