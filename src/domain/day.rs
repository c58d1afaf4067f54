// ==========================================
// 礼仪年历 - 单日候选集合 (Day)
// ==========================================
// tempora: 节期条目（按节期定义顺序，首个为"默认"节期条目）
// all:     当日全部候选（节期 + 圣人历 + 移入条目）
// 红线: 仅允许在该日被裁决之前追加移入条目
// ==========================================

use crate::domain::observance::Observance;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub tempora: Vec<Observance>,
    pub all: Vec<Observance>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            tempora: Vec::new(),
            all: Vec::new(),
        }
    }

    /// 加入一个候选；节期条目同时进入 tempora
    pub fn push(&mut self, observance: Observance) {
        if observance.is_tempora() {
            self.tempora.push(observance.clone());
        }
        self.all.push(observance);
    }

    /// 追加从其他日期移入的候选（只进入 all）
    pub fn push_shifted(&mut self, observance: Observance) {
        self.all.push(observance);
    }

    /// 当日是否包含给定等级集合中的任一候选
    pub fn has_any_rank(&self, ranks: &[u8]) -> bool {
        self.all.iter().any(|o| ranks.contains(&o.rank))
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
