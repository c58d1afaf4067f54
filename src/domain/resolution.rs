// ==========================================
// 礼仪年历 - 裁决结果
// ==========================================
// Resolution:   单条规则输出 (庆节, 纪念, 移动)
// ResolvedDay:  某日最终结果（记录命中规则）
// ResolvedYear: 全年结果，按年内序号存储
// ==========================================

use crate::domain::observance::Observance;
use crate::engine::rules::Rule;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

// ==========================================
// Shift - 移动指令
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    /// 目标日期（必须晚于来源日期且同年）
    pub target: NaiveDate,

    /// 移入目标日的候选
    pub observances: Vec<Observance>,
}

// ==========================================
// Resolution - 单条规则输出
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// 当日庆节（多台弥撒的庆节可有多个条目）
    pub celebration: Vec<Observance>,

    /// 纪念
    pub commemoration: Vec<Observance>,

    /// 移动指令
    pub shifts: Vec<Shift>,
}

impl Resolution {
    /// 只有庆节，无纪念、无移动
    pub fn celebrate(celebration: Vec<Observance>) -> Self {
        Self {
            celebration,
            ..Self::default()
        }
    }

    pub fn celebrate_one(observance: Observance) -> Self {
        Self::celebrate(vec![observance])
    }

    pub fn with_commemoration(mut self, commemoration: Vec<Observance>) -> Self {
        self.commemoration = commemoration;
        self
    }

    pub fn with_shift(mut self, target: NaiveDate, observances: Vec<Observance>) -> Self {
        self.shifts.push(Shift { target, observances });
        self
    }
}

// ==========================================
// ResolvedDay - 单日最终结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDay {
    pub date: NaiveDate,

    /// 当日节期条目（原样保留，供下游显示）
    pub tempora: Vec<Observance>,

    pub celebration: Vec<Observance>,
    pub commemoration: Vec<Observance>,

    /// 命中的规则
    pub rule: Rule,
}

impl ResolvedDay {
    /// 无庆节 = 普通平日
    pub fn is_bare_weekday(&self) -> bool {
        self.celebration.is_empty()
    }

    /// 主庆节标识（多台弥撒时取第一台）
    pub fn celebration_id(&self) -> Option<&str> {
        self.celebration.first().map(|o| o.id.as_str())
    }

    pub fn commemoration_ids(&self) -> Vec<&str> {
        self.commemoration.iter().map(|o| o.id.as_str()).collect()
    }
}

// ==========================================
// ResolvedYear - 全年结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedYear {
    pub year: i32,
    pub days: Vec<ResolvedDay>,
}

impl ResolvedYear {
    /// 按日期查询（其他年份返回 None）
    pub fn get(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        if date.year() != self.year {
            return None;
        }
        self.days.get(date.ordinal0() as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedDay> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
