// ==========================================
// 礼仪年历 - 年历 (YearCalendar)
// ==========================================
// 职责: 一年内 日期 -> Day 的映射
// 存储: 按年内序号 (ordinal0) 索引的定长数组，每日恰好一个 Day
// 红线: 已裁决日期的候选集合不得再修改（由裁决驱动按时间顺序保证）
// ==========================================

use crate::domain::{Day, Observance};
use crate::engine::error::{ResolutionError, ResolutionResult};
use crate::engine::matcher::{self, Pattern};
use crate::i18n::TextResolver;
use crate::importer::{ImportResult, SanctoralProvider, TemporaProvider};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCalendar {
    year: i32,
    days: Vec<Day>,
}

impl YearCalendar {
    /// 创建空年历（每日一个空 Day）
    pub fn empty(year: i32) -> Self {
        let days = (1..=days_in_year(year))
            .filter_map(|ordinal| NaiveDate::from_yo_opt(year, ordinal))
            .map(Day::new)
            .collect();
        Self { year, days }
    }

    /// 由两个来源构建年历
    ///
    /// 节期条目先于圣人历条目放入，保证 tempora 顺序即节期定义顺序
    #[instrument(skip(tempora, sanctoral, texts), fields(year = year, language = %language))]
    pub fn build(
        year: i32,
        language: &str,
        tempora: &dyn TemporaProvider,
        sanctoral: &dyn SanctoralProvider,
        texts: &dyn TextResolver,
    ) -> ImportResult<Self> {
        let mut calendar = Self::empty(year);

        let temporal = tempora.tempora(year, language, texts)?;
        let fixed = sanctoral.sanctoral(year, language, texts)?;
        let (temporal_count, fixed_count) = (temporal.len(), fixed.len());

        for observance in temporal.into_iter().chain(fixed) {
            calendar.insert(observance);
        }

        info!(
            tempora_count = temporal_count,
            sanctoral_count = fixed_count,
            "年历构建完成"
        );
        Ok(calendar)
    }

    /// 放入一个候选（按候选自身日期），其他年份返回 false
    pub fn insert(&mut self, observance: Observance) -> bool {
        match self.index_of(observance.date) {
            Some(index) => {
                self.days[index].push(observance);
                true
            }
            None => {
                warn!(id = %observance.id, date = %observance.date, year = self.year, "候选不属于本年，已忽略");
                false
            }
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn index_of(&self, date: NaiveDate) -> Option<usize> {
        if date.year() != self.year {
            return None;
        }
        Some(date.ordinal0() as usize)
    }

    /// 按日期直接查询
    pub fn get_day(&self, date: NaiveDate) -> Option<&Day> {
        self.index_of(date).and_then(|i| self.days.get(i))
    }

    /// 按时间顺序扫描，返回第一个 all 集合满足模式的日期
    pub fn find_day(&self, pattern: &Pattern) -> Option<NaiveDate> {
        self.days
            .iter()
            .find(|day| matcher::matches(&day.all, pattern))
            .map(|day| day.date)
    }

    /// 将移动的候选追加到目标日
    ///
    /// 目标日必须严格晚于来源日且在同一年
    pub fn apply_shift(
        &mut self,
        origin: NaiveDate,
        target: NaiveDate,
        observances: Vec<Observance>,
    ) -> ResolutionResult<()> {
        if target <= origin {
            return Err(ResolutionError::InvalidShiftTarget { origin, target });
        }
        let index = self
            .index_of(target)
            .ok_or(ResolutionError::InvalidShiftTarget { origin, target })?;

        let day = &mut self.days[index];
        for observance in observances {
            debug!(id = %observance.id, %origin, %target, "候选移入目标日");
            day.push_shifted(observance);
        }
        Ok(())
    }
}

/// 年内天数
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn obs(id: &str, date: NaiveDate) -> Observance {
        Observance::new(id, date, 10, "la", String::new()).unwrap()
    }

    #[test]
    fn test_every_date_has_one_day() {
        let common = YearCalendar::empty(2023);
        assert_eq!(common.len(), 365);
        assert_eq!(common.days()[0].date, date(2023, 1, 1));
        assert_eq!(common.days()[364].date, date(2023, 12, 31));

        let leap = YearCalendar::empty(2024);
        assert_eq!(leap.len(), 366);
        assert_eq!(leap.get_day(date(2024, 2, 29)).unwrap().date, date(2024, 2, 29));
    }

    #[test]
    fn test_insert_splits_tempora_and_all() {
        let mut calendar = YearCalendar::empty(2024);
        assert!(calendar.insert(obs("tempora:Adv2-0:1", date(2024, 12, 8))));
        assert!(calendar.insert(obs("sancti:12-08:1", date(2024, 12, 8))));
        assert!(!calendar.insert(obs("sancti:12-08:1", date(2023, 12, 8))));

        let day = calendar.get_day(date(2024, 12, 8)).unwrap();
        assert_eq!(day.tempora.len(), 1);
        assert_eq!(day.all.len(), 2);
    }

    #[test]
    fn test_find_day_scans_chronologically() {
        let mut calendar = YearCalendar::empty(2024);
        calendar.insert(obs("tempora:Quad6-3:1", date(2024, 3, 27)));
        assert_eq!(
            calendar.find_day(&Pattern::id("tempora:Quad6-3:1")),
            Some(date(2024, 3, 27))
        );
        assert_eq!(calendar.find_day(&Pattern::id("tempora:Adv1-0:1")), None);
    }

    #[test]
    fn test_apply_shift_only_forward_within_year() {
        let mut calendar = YearCalendar::empty(2024);
        let moved = obs("sancti:02-24:2", date(2024, 2, 24));

        calendar
            .apply_shift(date(2024, 2, 24), date(2024, 2, 25), vec![moved.clone()])
            .unwrap();
        let day = calendar.get_day(date(2024, 2, 25)).unwrap();
        assert_eq!(day.all, vec![moved.clone()]);
        assert!(day.tempora.is_empty());

        assert_eq!(
            calendar.apply_shift(date(2024, 2, 24), date(2024, 2, 24), vec![moved.clone()]),
            Err(ResolutionError::InvalidShiftTarget {
                origin: date(2024, 2, 24),
                target: date(2024, 2, 24)
            })
        );
        assert!(calendar
            .apply_shift(date(2024, 12, 31), date(2025, 1, 1), vec![moved])
            .is_err());
    }

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }
}
