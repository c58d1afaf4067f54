// ==========================================
// 规则求值上下文
// ==========================================

use crate::config::PrecedenceTable;
use crate::domain::Observance;
use crate::engine::calendar::YearCalendar;
use crate::engine::error::{ResolutionError, ResolutionResult};
use crate::engine::matcher::{self, Pattern};
use crate::engine::rules::Rule;
use crate::i18n::TextResolver;
use chrono::{Datelike, NaiveDate, Weekday};

/// 单日求值上下文（全部只读）
pub struct RuleContext<'a> {
    /// 截至当前的年历（之前日期的移动已生效）
    pub calendar: &'a YearCalendar,
    pub date: NaiveDate,
    /// 当日节期候选
    pub tempora: &'a [Observance],
    /// 当日全部候选
    pub observances: &'a [Observance],
    pub language: &'a str,
    pub table: &'a PrecedenceTable,
    pub texts: &'a dyn TextResolver,
}

impl<'a> RuleContext<'a> {
    pub fn find(&self, pattern: &Pattern) -> Option<&'a Observance> {
        matcher::find(self.observances, pattern)
    }

    pub fn has(&self, pattern: &Pattern) -> bool {
        matcher::matches(self.observances, pattern)
    }

    /// 外层条件已确认存在时取匹配项；缺失视为内部不一致
    pub fn require(&self, rule: Rule, pattern: &Pattern) -> ResolutionResult<&'a Observance> {
        self.find(pattern)
            .ok_or_else(|| ResolutionError::PatternInvariant {
                date: self.date,
                rule,
                pattern: format!("{:?}", pattern),
            })
    }

    /// 取当日节期条目；缺失说明来源提供的候选集合不完整
    pub fn require_tempora(&self, rule: Rule, pattern: &Pattern) -> ResolutionResult<&'a Observance> {
        self.find(pattern)
            .ok_or_else(|| ResolutionError::MalformedCandidatePool {
                date: self.date,
                rule,
                reason: format!("缺少节期条目 {:?}", pattern),
            })
    }

    pub fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sun
    }

    pub fn is_saturday(&self) -> bool {
        self.date.weekday() == Weekday::Sat
    }

    /// 本年的某月某日
    pub fn date_in_year(&self, month: u32, day: u32) -> ResolutionResult<NaiveDate> {
        let year = self.date.year();
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ResolutionError::InvalidDate { year, month, day })
    }
}
