// ==========================================
// 礼仪年历 - 冲突裁决规则链
// ==========================================
// 职责: 同一日期多个庆节候选的冲突裁决
// 输入: 年历(只读) + 日期 + 节期候选 + 全部候选
// 输出: None（本规则不适用）或 Resolution（庆节, 纪念, 移动）
// ==========================================
// 红线: RULE_CHAIN 顺序即语义，后面的规则假定前面的特例已被过滤
// 红线: 最后一条规则总是命中，规则链是全函数
// ==========================================

mod context;
mod ferias;
mod first_class;
mod marian;
mod precedence;
mod seasonal;


pub use context::RuleContext;

use crate::domain::Resolution;
use crate::engine::error::ResolutionResult;
use serde::Serialize;
use std::fmt;

// ==========================================
// Rule - 裁决规则（封闭集合）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// 圣诞多台弥撒
    NativityMasses,
    /// 追思已亡（主日时移至次日）
    AllSouls,
    /// 圣诞前夕逢主日
    NativityVigilOnSunday,
    /// 圣母无染原罪逢主日
    ImmaculateConceptionOnSunday,
    /// 闰年: 圣玛弟亚宗徒
    StMatthiasInLeapYear,
    /// 闰年: 2 月 27 日庆节
    Feb27InLeapYear,
    /// 多个一等庆节冲突
    ConflictingFirstClassFeasts,
    /// 一等主的庆节取代圣家主日
    LordFeastOverSunday,
    /// 主的庆节取代二等主日
    LordFeastOverSecondClassSunday,
    /// 一等庆节胜出
    FirstClassFeast,
    /// 二等主日 vs 二等圣人庆节
    SecondClassSunday,
    /// 特权平日
    PrivilegedFeria,
    /// 二等庆节取代四季斋日 / 将临期平日
    SecondClassFeastOverFeria,
    /// 圣母周六
    MarianSaturday,
    /// 默认优先规则
    Precedence,
}

/// 规则链（按此顺序求值，第一个非 None 结果即为当日结果）
pub const RULE_CHAIN: [Rule; 15] = [
    Rule::NativityMasses,
    Rule::AllSouls,
    Rule::NativityVigilOnSunday,
    Rule::ImmaculateConceptionOnSunday,
    Rule::StMatthiasInLeapYear,
    Rule::Feb27InLeapYear,
    Rule::ConflictingFirstClassFeasts,
    Rule::LordFeastOverSunday,
    Rule::LordFeastOverSecondClassSunday,
    Rule::FirstClassFeast,
    Rule::SecondClassSunday,
    Rule::PrivilegedFeria,
    Rule::SecondClassFeastOverFeria,
    Rule::MarianSaturday,
    Rule::Precedence,
];

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::NativityMasses => "nativity_masses",
            Rule::AllSouls => "all_souls",
            Rule::NativityVigilOnSunday => "nativity_vigil_on_sunday",
            Rule::ImmaculateConceptionOnSunday => "immaculate_conception_on_sunday",
            Rule::StMatthiasInLeapYear => "st_matthias_in_leap_year",
            Rule::Feb27InLeapYear => "feb27_in_leap_year",
            Rule::ConflictingFirstClassFeasts => "conflicting_first_class_feasts",
            Rule::LordFeastOverSunday => "lord_feast_over_sunday",
            Rule::LordFeastOverSecondClassSunday => "lord_feast_over_second_class_sunday",
            Rule::FirstClassFeast => "first_class_feast",
            Rule::SecondClassSunday => "second_class_sunday",
            Rule::PrivilegedFeria => "privileged_feria",
            Rule::SecondClassFeastOverFeria => "second_class_feast_over_feria",
            Rule::MarianSaturday => "marian_saturday",
            Rule::Precedence => "precedence",
        }
    }

    /// 对单日求值
    ///
    /// # 返回
    /// - Ok(None): 本规则不适用
    /// - Ok(Some(Resolution)): 当日结果
    /// - Err: 候选集合或年历不满足规则前提
    pub fn apply(&self, ctx: &RuleContext<'_>) -> ResolutionResult<Option<Resolution>> {
        match self {
            Rule::NativityMasses => seasonal::nativity_masses(ctx),
            Rule::AllSouls => seasonal::all_souls(ctx),
            Rule::NativityVigilOnSunday => seasonal::nativity_vigil_on_sunday(ctx),
            Rule::ImmaculateConceptionOnSunday => seasonal::immaculate_conception_on_sunday(ctx),
            Rule::StMatthiasInLeapYear => {
                seasonal::leap_year_shift(ctx, *self, &ctx.table.st_matthias)
            }
            Rule::Feb27InLeapYear => seasonal::leap_year_shift(ctx, *self, &ctx.table.feb_27),
            Rule::ConflictingFirstClassFeasts => first_class::conflicting_first_class_feasts(ctx),
            Rule::LordFeastOverSunday => first_class::lord_feast_over_sunday(ctx),
            Rule::LordFeastOverSecondClassSunday => {
                first_class::lord_feast_over_second_class_sunday(ctx)
            }
            Rule::FirstClassFeast => first_class::first_class_feast(ctx),
            Rule::SecondClassSunday => ferias::second_class_sunday(ctx),
            Rule::PrivilegedFeria => ferias::privileged_feria(ctx),
            Rule::SecondClassFeastOverFeria => ferias::second_class_feast_over_feria(ctx),
            Rule::MarianSaturday => marian::marian_saturday(ctx),
            Rule::Precedence => precedence::precedence(ctx),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 按规则链顺序求值，返回第一个命中的规则及其结果
pub fn evaluate(ctx: &RuleContext<'_>) -> ResolutionResult<(Rule, Resolution)> {
    for rule in RULE_CHAIN {
        if let Some(resolution) = rule.apply(ctx)? {
            return Ok((rule, resolution));
        }
    }
    // 默认规则总是命中
    Ok((Rule::Precedence, Resolution::default()))
}
