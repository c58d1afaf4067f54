// ==========================================
// 固定日期特例规则
// ==========================================
// 圣诞多台弥撒 / 追思已亡 / 圣诞前夕 / 无染原罪 / 闰年移动
// ==========================================

use super::{Rule, RuleContext};
use crate::config::LeapYearFeast;
use crate::domain::{Observance, Resolution};
use crate::engine::calendar::is_leap_year;
use crate::engine::error::ResolutionResult;
use crate::engine::matcher::{self, Pattern};
use chrono::Datelike;

fn masses(ctx: &RuleContext<'_>, prefix: &str) -> Vec<Observance> {
    matcher::find_all(ctx.observances, &Pattern::IdPrefix(prefix.to_string()))
        .into_iter()
        .cloned()
        .collect()
}

/// 圣诞子夜弥撒存在时，全部圣诞弥撒即为庆节（含取代将临期第四主日）
pub(super) fn nativity_masses(ctx: &RuleContext<'_>) -> ResolutionResult<Option<Resolution>> {
    if !ctx.has(&Pattern::id(&ctx.table.nativity_vigil_mass)) {
        return Ok(None);
    }
    let celebration = masses(ctx, &ctx.table.nativity_masses_prefix);
    Ok(Some(Resolution::celebrate(celebration)))
}

/// 追思已亡: 平日即庆节；逢主日则庆祝主日，三台弥撒移至 11 月 3 日
pub(super) fn all_souls(ctx: &RuleContext<'_>) -> ResolutionResult<Option<Resolution>> {
    if !ctx.has(&Pattern::id(&ctx.table.all_souls_first_mass)) {
        return Ok(None);
    }
    let all_souls = masses(ctx, &ctx.table.all_souls_masses_prefix);

    if !ctx.is_sunday() {
        return Ok(Some(Resolution::celebrate(all_souls)));
    }

    let sunday = ctx.require_tempora(Rule::AllSouls, &Pattern::TemporaSunday)?;
    let (month, day) = ctx.table.all_souls_shift_to;
    let target = ctx.date_in_year(month, day)?;
    Ok(Some(
        Resolution::celebrate_one(sunday.clone()).with_shift(target, all_souls),
    ))
}

/// 圣诞前夕逢主日: 前夕为唯一庆节，不纪念将临期主日
pub(super) fn nativity_vigil_on_sunday(
    ctx: &RuleContext<'_>,
) -> ResolutionResult<Option<Resolution>> {
    let pattern = Pattern::id(&ctx.table.nativity_vigil);
    match ctx.find(&pattern) {
        Some(vigil) if ctx.is_sunday() => Ok(Some(Resolution::celebrate_one(vigil.clone()))),
        _ => Ok(None),
    }
}

/// 无染原罪逢主日: 先于将临期主日
pub(super) fn immaculate_conception_on_sunday(
    ctx: &RuleContext<'_>,
) -> ResolutionResult<Option<Resolution>> {
    let pattern = Pattern::id(&ctx.table.immaculate_conception);
    match ctx.find(&pattern) {
        Some(feast) if ctx.is_sunday() => Ok(Some(Resolution::celebrate_one(feast.clone()))),
        _ => Ok(None),
    }
}

/// 闰年: 名义日庆祝节期条目，庆节顺延一日
///
/// 仅在名义日求值时生效；移入次日后不会再次触发
pub(super) fn leap_year_shift(
    ctx: &RuleContext<'_>,
    rule: Rule,
    feast: &LeapYearFeast,
) -> ResolutionResult<Option<Resolution>> {
    let moved = match ctx.find(&Pattern::id(&feast.id)) {
        Some(o) => o,
        None => return Ok(None),
    };
    if !is_leap_year(ctx.date.year()) || ctx.date.month() != 2 || ctx.date.day() != feast.nominal_day
    {
        return Ok(None);
    }

    let tempora = ctx.require_tempora(rule, &Pattern::Tempora)?;
    let target = ctx.date_in_year(2, feast.nominal_day + 1)?;
    Ok(Some(
        Resolution::celebrate_one(tempora.clone()).with_shift(target, vec![moved.clone()]),
    ))
}
