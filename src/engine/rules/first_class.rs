// ==========================================
// 一等庆节与主的庆节
// ==========================================

use super::{Rule, RuleContext};
use crate::domain::{Observance, Resolution};
use crate::engine::error::{ResolutionError, ResolutionResult};
use crate::engine::matcher::Pattern;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// 多个一等庆节: priority 较小者庆祝，另一个移至之后第一个无一、二等候选的日子
pub(super) fn conflicting_first_class_feasts(
    ctx: &RuleContext<'_>,
) -> ResolutionResult<Option<Resolution>> {
    let mut first_class: Vec<&Observance> =
        ctx.observances.iter().filter(|o| o.rank == 1).collect();
    if first_class.len() < 2 {
        return Ok(None);
    }
    // 稳定排序，priority 相同保持候选顺序
    first_class.sort_by_key(|o| o.priority);
    let (celebration, displaced) = (first_class[0], first_class[1]);

    let target = next_free_day(ctx, displaced)?;
    debug!(
        date = %ctx.date,
        celebration = %celebration.id,
        displaced = %displaced.id,
        %target,
        "一等庆节冲突，顺延"
    );
    Ok(Some(
        Resolution::celebrate_one(celebration.clone()).with_shift(target, vec![displaced.clone()]),
    ))
}

/// 从次日起逐日向前搜索，检查尚未裁决的候选集合
fn next_free_day(ctx: &RuleContext<'_>, displaced: &Observance) -> ResolutionResult<NaiveDate> {
    let year = ctx.date.year();
    let mut candidate = ctx.date;
    while let Some(next) = candidate.succ_opt() {
        if next.year() != year {
            break;
        }
        candidate = next;
        let occupied = ctx
            .calendar
            .get_day(candidate)
            .map(|day| day.has_any_rank(&ctx.table.occupied_ranks))
            .unwrap_or(true);
        if !occupied {
            return Ok(candidate);
        }
    }
    Err(ResolutionError::NoFreeDay {
        origin: ctx.date,
        observance: displaced.id.clone(),
    })
}

/// 主的庆节 (01-13) 与圣家主日相遇: 庆祝圣家主日，不作纪念
pub(super) fn lord_feast_over_sunday(ctx: &RuleContext<'_>) -> ResolutionResult<Option<Resolution>> {
    if !ctx.has(&Pattern::id(&ctx.table.lord_feast_fixed)) {
        return Ok(None);
    }
    match ctx.find(&Pattern::id(&ctx.table.lord_feast_sunday)) {
        Some(sunday) => Ok(Some(Resolution::celebrate_one(sunday.clone()))),
        None => Ok(None),
    }
}

/// 一、二等主的庆节取代二等主日，不作纪念
pub(super) fn lord_feast_over_second_class_sunday(
    ctx: &RuleContext<'_>,
) -> ResolutionResult<Option<Resolution>> {
    let lord_feast = match ctx.find(&ctx.table.feasts_of_the_lord_pattern()) {
        Some(o) => o,
        None => return Ok(None),
    };
    if !ctx.has(&Pattern::TemporaSundayOfRank(2)) {
        return Ok(None);
    }
    Ok(Some(Resolution::celebrate_one(lord_feast.clone())))
}

/// 存在一等候选: priority 最小的一等候选庆祝，不作纪念
pub(super) fn first_class_feast(ctx: &RuleContext<'_>) -> ResolutionResult<Option<Resolution>> {
    let pattern = Pattern::Rank(1);
    if !ctx.has(&pattern) {
        return Ok(None);
    }
    let feast = ctx
        .observances
        .iter()
        .filter(|o| pattern.is_match(o))
        .min_by_key(|o| o.priority);
    match feast {
        Some(feast) => Ok(Some(Resolution::celebrate_one(feast.clone()))),
        None => Err(ResolutionError::PatternInvariant {
            date: ctx.date,
            rule: Rule::FirstClassFeast,
            pattern: format!("{:?}", pattern),
        }),
    }
}
