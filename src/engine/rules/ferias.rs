// ==========================================
// 二等主日 / 特权平日 / 四季斋日与将临期平日
// ==========================================

use super::{Rule, RuleContext};
use crate::domain::Resolution;
use crate::engine::error::ResolutionResult;
use crate::engine::matcher::Pattern;

fn second_class_sancti() -> Pattern {
    Pattern::SanctiOfRank(vec![2])
}

/// 二等主日与二等圣人庆节相遇: 主日庆祝，庆节纪念
pub(super) fn second_class_sunday(ctx: &RuleContext<'_>) -> ResolutionResult<Option<Resolution>> {
    let sunday = match ctx.find(&Pattern::TemporaSundayOfRank(2)) {
        Some(o) => o,
        None => return Ok(None),
    };
    let feast = match ctx.find(&second_class_sancti()) {
        Some(o) => o,
        None => return Ok(None),
    };
    Ok(Some(
        Resolution::celebrate_one(sunday.clone()).with_commemoration(vec![feast.clone()]),
    ))
}

/// 圣灰礼仪日、圣周各日、复活后第一主日: 节期条目总是庆节
pub(super) fn privileged_feria(ctx: &RuleContext<'_>) -> ResolutionResult<Option<Resolution>> {
    if !ctx.has(&ctx.table.privileged_ferias_pattern()) {
        return Ok(None);
    }
    let tempora = ctx.require(Rule::PrivilegedFeria, &Pattern::Tempora)?;
    Ok(Some(Resolution::celebrate_one(tempora.clone())))
}

/// 四季斋日或将临期 17-23 日平日遇二等圣人庆节: 庆节庆祝，平日纪念
pub(super) fn second_class_feast_over_feria(
    ctx: &RuleContext<'_>,
) -> ResolutionResult<Option<Resolution>> {
    let feria = match ctx.find(&ctx.table.ember_or_advent_feria_pattern()) {
        Some(o) => o,
        None => return Ok(None),
    };
    let feast = match ctx.find(&second_class_sancti()) {
        Some(o) => o,
        None => return Ok(None),
    };
    Ok(Some(
        Resolution::celebrate_one(feast.clone()).with_commemoration(vec![feria.clone()]),
    ))
}
