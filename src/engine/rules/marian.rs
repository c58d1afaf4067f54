// ==========================================
// 圣母周六
// ==========================================
// 周六候选为空或仅有四等条目时，合成当季圣母日课
// 时期: 将临期 / 圣诞至献主节 / 献主节至圣周三 / 复活期 / 其余
// ==========================================

use super::RuleContext;
use crate::config::PrecedenceTable;
use crate::domain::{Flexibility, Observance, Resolution, Season};
use crate::engine::error::{ResolutionError, ResolutionResult};
use crate::engine::matcher::{self, Pattern};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use tracing::debug;

pub(super) fn marian_saturday(ctx: &RuleContext<'_>) -> ResolutionResult<Option<Resolution>> {
    if !ctx.is_saturday() {
        return Ok(None);
    }
    let ranks: BTreeSet<u8> = ctx.observances.iter().map(|o| o.rank).collect();
    if !(ranks.is_empty() || (ranks.len() == 1 && ranks.contains(&4))) {
        return Ok(None);
    }

    let office_id = office_for_period(ctx)?;
    let title = ctx.texts.title(office_id, ctx.language);
    let office = Observance::new(
        office_id,
        ctx.date,
        ctx.table.marian_saturday_priority,
        ctx.language,
        title,
    )?;
    debug!(date = %ctx.date, office = %office.id, "合成圣母周六日课");

    let commemoration: Vec<Observance> = ctx
        .observances
        .iter()
        .filter(|o| o.flexibility == Flexibility::Sancti)
        .take(1)
        .cloned()
        .collect();
    Ok(Some(
        Resolution::celebrate_one(office).with_commemoration(commemoration),
    ))
}

fn office_for_period<'a>(ctx: &RuleContext<'a>) -> ResolutionResult<&'a str> {
    let table: &'a PrecedenceTable = ctx.table;
    let offices = &table.marian_saturday;

    if in_advent(ctx) {
        return Ok(offices.advent.as_str());
    }

    let (month, day) = ctx.table.purification;
    let purification = ctx.date_in_year(month, day)?;
    let nativity = ctx.date_in_year(12, 25)?;
    if ctx.date >= nativity || ctx.date < purification {
        return Ok(offices.christmas.as_str());
    }

    let holy_wednesday = ctx
        .calendar
        .find_day(&Pattern::id(&ctx.table.holy_wednesday))
        .ok_or_else(|| ResolutionError::MissingLandmark {
            year: ctx.date.year(),
            id: ctx.table.holy_wednesday.clone(),
        })?;
    if ctx.date < holy_wednesday {
        return Ok(offices.purification.as_str());
    }

    if matcher::matches(ctx.tempora, &Pattern::Season(Season::Easter)) {
        return Ok(offices.easter.as_str());
    }

    Ok(offices.ordinary.as_str())
}

/// 当日节期条目属将临期，或日期落在将临期第一主日至 12 月 24 日之间
///
/// 后者覆盖没有任何节期条目的将临期周六
fn in_advent(ctx: &RuleContext<'_>) -> bool {
    if matcher::matches(ctx.tempora, &Pattern::Season(Season::Advent)) {
        return true;
    }
    let first_sunday = ctx
        .calendar
        .find_day(&Pattern::id(&ctx.table.first_sunday_of_advent));
    match (first_sunday, NaiveDate::from_ymd_opt(ctx.date.year(), 12, 24)) {
        (Some(start), Some(end)) => start <= ctx.date && ctx.date <= end,
        _ => false,
    }
}
