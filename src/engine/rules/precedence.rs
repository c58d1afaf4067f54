// ==========================================
// 默认优先规则（总是命中）
// ==========================================
// 排序键: (priority, rank, flexibility) 升序
// 第一名庆祝；第二名纪念，除非第一名是节期主日或第二名就是当日默认节期条目
// ==========================================

use super::RuleContext;
use crate::domain::{Observance, Resolution};
use crate::engine::error::ResolutionResult;

pub(super) fn precedence(ctx: &RuleContext<'_>) -> ResolutionResult<Option<Resolution>> {
    let resolution = match ctx.observances {
        [] => Resolution::default(),
        [only] => Resolution::celebrate_one(only.clone()),
        _ => {
            let mut sorted: Vec<&Observance> = ctx.observances.iter().collect();
            sorted.sort_by_key(|o| o.precedence_key());
            let (first, second) = (sorted[0], sorted[1]);

            let second_is_default_tempora = ctx
                .tempora
                .first()
                .map(|t| t.id == second.id)
                .unwrap_or(false);
            if first.is_tempora_sunday() || second_is_default_tempora {
                Resolution::celebrate_one(first.clone())
            } else {
                Resolution::celebrate_one(first.clone()).with_commemoration(vec![second.clone()])
            }
        }
    };
    Ok(Some(resolution))
}
