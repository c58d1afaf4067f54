// ==========================================
// 礼仪年历 - 裁决驱动
// ==========================================
// 职责: 按时间顺序逐日执行规则链，并把移动指令写入目标日
// 输入: YearCalendar（所有权转移进来，裁决期间独占）
// 输出: ResolvedYear
// ==========================================
// 红线: 必须按 1/1 -> 12/31 单调顺序处理；移动只能写入尚未裁决的日期
// 红线: 单遍完成，无回溯、无不动点迭代
// ==========================================

use crate::config::PrecedenceTable;
use crate::domain::{ResolvedDay, ResolvedYear};
use crate::engine::calendar::YearCalendar;
use crate::engine::error::ResolutionResult;
use crate::engine::rules::{self, RuleContext};
use crate::i18n::TextResolver;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct Resolver {
    table: Arc<PrecedenceTable>,
    texts: Arc<dyn TextResolver>,
}

impl Resolver {
    pub fn new(table: Arc<PrecedenceTable>, texts: Arc<dyn TextResolver>) -> Self {
        Self { table, texts }
    }

    pub fn table(&self) -> &PrecedenceTable {
        &self.table
    }

    /// 裁决一整年
    ///
    /// # 参数
    /// - calendar: 已放入全部候选的年历
    /// - language: 合成候选使用的语言
    ///
    /// # 返回
    /// 每日一条 ResolvedDay；任一日失败即整年失败
    #[instrument(skip(self, calendar), fields(year = calendar.year(), language = %language))]
    pub fn resolve(
        &self,
        mut calendar: YearCalendar,
        language: &str,
    ) -> ResolutionResult<ResolvedYear> {
        let year = calendar.year();
        let mut days = Vec::with_capacity(calendar.len());
        let mut shift_count = 0usize;

        for index in 0..calendar.len() {
            // 取当日候选的快照，规则求值期间年历只读
            let (date, tempora, observances) = {
                let day = &calendar.days()[index];
                (day.date, day.tempora.clone(), day.all.clone())
            };

            let (rule, resolution) = {
                let ctx = RuleContext {
                    calendar: &calendar,
                    date,
                    tempora: &tempora,
                    observances: &observances,
                    language,
                    table: &self.table,
                    texts: self.texts.as_ref(),
                };
                rules::evaluate(&ctx).map_err(|e| {
                    warn!(%date, error = %e, "单日裁决失败");
                    e
                })?
            };

            debug!(
                %date,
                %rule,
                celebration = ?resolution.celebration.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
                commemoration = ?resolution.commemoration.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
                "裁决完成"
            );

            for shift in resolution.shifts {
                shift_count += 1;
                calendar.apply_shift(date, shift.target, shift.observances)?;
            }

            days.push(ResolvedDay {
                date,
                tempora,
                celebration: resolution.celebration,
                commemoration: resolution.commemoration,
                rule,
            });
        }

        let bare_weekdays = days.iter().filter(|d| d.is_bare_weekday()).count();
        info!(
            days = days.len(),
            shifts = shift_count,
            bare_weekdays,
            "全年裁决完成"
        );

        Ok(ResolvedYear { year, days })
    }
}
