// ==========================================
// 礼仪年历 - 候选来源 Trait
// ==========================================
// 职责: 定义年历构建所需的两个外部协作者接口（不包含实现）
// 实现者: TemporaTable / SanctoralTable
// ==========================================

use crate::domain::Observance;
use crate::i18n::TextResolver;
use crate::importer::error::ImportResult;

/// 节期来源（随复活节移动的日期）
pub trait TemporaProvider {
    /// 返回给定年份的全部节期候选，顺序即节期定义顺序
    fn tempora(
        &self,
        year: i32,
        language: &str,
        texts: &dyn TextResolver,
    ) -> ImportResult<Vec<Observance>>;
}

/// 圣人历来源（固定日期）
pub trait SanctoralProvider {
    /// 返回给定年份的全部圣人历候选
    ///
    /// 年份用于闰年调整
    fn sanctoral(
        &self,
        year: i32,
        language: &str,
        texts: &dyn TextResolver,
    ) -> ImportResult<Vec<Observance>>;
}
