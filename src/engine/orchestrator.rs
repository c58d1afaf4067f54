// ==========================================
// 礼仪年历 - 编排器
// ==========================================
// 用途: 协调 候选来源 -> 年历构建 -> 全年裁决
// ==========================================

use crate::config::KalendarConfig;
use crate::domain::ResolvedYear;
use crate::engine::calendar::YearCalendar;
use crate::engine::resolver::Resolver;
use crate::error::KalendarError;
use crate::i18n::{LocaleTexts, TextResolver};
use crate::importer::{SanctoralProvider, SanctoralTable, TemporaProvider};
use std::sync::Arc;
use tracing::{info, instrument};

// ==========================================
// KalendarOrchestrator - 编排器
// ==========================================

pub struct KalendarOrchestrator {
    language: String,
    tempora: Arc<dyn TemporaProvider + Send + Sync>,
    sanctoral: Arc<dyn SanctoralProvider + Send + Sync>,
    texts: Arc<dyn TextResolver>,
    resolver: Resolver,
}

impl KalendarOrchestrator {
    /// 创建编排器
    ///
    /// # 参数
    /// - config: 运行配置（语言 + 优先级常量表）
    /// - tempora: 节期来源
    /// - sanctoral: 圣人历来源
    /// - texts: 显示文本解析器
    pub fn new(
        config: &KalendarConfig,
        tempora: Arc<dyn TemporaProvider + Send + Sync>,
        sanctoral: Arc<dyn SanctoralProvider + Send + Sync>,
        texts: Arc<dyn TextResolver>,
    ) -> Self {
        let resolver = Resolver::new(Arc::new(config.precedence.clone()), texts.clone());
        Self {
            language: config.language.clone(),
            tempora,
            sanctoral,
            texts,
            resolver,
        }
    }

    /// 由配置创建编排器
    ///
    /// 圣人历取配置中的 CSV 路径，未配置时使用内置表；文本使用 rust-i18n 语言包
    pub fn from_config(
        config: &KalendarConfig,
        tempora: Arc<dyn TemporaProvider + Send + Sync>,
    ) -> Result<Self, KalendarError> {
        config.validate()?;
        let sanctoral = match &config.sanctoral_table {
            Some(path) => SanctoralTable::from_path(path)?,
            None => SanctoralTable::builtin()?,
        };
        Ok(Self::new(
            config,
            tempora,
            Arc::new(sanctoral),
            Arc::new(LocaleTexts::new()),
        ))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// 构建年历（未裁决）
    pub fn build_calendar(&self, year: i32) -> Result<YearCalendar, KalendarError> {
        let calendar = YearCalendar::build(
            year,
            &self.language,
            self.tempora.as_ref(),
            self.sanctoral.as_ref(),
            self.texts.as_ref(),
        )?;
        Ok(calendar)
    }

    /// 构建并裁决一整年
    #[instrument(skip(self), fields(language = %self.language))]
    pub fn resolve_year(&self, year: i32) -> Result<ResolvedYear, KalendarError> {
        info!(year, "开始裁决");
        let calendar = self.build_calendar(year)?;
        let resolved = self.resolver.resolve(calendar, &self.language)?;
        Ok(resolved)
    }

    /// 依次裁决多个年份（各年年历互不共享）
    pub fn resolve_years(
        &self,
        years: impl IntoIterator<Item = i32>,
    ) -> Result<Vec<ResolvedYear>, KalendarError> {
        years.into_iter().map(|year| self.resolve_year(year)).collect()
    }
}
