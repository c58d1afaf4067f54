// ==========================================
// 礼仪年历 - 圣人历表
// ==========================================
// 职责: 从 CSV 加载固定日期庆节，按年份生成候选
// 格式: id,month,day,priority
// 说明: 2 月 29 日的条目在平年跳过；闰年的日期调整由规则链完成
// ==========================================

use crate::domain::{Flexibility, Observance, ObservanceId};
use crate::i18n::TextResolver;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::provider::SanctoralProvider;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// 内置圣人历
const BUILTIN_TABLE: &str = include_str!("../../data/sanctoral.csv");

/// 闰年参考年份（用于校验月日组合）
const LEAP_REFERENCE_YEAR: i32 = 2000;

#[derive(Debug, Clone, Deserialize)]
struct SanctoralRow {
    id: String,
    month: u32,
    day: u32,
    priority: u32,
}

/// 圣人历条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanctoralEntry {
    pub id: String,
    pub month: u32,
    pub day: u32,
    pub priority: u32,
}

// ==========================================
// SanctoralTable - 圣人历表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SanctoralTable {
    entries: Vec<SanctoralEntry>,
}

impl SanctoralTable {
    /// 内置表
    pub fn builtin() -> ImportResult<Self> {
        Self::from_reader(BUILTIN_TABLE.as_bytes())
    }

    /// 从 CSV 文件加载
    pub fn from_path(path: &Path) -> ImportResult<Self> {
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        info!(path = %path.display(), entries = table.len(), "圣人历加载完成");
        Ok(table)
    }

    /// 从任意 CSV 输入加载
    ///
    /// 行号从 1 开始（不含表头）
    pub fn from_reader<R: Read>(reader: R) -> ImportResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (index, record) in reader.deserialize::<SanctoralRow>().enumerate() {
            let row = index + 1;
            let record = record?;

            let parsed = ObservanceId::parse(&record.id)
                .map_err(|source| ImportError::InvalidId { row, source })?;
            if parsed.flexibility != Flexibility::Sancti {
                return Err(ImportError::FlexibilityMismatch {
                    row,
                    expected: Flexibility::Sancti.to_string(),
                    id: record.id,
                });
            }

            if NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, record.month, record.day).is_none() {
                return Err(ImportError::InvalidDate {
                    row,
                    value: format!("{:02}-{:02}", record.month, record.day),
                });
            }

            entries.push(SanctoralEntry {
                id: record.id,
                month: record.month,
                day: record.day,
                priority: record.priority,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SanctoralEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SanctoralProvider for SanctoralTable {
    fn sanctoral(
        &self,
        year: i32,
        language: &str,
        texts: &dyn TextResolver,
    ) -> ImportResult<Vec<Observance>> {
        let mut observances = Vec::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            let date = match NaiveDate::from_ymd_opt(year, entry.month, entry.day) {
                Some(date) => date,
                None => {
                    debug!(id = %entry.id, year, "平年跳过 2 月 29 日条目");
                    continue;
                }
            };
            let title = texts.title(&entry.id, language);
            let observance = Observance::new(&entry.id, date, entry.priority, language, title)
                .map_err(|source| ImportError::InvalidId {
                    row: index + 1,
                    source,
                })?;
            observances.push(observance);
        }
        Ok(observances)
    }
}
