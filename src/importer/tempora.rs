// ==========================================
// 礼仪年历 - 节期表
// ==========================================
// 职责: 从 CSV 加载已排定日期的节期条目，按年份筛选
// 格式: id,date,priority  (date = YYYY-MM-DD)
// 说明: 复活节及各节期日期由外部推算后以数据形式提供
// 红线: 保持文件中的行顺序（即节期定义顺序）
// ==========================================

use crate::domain::{Flexibility, Observance, ObservanceId};
use crate::i18n::TextResolver;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::provider::TemporaProvider;
use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
struct TemporaRow {
    id: String,
    date: String,
    priority: u32,
}

/// 节期条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporaEntry {
    pub id: String,
    pub date: NaiveDate,
    pub priority: u32,
}

// ==========================================
// TemporaTable - 节期表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct TemporaTable {
    entries: Vec<TemporaEntry>,
}

impl TemporaTable {
    pub fn from_path(path: &Path) -> ImportResult<Self> {
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        info!(path = %path.display(), entries = table.len(), "节期表加载完成");
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> ImportResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (index, record) in reader.deserialize::<TemporaRow>().enumerate() {
            let row = index + 1;
            let record = record?;

            let parsed = ObservanceId::parse(&record.id)
                .map_err(|source| ImportError::InvalidId { row, source })?;
            if parsed.flexibility != Flexibility::Tempora {
                return Err(ImportError::FlexibilityMismatch {
                    row,
                    expected: Flexibility::Tempora.to_string(),
                    id: record.id,
                });
            }

            let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|_| {
                ImportError::InvalidDate {
                    row,
                    value: record.date.clone(),
                }
            })?;

            entries.push(TemporaEntry {
                id: record.id,
                date,
                priority: record.priority,
            });
        }

        Ok(Self { entries })
    }

    /// 直接由条目构造（测试及程序化构建使用）
    pub fn from_entries(entries: Vec<TemporaEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TemporaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TemporaProvider for TemporaTable {
    fn tempora(
        &self,
        year: i32,
        language: &str,
        texts: &dyn TextResolver,
    ) -> ImportResult<Vec<Observance>> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.date.year() == year)
            .map(|(index, entry)| {
                let title = texts.title(&entry.id, language);
                Observance::new(&entry.id, entry.date, entry.priority, language, title).map_err(
                    |source| ImportError::InvalidId {
                        row: index + 1,
                        source,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleTexts;

    const SAMPLE: &str = "\
id,date,priority
tempora:Epi1-0:2,2019-01-13,14
tempora:Epi1-0a:2,2019-01-13,13
tempora:Adv1-0:1,2019-12-01,6
tempora:Adv1-0:1,2020-11-29,6
";

    #[test]
    fn test_filter_by_year_keeps_order() {
        let table = TemporaTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);

        let tempora = table.tempora(2019, "la", &LocaleTexts::new()).unwrap();
        let ids: Vec<&str> = tempora.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["tempora:Epi1-0:2", "tempora:Epi1-0a:2", "tempora:Adv1-0:1"]
        );
        assert_eq!(tempora[0].title, "Sanctae Familiae Iesu Mariae Ioseph");
    }

    #[test]
    fn test_rejects_bad_date() {
        let csv = "id,date,priority\ntempora:Adv1-0:1,2019-13-01,6\n";
        let err = TemporaTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::InvalidDate { row: 1, .. }));
    }

    #[test]
    fn test_rejects_sancti_id() {
        let csv = "id,date,priority\nsancti:12-08:1,2019-12-08,5\n";
        let err = TemporaTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::FlexibilityMismatch { .. }));
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let csv = "id,date\ntempora:Adv1-0:1,2019-12-01\n";
        let err = TemporaTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::CsvParseError(_)));
    }
}
