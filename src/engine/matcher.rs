// ==========================================
// 礼仪年历 - 候选匹配器
// ==========================================
// 职责: 判断候选是否满足给定模式
// 输入: 候选列表 + 模式
// 输出: 按输入顺序第一个满足条件的候选
// 红线: 纯函数，必须保持输入迭代顺序（部分规则依赖"默认"节期条目）
// ==========================================

use crate::domain::types::{Flexibility, Season};
use crate::domain::Observance;
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

// ==========================================
// Pattern - 匹配模式
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Pattern {
    /// 完整标识
    Id(String),

    /// 标识前缀（多台弥撒共用前缀，如 "sancti:12-25m"）
    IdPrefix(String),

    /// 任一子模式
    AnyOf(Vec<Pattern>),

    /// 等级相等
    Rank(u8),

    /// 任一节期条目
    Tempora,

    /// 节期主日
    TemporaSunday,

    /// 指定等级的节期主日
    TemporaSundayOfRank(u8),

    /// 等级属于给定集合的圣人历条目
    SanctiOfRank(Vec<u8>),

    /// 指定季节的节期条目
    Season(Season),

    /// 将临期平日且落在 12 月 [from_day, to_day] 区间
    AdventFeria { from_day: u32, to_day: u32 },
}

impl Pattern {
    pub fn id(id: &str) -> Self {
        Pattern::Id(id.to_string())
    }

    /// 由标识列表构造 AnyOf
    pub fn any_of_ids<S: AsRef<str>>(ids: &[S]) -> Self {
        Pattern::AnyOf(ids.iter().map(|s| Pattern::id(s.as_ref())).collect())
    }

    /// 单个候选是否满足模式
    pub fn is_match(&self, observance: &Observance) -> bool {
        match self {
            Pattern::Id(id) => observance.id == *id,
            Pattern::IdPrefix(prefix) => observance.id.starts_with(prefix.as_str()),
            Pattern::AnyOf(patterns) => patterns.iter().any(|p| p.is_match(observance)),
            Pattern::Rank(rank) => observance.rank == *rank,
            Pattern::Tempora => observance.is_tempora(),
            Pattern::TemporaSunday => observance.is_tempora_sunday(),
            Pattern::TemporaSundayOfRank(rank) => {
                observance.is_tempora_sunday() && observance.rank == *rank
            }
            Pattern::SanctiOfRank(ranks) => {
                observance.flexibility == Flexibility::Sancti && ranks.contains(&observance.rank)
            }
            Pattern::Season(season) => observance.season() == Some(*season),
            Pattern::AdventFeria { from_day, to_day } => {
                observance.season() == Some(Season::Advent)
                    && observance.date.weekday() != Weekday::Sun
                    && observance.date.month() == 12
                    && (*from_day..=*to_day).contains(&observance.date.day())
            }
        }
    }
}

/// 返回第一个满足模式的候选（按候选列表顺序）
pub fn find<'a>(candidates: &'a [Observance], pattern: &Pattern) -> Option<&'a Observance> {
    candidates.iter().find(|o| pattern.is_match(o))
}

/// 候选列表中是否存在满足模式的条目
pub fn matches(candidates: &[Observance], pattern: &Pattern) -> bool {
    find(candidates, pattern).is_some()
}

/// 返回全部满足模式的候选（保持顺序）
pub fn find_all<'a>(candidates: &'a [Observance], pattern: &Pattern) -> Vec<&'a Observance> {
    candidates.iter().filter(|o| pattern.is_match(o)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(id: &str, y: i32, m: u32, d: u32) -> Observance {
        Observance::new(id, NaiveDate::from_ymd_opt(y, m, d).unwrap(), 10, "la", String::new())
            .unwrap()
    }

    #[test]
    fn test_id_and_prefix() {
        let list = vec![
            obs("sancti:12-25m1:1", 2024, 12, 25),
            obs("sancti:12-25m2:1", 2024, 12, 25),
        ];
        assert!(matches(&list, &Pattern::id("sancti:12-25m2:1")));
        assert!(!matches(&list, &Pattern::id("sancti:12-25:1")));
        assert_eq!(
            find_all(&list, &Pattern::IdPrefix("sancti:12-25m".into())).len(),
            2
        );
    }

    #[test]
    fn test_first_match_follows_candidate_order() {
        // 两个节期条目，期望返回第一个（"默认"节期条目）
        let list = vec![
            obs("sancti:01-13:2", 2019, 1, 13),
            obs("tempora:Epi1-0:2", 2019, 1, 13),
            obs("tempora:Epi1-0a:2", 2019, 1, 13),
        ];
        let found = find(&list, &Pattern::Tempora).unwrap();
        assert_eq!(found.id, "tempora:Epi1-0:2");

        // AnyOf 的子模式顺序不影响返回结果，只看候选顺序
        let pattern = Pattern::AnyOf(vec![
            Pattern::id("tempora:Epi1-0a:2"),
            Pattern::id("sancti:01-13:2"),
        ]);
        assert_eq!(find(&list, &pattern).unwrap().id, "sancti:01-13:2");
    }

    #[test]
    fn test_structural_predicates() {
        let list = vec![
            obs("tempora:Pent05-0:2", 2024, 6, 23),
            obs("sancti:06-23:2", 2024, 6, 23),
        ];
        assert!(matches(&list, &Pattern::TemporaSunday));
        assert!(matches(&list, &Pattern::TemporaSundayOfRank(2)));
        assert!(!matches(&list, &Pattern::TemporaSundayOfRank(1)));
        assert_eq!(
            find(&list, &Pattern::SanctiOfRank(vec![1, 2])).unwrap().id,
            "sancti:06-23:2"
        );
        assert!(matches(&list, &Pattern::Rank(2)));
        assert!(!matches(&list, &Pattern::Rank(1)));
        assert!(matches(&list, &Pattern::Season(Season::Pentecost)));
    }

    #[test]
    fn test_advent_feria_window() {
        let pattern = Pattern::AdventFeria { from_day: 17, to_day: 23 };

        // 2024-12-18 周三
        assert!(pattern.is_match(&obs("tempora:Adv3-3:2", 2024, 12, 18)));
        // 2024-12-16 周一，区间外
        assert!(!pattern.is_match(&obs("tempora:Adv3-1:3", 2024, 12, 16)));
        // 2024-12-22 主日
        assert!(!pattern.is_match(&obs("tempora:Adv4-0:1", 2024, 12, 22)));
        // 圣人历条目不算
        assert!(!pattern.is_match(&obs("sancti:12-21:2", 2024, 12, 21)));
    }

    #[test]
    fn test_empty_candidates() {
        assert!(find(&[], &Pattern::Tempora).is_none());
        assert!(!matches(&[], &Pattern::AnyOf(vec![])));
    }

    #[test]
    fn test_pattern_serde_shape() {
        let pattern = Pattern::AnyOf(vec![Pattern::id("tempora:Adv3-3:2"), Pattern::Rank(1)]);
        let json = serde_json::to_string(&pattern).unwrap();
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);

        let parsed: Pattern =
            serde_json::from_str(r#"{"kind":"advent_feria","value":{"from_day":17,"to_day":23}}"#)
                .unwrap();
        assert_eq!(parsed, Pattern::AdventFeria { from_day: 17, to_day: 23 });
    }
}
