// ==========================================
// 礼仪年历 - 优先级常量表
// ==========================================
// 职责: 规则链使用的全部标识与模式常量
// 生命周期: 启动时构造一次（Default 或 JSON），以 Arc 显式传入规则链
// 红线: 运行期间不可变
// ==========================================

use crate::engine::matcher::Pattern;
use serde::{Deserialize, Serialize};

/// 闰年移动的固定庆节
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeapYearFeast {
    /// 庆节标识
    pub id: String,
    /// 名义日（2 月）
    pub nominal_day: u32,
}

/// 圣母周六弥撒（按礼仪时期区分）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarianSaturdayOffices {
    /// 将临期
    pub advent: String,
    /// 圣诞至献主节
    pub christmas: String,
    /// 献主节至圣周三
    pub purification: String,
    /// 复活期
    pub easter: String,
    /// 其余时期
    pub ordinary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecedenceTable {
    // ===== 圣诞 =====
    /// 圣诞子夜弥撒（多台弥撒的标志）
    pub nativity_vigil_mass: String,
    /// 圣诞多台弥撒共用前缀
    pub nativity_masses_prefix: String,
    /// 圣诞前夕 (12-24)
    pub nativity_vigil: String,

    // ===== 追思已亡 =====
    pub all_souls_first_mass: String,
    pub all_souls_masses_prefix: String,
    /// 主日时移动到的日期 (月, 日)
    pub all_souls_shift_to: (u32, u32),

    // ===== 圣母无染原罪 =====
    pub immaculate_conception: String,

    // ===== 闰年 =====
    pub st_matthias: LeapYearFeast,
    pub feb_27: LeapYearFeast,

    // ===== 主的庆节 =====
    /// 与圣家主日相遇的主的庆节 (01-13)
    pub lord_feast_fixed: String,
    /// 圣家主日
    pub lord_feast_sunday: String,
    /// 一、二等主的庆节
    pub feasts_of_the_lord: Vec<String>,

    // ===== 特权平日 =====
    /// 圣灰礼仪日、圣周各日等
    pub privileged_ferias: Vec<String>,

    // ===== 四季斋日与将临期平日 =====
    pub ember_days: Vec<String>,
    pub advent_feria_from_day: u32,
    pub advent_feria_to_day: u32,

    // ===== 圣母周六 =====
    pub marian_saturday: MarianSaturdayOffices,
    pub marian_saturday_priority: u32,
    /// 献主节 (月, 日)
    pub purification: (u32, u32),
    /// 圣周三
    pub holy_wednesday: String,
    /// 将临期第一主日
    pub first_sunday_of_advent: String,

    // ===== 一等庆节冲突 =====
    /// 寻找空闲日时视为"占用"的等级
    pub occupied_ranks: Vec<u8>,
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        let strings = |ids: &[&str]| ids.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            nativity_vigil_mass: "sancti:12-25m1:1".to_string(),
            nativity_masses_prefix: "sancti:12-25m".to_string(),
            nativity_vigil: "sancti:12-24:1".to_string(),

            all_souls_first_mass: "sancti:11-02m1:1".to_string(),
            all_souls_masses_prefix: "sancti:11-02m".to_string(),
            all_souls_shift_to: (11, 3),

            immaculate_conception: "sancti:12-08:1".to_string(),

            st_matthias: LeapYearFeast {
                id: "sancti:02-24:2".to_string(),
                nominal_day: 24,
            },
            feb_27: LeapYearFeast {
                id: "sancti:02-27:3".to_string(),
                nominal_day: 27,
            },

            lord_feast_fixed: "sancti:01-13:2".to_string(),
            lord_feast_sunday: "tempora:Epi1-0:2".to_string(),
            feasts_of_the_lord: strings(&[
                "sancti:01-01:1",
                "sancti:01-06:1",
                "sancti:01-13:2",
                "sancti:02-02:2",
                "sancti:07-01:1",
                "sancti:08-06:2",
                "sancti:09-14:2",
                "sancti:11-09:2",
                "sancti:12-25m1:1",
                "sancti:12-25m2:1",
                "sancti:12-25m3:1",
            ]),

            privileged_ferias: strings(&[
                "tempora:Quad6-1:1",
                "tempora:Quad6-2:1",
                "tempora:Quad6-3:1",
                "tempora:Quad6-4:1",
                "tempora:Quad6-5:1",
                "tempora:Quad6-6:1",
                "tempora:Pasc0-0:1",
                "tempora:Quadp3-3:1",
            ]),

            ember_days: strings(&[
                "tempora:Adv3-3:2",
                "tempora:Adv3-5:2",
                "tempora:Adv3-6:2",
                "tempora:Quad1-3:2",
                "tempora:Quad1-5:2",
                "tempora:Quad1-6:2",
                "tempora:Pasc7-3:1",
                "tempora:Pasc7-5:1",
                "tempora:Pasc7-6:1",
                "tempora:093-3:2",
                "tempora:093-5:2",
                "tempora:093-6:2",
            ]),
            advent_feria_from_day: 17,
            advent_feria_to_day: 23,

            marian_saturday: MarianSaturdayOffices {
                advent: "commune:C10a:4".to_string(),
                christmas: "commune:C10b:4".to_string(),
                purification: "commune:C10c:4".to_string(),
                easter: "commune:C10Pasc:4".to_string(),
                ordinary: "commune:C10t:4".to_string(),
            },
            marian_saturday_priority: 21,
            purification: (2, 2),
            holy_wednesday: "tempora:Quad6-3:1".to_string(),
            first_sunday_of_advent: "tempora:Adv1-0:1".to_string(),

            occupied_ranks: vec![1, 2],
        }
    }
}

impl PrecedenceTable {
    // ==========================================
    // 模式构造
    // ==========================================

    pub fn feasts_of_the_lord_pattern(&self) -> Pattern {
        Pattern::any_of_ids(&self.feasts_of_the_lord)
    }

    pub fn privileged_ferias_pattern(&self) -> Pattern {
        Pattern::any_of_ids(&self.privileged_ferias)
    }

    /// 四季斋日 + 将临期 17-23 日平日
    pub fn ember_or_advent_feria_pattern(&self) -> Pattern {
        let mut patterns: Vec<Pattern> = self.ember_days.iter().map(|id| Pattern::id(id)).collect();
        patterns.push(Pattern::AdventFeria {
            from_day: self.advent_feria_from_day,
            to_day: self.advent_feria_to_day,
        });
        Pattern::AnyOf(patterns)
    }

    /// 校验配置一致性
    pub fn validate(&self) -> Result<(), String> {
        if self.advent_feria_from_day > self.advent_feria_to_day
            || self.advent_feria_to_day > 31
            || self.advent_feria_from_day == 0
        {
            return Err(format!(
                "将临期平日区间无效: [{}, {}]",
                self.advent_feria_from_day, self.advent_feria_to_day
            ));
        }

        for feast in [&self.st_matthias, &self.feb_27] {
            if !(1..=28).contains(&feast.nominal_day) {
                return Err(format!(
                    "闰年庆节名义日无效: {} (day={})",
                    feast.id, feast.nominal_day
                ));
            }
        }

        // 平年校验，保证任何年份都存在该日期
        for (name, (month, day)) in [
            ("all_souls_shift_to", self.all_souls_shift_to),
            ("purification", self.purification),
        ] {
            if chrono::NaiveDate::from_ymd_opt(2001, month, day).is_none() {
                return Err(format!("{} 日期无效: {}-{}", name, month, day));
            }
        }

        if self.occupied_ranks.is_empty() {
            return Err("occupied_ranks 不能为空".to_string());
        }

        let ids = [
            &self.nativity_vigil_mass,
            &self.nativity_vigil,
            &self.all_souls_first_mass,
            &self.immaculate_conception,
            &self.lord_feast_fixed,
            &self.lord_feast_sunday,
            &self.holy_wednesday,
            &self.first_sunday_of_advent,
            &self.marian_saturday.advent,
            &self.marian_saturday.christmas,
            &self.marian_saturday.purification,
            &self.marian_saturday.easter,
            &self.marian_saturday.ordinary,
        ];
        let lists = self
            .feasts_of_the_lord
            .iter()
            .chain(self.privileged_ferias.iter())
            .chain(self.ember_days.iter());
        for id in ids.into_iter().chain(lists) {
            crate::domain::ObservanceId::parse(id).map_err(|e| e.to_string())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert_eq!(PrecedenceTable::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let table: PrecedenceTable =
            serde_json::from_str(r#"{"advent_feria_from_day": 16}"#).unwrap();
        assert_eq!(table.advent_feria_from_day, 16);
        assert_eq!(table.advent_feria_to_day, 23);
        assert_eq!(table.nativity_vigil_mass, "sancti:12-25m1:1");
    }

    #[test]
    fn test_validate_rejects_bad_window() {
        let table = PrecedenceTable {
            advent_feria_from_day: 24,
            advent_feria_to_day: 17,
            ..PrecedenceTable::default()
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_id() {
        let mut table = PrecedenceTable::default();
        table.ember_days.push("tempora:Adv3-3".to_string());
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_impossible_shift_date() {
        let table = PrecedenceTable {
            all_souls_shift_to: (11, 31),
            ..PrecedenceTable::default()
        };
        assert!(table.validate().is_err());
    }
}
