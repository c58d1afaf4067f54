// ==========================================
// 礼仪年历 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 日期属性 (Flexibility)
// ==========================================
// 排序: Commune < Sancti < Tempora（默认优先规则的第三排序键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flexibility {
    Commune, // 通用弥撒（由规则合成）
    Sancti,  // 圣人历（固定日期）
    Tempora, // 节期（随复活节移动）
}

impl Flexibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flexibility::Commune => "commune",
            Flexibility::Sancti => "sancti",
            Flexibility::Tempora => "tempora",
        }
    }
}

impl fmt::Display for Flexibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flexibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commune" => Ok(Flexibility::Commune),
            "sancti" => Ok(Flexibility::Sancti),
            "tempora" => Ok(Flexibility::Tempora),
            other => Err(format!("未知日期属性: {}", other)),
        }
    }
}

// ==========================================
// 礼仪季节 (Season)
// ==========================================
// 由节期标识前缀判定，例如 "Adv1-0" -> Advent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Advent,        // 将临期
    Christmas,     // 圣诞期
    Epiphany,      // 主显后
    Septuagesima,  // 预备四旬期
    Lent,          // 四旬期
    Easter,        // 复活期
    Pentecost,     // 圣神降临后
}

impl Season {
    /// 从节期 key 前缀识别季节
    ///
    /// 注意 "Quadp" 必须先于 "Quad" 判定
    pub fn from_tempora_key(key: &str) -> Option<Season> {
        const PREFIXES: [(&str, Season); 7] = [
            ("Adv", Season::Advent),
            ("Nat", Season::Christmas),
            ("Epi", Season::Epiphany),
            ("Quadp", Season::Septuagesima),
            ("Quad", Season::Lent),
            ("Pasc", Season::Easter),
            ("Pent", Season::Pentecost),
        ];
        PREFIXES
            .iter()
            .find(|(prefix, _)| key.starts_with(prefix))
            .map(|(_, season)| *season)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Season::Advent => "advent",
            Season::Christmas => "christmas",
            Season::Epiphany => "epiphany",
            Season::Septuagesima => "septuagesima",
            Season::Lent => "lent",
            Season::Easter => "easter",
            Season::Pentecost => "pentecost",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexibility_order_matches_tie_break() {
        assert!(Flexibility::Commune < Flexibility::Sancti);
        assert!(Flexibility::Sancti < Flexibility::Tempora);
    }

    #[test]
    fn test_flexibility_from_str() {
        assert_eq!("sancti".parse::<Flexibility>(), Ok(Flexibility::Sancti));
        assert!("votive".parse::<Flexibility>().is_err());
    }

    #[test]
    fn test_season_prefix_resolution() {
        assert_eq!(Season::from_tempora_key("Adv4-0"), Some(Season::Advent));
        assert_eq!(Season::from_tempora_key("Quadp3-3"), Some(Season::Septuagesima));
        assert_eq!(Season::from_tempora_key("Quad6-3"), Some(Season::Lent));
        assert_eq!(Season::from_tempora_key("Pasc0-0"), Some(Season::Easter));
        assert_eq!(Season::from_tempora_key("093-3"), None);
    }
}
