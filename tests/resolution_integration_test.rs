// ==========================================
// 全年裁决集成测试
// ==========================================
// 职责: 验证 来源 -> 年历 -> 规则链 -> 裁决驱动 的完整流程
// 数据: 内置圣人历 + 节期夹具
// ==========================================


use missal_kalendar::engine::days_in_year;
use missal_kalendar::{Rule, RULE_CHAIN};
use test_helpers::{date, ids, orchestrator, resolve};

// ==========================================
// 全年不变量
// ==========================================

#[test]
fn test_every_day_resolved_in_chronological_order() {
    missal_kalendar::logging::init_test();

    for year in [2023, 2024] {
        let resolved = resolve(year);
        assert_eq!(resolved.year, year);
        assert_eq!(resolved.len() as u32, days_in_year(year));
        assert_eq!(resolved.days[0].date, date(year, 1, 1));
        assert!(resolved.days.windows(2).all(|w| w[0].date < w[1].date));
        assert!(resolved.iter().all(|d| RULE_CHAIN.contains(&d.rule)));
    }
}

#[test]
fn test_resolution_is_deterministic() {
    assert_eq!(resolve(2024), resolve(2024));
}

#[test]
fn test_years_resolve_independently_in_parallel() {
    let orchestrator = orchestrator();
    let (a, b) = std::thread::scope(|s| {
        let a = s.spawn(|| orchestrator.resolve_year(2023));
        let b = s.spawn(|| orchestrator.resolve_year(2024));
        (a.join().unwrap(), b.join().unwrap())
    });
    assert_eq!(a.unwrap(), resolve(2023));
    assert_eq!(b.unwrap(), resolve(2024));
}

#[test]
fn test_celebration_and_commemoration_never_overlap() {
    let resolved = resolve(2024);
    for day in resolved.iter() {
        for c in &day.commemoration {
            assert!(
                !day.celebration.iter().any(|o| o.id == c.id),
                "{} 同时为庆节与纪念",
                day.date
            );
        }
    }
}

// ==========================================
// 场景
// ==========================================

#[test]
fn test_annunciation_in_holy_week_moves_after_low_sunday() {
    let resolved = resolve(2024);

    let monday = resolved.get(date(2024, 3, 25)).unwrap();
    assert_eq!(monday.rule, Rule::ConflictingFirstClassFeasts);
    assert_eq!(monday.celebration_id(), Some("tempora:Quad6-1:1"));

    // 圣周与复活八日庆期均为一等，首个空闲日为 4 月 8 日
    let target = resolved.get(date(2024, 4, 8)).unwrap();
    assert_eq!(target.celebration_id(), Some("sancti:03-25:1"));
    assert_eq!(target.rule, Rule::FirstClassFeast);
}

#[test]
fn test_st_matthias_in_leap_and_common_year() {
    let leap = resolve(2024);
    let feb_24 = leap.get(date(2024, 2, 24)).unwrap();
    assert_eq!(feb_24.rule, Rule::StMatthiasInLeapYear);
    assert_eq!(feb_24.celebration_id(), Some("tempora:Quad1-6:2"));
    // 移入 2 月 25 日后遇四旬期第二主日（一等）
    let feb_25 = leap.get(date(2024, 2, 25)).unwrap();
    assert_eq!(feb_25.celebration_id(), Some("tempora:Quad2-0:1"));

    let common = resolve(2023);
    let feb_24 = common.get(date(2023, 2, 24)).unwrap();
    assert_eq!(feb_24.celebration_id(), Some("sancti:02-24:2"));
    assert!(feb_24.commemoration.is_empty());
}

#[test]
fn test_feb_27_moves_in_leap_year() {
    let resolved = resolve(2024);
    assert_eq!(
        resolved.get(date(2024, 2, 27)).unwrap().celebration_id(),
        Some("tempora:Quad2-2:3")
    );
    assert_eq!(
        resolved.get(date(2024, 2, 28)).unwrap().celebration_id(),
        Some("sancti:02-27:3")
    );
}

#[test]
fn test_december_2023() {
    let resolved = resolve(2023);

    let thomas = resolved.get(date(2023, 12, 21)).unwrap();
    assert_eq!(thomas.rule, Rule::SecondClassFeastOverFeria);
    assert_eq!(thomas.celebration_id(), Some("sancti:12-21:2"));
    assert_eq!(thomas.commemoration_ids(), vec!["tempora:Adv3-4:2"]);

    let vigil = resolved.get(date(2023, 12, 24)).unwrap();
    assert_eq!(vigil.rule, Rule::NativityVigilOnSunday);
    assert_eq!(vigil.celebration_id(), Some("sancti:12-24:1"));
    assert!(vigil.commemoration.is_empty());

    let nativity = resolved.get(date(2023, 12, 25)).unwrap();
    assert_eq!(nativity.rule, Rule::NativityMasses);
    assert_eq!(
        ids(&nativity.celebration),
        vec!["sancti:12-25m1:1", "sancti:12-25m2:1", "sancti:12-25m3:1"]
    );
}

#[test]
fn test_december_2024() {
    let resolved = resolve(2024);

    let immaculate = resolved.get(date(2024, 12, 8)).unwrap();
    assert_eq!(immaculate.rule, Rule::ImmaculateConceptionOnSunday);
    assert_eq!(immaculate.celebration_id(), Some("sancti:12-08:1"));

    // 将临期无候选的周六
    let saturday = resolved.get(date(2024, 12, 14)).unwrap();
    assert_eq!(saturday.rule, Rule::MarianSaturday);
    assert_eq!(saturday.celebration_id(), Some("commune:C10a:4"));
    assert!(saturday.commemoration.is_empty());

    let ember = resolved.get(date(2024, 12, 21)).unwrap();
    assert_eq!(ember.celebration_id(), Some("sancti:12-21:2"));
    assert_eq!(ember.commemoration_ids(), vec!["tempora:Adv3-6:2"]);
}

#[test]
fn test_all_souls_on_saturday_beats_marian_office() {
    let resolved = resolve(2024);
    let all_souls = resolved.get(date(2024, 11, 2)).unwrap();
    assert_eq!(all_souls.rule, Rule::AllSouls);
    assert_eq!(all_souls.celebration.len(), 3);
}

#[test]
fn test_sunday_is_not_accompanied_by_lower_feast() {
    let resolved = resolve(2024);
    let sunday = resolved.get(date(2024, 8, 4)).unwrap();
    assert_eq!(sunday.rule, Rule::Precedence);
    assert_eq!(sunday.celebration_id(), Some("tempora:Pent11-0:2"));
    assert!(sunday.commemoration.is_empty());
}

#[test]
fn test_bare_weekday_has_no_celebration() {
    // 2024-07-03 周三，夹具与内置圣人历均无候选
    let resolved = resolve(2024);
    let day = resolved.get(date(2024, 7, 3)).unwrap();
    assert!(day.is_bare_weekday());
    assert_eq!(day.rule, Rule::Precedence);
    assert!(resolved.get(date(2023, 7, 3)).is_none());
}

#[test]
fn test_resolved_year_serializes_rule_names() {
    let resolved = resolve(2024);
    let json = serde_json::to_string(&resolved).unwrap();
    assert!(json.contains("\"rule\":\"marian_saturday\""));
    assert!(json.contains("\"date\":\"2024-12-25\""));
}
