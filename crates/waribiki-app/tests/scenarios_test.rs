//! End-to-end fare scenarios through the service layer

use tempfile::tempdir;
use waribiki_app::app::{FareRequest, FareService};
use waribiki_app::config::Config;
use waribiki_domain::{calculate, lookup_fare, lookup_rule, CalculationInput};
use waribiki_types::{DisabilityClass, RoundingMode, TravelMode};

#[test]
fn test_jr_first_class_with_caregiver_tokyo_nagoya() {
    let rule = lookup_rule("JR");
    let fare = lookup_fare("東京", "名古屋").unwrap();
    let result = calculate(&CalculationInput {
        base_fare: fare.base,
        express_fare: fare.express,
        rule,
        is_over_distance: false,
        disability_class: DisabilityClass::First,
        travel_mode: TravelMode::WithCaregiver,
    });
    assert_eq!(result.passenger_base, 3190);
    assert_eq!(result.passenger_express, 4920);
    assert_eq!(result.caregiver_base, 3190);
    assert_eq!(result.caregiver_express, 4920);
    assert_eq!(result.grand_total(), 16420);
}

#[test]
fn test_jr_second_class_solo_rounds_down() {
    let svc = FareService::builtin().unwrap();
    let quote = svc.calculate(&FareRequest {
        operator: "JR".to_string(),
        disability_class: DisabilityClass::Second,
        travel_mode: TravelMode::Solo,
        base_fare: Some("105".to_string()),
        express_fare: Some("50".to_string()),
        over_distance: true,
        ..Default::default()
    });
    assert_eq!(quote.rule.rounding, RoundingMode::Down);
    assert_eq!(quote.result.passenger_base, 50);
    assert_eq!(quote.result.passenger_express, 50);
    assert_eq!(quote.result.caregiver_base, 0);
    assert_eq!(quote.result.caregiver_express, 0);
    assert_eq!(quote.result.caregiver_total(), None);
}

#[test]
fn test_operator_without_limit_ignores_distance() {
    let rule = lookup_rule("Tokyu");
    assert_eq!(rule.distance_limit_km, None);
    for over in [true, false] {
        let result = calculate(&CalculationInput {
            base_fare: 1000,
            express_fare: 0,
            rule,
            is_over_distance: over,
            disability_class: DisabilityClass::Second,
            travel_mode: TravelMode::Solo,
        });
        assert_eq!(result.passenger_base, 1000);
    }
}

#[test]
fn test_unknown_operator_rule() {
    let rule = lookup_rule("NoSuchRailway");
    assert_eq!(rule.distance_limit_km, None);
    assert_eq!(rule.rounding, RoundingMode::Up);
}

#[test]
fn test_config_file_overrides_tables() {
    let dir = tempdir().unwrap();
    let rules_path = dir.path().join("rules.toml");
    let fares_path = dir.path().join("fares.csv");
    std::fs::write(
        &rules_path,
        "[[operators]]\nid = \"JR\"\ndistance_limit_km = 100\nrounding = \"up\"\n",
    )
    .unwrap();
    std::fs::write(&fares_path, "発駅,着駅,運賃,特急料金\n大宮,高崎,1980,2290\n").unwrap();

    let config = Config {
        rules_file: Some(rules_path),
        fares_file: Some(fares_path),
        ..Config::default()
    };
    let svc = FareService::from_config(&config).unwrap();

    assert_eq!(svc.lookup_fare("東京", "名古屋"), None);
    let quote = svc.calculate(&FareRequest {
        operator: "JR".to_string(),
        disability_class: DisabilityClass::First,
        travel_mode: TravelMode::Solo,
        from: Some("高崎".to_string()),
        to: Some("大宮".to_string()),
        ..Default::default()
    });
    // 1980 / 2 = 990, already a multiple of 10
    assert_eq!(quote.result.passenger_base, 990);
    assert_eq!(quote.result.passenger_express, 2290);
    assert_eq!(quote.result.grand_total(), 990 + 2290);
}

#[test]
fn test_every_builtin_route_discounts_for_first_class_solo() {
    let svc = FareService::builtin().unwrap();
    for route in svc.routes() {
        let quote = svc.calculate(&FareRequest {
            operator: "JR".to_string(),
            travel_mode: TravelMode::Solo,
            from: Some(route.from.clone()),
            to: Some(route.to.clone()),
            ..Default::default()
        });
        assert!(quote.input.is_over_distance, "{} - {}", route.from, route.to);
        assert!(quote.result.passenger_base <= route.base / 2);
        assert_eq!(quote.result.passenger_base % 10, 0);
        assert_eq!(quote.result.passenger_express, route.express);
    }
}
