use ecotrace_core::{
    CalcError, Category, EmissionCalculator, EmissionFactor, EngineConfig, FactorTable,
};

fn calculator() -> EmissionCalculator {
    EmissionCalculator::new(FactorTable::builtin(), EngineConfig::default())
}

#[test]
fn bus_ten_km_emits_half_a_kilo() {
    let result = calculator()
        .calculate("bus", 10.0)
        .expect("bus should be a known activity");

    assert_eq!(result.activity_id, "bus");
    assert_eq!(result.category, Category::Transportation);
    assert_eq!(result.unit, "km");
    assert_eq!(result.quantity, 10.0);
    assert_eq!(result.emissions_kg_co2e, 0.5);
}

#[test]
fn calculate_is_linear_in_quantity() {
    let calc = calculator();
    for quantity in [0.5, 3.0, 17.25, 240.0] {
        let single = calc.calculate("car", quantity).expect("valid quantity");
        let double = calc.calculate("car", 2.0 * quantity).expect("valid quantity");
        assert!(
            (double.emissions_kg_co2e - 2.0 * single.emissions_kg_co2e).abs() < 1e-9,
            "linearity broke at quantity {quantity}"
        );
    }
}

#[test]
fn unknown_activity_fails_with_offending_id() {
    let err = calculator()
        .calculate("teleport", 5.0)
        .expect_err("unknown ids must fail");
    assert_eq!(err, CalcError::UnknownActivity("teleport".to_string()));
    assert!(err.to_string().contains("teleport"));
}

#[test]
fn non_positive_and_non_finite_quantities_fail() {
    let calc = calculator();
    for quantity in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let err = calc
            .calculate("bus", quantity)
            .expect_err("invalid quantity must fail");
        assert!(
            matches!(err, CalcError::InvalidQuantity(_)),
            "unexpected error for {quantity}: {err}"
        );
    }
}

#[test]
fn computation_is_rounded_but_record_keeps_exact_product() {
    let table = FactorTable::from_factors(vec![EmissionFactor::new(
        "scooter",
        Category::Transportation,
        "km",
        0.0333,
    )])
    .expect("valid table");
    let calc = EmissionCalculator::new(table, EngineConfig::default());

    let computed = calc.calculate("scooter", 10.0).expect("valid input");
    assert_eq!(computed.emissions_kg_co2e, 0.33);

    let record = calc
        .record("scooter", 10.0, 1_700_000_000_000, None)
        .expect("valid input");
    assert_eq!(record.emissions_kg_co2e, 10.0 * 0.0333);
    assert_eq!(record.timestamp_ms, 1_700_000_000_000);
    assert!(!record.id.is_nil());
}

#[test]
fn calculate_is_referentially_transparent() {
    let calc = calculator();
    let first = calc.calculate("chicken", 2.0).expect("valid input");
    let second = calc.calculate("chicken", 2.0).expect("valid input");
    assert_eq!(first, second);
}

#[test]
fn computation_serializes_with_snake_case_fields() {
    let result = calculator().calculate("bus", 10.0).expect("valid input");
    let json = serde_json::to_value(&result).expect("serializable");
    assert_eq!(json["activity_id"], "bus");
    assert_eq!(json["category"], "transportation");
    assert_eq!(json["emissions_kg_co2e"], 0.5);
}
