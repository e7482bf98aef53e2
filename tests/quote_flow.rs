//! End-to-end quote flow: configuration store feeding the evaluation engine,
//! the way the presentation collaborator drives it.

use rust_decimal::Decimal;
use testresult::TestResult;

use etiquote::prelude::*;

fn request_from(store: &ConfigStore) -> PricingRequest {
    PricingRequest::new(store.exchange_rate())
}

#[test]
fn defaults_produce_the_reference_quote() -> TestResult {
    let store = ConfigStore::new();

    let quote = evaluate(store.config(), &request_from(&store))?;

    // 1 cm² of paper/white, one color, 1,000 units at rate 12,000.
    assert_eq!(quote.area_cm2(), Decimal::ONE);
    assert_eq!(quote.total_price(), Decimal::from(240_000));

    Ok(())
}

#[test]
fn operator_override_applies_only_until_reset() -> TestResult {
    let mut store = ConfigStore::new();

    store.set_exchange_rate(Decimal::from(10_000))?;
    let overridden = evaluate(store.config(), &request_from(&store))?;
    assert_eq!(overridden.total_price(), Decimal::from(200_000));

    store.reset_exchange_rate();
    let reset = evaluate(store.config(), &request_from(&store))?;
    assert_eq!(reset.total_price(), Decimal::from(240_000));

    Ok(())
}

#[test]
fn loaded_materials_replace_the_catalog_wholesale() -> TestResult {
    let store = ConfigStore::from_yaml(
        r"
materials:
  - id: vellum-white
    category: paper
    baseColor: White
    factorOver10k: 30
    factorUnderOrEq10k: 40
    requiresColor: true
",
    );

    // The default catalog is gone entirely, not merged.
    assert_eq!(store.config().materials.len(), 1);

    let quote = evaluate(store.config(), &request_from(&store))?;
    assert_eq!(quote.base_factor(), Decimal::from(40));

    // Categories from the replaced catalog no longer resolve.
    let mut transparent = request_from(&store);
    transparent.category = Some(MaterialCategory::Transparent);
    transparent.base_color = None;

    let errors = validate(store.config(), &transparent);
    assert_eq!(errors, [ValidationError::BaseColorRequired]);

    Ok(())
}

#[test]
fn correcting_fields_one_at_a_time_clears_errors_one_at_a_time() -> TestResult {
    let store = ConfigStore::new();
    let mut request = request_from(&store);

    request.quantity = 0;
    request.width_mm = Decimal::ZERO;
    request.printing_colors.clear();

    let errors = validate(store.config(), &request);
    assert_eq!(
        errors,
        [
            ValidationError::QuantityNotPositive,
            ValidationError::WidthNotPositive,
            ValidationError::NoPrintingColors,
        ]
    );

    request.width_mm = Decimal::from(25);
    assert_eq!(
        validate(store.config(), &request),
        [
            ValidationError::QuantityNotPositive,
            ValidationError::NoPrintingColors,
        ]
    );

    request.quantity = 5_000;
    assert_eq!(
        validate(store.config(), &request),
        [ValidationError::NoPrintingColors]
    );

    request.toggle_printing_color("Black")?;
    let quote = evaluate(store.config(), &request)?;
    assert_eq!(quote.area_cm2(), Decimal::new(25, 1)); // 10mm x 25mm = 2.5 cm²

    Ok(())
}

#[test]
fn reset_restores_the_initial_form_values() {
    let store = ConfigStore::new();
    let mut request = request_from(&store);

    request.quantity = 99;
    request.category = Some(MaterialCategory::Laser);
    request.reset(store.config().exchange_rate);

    assert_eq!(request.quantity, 1_000);
    assert_eq!(request.length_mm, Decimal::from(50));
    assert_eq!(request.width_mm, Decimal::from(50));
    assert_eq!(request.category, Some(MaterialCategory::Paper));
    assert_eq!(request.printing_colors, ["White"]);
}
