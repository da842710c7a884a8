//! Price calculation: flat, tiered bracket walk, minimum enforcement,
//! comparison, and snapshot assembly.

use lawnquote_pricing_models::{
    FlatComparison, PricingMode, PricingResult, PricingSnapshot, PricingTier, TierLine,
};

use crate::{
    PricingError,
    validate::{sort_tiers, validate_tier_set},
};

/// Rounds a dollar amount to the nearest cent.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Price at a single flat rate, rounded to the cent.
///
/// Zero or negative area, or a non-positive rate, yields 0.
#[must_use]
pub fn flat_price(area_square_feet: f64, rate_per_square_foot: f64) -> f64 {
    if area_square_feet <= 0.0
        || !area_square_feet.is_finite()
        || rate_per_square_foot <= 0.0
        || !rate_per_square_foot.is_finite()
    {
        return 0.0;
    }
    round_cents(area_square_feet * rate_per_square_foot)
}

/// Flat-rate pricing with an itemized result and minimum enforcement.
#[must_use]
pub fn flat_result(
    area_square_feet: f64,
    rate_per_square_foot: f64,
    minimum: Option<f64>,
) -> PricingResult {
    let total = flat_price(area_square_feet, rate_per_square_foot);

    let breakdown = if total > 0.0 {
        vec![TierLine {
            range_start: 0.0,
            range_end: None,
            square_feet: area_square_feet,
            rate: rate_per_square_foot,
            subtotal: total,
            label: format!(
                "{} sq ft @ ${rate_per_square_foot}/sq ft",
                thousands(area_square_feet)
            ),
        }]
    } else {
        vec![]
    };

    apply_minimum(
        PricingResult {
            total_price: total,
            breakdown,
            minimum_applied: false,
        },
        minimum,
    )
}

/// Tiered blended-rate pricing.
///
/// Tiers are sorted ascending by bound (unbounded last) and walked like
/// progressive tax brackets: each bracket charges its rate on
/// `min(remaining area, bracket capacity)`, and the walk stops once the
/// whole area is priced. Each occupied bracket yields one labeled
/// breakdown line; the final price is rounded to the cent and raised to
/// the per-visit minimum when one applies.
///
/// # Errors
///
/// Returns [`PricingError::InvalidConfiguration`] with the complete
/// violation report if the tier set fails validation.
pub fn tiered_price(
    area_square_feet: f64,
    tiers: &[PricingTier],
    minimum: Option<f64>,
) -> Result<PricingResult, PricingError> {
    let report = validate_tier_set(tiers);
    if !report.is_valid() {
        return Err(PricingError::InvalidConfiguration { report });
    }

    let sorted = sort_tiers(tiers);
    let mut remaining = if area_square_feet.is_finite() {
        area_square_feet.max(0.0)
    } else {
        0.0
    };
    let mut previous_max = 0.0_f64;
    let mut total = 0.0_f64;
    let mut breakdown = Vec::new();

    for tier in &sorted {
        if remaining <= 0.0 {
            break;
        }

        let capacity = tier
            .up_to_square_feet
            .map_or(f64::INFINITY, |bound| bound - previous_max);
        let charged = remaining.min(capacity);

        if charged > 0.0 {
            let subtotal = round_cents(charged * tier.rate_per_square_foot);
            breakdown.push(TierLine {
                range_start: previous_max,
                range_end: tier.up_to_square_feet,
                square_feet: charged,
                rate: tier.rate_per_square_foot,
                subtotal,
                label: bracket_label(previous_max, tier),
            });
            total += charged * tier.rate_per_square_foot;
            remaining -= charged;
        }

        if let Some(bound) = tier.up_to_square_feet {
            previous_max = bound;
        }
    }

    log::debug!(
        "Tiered price for {area_square_feet} sq ft: ${total:.2} across {} bracket(s)",
        breakdown.len()
    );

    Ok(apply_minimum(
        PricingResult {
            total_price: round_cents(total),
            breakdown,
            minimum_applied: false,
        },
        minimum,
    ))
}

/// Substitutes the per-visit minimum when the computed price falls short,
/// documenting the uplift as a breakdown line.
#[must_use]
pub fn apply_minimum(mut result: PricingResult, minimum: Option<f64>) -> PricingResult {
    let Some(minimum) = minimum.filter(|m| m.is_finite() && *m > 0.0) else {
        return result;
    };

    if result.total_price >= minimum {
        return result;
    }

    let uplift = round_cents(minimum - result.total_price);
    result.breakdown.push(TierLine {
        range_start: 0.0,
        range_end: Some(0.0),
        square_feet: 0.0,
        rate: 0.0,
        subtotal: uplift,
        label: format!("Minimum visit price adjustment (+${uplift})"),
    });
    result.total_price = round_cents(minimum);
    result.minimum_applied = true;
    result
}

/// Informational flat-vs-tiered comparison. Never on the
/// pricing-of-record path, so no minimum is applied to either side.
///
/// # Errors
///
/// Returns [`PricingError::InvalidConfiguration`] if the tier set fails
/// validation.
pub fn compare_to_flat(
    area_square_feet: f64,
    tiers: &[PricingTier],
    flat_rate: f64,
) -> Result<FlatComparison, PricingError> {
    let tiered = tiered_price(area_square_feet, tiers, None)?.total_price;
    let flat = flat_price(area_square_feet, flat_rate);
    let savings = round_cents(flat - tiered);

    Ok(FlatComparison {
        tiered_price: tiered,
        flat_price: flat,
        savings,
        savings_percent: if flat > 0.0 {
            round_cents(savings / flat * 100.0)
        } else {
            0.0
        },
    })
}

/// Prices an area on the tiered path and packages the exact inputs and
/// result for persistence with the quote.
///
/// # Errors
///
/// Returns [`PricingError::InvalidConfiguration`] if the tier set fails
/// validation.
pub fn tiered_snapshot(
    area_square_feet: f64,
    tiers: &[PricingTier],
    minimum: Option<f64>,
) -> Result<PricingSnapshot, PricingError> {
    let result = tiered_price(area_square_feet, tiers, minimum)?;
    Ok(PricingSnapshot {
        mode: PricingMode::Tiered,
        area_square_feet,
        tiers: Some(tiers.to_vec()),
        flat_rate: None,
        minimum,
        result,
    })
}

/// Prices an area on the flat path and packages the exact inputs and
/// result for persistence with the quote.
#[must_use]
pub fn flat_snapshot(
    area_square_feet: f64,
    rate_per_square_foot: f64,
    minimum: Option<f64>,
) -> PricingSnapshot {
    PricingSnapshot {
        mode: PricingMode::Flat,
        area_square_feet,
        tiers: None,
        flat_rate: Some(rate_per_square_foot),
        minimum,
        result: flat_result(area_square_feet, rate_per_square_foot, minimum),
    }
}

/// Label for an occupied bracket, e.g. `"5,000-20,000 sq ft @
/// $0.008/sq ft"` or `"20,000+ sq ft @ $0.005/sq ft"`.
fn bracket_label(range_start: f64, tier: &PricingTier) -> String {
    let rate = tier.rate_per_square_foot;
    tier.up_to_square_feet.map_or_else(
        || format!("{}+ sq ft @ ${rate}/sq ft", thousands(range_start)),
        |bound| {
            format!(
                "{}-{} sq ft @ ${rate}/sq ft",
                thousands(range_start),
                thousands(bound)
            )
        },
    )
}

/// Formats a square-foot count with thousands separators ("20,000").
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn thousands(value: f64) -> String {
    let whole = value.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::default_tiers;

    use super::*;

    #[test]
    fn flat_price_rounds_to_cents() {
        assert!((flat_price(3_333.0, 0.0123) - 41.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flat_price_of_nothing_is_zero() {
        assert!(flat_price(0.0, 0.01).abs() < f64::EPSILON);
        assert!(flat_price(-100.0, 0.01).abs() < f64::EPSILON);
        assert!(flat_price(1_000.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bracket_walk_matches_the_reference_scenario() {
        // 25,000 sq ft over the default tiers:
        //   5,000 @ 0.012 = $60, 15,000 @ 0.008 = $120, 5,000 @ 0.005 = $25.
        let result = tiered_price(25_000.0, &default_tiers(), None).unwrap();

        assert!((result.total_price - 205.0).abs() < f64::EPSILON);
        assert_eq!(result.breakdown.len(), 3);
        assert!(!result.minimum_applied);

        assert!((result.breakdown[0].subtotal - 60.0).abs() < f64::EPSILON);
        assert!((result.breakdown[1].subtotal - 120.0).abs() < f64::EPSILON);
        assert!((result.breakdown[2].subtotal - 25.0).abs() < f64::EPSILON);

        assert!((result.breakdown[1].square_feet - 15_000.0).abs() < f64::EPSILON);
        assert_eq!(result.breakdown[2].range_end, None);
    }

    #[test]
    fn small_area_stays_in_the_first_bracket() {
        let result = tiered_price(2_500.0, &default_tiers(), None).unwrap();
        assert!((result.total_price - 30.0).abs() < f64::EPSILON);
        assert_eq!(result.breakdown.len(), 1);
    }

    #[test]
    fn breakdown_square_feet_sum_to_the_area() {
        for area in [1.0, 2_500.0, 5_000.0, 10_000.0, 25_000.0, 250_000.0] {
            let result = tiered_price(area, &default_tiers(), None).unwrap();
            let charged: f64 = result.breakdown.iter().map(|line| line.square_feet).sum();
            assert!((charged - area).abs() < 1e-6, "area {area} charged {charged}");
        }
    }

    #[test]
    fn tiered_price_is_monotonic_in_area() {
        let tiers = default_tiers();
        let mut previous = 0.0;
        for area in [0.0, 100.0, 4_999.0, 5_000.0, 5_001.0, 19_999.0, 20_001.0, 100_000.0] {
            let price = tiered_price(area, &tiers, None).unwrap().total_price;
            assert!(price >= previous, "price dropped at {area} sq ft");
            previous = price;
        }
    }

    #[test]
    fn single_unbounded_tier_matches_flat_pricing() {
        let tiers = [PricingTier::unbounded(0.0123)];
        for area in [1.0, 777.0, 3_000.0, 50_000.0] {
            let tiered = tiered_price(area, &tiers, None).unwrap().total_price;
            let flat = flat_price(area, 0.0123);
            assert!((tiered - flat).abs() < f64::EPSILON, "diverged at {area}");
        }
    }

    #[test]
    fn minimum_uplifts_a_small_quote() {
        // 3,000 sq ft over the default tiers is $36, under a $50 minimum.
        let result = tiered_price(3_000.0, &default_tiers(), Some(50.0)).unwrap();

        assert!((result.total_price - 50.0).abs() < f64::EPSILON);
        assert!(result.minimum_applied);

        let uplift = result.breakdown.last().unwrap();
        assert!((uplift.subtotal - 14.0).abs() < f64::EPSILON);
        assert!(uplift.label.contains("Minimum"));
    }

    #[test]
    fn minimum_leaves_a_large_quote_alone() {
        let result = tiered_price(25_000.0, &default_tiers(), Some(50.0)).unwrap();
        assert!((result.total_price - 205.0).abs() < f64::EPSILON);
        assert!(!result.minimum_applied);
    }

    #[test]
    fn minimum_applies_to_the_flat_path_too() {
        let result = flat_result(1_000.0, 0.01, Some(50.0));
        assert!((result.total_price - 50.0).abs() < f64::EPSILON);
        assert!(result.minimum_applied);
    }

    #[test]
    fn invalid_tiers_fail_with_the_full_report() {
        let err = tiered_price(1_000.0, &[], None).unwrap_err();
        let PricingError::InvalidConfiguration { report } = err;
        assert!(!report.is_valid());
    }

    #[test]
    fn comparison_matches_the_reference_scenario() {
        let comparison = compare_to_flat(25_000.0, &default_tiers(), 0.01).unwrap();

        assert!((comparison.tiered_price - 205.0).abs() < f64::EPSILON);
        assert!((comparison.flat_price - 250.0).abs() < f64::EPSILON);
        assert!((comparison.savings - 45.0).abs() < f64::EPSILON);
        assert!((comparison.savings_percent - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshots_preserve_their_inputs() {
        let tiers = default_tiers();
        let snapshot = tiered_snapshot(25_000.0, &tiers, Some(50.0)).unwrap();

        assert_eq!(snapshot.mode, PricingMode::Tiered);
        assert_eq!(snapshot.tiers.as_deref(), Some(tiers.as_slice()));
        assert_eq!(snapshot.flat_rate, None);
        assert!((snapshot.result.total_price - 205.0).abs() < f64::EPSILON);

        // Re-pricing with a different table must not touch the snapshot.
        let repriced = tiered_price(25_000.0, &[PricingTier::unbounded(0.02)], None).unwrap();
        assert!((repriced.total_price - 500.0).abs() < f64::EPSILON);
        assert!((snapshot.result.total_price - 205.0).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = tiered_snapshot(25_000.0, &default_tiers(), None).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: PricingSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, restored);
    }

    #[test]
    fn flat_snapshot_carries_the_rate() {
        let snapshot = flat_snapshot(3_000.0, 0.01, None);
        assert_eq!(snapshot.mode, PricingMode::Flat);
        assert_eq!(snapshot.flat_rate, Some(0.01));
        assert!((snapshot.result.total_price - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bracket_labels_read_naturally() {
        let result = tiered_price(25_000.0, &default_tiers(), None).unwrap();
        assert_eq!(result.breakdown[0].label, "0-5,000 sq ft @ $0.012/sq ft");
        assert_eq!(result.breakdown[2].label, "20,000+ sq ft @ $0.005/sq ft");
    }

    #[test]
    fn thousands_formatting() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(5_000.0), "5,000");
        assert_eq!(thousands(1_234_567.0), "1,234,567");
    }
}
