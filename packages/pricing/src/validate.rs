//! Tier-set validation.
//!
//! Validation collects *every* violation rather than stopping at the
//! first, so a settings page can show all configuration problems at
//! once. A set with no unbounded tier is an error, not a silent cap —
//! every possible area must be covered by some bracket.

use std::cmp::Ordering;

use lawnquote_pricing_models::{PricingTier, TierSetReport, TierSetViolation};

/// Returns the tiers sorted ascending by upper bound, unbounded last.
#[must_use]
pub fn sort_tiers(tiers: &[PricingTier]) -> Vec<PricingTier> {
    let mut sorted = tiers.to_vec();
    sorted.sort_by(|a, b| match (a.up_to_square_feet, b.up_to_square_feet) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    });
    sorted
}

/// Validates a tier set, collecting all violations.
///
/// Checks, over the bound-sorted order: at least one tier; every rate a
/// positive finite number; every bound a positive finite number strictly
/// greater than the previous tier's; exactly one unbounded tier.
#[must_use]
pub fn validate_tier_set(tiers: &[PricingTier]) -> TierSetReport {
    let mut violations = Vec::new();

    if tiers.is_empty() {
        violations.push(TierSetViolation::Empty);
        return TierSetReport { violations };
    }

    let sorted = sort_tiers(tiers);
    let mut unbounded_count = 0_usize;
    let mut previous_bound: Option<f64> = None;

    for (index, tier) in sorted.iter().enumerate() {
        let position = index + 1;

        if !tier.rate_per_square_foot.is_finite() || tier.rate_per_square_foot <= 0.0 {
            violations.push(TierSetViolation::NonPositiveRate { tier: position });
        }

        match tier.up_to_square_feet {
            None => unbounded_count += 1,
            Some(bound) if !bound.is_finite() || bound <= 0.0 => {
                violations.push(TierSetViolation::NonPositiveBound { tier: position });
            }
            Some(bound) => {
                if let Some(previous) = previous_bound
                    && bound <= previous
                {
                    violations.push(TierSetViolation::NonIncreasingBound { tier: position });
                }
                previous_bound = Some(bound);
            }
        }
    }

    if unbounded_count > 1 {
        violations.push(TierSetViolation::MultipleUnbounded);
    }
    if unbounded_count == 0 {
        violations.push(TierSetViolation::NoUnbounded);
    }

    TierSetReport { violations }
}

#[cfg(test)]
mod tests {
    use crate::default_tiers;

    use super::*;

    #[test]
    fn default_tiers_are_valid() {
        assert!(validate_tier_set(&default_tiers()).is_valid());
    }

    #[test]
    fn empty_set_is_rejected() {
        let report = validate_tier_set(&[]);
        assert_eq!(report.violations, vec![TierSetViolation::Empty]);
    }

    #[test]
    fn zero_rate_is_rejected() {
        let report = validate_tier_set(&[
            PricingTier::bounded(5_000.0, 0.0),
            PricingTier::unbounded(0.005),
        ]);
        assert!(
            report
                .violations
                .contains(&TierSetViolation::NonPositiveRate { tier: 1 })
        );
    }

    #[test]
    fn negative_bound_is_rejected() {
        let report = validate_tier_set(&[
            PricingTier::bounded(-5_000.0, 0.012),
            PricingTier::unbounded(0.005),
        ]);
        assert!(
            report
                .violations
                .contains(&TierSetViolation::NonPositiveBound { tier: 1 })
        );
    }

    #[test]
    fn duplicate_bounds_are_rejected() {
        let report = validate_tier_set(&[
            PricingTier::bounded(5_000.0, 0.012),
            PricingTier::bounded(5_000.0, 0.008),
            PricingTier::unbounded(0.005),
        ]);
        assert!(
            report
                .violations
                .contains(&TierSetViolation::NonIncreasingBound { tier: 2 })
        );
    }

    #[test]
    fn two_unbounded_tiers_are_rejected() {
        let report = validate_tier_set(&[
            PricingTier::unbounded(0.012),
            PricingTier::unbounded(0.005),
        ]);
        assert!(
            report
                .violations
                .contains(&TierSetViolation::MultipleUnbounded)
        );
    }

    #[test]
    fn missing_unbounded_tier_is_rejected() {
        let report = validate_tier_set(&[
            PricingTier::bounded(5_000.0, 0.012),
            PricingTier::bounded(20_000.0, 0.008),
        ]);
        assert_eq!(report.violations, vec![TierSetViolation::NoUnbounded]);
    }

    #[test]
    fn all_violations_are_collected() {
        // Empty rate, bad bound, and no unbounded tier at once.
        let report = validate_tier_set(&[
            PricingTier::bounded(0.0, -1.0),
            PricingTier::bounded(5_000.0, 0.008),
        ]);
        assert!(report.violations.len() >= 3);
    }

    #[test]
    fn sort_puts_unbounded_last() {
        let sorted = sort_tiers(&[
            PricingTier::unbounded(0.005),
            PricingTier::bounded(20_000.0, 0.008),
            PricingTier::bounded(5_000.0, 0.012),
        ]);

        assert_eq!(sorted[0].up_to_square_feet, Some(5_000.0));
        assert_eq!(sorted[1].up_to_square_feet, Some(20_000.0));
        assert_eq!(sorted[2].up_to_square_feet, None);
    }

    #[test]
    fn sort_then_validate_is_idempotent() {
        let tiers = [
            PricingTier::unbounded(0.005),
            PricingTier::bounded(20_000.0, 0.008),
            PricingTier::bounded(5_000.0, 0.012),
        ];

        let first = validate_tier_set(&tiers);
        let second = validate_tier_set(&sort_tiers(&tiers));
        assert_eq!(first, second);
    }
}
