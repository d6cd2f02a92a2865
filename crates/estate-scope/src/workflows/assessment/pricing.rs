use serde::{Deserialize, Serialize};

use super::config::{PricingTable, VendorSurcharges};
use super::domain::AssessmentInputs;

const PERMILLE: u64 = 1_000;

/// Round `value` up to the next multiple of `step`. Values already on a step are kept.
///
/// When the next multiple does not fit in `u64`, the result saturates at the largest
/// multiple of `step` that does.
pub fn round_up_to_step(value: u64, step: u64) -> u64 {
    if step == 0 {
        return value;
    }
    value
        .div_ceil(step)
        .checked_mul(step)
        .unwrap_or(u64::MAX - u64::MAX % step)
}

/// Zero-based surcharge tier for a vendor count; the last index is the unbounded tier.
pub fn vendor_surcharge_tier(count: u32, surcharges: &VendorSurcharges) -> usize {
    surcharges
        .bounded
        .iter()
        .position(|tier| count <= tier.max_count)
        .unwrap_or(surcharges.bounded.len())
}

/// Monthly add-on for coordinating `count` vendors or entities.
pub fn vendor_surcharge(count: u32, surcharges: &VendorSurcharges) -> u64 {
    surcharges
        .bounded
        .get(vendor_surcharge_tier(count, surcharges))
        .map_or(surcharges.above, |tier| tier.add)
}

/// Line items behind a computed retainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainerBreakdown {
    pub base: u64,
    pub type_add: u64,
    pub availability_add: u64,
    pub reporting_add: u64,
    pub vendor_add: u64,
    pub risk_add: u64,
    pub subtotal: u64,
    pub total: u64,
}

/// Itemized retainer, or `None` while nothing has been answered.
pub fn retainer_breakdown(
    inputs: &AssessmentInputs,
    table: &PricingTable,
) -> Option<RetainerBreakdown> {
    if inputs.is_blank() {
        return None;
    }

    let multiplier = inputs
        .asset_count_band
        .map_or(PERMILLE, |band| table.asset_multiplier_permille.get(band));
    let base = (table.base_floor_monthly * multiplier).div_ceil(PERMILLE);

    let type_add = inputs
        .primary_asset_type
        .map_or(0, |asset_type| table.type_add_monthly.get(asset_type));
    let availability_add = inputs
        .availability
        .map_or(0, |level| table.availability_add_monthly.get(level));
    let reporting_add = inputs
        .reporting
        .map_or(0, |level| table.reporting_add_monthly.get(level));
    let vendor_add = inputs
        .vendor_entity_count
        .map_or(0, |count| vendor_surcharge(count, &table.vendor_add_monthly));
    let risk_add = inputs
        .failure_impact
        .map_or(0, |impact| table.risk_add_monthly.get(impact));

    let subtotal = base + type_add + availability_add + reporting_add + vendor_add + risk_add;

    Some(RetainerBreakdown {
        base,
        type_add,
        availability_add,
        reporting_add,
        vendor_add,
        risk_add,
        subtotal,
        total: round_up_to_step(subtotal, table.rounding_step),
    })
}

/// Computed monthly retainer; `0` means nothing has been entered yet.
pub fn monthly_retainer(inputs: &AssessmentInputs, table: &PricingTable) -> u64 {
    retainer_breakdown(inputs, table).map_or(0, |breakdown| breakdown.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::config::ScopeConfig;
    use crate::workflows::assessment::domain::{
        AssetCountBand, AvailabilityLevel, FailureImpact, PrimaryAssetType, ReportingLevel,
    };

    fn table() -> PricingTable {
        ScopeConfig::standard().pricing
    }

    #[test]
    fn rounding_only_moves_up() {
        assert_eq!(round_up_to_step(0, 2_500), 0);
        assert_eq!(round_up_to_step(1, 2_500), 2_500);
        assert_eq!(round_up_to_step(2_500, 2_500), 2_500);
        assert_eq!(round_up_to_step(2_501, 2_500), 5_000);
        assert_eq!(round_up_to_step(13_500, 2_500), 15_000);
    }

    #[test]
    fn rounding_saturates_near_the_top_of_the_range() {
        let top = u64::MAX - u64::MAX % 2_500;
        assert_eq!(round_up_to_step(u64::MAX, 2_500), top);
        assert_eq!(round_up_to_step(top + 1, 2_500), top);
        assert_eq!(round_up_to_step(top, 2_500), top);
        assert_eq!(round_up_to_step(u64::MAX, 1), u64::MAX);
    }

    #[test]
    fn rounding_is_idempotent() {
        for value in [0, 1, 7_499, 7_500, 18_751, 99_999] {
            let once = round_up_to_step(value, 2_500);
            assert_eq!(round_up_to_step(once, 2_500), once);
        }
    }

    #[test]
    fn blank_inputs_price_at_zero_not_the_floor() {
        let inputs = AssessmentInputs::default();
        assert_eq!(retainer_breakdown(&inputs, &table()), None);
        assert_eq!(monthly_retainer(&inputs, &table()), 0);
    }

    #[test]
    fn single_asset_prices_at_the_floor() {
        let inputs = AssessmentInputs {
            asset_count_band: Some(AssetCountBand::One),
            ..AssessmentInputs::default()
        };
        assert_eq!(monthly_retainer(&inputs, &table()), 7_500);
    }

    #[test]
    fn unset_band_uses_unit_multiplier() {
        let inputs = AssessmentInputs {
            reporting: Some(ReportingLevel::ExceptionOnly),
            ..AssessmentInputs::default()
        };
        let breakdown = retainer_breakdown(&inputs, &table()).expect("priced");
        assert_eq!(breakdown.base, 7_500);
        assert_eq!(breakdown.total, 7_500);
    }

    #[test]
    fn fractional_multiplier_rounds_to_next_step() {
        let inputs = AssessmentInputs {
            asset_count_band: Some(AssetCountBand::TwoToThree),
            ..AssessmentInputs::default()
        };
        let breakdown = retainer_breakdown(&inputs, &table()).expect("priced");
        assert_eq!(breakdown.base, 13_500);
        assert_eq!(breakdown.total, 15_000);
    }

    #[test]
    fn itemizes_every_line() {
        let inputs = AssessmentInputs {
            asset_count_band: Some(AssetCountBand::FourToFive),
            primary_asset_type: Some(PrimaryAssetType::PublicRegulated),
            availability: Some(AvailabilityLevel::TwentyFourSeven),
            reporting: Some(ReportingLevel::Detailed),
            vendor_entity_count: Some(15),
            failure_impact: Some(FailureImpact::LegalExposure),
        };

        let breakdown = retainer_breakdown(&inputs, &table()).expect("priced");

        assert_eq!(breakdown.base, 18_750);
        assert_eq!(breakdown.type_add, 7_500);
        assert_eq!(breakdown.availability_add, 5_000);
        assert_eq!(breakdown.reporting_add, 5_000);
        assert_eq!(breakdown.vendor_add, 5_000);
        assert_eq!(breakdown.risk_add, 7_500);
        assert_eq!(breakdown.subtotal, 48_750);
        assert_eq!(breakdown.total, 50_000);
    }

    #[test]
    fn vendor_tiers_cover_every_count() {
        let surcharges = table().vendor_add_monthly;
        let cases = [
            (0, 0),
            (5, 0),
            (6, 2_500),
            (10, 2_500),
            (11, 5_000),
            (20, 5_000),
            (21, 7_500),
            (u32::MAX, 7_500),
        ];
        for (count, expected) in cases {
            assert_eq!(vendor_surcharge(count, &surcharges), expected, "count {count}");
        }
    }

    #[test]
    fn price_is_always_a_step_multiple() {
        let table = table();
        for count in 0..=30 {
            let inputs = AssessmentInputs {
                asset_count_band: Some(AssetCountBand::TwoToThree),
                vendor_entity_count: Some(count),
                ..AssessmentInputs::default()
            };
            let price = monthly_retainer(&inputs, &table);
            assert_eq!(price % table.rounding_step, 0, "count {count}");
            assert_eq!(price, monthly_retainer(&inputs, &table));
        }
    }
}
