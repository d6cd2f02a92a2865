use serde::Serialize;

use super::config::{ScoreWeights, VendorWeights};
use super::domain::AssessmentInputs;

/// Vendor load bucket used for scoring.
///
/// Shares its breakpoints with the pricing surcharge tiers but is resolved separately so
/// either table can move without dragging the other along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorLoad {
    UpToFive,
    SixToTen,
    ElevenToTwenty,
    OverTwenty,
}

impl VendorLoad {
    pub fn from_count(count: u32) -> Self {
        if count <= 5 {
            Self::UpToFive
        } else if count <= 10 {
            Self::SixToTen
        } else if count <= 20 {
            Self::ElevenToTwenty
        } else {
            Self::OverTwenty
        }
    }

    /// Zero-based position, lowest load first.
    pub fn ordinal(self) -> usize {
        match self {
            Self::UpToFive => 0,
            Self::SixToTen => 1,
            Self::ElevenToTwenty => 2,
            Self::OverTwenty => 3,
        }
    }
}

pub(crate) fn vendor_weight(count: u32, weights: &VendorWeights) -> u32 {
    match VendorLoad::from_count(count) {
        VendorLoad::UpToFive => weights.up_to_five,
        VendorLoad::SixToTen => weights.six_to_ten,
        VendorLoad::ElevenToTwenty => weights.eleven_to_twenty,
        VendorLoad::OverTwenty => weights.over_twenty,
    }
}

/// Aggregate risk score. Unanswered fields contribute nothing.
pub fn risk_score(inputs: &AssessmentInputs, weights: &ScoreWeights) -> u32 {
    inputs
        .asset_count_band
        .map_or(0, |band| weights.asset_band.get(band))
        + inputs
            .primary_asset_type
            .map_or(0, |asset_type| weights.primary_type.get(asset_type))
        + inputs
            .availability
            .map_or(0, |level| weights.availability.get(level))
        + inputs
            .reporting
            .map_or(0, |level| weights.reporting.get(level))
        + inputs
            .vendor_entity_count
            .map_or(0, |count| vendor_weight(count, &weights.vendor))
        + inputs
            .failure_impact
            .map_or(0, |impact| weights.failure_impact.get(impact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::config::ScopeConfig;
    use crate::workflows::assessment::domain::{
        AssetCountBand, AvailabilityLevel, FailureImpact, InputOption, PrimaryAssetType,
        ReportingLevel,
    };

    fn weights() -> ScoreWeights {
        ScopeConfig::standard().weights
    }

    #[test]
    fn blank_inputs_score_zero() {
        assert_eq!(risk_score(&AssessmentInputs::default(), &weights()), 0);
    }

    #[test]
    fn sums_every_answered_field() {
        let inputs = AssessmentInputs {
            asset_count_band: Some(AssetCountBand::SixToTen),
            primary_asset_type: Some(PrimaryAssetType::CommercialHq),
            availability: Some(AvailabilityLevel::AfterHours),
            reporting: Some(ReportingLevel::Summary),
            vendor_entity_count: Some(12),
            failure_impact: Some(FailureImpact::FinancialLoss),
        };

        assert_eq!(risk_score(&inputs, &weights()), 35 + 15 + 10 + 6 + 12 + 12);
    }

    #[test]
    fn vendor_buckets_are_upper_inclusive() {
        let vendor = weights().vendor;
        let cases = [
            (0, 0),
            (5, 0),
            (6, 6),
            (10, 6),
            (11, 12),
            (20, 12),
            (21, 18),
            (500, 18),
        ];
        for (count, expected) in cases {
            assert_eq!(vendor_weight(count, &vendor), expected, "count {count}");
        }
    }

    #[test]
    fn score_never_drops_when_one_field_escalates() {
        let weights = weights();
        let base = AssessmentInputs {
            asset_count_band: Some(AssetCountBand::TwoToThree),
            primary_asset_type: Some(PrimaryAssetType::MixedResidential),
            availability: Some(AvailabilityLevel::AfterHours),
            reporting: Some(ReportingLevel::Summary),
            vendor_entity_count: Some(8),
            failure_impact: Some(FailureImpact::FinancialLoss),
        };

        let ladder: Vec<u32> = AssetCountBand::ALL
            .iter()
            .map(|band| {
                risk_score(
                    &AssessmentInputs {
                        asset_count_band: Some(*band),
                        ..base
                    },
                    &weights,
                )
            })
            .collect();
        assert!(ladder.windows(2).all(|pair| pair[0] <= pair[1]));

        let ladder: Vec<u32> = PrimaryAssetType::ALL
            .iter()
            .map(|asset_type| {
                risk_score(
                    &AssessmentInputs {
                        primary_asset_type: Some(*asset_type),
                        ..base
                    },
                    &weights,
                )
            })
            .collect();
        assert!(ladder.windows(2).all(|pair| pair[0] <= pair[1]));

        let ladder: Vec<u32> = AvailabilityLevel::ALL
            .iter()
            .map(|level| {
                risk_score(
                    &AssessmentInputs {
                        availability: Some(*level),
                        ..base
                    },
                    &weights,
                )
            })
            .collect();
        assert!(ladder.windows(2).all(|pair| pair[0] <= pair[1]));

        let ladder: Vec<u32> = ReportingLevel::ALL
            .iter()
            .map(|level| {
                risk_score(
                    &AssessmentInputs {
                        reporting: Some(*level),
                        ..base
                    },
                    &weights,
                )
            })
            .collect();
        assert!(ladder.windows(2).all(|pair| pair[0] <= pair[1]));

        let ladder: Vec<u32> = FailureImpact::ALL
            .iter()
            .map(|impact| {
                risk_score(
                    &AssessmentInputs {
                        failure_impact: Some(*impact),
                        ..base
                    },
                    &weights,
                )
            })
            .collect();
        assert!(ladder.windows(2).all(|pair| pair[0] <= pair[1]));

        let ladder: Vec<u32> = (0..=40)
            .map(|count| {
                risk_score(
                    &AssessmentInputs {
                        vendor_entity_count: Some(count),
                        ..base
                    },
                    &weights,
                )
            })
            .collect();
        assert!(ladder.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
