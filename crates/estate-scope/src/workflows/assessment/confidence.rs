use super::domain::{
    AssessmentInputs, AvailabilityLevel, ConfidenceIndicator, FailureImpact, PrimaryAssetType,
    ReportingLevel,
};

/// Flag driven by the single most severe answer, independent of the aggregate score.
///
/// High-exposure triggers are checked first: one assessment can carry triggers of both
/// kinds.
pub fn classify_confidence(inputs: &AssessmentInputs) -> ConfidenceIndicator {
    if high_exposure(inputs) {
        ConfidenceIndicator::HighExposure
    } else if elevated_risk(inputs) {
        ConfidenceIndicator::ElevatedRisk
    } else {
        ConfidenceIndicator::Normal
    }
}

fn high_exposure(inputs: &AssessmentInputs) -> bool {
    inputs.failure_impact == Some(FailureImpact::ReputationalExecRisk)
        || inputs.primary_asset_type == Some(PrimaryAssetType::MissionCritical)
        || inputs.availability == Some(AvailabilityLevel::NeverFail)
        || inputs.reporting == Some(ReportingLevel::AuditCompliance)
}

fn elevated_risk(inputs: &AssessmentInputs) -> bool {
    inputs.failure_impact == Some(FailureImpact::LegalExposure)
        || inputs.primary_asset_type == Some(PrimaryAssetType::PublicRegulated)
        || inputs.availability == Some(AvailabilityLevel::TwentyFourSeven)
}
