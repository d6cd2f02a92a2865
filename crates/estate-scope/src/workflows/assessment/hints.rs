use super::domain::{
    AssessmentInputs, AssetCountBand, AvailabilityLevel, FailureImpact, ReportingLevel,
};

/// Vendor counts above this call for dedicated coordination capacity.
pub const HIGH_VENDOR_LOAD: u32 = 10;

/// Internal observations, one per triggering field, in field order.
pub fn advisory_hints(inputs: &AssessmentInputs) -> Vec<String> {
    let candidates = [
        inputs
            .asset_count_band
            .filter(|band| *band != AssetCountBand::One)
            .map(|_| "Multi-asset coordination increases complexity non-linearly."),
        inputs
            .availability
            .filter(|level| *level == AvailabilityLevel::NeverFail)
            .map(|_| "Never-fail expectation: ensure escalation coverage and staffing."),
        inputs
            .reporting
            .filter(|level| *level == ReportingLevel::AuditCompliance)
            .map(|_| "Audit/compliance reporting: confirm documentation workflow and retention."),
        inputs
            .vendor_entity_count
            .filter(|count| *count > HIGH_VENDOR_LOAD)
            .map(|_| "High vendor load: consider dedicated concierge coordination capacity."),
        inputs
            .failure_impact
            .filter(|impact| *impact == FailureImpact::ReputationalExecRisk)
            .map(|_| "Reputational/executive exposure: prioritize redundancy and response."),
    ];

    candidates.into_iter().flatten().map(str::to_string).collect()
}
