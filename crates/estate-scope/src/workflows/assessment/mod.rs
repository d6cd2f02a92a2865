//! Scope and authority assessment.
//!
//! Converts six categorical answers about an estate engagement into a risk score, an
//! authority tier, and a monthly retainer, then gates the retainer behind the manual
//! override path. [`AssessmentController`] owns the single envelope for a session and is
//! the only writer of its state.

mod authority;
mod confidence;
pub mod config;
pub mod controller;
pub mod domain;
pub mod envelope;
mod hints;
mod overrides;
pub mod persistence;
mod pricing;
pub mod router;
mod scoring;

#[cfg(test)]
mod tests;

pub use authority::classify_authority;
pub use confidence::classify_confidence;
pub use config::ScopeConfig;
pub use controller::{AssessmentController, MutationOutcome};
pub use domain::{
    AssessmentInputs, AssetCountBand, AuthorityLevel, AvailabilityLevel, ConfidenceIndicator,
    EngagementLoad, FailureImpact, InputOption, PrimaryAssetType, ReportingLevel, UnknownOption,
};
pub use envelope::{
    AssessmentEnvelope, AssessmentStatus, ClientProfile, EngagementType, FieldChange,
    OverrideRecord,
};
pub use hints::advisory_hints;
pub use overrides::{
    apply_override, override_notices, parse_override_amount, OverrideDecision, OverrideNotice,
};
pub use persistence::{FileSlot, MemorySlot, PersistenceSlot, SlotError};
pub use pricing::{
    monthly_retainer, retainer_breakdown, round_up_to_step, vendor_surcharge,
    vendor_surcharge_tier, RetainerBreakdown,
};
pub use router::assessment_router;
pub use scoring::{risk_score, VendorLoad};

use serde::Serialize;

/// Stateless evaluator applying a [`ScopeConfig`] to an envelope.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    config: ScopeConfig,
}

impl AssessmentEngine {
    pub fn new(config: ScopeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    /// Recompute every derived output from the envelope. Nothing is cached.
    pub fn evaluate(&self, envelope: &AssessmentEnvelope) -> AssessmentOutcome {
        let inputs = &envelope.inputs;
        let score = risk_score(inputs, &self.config.weights);
        let authority = classify_authority(score, &self.config.authority);
        let breakdown = retainer_breakdown(inputs, &self.config.pricing);
        let computed_retainer = breakdown.map_or(0, |breakdown| breakdown.total);
        let decision = apply_override(
            computed_retainer,
            &envelope.override_record,
            self.config.pricing.rounding_step,
        );

        AssessmentOutcome {
            score,
            answered: inputs.answered(),
            authority_level: authority.level,
            engagement_load: authority.load,
            computed_retainer,
            retainer_breakdown: breakdown,
            displayed_retainer: decision.displayed_retainer,
            override_active: decision.override_active,
            confidence: classify_confidence(inputs),
            hints: advisory_hints(inputs),
            override_notices: override_notices(&envelope.override_record),
            client_language: authority.level.client_language(),
        }
    }
}

/// Everything the assessment screen derives from the current envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentOutcome {
    pub score: u32,
    pub answered: u8,
    pub authority_level: AuthorityLevel,
    pub engagement_load: EngagementLoad,
    pub computed_retainer: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retainer_breakdown: Option<RetainerBreakdown>,
    pub displayed_retainer: u64,
    pub override_active: bool,
    pub confidence: ConfidenceIndicator,
    pub hints: Vec<String>,
    pub override_notices: Vec<OverrideNotice>,
    pub client_language: &'static [&'static str],
}

impl AssessmentOutcome {
    /// "n/6 sections completed" progress line.
    pub fn progress_label(&self) -> String {
        format!(
            "{}/{} sections completed",
            self.answered,
            AssessmentInputs::FIELD_COUNT
        )
    }
}
