use crate::infra::{open_file_controller, parse_date};
use chrono::NaiveDate;
use clap::Args;
use estate_scope::config::AppConfig;
use estate_scope::error::AppError;
use estate_scope::workflows::assessment::{
    AssessmentEngine, AssessmentEnvelope, AssessmentOutcome, AssetCountBand, AvailabilityLevel,
    ClientProfile, FailureImpact, OverrideRecord, PrimaryAssetType, ReportingLevel,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Client name printed in the report header
    #[arg(long, default_value = "")]
    pub(crate) client: String,
    /// Date the assessment was initiated (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Asset count band (ONE, TWO_TO_THREE, FOUR_TO_FIVE, SIX_TO_TEN, TEN_PLUS)
    #[arg(long)]
    pub(crate) asset_count_band: Option<AssetCountBand>,
    /// Primary asset type (RESIDENTIAL_ONLY .. MISSION_CRITICAL)
    #[arg(long)]
    pub(crate) primary_asset_type: Option<PrimaryAssetType>,
    /// Availability level (BUSINESS_HOURS .. NEVER_FAIL)
    #[arg(long)]
    pub(crate) availability: Option<AvailabilityLevel>,
    /// Reporting level (EXCEPTION_ONLY .. AUDIT_COMPLIANCE)
    #[arg(long)]
    pub(crate) reporting: Option<ReportingLevel>,
    /// Number of vendors or entities coordinated
    #[arg(long)]
    pub(crate) vendor_entity_count: Option<u32>,
    /// Failure impact (PRIVATE_INCONVENIENCE .. REPUTATIONAL_EXEC_RISK)
    #[arg(long)]
    pub(crate) failure_impact: Option<FailureImpact>,
    /// Proposed override retainer; enables the manual override
    #[arg(long)]
    pub(crate) override_retainer: Option<String>,
    /// Reason recorded for the override
    #[arg(long, default_value = "")]
    pub(crate) override_reason: String,
    /// Founder approval has been obtained for the override
    #[arg(long)]
    pub(crate) founder_approval: bool,
    /// Print the outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl AssessArgs {
    pub(crate) fn envelope(&self) -> AssessmentEnvelope {
        let mut envelope = AssessmentEnvelope {
            client: ClientProfile {
                client_name: self.client.clone(),
                date_initiated: self.date,
                ..ClientProfile::default()
            },
            ..AssessmentEnvelope::default()
        };
        envelope.inputs.asset_count_band = self.asset_count_band;
        envelope.inputs.primary_asset_type = self.primary_asset_type;
        envelope.inputs.availability = self.availability;
        envelope.inputs.reporting = self.reporting;
        envelope.inputs.vendor_entity_count = self.vendor_entity_count;
        envelope.inputs.failure_impact = self.failure_impact;

        if let Some(price) = &self.override_retainer {
            envelope.override_record = OverrideRecord {
                enabled: true,
                proposed_price: price.clone(),
                reason: self.override_reason.clone(),
                founder_approval: self.founder_approval,
            };
        }
        envelope
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ShowArgs {
    /// Slot file to read (defaults to APP_ASSESSMENT_PATH)
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
    /// Print the outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let envelope = args.envelope();
    let outcome = AssessmentEngine::default().evaluate(&envelope);
    emit(&envelope, &outcome, args.json)
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let path = match args.path {
        Some(path) => path,
        None => AppConfig::load()?.storage.assessment_path,
    };
    let controller = open_file_controller(path);
    let controller = controller
        .lock()
        .map_err(|_| std::io::Error::other("assessment controller unavailable"))?;
    emit(controller.envelope(), &controller.evaluate(), args.json)
}

fn emit(
    envelope: &AssessmentEnvelope,
    outcome: &AssessmentOutcome,
    json: bool,
) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(outcome).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_assessment(envelope, outcome));
    }
    Ok(())
}

fn describe<T>(value: Option<T>, label: impl Fn(T) -> String) -> String {
    value.map(label).unwrap_or_else(|| "not answered".to_string())
}

pub(crate) fn render_assessment(
    envelope: &AssessmentEnvelope,
    outcome: &AssessmentOutcome,
) -> String {
    let mut out = String::new();
    let client = if envelope.client.client_name.is_empty() {
        "Unnamed client"
    } else {
        envelope.client.client_name.as_str()
    };

    out.push_str(&format!("Scope & authority assessment: {client}\n"));
    out.push_str(&format!(
        "Status: {}{}\n",
        envelope.client.status.label(),
        if envelope.is_locked { " (locked)" } else { "" }
    ));
    out.push_str(&format!("{}\n", outcome.progress_label()));

    let inputs = &envelope.inputs;
    out.push_str("\nInputs\n");
    out.push_str(&format!(
        "- Assets: {}\n",
        describe(inputs.asset_count_band, |v| v.to_string())
    ));
    out.push_str(&format!(
        "- Primary type: {}\n",
        describe(inputs.primary_asset_type, |v| v.to_string())
    ));
    out.push_str(&format!(
        "- Availability: {}\n",
        describe(inputs.availability, |v| v.to_string())
    ));
    out.push_str(&format!(
        "- Reporting: {}\n",
        describe(inputs.reporting, |v| v.to_string())
    ));
    out.push_str(&format!(
        "- Vendors/entities: {}\n",
        describe(inputs.vendor_entity_count, |v| v.to_string())
    ));
    out.push_str(&format!(
        "- Failure impact: {}\n",
        describe(inputs.failure_impact, |v| v.to_string())
    ));

    out.push_str("\nAssessment\n");
    out.push_str(&format!("- Risk score: {}\n", outcome.score));
    out.push_str(&format!(
        "- Authority: {} ({} load)\n",
        outcome.authority_level.label(),
        outcome.engagement_load.label()
    ));
    out.push_str(&format!(
        "- Internal retainer target: ${}/mo{}\n",
        outcome.displayed_retainer,
        if outcome.override_active {
            " (manual override active)"
        } else {
            ""
        }
    ));
    if outcome.override_active {
        out.push_str(&format!(
            "  computed retainer: ${}/mo\n",
            outcome.computed_retainer
        ));
    }
    out.push_str(&format!("- Confidence: {}\n", outcome.confidence.label()));

    if !outcome.override_notices.is_empty() {
        out.push_str("\nOverride notices\n");
        for notice in &outcome.override_notices {
            out.push_str(&format!("- {}\n", notice.message()));
        }
    }

    if outcome.hints.is_empty() {
        out.push_str("\nInternal observations: none\n");
    } else {
        out.push_str("\nInternal observations\n");
        for hint in &outcome.hints {
            out.push_str(&format!("- {hint}\n"));
        }
    }

    out.push_str("\nRecommended client language\n");
    for line in outcome.client_language {
        out.push_str(&format!("- \"{line}\"\n"));
    }

    out
}
