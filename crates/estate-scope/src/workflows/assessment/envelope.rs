use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{
    AssessmentInputs, AssetCountBand, AvailabilityLevel, FailureImpact, PrimaryAssetType,
    ReportingLevel,
};

/// Kind of engagement being scoped. Opaque to pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngagementType {
    PrivateEstate,
    EstatePortfolio,
    CommercialMixed,
}

impl EngagementType {
    pub fn label(self) -> &'static str {
        match self {
            Self::PrivateEstate => "Private Estate",
            Self::EstatePortfolio => "Estate Portfolio",
            Self::CommercialMixed => "Commercial / Mixed-Use",
        }
    }
}

/// Review status of the assessment document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    #[default]
    Draft,
    Reviewed,
    Approved,
}

impl AssessmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Reviewed => "Reviewed",
            Self::Approved => "Approved",
        }
    }
}

/// Client metadata carried alongside the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientProfile {
    pub client_name: String,
    #[serde(deserialize_with = "deserialize_engagement_type")]
    pub engagement_type: Option<EngagementType>,
    pub concierge_lead: String,
    #[serde(deserialize_with = "deserialize_optional_date")]
    pub date_initiated: Option<NaiveDate>,
    pub status: AssessmentStatus,
}

/// Manually proposed retainer awaiting (or holding) founder approval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideRecord {
    #[serde(rename = "manualOverride")]
    pub enabled: bool,
    /// Raw operator text; validated only when the override is evaluated.
    #[serde(rename = "overrideRetainer")]
    pub proposed_price: String,
    #[serde(rename = "overrideReason")]
    pub reason: String,
    #[serde(rename = "founderApproval")]
    pub founder_approval: bool,
}

/// Complete persisted unit of assessment state.
///
/// Serializes to one flat object so the stored blob keeps the field names the intake
/// screen has always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentEnvelope {
    #[serde(flatten)]
    pub client: ClientProfile,
    #[serde(flatten)]
    pub inputs: AssessmentInputs,
    #[serde(default)]
    pub notes: String,
    #[serde(flatten)]
    pub override_record: OverrideRecord,
    #[serde(default)]
    pub is_locked: bool,
}

impl AssessmentEnvelope {
    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_blob(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }

    pub(crate) fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::ClientName(value) => self.client.client_name = value,
            FieldChange::EngagementType(value) => self.client.engagement_type = value,
            FieldChange::ConciergeLead(value) => self.client.concierge_lead = value,
            FieldChange::DateInitiated(value) => self.client.date_initiated = value,
            FieldChange::Status(value) => self.client.status = value,
            FieldChange::AssetCountBand(value) => self.inputs.asset_count_band = value,
            FieldChange::PrimaryAssetType(value) => self.inputs.primary_asset_type = value,
            FieldChange::Availability(value) => self.inputs.availability = value,
            FieldChange::Reporting(value) => self.inputs.reporting = value,
            FieldChange::VendorEntityCount(value) => self.inputs.vendor_entity_count = value,
            FieldChange::FailureImpact(value) => self.inputs.failure_impact = value,
            FieldChange::Notes(value) => self.notes = value,
            FieldChange::ManualOverride(value) => self.override_record.enabled = value,
            FieldChange::OverrideRetainer(value) => self.override_record.proposed_price = value,
            FieldChange::OverrideReason(value) => self.override_record.reason = value,
            FieldChange::FounderApproval(value) => self.override_record.founder_approval = value,
        }
    }
}

/// Single field-level edit. The lock flag is not editable here; it only moves through
/// the controller's lock actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    ClientName(String),
    EngagementType(Option<EngagementType>),
    ConciergeLead(String),
    DateInitiated(Option<NaiveDate>),
    Status(AssessmentStatus),
    AssetCountBand(Option<AssetCountBand>),
    PrimaryAssetType(Option<PrimaryAssetType>),
    Availability(Option<AvailabilityLevel>),
    Reporting(Option<ReportingLevel>),
    VendorEntityCount(Option<u32>),
    FailureImpact(Option<FailureImpact>),
    Notes(String),
    ManualOverride(bool),
    OverrideRetainer(String),
    OverrideReason(String),
    FounderApproval(bool),
}

fn deserialize_engagement_type<'de, D>(
    deserializer: D,
) -> Result<Option<EngagementType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("private-estate") => Ok(Some(EngagementType::PrivateEstate)),
        Some("estate-portfolio") => Ok(Some(EngagementType::EstatePortfolio)),
        Some("commercial-mixed") => Ok(Some(EngagementType::CommercialMixed)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "unknown engagement type '{other}'"
        ))),
    }
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|err| {
                serde::de::Error::custom(format!(
                    "failed to parse '{value}' as YYYY-MM-DD ({err})"
                ))
            }),
    }
}
