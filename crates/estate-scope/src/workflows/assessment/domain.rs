use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shared behaviour of every categorical form input.
///
/// `ALL` lists the variants in ascending severity, which is also the order the form
/// presents them in.
pub trait InputOption: Copy + Eq + Sized + 'static {
    const ALL: &'static [Self];

    /// Stable wire token, identical to the serde representation.
    fn token(self) -> &'static str;

    /// Human label shown next to the option.
    fn label(self) -> &'static str;

    /// Resolve a token, accepting `kebab-case` and lowercase spellings.
    fn from_token(raw: &str) -> Option<Self> {
        let normalized = raw.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.token() == normalized)
    }
}

/// Raised when a token does not name any option of the requested input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {input}")]
pub struct UnknownOption {
    pub input: &'static str,
    pub value: String,
}

/// Number of properties placed under oversight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCountBand {
    One,
    TwoToThree,
    FourToFive,
    SixToTen,
    TenPlus,
}

impl InputOption for AssetCountBand {
    const ALL: &'static [Self] = &[
        Self::One,
        Self::TwoToThree,
        Self::FourToFive,
        Self::SixToTen,
        Self::TenPlus,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::One => "ONE",
            Self::TwoToThree => "TWO_TO_THREE",
            Self::FourToFive => "FOUR_TO_FIVE",
            Self::SixToTen => "SIX_TO_TEN",
            Self::TenPlus => "TEN_PLUS",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::TwoToThree => "2–3",
            Self::FourToFive => "4–5",
            Self::SixToTen => "6–10",
            Self::TenPlus => "10+",
        }
    }
}

/// Most demanding kind of asset in the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAssetType {
    ResidentialOnly,
    MixedResidential,
    CommercialHq,
    PublicRegulated,
    MissionCritical,
}

impl InputOption for PrimaryAssetType {
    const ALL: &'static [Self] = &[
        Self::ResidentialOnly,
        Self::MixedResidential,
        Self::CommercialHq,
        Self::PublicRegulated,
        Self::MissionCritical,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::ResidentialOnly => "RESIDENTIAL_ONLY",
            Self::MixedResidential => "MIXED_RESIDENTIAL",
            Self::CommercialHq => "COMMERCIAL_HQ",
            Self::PublicRegulated => "PUBLIC_REGULATED",
            Self::MissionCritical => "MISSION_CRITICAL",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::ResidentialOnly => "Residential only",
            Self::MixedResidential => "Mixed residential",
            Self::CommercialHq => "Commercial office / HQ",
            Self::PublicRegulated => "Public-facing / regulated",
            Self::MissionCritical => "Mission-critical operations",
        }
    }
}

/// Expected response coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityLevel {
    BusinessHours,
    AfterHours,
    TwentyFourSeven,
    NeverFail,
}

impl InputOption for AvailabilityLevel {
    const ALL: &'static [Self] = &[
        Self::BusinessHours,
        Self::AfterHours,
        Self::TwentyFourSeven,
        Self::NeverFail,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::BusinessHours => "BUSINESS_HOURS",
            Self::AfterHours => "AFTER_HOURS",
            Self::TwentyFourSeven => "TWENTY_FOUR_SEVEN",
            Self::NeverFail => "NEVER_FAIL",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::BusinessHours => "Business hours coordination",
            Self::AfterHours => "After-hours coordination",
            Self::TwentyFourSeven => "24/7 incident response",
            Self::NeverFail => "Immediate escalation / never-fail expectation",
        }
    }
}

/// Reporting depth owed to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportingLevel {
    ExceptionOnly,
    Summary,
    Detailed,
    AuditCompliance,
}

impl InputOption for ReportingLevel {
    const ALL: &'static [Self] = &[
        Self::ExceptionOnly,
        Self::Summary,
        Self::Detailed,
        Self::AuditCompliance,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::ExceptionOnly => "EXCEPTION_ONLY",
            Self::Summary => "SUMMARY",
            Self::Detailed => "DETAILED",
            Self::AuditCompliance => "AUDIT_COMPLIANCE",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::ExceptionOnly => "Exception-only (silent unless incident)",
            Self::Summary => "Summary reporting",
            Self::Detailed => "Detailed incident documentation",
            Self::AuditCompliance => "Audit / compliance-grade reporting",
        }
    }
}

/// Worst consequence of an oversight failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureImpact {
    PrivateInconvenience,
    FinancialLoss,
    LegalExposure,
    ReputationalExecRisk,
}

impl InputOption for FailureImpact {
    const ALL: &'static [Self] = &[
        Self::PrivateInconvenience,
        Self::FinancialLoss,
        Self::LegalExposure,
        Self::ReputationalExecRisk,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::PrivateInconvenience => "PRIVATE_INCONVENIENCE",
            Self::FinancialLoss => "FINANCIAL_LOSS",
            Self::LegalExposure => "LEGAL_EXPOSURE",
            Self::ReputationalExecRisk => "REPUTATIONAL_EXEC_RISK",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::PrivateInconvenience => "Private inconvenience",
            Self::FinancialLoss => "Financial loss",
            Self::LegalExposure => "Legal / compliance exposure",
            Self::ReputationalExecRisk => "Reputational or executive risk",
        }
    }
}

macro_rules! impl_from_str {
    ($($ty:ty => $input:literal),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = UnknownOption;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    <$ty as InputOption>::from_token(raw).ok_or_else(|| UnknownOption {
                        input: $input,
                        value: raw.to_string(),
                    })
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_from_str! {
    AssetCountBand => "asset count band",
    PrimaryAssetType => "primary asset type",
    AvailabilityLevel => "availability level",
    ReportingLevel => "reporting level",
    FailureImpact => "failure impact",
}

/// Vendor count presets offered by the intake form.
pub const VENDOR_COUNT_PRESETS: [(&str, u32); 4] =
    [("≤5", 5), ("6–10", 10), ("11–20", 20), ("20+", 25)];

/// The six scored answers. Every field stays optional until the operator sets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentInputs {
    pub asset_count_band: Option<AssetCountBand>,
    pub primary_asset_type: Option<PrimaryAssetType>,
    pub availability: Option<AvailabilityLevel>,
    pub reporting: Option<ReportingLevel>,
    pub vendor_entity_count: Option<u32>,
    pub failure_impact: Option<FailureImpact>,
}

impl AssessmentInputs {
    pub const FIELD_COUNT: u8 = 6;

    /// Number of answered sections.
    pub fn answered(&self) -> u8 {
        [
            self.asset_count_band.is_some(),
            self.primary_asset_type.is_some(),
            self.availability.is_some(),
            self.reporting.is_some(),
            self.vendor_entity_count.is_some(),
            self.failure_impact.is_some(),
        ]
        .into_iter()
        .filter(|answered| *answered)
        .count() as u8
    }

    pub fn is_blank(&self) -> bool {
        self.answered() == 0
    }
}

/// Oversight tier derived from the aggregate risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorityLevel {
    StandardOversight,
    SeniorOversight,
    HighAuthorityEngagement,
    CriticalAuthorityAssignment,
}

impl AuthorityLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::StandardOversight => "Standard Oversight",
            Self::SeniorOversight => "Senior Oversight",
            Self::HighAuthorityEngagement => "High Authority Engagement",
            Self::CriticalAuthorityAssignment => "Critical Authority Assignment",
        }
    }

    /// Recommended client-facing language for the tier.
    pub fn client_language(self) -> &'static [&'static str] {
        match self {
            Self::StandardOversight => &[
                "Once scope is finalized, we structure this as an ongoing oversight engagement.",
                "We remain responsible so nothing falls back on you.",
            ],
            Self::SeniorOversight => &[
                "Given the scope and responsibility involved, this falls under a senior oversight engagement.",
                "We'll outline terms after the review so the level of authority is clear.",
            ],
            Self::HighAuthorityEngagement => &[
                "This requires high-authority oversight to maintain continuity across assets.",
                "After the review, we present engagement terms aligned to responsibility and response expectations.",
            ],
            Self::CriticalAuthorityAssignment => &[
                "This is a critical authority assignment. Continuity and exposure require permanent oversight.",
                "We'll deliver private terms after the review that match the responsibility being delegated.",
            ],
        }
    }
}

/// Engagement weight co-derived with the authority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngagementLoad {
    Light,
    Moderate,
    Significant,
    Severe,
}

impl EngagementLoad {
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Significant => "Significant",
            Self::Severe => "Severe",
        }
    }
}

/// Advisory flag driven by the single most severe answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceIndicator {
    Normal,
    ElevatedRisk,
    HighExposure,
}

impl ConfidenceIndicator {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::ElevatedRisk => "Elevated Risk",
            Self::HighExposure => "High Exposure",
        }
    }
}
