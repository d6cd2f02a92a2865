use serde::Serialize;

use super::domain::{
    AssetCountBand, AuthorityLevel, AvailabilityLevel, EngagementLoad, FailureImpact,
    PrimaryAssetType, ReportingLevel,
};

/// Value per asset count band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByAssetBand<T> {
    pub one: T,
    pub two_to_three: T,
    pub four_to_five: T,
    pub six_to_ten: T,
    pub ten_plus: T,
}

impl<T: Copy> ByAssetBand<T> {
    pub fn get(&self, band: AssetCountBand) -> T {
        match band {
            AssetCountBand::One => self.one,
            AssetCountBand::TwoToThree => self.two_to_three,
            AssetCountBand::FourToFive => self.four_to_five,
            AssetCountBand::SixToTen => self.six_to_ten,
            AssetCountBand::TenPlus => self.ten_plus,
        }
    }
}

/// Value per primary asset type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByAssetType<T> {
    pub residential_only: T,
    pub mixed_residential: T,
    pub commercial_hq: T,
    pub public_regulated: T,
    pub mission_critical: T,
}

impl<T: Copy> ByAssetType<T> {
    pub fn get(&self, asset_type: PrimaryAssetType) -> T {
        match asset_type {
            PrimaryAssetType::ResidentialOnly => self.residential_only,
            PrimaryAssetType::MixedResidential => self.mixed_residential,
            PrimaryAssetType::CommercialHq => self.commercial_hq,
            PrimaryAssetType::PublicRegulated => self.public_regulated,
            PrimaryAssetType::MissionCritical => self.mission_critical,
        }
    }
}

/// Value per availability level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByAvailability<T> {
    pub business_hours: T,
    pub after_hours: T,
    pub twenty_four_seven: T,
    pub never_fail: T,
}

impl<T: Copy> ByAvailability<T> {
    pub fn get(&self, level: AvailabilityLevel) -> T {
        match level {
            AvailabilityLevel::BusinessHours => self.business_hours,
            AvailabilityLevel::AfterHours => self.after_hours,
            AvailabilityLevel::TwentyFourSeven => self.twenty_four_seven,
            AvailabilityLevel::NeverFail => self.never_fail,
        }
    }
}

/// Value per reporting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByReporting<T> {
    pub exception_only: T,
    pub summary: T,
    pub detailed: T,
    pub audit_compliance: T,
}

impl<T: Copy> ByReporting<T> {
    pub fn get(&self, level: ReportingLevel) -> T {
        match level {
            ReportingLevel::ExceptionOnly => self.exception_only,
            ReportingLevel::Summary => self.summary,
            ReportingLevel::Detailed => self.detailed,
            ReportingLevel::AuditCompliance => self.audit_compliance,
        }
    }
}

/// Value per failure impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByFailureImpact<T> {
    pub private_inconvenience: T,
    pub financial_loss: T,
    pub legal_exposure: T,
    pub reputational_exec_risk: T,
}

impl<T: Copy> ByFailureImpact<T> {
    pub fn get(&self, impact: FailureImpact) -> T {
        match impact {
            FailureImpact::PrivateInconvenience => self.private_inconvenience,
            FailureImpact::FinancialLoss => self.financial_loss,
            FailureImpact::LegalExposure => self.legal_exposure,
            FailureImpact::ReputationalExecRisk => self.reputational_exec_risk,
        }
    }
}

/// Bounded vendor surcharge tier; counts up to `max_count` (inclusive) pay `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VendorSurchargeTier {
    pub max_count: u32,
    pub add: u64,
}

/// Ordered vendor surcharge tiers plus the amount charged above the last bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VendorSurcharges {
    pub bounded: [VendorSurchargeTier; 3],
    pub above: u64,
}

/// Monetary side of the rubric. All amounts are whole dollars per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTable {
    pub base_floor_monthly: u64,
    /// Multipliers in thousandths (1800 = 1.8x).
    pub asset_multiplier_permille: ByAssetBand<u64>,
    pub type_add_monthly: ByAssetType<u64>,
    pub availability_add_monthly: ByAvailability<u64>,
    pub reporting_add_monthly: ByReporting<u64>,
    pub vendor_add_monthly: VendorSurcharges,
    pub risk_add_monthly: ByFailureImpact<u64>,
    pub rounding_step: u64,
}

/// Score weights for the vendor count, one per load bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VendorWeights {
    pub up_to_five: u32,
    pub six_to_ten: u32,
    pub eleven_to_twenty: u32,
    pub over_twenty: u32,
}

/// Risk side of the rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreWeights {
    pub asset_band: ByAssetBand<u32>,
    pub primary_type: ByAssetType<u32>,
    pub availability: ByAvailability<u32>,
    pub reporting: ByReporting<u32>,
    pub vendor: VendorWeights,
    pub failure_impact: ByFailureImpact<u32>,
}

/// Authority level paired with its engagement load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthorityClass {
    pub level: AuthorityLevel,
    pub load: EngagementLoad,
}

/// Scores up to `max_score` (inclusive) land in `class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthorityTier {
    pub max_score: u32,
    pub class: AuthorityClass,
}

/// Ascending authority tiers; anything above the last bound is `unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthorityThresholds {
    pub bounded: [AuthorityTier; 3],
    pub unbounded: AuthorityClass,
}

/// Fixed rubric used by the assessment engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeConfig {
    pub pricing: PricingTable,
    pub weights: ScoreWeights,
    pub authority: AuthorityThresholds,
}

impl ScopeConfig {
    pub fn standard() -> Self {
        Self {
            pricing: PricingTable {
                base_floor_monthly: 7_500,
                asset_multiplier_permille: ByAssetBand {
                    one: 1_000,
                    two_to_three: 1_800,
                    four_to_five: 2_500,
                    six_to_ten: 3_500,
                    ten_plus: 5_000,
                },
                type_add_monthly: ByAssetType {
                    residential_only: 0,
                    mixed_residential: 2_500,
                    commercial_hq: 5_000,
                    public_regulated: 7_500,
                    mission_critical: 10_000,
                },
                availability_add_monthly: ByAvailability {
                    business_hours: 0,
                    after_hours: 2_500,
                    twenty_four_seven: 5_000,
                    never_fail: 10_000,
                },
                reporting_add_monthly: ByReporting {
                    exception_only: 0,
                    summary: 2_500,
                    detailed: 5_000,
                    audit_compliance: 7_500,
                },
                vendor_add_monthly: VendorSurcharges {
                    bounded: [
                        VendorSurchargeTier {
                            max_count: 5,
                            add: 0,
                        },
                        VendorSurchargeTier {
                            max_count: 10,
                            add: 2_500,
                        },
                        VendorSurchargeTier {
                            max_count: 20,
                            add: 5_000,
                        },
                    ],
                    above: 7_500,
                },
                risk_add_monthly: ByFailureImpact {
                    private_inconvenience: 0,
                    financial_loss: 5_000,
                    legal_exposure: 7_500,
                    reputational_exec_risk: 15_000,
                },
                rounding_step: 2_500,
            },
            weights: ScoreWeights {
                asset_band: ByAssetBand {
                    one: 10,
                    two_to_three: 18,
                    four_to_five: 25,
                    six_to_ten: 35,
                    ten_plus: 50,
                },
                primary_type: ByAssetType {
                    residential_only: 0,
                    mixed_residential: 8,
                    commercial_hq: 15,
                    public_regulated: 22,
                    mission_critical: 28,
                },
                availability: ByAvailability {
                    business_hours: 0,
                    after_hours: 10,
                    twenty_four_seven: 18,
                    never_fail: 30,
                },
                reporting: ByReporting {
                    exception_only: 0,
                    summary: 6,
                    detailed: 12,
                    audit_compliance: 18,
                },
                vendor: VendorWeights {
                    up_to_five: 0,
                    six_to_ten: 6,
                    eleven_to_twenty: 12,
                    over_twenty: 18,
                },
                failure_impact: ByFailureImpact {
                    private_inconvenience: 0,
                    financial_loss: 12,
                    legal_exposure: 18,
                    reputational_exec_risk: 30,
                },
            },
            authority: AuthorityThresholds {
                bounded: [
                    AuthorityTier {
                        max_score: 45,
                        class: AuthorityClass {
                            level: AuthorityLevel::StandardOversight,
                            load: EngagementLoad::Light,
                        },
                    },
                    AuthorityTier {
                        max_score: 75,
                        class: AuthorityClass {
                            level: AuthorityLevel::SeniorOversight,
                            load: EngagementLoad::Moderate,
                        },
                    },
                    AuthorityTier {
                        max_score: 110,
                        class: AuthorityClass {
                            level: AuthorityLevel::HighAuthorityEngagement,
                            load: EngagementLoad::Significant,
                        },
                    },
                ],
                unbounded: AuthorityClass {
                    level: AuthorityLevel::CriticalAuthorityAssignment,
                    load: EngagementLoad::Severe,
                },
            },
        }
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self::standard()
    }
}
