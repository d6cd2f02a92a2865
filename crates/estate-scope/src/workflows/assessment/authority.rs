use super::config::{AuthorityClass, AuthorityThresholds};

/// Resolve a score to its authority class.
///
/// Tiers are scanned lowest first and bounds are inclusive, so a score sitting exactly on
/// a bound stays in the lower tier.
pub fn classify_authority(score: u32, thresholds: &AuthorityThresholds) -> AuthorityClass {
    thresholds
        .bounded
        .iter()
        .find(|tier| score <= tier.max_score)
        .map(|tier| tier.class)
        .unwrap_or(thresholds.unbounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::config::ScopeConfig;
    use crate::workflows::assessment::domain::{AuthorityLevel, EngagementLoad};

    #[test]
    fn boundaries_belong_to_the_lower_tier() {
        let thresholds = ScopeConfig::standard().authority;
        let cases = [
            (0, AuthorityLevel::StandardOversight, EngagementLoad::Light),
            (45, AuthorityLevel::StandardOversight, EngagementLoad::Light),
            (46, AuthorityLevel::SeniorOversight, EngagementLoad::Moderate),
            (75, AuthorityLevel::SeniorOversight, EngagementLoad::Moderate),
            (
                76,
                AuthorityLevel::HighAuthorityEngagement,
                EngagementLoad::Significant,
            ),
            (
                110,
                AuthorityLevel::HighAuthorityEngagement,
                EngagementLoad::Significant,
            ),
            (
                111,
                AuthorityLevel::CriticalAuthorityAssignment,
                EngagementLoad::Severe,
            ),
        ];

        for (score, level, load) in cases {
            let class = classify_authority(score, &thresholds);
            assert_eq!(class.level, level, "score {score}");
            assert_eq!(class.load, load, "score {score}");
        }
    }

    #[test]
    fn unbounded_tier_catches_any_score() {
        let thresholds = ScopeConfig::standard().authority;
        let class = classify_authority(u32::MAX, &thresholds);
        assert_eq!(class.level, AuthorityLevel::CriticalAuthorityAssignment);
    }
}
