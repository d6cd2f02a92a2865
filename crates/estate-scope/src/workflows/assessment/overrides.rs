use serde::{Deserialize, Serialize};

use super::envelope::OverrideRecord;
use super::pricing::round_up_to_step;

/// Retainer shown to the operator after the override gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideDecision {
    pub displayed_retainer: u64,
    pub override_active: bool,
}

/// Operator-facing warning about the override fields. Never blocks computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideNotice {
    AwaitingApproval,
    MissingReason,
    UnreadablePrice,
}

impl OverrideNotice {
    pub fn message(self) -> &'static str {
        match self {
            Self::AwaitingApproval => "Override requires founder approval to take effect.",
            Self::MissingReason => "Override reason is required; record the basis for the override.",
            Self::UnreadablePrice => {
                "Override retainer is not a valid amount; the computed retainer is shown."
            }
        }
    }
}

/// Parse operator text into whole dollars.
///
/// Accepts non-negative integers and decimals; fractional cents round up to the next
/// dollar. Blank, negative, or non-finite text yields `None`.
pub fn parse_override_amount(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(whole) = trimmed.parse::<u64>() {
        return Some(whole);
    }

    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 || value > u64::MAX as f64 {
        return None;
    }
    Some(value.ceil() as u64)
}

/// Gate the computed retainer behind the override record.
///
/// The override only wins when it is enabled, founder-approved, and carries a readable
/// amount. The reason field never participates.
pub fn apply_override(computed: u64, record: &OverrideRecord, step: u64) -> OverrideDecision {
    let amount = if record.enabled && record.founder_approval {
        parse_override_amount(&record.proposed_price)
    } else {
        None
    };

    match amount {
        Some(amount) => OverrideDecision {
            displayed_retainer: round_up_to_step(amount, step),
            override_active: true,
        },
        None => OverrideDecision {
            displayed_retainer: computed,
            override_active: false,
        },
    }
}

/// Advisory notices for an enabled override, in display order.
pub fn override_notices(record: &OverrideRecord) -> Vec<OverrideNotice> {
    let mut notices = Vec::new();
    if !record.enabled {
        return notices;
    }

    if !record.founder_approval {
        notices.push(OverrideNotice::AwaitingApproval);
    }
    if record.reason.trim().is_empty() {
        notices.push(OverrideNotice::MissingReason);
    }
    if record.founder_approval
        && !record.proposed_price.trim().is_empty()
        && parse_override_amount(&record.proposed_price).is_none()
    {
        notices.push(OverrideNotice::UnreadablePrice);
    }

    notices
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: u64 = 2_500;

    fn record(enabled: bool, price: &str, reason: &str, approved: bool) -> OverrideRecord {
        OverrideRecord {
            enabled,
            proposed_price: price.to_string(),
            reason: reason.to_string(),
            founder_approval: approved,
        }
    }

    #[test]
    fn approved_override_replaces_computed_retainer() {
        let decision = apply_override(20_000, &record(true, "31000", "legacy terms", true), STEP);
        assert!(decision.override_active);
        assert_eq!(decision.displayed_retainer, 32_500);
    }

    #[test]
    fn largest_amounts_saturate_instead_of_overflowing() {
        let top = u64::MAX - u64::MAX % STEP;
        for price in ["18446744073709551615", "18446744073709551616.0"] {
            let decision = apply_override(7_500, &record(true, price, "estate sale", true), STEP);
            assert!(decision.override_active, "price {price:?}");
            assert_eq!(decision.displayed_retainer, top, "price {price:?}");
            assert!(override_notices(&record(true, price, "estate sale", true)).is_empty());
        }
    }

    #[test]
    fn unapproved_override_never_changes_the_price() {
        for price in ["", "0", "15000", "999999"] {
            let decision = apply_override(20_000, &record(true, price, "reason", false), STEP);
            assert!(!decision.override_active, "price {price:?}");
            assert_eq!(decision.displayed_retainer, 20_000, "price {price:?}");
        }
    }

    #[test]
    fn disabled_override_is_ignored_even_when_approved() {
        let decision = apply_override(12_500, &record(false, "40000", "reason", true), STEP);
        assert!(!decision.override_active);
        assert_eq!(decision.displayed_retainer, 12_500);
    }

    #[test]
    fn unreadable_text_suppresses_the_override() {
        for price in ["", "   ", "abc", "-2500", "NaN", "inf", "12,500"] {
            let decision = apply_override(10_000, &record(true, price, "reason", true), STEP);
            assert!(!decision.override_active, "price {price:?}");
            assert_eq!(decision.displayed_retainer, 10_000, "price {price:?}");
        }
    }

    #[test]
    fn missing_reason_does_not_block_activation() {
        let decision = apply_override(10_000, &record(true, "5000", "", true), STEP);
        assert!(decision.override_active);
        assert_eq!(decision.displayed_retainer, 5_000);
    }

    #[test]
    fn decimal_amounts_round_up() {
        assert_eq!(parse_override_amount("15000.01"), Some(15_001));
        assert_eq!(parse_override_amount(" 7500 "), Some(7_500));
        let decision = apply_override(0, &record(true, "15000.01", "r", true), STEP);
        assert_eq!(decision.displayed_retainer, 17_500);
    }

    #[test]
    fn zero_override_is_a_valid_amount() {
        let decision = apply_override(30_000, &record(true, "0", "pro bono", true), STEP);
        assert!(decision.override_active);
        assert_eq!(decision.displayed_retainer, 0);
    }

    #[test]
    fn notices_flag_each_gap() {
        assert!(override_notices(&record(false, "", "", false)).is_empty());
        assert_eq!(
            override_notices(&record(true, "15000", "", false)),
            vec![
                OverrideNotice::AwaitingApproval,
                OverrideNotice::MissingReason
            ]
        );
        assert_eq!(
            override_notices(&record(true, "lots", "board ask", true)),
            vec![OverrideNotice::UnreadablePrice]
        );
        assert!(override_notices(&record(true, "15000", "board ask", true)).is_empty());
    }
}
