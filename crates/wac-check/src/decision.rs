// decision.rs — Access decisions and the aggregation behind them.
//
// Each candidate authorization produces one outcome: either the modes it
// grants, or the reason it failed. Outcomes accumulate into two separate
// collections (granted modes, failure reasons) and the verdict is derived
// from those:
//
//   every required mode covered (Write covers Append) → Granted
//   otherwise, the first recorded failure reason      → Denied(reason)
//   otherwise, some rule matched but too few modes    → Denied(AllModesNotGranted)
//   otherwise                                         → Denied(Forbidden)

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Why access was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No candidate's audience admitted the requesting agent.
    UserUnauthorized,
    /// The agent was admitted but the request origin was not.
    OriginUnauthorized,
    /// Matching rules exist, but together they do not cover every required mode.
    AllModesNotGranted,
    /// No candidate existed, or none matched at all.
    Forbidden,
}

impl DenyReason {
    /// The wire string servers have historically sent for this reason.
    pub fn as_str(self) -> &'static str {
        match self {
            DenyReason::UserUnauthorized => "User Unauthorized",
            DenyReason::OriginUnauthorized => "Origin Unauthorized",
            DenyReason::AllModesNotGranted => "All Required Access Modes Not Granted",
            DenyReason::Forbidden => "Forbidden",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The final answer for one access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    Granted,
    Denied { reason: DenyReason },
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    /// The denial reason, or `None` when granted.
    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            AccessDecision::Granted => None,
            AccessDecision::Denied { reason } => Some(*reason),
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDecision::Granted => f.write_str("Granted"),
            AccessDecision::Denied { reason } => write!(f, "Denied: {}", reason),
        }
    }
}

/// What one candidate authorization contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuthorizationOutcome {
    Granted { modes: BTreeSet<Mode> },
    Failed { reason: DenyReason },
}

impl fmt::Display for AuthorizationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationOutcome::Granted { modes } => {
                let names: Vec<String> = modes.iter().map(Mode::to_string).collect();
                write!(f, "grants [{}]", names.join(", "))
            }
            AuthorizationOutcome::Failed { reason } => write!(f, "fails: {}", reason),
        }
    }
}

/// Granted modes and failure reasons accumulated over all candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModesAllowed {
    /// Union of the modes of every successful outcome.
    pub granted: BTreeSet<Mode>,
    /// Failure reasons in candidate order.
    pub failures: Vec<DenyReason>,
}

impl ModesAllowed {
    pub fn record(&mut self, outcome: &AuthorizationOutcome) {
        match outcome {
            AuthorizationOutcome::Granted { modes } => self.granted.extend(modes.iter().copied()),
            AuthorizationOutcome::Failed { reason } => self.failures.push(*reason),
        }
    }

    /// Required modes that the granted set does not cover.
    pub fn unsatisfied(&self, required: &[Mode]) -> Vec<Mode> {
        required
            .iter()
            .copied()
            .filter(|m| !m.is_covered_by(&self.granted))
            .collect()
    }

    /// The reason to report when something required is missing.
    pub fn denial_reason(&self) -> DenyReason {
        match self.failures.first() {
            Some(reason) => *reason,
            None if !self.granted.is_empty() => DenyReason::AllModesNotGranted,
            None => DenyReason::Forbidden,
        }
    }

    /// Render the verdict for `required`.
    pub fn verdict(&self, required: &[Mode]) -> AccessDecision {
        if self.unsatisfied(required).is_empty() {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied {
                reason: self.denial_reason(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted(modes: &[Mode]) -> AuthorizationOutcome {
        AuthorizationOutcome::Granted {
            modes: modes.iter().copied().collect(),
        }
    }

    fn failed(reason: DenyReason) -> AuthorizationOutcome {
        AuthorizationOutcome::Failed { reason }
    }

    fn allowed(outcomes: &[AuthorizationOutcome]) -> ModesAllowed {
        let mut allowed = ModesAllowed::default();
        for outcome in outcomes {
            allowed.record(outcome);
        }
        allowed
    }

    #[test]
    fn write_satisfies_append() {
        let allowed = allowed(&[granted(&[Mode::Write])]);
        assert_eq!(allowed.verdict(&[Mode::Append]), AccessDecision::Granted);
    }

    #[test]
    fn append_does_not_satisfy_write() {
        let allowed = allowed(&[granted(&[Mode::Append])]);
        assert_eq!(allowed.unsatisfied(&[Mode::Write]), vec![Mode::Write]);
    }

    #[test]
    fn union_across_rules_covers_required_modes() {
        let allowed = allowed(&[granted(&[Mode::Read]), granted(&[Mode::Write])]);
        assert_eq!(
            allowed.verdict(&[Mode::Read, Mode::Write, Mode::Append]),
            AccessDecision::Granted
        );
    }

    #[test]
    fn first_failure_reason_wins() {
        let allowed = allowed(&[
            failed(DenyReason::OriginUnauthorized),
            granted(&[Mode::Read]),
            failed(DenyReason::UserUnauthorized),
        ]);
        assert_eq!(allowed.denial_reason(), DenyReason::OriginUnauthorized);
        assert_eq!(
            allowed.verdict(&[Mode::Write]),
            AccessDecision::Denied {
                reason: DenyReason::OriginUnauthorized
            }
        );
    }

    #[test]
    fn partial_grant_without_failures_is_all_modes_not_granted() {
        let allowed = allowed(&[granted(&[Mode::Read])]);
        assert_eq!(
            allowed.verdict(&[Mode::Read, Mode::Write]),
            AccessDecision::Denied {
                reason: DenyReason::AllModesNotGranted
            }
        );
    }

    #[test]
    fn nothing_at_all_is_forbidden() {
        let allowed = ModesAllowed::default();
        assert_eq!(
            allowed.verdict(&[Mode::Read]),
            AccessDecision::Denied {
                reason: DenyReason::Forbidden
            }
        );
    }

    #[test]
    fn failures_do_not_matter_when_everything_is_covered() {
        let allowed = allowed(&[failed(DenyReason::UserUnauthorized), granted(&[Mode::Read])]);
        assert_eq!(allowed.verdict(&[Mode::Read]), AccessDecision::Granted);
    }

    #[test]
    fn empty_requirement_is_vacuously_granted() {
        assert_eq!(ModesAllowed::default().verdict(&[]), AccessDecision::Granted);
    }

    #[test]
    fn deny_reasons_render_wire_strings() {
        assert_eq!(DenyReason::UserUnauthorized.to_string(), "User Unauthorized");
        assert_eq!(DenyReason::OriginUnauthorized.to_string(), "Origin Unauthorized");
        assert_eq!(
            DenyReason::AllModesNotGranted.to_string(),
            "All Required Access Modes Not Granted"
        );
        assert_eq!(DenyReason::Forbidden.to_string(), "Forbidden");
    }

    #[test]
    fn decision_serialization() {
        let json = serde_json::to_string(&AccessDecision::Granted).unwrap();
        assert_eq!(json, r#"{"decision":"granted"}"#);

        let deny = AccessDecision::Denied {
            reason: DenyReason::OriginUnauthorized,
        };
        let json = serde_json::to_string(&deny).unwrap();
        assert_eq!(json, r#"{"decision":"denied","reason":"origin_unauthorized"}"#);
    }
}
