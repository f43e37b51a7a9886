// engine.rs — Access decision engine.
//
// Every access request passes through `evaluate_candidates()`:
//
// 1. Apply the trusted-origin bypass once, for the whole request.
// 2. For each candidate authorization:
//      audience fails        → failure(User Unauthorized)
//      origin fails          → failure(Origin Unauthorized), unless the
//                              owner-trusted modes for this origin cover
//                              some of the rule's modes
//      both pass             → the rule's modes are granted
// 3. Accumulate granted modes and failure reasons separately.
// 4. Check every required mode (Write covers Append) and derive the verdict.
//
// The engine is a pure function of the request and the store contents. It
// holds no state between calls and performs no I/O beyond store lookups;
// the trace lines it emits go to the injected `DecisionLog`.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wac_graph::{GraphStore, Term};

use crate::authorization::Authorization;
use crate::decision::{AccessDecision, AuthorizationOutcome, DenyReason, ModesAllowed};
use crate::log::{current_logger, DecisionLog};
use crate::matcher::agent_matches;
use crate::mode::Mode;
use crate::origin::{effective_origin, origin_allowed};
use crate::request::AccessRequest;
use crate::selector::select_candidates;

/// A step in the evaluation chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationStep {
    /// Which check was performed (e.g., "candidates", "authorization").
    pub check: String,
    /// What the check found.
    pub outcome: String,
    /// Whether this step produced the final decision.
    pub terminal: bool,
}

/// Full record of one evaluation, returned alongside the decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationTrace {
    /// The final decision.
    pub decision: AccessDecision,
    /// Ordered steps the engine evaluated.
    pub steps: Vec<EvaluationStep>,
    /// Every candidate authorization, described.
    pub candidates_checked: Vec<String>,
    /// Granted modes and failure reasons before the verdict.
    pub modes_allowed: ModesAllowed,
    /// Required modes left uncovered (empty when granted).
    pub unsatisfied: Vec<Mode>,
}

/// Records steps and mirrors each one to the decision log.
struct Recorder<'l> {
    log: &'l dyn DecisionLog,
    steps: Vec<EvaluationStep>,
}

impl<'l> Recorder<'l> {
    fn new(log: &'l dyn DecisionLog) -> Self {
        Self {
            log,
            steps: Vec::new(),
        }
    }

    fn step(&mut self, check: &str, outcome: String, terminal: bool) {
        self.log.log(&format!("{}: {}", check, outcome));
        self.steps.push(EvaluationStep {
            check: check.to_string(),
            outcome,
            terminal,
        });
    }
}

/// Decides access requests against one graph store.
pub struct AccessEngine<'a, G: GraphStore + ?Sized> {
    store: &'a G,
    log: Arc<dyn DecisionLog>,
}

impl<'a, G: GraphStore + ?Sized> AccessEngine<'a, G> {
    /// An engine logging to the process-wide default sink.
    pub fn new(store: &'a G) -> Self {
        Self {
            store,
            log: current_logger(),
        }
    }

    /// An engine logging to `log`.
    pub fn with_log(store: &'a G, log: Arc<dyn DecisionLog>) -> Self {
        Self { store, log }
    }

    /// The authorizations relevant to `request` (direct or inherited).
    pub fn candidates(&self, request: &AccessRequest) -> Vec<Authorization> {
        let candidates = select_candidates(
            self.store,
            &request.resource,
            request.directory.as_ref(),
            &request.acl_doc,
        );
        match &request.directory {
            None => self.log.log(&format!(
                "   {} direct authorization(s) about {}",
                candidates.len(),
                request.resource
            )),
            Some(dir) => self.log.log(&format!(
                "   {} default authorization(s) about {} in {}",
                candidates.len(),
                dir,
                request.acl_doc
            )),
        }
        candidates
    }

    /// Select candidates for `request` and decide.
    pub fn decide(&self, request: &AccessRequest) -> AccessDecision {
        self.evaluate_with_trace(request).decision
    }

    /// Decide over an already selected set of candidates.
    pub fn decide_candidates(&self, candidates: &[Authorization], request: &AccessRequest) -> AccessDecision {
        self.evaluate_candidates(candidates, request).decision
    }

    /// Granted modes and failure reasons, without rendering a verdict.
    pub fn modes_allowed(&self, candidates: &[Authorization], request: &AccessRequest) -> ModesAllowed {
        self.evaluate_candidates(candidates, request).modes_allowed
    }

    /// `None` when granted, otherwise why not.
    pub fn access_denied(&self, request: &AccessRequest) -> Option<DenyReason> {
        self.decide(request).reason()
    }

    /// Boolean form of [`decide`](Self::decide); the reason is discarded.
    pub fn check_access(&self, request: &AccessRequest) -> bool {
        self.decide(request).is_granted()
    }

    /// Select candidates, decide, and return the full trace.
    pub fn evaluate_with_trace(&self, request: &AccessRequest) -> EvaluationTrace {
        let candidates = self.candidates(request);
        self.evaluate_candidates(&candidates, request)
    }

    /// Decide over `candidates` and return the full trace.
    pub fn evaluate_candidates(&self, candidates: &[Authorization], request: &AccessRequest) -> EvaluationTrace {
        let mut rec = Recorder::new(self.log.as_ref());
        rec.step(
            "request",
            format!(
                "access to {} by {} from origin {} for [{}]",
                request.resource,
                request.agent,
                request
                    .origin
                    .as_ref()
                    .map(Term::to_string)
                    .unwrap_or_else(|| "(none)".to_string()),
                join_modes(&request.modes)
            ),
            false,
        );

        // Step 1: trusted-origin bypass, applied once for every candidate.
        let origin = effective_origin(request.origin.as_ref(), &request.trusted_origins);
        if let (Some(requested), None) = (&request.origin, origin) {
            rec.step(
                "trusted_origin",
                format!("origin {} is trusted, origin checks disabled", requested),
                false,
            );
        }

        // Steps 2 and 3: per-candidate outcomes, accumulated.
        rec.step(
            "candidates",
            format!("{} candidate authorization(s)", candidates.len()),
            false,
        );
        let mut modes_allowed = ModesAllowed::default();
        let mut candidates_checked = Vec::with_capacity(candidates.len());
        for auth in candidates {
            candidates_checked.push(auth.describe());
            let outcome = self.outcome(auth, request, origin);
            rec.step("authorization", format!("{} {}", auth.node, outcome), false);
            modes_allowed.record(&outcome);
        }

        // Step 4: required modes.
        for mode in &request.modes {
            let outcome = if modes_allowed.granted.contains(mode) {
                format!("{} required and allowed", mode)
            } else if mode.is_covered_by(&modes_allowed.granted) {
                format!("{} required, allowed through Write", mode)
            } else {
                format!("{} required and NOT allowed", mode)
            };
            rec.step("mode", outcome, false);
        }

        let unsatisfied = modes_allowed.unsatisfied(&request.modes);
        let decision = modes_allowed.verdict(&request.modes);
        let summary = match decision {
            AccessDecision::Granted => "granted".to_string(),
            AccessDecision::Denied { reason } => format!(
                "denied with '{}', missing [{}]",
                reason,
                join_modes(&unsatisfied)
            ),
        };
        rec.step("decision", summary, true);

        EvaluationTrace {
            decision,
            steps: rec.steps,
            candidates_checked,
            modes_allowed,
            unsatisfied,
        }
    }

    /// What one authorization contributes to this request.
    fn outcome(&self, auth: &Authorization, request: &AccessRequest, origin: Option<&Term>) -> AuthorizationOutcome {
        let log = self.log.as_ref();
        log.log(&format!("   checking {} for {}", auth.node, request.agent));

        if !agent_matches(self.store, auth, &request.agent, log) {
            return AuthorizationOutcome::Failed {
                reason: DenyReason::UserUnauthorized,
            };
        }
        if origin_allowed(auth, origin) {
            return AuthorizationOutcome::Granted {
                modes: auth.modes.clone(),
            };
        }

        // The rule rejects this origin, but the owners may trust the app
        // with some modes anyway.
        let delegated: BTreeSet<Mode> = Mode::ALL
            .into_iter()
            .filter(|m| auth.covers(*m) && m.is_covered_by(&request.trusted_modes))
            .collect();
        if !delegated.is_empty() {
            log.log(&format!(
                "    origin not listed, owner trust allows [{}]",
                join_modes(delegated.iter())
            ));
            return AuthorizationOutcome::Granted { modes: delegated };
        }

        log.log("    origin check FAILED, origin not trusted");
        AuthorizationOutcome::Failed {
            reason: DenyReason::OriginUnauthorized,
        }
    }
}

/// Select candidates and decide, logging to the process-wide default sink.
pub fn decide<G: GraphStore + ?Sized>(store: &G, request: &AccessRequest) -> AccessDecision {
    AccessEngine::new(store).decide(request)
}

/// Boolean form of [`decide`].
pub fn check_access<G: GraphStore + ?Sized>(store: &G, request: &AccessRequest) -> bool {
    AccessEngine::new(store).check_access(request)
}

fn join_modes<'m>(modes: impl IntoIterator<Item = &'m Mode>) -> String {
    modes
        .into_iter()
        .map(Mode::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
