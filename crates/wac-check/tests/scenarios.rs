// scenarios.rs — End-to-end access decisions over loaded ACL documents.
//
// Each test loads a small graph document the way the CLI does, then asks
// the engine for decisions:
//
//   1. Write implies Append, and nothing implies Write
//   2. Direct (accessTo) and inherited (default) rules never mix
//   3. Public and AuthenticatedAgent classes, explicit agents, groups
//   4. Origin restrictions and the global trusted-origin bypass
//   5. Denial reasons in priority order
//
// VERIFY:
//   - Decisions and denial reasons match for every combination
//   - The boolean form agrees with the full decision
//   - The trace carries the same decision the plain call returned

use std::sync::Arc;

use wac_check::{AccessDecision, AccessEngine, AccessRequest, DenyReason, MemoryLog, Mode};
use wac_graph::{GraphDocument, MemoryGraph, Term};

const ACL: &str = "https://alice.example.com/docs/.acl";
const DOCS: &str = "https://alice.example.com/docs/";
const FILE1: &str = "https://alice.example.com/docs/file1";
const FILE2: &str = "https://alice.example.com/docs/stuff/file2";
const ALICE: &str = "https://alice.example.com/#me";
const BOB: &str = "https://bob.example.com/#me";
const APPS: &str = "https://apps.example.com";
const MALLORY: &str = "https://mallory.example.com";

/// Helper: parse a YAML graph document with the shared prefixes.
fn load(yaml: &str) -> MemoryGraph {
    let text = format!(
        "prefixes:\n  alice: https://alice.example.com/#\n  bob: https://bob.example.com/#\n{}",
        yaml
    );
    GraphDocument::from_yaml_str(&text)
        .unwrap()
        .to_graph()
        .unwrap()
}

/// Helper: a request against the docs ACL.
fn request(resource: &str, agent: Option<&str>, modes: &[Mode]) -> AccessRequest {
    let request = AccessRequest::new(Term::named(resource), Term::named(ACL), modes.iter().copied());
    match agent {
        Some(agent) => request.with_agent(Term::named(agent)),
        None => request,
    }
}

fn denied(graph: &MemoryGraph, request: &AccessRequest) -> Option<DenyReason> {
    let engine = AccessEngine::with_log(graph, Arc::new(MemoryLog::new()));
    let decision = engine.decide(request);
    assert_eq!(engine.check_access(request), decision.is_granted());
    decision.reason()
}

const ALICE_WRITES_FILE1: &str = r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", a, "acl:Authorization"]
      - ["#auth", "acl:mode", "acl:Write"]
      - ["#auth", "acl:agent", "alice:me"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
"##;

#[test]
fn write_grants_append() {
    let graph = load(ALICE_WRITES_FILE1);
    assert_eq!(denied(&graph, &request(FILE1, Some(ALICE), &[Mode::Append])), None);
}

#[test]
fn write_ignores_origin_when_rule_is_unrestricted() {
    let graph = load(ALICE_WRITES_FILE1);
    for origin in [APPS, MALLORY] {
        let req = request(FILE1, Some(ALICE), &[Mode::Append]).with_origin(Term::named(origin));
        assert_eq!(denied(&graph, &req), None, "origin {}", origin);
    }
}

#[test]
fn read_is_not_implied_by_write() {
    let graph = load(ALICE_WRITES_FILE1);
    assert_eq!(
        denied(&graph, &request(FILE1, Some(ALICE), &[Mode::Read])),
        Some(DenyReason::AllModesNotGranted)
    );
}

#[test]
fn explicit_agent_rule_rejects_other_agents() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:mode", "acl:Write"]
      - ["#auth", "acl:agent", "alice:me"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/>"]
"##,
    );
    assert_eq!(denied(&graph, &request(DOCS, Some(ALICE), &[Mode::Read])), None);
    assert_eq!(
        denied(&graph, &request(DOCS, Some(BOB), &[Mode::Write])),
        Some(DenyReason::UserUnauthorized)
    );
}

#[test]
fn inherited_rules_apply_to_nested_resources() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:agent", "alice:me"]
      - ["#auth", "acl:default", "<https://alice.example.com/docs/>"]
"##,
    );
    let inherited = |resource: &str, modes: &[Mode]| {
        request(resource, Some(ALICE), modes).with_directory(Term::named(DOCS))
    };

    assert_eq!(denied(&graph, &inherited(FILE1, &[Mode::Read])), None);
    assert_eq!(denied(&graph, &inherited(FILE2, &[Mode::Read])), None);
    assert!(denied(&graph, &inherited(FILE2, &[Mode::Write])).is_some());
    // Without the directory the default rule is not a candidate.
    assert_eq!(
        denied(&graph, &request(FILE1, Some(ALICE), &[Mode::Read])),
        Some(DenyReason::Forbidden)
    );
}

#[test]
fn deprecated_default_for_new_still_inherits() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:agent", "alice:me"]
      - ["#auth", "acl:defaultForNew", "<https://alice.example.com/docs/>"]
"##,
    );
    let req = request(FILE1, Some(ALICE), &[Mode::Read]).with_directory(Term::named(DOCS));
    assert_eq!(denied(&graph, &req), None);
}

#[test]
fn container_access_to_does_not_reach_members() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:agent", "alice:me"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/>"]
"##,
    );
    let req = request(FILE1, Some(ALICE), &[Mode::Read]).with_directory(Term::named(DOCS));
    assert_eq!(denied(&graph, &req), Some(DenyReason::Forbidden));
}

#[test]
fn public_read_does_not_grant_write() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:agentClass", "foaf:Agent"]
      - ["#auth", "acl:default", "<https://alice.example.com/docs/>"]
"##,
    );
    let read = request(FILE2, None, &[Mode::Read]).with_directory(Term::named(DOCS));
    let write = request(FILE2, Some(ALICE), &[Mode::Write]).with_directory(Term::named(DOCS));

    assert_eq!(denied(&graph, &read), None);
    assert_eq!(denied(&graph, &write), Some(DenyReason::AllModesNotGranted));
}

#[test]
fn authenticated_agent_requires_login() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:mode", "acl:Write"]
      - ["#auth", "acl:agentClass", "acl:AuthenticatedAgent"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/>"]
"##,
    );
    assert_eq!(
        denied(&graph, &request(DOCS, None, &[Mode::Read])),
        Some(DenyReason::UserUnauthorized)
    );
    assert_eq!(
        denied(&graph, &request(DOCS, None, &[Mode::Write])),
        Some(DenyReason::UserUnauthorized)
    );
    assert_eq!(denied(&graph, &request(DOCS, Some(BOB), &[Mode::Write])), None);
}

#[test]
fn group_members_are_read_from_the_group_document() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:agentGroup", "<https://alice.example.com/groups#friends>"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
  - context: https://alice.example.com/groups
    statements:
      - ["#friends", "vcard:hasMember", "bob:me"]
  - context: https://mallory.example.com/claims
    statements:
      - ["<https://alice.example.com/groups#friends>", "vcard:hasMember", "<https://mallory.example.com/#me>"]
"##,
    );
    assert_eq!(denied(&graph, &request(FILE1, Some(BOB), &[Mode::Read])), None);
    assert_eq!(
        denied(
            &graph,
            &request(FILE1, Some("https://mallory.example.com/#me"), &[Mode::Read])
        ),
        Some(DenyReason::UserUnauthorized)
    );
}

const ALICE_READS_FROM_APPS: &str = r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:agent", "alice:me"]
      - ["#auth", "acl:origin", "<https://apps.example.com>"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
"##;

#[test]
fn origin_restricted_rule_reasons() {
    let graph = load(ALICE_READS_FROM_APPS);
    let check = |agent: &str, origin: &str, modes: &[Mode]| {
        denied(
            &graph,
            &request(FILE1, Some(agent), modes).with_origin(Term::named(origin)),
        )
    };

    assert_eq!(check(ALICE, APPS, &[Mode::Read]), None);
    assert_eq!(check(ALICE, MALLORY, &[Mode::Read]), Some(DenyReason::OriginUnauthorized));
    assert_eq!(check(BOB, APPS, &[Mode::Read]), Some(DenyReason::UserUnauthorized));
    assert_eq!(check(BOB, MALLORY, &[Mode::Read]), Some(DenyReason::UserUnauthorized));

    assert_eq!(check(ALICE, MALLORY, &[Mode::Write]), Some(DenyReason::OriginUnauthorized));
    assert_eq!(check(BOB, APPS, &[Mode::Write]), Some(DenyReason::UserUnauthorized));

    let both = [Mode::Write, Mode::Read];
    assert_eq!(check(ALICE, APPS, &both), Some(DenyReason::AllModesNotGranted));
    assert_eq!(check(ALICE, MALLORY, &both), Some(DenyReason::OriginUnauthorized));
    assert_eq!(check(BOB, MALLORY, &both), Some(DenyReason::UserUnauthorized));
}

#[test]
fn read_write_append_with_origin() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Write"]
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:agent", "alice:me"]
      - ["#auth", "acl:origin", "<https://apps.example.com>"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
"##,
    );
    let all = [Mode::Append, Mode::Read, Mode::Write];
    let from = |agent: &str, origin: &str| {
        request(FILE1, Some(agent), &all).with_origin(Term::named(origin))
    };

    assert_eq!(denied(&graph, &from(ALICE, APPS)), None);
    assert_eq!(denied(&graph, &from(ALICE, MALLORY)), Some(DenyReason::OriginUnauthorized));
    assert_eq!(denied(&graph, &from(BOB, APPS)), Some(DenyReason::UserUnauthorized));
}

#[test]
fn trusted_origin_matches_absent_origin() {
    let graph = load(ALICE_READS_FROM_APPS);
    let trusted = [Term::named(MALLORY)];

    for agent in [Some(ALICE), Some(BOB), None] {
        for modes in [&[Mode::Read][..], &[Mode::Read, Mode::Write][..]] {
            let with_trusted = request(FILE1, agent, modes)
                .with_origin(Term::named(MALLORY))
                .with_trusted_origins(trusted.clone());
            let without_origin = request(FILE1, agent, modes);
            assert_eq!(denied(&graph, &with_trusted), denied(&graph, &without_origin));
        }
    }
}

#[test]
fn untrusted_origin_is_still_checked() {
    let graph = load(ALICE_READS_FROM_APPS);
    let trusted = [Term::named(APPS)];

    let from_apps = request(FILE1, Some(ALICE), &[Mode::Read])
        .with_origin(Term::named(APPS))
        .with_trusted_origins(trusted.clone());
    let from_mallory = request(FILE1, Some(ALICE), &[Mode::Read])
        .with_origin(Term::named(MALLORY))
        .with_trusted_origins(trusted);

    assert_eq!(denied(&graph, &from_apps), None);
    assert_eq!(denied(&graph, &from_mallory), Some(DenyReason::OriginUnauthorized));
}

#[test]
fn public_rule_still_checks_origin() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Read"]
      - ["#auth", "acl:agentClass", "foaf:Agent"]
      - ["#auth", "acl:origin", "<https://apps.example.com>"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
"##,
    );
    let req = request(FILE1, None, &[Mode::Read]).with_origin(Term::named(MALLORY));
    assert_eq!(denied(&graph, &req), Some(DenyReason::OriginUnauthorized));
}

#[test]
fn modes_are_pooled_across_rules() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#read", "acl:mode", "acl:Read"]
      - ["#read", "acl:agent", "alice:me"]
      - ["#read", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
      - ["#write", "acl:mode", "acl:Write"]
      - ["#write", "acl:agentClass", "acl:AuthenticatedAgent"]
      - ["#write", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
"##,
    );
    assert_eq!(
        denied(&graph, &request(FILE1, Some(ALICE), &[Mode::Read, Mode::Write])),
        None
    );
}

#[test]
fn first_failure_outranks_partial_grant() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#bobs", "acl:mode", "acl:Write"]
      - ["#bobs", "acl:agent", "bob:me"]
      - ["#bobs", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
      - ["#alices", "acl:mode", "acl:Read"]
      - ["#alices", "acl:agent", "alice:me"]
      - ["#alices", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
"##,
    );
    assert_eq!(
        denied(&graph, &request(FILE1, Some(ALICE), &[Mode::Write])),
        Some(DenyReason::UserUnauthorized)
    );
}

#[test]
fn unknown_modes_and_rules_in_other_documents_are_ignored() {
    let graph = load(
        r##"
documents:
  - context: https://alice.example.com/docs/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Launch"]
      - ["#auth", "acl:agent", "alice:me"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
  - context: https://mallory.example.com/.acl
    statements:
      - ["#auth", "acl:mode", "acl:Write"]
      - ["#auth", "acl:agent", "alice:me"]
      - ["#auth", "acl:accessTo", "<https://alice.example.com/docs/file1>"]
"##,
    );
    assert_eq!(
        denied(&graph, &request(FILE1, Some(ALICE), &[Mode::Write])),
        Some(DenyReason::Forbidden)
    );
}

#[test]
fn trace_agrees_with_decision() {
    let graph = load(ALICE_READS_FROM_APPS);
    let engine = AccessEngine::with_log(&graph, Arc::new(MemoryLog::new()));
    let req = request(FILE1, Some(ALICE), &[Mode::Read, Mode::Write]).with_origin(Term::named(APPS));

    let trace = engine.evaluate_with_trace(&req);
    assert_eq!(trace.decision, engine.decide(&req));
    match trace.decision {
        AccessDecision::Denied {
            reason: DenyReason::AllModesNotGranted,
        } => {}
        other => panic!("expected AllModesNotGranted, got {:?}", other),
    }
    assert_eq!(trace.unsatisfied, vec![Mode::Write]);
    assert_eq!(trace.candidates_checked.len(), 1);
}
