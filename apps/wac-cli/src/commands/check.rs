// check.rs — `wac check` and `wac explain`.

use std::path::PathBuf;

use clap::Args;
use wac_check::{AccessDecision, AccessEngine, AccessRequest, Mode};
use wac_graph::Term;

use crate::config::CliConfig;

/// One access request, spelled out on the command line.
#[derive(Args)]
pub struct RequestArgs {
    /// Graph files to load (ACL documents, group documents).
    #[arg(long = "graph", short = 'g', required = true)]
    pub graphs: Vec<PathBuf>,
    /// IRI of the resource being accessed.
    #[arg(long)]
    pub resource: String,
    /// IRI of the ACL document protecting it.
    #[arg(long)]
    pub acl_doc: String,
    /// Container whose inherited (acl:default) rules apply.
    #[arg(long)]
    pub directory: Option<String>,
    /// WebID of the requesting agent (omit for anonymous).
    #[arg(long)]
    pub agent: Option<String>,
    /// Required mode (read, write, append, control); repeatable.
    #[arg(long = "mode", short = 'm', required = true)]
    pub modes: Vec<Mode>,
    /// Origin of the requesting application.
    #[arg(long)]
    pub origin: Option<String>,
    /// Extra trusted origin, added to the configured ones; repeatable.
    #[arg(long = "trusted-origin")]
    pub trusted_origins: Vec<String>,
    /// Mode the owners trust this origin with (see `wac trusted-modes`); repeatable.
    #[arg(long = "trusted-mode")]
    pub trusted_modes: Vec<Mode>,
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl RequestArgs {
    pub fn to_request(&self, config: &CliConfig) -> anyhow::Result<AccessRequest> {
        let mut request = AccessRequest::new(
            Term::named(&self.resource),
            Term::named(&self.acl_doc),
            self.modes.iter().copied(),
        )
        .with_agent(self.agent.as_deref().map(Term::named))
        .with_trusted_origins(
            config
                .trusted_origins
                .iter()
                .chain(&self.trusted_origins)
                .map(Term::named),
        )
        .with_trusted_modes(self.trusted_modes.iter().copied());
        if let Some(directory) = &self.directory {
            request = request.with_directory(Term::named(directory));
        }
        if let Some(origin) = &self.origin {
            request = request.with_origin(Term::named(origin));
        }
        request.validate()?;
        Ok(request)
    }
}

pub fn execute(args: &RequestArgs, config: &CliConfig) -> anyhow::Result<()> {
    let graph = super::load_graphs(&args.graphs)?;
    let request = args.to_request(config)?;
    let decision = AccessEngine::new(&graph).decide(&request);

    if args.json {
        println!("{}", serde_json::to_string(&decision)?);
    } else if decision.is_granted() {
        println!("{}", decision);
    }

    match decision {
        AccessDecision::Granted => Ok(()),
        AccessDecision::Denied { reason } => anyhow::bail!("Access denied: {}", reason),
    }
}

pub fn explain(args: &RequestArgs, config: &CliConfig) -> anyhow::Result<()> {
    let graph = super::load_graphs(&args.graphs)?;
    let request = args.to_request(config)?;
    let trace = AccessEngine::new(&graph).evaluate_with_trace(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    println!("Candidates:");
    if trace.candidates_checked.is_empty() {
        println!("  (none)");
    }
    for candidate in &trace.candidates_checked {
        println!("  {}", candidate);
    }
    println!();

    println!("{:<16} OUTCOME", "CHECK");
    println!("{}", "-".repeat(80));
    for step in &trace.steps {
        let marker = if step.terminal { " <=" } else { "" };
        println!("{:<16} {}{}", step.check, step.outcome, marker);
    }
    println!();
    println!("{}", trace.decision);
    Ok(())
}
