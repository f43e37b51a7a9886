// trust.rs — `wac trusted-modes` and `wac trusted-apps`.
//
// Owner profiles are read from local graph files, mapped by owner document
// IRI in the `[profiles]` table of the config or with `--profile DOC=FILE`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use clap::Args;
use thiserror::Error;
use wac_check::{trusted_modes_for_origin, Mode, ProfileFetcher};
use wac_graph::{GraphDocument, GraphError, MemoryGraph, Term};

use crate::config::CliConfig;

#[derive(Args)]
pub struct TrustedModesArgs {
    /// Graph files holding the ACL.
    #[arg(long = "graph", short = 'g', required = true)]
    pub graphs: Vec<PathBuf>,
    /// IRI of the protected resource.
    #[arg(long)]
    pub resource: String,
    /// IRI of the ACL document protecting it.
    #[arg(long)]
    pub acl_doc: String,
    /// Container whose inherited Control rules also name owners.
    #[arg(long)]
    pub directory: Option<String>,
    /// Application origin to resolve trust for.
    #[arg(long)]
    pub origin: String,
    /// Owner profile as DOC=FILE, overriding the config; repeatable.
    #[arg(long = "profile", value_parser = parse_profile)]
    pub profiles: Vec<(String, PathBuf)>,
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TrustedAppsArgs {
    /// Graph file holding the owner's profile.
    #[arg(long)]
    pub profile: PathBuf,
    /// WebID of the owner.
    #[arg(long)]
    pub owner: String,
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

fn parse_profile(raw: &str) -> Result<(String, PathBuf), String> {
    match raw.split_once('=') {
        Some((doc, file)) if !doc.is_empty() && !file.is_empty() => {
            Ok((doc.to_string(), PathBuf::from(file)))
        }
        _ => Err(format!("expected DOC=FILE, got '{}'", raw)),
    }
}

/// Errors from reading owner profiles.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Reads owner profiles from local graph files.
///
/// Owners without a configured profile declare no trusted apps.
pub struct FileProfileFetcher {
    profiles: BTreeMap<String, PathBuf>,
}

impl FileProfileFetcher {
    pub fn new(profiles: BTreeMap<String, PathBuf>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl ProfileFetcher for FileProfileFetcher {
    type Graph = MemoryGraph;
    type Error = ProfileError;

    async fn fetch_owner_graph(&self, owner: &Term) -> Result<MemoryGraph, ProfileError> {
        let Some(path) = owner.doc().and_then(|doc| self.profiles.get(doc.value())) else {
            tracing::warn!("no profile configured for {}, assuming no trusted apps", owner);
            return Ok(MemoryGraph::new());
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ProfileError::Read {
                path: path.clone(),
                source,
            })?;
        let graph = GraphDocument::parse(path, &content)?.to_graph()?;
        tracing::debug!("loaded profile of {} from {}", owner, path.display());
        Ok(graph)
    }
}

pub fn trusted_modes(args: &TrustedModesArgs, config: &CliConfig) -> anyhow::Result<()> {
    let graph = super::load_graphs(&args.graphs)?;
    let resource = Term::named(&args.resource);
    let acl_doc = Term::named(&args.acl_doc);
    let directory = args.directory.as_deref().map(Term::named);
    let origin = Term::named(&args.origin);

    let mut profiles = config.profiles.clone();
    profiles.extend(args.profiles.iter().cloned());
    let fetcher = FileProfileFetcher::new(profiles);

    let rt = tokio::runtime::Runtime::new()?;
    let modes = rt.block_on(trusted_modes_for_origin(
        &graph,
        &resource,
        directory.as_ref(),
        &acl_doc,
        &origin,
        &fetcher,
    ))?;

    if args.json {
        println!("{}", serde_json::to_string(&modes)?);
    } else if modes.is_empty() {
        println!("{} is not trusted by the owners of {}", origin, resource);
    } else {
        let names: Vec<String> = modes.iter().map(Mode::to_string).collect();
        println!("{}", names.join(" "));
    }
    Ok(())
}

pub fn trusted_apps(args: &TrustedAppsArgs) -> anyhow::Result<()> {
    let graph = GraphDocument::load(&args.profile)?;
    let apps = wac_check::trusted_apps(&graph, &Term::named(&args.owner));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&apps)?);
        return Ok(());
    }
    if apps.is_empty() {
        println!("No trusted apps declared by {}.", args.owner);
        return Ok(());
    }

    println!("{:<40} MODES", "ORIGIN");
    println!("{}", "-".repeat(80));
    for app in &apps {
        let modes: Vec<String> = app.modes.iter().map(Mode::to_string).collect();
        println!("{:<40} {}", app.origin.value(), modes.join(", "));
    }
    Ok(())
}
