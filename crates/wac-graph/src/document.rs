// document.rs — YAML/JSON graph documents.
//
// A small file format for feeding quads to the engine from tests and the
// CLI. It is a configuration format, not an RDF serialization: each
// statement is a three-element list of terms, grouped under the document
// (context) it belongs to.
//
//   prefixes:
//     alice: https://alice.example.com/
//   documents:
//     - context: https://alice.example.com/docs/.acl
//       statements:
//         - ["#owner", "acl:agent", "alice:profile#me"]
//         - ["#owner", "acl:mode", "acl:Control"]
//
// Term syntax: `_:id` blank node, `"text"` literal, `<iri>` or a bare
// absolute IRI, `#frag` relative to the context, `prefix:local` through the
// built-in and declared prefixes, and `a` for rdf:type. Blank node labels
// are shared across the whole file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::memory::MemoryGraph;
use crate::term::{Quad, Term};
use crate::vocab;

/// A set of documents and their statements, as written in a graph file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Extra prefixes; these override the built-in ones.
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,

    /// The documents, each with its own context.
    #[serde(default)]
    pub documents: Vec<NamedDocument>,
}

/// The statements of one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedDocument {
    /// Absolute IRI (or prefixed name) of the document.
    pub context: String,

    /// `[subject, predicate, object]` triples.
    #[serde(default)]
    pub statements: Vec<(String, String, String)>,
}

impl GraphDocument {
    /// Read a graph document, picking the parser from the file extension.
    pub fn from_file(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse `content` read from `path` by the caller, picking the parser
    /// from the extension of `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self, GraphError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(content),
            Some("json") => Self::from_json_str(content),
            _ => Err(GraphError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, GraphError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a graph file straight into a store.
    pub fn load(path: &Path) -> Result<MemoryGraph, GraphError> {
        let graph = Self::from_file(path)?.to_graph()?;
        tracing::debug!(
            "loaded {} statement(s) in {} document(s) from {}",
            graph.len(),
            graph.documents().len(),
            path.display()
        );
        Ok(graph)
    }

    /// Resolve every statement into quads.
    pub fn to_graph(&self) -> Result<MemoryGraph, GraphError> {
        let mut graph = MemoryGraph::new();
        for doc in &self.documents {
            let context = self.resolve_term(&doc.context, None)?;
            if !context.is_named() {
                return Err(GraphError::InvalidTerm {
                    term: doc.context.clone(),
                    reason: "a document context must be an IRI".to_string(),
                });
            }
            for (s, p, o) in &doc.statements {
                graph.add_quad(Quad::new(
                    self.resolve_term(s, Some(&context))?,
                    self.resolve_term(p, Some(&context))?,
                    self.resolve_term(o, Some(&context))?,
                    context.clone(),
                ));
            }
        }
        Ok(graph)
    }

    /// Turn one written term into a [`Term`], relative to `context`.
    pub fn resolve_term(&self, raw: &str, context: Option<&Term>) -> Result<Term, GraphError> {
        let raw = raw.trim();
        let invalid = |reason: &str| GraphError::InvalidTerm {
            term: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("empty term"));
        }
        if raw == "a" {
            return Ok(Term::named(vocab::rdf::TYPE));
        }
        if let Some(label) = raw.strip_prefix("_:") {
            if label.is_empty() {
                return Err(invalid("blank node without a label"));
            }
            return Ok(Term::blank(label));
        }
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return Ok(Term::literal(&raw[1..raw.len() - 1]));
        }

        let iri = match raw.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
            Some(inner) => inner,
            None => raw,
        };
        if iri.is_empty() || iri.starts_with('#') {
            let base = context
                .and_then(|c| c.doc())
                .ok_or_else(|| invalid("relative IRI outside a document"))?;
            return Ok(Term::named(format!("{}{}", base.value(), iri)));
        }
        if iri.contains("://") {
            return Ok(Term::named(iri));
        }
        if let Some((prefix, local)) = iri.split_once(':') {
            if let Some(ns) = self.prefix(prefix) {
                return Ok(Term::named(format!("{}{}", ns, local)));
            }
            // urn:, mailto: and friends
            return Ok(Term::named(iri));
        }
        Err(invalid(
            "not an IRI, prefixed name, blank node or literal",
        ))
    }

    fn prefix(&self, name: &str) -> Option<&str> {
        self.prefixes.get(name).map(String::as_str).or_else(|| {
            vocab::PREFIXES
                .iter()
                .find(|(p, _)| *p == name)
                .map(|(_, ns)| *ns)
        })
    }
}
