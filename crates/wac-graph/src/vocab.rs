// vocab.rs — The fixed vocabulary the engine reads.
//
// None of these IRIs are configurable. An ACL that spells a predicate
// differently simply does not match.

use crate::term::Term;

/// Web Access Control terms.
pub mod acl {
    use super::Term;

    pub const NS: &str = "http://www.w3.org/ns/auth/acl#";

    pub const AUTHORIZATION: &str = "http://www.w3.org/ns/auth/acl#Authorization";

    // Modes
    pub const READ: &str = "http://www.w3.org/ns/auth/acl#Read";
    pub const WRITE: &str = "http://www.w3.org/ns/auth/acl#Write";
    pub const APPEND: &str = "http://www.w3.org/ns/auth/acl#Append";
    pub const CONTROL: &str = "http://www.w3.org/ns/auth/acl#Control";

    // Audience
    pub const AGENT: &str = "http://www.w3.org/ns/auth/acl#agent";
    pub const AGENT_CLASS: &str = "http://www.w3.org/ns/auth/acl#agentClass";
    pub const AGENT_GROUP: &str = "http://www.w3.org/ns/auth/acl#agentGroup";
    pub const AUTHENTICATED_AGENT: &str = "http://www.w3.org/ns/auth/acl#AuthenticatedAgent";

    // Targets
    pub const ACCESS_TO: &str = "http://www.w3.org/ns/auth/acl#accessTo";
    pub const DEFAULT: &str = "http://www.w3.org/ns/auth/acl#default";
    /// Deprecated spelling of [`DEFAULT`], still honored.
    pub const DEFAULT_FOR_NEW: &str = "http://www.w3.org/ns/auth/acl#defaultForNew";

    pub const ORIGIN: &str = "http://www.w3.org/ns/auth/acl#origin";
    pub const MODE: &str = "http://www.w3.org/ns/auth/acl#mode";
    pub const TRUSTED_APP: &str = "http://www.w3.org/ns/auth/acl#trustedApp";

    /// A named node in this vocabulary.
    pub fn term(iri: &str) -> Term {
        Term::named(iri)
    }

    pub fn mode() -> Term {
        Term::named(MODE)
    }

    pub fn origin() -> Term {
        Term::named(ORIGIN)
    }
}

/// FOAF terms.
pub mod foaf {
    /// The class of all agents; as an `acl:agentClass` it means "public".
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
}

/// vCard terms.
pub mod vcard {
    /// Group membership, resolved in the group's own document.
    pub const HAS_MEMBER: &str = "http://www.w3.org/2006/vcard/ns#hasMember";
}

/// RDF core terms.
pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// Built-in prefixes available to graph documents.
pub const PREFIXES: &[(&str, &str)] = &[
    ("acl", acl::NS),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("vcard", "http://www.w3.org/2006/vcard/ns#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
];
