//! Typed translation failures.

use thiserror::Error;

/// Errors surfaced by the translation engine.
///
/// `UnsupportedConstruct` marks a schema violation in the source model (an
/// entity appearing in a role its kind cannot fill, e.g. a protein listed
/// as a controlled process). The orchestrator treats it as recoverable:
/// the offending component is skipped, counted and logged, and translation
/// continues with the rest of the pathway.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("unsupported construct at '{rdf_id}': a {kind} cannot appear in this role")]
    UnsupportedConstruct { rdf_id: String, kind: String },

    #[error("no pathway named '{name}' in the model")]
    PathwayNotFound { name: String },

    #[error("organism '{org}' is not in the species registry")]
    UnknownOrganism { org: String },
}

impl TranslateError {
    pub(crate) fn unsupported(rdf_id: &str, kind: &str) -> Self {
        Self::UnsupportedConstruct {
            rdf_id: rdf_id.to_string(),
            kind: kind.to_string(),
        }
    }
}
