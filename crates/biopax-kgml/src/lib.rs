//! BioPAX to KGML-style pathway-graph translation.
//!
//! The engine reads a parsed [`biopax_model::BioPaxModel`] (Level 2 or
//! Level 3) and builds [`kgml_pathway::Pathway`] graphs: entries for the
//! physical entities, reactions for the conversions, relations for the
//! controls and untyped interactions. One engine covers both levels; the
//! level differences live in the model, not here.
//!
//! Notes:
//! - Two write modes. Construction builds pathways from scratch with
//!   deduplication before every insert; augmentation only adds relations
//!   to an existing pathway, matching entries by consolidated name.
//! - Gene-symbol and KEGG-id resolution goes through the
//!   [`IdentifierMapper`] seam; every miss degrades to a fallback name,
//!   never an error.
//! - Schema violations surface as [`TranslateError::UnsupportedConstruct`]
//!   and are skipped per component, not fatal per model.

pub mod context;
pub mod error;
pub mod mapper;
pub mod species;
pub mod translate;

mod build;
mod collector;
mod dispatch;

pub use context::{AugmentReport, TranslationMode, UNKNOWN_NAME};
pub use error::TranslateError;
pub use mapper::{gene_id_for_symbol_with_fallbacks, IdentifierMapper, NullMapper, TableMapper};
pub use species::{determine_species, Species, HUMAN, MOUSE, RAT};
pub use translate::{find_pathway_by_name, pathway_names, Translator};
