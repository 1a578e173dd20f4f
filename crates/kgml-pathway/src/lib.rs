//! KGML-style pathway graph model.
//!
//! This crate defines the target side of the BioPAX translation: a pathway
//! graph in the shape of KEGG's KGML format. A [`Pathway`] holds numbered
//! [`Entry`] nodes, [`Reaction`]s between entries, and typed [`Relation`]
//! edges, plus the database-identifier annotations ([`IdentifierMap`])
//! collected for each element.
//!
//! Notes:
//! - The model is pure data. All construction policy (deduplication before
//!   insert, id assignment, name consolidation) lives in the translation
//!   engine; this crate only provides the equivalence and lookup helpers
//!   those policies are written against.
//! - Graphics coordinates are carried verbatim, never computed. Layout is a
//!   downstream concern.

pub mod entry;
pub mod identifiers;
pub mod pathway;
pub mod reaction;
pub mod relation;

pub use entry::{Entry, EntryType, GeneKind, Graphics, GraphicsType};
pub use identifiers::{kegg_db_for_accession, prefixed, IdentifierDb, IdentifierMap};
pub use pathway::Pathway;
pub use reaction::{Reaction, ReactionComponent, ReactionType};
pub use relation::{Relation, RelationSource, RelationType, SubType};
