//! BioPAX source model.
//!
//! An in-memory, read-only representation of a parsed BioPAX Level 2 or
//! Level 3 file, shaped for translation rather than for editing: every
//! element is an [`Entity`] whose [`EntityKind`] is a closed tagged union,
//! so consumers dispatch with an exhaustive `match` instead of probing an
//! open class hierarchy.
//!
//! Notes:
//! - Parsing OWL/RDF into this model is **not** this crate's job; upstream
//!   parsers (or test fixtures) build it through [`BioPaxModel::insert`].
//! - The differences between the two BioPAX levels are normalized away at
//!   construction time. The [`level2`] and [`level3`] modules carry the two
//!   level-specific adaptions (participant wrappers, stoichiometry side
//!   tables); past them, one [`Participant`] shape serves both levels and
//!   the model keeps only a [`BioPaxLevel`] marker for the few spots where
//!   translation semantics still differ.

pub mod entity;
pub mod interaction;
pub mod level2;
pub mod level3;
pub mod model;
pub mod pathway;

pub use entity::{Entity, EntityKind, Participant, PhysicalClass, PhysicalData, Xref};
pub use interaction::{
    ControlClass, ControlData, ControlType, ConversionClass, ConversionData,
    ConversionDirection, InteractionKind,
};
pub use model::{BioPaxLevel, BioPaxModel, ModelError};
pub use pathway::{BioSource, DataSource, PathwayData, PathwayStep};
