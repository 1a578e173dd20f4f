//! The interaction hierarchy, flattened into one tagged union.

use serde::{Deserialize, Serialize};

use crate::entity::Participant;

/// BioPAX `controlType` vocabulary. Closed: a parsed model can only carry
/// these enumerators, so downstream classification is an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlType {
    Activation,
    ActivationAllosteric,
    ActivationNonallosteric,
    ActivationUnknownMechanism,
    Inhibition,
    InhibitionAllosteric,
    InhibitionCompetitive,
    InhibitionIrreversible,
    InhibitionNoncompetitive,
    InhibitionOther,
    InhibitionUncompetitive,
    InhibitionUnknownMechanism,
}

/// Which Control subclass an interaction was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlClass {
    Catalysis,
    Modulation,
    /// Level 3 `TemplateReactionRegulation`.
    TemplateRegulation,
    /// The base `control` class used without refinement.
    Generic,
}

/// A control interaction: controllers acting on controlled processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlData {
    pub class: ControlClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_type: Option<ControlType>,
    pub controllers: Vec<Participant>,
    /// RDF ids of the controlled processes (conversions, pathways, further
    /// interactions).
    pub controlled: Vec<String>,
}

/// Which Conversion subclass an interaction was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionClass {
    Biochemical,
    ComplexAssembly,
    Transport,
    TransportWithBiochemical,
    /// Level 3 only.
    Degradation,
    /// The base `conversion` class used without refinement.
    Generic,
}

/// BioPAX `conversionDirection` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionDirection {
    LeftToRight,
    RightToLeft,
    Reversible,
}

/// A conversion: left participants turned into right participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionData {
    pub class: ConversionClass,
    pub left: Vec<Participant>,
    pub right: Vec<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<ConversionDirection>,
    /// Free-text interaction vocabulary terms attached to the conversion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interaction_terms: Vec<String>,
}

impl ConversionData {
    pub fn of_class(class: ConversionClass) -> Self {
        Self {
            class,
            left: Vec::new(),
            right: Vec::new(),
            direction: None,
            interaction_terms: Vec::new(),
        }
    }
}

/// The closed union of interaction shapes the translation understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractionKind {
    Control(ControlData),
    Conversion(ConversionData),
    /// `GeneticInteraction`: phenotype-linked gene set.
    Genetic { participants: Vec<Participant> },
    /// `MolecularInteraction`: physical contact without conversion.
    Molecular { participants: Vec<Participant> },
    /// `TemplateReaction`: template-directed production of products.
    Template { products: Vec<Participant> },
    /// The base `interaction` class used without refinement.
    Generic {
        participants: Vec<Participant>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        interaction_terms: Vec<String>,
    },
}

impl InteractionKind {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Control(data) => match data.class {
                ControlClass::Catalysis => "catalysis",
                ControlClass::Modulation => "modulation",
                ControlClass::TemplateRegulation => "template reaction regulation",
                ControlClass::Generic => "control",
            },
            Self::Conversion(data) => match data.class {
                ConversionClass::Biochemical => "biochemical reaction",
                ConversionClass::ComplexAssembly => "complex assembly",
                ConversionClass::Transport => "transport",
                ConversionClass::TransportWithBiochemical => {
                    "transport with biochemical reaction"
                }
                ConversionClass::Degradation => "degradation",
                ConversionClass::Generic => "conversion",
            },
            Self::Genetic { .. } => "genetic interaction",
            Self::Molecular { .. } => "molecular interaction",
            Self::Template { .. } => "template reaction",
            Self::Generic { .. } => "interaction",
        }
    }
}
