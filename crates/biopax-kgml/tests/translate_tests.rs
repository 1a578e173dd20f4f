use biopax_kgml::{NullMapper, TableMapper, TranslateError, Translator, MOUSE};
use biopax_model::{
    BioPaxLevel, BioPaxModel, BioSource, ControlClass, ControlData, ControlType, ConversionClass,
    ConversionData, DataSource, Entity, InteractionKind, Participant, PathwayData, PathwayStep,
    Xref,
};
use kgml_pathway::{
    Entry, EntryType, IdentifierDb, Pathway, ReactionType, RelationSource, RelationType, SubType,
};

fn kegg_protein(rdf_id: &str, accession: &str) -> Entity {
    Entity::protein(rdf_id).with_xref(Xref::new("KEGG genes", accession))
}

fn kegg_compound(rdf_id: &str, accession: &str) -> Entity {
    Entity::small_molecule(rdf_id).with_xref(Xref::new("KEGG compound", accession))
}

fn conversion(rdf_id: &str, class: ConversionClass, left: &[&str], right: &[&str]) -> Entity {
    let mut data = ConversionData::of_class(class);
    data.left = left.iter().copied().map(Participant::new).collect();
    data.right = right.iter().copied().map(Participant::new).collect();
    data.direction = Some(biopax_model::ConversionDirection::LeftToRight);
    Entity::interaction(rdf_id, InteractionKind::Conversion(data))
}

fn control(
    rdf_id: &str,
    class: ControlClass,
    control_type: Option<ControlType>,
    controller: &str,
    controlled: &str,
) -> Entity {
    Entity::interaction(
        rdf_id,
        InteractionKind::Control(ControlData {
            class,
            control_type,
            controllers: vec![Participant::new(controller)],
            controlled: vec![controlled.to_string()],
        }),
    )
}

fn human_pathway(rdf_id: &str, title: &str, components: &[&str]) -> Entity {
    Entity::pathway(
        rdf_id,
        PathwayData {
            organism: Some(BioSource::named("Homo sapiens")),
            components: components.iter().map(|c| c.to_string()).collect(),
            ..PathwayData::default()
        },
    )
    .with_name(title)
}

fn translate_single(model: &BioPaxModel) -> Pathway {
    let mut translator = Translator::new(model, &NullMapper);
    let mut pathways = translator.translate(None, "unnamed", None);
    assert_eq!(pathways.len(), 1, "expected exactly one pathway");
    pathways.remove(0)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn catalysis_of_a_reaction_annotates_the_catalyst_instead_of_relating_it() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_protein("enz", "hsa:5594"))
        .expect("insert");
    model
        .insert(kegg_compound("glc", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("g6p", "C00668"))
        .expect("insert");
    model
        .insert(conversion("rxn", ConversionClass::Biochemical, &["glc"], &["g6p"]))
        .expect("insert");
    model
        .insert(control(
            "cat",
            ControlClass::Catalysis,
            Some(ControlType::Activation),
            "enz",
            "rxn",
        ))
        .expect("insert");
    model
        .insert(human_pathway("pathway_42", "glycolysis start", &["cat"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.number, 42);
    assert_eq!(pathway.name, "42");
    assert_eq!(pathway.org, "hsa");
    assert_eq!(pathway.title, "glycolysis start");
    assert_eq!(pathway.origin_format.as_deref(), Some("BioPAX"));

    assert_eq!(pathway.entries.len(), 3);
    assert_eq!(pathway.reactions.len(), 1);
    let reaction = &pathway.reactions[0];
    assert_eq!(reaction.name, "rn:unknown1");
    assert_eq!(reaction.reaction_type, ReactionType::Irreversible);
    assert_eq!(reaction.substrates.len(), 1);
    assert_eq!(reaction.substrates[0].name, "cpd:C00031");
    assert_eq!(reaction.products[0].name, "cpd:C00668");

    // The protein-protein branch must not produce a relation; the catalyst
    // entry gains the reaction name instead.
    assert!(pathway.relations.is_empty());
    let catalyst = pathway.entry_for_id(1).expect("catalyst entry");
    assert_eq!(catalyst.name, "hsa:5594");
    assert_eq!(
        catalyst.reaction_names().collect::<Vec<_>>(),
        ["rn:unknown1"]
    );
}

#[test]
fn a_pathway_controller_links_to_every_substrate_via_maplink() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(Entity::pathway("pathway_7", PathwayData::default()).with_name("tca cycle"))
        .expect("insert");
    model
        .insert(kegg_compound("glc", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("g6p", "C00668"))
        .expect("insert");
    model
        .insert(
            conversion("rxn", ConversionClass::Biochemical, &["glc"], &["g6p"])
                .with_xref(Xref::new("Reactome", "R-HSA-70171")),
        )
        .expect("insert");
    model
        .insert(control(
            "ctl",
            ControlClass::Modulation,
            None,
            "pathway_7",
            "rxn",
        ))
        .expect("insert");
    model
        .insert(human_pathway("pathway_42", "sugar entry points", &["ctl"]))
        .expect("insert");

    let pathway = translate_single(&model);
    let controller = pathway.entry_for_id(1).expect("controller entry");
    assert_eq!(controller.entry_type, EntryType::Map);
    assert!(controller.reaction_names().next().is_none());

    assert_eq!(pathway.reactions.len(), 1);
    assert_eq!(pathway.relations.len(), 1);
    let relation = &pathway.relations[0];
    assert_eq!((relation.entry1, relation.entry2), (1, 2));
    assert_eq!(relation.relation_type, RelationType::Maplink);
    assert!(relation.subtypes.contains(&SubType::MissingInteraction));
    // Relations derived from a controlled process carry its identifiers.
    assert!(relation
        .identifiers
        .get(IdentifierDb::Reactome)
        .is_some_and(|ids| ids.contains("R-HSA-70171")));
}

#[test]
fn equivalent_entities_share_one_entry_and_ids_stay_gapless() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_compound("glc", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("g6p", "C00668"))
        .expect("insert");
    model
        .insert(kegg_compound("f6p", "C00085"))
        .expect("insert");
    model
        .insert(conversion("r1", ConversionClass::Biochemical, &["glc"], &["g6p"]))
        .expect("insert");
    model
        .insert(conversion("r2", ConversionClass::Biochemical, &["glc"], &["f6p"]))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "branch point", &["r1", "r2"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.entries.len(), 3);
    let mut ids: Vec<u32> = pathway.entries.iter().map(|entry| entry.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(pathway.reactions.len(), 2);
    assert_eq!(pathway.reactions[0].name, "rn:unknown1");
    assert_eq!(pathway.reactions[1].name, "rn:unknown2");
    // Both reactions consume the same substrate entry.
    assert_eq!(
        pathway.reactions[0].substrates[0].id,
        pathway.reactions[1].substrates[0].id
    );
}

#[test]
fn nested_complexes_flatten_to_leaf_component_ids() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model.insert(kegg_protein("p1", "hsa:10")).expect("insert");
    model.insert(kegg_protein("p2", "hsa:20")).expect("insert");
    model.insert(kegg_protein("p3", "hsa:30")).expect("insert");
    model
        .insert(Entity::complex(
            "inner",
            vec![Participant::new("p1"), Participant::new("p2")],
        ))
        .expect("insert");
    model
        .insert(Entity::complex(
            "outer",
            vec![Participant::new("inner"), Participant::new("p3")],
        ))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "assembly", &["outer"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.entries.len(), 4);
    let groups: Vec<&Entry> = pathway
        .entries
        .iter()
        .filter(|entry| entry.entry_type == EntryType::Group)
        .collect();
    // The inner complex contributes leaves, never a nested group entry.
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].components, [1, 2, 3]);
    assert_eq!(
        groups[0].graphics.as_ref().map(|g| g.name.as_str()),
        Some("undefined")
    );
}

#[test]
fn cyclic_complex_membership_terminates_and_keeps_the_leaves() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model.insert(kegg_protein("p1", "hsa:10")).expect("insert");
    model
        .insert(Entity::complex(
            "loop",
            vec![Participant::new("loop"), Participant::new("p1")],
        ))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "assembly", &["loop"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.entries.len(), 2);
    let group = pathway
        .entries
        .iter()
        .find(|entry| entry.entry_type == EntryType::Group)
        .expect("group entry");
    assert_eq!(group.components, [1]);
}

#[test]
fn complex_members_are_appended_even_when_an_equivalent_entry_exists() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model.insert(kegg_protein("p1", "hsa:10")).expect("insert");
    model
        .insert(Entity::complex("cplx", vec![Participant::new("p1")]))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "duplication", &["p1", "cplx"]))
        .expect("insert");

    let pathway = translate_single(&model);
    // p1 standalone, p1 as a member, and the group itself.
    assert_eq!(pathway.entries.len(), 3);
    let group = pathway
        .entries
        .iter()
        .find(|entry| entry.entry_type == EntryType::Group)
        .expect("group entry");
    assert_eq!(group.components, [2]);
}

#[test]
fn duplicate_relations_merge_their_subtypes() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_protein("reg", "hsa:5594"))
        .expect("insert");
    model
        .insert(Entity::pathway("pathway_9", PathwayData::default()).with_name("apoptosis"))
        .expect("insert");
    model
        .insert(control(
            "c1",
            ControlClass::Catalysis,
            Some(ControlType::Activation),
            "reg",
            "pathway_9",
        ))
        .expect("insert");
    model
        .insert(control(
            "c2",
            ControlClass::Modulation,
            Some(ControlType::InhibitionCompetitive),
            "reg",
            "pathway_9",
        ))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "regulation", &["c1", "c2"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.relations.len(), 1);
    let relation = &pathway.relations[0];
    assert_eq!(relation.relation_type, RelationType::Pprel);
    assert!(relation.subtypes.contains(&SubType::Activation));
    // Every inhibition refinement classifies as plain inhibition.
    assert!(relation.subtypes.contains(&SubType::Inhibition));
    assert_eq!(relation.subtypes.len(), 2);
    assert_eq!(relation.source, None);
}

#[test]
fn reactions_deduplicate_by_component_sets_and_type() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_compound("glc", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("g6p", "C00668"))
        .expect("insert");
    model
        .insert(conversion("r1", ConversionClass::Biochemical, &["glc"], &["g6p"]))
        .expect("insert");
    model
        .insert(conversion("r2", ConversionClass::Biochemical, &["glc"], &["g6p"]))
        .expect("insert");
    let mut reversible = ConversionData::of_class(ConversionClass::Biochemical);
    reversible.left = vec![Participant::new("glc")];
    reversible.right = vec![Participant::new("g6p")];
    reversible.direction = Some(biopax_model::ConversionDirection::Reversible);
    model
        .insert(Entity::interaction(
            "r3",
            InteractionKind::Conversion(reversible),
        ))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "one step", &["r1", "r2", "r3"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.entries.len(), 2);
    // r2 collapses into r1; r3 differs in type and stands alone.
    assert_eq!(pathway.reactions.len(), 2);
    assert_eq!(pathway.reactions[0].name, "rn:unknown1");
    assert_eq!(pathway.reactions[0].reaction_type, ReactionType::Irreversible);
    assert_eq!(pathway.reactions[1].name, "rn:unknown2");
    assert_eq!(pathway.reactions[1].reaction_type, ReactionType::Reversible);
}

#[test]
fn unresolvable_entities_get_strictly_increasing_placeholder_names() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(Entity::protein("p1").with_name("alpha"))
        .expect("insert");
    model
        .insert(Entity::protein("p2").with_name("beta"))
        .expect("insert");
    model
        .insert(Entity::protein("p3").with_name("gamma"))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "nameless", &["p1", "p2", "p3"]))
        .expect("insert");

    let pathway = translate_single(&model);
    let names: Vec<&str> = pathway
        .entries
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, ["unknown1", "unknown2", "unknown3"]);
}

#[test]
fn template_reactions_become_expression_self_relations() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model.insert(kegg_protein("gp", "hsa:30")).expect("insert");
    model
        .insert(Entity::interaction(
            "tmpl",
            InteractionKind::Template {
                products: vec![Participant::new("gp")],
            },
        ))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "expression", &["tmpl"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.relations.len(), 1);
    let relation = &pathway.relations[0];
    assert_eq!((relation.entry1, relation.entry2), (1, 1));
    assert_eq!(relation.relation_type, RelationType::Gerel);
    assert!(relation.subtypes.contains(&SubType::Expression));
}

#[test]
fn a_controlled_template_chains_the_controller_to_the_product() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_protein("tf", "hsa:40"))
        .expect("insert");
    model.insert(kegg_protein("gp", "hsa:30")).expect("insert");
    model
        .insert(Entity::interaction(
            "tmpl",
            InteractionKind::Template {
                products: vec![Participant::new("gp")],
            },
        ))
        .expect("insert");
    model
        .insert(control(
            "reg",
            ControlClass::TemplateRegulation,
            Some(ControlType::Inhibition),
            "tf",
            "tmpl",
        ))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "repression", &["reg"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.relations.len(), 2);
    let expression = &pathway.relations[0];
    assert_eq!((expression.entry1, expression.entry2), (2, 2));
    assert_eq!(expression.relation_type, RelationType::Gerel);
    let chain = &pathway.relations[1];
    assert_eq!((chain.entry1, chain.entry2), (1, 2));
    assert_eq!(chain.relation_type, RelationType::Pprel);
    assert!(chain.subtypes.contains(&SubType::Inhibition));
}

#[test]
fn unclassified_conversions_relate_left_to_right_with_their_term_subtype() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model.insert(kegg_protein("x", "hsa:1")).expect("insert");
    model.insert(kegg_protein("y", "hsa:2")).expect("insert");
    let mut data = ConversionData::of_class(ConversionClass::Generic);
    data.left = vec![Participant::new("x")];
    data.right = vec![Participant::new("y")];
    data.interaction_terms = vec!["some_uncatalogued_process".to_string()];
    model
        .insert(Entity::interaction("cv", InteractionKind::Conversion(data)))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "vague step", &["cv"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert!(pathway.reactions.is_empty());
    assert_eq!(pathway.relations.len(), 1);
    let relation = &pathway.relations[0];
    assert_eq!((relation.entry1, relation.entry2), (1, 2));
    assert_eq!(relation.relation_type, RelationType::Pprel);
    assert!(relation.subtypes.contains(&SubType::StateChange));
}

#[test]
fn generic_interaction_pair_type_follows_the_model_level() {
    for (level, expected) in [
        (BioPaxLevel::Level3, RelationType::Maplink),
        (BioPaxLevel::Level2, RelationType::Other),
    ] {
        let mut model = BioPaxModel::new(level);
        model.insert(kegg_protein("x", "hsa:1")).expect("insert");
        model.insert(kegg_protein("y", "hsa:2")).expect("insert");
        model
            .insert(Entity::interaction(
                "gi",
                InteractionKind::Generic {
                    participants: vec![Participant::new("x"), Participant::new("y")],
                    interaction_terms: Vec::new(),
                },
            ))
            .expect("insert");
        model
            .insert(human_pathway("pathway_1", "contact", &["gi"]))
            .expect("insert");

        let pathway = translate_single(&model);
        assert_eq!(pathway.relations.len(), 2, "one relation per ordered pair");
        for relation in &pathway.relations {
            assert_eq!(relation.relation_type, expected);
            assert!(relation.subtypes.contains(&SubType::MissingInteraction));
        }
    }
}

#[test]
fn genetic_and_molecular_interactions_relate_participant_pairs() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model.insert(kegg_protein("a", "hsa:1")).expect("insert");
    model.insert(kegg_protein("b", "hsa:2")).expect("insert");
    model.insert(kegg_protein("c", "hsa:3")).expect("insert");
    model
        .insert(Entity::interaction(
            "gen",
            InteractionKind::Genetic {
                participants: vec![Participant::new("a"), Participant::new("b")],
            },
        ))
        .expect("insert");
    model
        .insert(Entity::interaction(
            "mol",
            InteractionKind::Molecular {
                participants: vec![Participant::new("b"), Participant::new("c")],
            },
        ))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "interactions", &["gen", "mol"]))
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.relations.len(), 2);
    let genetic = &pathway.relations[0];
    assert_eq!(genetic.relation_type, RelationType::Gerel);
    assert!(genetic.subtypes.contains(&SubType::Association));
    let molecular = &pathway.relations[1];
    assert_eq!(molecular.relation_type, RelationType::Pprel);
    assert!(molecular.subtypes.contains(&SubType::IndirectEffect));
}

#[test]
fn stoichiometric_coefficients_survive_when_positive() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_compound("pyr", "C00022"))
        .expect("insert");
    model
        .insert(kegg_compound("glc", "C00031"))
        .expect("insert");
    let mut data = ConversionData::of_class(ConversionClass::Biochemical);
    data.left = vec![Participant::new("pyr").with_stoichiometry(2.0)];
    data.right = vec![Participant::new("glc")];
    model
        .insert(Entity::interaction("cv", InteractionKind::Conversion(data)))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "gluconeogenesis tail", &["cv"]))
        .expect("insert");

    let pathway = translate_single(&model);
    let reaction = &pathway.reactions[0];
    assert_eq!(reaction.substrates[0].stoichiometry, Some(2));
    assert_eq!(reaction.products[0].stoichiometry, None);
}

#[test]
fn pathway_numbers_come_from_the_rdf_suffix_or_the_fallback_counter() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_compound("c1", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("c2", "C00668"))
        .expect("insert");
    model
        .insert(conversion("r1", ConversionClass::Biochemical, &["c1"], &["c2"]))
        .expect("insert");
    model
        .insert(conversion("r2", ConversionClass::Biochemical, &["c2"], &["c1"]))
        .expect("insert");
    model
        .insert(Entity::pathway(
            "pathway_50",
            PathwayData {
                organism: Some(BioSource::named("Homo sapiens")),
                components: vec!["r1".to_string()],
                data_sources: vec![DataSource {
                    names: vec!["pid".to_string()],
                    comments: vec!["http://pid.nci.nih.gov".to_string()],
                }],
                ..PathwayData::default()
            },
        ).with_name("cell cycle"))
        .expect("insert");
    model
        .insert(Entity::pathway(
            "oddball",
            PathwayData {
                components: vec!["r2".to_string()],
                ..PathwayData::default()
            },
        ))
        .expect("insert");

    let mut translator = Translator::new(&model, &NullMapper);
    let pathways = translator.translate(Some("from a unit test"), "unnamed", None);
    assert_eq!(pathways.len(), 2);

    assert_eq!(pathways[0].number, 50);
    assert_eq!(pathways[0].name, "pid50");
    assert_eq!(pathways[0].title, "cell cycle");
    assert_eq!(pathways[0].org, "hsa");
    assert_eq!(pathways[0].link.as_deref(), Some("http://pid.nci.nih.gov"));
    assert_eq!(pathways[0].comment.as_deref(), Some("from a unit test"));

    assert_eq!(pathways[1].number, 100_000);
    assert_eq!(pathways[1].name, "100000");
    assert_eq!(pathways[1].title, "unknown");
    assert_eq!(pathways[1].org, "");
    // Entry ids keep climbing across pathways of one run.
    assert!(pathways[1].entries.iter().all(|entry| entry.id > 2));
}

#[test]
fn pathways_translating_empty_are_discarded() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(human_pathway("pathway_1", "ghost town", &["missing"]))
        .expect("insert");

    let mut translator = Translator::new(&model, &NullMapper);
    let pathways = translator.translate(None, "unnamed", None);
    assert!(pathways.is_empty());
    assert_eq!(translator.skipped_constructs(), 0);
}

#[test]
fn unsupported_constructs_are_skipped_and_counted_without_aborting() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_protein("reg", "hsa:40"))
        .expect("insert");
    model
        .insert(kegg_protein("victim", "hsa:50"))
        .expect("insert");
    model
        .insert(kegg_compound("glc", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("g6p", "C00668"))
        .expect("insert");
    // A protein can never be a controlled process.
    model
        .insert(control(
            "bad",
            ControlClass::Generic,
            None,
            "reg",
            "victim",
        ))
        .expect("insert");
    model
        .insert(conversion("good", ConversionClass::Biochemical, &["glc"], &["g6p"]))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "mixed bag", &["bad", "good"]))
        .expect("insert");

    let mut translator = Translator::new(&model, &NullMapper);
    let pathways = translator.translate(None, "unnamed", None);
    assert_eq!(pathways.len(), 1);
    assert_eq!(translator.skipped_constructs(), 1);
    // The valid conversion after the bad control still translated.
    assert_eq!(pathways[0].reactions.len(), 1);
}

#[test]
fn cyclic_step_chains_terminate_and_translate_each_step_once() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level2);
    model
        .insert(kegg_compound("a", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("b", "C00668"))
        .expect("insert");
    model
        .insert(kegg_compound("c", "C00085"))
        .expect("insert");
    model
        .insert(conversion("cv1", ConversionClass::Biochemical, &["a"], &["b"]))
        .expect("insert");
    model
        .insert(conversion("cv2", ConversionClass::Biochemical, &["b"], &["c"]))
        .expect("insert");
    model
        .insert(
            Entity::pathway(
                "pathway_3",
                PathwayData {
                    organism: Some(BioSource::named("Homo sapiens")),
                    steps: vec![
                        PathwayStep {
                            interactions: vec!["cv1".to_string()],
                            next: vec![1],
                        },
                        PathwayStep {
                            interactions: vec!["cv2".to_string()],
                            next: vec![0],
                        },
                    ],
                    ..PathwayData::default()
                },
            )
            .with_name("looped chain"),
        )
        .expect("insert");

    let pathway = translate_single(&model);
    assert_eq!(pathway.reactions.len(), 2);
    assert_eq!(pathway.reactions[0].substrates[0].id, 1);
    assert_eq!(pathway.reactions[1].substrates[0].id, 2);
}

#[test]
fn flat_models_translate_as_one_pathway_named_by_the_caller() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model.add_bio_source(BioSource::named("Homo sapiens"));
    model
        .insert(kegg_compound("glc", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("g6p", "C00668"))
        .expect("insert");
    model
        .insert(conversion("cv", ConversionClass::Biochemical, &["glc"], &["g6p"]))
        .expect("insert");

    let mut translator = Translator::new(&model, &NullMapper);
    let pathways = translator.translate(None, "exported fragment", None);
    assert_eq!(pathways.len(), 1);
    assert_eq!(pathways[0].title, "exported fragment");
    assert_eq!(pathways[0].number, 100_000);
    assert_eq!(pathways[0].name, "100000");
    assert_eq!(pathways[0].org, "hsa");
    assert_eq!(pathways[0].reactions.len(), 1);
    assert_eq!(pathways[0].entries.len(), 2);
}

#[test]
fn translate_named_picks_one_pathway_by_title() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_compound("a", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("b", "C00668"))
        .expect("insert");
    model
        .insert(conversion("cv1", ConversionClass::Biochemical, &["a"], &["b"]))
        .expect("insert");
    model
        .insert(conversion("cv2", ConversionClass::Biochemical, &["b"], &["a"]))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "alpha", &["cv1"]))
        .expect("insert");
    model
        .insert(human_pathway("pathway_2", "beta", &["cv2"]))
        .expect("insert");

    let mut translator = Translator::new(&model, &NullMapper);
    let pathway = translator
        .translate_named("beta", None, None)
        .expect("pathway exists");
    assert_eq!(pathway.title, "beta");
    assert_eq!(pathway.reactions.len(), 1);

    let err = translator.translate_named("gamma", None, None).unwrap_err();
    assert!(matches!(err, TranslateError::PathwayNotFound { .. }));
}

#[test]
fn the_pathway_organism_beats_the_caller_default() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_compound("a", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("b", "C00668"))
        .expect("insert");
    model
        .insert(conversion("cv", ConversionClass::Biochemical, &["a"], &["b"]))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "human pathway", &["cv"]))
        .expect("insert");

    let mut translator = Translator::new(&model, &NullMapper);
    let pathways = translator.translate(None, "unnamed", Some(&MOUSE));
    assert_eq!(pathways[0].org, "hsa");
}

#[test]
fn organismless_pathways_fall_back_to_the_caller_species() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(kegg_compound("a", "C00031"))
        .expect("insert");
    model
        .insert(kegg_compound("b", "C00668"))
        .expect("insert");
    model
        .insert(conversion("cv", ConversionClass::Biochemical, &["a"], &["b"]))
        .expect("insert");
    model
        .insert(
            Entity::pathway(
                "pathway_1",
                PathwayData {
                    components: vec!["cv".to_string()],
                    ..PathwayData::default()
                },
            )
            .with_name("unannotated"),
        )
        .expect("insert");

    let mut translator = Translator::new(&model, &NullMapper);
    let pathways = translator.translate(None, "unnamed", Some(&MOUSE));
    assert_eq!(pathways[0].org, "mmu");
}

#[test]
fn gene_symbols_consolidate_through_the_mapper() {
    let mapper = TableMapper::new()
        .with_symbol("TP53", 7157)
        .with_gene("hsa", 7157, "hsa:7157")
        .with_symbol("BRCA2", 675);

    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model
        .insert(Entity::protein("p53").with_name("TP53"))
        .expect("insert");
    model
        .insert(Entity::protein("brca").with_name("BRCA2"))
        .expect("insert");
    model
        .insert(human_pathway("pathway_1", "tumor suppressors", &["p53", "brca"]))
        .expect("insert");

    let mut translator = Translator::new(&model, &mapper);
    let pathways = translator.translate(None, "unnamed", None);
    let names: Vec<&str> = pathways[0]
        .entries
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    // TP53 maps through to a KEGG id; BRCA2 has a gene id but no KEGG row
    // and falls back to the organism prefix.
    assert_eq!(names, ["hsa:7157", "hsa:675"]);
}

// ============================================================================
// Augmentation
// ============================================================================

fn target_pathway() -> Pathway {
    let mut target = Pathway::new("hsa04010", "hsa", 4010, "MAPK signaling");
    target.add_entry(Entry::new(1, EntryType::Gene, "hsa:10"));
    target.add_entry(Entry::new(2, EntryType::Gene, "hsa:20"));
    target
}

fn augmentation_source(interaction: Entity) -> BioPaxModel {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model.insert(kegg_protein("x", "hsa:10")).expect("insert");
    model.insert(kegg_protein("y", "hsa:20")).expect("insert");
    model
        .insert(kegg_protein("x2", "hsa:10"))
        .expect("insert");
    let rdf_id = interaction.rdf_id.clone();
    model.insert(interaction).expect("insert");
    model
        .insert(human_pathway("pathway_1", "source", &[rdf_id.as_str()]))
        .expect("insert");
    model
}

#[test]
fn augmentation_adds_relations_between_existing_entries_only() {
    let model = augmentation_source(Entity::interaction(
        "gi",
        InteractionKind::Generic {
            participants: vec![Participant::new("x"), Participant::new("y")],
            interaction_terms: Vec::new(),
        },
    ));
    let mut target = target_pathway();

    let mut translator = Translator::new(&model, &NullMapper);
    let report = translator.augment(&mut target).expect("augment");

    assert_eq!(report.new_relations, 2);
    assert_eq!(report.self_relations, 0);
    assert_eq!(report.merged_subtypes, 0);
    assert_eq!(target.entries.len(), 2, "augmentation never adds entries");
    assert!(target.reactions.is_empty(), "augmentation never adds reactions");
    assert_eq!(target.relations.len(), 2);
    for relation in &target.relations {
        assert_eq!(relation.source, Some(RelationSource::Augmented));
        assert!(target.contains_entry(relation.entry1));
        assert!(target.contains_entry(relation.entry2));
    }
}

#[test]
fn augmentation_counts_and_drops_self_relations() {
    let mut data = ConversionData::of_class(ConversionClass::Generic);
    data.left = vec![Participant::new("x")];
    data.right = vec![Participant::new("x2")];
    let model = augmentation_source(Entity::interaction(
        "cv",
        InteractionKind::Conversion(data),
    ));
    let mut target = target_pathway();

    let mut translator = Translator::new(&model, &NullMapper);
    let report = translator.augment(&mut target).expect("augment");

    assert_eq!(report.new_relations, 0);
    assert_eq!(report.self_relations, 1);
    assert!(target.relations.is_empty());
}

#[test]
fn augmentation_merges_subtypes_into_existing_relations() {
    let mut data = ConversionData::of_class(ConversionClass::Generic);
    data.left = vec![Participant::new("x")];
    data.right = vec![Participant::new("y")];
    data.interaction_terms = vec!["inhibition".to_string()];
    let model = augmentation_source(Entity::interaction(
        "cv",
        InteractionKind::Conversion(data),
    ));

    let mut target = target_pathway();
    let mut existing = kgml_pathway::Relation::new(1, 2, RelationType::Pprel);
    existing.add_subtype(SubType::Activation);
    target.add_relation(existing);

    let mut translator = Translator::new(&model, &NullMapper);
    let report = translator.augment(&mut target).expect("augment");

    assert_eq!(report.new_relations, 0);
    assert_eq!(report.merged_subtypes, 1);
    assert_eq!(target.relations.len(), 1);
    let relation = &target.relations[0];
    assert!(relation.subtypes.contains(&SubType::Activation));
    assert!(relation.subtypes.contains(&SubType::Inhibition));
    assert_eq!(relation.source, Some(RelationSource::Merged));
}

#[test]
fn augmentation_ignores_entities_with_placeholder_names() {
    let mut model = augmentation_source(Entity::interaction(
        "gi",
        InteractionKind::Generic {
            participants: vec![
                Participant::new("x"),
                // No cross-references: consolidates to a placeholder name.
                Participant::new("ghost"),
            ],
            interaction_terms: Vec::new(),
        },
    ));
    model.insert(Entity::protein("ghost")).expect("insert");
    let mut target = target_pathway();

    let mut translator = Translator::new(&model, &NullMapper);
    let report = translator.augment(&mut target).expect("augment");

    assert_eq!(report.new_relations, 0);
    assert!(target.relations.is_empty());
}

#[test]
fn augmentation_skips_source_pathways_of_other_organisms() {
    let mut model = BioPaxModel::new(BioPaxLevel::Level3);
    model.insert(kegg_protein("x", "hsa:10")).expect("insert");
    model.insert(kegg_protein("y", "hsa:20")).expect("insert");
    model
        .insert(Entity::interaction(
            "gi",
            InteractionKind::Generic {
                participants: vec![Participant::new("x"), Participant::new("y")],
                interaction_terms: Vec::new(),
            },
        ))
        .expect("insert");
    model
        .insert(
            Entity::pathway(
                "pathway_1",
                PathwayData {
                    organism: Some(BioSource::named("Mus musculus")),
                    components: vec!["gi".to_string()],
                    ..PathwayData::default()
                },
            )
            .with_name("mouse source"),
        )
        .expect("insert");
    let mut target = target_pathway();

    let mut translator = Translator::new(&model, &NullMapper);
    let report = translator.augment(&mut target).expect("augment");
    assert_eq!(report.new_relations, 0);
    assert!(target.relations.is_empty());
}

#[test]
fn augmenting_a_pathway_with_an_unknown_organism_fails() {
    let model = BioPaxModel::new(BioPaxLevel::Level3);
    let mut target = Pathway::new("xyz00001", "xyz", 1, "mystery");

    let mut translator = Translator::new(&model, &NullMapper);
    let err = translator.augment(&mut target).unwrap_err();
    assert!(matches!(err, TranslateError::UnknownOrganism { .. }));
}

#[test]
fn augmentation_accepts_every_registered_organism_code() {
    for org in ["hsa", "mmu", "rno"] {
        let model = BioPaxModel::new(BioPaxLevel::Level3);
        let mut target = Pathway::new(format!("{org}00001"), org, 1, "empty");
        let mut translator = Translator::new(&model, &NullMapper);
        let report = translator.augment(&mut target).expect("registered organism");
        assert_eq!(report, biopax_kgml::AugmentReport::default());
    }
}
