//! The pathway container and its lookup helpers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::identifiers::IdentifierMap;
use crate::reaction::{Reaction, ReactionComponent, ReactionType};
use crate::relation::{Relation, RelationType};

/// A pathway graph: entries, reactions and relations under one name.
///
/// `name` carries the source-database tag plus the pathway number
/// ("biocarta70523"); `org` is a KEGG organism abbreviation ("hsa") or empty
/// when no species was determined; `title` is the human-readable name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pathway {
    pub name: String,
    pub org: String,
    pub number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Format the pathway was translated from, e.g. "BioPAX".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_format: Option<String>,
    #[serde(default, skip_serializing_if = "IdentifierMap::is_empty")]
    pub identifiers: IdentifierMap,
    pub entries: Vec<Entry>,
    pub reactions: Vec<Reaction>,
    pub relations: Vec<Relation>,
}

impl Pathway {
    pub fn new(
        name: impl Into<String>,
        org: impl Into<String>,
        number: u32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            org: org.into(),
            number,
            title: title.into(),
            image: None,
            link: None,
            comment: None,
            origin_format: None,
            identifiers: IdentifierMap::new(),
            entries: Vec::new(),
            reactions: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// True when the pathway holds no entries, reactions or relations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.reactions.is_empty() && self.relations.is_empty()
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn add_reaction(&mut self, reaction: Reaction) {
        self.reactions.push(reaction);
    }

    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    pub fn entry_for_id(&self, id: u32) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entry_for_id_mut(&mut self, id: u32) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn contains_entry(&self, id: u32) -> bool {
        self.entry_for_id(id).is_some()
    }

    /// First entry equivalent to `candidate` under
    /// [`Entry::equivalent_to`], for dedup-before-insert.
    pub fn find_equivalent_entry(&self, candidate: &Entry) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.equivalent_to(candidate))
    }

    /// Index of the first reaction matching type and participant sets.
    pub fn find_reaction(
        &self,
        reaction_type: ReactionType,
        substrates: &[ReactionComponent],
        products: &[ReactionComponent],
    ) -> Option<usize> {
        self.reactions
            .iter()
            .position(|reaction| reaction.matches(reaction_type, substrates, products))
    }

    /// Index of the first relation with these ordered endpoints and type.
    pub fn find_relation(
        &self,
        entry1: u32,
        entry2: u32,
        relation_type: RelationType,
    ) -> Option<usize> {
        self.relations
            .iter()
            .position(|relation| relation.matches(entry1, entry2, relation_type))
    }

    /// Entries whose consolidated name shares at least one blank-separated
    /// token with `name`.
    pub fn entries_for_name(&self, name: &str) -> Vec<&Entry> {
        let query: BTreeSet<&str> = name.split_whitespace().collect();
        if query.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.name.split_whitespace().any(|token| query.contains(token)))
            .collect()
    }

    /// The entry best matching a consolidated name: most shared tokens,
    /// then fewest unshared tokens, then lowest id. `None` when no entry
    /// shares a token.
    pub fn best_matching_entry(&self, name: &str) -> Option<&Entry> {
        let query: BTreeSet<&str> = name.split_whitespace().collect();
        if query.is_empty() {
            return None;
        }
        let mut best: Option<(usize, usize, &Entry)> = None;
        for entry in &self.entries {
            let tokens: BTreeSet<&str> = entry.name.split_whitespace().collect();
            let shared = tokens.intersection(&query).count();
            if shared == 0 {
                continue;
            }
            let extra = tokens.len() - shared;
            let better = match best {
                None => true,
                Some((best_shared, best_extra, best_entry)) => {
                    shared > best_shared
                        || (shared == best_shared
                            && (extra < best_extra
                                || (extra == best_extra && entry.id < best_entry.id)))
                }
            };
            if better {
                best = Some((shared, extra, entry));
            }
        }
        best.map(|(_, _, entry)| entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryType;

    fn pathway_with_names(names: &[&str]) -> Pathway {
        let mut pathway = Pathway::new("biocarta100000", "hsa", 100_000, "test");
        for (i, name) in names.iter().enumerate() {
            pathway.add_entry(Entry::new(i as u32 + 1, EntryType::Gene, *name));
        }
        pathway
    }

    #[test]
    fn empty_pathway_is_empty() {
        let mut pathway = Pathway::new("biocarta100000", "hsa", 100_000, "test");
        assert!(pathway.is_empty());
        pathway.add_relation(Relation::new(1, 2, RelationType::Pprel));
        assert!(!pathway.is_empty());
    }

    #[test]
    fn name_lookup_uses_token_overlap() {
        let pathway = pathway_with_names(&["hsa:5290 hsa:5291", "hsa:207", "cpd:C00031"]);
        let hits = pathway.entries_for_name("hsa:5291");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert!(pathway.entries_for_name("hsa:9999").is_empty());
    }

    #[test]
    fn best_match_prefers_most_shared_then_fewest_extra() {
        let pathway = pathway_with_names(&[
            "hsa:5290 hsa:5291 hsa:5293",
            "hsa:5290 hsa:5291",
            "hsa:5290",
        ]);
        // Two shared tokens beat one; among equals, fewer leftover tokens win.
        let best = pathway.best_matching_entry("hsa:5290 hsa:5291").unwrap();
        assert_eq!(best.id, 2);
        // A single-token query resolves to the tightest name.
        let best = pathway.best_matching_entry("hsa:5290").unwrap();
        assert_eq!(best.id, 3);
    }

    #[test]
    fn best_match_breaks_full_ties_by_id() {
        let pathway = pathway_with_names(&["hsa:207", "hsa:207"]);
        assert_eq!(pathway.best_matching_entry("hsa:207").unwrap().id, 1);
    }
}
