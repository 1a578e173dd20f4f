//! The identifier-mapper seam.
//!
//! Gene-symbol and KEGG-id resolution needs species-specific mapping
//! tables the engine does not own. [`IdentifierMapper`] is the seam those
//! tables plug into: implementations are total (a miss is `None`, never an
//! error) and the engine degrades gracefully around misses.

use std::collections::HashMap;

use crate::species::Species;

pub trait IdentifierMapper {
    /// Entrez gene id for a gene symbol, exact match.
    fn gene_id_for_symbol(&self, symbol: &str) -> Option<u64>;

    /// KEGG genes accession ("hsa:207") for an Entrez gene id.
    fn kegg_id_for_gene(&self, gene_id: u64, species: &Species) -> Option<String>;
}

/// Symbol lookup with the spelling fallbacks observed in curated content:
/// verbatim first, then with dashes removed, then with blanks replaced by
/// underscores.
pub fn gene_id_for_symbol_with_fallbacks(
    mapper: &dyn IdentifierMapper,
    symbol: &str,
) -> Option<u64> {
    if let Some(id) = mapper.gene_id_for_symbol(symbol) {
        return Some(id);
    }
    if symbol.contains('-') {
        return gene_id_for_symbol_with_fallbacks(mapper, &symbol.replace('-', ""));
    }
    if symbol.contains(' ') {
        return gene_id_for_symbol_with_fallbacks(mapper, &symbol.replace(' ', "_"));
    }
    None
}

/// Maps nothing. The engine then falls back to `"{abbr}:{gene_id}"`
/// accessions and `unknown{N}` placeholder names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMapper;

impl IdentifierMapper for NullMapper {
    fn gene_id_for_symbol(&self, _symbol: &str) -> Option<u64> {
        None
    }

    fn kegg_id_for_gene(&self, _gene_id: u64, _species: &Species) -> Option<String> {
        None
    }
}

/// In-memory mapping tables, for tests and small curated runs.
#[derive(Debug, Clone, Default)]
pub struct TableMapper {
    symbols: HashMap<String, u64>,
    genes: HashMap<(String, u64), String>,
}

impl TableMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>, gene_id: u64) -> Self {
        self.symbols.insert(symbol.into(), gene_id);
        self
    }

    pub fn with_gene(
        mut self,
        kegg_abbr: impl Into<String>,
        gene_id: u64,
        kegg_id: impl Into<String>,
    ) -> Self {
        self.genes
            .insert((kegg_abbr.into(), gene_id), kegg_id.into());
        self
    }
}

impl IdentifierMapper for TableMapper {
    fn gene_id_for_symbol(&self, symbol: &str) -> Option<u64> {
        self.symbols.get(symbol).copied()
    }

    fn kegg_id_for_gene(&self, gene_id: u64, species: &Species) -> Option<String> {
        self.genes
            .get(&(species.kegg_abbr.to_string(), gene_id))
            .cloned()
    }
}
