//! Cross-Reference Linker.
//!
//! Connects the reaction corpus to the element catalog in both directions:
//! the master reaction index (id to summary), and the reaction summaries
//! embedded in every element record a reaction involves. Also hosts the
//! reaction-level integrity checks shared with [`crate::validate`].

mod check;
mod embed;
mod error;

use std::collections::BTreeMap;

use tracing::info;

pub use check::{check_duplicate_ids, check_id, check_reactions, check_symbols};
pub use embed::{
    ElementReactionMap, build_element_reaction_map, inject_reactions,
    recompute_embedded_reactions, summarize_conditions,
};
pub use error::GenerateError;

use crate::model::element::Element;
use crate::model::index::{ReactionIndex, ReactionIndexEntry};
use crate::model::reaction::Reaction;
use crate::model::symbols::SymbolTable;

/// The master reaction index, keyed by id in corpus order.
///
/// Fails with every duplicate id found anywhere in the corpus.
pub fn build_reaction_index(reactions: &[Reaction]) -> Result<ReactionIndex, GenerateError> {
    let duplicates = check_duplicate_ids(reactions);
    if !duplicates.is_empty() {
        return Err(GenerateError::Invalid(duplicates));
    }

    let mut index = ReactionIndex::new();
    for rxn in reactions {
        index.insert(
            rxn.id.clone(),
            ReactionIndexEntry {
                name: rxn.name.clone(),
                category: rxn.category,
                reaction_type: rxn.reaction_type.clone(),
                elements_involved: rxn.elements_involved.clone(),
                equation: rxn.equation.clone(),
            },
        );
    }
    Ok(index)
}

/// How the reaction corpus covers the element catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coverage {
    /// Reactions per element symbol, for every symbol the corpus mentions.
    pub reaction_counts: BTreeMap<String, usize>,
    pub with_reactions: usize,
    pub without_reactions: usize,
}

impl Coverage {
    fn from_map(map: &ElementReactionMap, elements: &[Element]) -> Self {
        let with_reactions = elements
            .iter()
            .filter(|e| map.contains_key(&e.symbol))
            .count();
        Self {
            reaction_counts: map.iter().map(|(s, v)| (s.clone(), v.len())).collect(),
            with_reactions,
            without_reactions: elements.len() - with_reactions,
        }
    }
}

/// Everything derived from one pass over the reaction corpus.
#[derive(Debug, Clone)]
pub struct Linked {
    pub reaction_index: ReactionIndex,
    /// The full element catalog with recomputed embedded reactions.
    pub elements: Vec<Element>,
    pub coverage: Coverage,
}

/// Validates the corpus against the catalog and derives all reaction artifacts.
///
/// Nothing is derived unless the corpus is free of duplicate ids, malformed
/// ids and unknown symbols; in that case every issue is returned at once.
pub fn link(elements: &[Element], reactions: &[Reaction]) -> Result<Linked, GenerateError> {
    let symbols = SymbolTable::from_elements(elements);
    let issues = check_reactions(reactions, &symbols);
    if !issues.is_empty() {
        return Err(GenerateError::Invalid(issues));
    }

    let reaction_index = build_reaction_index(reactions)?;
    let map = build_element_reaction_map(reactions);
    let coverage = Coverage::from_map(&map, elements);
    let elements = inject_reactions(&map, elements);

    info!(
        reactions = reaction_index.len(),
        symbols = coverage.reaction_counts.len(),
        "linked reaction corpus"
    );

    Ok(Linked {
        reaction_index,
        elements,
        coverage,
    })
}
