use std::collections::HashSet;

use crate::model::reaction::{Reaction, ReactionId};
use crate::model::symbols::SymbolTable;
use crate::validate::Issue;

/// Every reaction id that was already seen earlier in the corpus.
///
/// Detection spans all category files together.
pub fn check_duplicate_ids(reactions: &[Reaction]) -> Vec<Issue> {
    let mut seen = HashSet::new();
    reactions
        .iter()
        .filter(|r| !seen.insert(r.id.as_str()))
        .map(|r| Issue::DuplicateId { id: r.id.clone() })
        .collect()
}

/// Resolves every `elements_involved` entry against the catalog.
pub fn check_symbols(reactions: &[Reaction], symbols: &SymbolTable) -> Vec<Issue> {
    let mut issues = Vec::new();
    for rxn in reactions {
        if rxn.elements_involved.is_empty() {
            issues.push(Issue::schema(&rxn.id, "elements_involved is empty"));
        }
        for symbol in &rxn.elements_involved {
            if !symbols.contains(symbol) {
                issues.push(Issue::UnknownElementReference {
                    reaction: rxn.id.clone(),
                    symbol: symbol.clone(),
                });
            }
        }
    }
    issues
}

/// Checks one reaction id against its `Symbol-category-NNN` shape.
pub fn check_id(rxn: &Reaction, symbols: &SymbolTable) -> Vec<Issue> {
    let Some(parts) = ReactionId::parse(&rxn.id) else {
        return vec![Issue::MalformedId { id: rxn.id.clone() }];
    };

    let mut issues = Vec::new();
    if !symbols.contains(parts.symbol) {
        issues.push(Issue::IdSymbolUnknown {
            id: rxn.id.clone(),
            symbol: parts.symbol.to_string(),
        });
    }
    if parts.category != rxn.category.as_str() {
        issues.push(Issue::CategoryMismatch {
            id: rxn.id.clone(),
            id_category: parts.category.to_string(),
            category: rxn.category.to_string(),
        });
    }
    issues
}

/// Runs every reaction-level integrity check and returns all problems found.
pub fn check_reactions(reactions: &[Reaction], symbols: &SymbolTable) -> Vec<Issue> {
    let mut issues = check_duplicate_ids(reactions);
    issues.extend(reactions.iter().flat_map(|r| check_id(r, symbols)));
    issues.extend(check_symbols(reactions, symbols));
    issues
}
