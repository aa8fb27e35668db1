use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use crate::model::element::Element;
use crate::model::reaction::{Conditions, Reaction, ReactionSummary};

/// Element symbol to the summaries of every reaction that lists it.
///
/// Keys iterate in symbol order; each list keeps corpus order.
pub type ElementReactionMap = BTreeMap<String, Vec<ReactionSummary>>;

/// One-line human-readable summary of reaction conditions.
pub fn summarize_conditions(conditions: &Conditions) -> Option<String> {
    conditions.summary()
}

/// Fans every reaction out to each distinct symbol it involves.
pub fn build_element_reaction_map(reactions: &[Reaction]) -> ElementReactionMap {
    let mut map = ElementReactionMap::new();
    for rxn in reactions {
        let summary = ReactionSummary::from(rxn);
        let mut seen = HashSet::new();
        for symbol in &rxn.elements_involved {
            if seen.insert(symbol.as_str()) {
                map.entry(symbol.clone()).or_default().push(summary.clone());
            }
        }
    }
    map
}

fn sort_summaries(summaries: &mut [ReactionSummary]) {
    summaries.sort_by(|a, b| (a.category, &a.id).cmp(&(b.category, &b.id)));
}

/// Sets each element's embedded reactions from `map`, sorted by category then id.
///
/// Elements with no entry in the map get an empty list, so a previous run
/// never leaves stale summaries behind. Symbols in the map with no matching
/// element are logged and otherwise ignored.
pub fn inject_reactions(map: &ElementReactionMap, elements: &[Element]) -> Vec<Element> {
    let known: HashSet<&str> = elements.iter().map(|e| e.symbol.as_str()).collect();
    for symbol in map.keys().filter(|s| !known.contains(s.as_str())) {
        warn!(symbol = %symbol, "no element record for reaction symbol");
    }

    elements
        .iter()
        .map(|e| {
            let mut updated = e.clone();
            updated.reactions = map.get(&e.symbol).cloned().unwrap_or_default();
            sort_summaries(&mut updated.reactions);
            updated
        })
        .collect()
}

/// The element catalog with every embedded reaction list recomputed from
/// `reactions`.
pub fn recompute_embedded_reactions(elements: &[Element], reactions: &[Reaction]) -> Vec<Element> {
    inject_reactions(&build_element_reaction_map(reactions), elements)
}
