use indexmap::IndexMap;
use serde::Serialize;

use super::types::{Block, Phase, ReactionCategory};

/// An insertion-ordered string-keyed map that serializes as a JSON object.
///
/// Key order is part of each derived file: first-encounter order for
/// categories, fixed list order for properties, corpus order for reactions.
pub type OrderedMap<V> = IndexMap<String, V>;

/// One row of `indexes/periodic-table.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodicEntry {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass_u: f64,
    pub group: Option<u32>,
    pub period: u32,
    pub block: Block,
    pub category: String,
    pub phase_at_stp: Phase,
    pub electronegativity_pauling: Option<f64>,
    pub radioactive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMember {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
}

/// Element classification category → members, in first-encounter order.
pub type CategoryIndex = OrderedMap<Vec<CategoryMember>>;

/// An extreme value and the symbol of the element that holds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremum {
    pub value: f64,
    pub element: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyStats {
    pub min: Extremum,
    pub max: Extremum,
    pub mean: f64,
    pub median: f64,
    pub count: usize,
}

/// Property name → summary statistics, in the fixed property order.
pub type PropertyIndex = OrderedMap<PropertyStats>;

/// One entry of `reactions/index.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionIndexEntry {
    pub name: String,
    pub category: ReactionCategory,
    #[serde(rename = "type")]
    pub reaction_type: String,
    pub elements_involved: Vec<String>,
    pub equation: String,
}

/// Reaction id → index entry, in corpus order.
pub type ReactionIndex = OrderedMap<ReactionIndexEntry>;
