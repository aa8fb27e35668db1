use std::collections::BTreeMap;

use crate::model::element::Element;
use crate::store::ReactionFile;

/// How many elements record a value for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCoverage {
    pub field: &'static str,
    pub present: usize,
    pub total: usize,
}

impl FieldCoverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.present as f64 * 100.0 / self.total as f64
        }
    }
}

/// Fields reported in the coverage section of [`DatabaseStats`].
pub const COVERAGE_FIELDS: [(&str, fn(&Element) -> bool); 6] = [
    ("electronegativity_pauling", |e: &Element| {
        e.atomic_structure.electronegativity_pauling.is_some()
    }),
    ("atomic_radius_pm", |e: &Element| e.atomic_structure.atomic_radius_pm.is_some()),
    ("melting_point_k", |e: &Element| e.physical_properties.melting_point_k.is_some()),
    ("boiling_point_k", |e: &Element| e.physical_properties.boiling_point_k.is_some()),
    ("density_kg_m3", |e: &Element| e.physical_properties.density_kg_m3.is_some()),
    ("thermal_conductivity_w_m_k", |e: &Element| {
        e.physical_properties.thermal_conductivity_w_m_k.is_some()
    }),
];

/// Reaction file and record totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTotals {
    pub files: usize,
    pub reactions: usize,
}

/// Aggregate counts over the element catalog and reaction corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseStats {
    pub elements: usize,
    /// Element count per classification category, sorted by name.
    pub categories: BTreeMap<String, usize>,
    /// Element count per phase at STP, sorted by name.
    pub phases: BTreeMap<&'static str, usize>,
    pub radioactive: usize,
    pub stable: usize,
    /// Sum of every element's embedded reaction list length.
    pub element_linked_reactions: usize,
    /// `None` when there is no reactions directory.
    pub reactions: Option<ReactionTotals>,
    pub coverage: Vec<FieldCoverage>,
}

impl DatabaseStats {
    pub fn collect(elements: &[Element], reaction_files: Option<&[ReactionFile]>) -> Self {
        let mut categories = BTreeMap::new();
        let mut phases = BTreeMap::new();
        for e in elements {
            *categories.entry(e.category().to_string()).or_insert(0) += 1;
            *phases.entry(e.phase().as_str()).or_insert(0) += 1;
        }

        let radioactive = elements.iter().filter(|e| e.is_radioactive()).count();

        let coverage = COVERAGE_FIELDS
            .iter()
            .map(|&(field, present)| FieldCoverage {
                field,
                present: elements.iter().filter(|e| present(e)).count(),
                total: elements.len(),
            })
            .collect();

        Self {
            elements: elements.len(),
            categories,
            phases,
            radioactive,
            stable: elements.len() - radioactive,
            element_linked_reactions: elements.iter().map(|e| e.reactions.len()).sum(),
            reactions: reaction_files.map(|files| ReactionTotals {
                files: files.len(),
                reactions: files.iter().map(|f| f.reactions.len()).sum(),
            }),
            coverage,
        }
    }
}
