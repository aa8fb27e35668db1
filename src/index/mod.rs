//! Index Builder: derived summary tables computed from the element catalog.
//!
//! Every function here is pure. Callers decide whether and where the result
//! is written (see [`crate::store::write_json`]).

mod stats;

pub use stats::{PROPERTIES, Property, property_stats, round4};

use crate::model::element::Element;
use crate::model::index::{CategoryIndex, CategoryMember, PeriodicEntry};

/// One lightweight entry per element, in input order.
pub fn periodic_table(elements: &[Element]) -> Vec<PeriodicEntry> {
    elements
        .iter()
        .map(|e| PeriodicEntry {
            atomic_number: e.atomic_number,
            symbol: e.symbol.clone(),
            name: e.name.clone(),
            atomic_mass_u: e.atomic_mass_u,
            group: e.classification.group,
            period: e.classification.period,
            block: e.block(),
            category: e.category().to_string(),
            phase_at_stp: e.phase(),
            electronegativity_pauling: e.atomic_structure.electronegativity_pauling,
            radioactive: e.is_radioactive(),
        })
        .collect()
}

/// Groups elements by classification category.
///
/// Categories appear in first-encounter order and members keep input order.
pub fn by_category(elements: &[Element]) -> CategoryIndex {
    let mut index = CategoryIndex::new();
    for e in elements {
        let member = CategoryMember {
            atomic_number: e.atomic_number,
            symbol: e.symbol.clone(),
            name: e.name.clone(),
        };
        index
            .entry(e.category().to_string())
            .or_default()
            .push(member);
    }
    index
}
