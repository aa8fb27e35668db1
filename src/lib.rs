//! A reference database of chemical elements and reactions, with the tooling
//! that keeps its derived files consistent and lets you query it.
//!
//! The database is a directory of JSON records: one file per element and one
//! file per reaction category. Everything else (the periodic-table, category
//! and property indexes, the master reaction index, and the reaction summaries
//! embedded in each element) is derived from those records and can be
//! regenerated at any time.
//!
//! # Features
//!
//! - **Record store** — Typed loading of element and reaction records, lookup
//!   by atomic number, symbol or name, and write-if-changed persistence
//! - **Index builder** — Periodic table, elements grouped by category, and
//!   min/max/mean/median statistics for numeric properties
//! - **Cross-reference linker** — Master reaction index and per-element
//!   reaction summaries, recomputed as a pure function of the corpus
//! - **Validator** — Two-phase schema and consistency checks that collect
//!   every problem in one pass, plus null-coverage and artifact freshness
//! - **Query engine** — Property filters, reaction filters, side-by-side
//!   comparison, and database statistics
//!
//! # Quick Start
//!
//! ```
//! use periodically::{Element, Reaction, index, link, query};
//!
//! let iron: Element = serde_json::from_str(r#"{
//!     "atomic_number": 26, "symbol": "Fe", "name": "Iron", "atomic_mass_u": 55.845,
//!     "classification": { "group": 8, "period": 4, "block": "d", "category": "transition metal" },
//!     "atomic_structure": { "electron_configuration": "[Ar] 3d6 4s2" },
//!     "physical_properties": { "phase_at_stp": "solid", "melting_point_k": 1811.0 },
//!     "nuclear_properties": { "radioactive": false },
//!     "discovery": {}
//! }"#)?;
//! let oxygen: Element = serde_json::from_str(r#"{
//!     "atomic_number": 8, "symbol": "O", "name": "Oxygen", "atomic_mass_u": 15.999,
//!     "classification": { "group": 16, "period": 2, "block": "p", "category": "nonmetal" },
//!     "atomic_structure": { "electron_configuration": "[He] 2s2 2p4" },
//!     "physical_properties": { "phase_at_stp": "gas", "melting_point_k": 54.36 },
//!     "nuclear_properties": { "radioactive": false },
//!     "discovery": {}
//! }"#)?;
//! let rusting: Reaction = serde_json::from_str(r#"{
//!     "id": "Fe-environmental-001", "name": "Rusting of iron",
//!     "equation": "4 Fe + 3 O2 -> 2 Fe2O3", "type": "oxidation",
//!     "category": "environmental", "elements_involved": ["Fe", "O"],
//!     "reversible": false, "description": "Slow oxidation of iron in moist air."
//! }"#)?;
//!
//! // Link the corpus: both elements now embed the reaction exactly once.
//! let linked = link::link(&[iron, oxygen], &[rusting]).expect("corpus is consistent");
//! assert!(linked.elements.iter().all(|e| e.reactions.len() == 1));
//! assert_eq!(linked.reaction_index.len(), 1);
//!
//! // Derived statistics skip nulls and attribute extrema to an element.
//! let stats = index::property_stats(&linked.elements);
//! let mp = stats.get("melting_point_k").unwrap();
//! assert_eq!((mp.min.element.as_str(), mp.max.element.as_str()), ("O", "Fe"));
//!
//! // Range filters are strict.
//! let filter = query::ElementFilter {
//!     above: Some("melting_point=1811".parse()?),
//!     ..Default::default()
//! };
//! assert!(filter.apply(&linked.elements).is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] — Record types and the symbol lookup table
//! - [`store`] — On-disk layout, loaders, lookup, and writers
//! - [`index`] — Derived index generation
//! - [`link`] — Reaction cross-references
//! - [`validate`] — Schema and consistency validation
//! - [`query`] — Read-only queries
//! - [`config`] — TOML configuration with embedded defaults

pub mod config;
pub mod index;
pub mod link;
pub mod model;
pub mod query;
pub mod store;
pub mod validate;

pub use config::Config;
pub use model::element::{
    AtomicStructure, Classification, Discovery, Element, NuclearProperties, PhysicalProperties,
};
pub use model::index::{
    CategoryIndex, CategoryMember, Extremum, OrderedMap, PeriodicEntry, PropertyIndex,
    PropertyStats, ReactionIndex, ReactionIndexEntry,
};
pub use model::reaction::{
    Conditions, Participant, Reaction, ReactionId, ReactionSummary, Thermodynamics,
};
pub use model::symbols::SymbolTable;
pub use model::types::{
    Block, ParseBlockError, ParseCategoryError, ParsePhaseError, ParseStateError, Phase,
    PhysicalState, ReactionCategory,
};
pub use store::{Layout, lookup_element};
pub use validate::{Issue, Report};

pub use link::GenerateError;
pub use query::Error as QueryError;
pub use store::Error as StoreError;
