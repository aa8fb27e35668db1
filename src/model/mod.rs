//! Record types for the element/reaction database and its derived artifacts.
//!
//! - [`element`] – Per-element records (classification, atomic structure,
//!   physical, nuclear, discovery) with their embedded reaction summaries.
//! - [`reaction`] – Reaction records, participants, thermodynamics, conditions.
//! - [`types`] – Closed enumerations (block, phase, reaction category, state).
//! - [`symbols`] – Immutable symbol lookup built from an element catalog.
//! - [`index`] – Shapes of the derived index files.
//!
//! Authored records ([`Element`](element::Element), [`Reaction`](reaction::Reaction))
//! are separate from derived artifacts so the generators in [`crate::index`] and
//! [`crate::link`] can stay pure functions from one to the other.

pub mod element;
pub mod index;
pub mod reaction;
pub mod symbols;
pub mod types;
