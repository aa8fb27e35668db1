//! Schema and consistency validation.
//!
//! Validation runs in two phases. Phase one checks every record on its own
//! (shape, types, closed enumerations, field rules) and keeps going past
//! failures. Phase two runs corpus-wide relational checks (uniqueness, id
//! format, cross-references) over whatever parsed in phase one. Derived
//! artifacts are compared against the records only when both phases are
//! clean. Nothing here writes to storage.

mod artifacts;
mod coverage;
mod issue;
mod schema;

use std::collections::BTreeSet;

use tracing::info;

pub use artifacts::{check_artifacts, check_embedded_reactions};
pub use coverage::NullCounts;
pub use issue::Issue;
pub use schema::{
    ElementSchema, ReactionSchema, check_element_documents, check_element_uniqueness,
    check_reaction_documents,
};

use crate::link;
use crate::model::element::Element;
use crate::model::reaction::Reaction;
use crate::model::symbols::SymbolTable;
use crate::store::{self, Layout, RawDocument};

#[derive(Debug, Clone, Default)]
pub struct ElementReport {
    pub total: usize,
    pub valid: usize,
    pub issues: Vec<Issue>,
    pub null_counts: NullCounts,
}

#[derive(Debug, Clone, Default)]
pub struct ReactionReport {
    pub total: usize,
    pub valid: usize,
    pub categories: std::collections::BTreeMap<String, usize>,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Default)]
pub struct CrossReferenceReport {
    /// Distinct element symbols referenced by parsed reactions.
    pub symbols_referenced: usize,
    pub issues: Vec<Issue>,
}

/// Outcome of a full validation run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub elements: ElementReport,
    pub reactions: ReactionReport,
    pub cross_references: CrossReferenceReport,
    /// `None` when artifact freshness was not checked.
    pub artifacts: Option<Vec<Issue>>,
}

impl Report {
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.elements
            .issues
            .iter()
            .chain(&self.reactions.issues)
            .chain(&self.cross_references.issues)
            .chain(self.artifacts.iter().flatten())
    }

    pub fn issue_count(&self) -> usize {
        self.issues().count()
    }

    /// `true` iff no issue was found anywhere.
    pub fn passed(&self) -> bool {
        self.issues().next().is_none()
    }
}

/// A validated corpus: the report plus every record that parsed.
#[derive(Debug, Clone, Default)]
pub struct Checked {
    pub report: Report,
    pub elements: Vec<Element>,
    pub reactions: Vec<Reaction>,
}

/// Runs both validation phases over already-read documents.
pub fn check_documents(element_docs: &[RawDocument], reaction_docs: &[RawDocument]) -> Checked {
    // Phase one: each record in isolation.
    let element_schema = check_element_documents(element_docs);
    let reaction_schema = check_reaction_documents(reaction_docs);

    let mut null_counts = NullCounts::new();
    for doc in element_docs {
        null_counts.record(&doc.value);
    }

    // Phase two: relations between whatever parsed.
    let elements = element_schema.parsed;
    let reactions = reaction_schema.parsed;
    let symbols = SymbolTable::from_elements(&elements);

    let mut element_issues = element_schema.issues;
    element_issues.extend(check_element_uniqueness(&elements));

    let mut reaction_issues = reaction_schema.issues;
    reaction_issues.extend(link::check_duplicate_ids(&reactions));
    reaction_issues.extend(reactions.iter().flat_map(|r| link::check_id(r, &symbols)));

    let symbols_referenced = reactions
        .iter()
        .flat_map(|r| r.elements_involved.iter())
        .collect::<BTreeSet<_>>()
        .len();

    let report = Report {
        elements: ElementReport {
            total: element_schema.total,
            valid: element_schema.valid,
            issues: element_issues,
            null_counts,
        },
        reactions: ReactionReport {
            total: reaction_schema.total,
            valid: reaction_schema.valid,
            categories: reaction_schema.categories,
            issues: reaction_issues,
        },
        cross_references: CrossReferenceReport {
            symbols_referenced,
            issues: link::check_symbols(&reactions, &symbols),
        },
        artifacts: None,
    };

    Checked {
        report,
        elements,
        reactions,
    }
}

/// Reads the database under `layout` and validates it.
///
/// Only conditions that make validation impossible (a missing elements
/// directory, unreadable files, JSON syntax errors) are returned as `Err`.
/// A missing reactions directory is treated as an empty corpus.
pub fn validate(layout: &Layout) -> Result<Report, store::Error> {
    let element_docs = store::read_element_documents(layout)?;
    let reaction_docs = match store::read_reaction_documents(layout) {
        Ok(docs) => docs,
        Err(store::Error::NotFound { .. }) => Vec::new(),
        Err(e) => return Err(e),
    };

    let mut checked = check_documents(&element_docs, &reaction_docs);
    if checked.report.passed() {
        checked.report.artifacts = Some(check_artifacts(
            layout,
            &checked.elements,
            &checked.reactions,
        )?);
    }

    info!(
        elements = checked.report.elements.total,
        reactions = checked.report.reactions.total,
        issues = checked.report.issue_count(),
        "validation finished"
    );
    Ok(checked.report)
}
