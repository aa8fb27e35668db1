//! Query Engine: read-only projections over loaded records.
//!
//! Point lookup, element and reaction filters, side-by-side comparison and
//! aggregate statistics. Bad user input surfaces as [`Error`] and affects
//! only the query at hand.

mod compare;
mod error;
mod filter;
mod stats;

pub use compare::{COMPARE_ROWS, CompareRow, Comparison, Field, MISSING, compare};
pub use error::Error;
pub use filter::{ElementFilter, FilterProperty, ReactionFilter, Threshold, parse_bool};
pub use stats::{COVERAGE_FIELDS, DatabaseStats, FieldCoverage, ReactionTotals};

use crate::model::element::Element;
use crate::store::lookup_element;

/// Resolves one identifier, or fails with [`Error::UnresolvedIdentifier`].
pub fn resolve<'a>(elements: &'a [Element], identifier: &str) -> Result<&'a Element, Error> {
    lookup_element(elements, identifier)
        .ok_or_else(|| Error::UnresolvedIdentifier(identifier.to_string()))
}
