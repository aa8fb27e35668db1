use std::io::{self, Write};

use anyhow::Result;
use tracing::warn;

use periodically::model::element::Element;
use periodically::query::DatabaseStats;
use periodically::store::{self, Error as StoreError, Layout, ReactionFile};

use super::Session;
use crate::display::print_stats;

/// Best-effort load for the summary: a missing directory reads as empty.
fn load_for_stats(layout: &Layout) -> Result<(Vec<Element>, Option<Vec<ReactionFile>>)> {
    let elements = match store::load_elements_lenient(layout) {
        Ok(elements) => elements,
        Err(StoreError::NotFound { path }) => {
            warn!(path = %path.display(), "elements directory missing; reporting an empty catalog");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };
    let reaction_files = match store::load_reaction_files_lenient(layout) {
        Ok(files) => Some(files),
        Err(StoreError::NotFound { .. }) => None,
        Err(e) => return Err(e.into()),
    };
    Ok((elements, reaction_files))
}

pub fn run_stats(session: &Session) -> Result<()> {
    let (elements, reaction_files) = load_for_stats(&session.layout)?;
    let stats = DatabaseStats::collect(&elements, reaction_files.as_deref());

    let mut out = io::stdout().lock();
    print_stats(&mut out, &stats);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_root_reports_an_empty_database() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::with_root(dir.path());

        let (elements, reaction_files) = load_for_stats(&layout).unwrap();
        assert!(elements.is_empty());
        assert!(reaction_files.is_none());

        let stats = DatabaseStats::collect(&elements, reaction_files.as_deref());
        let mut out = Vec::new();
        print_stats(&mut out, &stats);
        assert!(!out.is_empty());
    }
}
