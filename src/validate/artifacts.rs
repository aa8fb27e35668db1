use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::issue::Issue;
use crate::index;
use crate::link;
use crate::model::element::Element;
use crate::model::reaction::Reaction;
use crate::store::{self, Layout, render_json};

/// Compares an existing derived file with a freshly rendered artifact.
///
/// A missing file is not an issue; the artifact simply has not been built.
fn compare_file<T: Serialize + ?Sized>(
    path: &Path,
    label: &str,
    fresh: &T,
) -> Result<Option<Issue>, store::Error> {
    let on_disk = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(artifact = label, "not built; skipped");
            return Ok(None);
        }
        Err(e) => return Err(store::Error::io(path, e)),
    };

    if on_disk == render_json(fresh)? {
        Ok(None)
    } else {
        Ok(Some(Issue::stale(
            label,
            "differs from the records it is derived from",
        )))
    }
}

/// Embedded reaction lists that differ from a recomputation over `reactions`.
pub fn check_embedded_reactions(elements: &[Element], reactions: &[Reaction]) -> Vec<Issue> {
    let fresh = link::recompute_embedded_reactions(elements, reactions);
    elements
        .iter()
        .zip(&fresh)
        .filter(|(current, recomputed)| current.reactions != recomputed.reactions)
        .map(|(current, recomputed)| {
            Issue::stale(
                format!("embedded reactions of {}", current.symbol),
                format!(
                    "{} recorded, {} expected",
                    current.reactions.len(),
                    recomputed.reactions.len()
                ),
            )
        })
        .collect()
}

/// Checks every derived artifact that exists under `layout` against the
/// records.
pub fn check_artifacts(
    layout: &Layout,
    elements: &[Element],
    reactions: &[Reaction],
) -> Result<Vec<Issue>, store::Error> {
    let mut issues = Vec::new();

    issues.extend(compare_file(
        &layout.periodic_table_path(),
        store::PERIODIC_TABLE_FILE,
        &index::periodic_table(elements),
    )?);
    issues.extend(compare_file(
        &layout.by_category_path(),
        store::BY_CATEGORY_FILE,
        &index::by_category(elements),
    )?);
    issues.extend(compare_file(
        &layout.by_property_path(),
        store::BY_PROPERTY_FILE,
        &index::property_stats(elements),
    )?);

    // Duplicate ids are reported elsewhere; there is no single index to compare.
    if let Ok(reaction_index) = link::build_reaction_index(reactions) {
        issues.extend(compare_file(
            &layout.reaction_index_path(),
            "reaction index",
            &reaction_index,
        )?);
    }

    issues.extend(check_embedded_reactions(elements, reactions));
    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::fixtures::element;
    use crate::model::reaction::fixtures::reaction;
    use crate::model::types::ReactionCategory;
    use crate::store::write_json;
    use tempfile::TempDir;

    fn corpus() -> (Vec<Element>, Vec<Reaction>) {
        let elements = vec![
            element(8, "O", "Oxygen", "nonmetal"),
            element(26, "Fe", "Iron", "transition metal"),
        ];
        let reactions = vec![reaction(
            "Fe-industrial-001",
            ReactionCategory::Industrial,
            &["Fe", "O"],
        )];
        (elements, reactions)
    }

    #[test]
    fn missing_artifacts_are_not_stale() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::with_root(dir.path());
        let (elements, reactions) = corpus();
        let linked = link::recompute_embedded_reactions(&elements, &reactions);
        assert!(check_artifacts(&layout, &linked, &reactions).unwrap().is_empty());
    }

    #[test]
    fn fresh_artifacts_pass_and_edited_ones_are_stale() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::with_root(dir.path());
        let (elements, reactions) = corpus();
        let elements = link::recompute_embedded_reactions(&elements, &reactions);

        write_json(&layout.periodic_table_path(), &index::periodic_table(&elements)).unwrap();
        write_json(&layout.by_category_path(), &index::by_category(&elements)).unwrap();
        write_json(
            &layout.reaction_index_path(),
            &link::build_reaction_index(&reactions).unwrap(),
        )
        .unwrap();
        assert!(check_artifacts(&layout, &elements, &reactions).unwrap().is_empty());

        fs::write(layout.by_category_path(), "{}\n").unwrap();
        let issues = check_artifacts(&layout, &elements, &reactions).unwrap();
        assert_eq!(
            issues,
            vec![Issue::stale(
                store::BY_CATEGORY_FILE,
                "differs from the records it is derived from"
            )]
        );
    }

    #[test]
    fn unlinked_elements_have_stale_embedded_reactions() {
        let (elements, reactions) = corpus();
        let issues = check_embedded_reactions(&elements, &reactions);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].to_string().contains("embedded reactions of O"));
        assert!(issues[0].to_string().contains("0 recorded, 1 expected"));
    }
}
