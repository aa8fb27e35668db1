use std::io;

use anyhow::{Context as _, Result};

use periodically::{link, store};

use super::Session;
use crate::display::{Context, Progress, print_issues};
use crate::util::text::plural;

const TOTAL_STEPS: u8 = 4;

/// Symbols with the most reactions, as `"Fe (12)"`.
fn busiest_symbols(coverage: &link::Coverage, limit: usize) -> String {
    let mut counts: Vec<(&String, &usize)> = coverage.reaction_counts.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(symbol, n)| format!("{} ({})", symbol, n))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn run_link(session: &Session, ctx: Context) -> Result<()> {
    let layout = &session.layout;
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading element records");
    let files = store::load_element_files(layout).context("Failed to load element records")?;
    let elements: Vec<_> = files.iter().map(|f| f.element.clone()).collect();
    progress.complete_step(
        "Loading element records",
        &[plural(elements.len(), "element")],
    );

    progress.step("Loading reaction corpus");
    let reactions = store::load_reactions(layout).context("Failed to load reaction records")?;
    progress.complete_step(
        "Loading reaction corpus",
        &[plural(reactions.len(), "reaction")],
    );

    progress.step("Checking cross-references");
    let linked = match link::link(&elements, &reactions) {
        Ok(linked) => linked,
        Err(e) => {
            progress.fail_step("Checking cross-references");
            print_issues(&mut io::stderr().lock(), e.issues());
            return Err(e.into());
        }
    };
    let coverage = &linked.coverage;
    progress.complete_step(
        "Checking cross-references",
        &[
            format!(
                "{} referenced by the corpus",
                plural(coverage.reaction_counts.len(), "symbol")
            ),
            format!(
                "{} with reactions, {} without",
                coverage.with_reactions, coverage.without_reactions
            ),
            format!("most linked: {}", busiest_symbols(coverage, 5)),
        ],
    );

    progress.step("Writing derived records");
    let index_path = layout.reaction_index_path();
    let index_changed = store::write_json(&index_path, &linked.reaction_index)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;
    let changed = store::persist_elements(&files, &linked.elements)
        .context("Failed to update element records")?;
    progress.complete_step(
        "Writing derived records",
        &[
            format!(
                "reaction index {}",
                if index_changed { "written" } else { "unchanged" }
            ),
            format!("{} updated", plural(changed, "element file")),
        ],
    );

    progress.finish("Cross-references up to date", true);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busiest_symbols_orders_by_count() {
        let coverage = link::Coverage {
            reaction_counts: [("Fe", 3), ("H", 7), ("O", 7), ("Au", 1)]
                .into_iter()
                .map(|(s, n)| (s.to_string(), n))
                .collect(),
            with_reactions: 4,
            without_reactions: 0,
        };
        assert_eq!(busiest_symbols(&coverage, 3), "H (7), O (7), Fe (3)");
    }
}
