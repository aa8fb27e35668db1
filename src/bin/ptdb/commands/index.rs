use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;

use periodically::{index, store};

use super::Session;
use crate::display::{Context, Progress};

const TOTAL_STEPS: u8 = 3;

fn write_artifact<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<String> {
    let changed = store::write_json(path, value)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(format!(
        "{} ({})",
        name,
        if changed { "written" } else { "unchanged" }
    ))
}

pub fn run_index(session: &Session, ctx: Context) -> Result<()> {
    let layout = &session.layout;
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading element records");
    let elements = store::load_elements(layout).context("Failed to load element records")?;
    progress.complete_step(
        "Loading element records",
        &[format!("{} elements", elements.len())],
    );

    progress.step("Building indexes");
    let table = index::periodic_table(&elements);
    let categories = index::by_category(&elements);
    let properties = index::property_stats(&elements);
    progress.complete_step(
        "Building indexes",
        &[
            format!("{} periodic table entries", table.len()),
            format!("{} categories", categories.len()),
            format!(
                "{} of {} properties with data",
                properties.len(),
                index::PROPERTIES.len()
            ),
        ],
    );

    progress.step("Writing index files");
    let written = vec![
        write_artifact(&layout.periodic_table_path(), &table)?,
        write_artifact(&layout.by_category_path(), &categories)?,
        write_artifact(&layout.by_property_path(), &properties)?,
    ];
    progress.complete_step("Writing index files", &written);

    progress.finish("Indexes up to date", true);
    Ok(())
}
