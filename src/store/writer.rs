use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::Error;
use super::reader::ElementFile;
use crate::model::element::Element;

/// Renders `value` as two-space indented JSON with a trailing newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

/// Writes `value` to `path`, creating parent directories as needed.
///
/// Returns `false` without touching the file when its current contents are
/// already byte-identical to the rendered value.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<bool, Error> {
    let text = render_json(value)?;

    if let Ok(existing) = fs::read(path) {
        if existing == text.as_bytes() {
            debug!(path = %path.display(), "unchanged");
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), "written");
    Ok(true)
}

/// Writes the embedded reactions of updated element records back to the
/// files they were loaded from.
///
/// `updated` is matched to `files` by atomic number. Each file is rewritten
/// from its original document with only the `reactions` key replaced, so
/// every other key keeps its position and exact value. Returns how many
/// files actually changed on disk.
pub fn persist_elements(files: &[ElementFile], updated: &[Element]) -> Result<usize, Error> {
    let mut changed = 0;
    for element in updated {
        let Some(file) = files
            .iter()
            .find(|f| f.element.atomic_number == element.atomic_number)
        else {
            continue;
        };

        let mut document = file.document.clone();
        let Value::Object(map) = &mut document else {
            return Err(Error::malformed(&file.path, "element record is not a JSON object"));
        };
        map.insert(
            "reactions".to_string(),
            serde_json::to_value(&element.reactions)?,
        );

        if write_json(&file.path, &document)? {
            changed += 1;
        }
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::fixtures::element;
    use crate::model::reaction::ReactionSummary;
    use crate::model::reaction::fixtures::reaction;
    use crate::model::types::ReactionCategory;
    use crate::store::{Layout, load_element_files};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const IRON_JSON: &str = r#"{
  "atomic_number": 26,
  "symbol": "Fe",
  "name": "Iron",
  "notes": "kept in place",
  "atomic_mass_u": 55.845,
  "classification": {
    "group": 8,
    "period": 4,
    "block": "d",
    "category": "transition metal",
    "cas_number": "7439-89-6",
    "natural_occurrence": "primordial"
  },
  "atomic_structure": {
    "electron_configuration": "[Ar] 3d6 4s2",
    "electron_shells": [2, 8, 14, 2],
    "valence_electrons": 2,
    "common_oxidation_states": [2, 3],
    "electronegativity_pauling": 1.83,
    "ionization_energies_kj_mol": [762.5],
    "electron_affinity_kj_mol": 15.7,
    "atomic_radius_pm": 126,
    "covalent_radius_pm": 132
  },
  "physical_properties": {
    "phase_at_stp": "solid",
    "appearance": "lustrous metallic with a grayish tinge",
    "melting_point_k": 1811,
    "boiling_point_k": 3134,
    "density_kg_m3": 7874,
    "thermal_conductivity_w_m_k": 80.4,
    "heat_of_fusion_kj_mol": 13.81,
    "heat_of_vaporization_kj_mol": 340,
    "molar_heat_capacity_j_mol_k": 25.1,
    "crystal_structure": "body-centered cubic",
    "magnetic_ordering": "ferromagnetic"
  },
  "nuclear_properties": {
    "radioactive": false,
    "half_life": null,
    "decay_mode": null,
    "stable_isotopes": ["54Fe", "56Fe", "57Fe", "58Fe"]
  },
  "discovery": {
    "year": null,
    "discoverers": [],
    "name_origin": "Anglo-Saxon iren"
  },
  "applications": ["steel"],
  "reactions": []
}
"#;

    fn file_for(dir: &Path, name: &str, e: &Element) -> ElementFile {
        let path: PathBuf = dir.join(name);
        write_json(&path, e).unwrap();
        ElementFile {
            path,
            element: e.clone(),
            document: serde_json::to_value(e).unwrap(),
        }
    }

    #[test]
    fn render_json_uses_two_space_indent_and_trailing_newline() {
        let text = render_json(&serde_json::json!({"a": [1]})).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}\n");
    }

    #[test]
    fn write_json_creates_parents_and_skips_identical_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/out.json");
        let value = serde_json::json!({"k": "v"});

        assert!(write_json(&path, &value).unwrap());
        assert!(!write_json(&path, &value).unwrap());
        assert!(write_json(&path, &serde_json::json!({"k": "w"})).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"k\": \"w\"\n}\n");
    }

    #[test]
    fn persist_elements_writes_only_changed_records() {
        let dir = TempDir::new().unwrap();
        let iron = element(26, "Fe", "Iron", "transition metal");
        let gold = element(79, "Au", "Gold", "transition metal");
        let files = vec![
            file_for(dir.path(), "026-iron.json", &iron),
            file_for(dir.path(), "079-gold.json", &gold),
        ];

        let mut new_iron = iron.clone();
        let rusting = reaction("Fe-environmental-001", ReactionCategory::Environmental, &["Fe"]);
        new_iron.reactions.push(ReactionSummary::from(&rusting));

        let changed = persist_elements(&files, &[new_iron.clone(), gold.clone()]).unwrap();
        assert_eq!(changed, 1);

        let on_disk: Element =
            serde_json::from_str(&fs::read_to_string(&files[0].path).unwrap()).unwrap();
        assert_eq!(on_disk, new_iron);

        assert_eq!(persist_elements(&files, &[new_iron, gold]).unwrap(), 0);
    }

    #[test]
    fn persist_elements_replaces_only_the_reactions_key() {
        let dir = TempDir::new().unwrap();
        let elements_dir = dir.path().join("elements");
        fs::create_dir_all(&elements_dir).unwrap();
        let path = elements_dir.join("026-iron.json");
        let original: Value = serde_json::from_str(IRON_JSON).unwrap();
        let original_text = render_json(&original).unwrap();
        fs::write(&path, &original_text).unwrap();

        let layout = Layout::with_root(dir.path());
        let files = load_element_files(&layout).unwrap();
        let elements: Vec<Element> = files.iter().map(|f| f.element.clone()).collect();

        assert_eq!(persist_elements(&files, &elements).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), original_text);

        let mut linked = elements[0].clone();
        let rusting = reaction("Fe-environmental-001", ReactionCategory::Environmental, &["Fe"]);
        linked.reactions = vec![ReactionSummary::from(&rusting)];
        assert_eq!(persist_elements(&files, &[linked]).unwrap(), 1);

        let text = fs::read_to_string(&path).unwrap();
        let mut written: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(written["reactions"][0]["id"], "Fe-environmental-001");
        assert!(text.contains("\"melting_point_k\": 1811,"));
        assert!(text.contains("\"common_oxidation_states\": ["));

        written["reactions"] = Value::Array(Vec::new());
        assert_eq!(render_json(&written).unwrap(), original_text);
    }
}
