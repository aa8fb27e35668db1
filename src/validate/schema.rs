use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::issue::Issue;
use crate::model::element::Element;
use crate::model::reaction::Reaction;
use crate::store::{RawDocument, reaction_records};

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_element_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let rest: Vec<char> = chars.collect();
            rest.len() <= 1 && rest.iter().all(char::is_ascii_lowercase)
        }
        _ => false,
    }
}

/// Keys every element record must carry, as `(section, keys)`; an empty
/// section means the top level. Values may be `null`, but never absent.
/// `a|b` accepts either spelling. `reactions` is left out because `link`
/// fills it in.
const ELEMENT_REQUIRED: &[(&str, &[&str])] = &[
    (
        "",
        &[
            "atomic_number",
            "symbol",
            "name",
            "atomic_mass_u",
            "classification",
            "atomic_structure",
            "physical_properties",
            "nuclear_properties",
            "discovery",
            "applications",
        ],
    ),
    (
        "classification",
        &["group", "period", "block", "category", "natural_occurrence"],
    ),
    (
        "atomic_structure",
        &[
            "electron_configuration",
            "electron_shells",
            "valence_electrons",
            "oxidation_states|common_oxidation_states",
            "electronegativity_pauling",
            "ionization_energies_kj_mol",
            "electron_affinity_kj_mol",
            "atomic_radius_pm",
            "covalent_radius_pm",
        ],
    ),
    (
        "physical_properties",
        &[
            "phase_at_stp",
            "melting_point_k",
            "boiling_point_k",
            "density_kg_m3",
            "thermal_conductivity_w_m_k",
            "heat_of_fusion_kj_mol",
            "heat_of_vaporization_kj_mol",
            "molar_heat_capacity_j_mol_k",
            "crystal_structure",
            "magnetic_ordering",
        ],
    ),
    (
        "nuclear_properties",
        &["radioactive", "half_life", "decay_mode", "stable_isotopes"],
    ),
    ("discovery", &["year", "discoverers", "name_origin"]),
];

const REACTION_REQUIRED: &[(&str, &[&str])] = &[
    (
        "",
        &[
            "id",
            "name",
            "equation",
            "equation_latex",
            "type",
            "category",
            "elements_involved",
            "reactants",
            "products",
            "thermodynamics",
            "conditions",
            "reversible",
            "description",
        ],
    ),
    (
        "thermodynamics",
        &["delta_h_kj", "delta_g_kj", "delta_s_j_k", "exothermic"],
    ),
    (
        "conditions",
        &["temperature_k", "pressure_atm", "catalyst", "other"],
    ),
];

/// Dotted paths of required keys absent from `record`.
///
/// A section that is itself missing or not an object is skipped; the
/// top-level check or deserialization already reports it.
fn missing_keys(record: &Value, required: &[(&str, &[&str])]) -> Vec<String> {
    let mut missing = Vec::new();
    for &(section, keys) in required {
        let object = if section.is_empty() {
            record.as_object()
        } else {
            record.get(section).and_then(Value::as_object)
        };
        let Some(object) = object else {
            continue;
        };
        for &key in keys {
            if !key.split('|').any(|k| object.contains_key(k)) {
                let name = key.split('|').next().unwrap_or(key);
                missing.push(if section.is_empty() {
                    name.to_string()
                } else {
                    format!("{}.{}", section, name)
                });
            }
        }
    }
    missing
}

fn required_problems(record: &Value, required: &[(&str, &[&str])]) -> Vec<String> {
    missing_keys(record, required)
        .into_iter()
        .map(|path| format!("missing required field '{}'", path))
        .collect()
}

/// Field rules serde cannot express.
fn element_rules(element: &Element) -> Vec<String> {
    let mut problems = Vec::new();
    if !(1..=118).contains(&element.atomic_number) {
        problems.push(format!(
            "atomic_number {} is outside 1..=118",
            element.atomic_number
        ));
    }
    if !is_element_symbol(&element.symbol) {
        problems.push(format!(
            "symbol '{}' is not a one- or two-letter element symbol",
            element.symbol
        ));
    }
    if element.name.trim().is_empty() {
        problems.push("name is empty".to_string());
    }
    let nuclear = &element.nuclear_properties;
    if !nuclear.radioactive {
        if nuclear.decay_mode.is_some() {
            problems.push("decay_mode is set on a non-radioactive element".to_string());
        }
        if nuclear.half_life.is_some() {
            problems.push("half_life is set on a non-radioactive element".to_string());
        }
    }
    problems
}

fn reaction_rules(reaction: &Reaction) -> Vec<String> {
    let mut problems = Vec::new();
    if reaction.description.trim().is_empty() {
        problems.push("description is empty".to_string());
    }
    for p in reaction.reactants.iter().chain(&reaction.products) {
        if !(p.moles > 0.0) {
            problems.push(format!(
                "coefficient of '{}' must be positive, got {}",
                p.formula, p.moles
            ));
        }
    }
    problems
}

/// Phase-one result for the element catalog.
#[derive(Debug, Clone, Default)]
pub struct ElementSchema {
    pub total: usize,
    pub valid: usize,
    pub issues: Vec<Issue>,
    /// Every record that deserialized, even if a field rule failed.
    pub parsed: Vec<Element>,
}

/// Checks each element document against the record shape and field rules.
pub fn check_element_documents(docs: &[RawDocument]) -> ElementSchema {
    let mut result = ElementSchema::default();
    for doc in docs {
        result.total += 1;
        let label = file_label(&doc.path);
        match Element::deserialize(&doc.value) {
            Ok(element) => {
                let mut problems = required_problems(&doc.value, ELEMENT_REQUIRED);
                problems.extend(element_rules(&element));
                if problems.is_empty() {
                    result.valid += 1;
                }
                result
                    .issues
                    .extend(problems.into_iter().map(|p| Issue::schema(&label, p)));
                result.parsed.push(element);
            }
            Err(e) => result.issues.push(Issue::schema(&label, e.to_string())),
        }
    }
    result.parsed.sort_by_key(|e| e.atomic_number);
    result
}

/// Phase-one result for the reaction corpus.
#[derive(Debug, Clone, Default)]
pub struct ReactionSchema {
    pub total: usize,
    pub valid: usize,
    /// Record count per category file, keyed by file stem.
    pub categories: BTreeMap<String, usize>,
    pub issues: Vec<Issue>,
    pub parsed: Vec<Reaction>,
}

/// Checks each reaction record in every category document.
pub fn check_reaction_documents(docs: &[RawDocument]) -> ReactionSchema {
    let mut result = ReactionSchema::default();
    for doc in docs {
        let label = file_label(&doc.path);
        let stem = doc
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(records) = reaction_records(&doc.value) else {
            result.issues.push(Issue::schema(
                &label,
                "expected an array of reactions or an object with a 'reactions' array",
            ));
            continue;
        };
        result.categories.insert(stem, records.len());

        for record in records {
            result.total += 1;
            let id = record.get("id").and_then(Value::as_str).unwrap_or("?");
            let record_label = format!("{}/{}", label, id);
            match Reaction::deserialize(record) {
                Ok(reaction) => {
                    let mut problems = required_problems(record, REACTION_REQUIRED);
                    problems.extend(reaction_rules(&reaction));
                    if problems.is_empty() {
                        result.valid += 1;
                    }
                    result.issues.extend(
                        problems
                            .into_iter()
                            .map(|p| Issue::schema(&record_label, p)),
                    );
                    result.parsed.push(reaction);
                }
                Err(e) => result.issues.push(Issue::schema(record_label, e.to_string())),
            }
        }
    }
    result
}

/// Atomic numbers, symbols and names must each be unique across the catalog.
pub fn check_element_uniqueness(elements: &[Element]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut numbers = HashSet::new();
    let mut symbols = HashSet::new();
    let mut names = HashSet::new();

    for e in elements {
        if !numbers.insert(e.atomic_number) {
            issues.push(Issue::DuplicateElement {
                field: "atomic_number",
                value: e.atomic_number.to_string(),
            });
        }
        if !symbols.insert(e.symbol.as_str()) {
            issues.push(Issue::DuplicateElement {
                field: "symbol",
                value: e.symbol.clone(),
            });
        }
        if !names.insert(e.name.as_str()) {
            issues.push(Issue::DuplicateElement {
                field: "name",
                value: e.name.clone(),
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::fixtures::element;
    use crate::model::reaction::fixtures::reaction;
    use crate::model::types::ReactionCategory;
    use std::path::PathBuf;

    fn doc(name: &str, value: Value) -> RawDocument {
        RawDocument {
            path: PathBuf::from("data").join(name),
            value,
        }
    }

    fn element_doc(e: &Element, name: &str) -> RawDocument {
        doc(name, serde_json::to_value(e).unwrap())
    }

    #[test]
    fn well_formed_elements_pass() {
        let docs = vec![
            element_doc(&element(26, "Fe", "Iron", "transition metal"), "026-iron.json"),
            element_doc(&element(1, "H", "Hydrogen", "nonmetal"), "001-hydrogen.json"),
        ];
        let result = check_element_documents(&docs);
        assert_eq!((result.total, result.valid), (2, 2));
        assert!(result.issues.is_empty());
        assert_eq!(result.parsed[0].symbol, "H");
    }

    #[test]
    fn missing_fields_and_bad_enums_are_violations() {
        let mut broken = serde_json::to_value(element(2, "He", "Helium", "noble gas")).unwrap();
        broken["physical_properties"]["phase_at_stp"] = Value::from("plasma");
        let docs = vec![
            doc("000-empty.json", serde_json::json!({"symbol": "X"})),
            doc("002-helium.json", broken),
        ];
        let result = check_element_documents(&docs);
        assert_eq!((result.total, result.valid), (2, 0));
        assert_eq!(result.issues.len(), 2);
        assert!(result.parsed.is_empty());
        match &result.issues[1] {
            Issue::SchemaViolation { record, details } => {
                assert_eq!(record, "002-helium.json");
                assert!(details.contains("plasma"), "{details}");
            }
            other => panic!("unexpected issue: {other:?}"),
        }
    }

    #[test]
    fn absent_defaulted_fields_are_violations() {
        let mut iron = serde_json::to_value(element(26, "Fe", "Iron", "transition metal")).unwrap();
        let record = iron.as_object_mut().unwrap();
        record.remove("applications");
        record["atomic_structure"]
            .as_object_mut()
            .unwrap()
            .remove("electron_shells");
        record["discovery"].as_object_mut().unwrap().remove("name_origin");

        let result = check_element_documents(&[doc("026-iron.json", iron)]);
        assert_eq!((result.total, result.valid), (1, 0));
        assert_eq!(result.parsed.len(), 1);
        let messages: Vec<String> = result.issues.iter().map(Issue::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "026-iron.json: missing required field 'applications'",
                "026-iron.json: missing required field 'atomic_structure.electron_shells'",
                "026-iron.json: missing required field 'discovery.name_origin'",
            ]
        );
    }

    #[test]
    fn explicit_nulls_and_the_older_oxidation_key_satisfy_required_fields() {
        let mut iron = serde_json::to_value(element(26, "Fe", "Iron", "transition metal")).unwrap();
        let structure = iron["atomic_structure"].as_object_mut().unwrap();
        let states = structure.remove("oxidation_states").unwrap();
        structure.insert("common_oxidation_states".to_string(), states);
        iron.as_object_mut().unwrap().remove("reactions");
        assert!(iron["physical_properties"]["melting_point_k"].is_null());

        let result = check_element_documents(&[doc("026-iron.json", iron)]);
        assert!(result.issues.is_empty(), "{:?}", result.issues);
        assert_eq!(result.valid, 1);
    }

    #[test]
    fn decay_mode_requires_radioactivity() {
        let mut lead = element(82, "Pb", "Lead", "post-transition metal");
        lead.nuclear_properties.decay_mode = Some("alpha".into());
        let result = check_element_documents(&[element_doc(&lead, "082-lead.json")]);
        assert_eq!(result.valid, 0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.parsed.len(), 1);

        lead.nuclear_properties.radioactive = true;
        let result = check_element_documents(&[element_doc(&lead, "082-lead.json")]);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn symbol_shape_is_checked() {
        assert!(is_element_symbol("H"));
        assert!(is_element_symbol("Og"));
        assert!(!is_element_symbol("og"));
        assert!(!is_element_symbol("Uue"));
        assert!(!is_element_symbol(""));
    }

    #[test]
    fn reaction_documents_accept_both_shapes_and_count_categories() {
        let r1 = serde_json::to_value(reaction(
            "H-industrial-001",
            ReactionCategory::Industrial,
            &["H"],
        ))
        .unwrap();
        let r2 = serde_json::to_value(reaction(
            "O-biological-001",
            ReactionCategory::Biological,
            &["O"],
        ))
        .unwrap();
        let docs = vec![
            doc("industrial.json", Value::Array(vec![r1])),
            doc(
                "biological.json",
                serde_json::json!({ "reactions": [r2, {"id": "O-biological-002"}] }),
            ),
            doc("broken.json", Value::from(42)),
        ];
        let result = check_reaction_documents(&docs);
        assert_eq!((result.total, result.valid), (3, 2));
        assert_eq!(result.categories["industrial"], 1);
        assert_eq!(result.categories["biological"], 2);
        assert!(!result.categories.contains_key("broken"));
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues[0].to_string().starts_with("biological.json/O-biological-002"));
    }

    #[test]
    fn unknown_category_is_a_violation() {
        let mut value = serde_json::to_value(reaction(
            "H-cosmic-001",
            ReactionCategory::Notable,
            &["H"],
        ))
        .unwrap();
        value["category"] = Value::from("cosmic");
        let result = check_reaction_documents(&[doc("notable.json", Value::Array(vec![value]))]);
        assert_eq!(result.valid, 0);
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn reactions_missing_defaulted_fields_are_violations() {
        let full = serde_json::to_value(reaction(
            "Fe-industrial-001",
            ReactionCategory::Industrial,
            &["Fe"],
        ))
        .unwrap();
        let mut sparse = serde_json::Map::new();
        for key in [
            "id",
            "name",
            "equation",
            "type",
            "category",
            "elements_involved",
            "reversible",
            "description",
        ] {
            sparse.insert(key.to_string(), full[key].clone());
        }
        let mut partial = full.clone();
        partial["thermodynamics"]
            .as_object_mut()
            .unwrap()
            .remove("exothermic");

        let docs = vec![doc(
            "industrial.json",
            Value::Array(vec![Value::Object(sparse), partial]),
        )];
        let result = check_reaction_documents(&docs);
        assert_eq!((result.total, result.valid), (2, 0));
        assert_eq!(result.parsed.len(), 2);

        let missing: Vec<String> = result.issues.iter().map(Issue::to_string).collect();
        assert_eq!(missing.len(), 6, "{missing:?}");
        assert!(missing[0].ends_with("missing required field 'equation_latex'"));
        assert!(missing.iter().any(|m| m.ends_with("'conditions'")));
        assert_eq!(
            missing[5],
            "industrial.json/Fe-industrial-001: missing required field 'thermodynamics.exothermic'"
        );
    }

    #[test]
    fn non_positive_coefficients_are_violations() {
        let mut rxn = reaction("H-laboratory-001", ReactionCategory::Laboratory, &["H"]);
        rxn.products[0].moles = 0.0;
        let value = serde_json::to_value(&rxn).unwrap();
        let result = check_reaction_documents(&[doc("laboratory.json", Value::Array(vec![value]))]);
        assert_eq!(result.valid, 0);
        assert_eq!(result.parsed.len(), 1);
        assert!(result.issues[0].to_string().contains("positive"));
    }

    #[test]
    fn duplicate_elements_are_reported_per_field() {
        let elements = vec![
            element(1, "H", "Hydrogen", "nonmetal"),
            element(1, "D", "Hydrogen", "nonmetal"),
            element(2, "H", "Helium", "noble gas"),
        ];
        let issues = check_element_uniqueness(&elements);
        assert_eq!(
            issues,
            vec![
                Issue::DuplicateElement {
                    field: "atomic_number",
                    value: "1".into()
                },
                Issue::DuplicateElement {
                    field: "name",
                    value: "Hydrogen".into()
                },
                Issue::DuplicateElement {
                    field: "symbol",
                    value: "H".into()
                },
            ]
        );
    }
}
