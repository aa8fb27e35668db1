use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::reaction::ReactionSummary;
use super::types::{Block, Phase};

/// A single element record as stored in `elements/NNN-name.json`.
///
/// Field order matches the on-disk layout. Unknown top-level keys are kept
/// in [`extra`](Element::extra). Records are never written back through this
/// type; see [`persist_elements`](crate::store::persist_elements).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass_u: f64,
    pub classification: Classification,
    pub atomic_structure: AtomicStructure,
    pub physical_properties: PhysicalProperties,
    pub nuclear_properties: NuclearProperties,
    pub discovery: Discovery,
    #[serde(default)]
    pub applications: Vec<String>,
    /// Derived from the reaction corpus; never edited by hand.
    #[serde(default)]
    pub reactions: Vec<ReactionSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub group: Option<u32>,
    pub period: u32,
    pub block: Block,
    pub category: String,
    #[serde(default)]
    pub natural_occurrence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomicStructure {
    pub electron_configuration: String,
    #[serde(default)]
    pub electron_shells: Vec<u32>,
    #[serde(default)]
    pub valence_electrons: Option<u32>,
    #[serde(default, alias = "common_oxidation_states")]
    pub oxidation_states: Vec<i32>,
    #[serde(default)]
    pub electronegativity_pauling: Option<f64>,
    #[serde(default)]
    pub ionization_energies_kj_mol: Vec<f64>,
    #[serde(default)]
    pub electron_affinity_kj_mol: Option<f64>,
    #[serde(default)]
    pub atomic_radius_pm: Option<f64>,
    #[serde(default)]
    pub covalent_radius_pm: Option<f64>,
}

impl AtomicStructure {
    /// First ionization energy, or `None` when no energies are recorded.
    pub fn first_ionization_energy(&self) -> Option<f64> {
        self.ionization_energies_kj_mol.first().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProperties {
    pub phase_at_stp: Phase,
    #[serde(default)]
    pub melting_point_k: Option<f64>,
    #[serde(default)]
    pub boiling_point_k: Option<f64>,
    #[serde(default)]
    pub density_kg_m3: Option<f64>,
    #[serde(default)]
    pub thermal_conductivity_w_m_k: Option<f64>,
    #[serde(default)]
    pub heat_of_fusion_kj_mol: Option<f64>,
    #[serde(default)]
    pub heat_of_vaporization_kj_mol: Option<f64>,
    #[serde(default)]
    pub molar_heat_capacity_j_mol_k: Option<f64>,
    #[serde(default)]
    pub crystal_structure: Option<String>,
    #[serde(default)]
    pub magnetic_ordering: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuclearProperties {
    pub radioactive: bool,
    #[serde(default)]
    pub half_life: Option<String>,
    #[serde(default)]
    pub decay_mode: Option<String>,
    #[serde(default)]
    pub stable_isotopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    /// Absent for elements known since antiquity.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub discoverers: Vec<String>,
    #[serde(default)]
    pub name_origin: String,
}

impl Element {
    #[inline]
    pub fn category(&self) -> &str {
        &self.classification.category
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.physical_properties.phase_at_stp
    }

    #[inline]
    pub fn block(&self) -> Block {
        self.classification.block
    }

    #[inline]
    pub fn is_radioactive(&self) -> bool {
        self.nuclear_properties.radioactive
    }

    /// Matches `identifier` against the symbol or the name, ignoring case.
    pub fn matches_label(&self, identifier: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(identifier) || self.name.eq_ignore_ascii_case(identifier)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::element;
    use super::*;

    const HYDROGEN_JSON: &str = r#"{
  "atomic_number": 1,
  "symbol": "H",
  "name": "Hydrogen",
  "atomic_mass_u": 1.008,
  "classification": {
    "group": 1,
    "period": 1,
    "block": "s",
    "category": "nonmetal",
    "natural_occurrence": "primordial"
  },
  "atomic_structure": {
    "electron_configuration": "1s1",
    "electron_shells": [1],
    "valence_electrons": 1,
    "common_oxidation_states": [-1, 1],
    "electronegativity_pauling": 2.2,
    "ionization_energies_kj_mol": [1312.0],
    "electron_affinity_kj_mol": 72.769,
    "atomic_radius_pm": 53,
    "covalent_radius_pm": 31
  },
  "physical_properties": {
    "phase_at_stp": "gas",
    "melting_point_k": 14.01,
    "boiling_point_k": 20.28,
    "density_kg_m3": 0.08988,
    "thermal_conductivity_w_m_k": 0.1805,
    "heat_of_fusion_kj_mol": 0.117,
    "heat_of_vaporization_kj_mol": 0.904,
    "molar_heat_capacity_j_mol_k": 28.836,
    "crystal_structure": "hexagonal",
    "magnetic_ordering": "diamagnetic"
  },
  "nuclear_properties": {
    "radioactive": false,
    "half_life": null,
    "decay_mode": null,
    "stable_isotopes": ["1H", "2H"]
  },
  "discovery": {
    "year": 1766,
    "discoverers": ["Henry Cavendish"],
    "name_origin": "Greek hydro + genes"
  },
  "applications": ["ammonia synthesis"],
  "reactions": [],
  "cas_number": "1333-74-0"
}"#;

    #[test]
    fn parses_full_record_with_alias_and_extra_keys() {
        let h: Element = serde_json::from_str(HYDROGEN_JSON).unwrap();
        assert_eq!(h.atomic_number, 1);
        assert_eq!(h.symbol, "H");
        assert_eq!(h.phase(), Phase::Gas);
        assert_eq!(h.atomic_structure.oxidation_states, vec![-1, 1]);
        assert_eq!(h.atomic_structure.first_ionization_energy(), Some(1312.0));
        assert_eq!(
            h.extra.get("cas_number"),
            Some(&Value::String("1333-74-0".to_string()))
        );
    }

    #[test]
    fn serialization_is_stable_across_cycles() {
        let h: Element = serde_json::from_str(HYDROGEN_JSON).unwrap();
        let first = serde_json::to_string_pretty(&h).unwrap();
        let again: Element = serde_json::from_str(&first).unwrap();
        let second = serde_json::to_string_pretty(&again).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn absent_optional_fields_are_written_as_null() {
        let e = element(2, "He", "Helium", "noble gas");
        let value = serde_json::to_value(&e).unwrap();
        assert_eq!(value["physical_properties"]["melting_point_k"], Value::Null);
        assert_eq!(value["discovery"]["year"], Value::Null);
    }

    #[test]
    fn first_ionization_energy_of_empty_sequence_is_none() {
        let e = element(118, "Og", "Oganesson", "unknown");
        assert_eq!(e.atomic_structure.first_ionization_energy(), None);
    }

    #[test]
    fn matches_label_ignores_case() {
        let e = element(26, "Fe", "Iron", "transition metal");
        assert!(e.matches_label("fe"));
        assert!(e.matches_label("IRON"));
        assert!(!e.matches_label("F"));
    }

    #[test]
    fn rejects_unknown_block() {
        let broken = HYDROGEN_JSON.replace("\"block\": \"s\"", "\"block\": \"x\"");
        assert!(serde_json::from_str::<Element>(&broken).is_err());
    }
}
