use tracing::debug;

use crate::model::element::Element;
use crate::model::index::{Extremum, PropertyIndex, PropertyStats};

/// A numeric element property tracked by the statistics index.
#[derive(Clone, Copy)]
pub struct Property {
    pub name: &'static str,
    pub extract: fn(&Element) -> Option<f64>,
}

impl std::fmt::Debug for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Property").field(&self.name).finish()
    }
}

/// Properties summarized in `by-property.json`, in output order.
pub const PROPERTIES: &[Property] = &[
    Property {
        name: "atomic_mass_u",
        extract: |e: &Element| Some(e.atomic_mass_u),
    },
    Property {
        name: "electronegativity_pauling",
        extract: |e: &Element| e.atomic_structure.electronegativity_pauling,
    },
    Property {
        name: "first_ionization_energy_kj_mol",
        extract: |e: &Element| e.atomic_structure.first_ionization_energy(),
    },
    Property {
        name: "electron_affinity_kj_mol",
        extract: |e: &Element| e.atomic_structure.electron_affinity_kj_mol,
    },
    Property {
        name: "atomic_radius_pm",
        extract: |e: &Element| e.atomic_structure.atomic_radius_pm,
    },
    Property {
        name: "covalent_radius_pm",
        extract: |e: &Element| e.atomic_structure.covalent_radius_pm,
    },
    Property {
        name: "melting_point_k",
        extract: |e: &Element| e.physical_properties.melting_point_k,
    },
    Property {
        name: "boiling_point_k",
        extract: |e: &Element| e.physical_properties.boiling_point_k,
    },
    Property {
        name: "density_kg_m3",
        extract: |e: &Element| e.physical_properties.density_kg_m3,
    },
    Property {
        name: "thermal_conductivity_w_m_k",
        extract: |e: &Element| e.physical_properties.thermal_conductivity_w_m_k,
    },
    Property {
        name: "heat_of_fusion_kj_mol",
        extract: |e: &Element| e.physical_properties.heat_of_fusion_kj_mol,
    },
    Property {
        name: "heat_of_vaporization_kj_mol",
        extract: |e: &Element| e.physical_properties.heat_of_vaporization_kj_mol,
    },
    Property {
        name: "molar_heat_capacity_j_mol_k",
        extract: |e: &Element| e.physical_properties.molar_heat_capacity_j_mol_k,
    },
];

/// Rounds half away from zero to four decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn summarize(elements: &[Element], property: &Property) -> Option<PropertyStats> {
    let mut samples: Vec<(f64, &str)> = elements
        .iter()
        .filter_map(|e| (property.extract)(e).map(|v| (v, e.symbol.as_str())))
        .collect();

    if samples.is_empty() {
        return None;
    }

    // Stable: ties keep input order, so min is the first and max the last of equals.
    samples.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (first, last) = (samples[0], samples[samples.len() - 1]);
    let values: Vec<f64> = samples.iter().map(|(v, _)| *v).collect();
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    Some(PropertyStats {
        min: Extremum {
            value: first.0,
            element: first.1.to_string(),
        },
        max: Extremum {
            value: last.0,
            element: last.1.to_string(),
        },
        mean: round4(mean),
        median: round4(median(&values)),
        count: values.len(),
    })
}

/// Min, max, mean and median for every property in [`PROPERTIES`].
///
/// A property with no non-null value anywhere in the catalog is omitted.
pub fn property_stats(elements: &[Element]) -> PropertyIndex {
    let mut index = PropertyIndex::new();
    for property in PROPERTIES {
        match summarize(elements, property) {
            Some(stats) => {
                index.insert(property.name.to_string(), stats);
            }
            None => debug!(property = property.name, "no values; omitted"),
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::fixtures::{element, with_melting_point};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn melting_catalog() -> Vec<Element> {
        vec![
            with_melting_point(element(1, "H", "Hydrogen", "nonmetal"), 14.01),
            with_melting_point(element(26, "Fe", "Iron", "transition metal"), 1811.0),
            with_melting_point(element(74, "W", "Tungsten", "transition metal"), 3695.0),
            element(118, "Og", "Oganesson", "noble gas"),
        ]
    }

    #[test]
    fn melting_point_stats_skip_nulls() {
        let index = property_stats(&melting_catalog());
        let mp = index.get("melting_point_k").unwrap();
        assert_eq!(mp.count, 3);
        assert_eq!(mp.min.element, "H");
        assert!(approx_eq(mp.min.value, 14.01));
        assert_eq!(mp.max.element, "W");
        assert!(approx_eq(mp.max.value, 3695.0));
        assert!(approx_eq(mp.median, 1811.0));
        assert!(approx_eq(mp.mean, round4((14.01 + 1811.0 + 3695.0) / 3.0)));
        assert!(approx_eq(mp.mean, 1840.0033));
    }

    #[test]
    fn properties_without_values_are_omitted() {
        let index = property_stats(&melting_catalog());
        assert!(index.contains_key("atomic_mass_u"));
        assert!(!index.contains_key("boiling_point_k"));
        assert!(!index.contains_key("first_ionization_energy_kj_mol"));
    }

    #[test]
    fn output_follows_the_fixed_property_order() {
        let mut catalog = melting_catalog();
        catalog[0].atomic_structure.ionization_energies_kj_mol = vec![1312.0, 0.0];
        catalog[1].physical_properties.density_kg_m3 = Some(7874.0);

        let stats = property_stats(&catalog);
        let keys: Vec<&str> = stats.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "atomic_mass_u",
                "first_ionization_energy_kj_mol",
                "melting_point_k",
                "density_kg_m3"
            ]
        );
    }

    #[test]
    fn first_ionization_energy_uses_the_first_entry() {
        let mut catalog = melting_catalog();
        catalog[0].atomic_structure.ionization_energies_kj_mol = vec![1312.0];
        catalog[1].atomic_structure.ionization_energies_kj_mol = vec![762.5, 1561.9];

        let index = property_stats(&catalog);
        let ie = index.get("first_ionization_energy_kj_mol").unwrap();
        assert_eq!(ie.count, 2);
        assert_eq!(ie.min.element, "Fe");
        assert!(approx_eq(ie.min.value, 762.5));
        assert!(approx_eq(ie.median, 1037.25));
    }

    #[test]
    fn equal_extrema_keep_input_order() {
        let catalog = vec![
            with_melting_point(element(3, "Li", "Lithium", "alkali metal"), 500.0),
            with_melting_point(element(11, "Na", "Sodium", "alkali metal"), 500.0),
            with_melting_point(element(19, "K", "Potassium", "alkali metal"), 500.0),
        ];
        let index = property_stats(&catalog);
        let mp = index.get("melting_point_k").unwrap();
        assert_eq!(mp.min.element, "Li");
        assert_eq!(mp.max.element, "K");
    }

    #[test]
    fn median_of_even_count_averages_the_middle_pair() {
        assert!(approx_eq(median(&[1.0, 2.0, 3.0, 10.0]), 2.5));
        assert!(approx_eq(median(&[7.0]), 7.0));
    }

    #[test]
    fn round4_rounds_to_four_places() {
        assert!(approx_eq(round4(1.234_56), 1.2346));
        assert!(approx_eq(round4(-0.000_04), 0.0));
        assert!(approx_eq(round4(2.0), 2.0));
    }

    #[test]
    fn stats_serialize_with_attributed_extrema() {
        let index = property_stats(&melting_catalog());
        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json["melting_point_k"]["min"]["element"], "H");
        assert_eq!(json["melting_point_k"]["count"], 3);
    }
}
