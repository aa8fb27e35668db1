use std::fmt;

use super::error::Error;
use crate::model::element::Element;

/// A single displayable property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Placeholder rendered for an absent value.
pub const MISSING: &str = "—";

impl Field {
    /// Renders an optional field, substituting [`MISSING`] for `None`.
    pub fn render(field: Option<&Field>) -> String {
        field.map_or_else(|| MISSING.to_string(), Field::to_string)
    }
}

fn group_thousands(int_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Field {
    /// Large floats get thousands separators and one decimal, tiny ones use
    /// scientific notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
            Self::Float(v) if v.abs() >= 1000.0 => {
                let fixed = format!("{:.1}", v.abs());
                let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
                let sign = if *v < 0.0 { "-" } else { "" };
                write!(f, "{}{}.{}", sign, group_thousands(int_part), frac)
            }
            Self::Float(v) if *v != 0.0 && v.abs() < 0.01 => write!(f, "{:.2e}", v),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

fn float(v: Option<f64>) -> Option<Field> {
    v.map(Field::Float)
}

fn text(v: Option<&str>) -> Option<Field> {
    v.map(|s| Field::Text(s.to_string()))
}

type Extract = fn(&Element) -> Option<Field>;

/// Rows of the comparison grid, in display order.
pub const COMPARE_ROWS: &[(&str, Extract)] = &[
    ("Atomic number", |e: &Element| Some(Field::Integer(e.atomic_number.into()))),
    ("Atomic mass (u)", |e: &Element| float(Some(e.atomic_mass_u))),
    ("Category", |e: &Element| text(Some(e.category()))),
    ("Group", |e: &Element| e.classification.group.map(|g| Field::Integer(g.into()))),
    ("Period", |e: &Element| Some(Field::Integer(e.classification.period.into()))),
    ("Block", |e: &Element| text(Some(e.block().as_str()))),
    ("Phase at STP", |e: &Element| text(Some(e.phase().as_str()))),
    ("Melting point (K)", |e: &Element| float(e.physical_properties.melting_point_k)),
    ("Boiling point (K)", |e: &Element| float(e.physical_properties.boiling_point_k)),
    ("Density (kg/m3)", |e: &Element| float(e.physical_properties.density_kg_m3)),
    ("Electronegativity", |e: &Element| float(e.atomic_structure.electronegativity_pauling)),
    ("1st ionization (kJ/mol)", |e: &Element| float(e.atomic_structure.first_ionization_energy())),
    ("Electron affinity (kJ/mol)", |e: &Element| float(e.atomic_structure.electron_affinity_kj_mol)),
    ("Atomic radius (pm)", |e: &Element| float(e.atomic_structure.atomic_radius_pm)),
    ("Electron config", |e: &Element| text(Some(e.atomic_structure.electron_configuration.as_str()))),
    ("Oxidation states", |e: &Element| {
        let states: Vec<String> = e
            .atomic_structure
            .oxidation_states
            .iter()
            .map(i32::to_string)
            .collect();
        Some(Field::Text(format!("[{}]", states.join(", "))))
    }),
    ("Crystal structure", |e: &Element| text(e.physical_properties.crystal_structure.as_deref())),
    ("Magnetic ordering", |e: &Element| text(e.physical_properties.magnetic_ordering.as_deref())),
    ("Thermal conductivity", |e: &Element| float(e.physical_properties.thermal_conductivity_w_m_k)),
    ("Radioactive", |e: &Element| {
        text(Some(if e.is_radioactive() { "Yes" } else { "No" }))
    }),
];

/// One property across every compared element.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareRow {
    pub label: &'static str,
    pub values: Vec<Option<Field>>,
}

/// A property-by-element grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Column headers, `"Symbol (Name)"` per element.
    pub columns: Vec<String>,
    pub rows: Vec<CompareRow>,
}

/// Resolves every identifier and projects the fixed comparison rows.
///
/// Any unresolved identifier fails the whole comparison.
pub fn compare<S: AsRef<str>>(elements: &[Element], identifiers: &[S]) -> Result<Comparison, Error> {
    let resolved = identifiers
        .iter()
        .map(|id| super::resolve(elements, id.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let columns = resolved
        .iter()
        .map(|e| format!("{} ({})", e.symbol, e.name))
        .collect();
    let rows = COMPARE_ROWS
        .iter()
        .map(|&(label, extract)| CompareRow {
            label,
            values: resolved.iter().map(|e| extract(e)).collect(),
        })
        .collect();

    Ok(Comparison { columns, rows })
}
