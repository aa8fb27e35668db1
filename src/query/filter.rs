use std::fmt;
use std::str::FromStr;

use super::error::Error;
use crate::model::element::Element;
use crate::model::reaction::Reaction;
use crate::model::types::{Block, Phase};

/// Numeric element properties that can be used in range filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterProperty {
    MeltingPoint,
    BoilingPoint,
    Density,
    Electronegativity,
    AtomicMass,
    AtomicRadius,
    ThermalConductivity,
}

impl FilterProperty {
    pub const ALL: [FilterProperty; 7] = [
        Self::MeltingPoint,
        Self::BoilingPoint,
        Self::Density,
        Self::Electronegativity,
        Self::AtomicMass,
        Self::AtomicRadius,
        Self::ThermalConductivity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MeltingPoint => "melting_point",
            Self::BoilingPoint => "boiling_point",
            Self::Density => "density",
            Self::Electronegativity => "electronegativity",
            Self::AtomicMass => "atomic_mass",
            Self::AtomicRadius => "atomic_radius",
            Self::ThermalConductivity => "thermal_conductivity",
        }
    }

    /// The property's value on `element`, if recorded.
    pub fn value(&self, element: &Element) -> Option<f64> {
        let physical = &element.physical_properties;
        let atomic = &element.atomic_structure;
        match self {
            Self::MeltingPoint => physical.melting_point_k,
            Self::BoilingPoint => physical.boiling_point_k,
            Self::Density => physical.density_kg_m3,
            Self::Electronegativity => atomic.electronegativity_pauling,
            Self::AtomicMass => Some(element.atomic_mass_u),
            Self::AtomicRadius => atomic.atomic_radius_pm,
            Self::ThermalConductivity => physical.thermal_conductivity_w_m_k,
        }
    }

    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(FilterProperty::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FilterProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterProperty {
    type Err = Error;

    /// Hyphens are accepted in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| Error::UnknownProperty {
                name: key,
                available: Self::available(),
            })
    }
}

/// A `property=value` bound for an above/below filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub property: FilterProperty,
    pub value: f64,
}

impl FromStr for Threshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, raw)) = s.split_once('=') else {
            return Err(Error::InvalidFilter(format!(
                "expected property=value (e.g. melting_point=3000), got '{}'",
                s
            )));
        };
        let property: FilterProperty = name.parse()?;
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .ok_or_else(|| Error::InvalidThreshold {
                property: property.to_string(),
                value: raw.to_string(),
            })?;
        Ok(Self { property, value })
    }
}

/// Parses the accepted spellings of a boolean flag value.
pub fn parse_bool(s: &str) -> Result<bool, Error> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(Error::InvalidBool(s.to_string())),
    }
}

/// Conjunction of element filters; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementFilter {
    /// Keeps elements whose value is strictly greater.
    pub above: Option<Threshold>,
    /// Keeps elements whose value is strictly less.
    pub below: Option<Threshold>,
    /// Exact classification category.
    pub category: Option<String>,
    pub phase: Option<Phase>,
    pub block: Option<Block>,
    pub radioactive: Option<bool>,
}

impl ElementFilter {
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(t) = &self.above {
            if !t.property.value(element).is_some_and(|v| v > t.value) {
                return false;
            }
        }
        if let Some(t) = &self.below {
            if !t.property.value(element).is_some_and(|v| v < t.value) {
                return false;
            }
        }
        self.category.as_deref().is_none_or(|c| element.category() == c)
            && self.phase.is_none_or(|p| element.phase() == p)
            && self.block.is_none_or(|b| element.block() == b)
            && self.radioactive.is_none_or(|r| element.is_radioactive() == r)
    }

    /// Matching elements, in catalog order.
    pub fn apply<'a>(&self, elements: &'a [Element]) -> Vec<&'a Element> {
        elements.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Conjunction of reaction filters; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionFilter {
    /// Element symbol, compared case-insensitively.
    pub element: Option<String>,
    /// Exact category name.
    pub category: Option<String>,
    /// Exact reaction type.
    pub reaction_type: Option<String>,
}

impl ReactionFilter {
    pub fn matches(&self, reaction: &Reaction) -> bool {
        self.element.as_deref().is_none_or(|sym| {
            reaction
                .elements_involved
                .iter()
                .any(|s| s.eq_ignore_ascii_case(sym))
        }) && self
            .category
            .as_deref()
            .is_none_or(|c| reaction.category.as_str() == c)
            && self
                .reaction_type
                .as_deref()
                .is_none_or(|t| reaction.reaction_type == t)
    }

    /// Matching reactions, in corpus order.
    pub fn apply<'a>(&self, reactions: &'a [Reaction]) -> Vec<&'a Reaction> {
        reactions.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::fixtures::{element, with_melting_point};
    use crate::model::reaction::fixtures::reaction;
    use crate::model::types::ReactionCategory;

    fn catalog() -> Vec<Element> {
        let mut w = with_melting_point(element(74, "W", "Tungsten", "transition metal"), 3695.0);
        w.classification.block = Block::D;
        let mut h = with_melting_point(element(1, "H", "Hydrogen", "nonmetal"), 14.01);
        h.physical_properties.phase_at_stp = Phase::Gas;
        vec![
            h,
            with_melting_point(element(26, "Fe", "Iron", "transition metal"), 1811.0),
            w,
        ]
    }

    fn symbols(found: &[&Element]) -> Vec<String> {
        found.iter().map(|e| e.symbol.clone()).collect()
    }

    #[test]
    fn above_is_strictly_greater() {
        let filter = ElementFilter {
            above: Some("melting_point=2000".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(symbols(&filter.apply(&catalog())), vec!["W"]);

        let filter = ElementFilter {
            above: Some("melting_point=3695".parse().unwrap()),
            ..Default::default()
        };
        assert!(filter.apply(&catalog()).is_empty());
    }

    #[test]
    fn below_is_strictly_less_and_boundary_is_excluded() {
        let filter = ElementFilter {
            below: Some("melting_point=1811".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(symbols(&filter.apply(&catalog())), vec!["H"]);
    }

    #[test]
    fn exact_threshold_of_3000_is_excluded() {
        let catalog = vec![
            with_melting_point(element(90, "Th", "Thorium", "actinide"), 3000.0),
            with_melting_point(element(74, "W", "Tungsten", "transition metal"), 3695.0),
        ];
        let filter = ElementFilter {
            above: Some("melting_point=3000".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(symbols(&filter.apply(&catalog)), vec!["W"]);
    }

    #[test]
    fn filters_intersect() {
        let filter = ElementFilter {
            above: Some("melting_point=10".parse().unwrap()),
            below: Some("melting_point=3000".parse().unwrap()),
            category: Some("transition metal".into()),
            ..Default::default()
        };
        assert_eq!(symbols(&filter.apply(&catalog())), vec!["Fe"]);

        let filter = ElementFilter {
            phase: Some(Phase::Gas),
            radioactive: Some(false),
            ..Default::default()
        };
        assert_eq!(symbols(&filter.apply(&catalog())), vec!["H"]);

        let filter = ElementFilter {
            block: Some(Block::D),
            ..Default::default()
        };
        assert_eq!(symbols(&filter.apply(&catalog())), vec!["W"]);
    }

    #[test]
    fn missing_values_never_match_range_filters() {
        let catalog = vec![element(118, "Og", "Oganesson", "noble gas")];
        let above = ElementFilter {
            above: Some("density=0".parse().unwrap()),
            ..Default::default()
        };
        let below = ElementFilter {
            below: Some("density=1e9".parse().unwrap()),
            ..Default::default()
        };
        assert!(above.apply(&catalog).is_empty());
        assert!(below.apply(&catalog).is_empty());
    }

    #[test]
    fn threshold_parsing_reports_user_errors() {
        let t: Threshold = "thermal-conductivity=50.5".parse().unwrap();
        assert_eq!(t.property, FilterProperty::ThermalConductivity);
        assert_eq!(t.value, 50.5);

        assert!(matches!(
            "hardness=5".parse::<Threshold>(),
            Err(Error::UnknownProperty { name, .. }) if name == "hardness"
        ));
        assert!(matches!(
            "density=heavy".parse::<Threshold>(),
            Err(Error::InvalidThreshold { .. })
        ));
        assert!(matches!(
            "density=NaN".parse::<Threshold>(),
            Err(Error::InvalidThreshold { .. })
        ));
        assert!(matches!(
            "density".parse::<Threshold>(),
            Err(Error::InvalidFilter(_))
        ));
    }

    #[test]
    fn unknown_property_lists_the_whitelist() {
        let err = "hardness".parse::<FilterProperty>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("melting_point"));
        assert!(message.contains("thermal_conductivity"));
    }

    #[test]
    fn bool_spellings() {
        for s in ["true", "YES", "1"] {
            assert!(parse_bool(s).unwrap());
        }
        for s in ["false", "No", "0"] {
            assert!(!parse_bool(s).unwrap());
        }
        assert_eq!(parse_bool("maybe"), Err(Error::InvalidBool("maybe".into())));
    }

    #[test]
    fn reaction_filters_compose() {
        let mut haber = reaction("N-industrial-001", ReactionCategory::Industrial, &["N", "H"]);
        haber.reaction_type = "synthesis".into();
        let mut rust = reaction("Fe-environmental-001", ReactionCategory::Environmental, &["Fe", "O"]);
        rust.reaction_type = "oxidation".into();
        let reactions = vec![haber, rust];

        let by_element = ReactionFilter {
            element: Some("fe".into()),
            ..Default::default()
        };
        assert_eq!(by_element.apply(&reactions).len(), 1);

        let by_category = ReactionFilter {
            category: Some("industrial".into()),
            reaction_type: Some("synthesis".into()),
            ..Default::default()
        };
        let found = by_category.apply(&reactions);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "N-industrial-001");

        let exact_type = ReactionFilter {
            reaction_type: Some("Synthesis".into()),
            ..Default::default()
        };
        assert!(exact_type.apply(&reactions).is_empty());

        assert_eq!(ReactionFilter::default().apply(&reactions).len(), 2);
    }
}
