use serde::{Deserialize, Serialize};

use super::types::{PhysicalState, ReactionCategory};

/// A chemical reaction record from `reactions/<category>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: String,
    pub name: String,
    pub equation: String,
    #[serde(default)]
    pub equation_latex: String,
    #[serde(rename = "type")]
    pub reaction_type: String,
    pub category: ReactionCategory,
    pub elements_involved: Vec<String>,
    #[serde(default)]
    pub reactants: Vec<Participant>,
    #[serde(default)]
    pub products: Vec<Participant>,
    #[serde(default)]
    pub thermodynamics: Thermodynamics,
    #[serde(default)]
    pub conditions: Conditions,
    pub reversible: bool,
    pub description: String,
}

/// One side of a balanced equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub formula: String,
    /// Stoichiometric coefficient.
    pub moles: f64,
    pub state: PhysicalState,
}

/// Thermodynamic data for a reaction.
///
/// `exothermic` is recorded independently of `delta_h_kj`: it is the
/// qualitative label the literature attaches to the reaction, and it may be
/// present while the enthalpy is unknown (or the reverse).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thermodynamics {
    #[serde(default)]
    pub delta_h_kj: Option<f64>,
    #[serde(default)]
    pub delta_g_kj: Option<f64>,
    #[serde(default)]
    pub delta_s_j_k: Option<f64>,
    #[serde(default)]
    pub exothermic: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    #[serde(default)]
    pub temperature_k: Option<f64>,
    #[serde(default)]
    pub pressure_atm: Option<f64>,
    #[serde(default)]
    pub catalyst: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
}

impl Conditions {
    /// Renders the conditions as a single `"; "`-joined line.
    ///
    /// Parts appear in the fixed order temperature, pressure, catalyst,
    /// other. Empty catalyst/other strings are skipped. Returns `None` when
    /// nothing is left.
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(4);

        if let Some(t) = self.temperature_k {
            parts.push(format!("{} K", t));
        }
        if let Some(p) = self.pressure_atm {
            parts.push(format!("{} atm", p));
        }
        if let Some(catalyst) = self.catalyst.as_deref().filter(|c| !c.is_empty()) {
            parts.push(catalyst.to_string());
        }
        if let Some(other) = self.other.as_deref().filter(|o| !o.is_empty()) {
            parts.push(other.to_string());
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

/// The simplified view of a reaction embedded in each element record it involves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionSummary {
    pub id: String,
    pub name: String,
    pub equation: String,
    #[serde(rename = "type")]
    pub reaction_type: String,
    pub category: ReactionCategory,
    pub delta_h_kj: Option<f64>,
    pub conditions: Option<String>,
    pub description: String,
    pub reversible: bool,
}

impl From<&Reaction> for ReactionSummary {
    fn from(rxn: &Reaction) -> Self {
        Self {
            id: rxn.id.clone(),
            name: rxn.name.clone(),
            equation: rxn.equation.clone(),
            reaction_type: rxn.reaction_type.clone(),
            category: rxn.category,
            delta_h_kj: rxn.thermodynamics.delta_h_kj,
            conditions: rxn.conditions.summary(),
            description: rxn.description.clone(),
            reversible: rxn.reversible,
        }
    }
}

/// Components of a reaction id of the form `Symbol-category-NNN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionId<'a> {
    pub symbol: &'a str,
    pub category: &'a str,
    pub serial: &'a str,
}

impl<'a> ReactionId<'a> {
    /// Splits an id on `-`; `None` unless there are exactly three segments.
    pub fn parse(id: &'a str) -> Option<Self> {
        let mut parts = id.split('-');
        let symbol = parts.next()?;
        let category = parts.next()?;
        let serial = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            symbol,
            category,
            serial,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_keeps_fixed_order() {
        let cond = Conditions {
            temperature_k: Some(723.0),
            pressure_atm: Some(200.0),
            catalyst: Some("iron with K2O/Al2O3 promoters".to_string()),
            other: Some("recycle loop".to_string()),
        };
        assert_eq!(
            cond.summary().as_deref(),
            Some("723 K; 200 atm; iron with K2O/Al2O3 promoters; recycle loop")
        );
    }

    #[test]
    fn summary_omits_absent_and_empty_parts() {
        let cond = Conditions {
            temperature_k: Some(298.15),
            pressure_atm: None,
            catalyst: Some(String::new()),
            other: Some("aqueous solution".to_string()),
        };
        assert_eq!(
            cond.summary().as_deref(),
            Some("298.15 K; aqueous solution")
        );
    }

    #[test]
    fn summary_of_empty_conditions_is_none() {
        assert_eq!(Conditions::default().summary(), None);
    }

    #[test]
    fn reaction_parses_type_key() {
        let json = r#"{
            "id": "S-industrial-001",
            "name": "Contact process step 1",
            "equation": "S(s) + O2(g) -> SO2(g)",
            "equation_latex": "",
            "type": "combustion",
            "category": "industrial",
            "elements_involved": ["S", "O"],
            "reactants": [{"formula": "S", "moles": 1, "state": "s"}],
            "products": [{"formula": "SO2", "moles": 1, "state": "g"}],
            "thermodynamics": {"delta_h_kj": -296.8, "delta_g_kj": null, "delta_s_j_k": null, "exothermic": true},
            "conditions": {"temperature_k": null, "pressure_atm": null, "catalyst": null, "other": null},
            "reversible": false,
            "description": "First step of the Contact process."
        }"#;
        let rxn: Reaction = serde_json::from_str(json).unwrap();
        assert_eq!(rxn.reaction_type, "combustion");
        assert_eq!(rxn.category, ReactionCategory::Industrial);
        assert_eq!(rxn.reactants[0].moles, 1.0);
        assert_eq!(rxn.thermodynamics.exothermic, Some(true));
    }

    #[test]
    fn exothermic_may_be_unknown_while_enthalpy_is_known() {
        let thermo: Thermodynamics =
            serde_json::from_str(r#"{"delta_h_kj": -50.0, "exothermic": null}"#).unwrap();
        assert_eq!(thermo.delta_h_kj, Some(-50.0));
        assert_eq!(thermo.exothermic, None);
    }

    #[test]
    fn summary_from_reaction_copies_fields() {
        let mut rxn = fixtures::reaction("Fe-notable-001", ReactionCategory::Notable, &["Fe", "O"]);
        rxn.thermodynamics.delta_h_kj = Some(-851.5);
        rxn.conditions.other = Some("ignited with Mg ribbon".to_string());
        let summary = ReactionSummary::from(&rxn);
        assert_eq!(summary.id, "Fe-notable-001");
        assert_eq!(summary.delta_h_kj, Some(-851.5));
        assert_eq!(summary.conditions.as_deref(), Some("ignited with Mg ribbon"));
    }

    #[test]
    fn reaction_id_requires_three_segments() {
        let id = ReactionId::parse("Fe-industrial-001").unwrap();
        assert_eq!(id.symbol, "Fe");
        assert_eq!(id.category, "industrial");
        assert_eq!(id.serial, "001");

        assert!(ReactionId::parse("Fe-industrial").is_none());
        assert!(ReactionId::parse("Fe-industrial-001-b").is_none());
    }
}
