use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid block: '{0}' (expected s, p, d, or f)")]
pub struct ParseBlockError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid phase: '{0}' (expected solid, liquid, or gas)")]
pub struct ParsePhaseError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid reaction category: '{0}' (expected industrial, laboratory, biological, environmental, or notable)"
)]
pub struct ParseCategoryError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid physical state: '{0}' (expected s, l, g, or aq)")]
pub struct ParseStateError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
}

impl Block {
    pub fn as_str(&self) -> &'static str {
        match self {
            Block::S => "s",
            Block::P => "p",
            Block::D => "d",
            Block::F => "f",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Block {
    type Err = ParseBlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Block::S),
            "p" => Ok(Block::P),
            "d" => Ok(Block::D),
            "f" => Ok(Block::F),
            _ => Err(ParseBlockError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Solid => "solid",
            Phase::Liquid => "liquid",
            Phase::Gas => "gas",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Phase::Solid),
            "liquid" => Ok(Phase::Liquid),
            "gas" => Ok(Phase::Gas),
            _ => Err(ParsePhaseError(s.to_string())),
        }
    }
}

/// Closed classification of reaction records.
///
/// The declaration order is also the alphabetical order of the serialized
/// names, so the derived `Ord` agrees with sorting by the category string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionCategory {
    Biological,
    Environmental,
    Industrial,
    Laboratory,
    Notable,
}

impl ReactionCategory {
    pub const ALL: [ReactionCategory; 5] = [
        ReactionCategory::Industrial,
        ReactionCategory::Laboratory,
        ReactionCategory::Biological,
        ReactionCategory::Environmental,
        ReactionCategory::Notable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionCategory::Biological => "biological",
            ReactionCategory::Environmental => "environmental",
            ReactionCategory::Industrial => "industrial",
            ReactionCategory::Laboratory => "laboratory",
            ReactionCategory::Notable => "notable",
        }
    }
}

impl fmt::Display for ReactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "biological" => Ok(ReactionCategory::Biological),
            "environmental" => Ok(ReactionCategory::Environmental),
            "industrial" => Ok(ReactionCategory::Industrial),
            "laboratory" => Ok(ReactionCategory::Laboratory),
            "notable" => Ok(ReactionCategory::Notable),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalState {
    S,
    L,
    G,
    Aq,
}

impl PhysicalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhysicalState::S => "s",
            PhysicalState::L => "l",
            PhysicalState::G => "g",
            PhysicalState::Aq => "aq",
        }
    }
}

impl fmt::Display for PhysicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhysicalState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s" | "solid" => Ok(PhysicalState::S),
            "l" | "liquid" => Ok(PhysicalState::L),
            "g" | "gas" => Ok(PhysicalState::G),
            "aq" | "aqueous" => Ok(PhysicalState::Aq),
            _ => Err(ParseStateError(s.to_string())),
        }
    }
}
