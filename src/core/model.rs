// ElementExplorer - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Element
// =============================================================================

/// A single chemical element record.
///
/// Records come from a read-only dataset and are never modified once loaded.
/// Optional numeric properties are `None` where the value is unknown
/// (typically for the superheavy elements).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Atomic number (1-118), unique within a dataset.
    pub atomic_number: u32,

    /// Chemical symbol, e.g. "He".
    pub symbol: String,

    /// English element name.
    pub name: String,

    /// Category name, e.g. "noble gas" or "transition metal".
    pub category: String,

    /// Phase at standard conditions: "solid", "liquid", "gas" or "unknown".
    pub phase: String,

    /// IUPAC group (1-18). `None` for lanthanides and actinides.
    #[serde(default)]
    pub group: Option<u32>,

    /// Period (1-7).
    pub period: u32,

    /// Density in g/cm³.
    #[serde(default)]
    pub density: Option<f64>,

    /// Pauling electronegativity.
    #[serde(default, alias = "electronegativity_pauling")]
    pub electronegativity: Option<f64>,

    /// Melting point in Kelvin.
    #[serde(default, alias = "melt")]
    pub melting_point: Option<f64>,
}

// =============================================================================
// Enumerations
// =============================================================================

/// Distinct values found in a dataset, used to offer valid filter choices.
///
/// The evaluator never consults these; they exist for the front end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enumerations {
    /// Category names in first-seen order.
    pub categories: Vec<String>,
    /// Phase names in first-seen order.
    pub phases: Vec<String>,
    /// Group numbers, ascending.
    pub groups: Vec<u32>,
    /// Period numbers, ascending.
    pub periods: Vec<u32>,
}

impl Enumerations {
    /// Collect the distinct categories, phases, groups and periods.
    pub fn from_elements(elements: &[Element]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut phases: Vec<String> = Vec::new();
        let mut groups = BTreeSet::new();
        let mut periods = BTreeSet::new();

        for element in elements {
            if !categories.contains(&element.category) {
                categories.push(element.category.clone());
            }
            if !phases.contains(&element.phase) {
                phases.push(element.phase.clone());
            }
            if let Some(group) = element.group {
                groups.insert(group);
            }
            periods.insert(element.period);
        }

        Self {
            categories,
            phases,
            groups: groups.into_iter().collect(),
            periods: periods.into_iter().collect(),
        }
    }
}

// =============================================================================
// Display mode
// =============================================================================

/// How elements that fail the active criteria are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Keep every element visible; mark non-matching ones as dimmed.
    #[default]
    Dim,
    /// Show only the matching elements.
    Hide,
}

impl DisplayMode {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Dim => "dim",
            DisplayMode::Hide => "hide",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dim" => Ok(DisplayMode::Dim),
            "hide" => Ok(DisplayMode::Hide),
            other => Err(format!("unknown display mode '{other}' (expected dim or hide)")),
        }
    }
}
