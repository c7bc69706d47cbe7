// ElementExplorer - core/criteria.rs
//
// The criteria set: a sparse map from criterion key to value.
// Absence is structural: a key that is not in the map imposes no constraint,
// and no empty or non-finite value is ever stored.
// Every update returns a new set; the input set is never mutated.

use crate::util::error::CriteriaError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Keys
// =============================================================================

/// A recognised criterion name.
///
/// Ordering of the variants is the display and iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionKey {
    Category,
    Phase,
    AtomicNumberMin,
    AtomicNumberMax,
    Group,
    Period,
    DensityMin,
    DensityMax,
    ElectronegativityMin,
    ElectronegativityMax,
    MeltingPointMin,
    MeltingPointMax,
}

impl CriterionKey {
    /// Returns all keys in display order.
    pub fn all() -> &'static [CriterionKey] {
        &[
            CriterionKey::Category,
            CriterionKey::Phase,
            CriterionKey::AtomicNumberMin,
            CriterionKey::AtomicNumberMax,
            CriterionKey::Group,
            CriterionKey::Period,
            CriterionKey::DensityMin,
            CriterionKey::DensityMax,
            CriterionKey::ElectronegativityMin,
            CriterionKey::ElectronegativityMax,
            CriterionKey::MeltingPointMin,
            CriterionKey::MeltingPointMax,
        ]
    }

    /// Canonical camelCase name, as used in `key=value` assignments.
    pub fn name(&self) -> &'static str {
        match self {
            CriterionKey::Category => "category",
            CriterionKey::Phase => "phase",
            CriterionKey::AtomicNumberMin => "atomicNumberMin",
            CriterionKey::AtomicNumberMax => "atomicNumberMax",
            CriterionKey::Group => "group",
            CriterionKey::Period => "period",
            CriterionKey::DensityMin => "densityMin",
            CriterionKey::DensityMax => "densityMax",
            CriterionKey::ElectronegativityMin => "electronegativityMin",
            CriterionKey::ElectronegativityMax => "electronegativityMax",
            CriterionKey::MeltingPointMin => "meltingPointMin",
            CriterionKey::MeltingPointMax => "meltingPointMax",
        }
    }

    /// Human-readable description for help output.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionKey::Category => "Category (exact)",
            CriterionKey::Phase => "Standard state (exact)",
            CriterionKey::AtomicNumberMin => "Atomic number, minimum",
            CriterionKey::AtomicNumberMax => "Atomic number, maximum",
            CriterionKey::Group => "Group (exact)",
            CriterionKey::Period => "Period (exact)",
            CriterionKey::DensityMin => "Density g/cm³, minimum",
            CriterionKey::DensityMax => "Density g/cm³, maximum",
            CriterionKey::ElectronegativityMin => "Electronegativity (Pauling), minimum",
            CriterionKey::ElectronegativityMax => "Electronegativity (Pauling), maximum",
            CriterionKey::MeltingPointMin => "Melting point K, minimum",
            CriterionKey::MeltingPointMax => "Melting point K, maximum",
        }
    }

    /// True for keys whose values are numbers (`*Min`, `*Max`, group, period).
    pub fn is_numeric(&self) -> bool {
        !matches!(self, CriterionKey::Category | CriterionKey::Phase)
    }
}

impl fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CriterionKey {
    type Err = CriteriaError;

    /// Accepts the camelCase name or its snake_case spelling, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        CriterionKey::all()
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| CriteriaError::UnknownKey {
                key: s.trim().to_string(),
            })
    }
}

// =============================================================================
// Values
// =============================================================================

/// A stored criterion value.
///
/// String keys always hold `Text`; numeric keys always hold a finite `Number`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CriterionValue {
    Text(String),
    Number(f64),
}

impl CriterionValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CriterionValue::Number(n) => Some(*n),
            CriterionValue::Text(_) => None,
        }
    }
}

impl fmt::Display for CriterionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionValue::Text(s) => f.write_str(s),
            CriterionValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Unvalidated input for a criterion, as it arrives from a text field,
/// a selection, or a command-line assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

/// Turn raw input into the value to store, or `None` to clear the key.
///
/// Unparsable numeric text clears the criterion rather than failing.
fn normalise(key: CriterionKey, raw: Option<RawValue>) -> Option<CriterionValue> {
    match raw? {
        RawValue::Text(text) if key.is_numeric() => {
            let parsed = text.trim().parse::<f64>().ok().filter(|n| n.is_finite());
            if parsed.is_none() && !text.trim().is_empty() {
                tracing::debug!(key = %key, value = %text, "Non-numeric value clears criterion");
            }
            parsed.map(CriterionValue::Number)
        }
        RawValue::Text(text) => (!text.is_empty()).then_some(CriterionValue::Text(text)),
        RawValue::Number(n) if !n.is_finite() => None,
        RawValue::Number(n) if key.is_numeric() => Some(CriterionValue::Number(n)),
        RawValue::Number(n) => Some(CriterionValue::Text(n.to_string())),
    }
}

// =============================================================================
// Criteria set
// =============================================================================

/// The set of active criteria. All entries are AND-combined when evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Criteria {
    entries: BTreeMap<CriterionKey, CriterionValue>,
}

impl Criteria {
    /// An empty set: nothing is constrained.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of active criteria.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: CriterionKey) -> Option<&CriterionValue> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: CriterionKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Active criteria in key order.
    pub fn iter(&self) -> impl Iterator<Item = (CriterionKey, &CriterionValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Return a copy with `key` set from `raw`, or removed when `raw` is
    /// absent, empty, or not a usable number for a numeric key.
    pub fn with(&self, key: CriterionKey, raw: Option<RawValue>) -> Criteria {
        let mut next = self.clone();
        match normalise(key, raw) {
            Some(value) => {
                next.entries.insert(key, value);
            }
            None => {
                next.entries.remove(&key);
            }
        }
        next
    }

    /// Builder form of [`Criteria::with`] for a present value.
    pub fn with_value(self, key: CriterionKey, value: impl Into<RawValue>) -> Criteria {
        self.with(key, Some(value.into()))
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Set (or clear) one criterion, returning the new set.
pub fn set_criterion(criteria: &Criteria, key: CriterionKey, raw: Option<RawValue>) -> Criteria {
    criteria.with(key, raw)
}

/// The empty criteria set.
pub fn reset_criteria() -> Criteria {
    Criteria::new()
}

/// Parse a `key=value` assignment. An empty value (`key=`) clears the key.
pub fn parse_assignment(input: &str) -> Result<(CriterionKey, Option<RawValue>), CriteriaError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| CriteriaError::MalformedAssignment {
            input: input.to_string(),
        })?;
    let key: CriterionKey = key.parse()?;
    Ok((key, Some(RawValue::Text(value.to_string()))))
}
