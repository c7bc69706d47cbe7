// ElementExplorer - app/state.rs
//
// Application state management. Holds the element list, the current
// criteria set, the display mode, and the cached filter result.
//
// The criteria set is replaced wholesale on every change; the filtered
// view is only recomputed when the new set differs from the old one.

use crate::core::criteria::{self, Criteria, CriterionKey, RawValue};
use crate::core::filter;
use crate::core::model::{DisplayMode, Element};

/// One element as it should be presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRow<'a> {
    pub element: &'a Element,
    /// True when the element fails the active criteria (dim mode only).
    pub dimmed: bool,
}

/// Top-level application state.
#[derive(Debug)]
pub struct ExplorerState {
    /// All loaded elements in dataset order. Never modified.
    elements: Vec<Element>,

    /// Current criteria set.
    criteria: Criteria,

    /// Indices of elements matching the current criteria (into `elements`).
    filtered_indices: Vec<usize>,

    /// Presentation of non-matching elements.
    pub display_mode: DisplayMode,
}

impl ExplorerState {
    /// Create state over a loaded dataset with no active criteria.
    pub fn new(elements: Vec<Element>, display_mode: DisplayMode) -> Self {
        let filtered_indices = (0..elements.len()).collect();
        Self {
            elements,
            criteria: Criteria::new(),
            filtered_indices,
            display_mode,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Set or clear one criterion. Returns true if the criteria changed.
    pub fn set_criterion(&mut self, key: CriterionKey, raw: Option<RawValue>) -> bool {
        let next = criteria::set_criterion(&self.criteria, key, raw);
        self.replace_criteria(next)
    }

    /// Clear all criteria. Returns true if any were active.
    pub fn reset(&mut self) -> bool {
        self.replace_criteria(criteria::reset_criteria())
    }

    fn replace_criteria(&mut self, next: Criteria) -> bool {
        if next == self.criteria {
            tracing::trace!("Criteria unchanged; keeping cached result");
            return false;
        }
        self.criteria = next;
        self.apply_filters();
        true
    }

    /// Recompute filtered indices from current elements and criteria.
    fn apply_filters(&mut self) {
        self.filtered_indices = filter::apply_filters(&self.elements, &self.criteria);
        tracing::debug!(
            criteria = %self.criteria,
            matching = self.filtered_indices.len(),
            total = self.elements.len(),
            "Filters applied"
        );
    }

    /// Number of elements matching the current criteria.
    pub fn matching_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Elements matching the current criteria, in dataset order.
    pub fn matching_elements(&self) -> Vec<&Element> {
        self.filtered_indices
            .iter()
            .filter_map(|&idx| self.elements.get(idx))
            .collect()
    }

    /// Rows to present for the current display mode.
    pub fn rows(&self) -> Vec<ElementRow<'_>> {
        match self.display_mode {
            DisplayMode::Dim => self
                .elements
                .iter()
                .map(|element| ElementRow {
                    element,
                    dimmed: filter::is_filtered_out(element, &self.criteria),
                })
                .collect(),
            DisplayMode::Hide => filter::filter_list(&self.elements, &self.criteria)
                .into_iter()
                .map(|element| ElementRow {
                    element,
                    dimmed: false,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset;

    fn state(mode: DisplayMode) -> ExplorerState {
        ExplorerState::new(dataset::load_builtin().unwrap(), mode)
    }

    #[test]
    fn test_new_state_matches_everything() {
        let s = state(DisplayMode::Dim);
        assert!(s.criteria().is_empty());
        assert_eq!(s.matching_count(), 118);
        assert!(s.rows().iter().all(|r| !r.dimmed));
    }

    #[test]
    fn test_set_criterion_reports_change() {
        let mut s = state(DisplayMode::Dim);
        assert!(s.set_criterion(CriterionKey::Group, Some("14".into())));
        assert_eq!(s.matching_count(), 6);

        // Same value again: no change.
        assert!(!s.set_criterion(CriterionKey::Group, Some(RawValue::Number(14.0))));

        // Clearing an absent key: no change.
        assert!(!s.set_criterion(CriterionKey::Phase, Some("".into())));
    }

    #[test]
    fn test_dim_mode_keeps_all_rows() {
        let mut s = state(DisplayMode::Dim);
        s.set_criterion(CriterionKey::Phase, Some("liquid".into()));
        let rows = s.rows();
        assert_eq!(rows.len(), 118);
        let lit: Vec<&str> = rows
            .iter()
            .filter(|r| !r.dimmed)
            .map(|r| r.element.symbol.as_str())
            .collect();
        assert_eq!(lit, ["Br", "Hg"]);
    }

    #[test]
    fn test_hide_mode_only_matches() {
        let mut s = state(DisplayMode::Hide);
        s.set_criterion(CriterionKey::Phase, Some("liquid".into()));
        let symbols: Vec<&str> = s.rows().iter().map(|r| r.element.symbol.as_str()).collect();
        assert_eq!(symbols, ["Br", "Hg"]);
        assert_eq!(
            s.matching_elements()
                .iter()
                .map(|e| e.symbol.as_str())
                .collect::<Vec<_>>(),
            symbols
        );
    }

    #[test]
    fn test_reset() {
        let mut s = state(DisplayMode::Dim);
        assert!(!s.reset());
        s.set_criterion(CriterionKey::Category, Some("halogen".into()));
        assert_eq!(s.matching_count(), 5);
        assert!(s.reset());
        assert_eq!(s.matching_count(), 118);
    }
}
