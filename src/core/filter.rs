// ElementExplorer - core/filter.rs
//
// Composable filter engine for element records.
// All active criteria are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.
//
// `satisfies` is the only place a criterion is compared against an element;
// everything else in this module is built on `matches`.

use crate::core::criteria::{Criteria, CriterionKey, CriterionValue};
use crate::core::model::Element;

/// Lower bound test. Unknown values never satisfy a bound.
fn at_least(value: Option<f64>, min: f64) -> bool {
    value.is_some_and(|v| v >= min)
}

/// Upper bound test. Unknown values never satisfy a bound.
fn at_most(value: Option<f64>, max: f64) -> bool {
    value.is_some_and(|v| v <= max)
}

/// Check one criterion against one element.
fn satisfies(element: &Element, key: CriterionKey, value: &CriterionValue) -> bool {
    match (key, value) {
        (CriterionKey::Category, CriterionValue::Text(category)) => element.category == *category,
        (CriterionKey::Phase, CriterionValue::Text(phase)) => element.phase == *phase,

        (CriterionKey::AtomicNumberMin, CriterionValue::Number(min)) => {
            f64::from(element.atomic_number) >= *min
        }
        (CriterionKey::AtomicNumberMax, CriterionValue::Number(max)) => {
            f64::from(element.atomic_number) <= *max
        }
        (CriterionKey::Group, CriterionValue::Number(group)) => {
            element.group.map(f64::from) == Some(*group)
        }
        (CriterionKey::Period, CriterionValue::Number(period)) => {
            f64::from(element.period) == *period
        }

        (CriterionKey::DensityMin, CriterionValue::Number(min)) => at_least(element.density, *min),
        (CriterionKey::DensityMax, CriterionValue::Number(max)) => at_most(element.density, *max),
        (CriterionKey::ElectronegativityMin, CriterionValue::Number(min)) => {
            at_least(element.electronegativity, *min)
        }
        (CriterionKey::ElectronegativityMax, CriterionValue::Number(max)) => {
            at_most(element.electronegativity, *max)
        }
        (CriterionKey::MeltingPointMin, CriterionValue::Number(min)) => {
            at_least(element.melting_point, *min)
        }
        (CriterionKey::MeltingPointMax, CriterionValue::Number(max)) => {
            at_most(element.melting_point, *max)
        }

        // A value of the wrong kind cannot be produced through `Criteria::with`;
        // if one appears nothing can equal it.
        _ => false,
    }
}

/// Returns true if the element satisfies every active criterion.
///
/// An empty criteria set matches every element.
pub fn matches(element: &Element, criteria: &Criteria) -> bool {
    criteria
        .iter()
        .all(|(key, value)| satisfies(element, key, value))
}

/// Returns true if at least one criterion is active and the element fails it.
///
/// Used to de-emphasise an element while keeping it visible.
pub fn is_filtered_out(element: &Element, criteria: &Criteria) -> bool {
    !criteria.is_empty() && !matches(element, criteria)
}

/// Return the matching elements in their original order.
pub fn filter_list<'a>(elements: &'a [Element], criteria: &Criteria) -> Vec<&'a Element> {
    elements
        .iter()
        .filter(|element| matches(element, criteria))
        .collect()
}

/// Apply criteria to a slice of elements, returning indices of matching elements.
///
/// Returns a Vec of indices into the original slice, in ascending order.
pub fn apply_filters(elements: &[Element], criteria: &Criteria) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..elements.len()).collect();
    }

    elements
        .iter()
        .enumerate()
        .filter(|(_, element)| matches(element, criteria))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::set_criterion;

    fn make_element(
        atomic_number: u32,
        symbol: &str,
        category: &str,
        phase: &str,
        group: Option<u32>,
        period: u32,
    ) -> Element {
        Element {
            atomic_number,
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            category: category.to_string(),
            phase: phase.to_string(),
            group,
            period,
            density: None,
            electronegativity: None,
            melting_point: None,
        }
    }

    fn sample() -> Vec<Element> {
        let mut h = make_element(1, "H", "nonmetal", "gas", Some(1), 1);
        h.density = Some(0.0000899);
        h.electronegativity = Some(2.2);
        h.melting_point = Some(13.99);

        let mut he = make_element(2, "He", "noble gas", "gas", Some(18), 1);
        he.density = Some(0.0001785);
        he.melting_point = Some(0.95);

        let mut c = make_element(6, "C", "nonmetal", "solid", Some(14), 2);
        c.density = Some(2.267);
        c.electronegativity = Some(2.55);
        c.melting_point = Some(3823.0);

        let mut na = make_element(11, "Na", "alkali metal", "solid", Some(1), 3);
        na.density = Some(0.968);
        na.electronegativity = Some(0.93);
        na.melting_point = Some(370.87);

        let la = make_element(57, "La", "lanthanide", "solid", None, 6);

        vec![h, he, c, na, la]
    }

    fn symbols(elements: &[&Element]) -> Vec<String> {
        elements.iter().map(|e| e.symbol.clone()).collect()
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let elements = sample();
        let criteria = Criteria::new();
        for el in &elements {
            assert!(matches(el, &criteria));
            assert!(!is_filtered_out(el, &criteria));
        }
        assert_eq!(apply_filters(&elements, &criteria), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_category_and_atomic_number_max() {
        let elements = sample();
        let criteria = Criteria::new()
            .with_value(CriterionKey::Category, "nonmetal")
            .with_value(CriterionKey::AtomicNumberMax, 10.0);
        assert_eq!(symbols(&filter_list(&elements, &criteria)), ["H", "C"]);
        assert_eq!(apply_filters(&elements, &criteria), vec![0, 2]);
    }

    #[test]
    fn test_atomic_number_bounds_are_inclusive() {
        let elements = sample();
        let criteria = Criteria::new()
            .with_value(CriterionKey::AtomicNumberMin, 2.0)
            .with_value(CriterionKey::AtomicNumberMax, 11.0);
        assert_eq!(symbols(&filter_list(&elements, &criteria)), ["He", "C", "Na"]);
    }

    #[test]
    fn test_group_and_period_exact() {
        let elements = sample();
        let group_one = set_criterion(&Criteria::new(), CriterionKey::Group, Some("1".into()));
        assert_eq!(symbols(&filter_list(&elements, &group_one)), ["H", "Na"]);

        let period_one = Criteria::new().with_value(CriterionKey::Period, 1u32);
        assert_eq!(symbols(&filter_list(&elements, &period_one)), ["H", "He"]);
    }

    #[test]
    fn test_missing_group_never_matches_group_filter() {
        let la = make_element(57, "La", "lanthanide", "solid", None, 6);
        for group in 1..=18u32 {
            let criteria = Criteria::new().with_value(CriterionKey::Group, group);
            assert!(!matches(&la, &criteria));
        }
    }

    #[test]
    fn test_null_field_fails_range_filter() {
        let la = make_element(57, "La", "lanthanide", "solid", None, 6);
        let keys = [
            CriterionKey::DensityMin,
            CriterionKey::DensityMax,
            CriterionKey::ElectronegativityMin,
            CriterionKey::ElectronegativityMax,
            CriterionKey::MeltingPointMin,
            CriterionKey::MeltingPointMax,
        ];
        for key in keys {
            for bound in [0.0, -1.0e9, 1.0e9] {
                let criteria = Criteria::new().with_value(key, bound);
                assert!(!matches(&la, &criteria), "{key}={bound} matched a null field");
                assert!(is_filtered_out(&la, &criteria));
            }
        }
    }

    #[test]
    fn test_helium_has_no_electronegativity() {
        let elements = sample();
        let criteria = Criteria::new().with_value(CriterionKey::ElectronegativityMin, 0.0);
        assert_eq!(symbols(&filter_list(&elements, &criteria)), ["H", "C", "Na"]);
    }

    #[test]
    fn test_density_and_melting_point_ranges() {
        let elements = sample();
        let criteria = Criteria::new()
            .with_value(CriterionKey::DensityMin, 0.5)
            .with_value(CriterionKey::MeltingPointMax, 1000.0);
        assert_eq!(symbols(&filter_list(&elements, &criteria)), ["Na"]);
    }

    #[test]
    fn test_phase_filter() {
        let elements = sample();
        let criteria = Criteria::new().with_value(CriterionKey::Phase, "gas");
        assert_eq!(symbols(&filter_list(&elements, &criteria)), ["H", "He"]);
    }

    #[test]
    fn test_filtered_out_is_negated_match_when_active() {
        let elements = sample();
        let criteria = Criteria::new().with_value(CriterionKey::Category, "nonmetal");
        let dimmed: Vec<bool> = elements
            .iter()
            .map(|e| is_filtered_out(e, &criteria))
            .collect();
        assert_eq!(dimmed, vec![false, true, false, true, true]);
    }

    #[test]
    fn test_unparsable_bound_is_no_op() {
        let elements = sample();
        let criteria = set_criterion(
            &Criteria::new(),
            CriterionKey::DensityMin,
            Some("abc".into()),
        );
        assert_eq!(filter_list(&elements, &criteria).len(), elements.len());
    }
}
