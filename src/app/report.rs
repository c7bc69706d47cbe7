// ElementExplorer - app/report.rs
//
// Plain-text presentation of element rows, the criteria summary, and the
// valid filter values. Writes to any Write trait object.

use crate::app::state::{ElementRow, ExplorerState};
use crate::core::criteria::CriterionKey;
use crate::core::model::Enumerations;
use crate::util::constants;
use std::io::{self, Write};

fn optional(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => constants::UNKNOWN_VALUE.to_string(),
    }
}

fn join_numbers(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write one line per row. Dimmed rows carry the dim marker, matches the
/// match marker; with no active criteria neither is shown.
pub fn write_table<W: Write>(
    rows: &[ElementRow<'_>],
    any_active: bool,
    mut out: W,
) -> io::Result<()> {
    writeln!(
        out,
        "  {:>3}  {:<3} {:<14} {:<22} {:<8} {:>5} {:>6} {:>10} {:>6} {:>9}",
        "Z", "Sym", "Name", "Category", "Phase", "Group", "Period", "Density", "EN", "Melt (K)"
    )?;
    for row in rows {
        let marker = match (any_active, row.dimmed) {
            (false, _) => " ",
            (true, true) => constants::DIMMED_MARKER,
            (true, false) => constants::MATCH_MARKER,
        };
        let el = row.element;
        let group = el
            .group
            .map(|g| g.to_string())
            .unwrap_or_else(|| constants::UNKNOWN_VALUE.to_string());
        writeln!(
            out,
            "{marker} {:>3}  {:<3} {:<14} {:<22} {:<8} {:>5} {:>6} {:>10} {:>6} {:>9}",
            el.atomic_number,
            el.symbol,
            el.name,
            el.category,
            el.phase,
            group,
            el.period,
            optional(el.density),
            optional(el.electronegativity),
            optional(el.melting_point),
        )?;
    }
    Ok(())
}

/// Write the one-line summary: active criteria and match count.
pub fn write_summary<W: Write>(state: &ExplorerState, mut out: W) -> io::Result<()> {
    writeln!(
        out,
        "Criteria: {} | {} of {} elements match (mode: {})",
        state.criteria(),
        state.matching_count(),
        state.elements().len(),
        state.display_mode
    )
}

/// Write the recognised criterion keys and the values found in the dataset.
pub fn write_enumerations<W: Write>(enums: &Enumerations, mut out: W) -> io::Result<()> {
    writeln!(out, "Criteria:")?;
    for key in CriterionKey::all() {
        writeln!(out, "  {:<22} {}", key.name(), key.label())?;
    }
    writeln!(out)?;
    writeln!(out, "Categories: {}", enums.categories.join(", "))?;
    writeln!(out, "Phases:     {}", enums.phases.join(", "))?;
    writeln!(out, "Groups:     {}", join_numbers(&enums.groups))?;
    writeln!(out, "Periods:    {}", join_numbers(&enums.periods))?;
    Ok(())
}
