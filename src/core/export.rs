// ElementExplorer - core/export.rs
//
// CSV and JSON export of filtered element lists.
// Core layer: writes to any Write trait object.

use crate::core::model::Element;
use crate::util::constants;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Choose a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn check_limit(count: usize) -> Result<(), ExportError> {
    if count > constants::MAX_EXPORT_ELEMENTS {
        return Err(ExportError::TooManyElements {
            count,
            max: constants::MAX_EXPORT_ELEMENTS,
        });
    }
    Ok(())
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Export elements to CSV format.
///
/// Writes: atomic_number, symbol, name, category, phase, group, period,
/// density, electronegativity, melting_point. Unknown values are empty cells.
pub fn export_csv<W: Write>(
    elements: &[&Element],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(elements.len())?;
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "atomic_number",
            "symbol",
            "name",
            "category",
            "phase",
            "group",
            "period",
            "density",
            "electronegativity",
            "melting_point",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for element in elements {
        let atomic_number = element.atomic_number.to_string();
        let group = element.group.map(|g| g.to_string()).unwrap_or_default();
        let period = element.period.to_string();
        let density = optional(element.density);
        let electronegativity = optional(element.electronegativity);
        let melting_point = optional(element.melting_point);
        csv_writer
            .write_record([
                atomic_number.as_str(),
                element.symbol.as_str(),
                element.name.as_str(),
                element.category.as_str(),
                element.phase.as_str(),
                group.as_str(),
                period.as_str(),
                density.as_str(),
                electronegativity.as_str(),
                melting_point.as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export elements to JSON format (array of objects).
pub fn export_json<W: Write>(
    elements: &[&Element],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_limit(elements.len())?;
    serde_json::to_writer_pretty(writer, elements).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(elements.len())
}

/// Create `path` and export `elements` in the format its extension names.
pub fn export_to_file(elements: &[&Element], path: &Path) -> Result<usize, ExportError> {
    let format = ExportFormat::from_path(path)?;
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: PathBuf::from(path),
        source: e,
    })?;
    let mut writer = std::io::BufWriter::new(file);

    let count = match format {
        ExportFormat::Csv => export_csv(elements, &mut writer, path)?,
        ExportFormat::Json => export_json(elements, &mut writer, path)?,
    };
    writer.flush().map_err(|e| ExportError::Io {
        path: PathBuf::from(path),
        source: e,
    })?;

    tracing::info!(path = %path.display(), count, format = ?format, "Export complete");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_element(z: u32, symbol: &str, density: Option<f64>) -> Element {
        Element {
            atomic_number: z,
            symbol: symbol.to_string(),
            name: format!("{symbol}-name"),
            category: "noble gas".to_string(),
            phase: "gas".to_string(),
            group: Some(18),
            period: 1,
            density,
            electronegativity: None,
            melting_point: Some(0.95),
        }
    }

    #[test]
    fn test_csv_export() {
        let he = make_element(2, "He", Some(0.0001785));
        let og = make_element(118, "Og", None);
        let mut buf = Vec::new();
        let count = export_csv(&[&he, &og], &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "atomic_number,symbol,name,category,phase,group,period,density,electronegativity,melting_point");
        assert_eq!(lines[1], "2,He,He-name,noble gas,gas,18,1,0.0001785,,0.95");
        assert_eq!(lines[2], "118,Og,Og-name,noble gas,gas,18,1,,,0.95");
    }

    #[test]
    fn test_json_export() {
        let he = make_element(2, "He", None);
        let mut buf = Vec::new();
        let count = export_json(&[&he], &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 1);

        let parsed: Vec<Element> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, vec![he]);
    }

    #[test]
    fn test_export_refuses_too_many_rows() {
        let he = make_element(2, "He", None);
        let rows = vec![&he; constants::MAX_EXPORT_ELEMENTS + 1];
        let mut buf = Vec::new();
        let result = export_json(&rows, &mut buf, Path::new("out.json"));
        assert!(matches!(
            result,
            Err(ExportError::TooManyElements { count, max })
                if count == constants::MAX_EXPORT_ELEMENTS + 1
                    && max == constants::MAX_EXPORT_ELEMENTS
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.CSV")).unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("a.json")).unwrap(), ExportFormat::Json);
        assert!(matches!(
            ExportFormat::from_path(Path::new("a.xlsx")),
            Err(ExportError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nobles.csv");
        let he = make_element(2, "He", None);
        assert_eq!(export_to_file(&[&he], &path).unwrap(), 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("He-name"));
    }
}
