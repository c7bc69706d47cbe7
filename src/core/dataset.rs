// ElementExplorer - core/dataset.rs
//
// Loading and validation of the element dataset.
//
// The dataset is a JSON array of element records. A full periodic table is
// embedded in the binary; a replacement file can be supplied from disk.
// Record order is preserved exactly as read: filtering never re-sorts.

use crate::core::model::Element;
use crate::util::constants;
use crate::util::error::DatasetError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Embedded periodic table (118 elements, ordered by atomic number).
const BUILTIN_ELEMENTS_JSON: &str = include_str!("../../data/elements.json");

/// Load the dataset embedded in the binary.
pub fn load_builtin() -> Result<Vec<Element>, DatasetError> {
    let elements = parse_elements(
        BUILTIN_ELEMENTS_JSON,
        Path::new(constants::BUILTIN_DATASET_NAME),
    )?;
    tracing::debug!(count = elements.len(), "Loaded built-in element dataset");
    Ok(elements)
}

/// Load and validate a dataset file from disk.
pub fn load_from_path(path: &Path) -> Result<Vec<Element>, DatasetError> {
    let metadata = std::fs::metadata(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > constants::MAX_DATASET_FILE_SIZE {
        return Err(DatasetError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_DATASET_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let elements = parse_elements(&content, path)?;
    tracing::info!(
        path = %path.display(),
        count = elements.len(),
        "Loaded element dataset"
    );
    Ok(elements)
}

/// Parse a JSON array of element records and validate it.
///
/// `origin` is used only for error messages.
pub fn parse_elements(json: &str, origin: &Path) -> Result<Vec<Element>, DatasetError> {
    let elements: Vec<Element> = serde_json::from_str(json).map_err(|e| DatasetError::Json {
        path: origin.to_path_buf(),
        source: e,
    })?;
    validate(&elements, origin)?;
    Ok(elements)
}

/// Check dataset-wide and per-record invariants.
///
/// Stops at the first violation.
fn validate(elements: &[Element], origin: &Path) -> Result<(), DatasetError> {
    if elements.is_empty() {
        return Err(DatasetError::Empty {
            path: PathBuf::from(origin),
        });
    }
    if elements.len() > constants::MAX_DATASET_ELEMENTS {
        return Err(DatasetError::TooManyElements {
            count: elements.len(),
            max: constants::MAX_DATASET_ELEMENTS,
        });
    }

    let mut seen = HashSet::with_capacity(elements.len());
    for element in elements {
        let z = element.atomic_number;
        if !(constants::MIN_ATOMIC_NUMBER..=constants::MAX_ATOMIC_NUMBER).contains(&z) {
            return Err(DatasetError::AtomicNumberOutOfRange {
                symbol: element.symbol.clone(),
                atomic_number: z,
                min: constants::MIN_ATOMIC_NUMBER,
                max: constants::MAX_ATOMIC_NUMBER,
            });
        }
        if !seen.insert(z) {
            return Err(DatasetError::DuplicateAtomicNumber {
                atomic_number: z,
                symbol: element.symbol.clone(),
            });
        }
        if !(constants::MIN_PERIOD..=constants::MAX_PERIOD).contains(&element.period) {
            return Err(DatasetError::PeriodOutOfRange {
                atomic_number: z,
                period: element.period,
            });
        }
        if let Some(group) = element.group {
            if !(constants::MIN_GROUP..=constants::MAX_GROUP).contains(&group) {
                return Err(DatasetError::GroupOutOfRange {
                    atomic_number: z,
                    group,
                });
            }
        }
    }

    Ok(())
}
