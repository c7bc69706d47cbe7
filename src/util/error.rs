// ElementExplorer - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// The filter evaluator itself never fails; everything here comes from the
// edges (dataset files, text assignments, exports, configuration).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all ElementExplorer operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ExplorerError {
    /// Element dataset loading or validation failed.
    Dataset(DatasetError),

    /// A textual criterion assignment could not be understood.
    Criteria(CriteriaError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dataset(e) => write!(f, "Dataset error: {e}"),
            Self::Criteria(e) => write!(f, "Criteria error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ExplorerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dataset(e) => Some(e),
            Self::Criteria(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset errors
// ---------------------------------------------------------------------------

/// Errors related to loading and validating the element dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// I/O error reading a dataset file.
    Io { path: PathBuf, source: io::Error },

    /// Dataset file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The dataset is not a JSON array of element records.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The dataset contains no records.
    Empty { path: PathBuf },

    /// The dataset holds more records than there are elements.
    TooManyElements { count: usize, max: usize },

    /// An atomic number lies outside the periodic table.
    AtomicNumberOutOfRange {
        symbol: String,
        atomic_number: u32,
        min: u32,
        max: u32,
    },

    /// Two records share the same atomic number.
    DuplicateAtomicNumber { atomic_number: u32, symbol: String },

    /// A period lies outside the periodic table.
    PeriodOutOfRange { atomic_number: u32, period: u32 },

    /// A group lies outside the periodic table.
    GroupOutOfRange { atomic_number: u32, group: u32 },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "I/O error reading dataset '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Dataset '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Json { path, source } => {
                write!(f, "Failed to parse dataset '{}': {source}", path.display())
            }
            Self::Empty { path } => {
                write!(f, "Dataset '{}' contains no elements", path.display())
            }
            Self::TooManyElements { count, max } => {
                write!(f, "Dataset has {count} elements, maximum is {max}")
            }
            Self::AtomicNumberOutOfRange {
                symbol,
                atomic_number,
                min,
                max,
            } => write!(
                f,
                "Element '{symbol}' has atomic number {atomic_number}, expected {min}-{max}"
            ),
            Self::DuplicateAtomicNumber {
                atomic_number,
                symbol,
            } => write!(
                f,
                "Duplicate atomic number {atomic_number} (second occurrence: '{symbol}')"
            ),
            Self::PeriodOutOfRange {
                atomic_number,
                period,
            } => write!(
                f,
                "Element {atomic_number} has period {period}, outside the periodic table"
            ),
            Self::GroupOutOfRange {
                atomic_number,
                group,
            } => write!(
                f,
                "Element {atomic_number} has group {group}, outside the periodic table"
            ),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DatasetError> for ExplorerError {
    fn from(e: DatasetError) -> Self {
        Self::Dataset(e)
    }
}

// ---------------------------------------------------------------------------
// Criteria errors
// ---------------------------------------------------------------------------

/// Errors raised while turning user text into criterion keys.
///
/// Values are never rejected: unparsable numbers clear the criterion instead.
#[derive(Debug)]
pub enum CriteriaError {
    /// The key is not one of the recognised criterion names.
    UnknownKey { key: String },

    /// A `key=value` assignment is missing its `=`.
    MalformedAssignment { input: String },
}

impl fmt::Display for CriteriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey { key } => {
                write!(f, "Unknown criterion '{key}'")
            }
            Self::MalformedAssignment { input } => {
                write!(f, "Expected KEY=VALUE, got '{input}'")
            }
        }
    }
}

impl std::error::Error for CriteriaError {}

impl From<CriteriaError> for ExplorerError {
    fn from(e: CriteriaError) -> Self {
        Self::Criteria(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file extension does not name a supported export format.
    UnsupportedFormat { path: PathBuf },

    /// Export would exceed maximum element count.
    TooManyElements { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::UnsupportedFormat { path } => write!(
                f,
                "Cannot export to '{}': use a .csv or .json extension",
                path.display()
            ),
            Self::TooManyElements { count, max } => write!(
                f,
                "Export of {count} elements exceeds maximum of {max}"
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for ExplorerError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ExplorerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for ElementExplorer results.
pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_dataset_error_chains_json_source() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: ExplorerError = DatasetError::Json {
            path: PathBuf::from("elements.json"),
            source: json_err,
        }
        .into();
        assert!(err.to_string().starts_with("Dataset error:"));
        let inner = err.source().expect("dataset error as source");
        assert!(inner.source().is_some(), "serde_json error must be preserved");
    }

    #[test]
    fn test_criteria_error_display() {
        let err = CriteriaError::UnknownKey {
            key: "colour".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown criterion 'colour'");
    }

    #[test]
    fn test_config_error_wraps_io_source() {
        let err: ExplorerError = ConfigError::Io {
            path: PathBuf::from("custom.toml"),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
        .into();
        assert!(matches!(err, ExplorerError::Config(ConfigError::Io { .. })));
        assert!(err.to_string().starts_with("Configuration error: Config I/O error 'custom.toml'"));
        assert!(err.source().and_then(|e| e.source()).is_some());
    }
}
