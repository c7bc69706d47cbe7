// ElementExplorer - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ElementExplorer";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ElementExplorer";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Element data limits
// =============================================================================

/// Lowest valid atomic number.
pub const MIN_ATOMIC_NUMBER: u32 = 1;

/// Highest valid atomic number (oganesson).
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Lowest valid period (row) of the periodic table.
pub const MIN_PERIOD: u32 = 1;

/// Highest valid period (row) of the periodic table.
pub const MAX_PERIOD: u32 = 7;

/// Lowest valid IUPAC group (column).
pub const MIN_GROUP: u32 = 1;

/// Highest valid IUPAC group (column).
pub const MAX_GROUP: u32 = 18;

/// Maximum number of records accepted from a dataset file.
///
/// One record per atomic number, so anything larger is necessarily malformed.
pub const MAX_DATASET_ELEMENTS: usize = MAX_ATOMIC_NUMBER as usize;

/// Maximum dataset file size accepted from disk.
pub const MAX_DATASET_FILE_SIZE: u64 = 1024 * 1024; // 1 MB

/// Name reported for the dataset embedded in the binary.
pub const BUILTIN_DATASET_NAME: &str = "<built-in>";

// =============================================================================
// Display
// =============================================================================

/// Marker printed beside elements that fail the active criteria in dim mode.
pub const DIMMED_MARKER: &str = "·";

/// Marker printed beside elements that satisfy the active criteria.
pub const MATCH_MARKER: &str = "*";

/// Placeholder printed for unknown (null) numeric properties.
pub const UNKNOWN_VALUE: &str = "-";

// =============================================================================
// Export
// =============================================================================

/// Hard upper bound on rows written by a single export.
pub const MAX_EXPORT_ELEMENTS: usize = 10_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// File names
// =============================================================================

/// Configuration file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
