// ElementExplorer - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Element dataset loading (built-in or from file)
// 4. Applying criteria, printing the table, optional export

use clap::Parser;
use element_explorer::app::report;
use element_explorer::app::state::ExplorerState;
use element_explorer::core::criteria::parse_assignment;
use element_explorer::core::model::{DisplayMode, Element, Enumerations};
use element_explorer::core::{dataset, export};
use element_explorer::platform::config::{self, AppConfig, PlatformPaths};
use element_explorer::util::{constants, error, logging};
use std::io::Write;
use std::path::PathBuf;

/// ElementExplorer - periodic table browser with multi-criteria filtering.
///
/// Criteria are given as KEY=VALUE pairs and are AND-combined. Elements that
/// fail them are marked (dim mode) or left out (hide mode).
#[derive(Parser, Debug)]
#[command(name = "element-explorer", version, about)]
struct Cli {
    /// Criterion assignment, e.g. `category=nonmetal` or `atomicNumberMax=10`.
    /// Repeatable. An empty value (`group=`) clears the criterion.
    #[arg(short = 'f', long = "filter", value_name = "KEY=VALUE")]
    filters: Vec<String>,

    /// Element dataset JSON file (overrides config; default: built-in table).
    #[arg(long = "data", value_name = "FILE")]
    data: Option<PathBuf>,

    /// How to present non-matching elements: dim or hide.
    #[arg(short = 'm', long = "mode", value_name = "MODE")]
    mode: Option<DisplayMode>,

    /// Write the matching elements to FILE (.csv or .json).
    #[arg(short = 'e', long = "export", value_name = "FILE")]
    export: Option<PathBuf>,

    /// List the recognised criteria and the values present in the dataset.
    #[arg(long = "list-values")]
    list_values: bool,

    /// Alternative config.toml location.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn load_elements(cli: &Cli, app_config: &AppConfig) -> error::Result<Vec<Element>> {
    let path = cli.data.as_ref().or(app_config.dataset_path.as_ref());
    let elements = match path {
        Some(path) => dataset::load_from_path(path)?,
        None => dataset::load_builtin()?,
    };
    Ok(elements)
}

fn run(cli: Cli, app_config: AppConfig) -> error::Result<()> {
    let elements = load_elements(&cli, &app_config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let io_err = |e: std::io::Error| error::ExplorerError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "write",
        source: e,
    };

    if cli.list_values {
        report::write_enumerations(&Enumerations::from_elements(&elements), &mut out)
            .map_err(io_err)?;
        return Ok(());
    }

    let mode = cli.mode.unwrap_or(app_config.display_mode);
    let mut state = ExplorerState::new(elements, mode);

    for assignment in &cli.filters {
        let (key, raw) = parse_assignment(assignment)?;
        state.set_criterion(key, raw);
    }

    tracing::info!(
        criteria = %state.criteria(),
        matching = state.matching_count(),
        mode = %state.display_mode,
        "Criteria applied"
    );

    report::write_table(&state.rows(), !state.criteria().is_empty(), &mut out).map_err(io_err)?;
    writeln!(out).map_err(io_err)?;
    report::write_summary(&state, &mut out).map_err(io_err)?;

    if let Some(ref path) = cli.export {
        let count = export::export_to_file(&state.matching_elements(), path)?;
        writeln!(out, "Exported {count} elements to {}", path.display()).map_err(io_err)?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists; its warnings are replayed below.
    let loaded = match cli.config {
        Some(ref path) => config::load_explicit_config(path).map_err(error::ExplorerError::from),
        None => Ok(config::load_config(&PlatformPaths::resolve().config_dir)),
    };
    let (app_config, config_warnings) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "ElementExplorer starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    if let Err(e) = run(cli, app_config) {
        tracing::error!(error = %e, "ElementExplorer failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
