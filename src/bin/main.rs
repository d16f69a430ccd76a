//! chart-query CLI - Inspect and transform chart query settings
//!
//! Usage:
//!   chart-query inspect <setting.json>
//!   chart-query drilldown <setting.json> <drilldown.json>
//!   chart-query zoom <setting.json> [--level <scalar function>]
//!   chart-query resolve <conditions.json>
//!   chart-query etl <etl_config.json>
//!   chart-query dynamic <widgets.json>
//!
//! Examples:
//!   chart-query drilldown fixtures/funnel.json fixtures/drill_city.json
//!   chart-query zoom fixtures/series.json --level to_month

use chart_query::config::{LoggingSettings, Settings};
use chart_query::model::{apply_dynamic_functions, ScalarFunctionType};
use chart_query::resolver::ConditionGroups;
use chart_query::{
    ConditionResolver, DrilldownData, EtlConfig, ModelResult, NestedConditionResolver,
    QuerySetting, Widget,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chart-query")]
#[command(about = "chart-query - Inspect and transform chart query settings")]
#[command(version)]
struct Cli {
    /// Path to a chart-query.toml (defaults to the standard search path)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a query setting's columns and capabilities
    Inspect {
        /// Query setting JSON file
        file: PathBuf,
    },

    /// Apply one drilldown step and print the new query setting
    Drilldown {
        /// Query setting JSON file
        file: PathBuf,

        /// Drilldown JSON file ({ name, toField, value })
        drilldown: PathBuf,
    },

    /// Zoom the chart one level and print the updated query setting
    Zoom {
        /// Query setting JSON file
        file: PathBuf,

        /// Target level (to_year, to_quarter, to_month, ...); defaults to the next date level
        #[arg(short, long)]
        level: Option<ScalarFunctionType>,
    },

    /// Resolve grouped filter rows into conditions
    Resolve {
        /// JSON object of group index -> list of filter rows
        file: PathBuf,
    },

    /// Normalize an ETL incremental config
    Etl {
        /// EtlConfig JSON file
        file: PathBuf,
    },

    /// Apply dynamic-function selections to every chart of a dashboard
    Dynamic {
        /// JSON array of widgets
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&settings.logging);

    match cli.command {
        Commands::Inspect { file } => cmd_inspect(&file),
        Commands::Drilldown { file, drilldown } => cmd_drilldown(&file, &drilldown),
        Commands::Zoom { file, level } => cmd_zoom(&file, level),
        Commands::Resolve { file } => cmd_resolve(&file, &settings),
        Commands::Etl { file } => cmd_etl(&file),
        Commands::Dynamic { file } => cmd_dynamic(&file),
    }
}

fn init_tracing(logging: &LoggingSettings) {
    let directive = logging.resolved_filter().unwrap_or_else(|e| {
        eprintln!("Warning: {}; using default log filter", e);
        LoggingSettings::default().filter
    });
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(logging.ansi)
        .with_writer(std::io::stderr)
        .init();
}

/// Read and parse a JSON file, reporting failures on stderr.
fn read_json(path: &Path) -> Result<Value, ExitCode> {
    let source = fs::read_to_string(path).map_err(|e| {
        eprintln!("Error reading file '{}': {}", path.display(), e);
        ExitCode::FAILURE
    })?;
    serde_json::from_str(&source).map_err(|e| {
        eprintln!("Invalid JSON in '{}': {}", path.display(), e);
        ExitCode::FAILURE
    })
}

/// Read a JSON file and rebuild a model value from it.
fn load<T>(path: &Path, from_object: impl FnOnce(Value) -> ModelResult<T>) -> Result<T, ExitCode> {
    let value = read_json(path)?;
    from_object(value).map_err(|e| {
        eprintln!("Error in '{}': {}", path.display(), e);
        ExitCode::FAILURE
    })
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_inspect(file: &Path) -> ExitCode {
    let setting = match load(file, QuerySetting::from_object) {
        Ok(setting) => setting,
        Err(code) => return code,
    };

    println!("File: {}", file.display());
    println!("Class: {}", setting.class_name());
    println!();

    println!("Columns:");
    for column in setting.all_table_columns() {
        let dynamic = column
            .dynamic_function_id
            .map(|id| format!(" (dynamic: {})", id))
            .unwrap_or_default();
        println!(
            "  - {} = {:?}({}){}",
            column.name,
            column.function.class_name,
            column.field().qualified_name(),
            dynamic
        );
    }
    println!();

    println!("Filters: {}", setting.filters().len());
    println!("Sorts: {}", setting.sorts().len());
    println!();

    println!("Capabilities:");
    if let Some(zoomable) = setting.as_zoomable() {
        let next = zoomable
            .zoom_data()
            .next_horizontal_level()
            .map(|level| level.to_string())
            .unwrap_or_else(|| "none".to_string());
        println!("  - zoomable (next level: {})", next);
    }
    if let Some(drilldownable) = setting.as_drilldownable() {
        println!(
            "  - drilldownable (on: {})",
            drilldownable.column_will_drilldown().name
        );
    }
    if let Some(filterable) = setting.as_filterable() {
        println!("  - filterable (on: {})", filterable.filter_column().name);
    }

    ExitCode::SUCCESS
}

fn cmd_drilldown(file: &Path, drilldown: &Path) -> ExitCode {
    let setting = match load(file, QuerySetting::from_object) {
        Ok(setting) => setting,
        Err(code) => return code,
    };
    let data: DrilldownData = match load(drilldown, |value| Ok(serde_json::from_value(value)?)) {
        Ok(data) => data,
        Err(code) => return code,
    };

    let Some(drilldownable) = setting.as_drilldownable() else {
        eprintln!("{} does not support drilldown", setting.class_name());
        return ExitCode::FAILURE;
    };
    print_json(&drilldownable.build_query_drilldown(&data))
}

fn cmd_zoom(file: &Path, level: Option<ScalarFunctionType>) -> ExitCode {
    let mut setting = match load(file, QuerySetting::from_object) {
        Ok(setting) => setting,
        Err(code) => return code,
    };
    let class_name = setting.class_name();

    let Some(zoomable) = setting.as_zoomable_mut() else {
        eprintln!("{} does not support zoom", class_name);
        return ExitCode::FAILURE;
    };
    let current = zoomable.zoom_data();
    let Some(next_level) = level.or_else(|| current.next_horizontal_level()) else {
        eprintln!("No finer zoom level after the current one; pass --level");
        return ExitCode::FAILURE;
    };

    let zoom = zoomable.build_new_zoom_data(&current, next_level);
    zoomable.set_zoom_data(&zoom);
    print_json(&setting)
}

fn cmd_resolve(file: &Path, settings: &Settings) -> ExitCode {
    let groups: ConditionGroups = match load(file, |value| Ok(serde_json::from_value(value)?)) {
        Ok(groups) => groups,
        Err(code) => return code,
    };

    let resolver = NestedConditionResolver::from_settings(&settings.resolver);
    print_json(&resolver.build_conditions(&groups))
}

fn cmd_etl(file: &Path) -> ExitCode {
    match load(file, EtlConfig::from_object) {
        Ok(config) => print_json(&config),
        Err(code) => code,
    }
}

fn cmd_dynamic(file: &Path) -> ExitCode {
    let mut widgets: Vec<Widget> = match load(file, |value| Ok(serde_json::from_value(value)?)) {
        Ok(widgets) => widgets,
        Err(code) => return code,
    };

    apply_dynamic_functions(&mut widgets);
    print_json(&widgets)
}
