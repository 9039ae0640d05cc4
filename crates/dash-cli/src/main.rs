//! Storage dashboard CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use dash_cli::commands::{Dashboard, FileReport, system_is_dark, validate_file};
use dash_cli::logging::{LogConfig, LogFormat, init_logging};
use dash_cli::settings::Settings;
use dash_source::{DataSource, StorageClient};
use dash_view::{
    BREAKDOWN_TAB_ID, FILES_TAB_ID, FileTable, OVERVIEW_TAB_ID, SortDirection, SortKey,
};
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, FilesArgs, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let config_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let settings = Settings::load_from(&config_path);
    debug!(?settings, "resolved settings");

    match &cli.command {
        Command::Overview => {
            let mut dashboard = load_dashboard(cli, &settings, FileTable::new())?;
            println!("{}", dashboard.render(OVERVIEW_TAB_ID)?);
            println!("{}", dashboard.render(BREAKDOWN_TAB_ID)?);
            Ok(0)
        }
        Command::Files(args) => {
            let table = file_table(args, &settings);
            let mut dashboard = load_dashboard(cli, &settings, table)?;
            println!("{}", dashboard.render(FILES_TAB_ID)?);
            Ok(0)
        }
        Command::Tabs => {
            let dashboard = dashboard(cli, &settings, FileTable::new());
            println!("{}", dashboard.tab_table());
            Ok(0)
        }
        Command::Validate(args) => {
            let report = validate_file(&args.file)?;
            print_report(&report);
            Ok(i32::from(!report.result.valid))
        }
        Command::Config(args) => {
            let effective =
                settings.with_overrides(cli.endpoint.as_deref(), cli.theme.map(Into::into));
            if args.save {
                effective.save_to(&config_path)?;
                info!(path = %config_path.display(), "saved settings");
                println!("saved {}", config_path.display());
            } else {
                println!("# {}", config_path.display());
            }
            print!("{}", effective.to_toml()?);
            Ok(0)
        }
    }
}

fn dashboard(cli: &Cli, settings: &Settings, table: FileTable) -> Dashboard {
    let theme = cli.theme.map_or(settings.theme, Into::into);
    Dashboard::new(theme, table, system_is_dark())
}

fn load_dashboard(cli: &Cli, settings: &Settings, table: FileTable) -> Result<Dashboard> {
    let mut dashboard = dashboard(cli, settings, table);
    let endpoint = cli.endpoint.as_deref().or(settings.endpoint.as_deref());
    let source = DataSource::from_endpoint(endpoint);
    let client = StorageClient::with_timeout(settings.timeout()).context("build HTTP client")?;
    dashboard.load(&source, &client)?;
    Ok(dashboard)
}

fn file_table(args: &FilesArgs, settings: &Settings) -> FileTable {
    let key = args.sort.map_or(settings.default_sort, SortKey::from);
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    let table = FileTable::new().with_sort(key, direction);
    match &args.filter {
        Some(filter) => table.with_filter(filter.as_str()),
        None => table,
    }
}

fn print_report(report: &FileReport) {
    let result = &report.result;
    if report.corrected {
        println!("note: storageByType was scaled down to fit usedStorage");
    }
    if result.valid {
        let files = result
            .normalized
            .as_ref()
            .map_or(0, |snapshot| snapshot.files.len());
        println!("valid: {files} file(s)");
    } else {
        println!("invalid");
    }
    for message in &result.messages {
        println!("  - {message}");
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
