//! Fixed-asset register CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use asset_cli::config::Settings;
use asset_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_parse, run_search, run_sets, run_ungrouped};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = Settings::load(cli.config.as_deref());
    let result = match &cli.command {
        Command::Sets(args) => run_sets(args, &settings),
        Command::Ungrouped(args) => run_ungrouped(args, &settings),
        Command::Parse(args) => run_parse(args, &settings),
        Command::Search(args) => run_search(args, &settings),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags; `--log-level` beats `-v/-q`.
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_overrides_verbosity() {
        let cli = Cli::parse_from(["asset-register", "-vv", "--log-level", "error", "parse", "X"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn test_default_logging_defers_to_env() {
        let cli = Cli::parse_from(["asset-register", "--color", "never", "parse", "X"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_ansi);
    }

    #[test]
    fn test_sets_flags() {
        let cli = Cli::parse_from([
            "asset-register",
            "sets",
            "assets.csv",
            "--incomplete",
            "--numeric-order",
            "--config",
            "custom.toml",
        ]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.toml")));
        match cli.command {
            Command::Sets(args) => {
                assert!(args.incomplete);
                assert!(args.numeric_order);
                assert!(!args.json);
                assert_eq!(args.input.input, std::path::PathBuf::from("assets.csv"));
            }
            _ => panic!("expected sets command"),
        }
    }

    #[test]
    fn test_parse_requires_a_tag() {
        assert!(Cli::try_parse_from(["asset-register", "parse"]).is_err());
    }
}
