use anyhow::Result;
use std::fs::File;
use tracing::level_filters::LevelFilter;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{filter::Targets, fmt, prelude::*, registry};

use crate::cli::Cli;
use crate::time::LocalTimeOnly;

/// Log target shared by the library and the binary
const LOG_TARGET: &str = "pingboard";

/// Initialize the logger based on command-line arguments.
pub fn init_logger(cli_args: &Cli) -> Result<()> {
    let indicatif_layer = IndicatifLayer::new();

    // Console output goes through the progress bar writer so both can coexist
    let console_fmt = fmt::layer()
        .with_target(false)
        .with_timer(LocalTimeOnly)
        .with_writer(indicatif_layer.get_stderr_writer());

    if !cli_args.log_file {
        registry()
            .with(indicatif_layer)
            .with(console_fmt.with_filter(console_filter(cli_args)))
            .init();
        return Ok(());
    }

    let log_file_path = match &cli_args.log_file_path {
        Some(path) => path.clone(),
        None => pingboard::config::get_user_file_path("pingboard.log")?,
    };

    // Open log file in append mode
    let file = File::options()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    // File-specific fmt layer, errors only
    let file_fmt = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_timer(LocalTimeOnly)
        .with_writer(file)
        .with_filter(LevelFilter::ERROR);

    registry()
        .with(indicatif_layer)
        .with(console_fmt.with_filter(console_filter(cli_args)))
        .with(file_fmt)
        .init();

    Ok(())
}

/// Console filter: errors only with `--quiet` or `--no-stdout`, otherwise `--log-level`.
fn console_filter(cli_args: &Cli) -> Targets {
    let level = if cli_args.quiet || cli_args.no_stdout {
        LevelFilter::ERROR
    } else {
        LevelFilter::from_level(cli_args.log_level.to_level_filter())
    };
    Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target(LOG_TARGET, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tracing::Level;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn console_follows_log_level() {
        let cli = parse(&["pingboard", "--log-level", "debug", "probe", "127.0.0.1"]);
        let filter = console_filter(&cli);
        assert!(filter.would_enable("pingboard", &Level::DEBUG));
        assert!(!filter.would_enable("pingboard", &Level::TRACE));
        assert!(!filter.would_enable("hyper", &Level::ERROR));
    }

    #[test]
    fn no_stdout_keeps_errors_only_with_log_file() {
        let cli = parse(&[
            "pingboard",
            "--log-file",
            "--no-stdout",
            "--log-level",
            "debug",
            "probe",
            "127.0.0.1",
        ]);
        let filter = console_filter(&cli);
        assert!(filter.would_enable("pingboard", &Level::ERROR));
        assert!(!filter.would_enable("pingboard", &Level::WARN));
    }

    #[test]
    fn quiet_keeps_errors_only() {
        let cli = parse(&["pingboard", "--quiet", "probe", "127.0.0.1"]);
        let filter = console_filter(&cli);
        assert!(filter.would_enable("pingboard", &Level::ERROR));
        assert!(!filter.would_enable("pingboard", &Level::INFO));
    }
}
