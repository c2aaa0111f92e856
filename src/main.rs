use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use season_renamer::rename_engine::RunSummary;
use season_renamer::{run, RenameError, RunConfig, RunMode};

/// Renames a list of files according to a season-to-episode descriptor file.
#[derive(Parser, Debug)]
#[command(name = "renamer", version, about)]
struct Cli {
    /// Path to input files to rename
    #[arg(short = 'f', long = "files_location", value_name = "DIR")]
    files_location: PathBuf,

    /// Location of season description file
    #[arg(short = 'd', long = "descriptor_location", value_name = "PATH")]
    descriptor_location: PathBuf,

    /// Do not rename, just print each `old -> new` mapping
    #[arg(long)]
    dry_run: bool,

    /// Review the plan in a terminal UI before renaming
    #[arg(short, long, conflicts_with = "dry_run")]
    interactive: bool,

    /// Only rename files with this extension (repeatable)
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    extensions: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn mode(&self) -> RunMode {
        if self.dry_run {
            RunMode::DryRun
        } else if self.interactive {
            RunMode::Interactive
        } else {
            RunMode::Apply
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn try_main(cli: &Cli) -> Result<RunSummary> {
    let config = RunConfig::builder()
        .files_location(&cli.files_location)
        .descriptor_location(&cli.descriptor_location)
        .mode(cli.mode())
        .extensions(cli.extensions.iter().cloned())
        .build()?;

    let mut stdout = io::stdout();
    let summary = run(&config, &mut stdout).with_context(|| {
        format!(
            "Failed to rename files in {}",
            config.files_location.display()
        )
    })?;
    Ok(summary)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match try_main(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<RenameError>()
                .map(RenameError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
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
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "renamer", "-f", "/media/show", "-d", "show.json", "--dry-run", "-vv", "-e", "mkv",
        ])
        .unwrap();

        assert_eq!(cli.files_location, PathBuf::from("/media/show"));
        assert_eq!(cli.descriptor_location, PathBuf::from("show.json"));
        assert_eq!(cli.mode(), RunMode::DryRun);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.extensions, ["mkv"]);
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "renamer",
            "--files_location",
            "show",
            "--descriptor_location",
            "show.json",
            "--interactive",
        ])
        .unwrap();

        assert_eq!(cli.mode(), RunMode::Interactive);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_locations_are_required() {
        assert!(Cli::try_parse_from(["renamer", "-f", "show"]).is_err());
        assert!(Cli::try_parse_from(["renamer", "-d", "show.json"]).is_err());
    }

    #[test]
    fn test_dry_run_conflicts_with_interactive() {
        assert!(
            Cli::try_parse_from(["renamer", "-f", "a", "-d", "b", "--dry-run", "-i"]).is_err()
        );
    }
}
