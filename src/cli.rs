//! Command line parsing.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::variant::Variant;

pub const USAGE: &str = "\
devstats - developer activity dashboard

Usage: devstats [OPTIONS]

Options:
  --fast          Quick ticks with instant bars and the banner (default)
  --eased         Slower ticks with animated bars
  --log <FILE>    Write diagnostics to FILE (filter with RUST_LOG)
  -h, --help      Show this help message

Keys: q quit, r reset";

/// Startup options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub variant: Variant,
    pub log_file: Option<PathBuf>,
}

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Parses command line arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fast" => options.variant = Variant::Fast,
            "--eased" => options.variant = Variant::Eased,
            "--log" => match args.next() {
                Some(path) => options.log_file = Some(PathBuf::from(path)),
                None => bail!("--log requires a FILE argument"),
            },
            "-h" | "--help" => return Ok(Command::Help),
            other => bail!("unknown argument '{other}' (use --help for usage)"),
        }
    }

    Ok(Command::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_defaults_to_fast() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(Options::default()));
        assert_eq!(Options::default().variant, Variant::Fast);
    }

    #[test]
    fn test_variant_flags() {
        let Command::Run(options) = parse(&["--eased"]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(options.variant, Variant::Eased);

        // Last flag wins.
        let Command::Run(options) = parse(&["--eased", "--fast"]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(options.variant, Variant::Fast);
    }

    #[test]
    fn test_log_file() {
        let Command::Run(options) = parse(&["--log", "/tmp/devstats.log"]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(options.log_file, Some(PathBuf::from("/tmp/devstats.log")));
    }

    #[test]
    fn test_log_requires_value() {
        let err = parse(&["--log"]).unwrap_err();
        assert!(err.to_string().contains("--log"));
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--eased", "--help"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--project", "x"]).unwrap_err();
        assert!(err.to_string().contains("--project"));
    }
}
