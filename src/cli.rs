//! Command-line argument parsing.

use formline_core::{FormulaSource, Mode};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: formline [OPTIONS] [FILE]

Arguments:
  [FILE]                    Formula file to convert (- reads stdin)

Options:
  -c, --command <FORMULA>   Convert the given formula text instead of a file
  -m, --mode <row|col>      Rewrite references as INDIRECT lookups
      --row                 Same as --mode row
      --col                 Same as --mode col
      --flat                Only flatten, even if the config enables indirect
      --config <FILE>       Load settings from this TOML file
      --no-config           Ignore the config file
  -h, --help                Print help

With no FILE and no --command, an interactive walkthrough is started.";

#[derive(Debug, Default, Eq, PartialEq)]
pub struct Args {
    pub source: Option<FormulaSource>,
    /// Raw `--mode` value; parsed later so the error names the bad value.
    pub mode: Option<String>,
    pub flat: bool,
    pub config_file: Option<PathBuf>,
    pub no_config: bool,
    pub help: bool,
}

impl Args {
    pub fn mode(&self) -> Result<Option<Mode>, formline_core::InvalidModeError> {
        self.mode.as_deref().map(str::parse::<Mode>).transpose()
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                parsed.help = true;
                return Ok(parsed);
            }
            "-c" | "--command" => {
                let Some(text) = args.next() else {
                    return Err("--command requires a formula".to_string());
                };
                set_source(&mut parsed, FormulaSource::Inline(text))?;
            }
            "-m" | "--mode" => {
                let Some(mode) = args.next() else {
                    return Err("--mode requires a value".to_string());
                };
                parsed.mode = Some(mode);
            }
            "--row" => parsed.mode = Some("row".to_string()),
            "--col" => parsed.mode = Some("col".to_string()),
            "--flat" => parsed.flat = true,
            "--config" => {
                let Some(path) = args.next() else {
                    return Err("--config requires a file path".to_string());
                };
                parsed.config_file = Some(PathBuf::from(path));
            }
            "--no-config" => parsed.no_config = true,
            "-" => set_source(&mut parsed, FormulaSource::Stdin)?,
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            other => set_source(&mut parsed, FormulaSource::from_arg(other))?,
        }
    }

    if parsed.flat && parsed.mode.is_some() {
        return Err("--flat cannot be combined with --mode".to_string());
    }
    Ok(parsed)
}

fn set_source(parsed: &mut Args, source: FormulaSource) -> Result<(), String> {
    if parsed.source.is_some() {
        return Err(match source {
            FormulaSource::File(path) => format!("Unexpected argument: {}", path.display()),
            _ => "Only one formula source may be given".to_string(),
        });
    }
    parsed.source = Some(source);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_and_mode() {
        let args = parse_args(["formula.txt", "--mode", "col"]).unwrap();
        assert_eq!(
            args.source,
            Some(FormulaSource::File(PathBuf::from("formula.txt")))
        );
        assert_eq!(args.mode().unwrap(), Some(Mode::Column));
    }

    #[test]
    fn test_parse_command_with_shorthand() {
        let args = parse_args(["-c", "LEN(A5)", "--row"]).unwrap();
        assert_eq!(
            args.source,
            Some(FormulaSource::Inline("LEN(A5)".to_string()))
        );
        assert_eq!(args.mode().unwrap(), Some(Mode::Row));
    }

    #[test]
    fn test_parse_stdin_dash() {
        let args = parse_args(["-"]).unwrap();
        assert_eq!(args.source, Some(FormulaSource::Stdin));
    }

    #[test]
    fn test_no_arguments_means_walkthrough() {
        let args = parse_args(Vec::<String>::new()).unwrap();
        assert_eq!(args, Args::default());
    }

    #[test]
    fn test_invalid_mode_is_reported_later() {
        let args = parse_args(["-c", "A1", "-m", "diagonal"]).unwrap();
        assert_eq!(args.mode().unwrap_err().value, "diagonal");
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(["--mode"]).is_err());
        assert!(parse_args(["--bogus"]).unwrap_err().contains("--bogus"));
        assert!(parse_args(["a.txt", "b.txt"]).unwrap_err().contains("b.txt"));
        assert!(parse_args(["-c", "A1", "a.txt"]).is_err());
        assert!(parse_args(["--flat", "--row", "a.txt"]).is_err());
    }

    #[test]
    fn test_help_short_circuits() {
        assert!(parse_args(["--help", "--bogus"]).unwrap().help);
    }
}
