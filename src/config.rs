//! User configuration (`config.toml`).
//!
//! ```toml
//! [defaults]
//! mode = "col"
//! indirect = true
//! ```

use directories::ProjectDirs;
use formline_core::Mode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    defaults: Option<DefaultsSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsSection {
    mode: Option<String>,
    indirect: Option<bool>,
}

/// Settings resolved from the config file, before command-line overrides.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Answer used when the walkthrough's mode question is left empty.
    pub default_mode: Option<Mode>,
    /// Rewrite references even when no mode is given on the command line.
    pub indirect: bool,
}

impl Config {
    /// Mode to rewrite with when the command line did not pick one.
    pub fn implied_mode(&self) -> Option<Mode> {
        self.indirect.then(|| self.default_mode.unwrap_or_default())
    }
}

/// Load the config from `config_file`, or from the user config dir.
///
/// Problems never abort the program; they are returned as warnings and the
/// built-in defaults are used instead.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let config = match read_config_file(&path) {
        Ok(content) => match toml::from_str::<ConfigFile>(&content) {
            Ok(parsed) => build_config(parsed, &mut warnings),
            Err(err) => {
                warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                Config::default()
            }
        },
        Err(warning) => {
            warnings.push(warning);
            Config::default()
        }
    };
    (config, warnings)
}

fn read_config_file(path: &Path) -> Result<String, String> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        )),
        Ok(_) => std::fs::read_to_string(path)
            .map_err(|err| format!("Failed to read {}: {}", path.display(), err)),
        Err(err) => Err(format!(
            "Failed to read metadata for {}: {}",
            path.display(),
            err
        )),
    }
}

fn build_config(file: ConfigFile, warnings: &mut Vec<String>) -> Config {
    let Some(defaults) = file.defaults else {
        return Config::default();
    };

    let default_mode = match defaults.mode.as_deref().map(str::parse::<Mode>) {
        Some(Ok(mode)) => Some(mode),
        Some(Err(err)) => {
            warnings.push(format!("Ignoring default mode: {}", err));
            None
        }
        None => None,
    };

    Config {
        default_mode,
        indirect: defaults.indirect.unwrap_or(false),
    }
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "formline")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
