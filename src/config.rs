//! Runtime configuration.
//!
//! # Design Decisions
//! - One flag: `debug` switches the error page between the bare apology and
//!   one that names the failure
//! - All fields have defaults so the program runs with no config at all
//! - CGI programs receive settings through the environment, so
//!   `ADDITION_CGI_DEBUG` overrides the file

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable that switches verbose error mode on.
pub const DEBUG_ENV_VAR: &str = "ADDITION_CGI_DEBUG";

/// Configuration for the addition CGI program.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Show the parse-failure detail in the error page instead of the bare
    /// apology.
    pub debug: bool,
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

impl Config {
    /// Apply the `ADDITION_CGI_DEBUG` override from the given environment.
    ///
    /// Any value other than empty, `0`, or `false` enables debug mode.
    pub fn with_env_override<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if key == DEBUG_ENV_VAR {
                self.debug = !matches!(value.as_str(), "" | "0" | "false");
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.debug);
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str("debug = true").unwrap();
        assert!(config.debug);

        let config: Config = toml::from_str("").unwrap();
        assert!(!config.debug);
    }

    #[test]
    fn test_env_override_enables_debug() {
        let config = Config::default().with_env_override(env(&[(DEBUG_ENV_VAR, "1")]));
        assert!(config.debug);
    }

    #[test]
    fn test_env_override_falsy_values() {
        let config = Config { debug: true }.with_env_override(env(&[(DEBUG_ENV_VAR, "0")]));
        assert!(!config.debug);

        let config = Config::default().with_env_override(env(&[("UNRELATED", "1")]));
        assert!(!config.debug);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/addition-cgi.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
