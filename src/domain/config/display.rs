// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::shared::{DisplayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;
use std::str::FromStr;

/// Environment variable consulted when no `--config-file` is given
pub const CONF_FILE_ENV: &str = "STACK_DISPLAY_CONF_FILE";

/// Values pushed onto the demo stack when nothing overrides them
pub const DEFAULT_VALUES: [i64; 3] = [10, 20, 30];

/// How a collection is rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One element per line
    #[default]
    Plain,
    /// Indexed table
    Table,
    /// JSON array of the elements' text
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(DisplayError::config_error(format!(
                "Invalid output format: '{}'. Expected plain, table or json",
                other
            ))),
        }
    }
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConf {
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySection {
    pub values: Vec<i64>,
    pub format: OutputFormat,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES.to_vec(),
            format: OutputFormat::default(),
        }
    }
}

impl DisplayConf {
    /// Load configuration from a TOML file
    pub fn from<T: AsRef<str>>(path: T) -> Result<Self> {
        let content = read_to_string(path.as_ref()).map_err(|e| {
            DisplayError::config_error(format!(
                "Failed to read config file {}: {}",
                path.as_ref(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let conf = DisplayConf::default();
        assert_eq!(conf.display.values, vec![10, 20, 30]);
        assert_eq!(conf.display.format, OutputFormat::Plain);
    }

    #[test]
    fn test_from_toml_partial() {
        let conf = DisplayConf::from_toml("[display]\nformat = \"json\"\n").unwrap();
        assert_eq!(conf.display.format, OutputFormat::Json);
        assert_eq!(conf.display.values, vec![10, 20, 30]);
    }

    #[test]
    fn test_from_toml_values() {
        let conf = DisplayConf::from_toml("[display]\nvalues = [1, 2]\n").unwrap();
        assert_eq!(conf.display.values, vec![1, 2]);
    }

    #[test]
    fn test_from_toml_rejects_bad_format() {
        let err = DisplayConf::from_toml("[display]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, DisplayError::TomlParse(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = DisplayConf::from("/nonexistent/stack-display.toml").unwrap_err();
        assert!(matches!(err, DisplayError::ConfigError(_)));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!(" plain ".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
