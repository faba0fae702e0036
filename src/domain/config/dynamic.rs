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

use super::{DisplayConf, OutputFormat};
use crate::shared::{DisplayError, Result};
use std::collections::HashMap;

pub const KEY_VALUES: &str = "display.values";
pub const KEY_FORMAT: &str = "display.format";

/// Parse dynamic configuration properties from -D key=value format
pub fn parse_dynamic_configs(configs: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for config in configs {
        let Some((key, value)) = config.split_once('=') else {
            return Err(DisplayError::config_error(format!(
                "Invalid config format: '{}'. Expected 'key=value'",
                config
            )));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(DisplayError::config_error(format!(
                "Empty key in config: '{}'",
                config
            )));
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}

pub fn apply_to_display_conf(
    configs: &HashMap<String, String>,
    conf: &mut DisplayConf,
) -> Result<()> {
    for key in configs.keys() {
        if key != KEY_VALUES && key != KEY_FORMAT {
            return Err(DisplayError::config_error(format!(
                "Unknown config key: '{}'",
                key
            )));
        }
    }

    if let Some(values) = configs.get(KEY_VALUES) {
        conf.display.values = parse_values(values)?;
    }

    if let Some(format) = configs.get(KEY_FORMAT) {
        conf.display.format = format.parse::<OutputFormat>()?;
    }

    Ok(())
}

/// Comma-separated integers; an empty string means no values
fn parse_values(raw: &str) -> Result<Vec<i64>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|v| {
            v.trim().parse::<i64>().map_err(|e| {
                DisplayError::config_error(format!("Invalid value '{}' in {}: {}", v, KEY_VALUES, e))
            })
        })
        .collect()
}
