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

//! The show command: build the stack and print it

use super::display::render_to;
use crate::domain::config::{
    apply_to_display_conf, parse_dynamic_configs, DisplayConf, OutputFormat, CONF_FILE_ENV,
};
use crate::domain::Stack;
use crate::shared::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info};

#[derive(Parser, Debug, Clone, Default)]
pub struct ShowCommand {
    /// Values to push onto the stack (default: 10 20 30)
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Path to a TOML configuration file
    /// If not provided, falls back to the STACK_DISPLAY_CONF_FILE environment variable
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,

    /// Output format (overrides display.format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Dynamic configuration properties (-D key=value)
    ///
    /// Keys: display.values (comma-separated integers), display.format (plain, table, json)
    ///
    /// Example: -Ddisplay.values=1,2,3 -Ddisplay.format=json
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

impl ShowCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let env_path = std::env::var(CONF_FILE_ENV).ok();
        let conf = self.resolve_conf(env_path.as_deref())?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.execute_to(&mut handle, &conf)?;
        handle.flush()?;
        Ok(())
    }

    /// Build the stack from `conf` and render it to `writer`
    pub fn execute_to<W: Write + ?Sized>(&self, writer: &mut W, conf: &DisplayConf) -> Result<()> {
        let mut stack = Stack::with_capacity(conf.display.values.len());
        for value in &conf.display.values {
            stack.push(*value);
        }
        debug!(len = stack.len(), top = ?stack.peek(), "stack built");

        render_to(writer, &stack, conf.display.format)
    }

    /// Resolve configuration. Priority: positional values / --format > -D properties >
    /// config file (or `env_path`) > defaults
    pub fn resolve_conf(&self, env_path: Option<&str>) -> Result<DisplayConf> {
        let mut conf = if let Some(path) = self.config_file.as_deref().or(env_path) {
            info!(path, "loading configuration file");
            DisplayConf::from(path)?
        } else {
            DisplayConf::default()
        };

        if !self.properties.is_empty() {
            let dynamic_configs = parse_dynamic_configs(&self.properties)?;
            apply_to_display_conf(&dynamic_configs, &mut conf)?;
        }

        if !self.values.is_empty() {
            conf.display.values = self.values.clone();
        }

        if let Some(format) = self.format {
            conf.display.format = format;
        }

        Ok(conf)
    }
}
