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

use clap::Parser;
use stack_display::cli::{CliArgs, ShowCommand};
use stack_display::*;
use std::io::Write;

mod test_utils {
    use super::*;
    use tempfile::NamedTempFile;

    pub fn write_conf(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn run(cmd: &ShowCommand, env_path: Option<&str>) -> String {
        let conf = cmd.resolve_conf(env_path).unwrap();
        let mut out = Vec::new();
        cmd.execute_to(&mut out, &conf).unwrap();
        String::from_utf8(out).unwrap()
    }
}

use test_utils::*;

#[test]
fn test_no_arguments_prints_demo_stack() {
    let args = CliArgs::try_parse_from(["stack-display"]).unwrap();
    assert_eq!(run(&args.show, None), "10\n20\n30\n");
}

#[test]
fn test_config_file_values_and_format() {
    let file = write_conf("[display]\nvalues = [3, 1, 2]\nformat = \"json\"\n");
    let path = file.path().to_str().unwrap().to_string();

    let args = CliArgs::try_parse_from(["stack-display", "--config-file", &path]).unwrap();
    assert_eq!(run(&args.show, None), "[\"3\",\"1\",\"2\"]\n");
}

#[test]
fn test_env_config_file_used_without_flag() {
    let file = write_conf("[display]\nvalues = [42]\n");
    let path = file.path().to_str().unwrap();

    assert_eq!(run(&ShowCommand::default(), Some(path)), "42\n");
}

#[test]
fn test_config_file_flag_beats_env() {
    let flag_file = write_conf("[display]\nvalues = [1]\n");
    let env_file = write_conf("[display]\nvalues = [2]\n");

    let cmd = ShowCommand {
        config_file: Some(flag_file.path().to_str().unwrap().to_string()),
        ..Default::default()
    };
    assert_eq!(run(&cmd, env_file.path().to_str()), "1\n");
}

#[test]
fn test_properties_override_config_file() {
    let file = write_conf("[display]\nvalues = [1, 2]\nformat = \"json\"\n");
    let path = file.path().to_str().unwrap().to_string();

    let args = CliArgs::try_parse_from([
        "stack-display",
        "--config-file",
        &path,
        "-Ddisplay.format=plain",
    ])
    .unwrap();
    assert_eq!(run(&args.show, None), "1\n2\n");
}

#[test]
fn test_invalid_config_file() {
    let file = write_conf("[display]\nvalues = \"not a list\"\n");
    let cmd = ShowCommand {
        config_file: Some(file.path().to_str().unwrap().to_string()),
        ..Default::default()
    };
    assert!(matches!(
        cmd.resolve_conf(None),
        Err(DisplayError::TomlParse(_))
    ));
}

#[test]
fn test_table_format_lists_every_value() {
    let args = CliArgs::try_parse_from(["stack-display", "--format", "table", "7", "8"]).unwrap();
    let output = run(&args.show, None);
    assert!(output.contains("[2 items]"));
    assert!(output.contains('7'));
    assert!(output.contains('8'));
}

#[test]
fn test_table_format_empty() {
    let args =
        CliArgs::try_parse_from(["stack-display", "--format", "table", "-Ddisplay.values="]).unwrap();
    assert_eq!(run(&args.show, None), "No items to display\n");
}

#[test]
fn test_display_conf_round_trips_through_toml() {
    let mut conf = DisplayConf::default();
    conf.display.values = vec![-1, 0, 7];
    conf.display.format = OutputFormat::Table;

    let encoded = toml::to_string(&conf).unwrap();
    let decoded = DisplayConf::from_toml(&encoded).unwrap();
    assert_eq!(decoded, conf);
}

#[test]
fn test_partial_toml_keeps_default_values() {
    let conf = DisplayConf::from_toml("[display]\nformat = \"table\"\n").unwrap();
    assert_eq!(conf.display.format, OutputFormat::Table);
    assert_eq!(conf.display.values, vec![10, 20, 30]);
}
