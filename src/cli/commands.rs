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

// CLI command definitions

use super::show::ShowCommand;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "stack-display",
    version,
    about = "Print every element of a collection, one per line",
    long_about = "Pushes values onto a stack and prints them in iteration order (bottom to top) without popping"
)]
pub struct CliArgs {
    #[command(flatten)]
    pub show: ShowCommand,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::OutputFormat;

    #[test]
    fn test_no_arguments() {
        let args = CliArgs::try_parse_from(["stack-display"]).unwrap();
        assert!(args.show.values.is_empty());
        assert!(args.show.config_file.is_none());
        assert!(args.show.properties.is_empty());
        assert!(args.show.format.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_arguments() {
        let args = CliArgs::try_parse_from([
            "stack-display",
            "-v",
            "--format",
            "table",
            "--config-file",
            "conf.toml",
            "-Ddisplay.values=1,2",
            "7",
            "-8",
        ])
        .unwrap();
        assert!(args.verbose);
        assert_eq!(args.show.format, Some(OutputFormat::Table));
        assert_eq!(args.show.config_file.as_deref(), Some("conf.toml"));
        assert_eq!(args.show.properties, vec!["display.values=1,2".to_string()]);
        assert_eq!(args.show.values, vec![7, -8]);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(CliArgs::try_parse_from(["stack-display", "--format", "xml"]).is_err());
    }
}
