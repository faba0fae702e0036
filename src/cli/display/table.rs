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

//! Table rendering for CLI output

use super::colors::{table_color_to_colored_str, ColorTheme};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render items as an `INDEX | VALUE` table, in the order given
    pub fn render_items(&self, items: &[String]) -> String {
        if items.is_empty() {
            return "No items to display".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("INDEX")
                    .set_alignment(CellAlignment::Right)
                    .fg(self.theme.header),
                Cell::new("VALUE")
                    .set_alignment(CellAlignment::Left)
                    .fg(self.theme.header),
            ]);

        for (index, item) in items.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index)
                    .set_alignment(CellAlignment::Right)
                    .fg(self.theme.index),
                Cell::new(item).fg(self.theme.value),
            ]);
        }

        let count_color = table_color_to_colored_str(self.theme.get_count_color(items.len()));
        let noun = if items.len() == 1 { "item" } else { "items" };

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Collection {} ─╮\n",
            format!("[{} {}]", items.len(), noun).color(count_color)
        ));
        output.push_str(&table.to_string());

        output
    }
}
