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

//! Display module for formatted CLI output

pub mod colors;
pub mod json;
pub mod table;

pub use colors::ColorTheme;
pub use json::render_json;
pub use table::TableRenderer;

use crate::domain::config::OutputFormat;
use crate::domain::display_to;
use crate::shared::Result;
use std::fmt;
use std::io::Write;

/// Render `items` to `writer` in the requested format.
///
/// `Plain` is the line-per-element output of [`display_to`]. The other formats
/// collect each element's text first and write the rendered block followed by
/// a newline.
pub fn render_to<W, I>(writer: &mut W, items: I, format: OutputFormat) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    match format {
        OutputFormat::Plain => {
            display_to(writer, items)?;
        }
        OutputFormat::Table => {
            let texts = collect_text(items);
            writeln!(writer, "{}", TableRenderer::new().render_items(&texts))?;
        }
        OutputFormat::Json => {
            let texts = collect_text(items);
            writeln!(writer, "{}", render_json(&texts)?)?;
        }
    }
    Ok(())
}

fn collect_text<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    items.into_iter().map(|item| item.to_string()).collect()
}
