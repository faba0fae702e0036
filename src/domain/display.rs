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

//! Generic display over any iterable collection

use crate::shared::{DisplayError, Result};
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

/// Write every element of `items` to standard output, one per line.
///
/// Elements are written in whatever order the collection iterates. Borrow the
/// collection (`&vec`, `&stack`) to keep using it afterwards; nothing is popped
/// or otherwise removed from it.
pub fn display<I>(items: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    display_to(&mut handle, items)?;
    handle.flush()?;
    Ok(())
}

/// Write every element of `items` to `writer`, one per line, and return the
/// number of lines written.
pub fn display_to<W, I>(writer: &mut W, items: I) -> Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut lines = 0;
    for item in items {
        writeln!(writer, "{}", item)?;
        lines += 1;
    }
    debug!(lines, "displayed collection");
    Ok(lines)
}

/// Like [`display`], but fails with [`DisplayError::NotIterable`] when no
/// collection is supplied.
pub fn try_display<I>(items: Option<I>) -> Result<()>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    match items {
        Some(items) => display(items),
        None => Err(missing_collection()),
    }
}

/// Like [`display_to`], but fails with [`DisplayError::NotIterable`] when no
/// collection is supplied. Nothing is written in that case.
pub fn try_display_to<W, I>(writer: &mut W, items: Option<I>) -> Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    match items {
        Some(items) => display_to(writer, items),
        None => Err(missing_collection()),
    }
}

fn missing_collection() -> DisplayError {
    DisplayError::not_iterable("no collection was supplied")
}
