/*
 * ==========================================================================
 * POLYLANG - Collection Schema Parser
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the POLYLANG schema parser project.
 * 
 * POLYLANG is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use std::fmt::Write as _;

use crate::error::SyntaxError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for schema syntax errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is inspired by `rustc` diagnostics and stays readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full source text of the file that failed.
    source: String,

    /// Name of the source file (e.g. `account.polylang`), display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    ///
    /// # Arguments
    /// - `file_name` → The name shown in the `-->` line
    /// - `source` → The full source text of that file
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders an error diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: expected ';', found '}'
    ///   --> account.polylang:3:1
    ///    |
    ///  3 | }
    ///    | ^
    /// help: ...
    /// ```
    pub fn render(&self, error: &SyntaxError) -> String {
        let Span { line, column } = error.span;

        // Spans are 1-based; `saturating_sub` keeps a zero line in range.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = String::new();
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code, error.message, self.file_name, line, column
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);

        // Tabs are kept so the caret lines up under tab-indented source.
        let underline: String = src_line
            .chars()
            .take(column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let _ = writeln!(out, "   | {}^", underline);

        if let Some(help) = &error.help {
            let _ = writeln!(out, "help: {}", help);
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &SyntaxError) {
        eprint!("{}", self.render(error));
    }
}
