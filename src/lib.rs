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

//! Parser for Polylang collection schemas.
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program
//! ```
//!
//! Entry points:
//! - [`parse_str`] for an in-memory buffer
//! - [`parse_file`], [`parse_dir`] and [`parse_path`] for the filesystem
//! - [`parse_metadata`] for compiled JSON metadata
//!
//! ```
//! let program = polylang::parse_str("collection Account { id: string; }").unwrap();
//! assert_eq!(program.collection("Account").unwrap().fields().count(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod metadata;
pub mod parser;
pub mod source;
pub mod span;

pub use ast::{Node, Program};
pub use diagnostics::DiagnosticPrinter;
pub use error::{Error, Result, SyntaxError};
pub use metadata::{parse_metadata, parse_metadata_file};
pub use source::{collect_source_files, parse_dir, parse_file, parse_path, SOURCE_EXTENSION};
pub use span::Span;

/// Parses one in-memory buffer.
pub fn parse_str(source: &str) -> Result<Program> {
    parser::parse_source(source).map_err(|error| Error::Syntax { file: None, error })
}
