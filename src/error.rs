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

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ast::Program;
use crate::lexer::keywords::is_contextual_keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// A lexical or syntactic failure inside one source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Stable error code (`E_LEX`, `E_SYNTAX`, `E_LITERAL`)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Innermost grammar rule that was being matched. `None` for lexical errors.
    pub rule: Option<&'static str>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl SyntaxError {
    pub const LEXICAL: &'static str = "E_LEX";
    pub const SYNTAX: &'static str = "E_SYNTAX";
    pub const LITERAL: &'static str = "E_LITERAL";

    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            rule: None,
            help: None,
        }
    }

    /// A character no token rule accepts.
    pub fn lexical(character: char, span: Span) -> Self {
        Self::new(
            Self::LEXICAL,
            format!("unexpected character '{}'", character.escape_default()),
            span,
        )
        .with_help("only identifiers, quoted strings, numbers and punctuation are allowed")
    }

    /// The furthest token no grammar alternative could accept.
    ///
    /// `expected` lists what the alternatives wanted at that token, in the
    /// order they were tried.
    pub fn unexpected(
        code: &'static str,
        rule: &'static str,
        expected: &[String],
        found: &Token,
    ) -> Self {
        let mut error = Self::new(
            code,
            format!("expected {}, found {}", join_alternatives(expected), found.describe()),
            found.span,
        )
        .with_rule(rule);

        if found.kind == TokenKind::Identifier && is_contextual_keyword(&found.lexeme) {
            error = error.with_help(format!(
                "'{}' is only a keyword at specific positions; check the tokens before it",
                found.lexeme
            ));
        }

        error
    }

    /// Record the grammar rule (builder-style).
    pub fn with_rule(mut self, rule: &'static str) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.span)?;
        if let Some(rule) = self.rule {
            write!(f, " in {}", rule)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// `a`, `a or b`, `a, b or c`.
fn join_alternatives(items: &[String]) -> String {
    match items {
        [] => "valid input".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

/// Every way parsing a path, a file or a buffer can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Lexical or syntactic failure. `file` is `None` for in-memory buffers.
    #[error("{}{error}", file_prefix(.file.as_deref()))]
    Syntax {
        file: Option<PathBuf>,
        error: SyntaxError,
    },

    /// A file or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A metadata document is not valid JSON or does not fit the model.
    #[error("invalid metadata{}: {source}", metadata_location(.path.as_deref()))]
    Metadata {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// A file inside a directory failed. `partial` holds the nodes merged
    /// from the files before it and is only meant for diagnostics.
    #[error("directory parse stopped at {}: {error}", .file.display())]
    Directory {
        file: PathBuf,
        #[source]
        error: Box<Error>,
        partial: Program,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The syntax error at the root of this failure, if there is one.
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            Error::Syntax { error, .. } => Some(error),
            Error::Io { .. } | Error::Metadata { .. } => None,
            Error::Directory { error, .. } => error.syntax_error(),
        }
    }

    /// The file the root failure happened in, if known.
    pub fn file(&self) -> Option<&Path> {
        match self {
            Error::Syntax { file, .. } => file.as_deref(),
            Error::Io { path, .. } => Some(path.as_path()),
            Error::Metadata { path, .. } => path.as_deref(),
            Error::Directory { file, error, .. } => error.file().or(Some(file.as_path())),
        }
    }

    /// Nodes merged before a directory parse failed.
    pub fn partial_program(&self) -> Option<&Program> {
        match self {
            Error::Directory { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

fn file_prefix(file: Option<&Path>) -> String {
    match file {
        Some(path) => format!("{}: ", path.display()),
        None => String::new(),
    }
}

fn metadata_location(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
