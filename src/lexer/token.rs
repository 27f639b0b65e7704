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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in a schema source file.
///
/// The tokenizer never classifies keywords: every word lexes as an
/// `Identifier` and the grammar decides, position by position, whether a
/// word such as `collection` or `if` acts as a keyword.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Text → Lexer → Tokens → Parser → Program
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A name, possibly dotted.
    ///
    /// Examples:
    /// - `balance`
    /// - `this.balance`
    /// - `_private`
    Identifier,

    /// A single- or double-quoted literal. The lexeme keeps its quotes.
    String,

    /// A numeric literal with an optional sign and optional decimal point.
    Number,

    /// Exactly one punctuation character. Multi-character operators are
    /// assembled later by the operator recognizer.
    Symbol,

    /// End-of-input marker, always the final token of a buffer.
    Eof,
}

/// Represents a **single lexical token** produced by the lexer.
///
/// # Example Tokens
/// ```text
/// this.id  →  { kind: Identifier, lexeme: "this.id", span: 3:9 }
/// 'abc'    →  { kind: String,     lexeme: "'abc'",   span: 3:19 }
/// =        →  { kind: Symbol,     lexeme: "=",       span: 3:17 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Position of the token's first character.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Builds the end-of-input marker at `span`.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns `true` for an identifier whose text is exactly `word`.
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.lexeme == word
    }

    /// Returns `true` for the punctuation token `ch`.
    pub fn is_symbol(&self, ch: char) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme.chars().eq(std::iter::once(ch))
    }

    /// Describes the token for "found ..." diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme, which is what users wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
