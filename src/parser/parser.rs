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

use tracing::trace;

use crate::ast::Program;
use crate::error::SyntaxError;
use crate::lexer::{tokenize, Token};
use crate::span::Span;

/// Marker returned when a grammar alternative does not match.
///
/// It carries no data: what was expected is recorded on the parser as the
/// furthest failure, and the caller either tries the next alternative or
/// gives up and asks the parser for its `SyntaxError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backtrack;

/// Result of one grammar rule.
pub type Attempt<T> = Result<T, Backtrack>;

/// Expectations recorded at the furthest token any alternative reached.
#[derive(Debug, Clone)]
struct Failure {
    position: usize,
    code: &'static str,
    rule: &'static str,
    expected: Vec<String>,
}

/// Rules whose failures only mean "this optional shape is not here":
/// the `(` that would turn an identifier into a call, the operator after
/// a value, the `[]` after a basic type.
const LOOKAHEAD_RULES: &[&str] = &["call", "expression", "array suffix"];

fn is_lookahead(rule: &str) -> bool {
    LOOKAHEAD_RULES.contains(&rule)
}

/// The backtracking recursive-descent parser.
///
/// This structure maintains:
/// - The full token buffer of one source file, ending in `Eof`
/// - The current cursor position into that buffer
/// - The furthest failure seen, for the final error message
///
/// Grammar rules live in `declarations`, `statements` and `expressions`
/// as additional `impl Parser` blocks. Every alternation tries its rules in
/// declared order and resets the cursor before trying the next one, so
/// rule order decides what wins.
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub(crate) tokens: Vec<Token>,

    /// Current cursor position within the token buffer.
    pub(crate) current: usize,

    furthest: Option<Failure>,
}

/// Parses a token buffer into a `Program`.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → Program
/// ```
///
/// # Example
/// ```
/// use polylang::lexer::tokenize;
/// use polylang::parser::parse;
///
/// let tokens = tokenize("collection Account { id: string; }").unwrap();
/// let program = parse(tokens).unwrap();
/// assert_eq!(program.nodes.len(), 1);
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Program, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Tokenizes and parses one in-memory buffer.
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    parse(tokenize(source)?)
}

impl Parser {
    /// Wraps a token buffer. An `Eof` token is appended when missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let span = tokens.last().map(|t| t.span).unwrap_or_default();
            tokens.push(Token::eof(span));
        }

        Self {
            tokens,
            current: 0,
            furthest: None,
        }
    }

    /// Parses the entire token buffer.
    ///
    /// # Behavior
    /// - Top-level nodes are parsed strictly left to right.
    /// - The whole buffer must be consumed.
    /// - The first unrecoverable failure ends parsing with one error.
    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        let nodes = self.repeat(Self::node);

        if !self.is_at_end() {
            // Nothing got past the first unparsed token, so the alternatives
            // recorded there say less than "a declaration was expected".
            if self.furthest.as_ref().map_or(true, |f| f.position <= self.current) {
                self.furthest = None;
                self.fail("program", "collection or function declaration");
            }
            return Err(self.syntax_error());
        }

        trace!(nodes = nodes.len(), tokens = self.tokens.len(), "parsed buffer");
        Ok(Program { nodes })
    }

    /// Records that `rule` expected `expected` at the cursor.
    ///
    /// Only the furthest position is kept. Expectations at the same
    /// position are merged; the rule that failed there first is kept,
    /// unless it was only looking ahead and a later rule needed the token.
    pub(crate) fn fail(&mut self, rule: &'static str, expected: impl Into<String>) {
        self.fail_with(SyntaxError::SYNTAX, rule, expected.into());
    }

    /// Like `fail`, for a token of the right kind whose text is unusable.
    pub(crate) fn fail_literal(&mut self, rule: &'static str, expected: impl Into<String>) {
        self.fail_with(SyntaxError::LITERAL, rule, expected.into());
    }

    fn fail_with(&mut self, code: &'static str, rule: &'static str, expected: String) {
        let position = self.current;

        match &mut self.furthest {
            Some(failure) if failure.position > position => {}
            Some(failure) if failure.position == position => {
                if code == SyntaxError::LITERAL {
                    failure.code = code;
                }
                if is_lookahead(failure.rule) && !is_lookahead(rule) {
                    failure.rule = rule;
                }
                if !failure.expected.contains(&expected) {
                    failure.expected.push(expected);
                }
            }
            _ => {
                self.furthest = Some(Failure {
                    position,
                    code,
                    rule,
                    expected: vec![expected],
                });
            }
        }
    }

    /// Builds the error for the furthest failure recorded so far.
    pub(crate) fn syntax_error(&self) -> SyntaxError {
        match &self.furthest {
            Some(failure) => {
                let found = &self.tokens[failure.position.min(self.tokens.len() - 1)];
                SyntaxError::unexpected(failure.code, failure.rule, &failure.expected, found)
            }
            None => SyntaxError::new(SyntaxError::SYNTAX, "unexpected input", self.span()),
        }
    }

    /// Span of the token under the cursor.
    pub(crate) fn span(&self) -> Span {
        self.peek().span
    }
}
