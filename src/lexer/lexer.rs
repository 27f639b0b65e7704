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

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::error::SyntaxError;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// What the lexer does with a rule's match.
#[derive(Debug, Clone, Copy)]
enum Action {
    /// Comments and whitespace produce no token.
    Discard,
    Emit(TokenKind),
}

struct Rule {
    action: Action,
    pattern: Regex,
}

/// Token rules in priority order. The first rule matching at the cursor
/// wins, so comments shadow the `/` symbol and identifiers shadow numbers
/// that start with a dot.
fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();

    RULES.get_or_init(|| {
        [
            (Action::Discard, r"^(?://[^\n]*|/\*(?s:.*?)\*/)"),
            (Action::Discard, r"^\s+"),
            (Action::Emit(TokenKind::Identifier), r"^[A-Za-z_.][A-Za-z0-9_.]*"),
            (Action::Emit(TokenKind::String), r#"^(?:"[^"]*"|'[^']*')"#),
            (Action::Emit(TokenKind::Number), r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)"),
            (Action::Emit(TokenKind::Symbol), r"^[\[\]?:;@(),{}!~*/%+\-<>&=^|]"),
        ]
        .into_iter()
        .map(|(action, pattern)| Rule {
            action,
            pattern: Regex::new(pattern).expect("token patterns are valid regular expressions"),
        })
        .collect()
    })
}

/// Converts schema source text into tokens, one at a time.
///
/// The lexer is an iterator of `Result<Token, SyntaxError>`. It yields a
/// final `TokenKind::Eof` token and then stops. On the first byte that no
/// rule accepts it yields a single lexical error and stops.
///
/// # Example
/// ```
/// use polylang::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("this.id = id;")
///     .map(|token| token.map(|t| t.kind))
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(kinds, vec![
///     TokenKind::Identifier,
///     TokenKind::Symbol,
///     TokenKind::Identifier,
///     TokenKind::Symbol,
///     TokenKind::Eof,
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,

    /// Byte offset of the next unread character.
    current: usize,

    line: usize,
    column: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at line 1, column 1 of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            current: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Rewinds to the start of the source so the token sequence can be
    /// produced again.
    pub fn restart(&mut self) {
        self.current = 0;
        self.line = 1;
        self.column = 1;
        self.finished = false;
    }

    /// Line and column of the next unread character.
    pub fn location(&self) -> Span {
        Span::new(self.line, self.column)
    }

    /// Scans the next token, skipping any discarded input before it.
    fn scan_token(&mut self) -> Result<Token, SyntaxError> {
        loop {
            let start = self.location();
            let source = self.source;
            let rest = &source[self.current..];

            if rest.is_empty() {
                return Ok(Token::eof(start));
            }

            let matched = rules().iter().find_map(|rule| {
                rule.pattern
                    .find(rest)
                    .map(|found| (rule.action, found.as_str()))
            });

            let Some((action, text)) = matched else {
                let ch = rest.chars().next().unwrap_or('\0');
                return Err(SyntaxError::lexical(ch, start));
            };

            self.advance(text);

            if let Action::Emit(kind) = action {
                return Ok(Token::new(kind, text, start));
            }
        }
    }

    /// Moves the cursor past `text`, keeping line and column in step.
    fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.current += text.len();
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.scan_token();

        if !matches!(&result, Ok(token) if !token.is_eof()) {
            self.finished = true;
        }

        Some(result)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes a whole buffer. The returned vector always ends with an
/// `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    trace!(count = tokens.len(), "tokenized buffer");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn dotted_identifier_is_one_token() {
        let tokens = tokenize("this.balance").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "this.balance");
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn discards_line_and_block_comments() {
        assert_eq!(
            lexemes("line // comment"),
            vec![
                (TokenKind::Identifier, "line".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
        assert_eq!(
            lexemes("/* a\n multi-line\n comment */ block"),
            vec![
                (TokenKind::Identifier, "block".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn position_after_multi_line_comment() {
        let tokens = tokenize("/* a\n b */ id").unwrap();
        assert_eq!(tokens[0].lexeme, "id");
        assert_eq!(tokens[0].span, Span::new(2, 7));
    }

    #[test]
    fn location_follows_the_cursor() {
        let mut lexer = Lexer::new("ab\n  cd");
        assert_eq!(lexer.location(), Span::new(1, 1));
        lexer.next();
        assert_eq!(lexer.location(), Span::new(1, 3));
        let cd = lexer.next().unwrap().unwrap();
        assert_eq!(cd.span, Span::new(2, 3));
        assert_eq!(lexer.location(), Span::new(2, 5));
    }

    #[test]
    fn strings_keep_their_quotes() {
        assert_eq!(
            lexemes(r#"'single' "double""#),
            vec![
                (TokenKind::String, "'single'".to_string()),
                (TokenKind::String, "\"double\"".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn numbers_take_optional_sign_and_fraction() {
        assert_eq!(
            lexemes("10 -3 +4 2.5"),
            vec![
                (TokenKind::Number, "10".to_string()),
                (TokenKind::Number, "-3".to_string()),
                (TokenKind::Number, "+4".to_string()),
                (TokenKind::Number, "2.5".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn multi_character_operators_stay_split() {
        let kinds: Vec<_> = lexemes("a == b")
            .into_iter()
            .map(|(_, lexeme)| lexeme)
            .collect();
        assert_eq!(kinds, vec!["a", "=", "=", "b", ""]);
    }

    #[test]
    fn tracks_one_based_line_and_column() {
        let tokens = tokenize("collection A {\n  id: string;\n}").unwrap();
        let spans: Vec<_> = tokens.iter().map(|t| (t.span.line, t.span.column)).collect();
        assert_eq!(
            spans,
            vec![(1, 1), (1, 12), (1, 14), (2, 3), (2, 5), (2, 7), (2, 13), (3, 1), (3, 2)]
        );
    }

    #[test]
    fn unknown_character_is_a_lexical_error() {
        let error = tokenize("id: string;\n  #").unwrap_err();
        assert_eq!(error.code, "E_LEX");
        assert_eq!(error.span, Span::new(2, 3));
        assert!(error.message.contains('#'));
    }

    #[test]
    fn lexer_stops_after_error_and_can_restart() {
        let mut lexer = Lexer::new("a $");
        assert!(matches!(lexer.next(), Some(Ok(ref t)) if t.lexeme == "a"));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());

        lexer.restart();
        assert!(matches!(lexer.next(), Some(Ok(ref t)) if t.lexeme == "a"));
    }

    #[test]
    fn empty_source_yields_only_eof() {
        let tokens = tokenize("  \n\t").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, Span::new(2, 2));
    }
}
