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

use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{Attempt, Backtrack, Parser};
use crate::parser::recognize::Recognize;

impl Parser {
    /// Returns the token under the cursor. The buffer always ends in `Eof`,
    /// so there is always one.
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Returns true if the cursor is on the `Eof` token.
    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Advances one token forward and returns it. Never moves past `Eof`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.current += 1;
        }
        token
    }

    /// Checks if the current token is the punctuation `ch`.
    pub(crate) fn check_symbol(&self, ch: char) -> bool {
        self.peek().is_symbol(ch)
    }

    /// Matches a symbol and consumes it. Records nothing on a miss.
    pub(crate) fn match_symbol(&mut self, ch: char) -> bool {
        if self.check_symbol(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required symbol.
    pub(crate) fn expect_symbol(&mut self, ch: char, rule: &'static str) -> Attempt<Token> {
        if self.check_symbol(ch) {
            Ok(self.advance())
        } else {
            self.fail(rule, format!("'{}'", ch));
            Err(Backtrack)
        }
    }

    /// Consumes an identifier spelled exactly `keyword`.
    ///
    /// Keywords are contextual: this is the only place a word is treated
    /// as one.
    pub(crate) fn expect_keyword(&mut self, keyword: &str, rule: &'static str) -> Attempt<Token> {
        if self.peek().is_word(keyword) {
            Ok(self.advance())
        } else {
            self.fail(rule, format!("'{}'", keyword));
            Err(Backtrack)
        }
    }

    /// Consumes one of several contextual keywords and returns its spelling.
    pub(crate) fn expect_any_keyword(
        &mut self,
        keywords: &[&'static str],
        rule: &'static str,
    ) -> Attempt<&'static str> {
        match keywords.iter().copied().find(|kw| self.peek().is_word(kw)) {
            Some(keyword) => {
                self.advance();
                Ok(keyword)
            }
            None => {
                for keyword in keywords {
                    self.fail(rule, format!("'{}'", keyword));
                }
                Err(Backtrack)
            }
        }
    }

    /// Consumes and returns a token of `kind`.
    pub(crate) fn expect_kind(
        &mut self,
        kind: TokenKind,
        rule: &'static str,
        label: &'static str,
    ) -> Attempt<Token> {
        if self.peek().kind == kind {
            Ok(self.advance())
        } else {
            self.fail(rule, label);
            Err(Backtrack)
        }
    }

    /// Consumes and returns an identifier token.
    pub(crate) fn expect_identifier(&mut self, rule: &'static str) -> Attempt<Token> {
        self.expect_kind(TokenKind::Identifier, rule, "identifier")
    }

    /// Runs a recognizer over the lookahead and consumes what it claims.
    pub(crate) fn recognize<R: Recognize>(&mut self, rule: &'static str) -> Attempt<R> {
        match R::recognize(&self.tokens[self.current..]) {
            Some((value, consumed)) => {
                self.current += consumed;
                Ok(value)
            }
            None => {
                self.fail(rule, R::EXPECTED);
                Err(Backtrack)
            }
        }
    }

    /// Runs one alternative. On failure the cursor goes back to where it
    /// was, so the next alternative starts from the same token.
    pub(crate) fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Attempt<T>) -> Attempt<T> {
        let checkpoint = self.current;
        let result = rule(self);
        if result.is_err() {
            self.current = checkpoint;
        }
        result
    }

    /// `rule?`
    pub(crate) fn optional<T>(&mut self, rule: impl FnOnce(&mut Self) -> Attempt<T>) -> Option<T> {
        self.attempt(rule).ok()
    }

    /// `rule*`. Stops at the first failure or at a match that consumed
    /// nothing.
    pub(crate) fn repeat<T>(&mut self, mut rule: impl FnMut(&mut Self) -> Attempt<T>) -> Vec<T> {
        let mut items = Vec::new();

        loop {
            let before = self.current;
            match self.attempt(&mut rule) {
                Ok(item) => items.push(item),
                Err(Backtrack) => break,
            }
            if self.current == before {
                break;
            }
        }

        items
    }

    /// `(rule (',' rule)*)?`
    pub(crate) fn comma_separated<T>(
        &mut self,
        rule_name: &'static str,
        mut rule: impl FnMut(&mut Self) -> Attempt<T>,
    ) -> Vec<T> {
        let mut items = Vec::new();

        match self.attempt(&mut rule) {
            Ok(first) => items.push(first),
            Err(Backtrack) => return items,
        }

        while let Ok(next) = self.attempt(|p| {
            p.expect_symbol(',', rule_name)?;
            rule(p)
        }) {
            items.push(next);
        }

        items
    }

    /// `'{' rule* '}'`
    pub(crate) fn braced<T>(
        &mut self,
        rule_name: &'static str,
        rule: impl FnMut(&mut Self) -> Attempt<T>,
    ) -> Attempt<Vec<T>> {
        self.expect_symbol('{', rule_name)?;
        let items = self.repeat(rule);
        self.expect_symbol('}', rule_name)?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokenize;
    use crate::parser::parser::{Backtrack, Parser};

    fn parser(source: &str) -> Parser {
        Parser::new(tokenize(source).unwrap())
    }

    #[test]
    fn attempt_restores_cursor_on_failure() {
        let mut p = parser("a b c");
        let result: Result<(), _> = p.attempt(|p| {
            p.expect_identifier("test")?;
            p.expect_identifier("test")?;
            p.expect_symbol(';', "test")?;
            Ok(())
        });
        assert_eq!(result, Err(Backtrack));
        assert_eq!(p.current, 0);
    }

    #[test]
    fn keywords_are_plain_identifiers_with_matching_text() {
        let mut p = parser("collection");
        assert!(p.expect_keyword("function", "test").is_err());
        assert!(p.expect_keyword("collection", "test").is_ok());
        assert!(p.is_at_end());
    }

    #[test]
    fn comma_separated_leaves_trailing_comma() {
        let mut p = parser("a, b, c,)");
        let names = p.comma_separated("test", |p| p.expect_identifier("test").map(|t| t.lexeme));
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(p.check_symbol(','));
    }

    #[test]
    fn advance_stops_at_eof() {
        let mut p = parser("x");
        p.advance();
        p.advance();
        assert!(p.is_at_end());
        assert_eq!(p.current, 1);
    }
}
