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

//! Token-level recognizers.
//!
//! Each recognizer looks at the tokens under the cursor and either claims
//! some of them, returning the decoded value and how many tokens it used,
//! or declines and claims nothing. They never move the cursor themselves;
//! `Parser::recognize` advances it only on success.

use crate::ast::{BasicType, DecoratorName, Operator, Order};
use crate::lexer::token::{Token, TokenKind};

/// A value decoded straight from the token lookahead.
pub trait Recognize: Sized {
    /// What a failed match reports as expected.
    const EXPECTED: &'static str;

    /// Returns the value and the number of tokens it spans, or `None`
    /// without consuming anything.
    fn recognize(lookahead: &[Token]) -> Option<(Self, usize)>;
}

/// Matches one identifier through a keyword lookup table.
fn word<T>(lookahead: &[Token], lookup: fn(&str) -> Option<T>) -> Option<(T, usize)> {
    let token = lookahead.first()?;
    if token.kind != TokenKind::Identifier {
        return None;
    }
    lookup(&token.lexeme).map(|value| (value, 1))
}

impl Recognize for Operator {
    const EXPECTED: &'static str = "operator";

    /// The lexer never merges punctuation, so `==` arrives as two `=`
    /// tokens. A legal single-character operator is widened to two
    /// characters when the following symbol completes a legal spelling.
    fn recognize(lookahead: &[Token]) -> Option<(Self, usize)> {
        let first = lookahead.first()?;
        if first.kind != TokenKind::Symbol {
            return None;
        }

        let single = Operator::from_symbol(&first.lexeme)?;

        let double = lookahead
            .get(1)
            .filter(|next| next.kind == TokenKind::Symbol)
            .and_then(|next| Operator::from_symbol(&format!("{}{}", first.lexeme, next.lexeme)));

        match double {
            Some(op) => Some((op, 2)),
            None => Some((single, 1)),
        }
    }
}

impl Recognize for DecoratorName {
    const EXPECTED: &'static str = "decorator name (public, read, call or delegate)";

    fn recognize(lookahead: &[Token]) -> Option<(Self, usize)> {
        word(lookahead, DecoratorName::from_keyword)
    }
}

impl Recognize for Order {
    const EXPECTED: &'static str = "sort order ('asc' or 'desc')";

    fn recognize(lookahead: &[Token]) -> Option<(Self, usize)> {
        word(lookahead, Order::from_keyword)
    }
}

impl Recognize for BasicType {
    const EXPECTED: &'static str = "basic type";

    fn recognize(lookahead: &[Token]) -> Option<(Self, usize)> {
        word(lookahead, BasicType::from_keyword)
    }
}
