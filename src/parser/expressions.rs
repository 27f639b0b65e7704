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

use crate::ast::{Call, Expression, Operator, Value, ValueKind};
use crate::lexer::{keywords, TokenKind};
use crate::parser::parser::{Attempt, Backtrack, Parser};

impl Parser {
    /// Parses a flat expression: `Value (Operator Value)?`.
    ///
    /// There is no precedence and no chaining. After the optional operator
    /// and right operand the expression ends, so `a + b + c` leaves the
    /// second `+` for the caller to reject.
    pub(crate) fn expression(&mut self) -> Attempt<Expression> {
        let left = self.value()?;

        let binary = self.optional(|p| {
            let operator = p.recognize::<Operator>("expression")?;
            let right = p.value()?;
            Ok((operator, right))
        });

        Ok(Expression {
            span: left.span,
            left,
            binary,
        })
    }

    /// `Number | String | Boolean | Call | Ident | '(' Expression ')'`
    ///
    /// `true` and `false` are booleans because they are tried before
    /// identifiers. A call is tried before a plain identifier so that
    /// `selfdestruct()` keeps its parentheses.
    pub(crate) fn value(&mut self) -> Attempt<Value> {
        let span = self.span();

        let kind = if let Ok(kind) = self.attempt(Self::number) {
            kind
        } else if let Ok(token) =
            self.attempt(|p| p.expect_kind(TokenKind::String, "value", "string"))
        {
            ValueKind::String(token.lexeme)
        } else if let Ok(kind) = self.attempt(Self::boolean) {
            kind
        } else if let Ok(call) = self.attempt(Self::call) {
            ValueKind::Call(call)
        } else if let Ok(token) = self.attempt(|p| p.expect_identifier("value")) {
            ValueKind::Ident(token.lexeme)
        } else {
            let inner = self.attempt(|p| {
                p.expect_symbol('(', "value")?;
                let inner = p.expression()?;
                p.expect_symbol(')', "value")?;
                Ok(inner)
            })?;
            ValueKind::Sub(Box::new(inner))
        };

        Ok(Value::new(span, kind))
    }

    /// Decodes a number token as a 64-bit signed integer.
    ///
    /// Fractions and out-of-range literals are literal failures and leave
    /// the token unconsumed.
    fn number(&mut self) -> Attempt<ValueKind> {
        let token = self.peek();
        if token.kind != TokenKind::Number {
            self.fail("value", "number");
            return Err(Backtrack);
        }

        match token.lexeme.parse::<i64>() {
            Ok(number) => {
                self.advance();
                Ok(ValueKind::Number(number))
            }
            Err(_) => {
                self.fail_literal("value", "integer literal");
                Err(Backtrack)
            }
        }
    }

    fn boolean(&mut self) -> Attempt<ValueKind> {
        let keyword = self.expect_any_keyword(&[keywords::TRUE, keywords::FALSE], "value")?;
        Ok(ValueKind::Boolean(keyword == keywords::TRUE))
    }

    /// `Ident '(' (Expression (',' Expression)*)? ')'`
    fn call(&mut self) -> Attempt<Call> {
        let callee = self.expect_identifier("call")?.lexeme;
        self.expect_symbol('(', "call")?;
        let arguments = self.comma_separated("call", Self::expression);
        self.expect_symbol(')', "call")?;

        Ok(Call { callee, arguments })
    }
}
