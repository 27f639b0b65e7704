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

use crate::ast::{
    Branch, Compound, Expression, For, ForInit, If, Let, SimpleStatement, SmallStatement,
    Statement, While,
};
use crate::lexer::keywords;
use crate::parser::parser::{Attempt, Parser};

impl Parser {
    /// Parses one statement inside a function body.
    ///
    /// # Supported Forms
    /// - `if (cond) { ... } else { ... }`
    /// - `while (cond) { ... }`
    /// - `for (let i = 0; i < n; i += 1) { ... }`
    /// - `let x = value;`
    /// - `break;` `return value;` `throw value;`
    /// - `expression;`
    ///
    /// Compound forms are tried first. A word like `if` that fails to open
    /// a compound statement is then retried as a plain identifier.
    pub(crate) fn statement(&mut self) -> Attempt<Statement> {
        if let Ok(compound) = self.attempt(Self::compound_statement) {
            return Ok(Statement::Compound(compound));
        }

        self.attempt(Self::simple_statement).map(Statement::Simple)
    }

    fn compound_statement(&mut self) -> Attempt<Compound> {
        if let Ok(node) = self.attempt(Self::if_statement) {
            return Ok(Compound::If(node));
        }

        if let Ok(node) = self.attempt(Self::while_statement) {
            return Ok(Compound::While(node));
        }

        self.attempt(Self::for_statement).map(Compound::For)
    }

    /// `Small ';'`
    pub(crate) fn simple_statement(&mut self) -> Attempt<SimpleStatement> {
        let span = self.span();
        let small = self.small_statement()?;
        self.expect_symbol(';', "statement")?;

        Ok(SimpleStatement { span, small })
    }

    /// Ordered choice over the small statements.
    ///
    /// The first alternative that matches wins, even when the `;` that
    /// follows is then missing. `break = 1;` therefore fails at `=` instead
    /// of being read as an assignment.
    fn small_statement(&mut self) -> Attempt<SmallStatement> {
        if self.attempt(|p| p.expect_keyword(keywords::BREAK, "statement")).is_ok() {
            return Ok(SmallStatement::Break);
        }

        if let Ok(value) = self.attempt(|p| {
            p.expect_keyword(keywords::RETURN, "statement")?;
            p.expression()
        }) {
            return Ok(SmallStatement::Return(value));
        }

        if let Ok(value) = self.attempt(|p| {
            p.expect_keyword(keywords::THROW, "statement")?;
            p.expression()
        }) {
            return Ok(SmallStatement::Throw(value));
        }

        if let Ok(node) = self.attempt(Self::let_statement) {
            return Ok(SmallStatement::Let(node));
        }

        self.attempt(Self::expression).map(SmallStatement::Expression)
    }

    /// `let ident = expression`
    fn let_statement(&mut self) -> Attempt<Let> {
        let span = self.expect_keyword(keywords::LET, "let")?.span;
        let ident = self.expect_identifier("let")?.lexeme;
        self.expect_symbol('=', "let")?;
        let expression = self.expression()?;

        Ok(Let {
            span,
            ident,
            expression,
        })
    }

    /// `if (condition) branch? (else branch)?`
    ///
    /// A missing arm is `Branch::Absent`; an empty `{}` is an empty block.
    fn if_statement(&mut self) -> Attempt<If> {
        let span = self.expect_keyword(keywords::IF, "if")?.span;
        let condition = self.parenthesized("if")?;

        let then_branch = self.branch().unwrap_or_default();
        let else_branch = self
            .optional(|p| {
                p.expect_keyword(keywords::ELSE, "if")?;
                p.branch()
            })
            .unwrap_or_default();

        Ok(If {
            span,
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `'{' Statement* '}' | Simple`. Backtracks when neither matches.
    fn branch(&mut self) -> Attempt<Branch> {
        if let Ok(block) = self.attempt(|p| p.braced("block", Self::statement)) {
            return Ok(Branch::Block(block));
        }

        self.attempt(Self::simple_statement).map(Branch::Simple)
    }

    /// `while (condition) { body }`
    fn while_statement(&mut self) -> Attempt<While> {
        let span = self.expect_keyword(keywords::WHILE, "while")?.span;
        let condition = self.parenthesized("while")?;
        let body = self.braced("while", Self::statement)?;

        Ok(While {
            span,
            condition,
            body,
        })
    }

    /// `for (init; condition; post) { body }`
    ///
    /// All three header clauses are required.
    fn for_statement(&mut self) -> Attempt<For> {
        let span = self.expect_keyword(keywords::FOR, "for")?.span;
        self.expect_symbol('(', "for")?;

        let init = self.for_init()?;
        self.expect_symbol(';', "for")?;
        let condition = self.expression()?;
        self.expect_symbol(';', "for")?;
        let post = self.expression()?;

        self.expect_symbol(')', "for")?;
        let body = self.braced("for", Self::statement)?;

        Ok(For {
            span,
            init,
            condition,
            post,
            body,
        })
    }

    fn for_init(&mut self) -> Attempt<ForInit> {
        if let Ok(node) = self.attempt(Self::let_statement) {
            return Ok(ForInit::Let(node));
        }

        self.attempt(Self::expression).map(ForInit::Expression)
    }

    /// `'(' Expression ')'` around a condition.
    fn parenthesized(&mut self, rule: &'static str) -> Attempt<Expression> {
        self.expect_symbol('(', rule)?;
        let expression = self.expression()?;
        self.expect_symbol(')', rule)?;
        Ok(expression)
    }
}
