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

use serde::{Deserialize, Serialize};

use crate::ast::Operator;
use crate::span::Span;

/// A flat expression: one value, optionally followed by an operator and a
/// second value.
///
/// There is no precedence climbing. `a + b * c` does not parse; nesting is
/// written with parentheses, `a + (b * c)`, which produces a
/// `ValueKind::Sub` on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expression {
    pub span: Span,
    pub left: Value,

    /// Operator and right operand. Present together or not at all.
    pub binary: Option<(Operator, Value)>,
}

impl Expression {
    /// An expression made of a single value.
    pub fn unary(left: Value) -> Self {
        Self {
            span: left.span,
            left,
            binary: None,
        }
    }

    pub fn binary(left: Value, operator: Operator, right: Value) -> Self {
        Self {
            span: left.span,
            left,
            binary: Some((operator, right)),
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        self.binary.as_ref().map(|(operator, _)| *operator)
    }

    pub fn right(&self) -> Option<&Value> {
        self.binary.as_ref().map(|(_, right)| right)
    }
}

/// An operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    pub span: Span,
    pub kind: ValueKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    Number(i64),

    /// Raw token text, quotes included: `'abc'` stays `'abc'`.
    String(String),

    Boolean(bool),

    /// `selfdestruct()`, `transfer(to, amount)`
    Call(Call),

    /// Possibly dotted path: `this.balance`.
    Ident(String),

    /// Parenthesised sub-expression.
    Sub(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub callee: String,
    pub arguments: Vec<Expression>,
}

impl Value {
    pub fn new(span: Span, kind: ValueKind) -> Self {
        Self { span, kind }
    }

    pub fn ident(span: Span, name: impl Into<String>) -> Self {
        Self::new(span, ValueKind::Ident(name.into()))
    }

    pub fn number(span: Span, value: i64) -> Self {
        Self::new(span, ValueKind::Number(value))
    }

    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}
