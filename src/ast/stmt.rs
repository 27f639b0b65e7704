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

use crate::ast::Expression;
use crate::span::Span;

/// A statement inside a function body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Statement {
    Compound(Compound),
    Simple(SimpleStatement),
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Compound(Compound::If(node)) => node.span,
            Statement::Compound(Compound::While(node)) => node.span,
            Statement::Compound(Compound::For(node)) => node.span,
            Statement::Simple(node) => node.span,
        }
    }
}

/// Block-carrying control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Compound {
    If(If),
    While(While),
    For(For),
}

/// A small statement terminated by `;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleStatement {
    pub span: Span,
    pub small: SmallStatement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SmallStatement {
    Break,
    Return(Expression),
    Throw(Expression),
    Let(Let),
    Expression(Expression),
}

/// `let ident = expression`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Let {
    pub span: Span,
    pub ident: String,
    pub expression: Expression,
}

/// `if (condition) then else otherwise`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct If {
    pub span: Span,
    pub condition: Expression,
    pub then_branch: Branch,
    pub else_branch: Branch,
}

/// Body of an `if` or `else` arm.
///
/// `Block(vec![])` is written `{}` and differs from `Absent`, where the
/// arm does not appear in the source at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Branch {
    Block(Vec<Statement>),
    Simple(SimpleStatement),
    #[default]
    Absent,
}

impl Branch {
    pub fn is_absent(&self) -> bool {
        matches!(self, Branch::Absent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct While {
    pub span: Span,
    pub condition: Expression,
    pub body: Vec<Statement>,
}

/// `for (init; condition; post) { body }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct For {
    pub span: Span,
    pub init: ForInit,
    pub condition: Expression,
    pub post: Expression,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForInit {
    Let(Let),
    Expression(Expression),
}
