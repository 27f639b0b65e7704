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
use std::fmt;

/// Every operator the procedural sub-language knows.
///
/// The lexer only produces single punctuation characters, so two-character
/// spellings are assembled by the operator recognizer from two adjacent
/// symbol tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /* ----------------------------- */
    /* UNARY                         */
    /* ----------------------------- */
    Not,
    BitNot,

    /* ----------------------------- */
    /* ARITHMETIC                    */
    /* ----------------------------- */
    Exponent,
    Multiply,
    Divide,
    Modulo,
    Add,
    Subtract,

    /* ----------------------------- */
    /* BITWISE                       */
    /* ----------------------------- */
    ShiftLeft,
    ShiftRight,
    BitAnd,
    BitXor,
    BitOr,

    /* ----------------------------- */
    /* COMPARISON                    */
    /* ----------------------------- */
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Equal,
    NotEqual,

    /* ----------------------------- */
    /* LOGICAL                       */
    /* ----------------------------- */
    And,
    Or,

    /* ----------------------------- */
    /* ASSIGNMENT                    */
    /* ----------------------------- */
    AssignSub,
    AssignAdd,
    Assign,
}

impl Operator {
    pub const ALL: [Operator; 24] = [
        Operator::Not,
        Operator::BitNot,
        Operator::Exponent,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulo,
        Operator::Add,
        Operator::Subtract,
        Operator::ShiftLeft,
        Operator::ShiftRight,
        Operator::BitAnd,
        Operator::BitXor,
        Operator::BitOr,
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::LessThanOrEqual,
        Operator::GreaterThanOrEqual,
        Operator::Equal,
        Operator::NotEqual,
        Operator::And,
        Operator::Or,
        Operator::AssignSub,
        Operator::AssignAdd,
        Operator::Assign,
    ];

    /// Looks an operator up by its exact spelling.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == symbol)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::BitNot => "~",
            Operator::Exponent => "**",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::BitAnd => "&",
            Operator::BitXor => "^",
            Operator::BitOr => "|",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::AssignSub => "-=",
            Operator::AssignAdd => "+=",
            Operator::Assign => "=",
        }
    }

    /// Number of punctuation tokens the spelling spans.
    pub fn width(self) -> usize {
        self.as_str().len()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
