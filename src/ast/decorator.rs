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

use crate::span::Span;

/// `@call(owner)` or `@public`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decorator {
    pub span: Span,
    pub name: DecoratorName,

    /// Zero or one bare identifier.
    pub arguments: Vec<String>,
}

/// Access-control and behaviour annotations understood downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecoratorName {
    Public,
    Read,
    Call,
    Delegate,
}

impl DecoratorName {
    pub const ALL: [DecoratorName; 4] = [
        DecoratorName::Public,
        DecoratorName::Read,
        DecoratorName::Call,
        DecoratorName::Delegate,
    ];

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "public" => Some(DecoratorName::Public),
            "read" => Some(DecoratorName::Read),
            "call" => Some(DecoratorName::Call),
            "delegate" => Some(DecoratorName::Delegate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DecoratorName::Public => "public",
            DecoratorName::Read => "read",
            DecoratorName::Call => "call",
            DecoratorName::Delegate => "delegate",
        }
    }
}

impl fmt::Display for DecoratorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
