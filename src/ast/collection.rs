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

use crate::ast::{Decorator, Function, Type};
use crate::span::Span;

/// A named record type: `collection Account { ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub span: Span,
    pub decorators: Vec<Decorator>,
    pub name: String,
    pub items: Vec<Item>,
}

impl Collection {
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.items.iter().filter_map(|item| match item {
            Item::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(function) => Some(function),
            _ => None,
        })
    }

    pub fn indexes(&self) -> impl Iterator<Item = &Index> {
        self.items.iter().filter_map(|item| match item {
            Item::Index(index) => Some(index),
            _ => None,
        })
    }
}

/// One member of a collection body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Item {
    Field(Field),
    Function(Function),
    Index(Index),
}

/// `@read name?: string`
///
/// Also used for function parameters and object-type members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub span: Span,
    pub decorators: Vec<Decorator>,
    pub name: String,

    /// Set by a `?` after the name.
    pub optional: bool,

    #[serde(rename = "type")]
    pub ty: Type,
}

/// `@index(a, [b, desc])` or `@unique(a)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub span: Span,
    pub unique: bool,
    pub fields: Vec<IndexField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexField {
    pub span: Span,
    pub name: String,
    pub order: Order,
}

/// Sort direction of an index field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub const ALL: [Order; 2] = [Order::Asc, Order::Desc];

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "asc" => Some(Order::Asc),
            "desc" => Some(Order::Desc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
