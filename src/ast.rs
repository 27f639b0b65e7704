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


//! Abstract syntax tree for schema source files.
//!
//! Every struct-shaped node carries the `Span` of its first token. Ordered
//! collections (decorators, items, parameters, statements) keep source order.
//! Nodes are plain owned values: a strict tree with no sharing.

use serde::{Deserialize, Serialize};

use crate::span::Span;

pub mod collection;
pub mod decorator;
pub mod expr;
pub mod function;
pub mod operator;
pub mod stmt;
pub mod types;

pub use collection::{Collection, Field, Index, IndexField, Item, Order};
pub use decorator::{Decorator, DecoratorName};
pub use expr::{Call, Expression, Value, ValueKind};
pub use function::Function;
pub use operator::Operator;
pub use stmt::{Branch, Compound, For, ForInit, If, Let, SimpleStatement, SmallStatement, Statement, While};
pub use types::{BasicType, Type, TypeKind};

/// Everything parsed from one file, or merged from a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Top-level declarations in source order, file after file.
    pub nodes: Vec<Node>,
}

impl Program {
    /// Top-level collections, in order.
    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Collection(collection) => Some(collection),
            Node::Function(_) => None,
        })
    }

    /// Top-level free functions, in order.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Function(function) => Some(function),
            Node::Collection(_) => None,
        })
    }

    /// Looks a collection up by name, as a foreign-type resolver would.
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections().find(|collection| collection.name == name)
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Node {
    Collection(Collection),
    Function(Function),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Collection(collection) => &collection.name,
            Node::Function(function) => &function.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Collection(collection) => collection.span,
            Node::Function(function) => function.span,
        }
    }
}
