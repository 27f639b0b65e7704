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

use crate::ast::{Decorator, Field, Statement, Type};
use crate::span::Span;

/// A constructor, method or free function.
///
/// `function transfer(to: Account, amount: number): boolean { ... }`
/// and the shorthand `constructor(id: string) { ... }` build the same node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub span: Span,
    pub decorators: Vec<Decorator>,
    pub name: String,
    pub parameters: Vec<Field>,
    pub return_type: Option<Type>,
    pub statements: Vec<Statement>,
}
