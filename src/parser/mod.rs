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

/// Core parser orchestration:
/// - Owns the `Parser` struct and its backtracking cursor
/// - Records the furthest failure for error reporting
/// - Exposes the `parse(tokens)` and `parse_source(text)` entry points
pub mod parser;

/// Shared parser helpers:
/// - token expectations (symbols, contextual keywords, identifiers)
/// - ordered-choice combinators (`attempt`, `optional`, `repeat`)
pub mod helpers;

/// Token-level recognizers for operators, decorator names, sort orders
/// and basic types.
pub mod recognize;

/// Declaration-level parsing:
/// - program, collection, item, field, index, function, decorator, type
pub mod declarations;

/// Statement-level parsing:
/// - if / while / for / let / break / return / throw
/// - brace blocks and single-statement branches
pub mod statements;

/// Expression-level parsing:
/// - flat `value (operator value)?` expressions
/// - values: number, string, boolean, call, identifier, sub-expression
pub mod expressions;

pub use parser::{parse, parse_source, Parser};
pub use recognize::Recognize;
