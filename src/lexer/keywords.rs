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

//! Contextual keywords.
//!
//! None of these words is reserved. The lexer emits them as ordinary
//! identifiers and the grammar only treats them as keywords at the
//! positions listed beside each constant. Anywhere else they are plain
//! names, so `index: number` or `let map = 1` are legal.

/// Opens a collection declaration.
pub const COLLECTION: &str = "collection";
/// Optional prefix of a function declaration.
pub const FUNCTION: &str = "function";
/// `@index(...)` item.
pub const INDEX: &str = "index";
/// `@unique(...)` item.
pub const UNIQUE: &str = "unique";
/// `map<K, V>` type.
pub const MAP: &str = "map";
pub const IF: &str = "if";
pub const ELSE: &str = "else";
pub const WHILE: &str = "while";
pub const FOR: &str = "for";
pub const LET: &str = "let";
pub const BREAK: &str = "break";
pub const RETURN: &str = "return";
pub const THROW: &str = "throw";
pub const TRUE: &str = "true";
pub const FALSE: &str = "false";

/// Every word the grammar may treat as a keyword somewhere, including the
/// basic-type names, decorator names and sort orders.
pub const CONTEXTUAL_KEYWORDS: &[&str] = &[
    COLLECTION, FUNCTION, INDEX, UNIQUE, MAP, IF, ELSE, WHILE, FOR, LET, BREAK, RETURN, THROW,
    TRUE, FALSE, "string", "number", "boolean", "record", "public", "read", "call", "delegate",
    "asc", "desc",
];

/// Determines whether `word` acts as a keyword at some grammar position.
///
/// Used by diagnostics to explain errors at words a reader may take for
/// reserved ones.
pub fn is_contextual_keyword(word: &str) -> bool {
    CONTEXTUAL_KEYWORDS.contains(&word)
}
