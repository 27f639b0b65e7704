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

use crate::ast::Field;
use crate::span::Span;

/// A type annotation on a field, parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    pub span: Span,
    pub kind: TypeKind,
}

/// The four shapes a type can take. The grammar tries them in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    /// `string`, `number[]`
    Basic { basic: BasicType, array: bool },

    /// `map<string, Account>`
    Map { key: BasicType, value: Box<Type> },

    /// `{ name: string; website?: string; }`
    Object(Vec<Field>),

    /// A reference to a collection declared elsewhere. Resolved downstream.
    Foreign(String),
}

impl Type {
    pub fn new(span: Span, kind: TypeKind) -> Self {
        Self { span, kind }
    }

    pub fn basic(span: Span, basic: BasicType) -> Self {
        Self::new(span, TypeKind::Basic { basic, array: false })
    }

    /// The referenced collection name for a foreign type.
    pub fn foreign_name(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Foreign(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Basic { basic, array } => {
                write!(f, "{}", basic)?;
                if *array {
                    f.write_str("[]")?;
                }
                Ok(())
            }
            TypeKind::Map { key, value } => write!(f, "map<{}, {}>", key, value),
            TypeKind::Object(fields) => {
                f.write_str("{ ")?;
                for field in fields {
                    let optional = if field.optional { "?" } else { "" };
                    write!(f, "{}{}: {}; ", field.name, optional, field.ty)?;
                }
                f.write_str("}")
            }
            TypeKind::Foreign(name) => f.write_str(name),
        }
    }
}

/// Primitive field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BasicType {
    String,
    Number,
    Boolean,
    Record,
}

impl BasicType {
    pub const ALL: [BasicType; 4] = [
        BasicType::String,
        BasicType::Number,
        BasicType::Boolean,
        BasicType::Record,
    ];

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "string" => Some(BasicType::String),
            "number" => Some(BasicType::Number),
            "boolean" => Some(BasicType::Boolean),
            "record" => Some(BasicType::Record),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BasicType::String => "string",
            BasicType::Number => "number",
            BasicType::Boolean => "boolean",
            BasicType::Record => "record",
        }
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(column: usize) -> Span {
        Span::new(1, column)
    }

    #[test]
    fn displays_as_source_text() {
        let array = Type::new(at(1), TypeKind::Basic { basic: BasicType::Number, array: true });
        assert_eq!(array.to_string(), "number[]");

        let map = Type::new(
            at(1),
            TypeKind::Map {
                key: BasicType::String,
                value: Box::new(Type::new(at(13), TypeKind::Foreign("Account".into()))),
            },
        );
        assert_eq!(map.to_string(), "map<string, Account>");

        let object = Type::new(
            at(1),
            TypeKind::Object(vec![Field {
                span: at(3),
                decorators: Vec::new(),
                name: "site".into(),
                optional: true,
                ty: Type::basic(at(10), BasicType::String),
            }]),
        );
        assert_eq!(object.to_string(), "{ site?: string; }");
    }
}
