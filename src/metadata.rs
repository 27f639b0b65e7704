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

//! Compiled schema metadata.
//!
//! Besides source text, schemas travel as JSON metadata: an array of nodes,
//! each object tagged by a `kind` field. This module models that document
//! and decodes it with `serde_json`.
//!
//! ```json
//! [{
//!   "kind": "collection",
//!   "namespace": { "kind": "namespace", "value": "demo" },
//!   "name": "Account",
//!   "attributes": [
//!     { "kind": "property", "name": "id", "required": true,
//!       "type": { "kind": "primitive", "value": "string" }, "directives": [] },
//!     { "kind": "index", "fields": [{ "direction": "asc", "fieldPath": ["id"] }] }
//!   ]
//! }]
//! ```
//!
//! Kinds this crate does not model decode as `Unknown` instead of failing;
//! their content is dropped.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ast::Order;
use crate::error::{Error, Result};

/// A whole metadata document.
pub type Root = Vec<Node>;

/// Decodes a metadata document from JSON text.
pub fn parse_metadata(json: &str) -> Result<Root> {
    serde_json::from_str(json).map_err(|source| Error::Metadata { path: None, source })
}

/// Reads and decodes a metadata document.
pub fn parse_metadata_file(path: impl AsRef<Path>) -> Result<Root> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    serde_json::from_str(&json).map_err(|source| Error::Metadata {
        path: Some(path.to_path_buf()),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Collection(Collection),
    #[serde(other)]
    Unknown,
}

impl Node {
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Node::Collection(collection) => Some(collection),
            Node::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub namespace: Namespace,
    pub name: String,
    pub attributes: Vec<CollectionAttribute>,
}

/// `{ "kind": "namespace", "value": "..." }`. Any other kind is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaggedNamespace", into = "TaggedNamespace")]
pub struct Namespace {
    pub value: String,
}

#[derive(Serialize, Deserialize)]
struct TaggedNamespace {
    kind: String,
    value: String,
}

const NAMESPACE_KIND: &str = "namespace";

impl TryFrom<TaggedNamespace> for Namespace {
    type Error = String;

    fn try_from(tagged: TaggedNamespace) -> std::result::Result<Self, Self::Error> {
        if tagged.kind != NAMESPACE_KIND {
            return Err(format!("invalid '{}' kind type", tagged.kind));
        }
        Ok(Namespace { value: tagged.value })
    }
}

impl From<Namespace> for TaggedNamespace {
    fn from(namespace: Namespace) -> Self {
        TaggedNamespace {
            kind: NAMESPACE_KIND.to_string(),
            value: namespace.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CollectionAttribute {
    Property(Property),
    Method(Method),
    Directive(Directive),
    Index(Index),
    #[serde(other)]
    Unknown,
}

/// A stored field of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<DirectiveArgument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DirectiveArgument {
    /// `@call(owner)` points at the `owner` field.
    FieldReference { path: Vec<String> },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    #[serde(default)]
    pub fields: Vec<IndexField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexField {
    pub direction: Order,
    pub field_path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<MethodAttribute>,
    /// Body as source text.
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MethodAttribute {
    Directive(Directive),
    Parameter(Parameter),
    ReturnValue(ReturnValue),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnValue {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// Field type as compiled metadata spells it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Type {
    Primitive { value: PrimitiveType },
    Array { value: Box<Type> },
    Map { key: Box<Type>, value: Box<Type> },
    Object { fields: Vec<ObjectField> },
    Record,
    ForeignRecord { collection: String },
    PublicKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    Number,
    Boolean,
    Bytes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_collection_node() {
        let root = parse_metadata(r#"[{"kind":"collection","value":{}}]"#).unwrap();
        assert_eq!(root, vec![Node::Collection(Collection::default())]);
    }

    #[test]
    fn unknown_kinds_are_kept_as_unknown() {
        let root = parse_metadata(r#"[{"kind":"enum","name":"x"}]"#).unwrap();
        assert_eq!(root, vec![Node::Unknown]);
        assert!(root[0].as_collection().is_none());
    }

    #[test]
    fn namespace_checks_its_kind() {
        let ns: Namespace = decode(json!({"kind": "namespace", "value": "hello"}));
        assert_eq!(ns.value, "hello");
        assert_eq!(
            serde_json::to_string(&ns).unwrap(),
            r#"{"kind":"namespace","value":"hello"}"#
        );

        let error = serde_json::from_value::<Namespace>(json!({"kind": "other", "value": "x"}))
            .unwrap_err();
        assert!(error.to_string().contains("invalid 'other' kind type"));
    }

    #[test]
    fn property_attribute() {
        let attribute: CollectionAttribute = decode(json!({
            "kind": "property",
            "name": "test",
            "type": {"kind": "primitive", "value": "string"},
            "directives": [],
            "required": true
        }));
        assert_eq!(
            attribute,
            CollectionAttribute::Property(Property {
                name: "test".into(),
                ty: Type::Primitive { value: PrimitiveType::String },
                directives: Vec::new(),
                required: true,
            })
        );
    }

    #[test]
    fn directive_with_field_reference() {
        let attribute: MethodAttribute = decode(json!({
            "kind": "directive",
            "name": "call",
            "arguments": {"kind": "fieldreference", "path": ["owner"]}
        }));
        match attribute {
            MethodAttribute::Directive(directive) => {
                assert_eq!(directive.name, "call");
                assert_eq!(
                    directive.arguments,
                    Some(DirectiveArgument::FieldReference { path: vec!["owner".into()] })
                );
            }
            other => panic!("expected directive, got {:?}", other),
        }
    }

    #[test]
    fn index_attribute() {
        let attribute: CollectionAttribute = decode(json!({
            "kind": "index",
            "fields": [{"direction": "desc", "fieldPath": ["firstName", "lastName"]}]
        }));
        match attribute {
            CollectionAttribute::Index(index) => {
                assert_eq!(index.fields[0].direction, Order::Desc);
                assert_eq!(index.fields[0].field_path, vec!["firstName", "lastName"]);
            }
            other => panic!("expected index, got {:?}", other),
        }
    }

    #[test]
    fn method_attributes() {
        let method: CollectionAttribute = decode(json!({
            "kind": "method",
            "name": "hello",
            "attributes": [
                {"kind": "parameter", "name": "id", "type": {"kind": "primitive", "value": "string"}, "required": true},
                {"kind": "returnvalue", "name": "id", "type": {"kind": "primitive", "value": "number"}}
            ],
            "code": "if(this.id!=1970)"
        }));
        match method {
            CollectionAttribute::Method(method) => {
                assert_eq!(method.code, "if(this.id!=1970)");
                assert!(matches!(method.attributes[0], MethodAttribute::Parameter(ref p) if p.required));
                assert!(matches!(method.attributes[1], MethodAttribute::ReturnValue(_)));
            }
            other => panic!("expected method, got {:?}", other),
        }
    }

    #[test]
    fn nested_types() {
        let ty: Type = decode(json!({
            "kind": "map",
            "key": {"kind": "primitive", "value": "string"},
            "value": {"kind": "array", "value": {"kind": "foreignrecord", "collection": "Account"}}
        }));
        assert_eq!(
            ty,
            Type::Map {
                key: Box::new(Type::Primitive { value: PrimitiveType::String }),
                value: Box::new(Type::Array {
                    value: Box::new(Type::ForeignRecord { collection: "Account".into() })
                }),
            }
        );

        let object: Type = decode(json!({
            "kind": "object",
            "fields": [{"name": "a", "type": {"kind": "record"}, "required": false}]
        }));
        assert!(matches!(object, Type::Object { ref fields } if fields[0].ty == Type::Record));

        assert_eq!(decode::<Type>(json!({"kind": "publickey"})), Type::PublicKey);
    }

    #[test]
    fn malformed_document_is_a_metadata_error() {
        let error = parse_metadata("{").unwrap_err();
        assert!(matches!(error, Error::Metadata { path: None, .. }));
    }
}
