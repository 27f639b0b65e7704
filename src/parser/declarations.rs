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

//! Declaration grammar: nodes, collections, items, fields, indexes,
//! functions, decorators and types.
//!
//! ```text
//! Node       := Collection | Function
//! Collection := Decorator* 'collection' Ident '{' Item* '}'
//! Item       := Field ';' | Function | Index ';'
//! Field      := Decorator* Ident '?'? ':' Type
//! Index      := '@' ('unique' | 'index') '(' (IndexField (',' IndexField)*)? ')'
//! IndexField := '[' Ident ',' Order ']' | Ident
//! Function   := Decorator* ('function' Ident | Ident) '(' Params ')' (':' Type)? '{' Statement* '}'
//! Decorator  := '@' DecoratorName ('(' Ident ')')?
//! Type       := BasicType ('[' ']')? | 'map' '<' BasicType ',' Type '>' | '{' (Field ';')* '}' | Ident
//! ```

use crate::ast::{
    BasicType, Collection, Decorator, DecoratorName, Field, Function, Index, IndexField, Item,
    Node, Order, Type, TypeKind,
};
use crate::lexer::keywords;
use crate::parser::parser::{Attempt, Parser};

impl Parser {
    /// `Node := Collection | Function`
    pub(crate) fn node(&mut self) -> Attempt<Node> {
        if let Ok(collection) = self.attempt(Self::collection) {
            return Ok(Node::Collection(collection));
        }

        self.attempt(Self::function).map(Node::Function)
    }

    /// Parses a full `collection` declaration.
    ///
    /// # Grammar (Simplified)
    /// ```text
    /// @public
    /// collection Account {
    ///     id: string;
    ///     @read balance: number;
    ///     @index(id, [balance, desc]);
    ///     constructor(id: string) { this.id = id; }
    /// }
    /// ```
    pub(crate) fn collection(&mut self) -> Attempt<Collection> {
        let span = self.span();
        let decorators = self.repeat(Self::decorator);

        self.expect_keyword(keywords::COLLECTION, "collection")?;
        let name = self.expect_identifier("collection")?.lexeme;
        let items = self.braced("collection", Self::item)?;

        Ok(Collection {
            span,
            decorators,
            name,
            items,
        })
    }

    /// `Item := Field ';' | Function | Index ';'`
    ///
    /// Field goes first, so a decorated item is only read as a function
    /// once no `name: type` shape follows its decorators.
    fn item(&mut self) -> Attempt<Item> {
        if let Ok(field) = self.attempt(|p| {
            let field = p.field()?;
            p.expect_symbol(';', "item")?;
            Ok(field)
        }) {
            return Ok(Item::Field(field));
        }

        if let Ok(function) = self.attempt(Self::function) {
            return Ok(Item::Function(function));
        }

        self.attempt(|p| {
            let index = p.index()?;
            p.expect_symbol(';', "item")?;
            Ok(index)
        })
        .map(Item::Index)
    }

    /// `Field := Decorator* Ident '?'? ':' Type`
    pub(crate) fn field(&mut self) -> Attempt<Field> {
        let span = self.span();
        let decorators = self.repeat(Self::decorator);

        let name = self.expect_identifier("field")?.lexeme;
        let optional = self.match_symbol('?');
        self.expect_symbol(':', "field")?;
        let ty = self.type_annotation()?;

        Ok(Field {
            span,
            decorators,
            name,
            optional,
            ty,
        })
    }

    /// `@index(a, [b, desc])` or `@unique(a)`
    fn index(&mut self) -> Attempt<Index> {
        let span = self.span();
        self.expect_symbol('@', "index")?;
        let unique = self.expect_any_keyword(&[keywords::INDEX, keywords::UNIQUE], "index")?
            == keywords::UNIQUE;

        self.expect_symbol('(', "index")?;
        let fields = self.comma_separated("index", Self::index_field);
        self.expect_symbol(')', "index")?;

        Ok(Index {
            span,
            unique,
            fields,
        })
    }

    /// `IndexField := '[' Ident ',' Order ']' | Ident`
    ///
    /// A bare name sorts ascending.
    fn index_field(&mut self) -> Attempt<IndexField> {
        if let Ok(field) = self.attempt(|p| {
            let span = p.expect_symbol('[', "index field")?.span;
            let name = p.expect_identifier("index field")?.lexeme;
            p.expect_symbol(',', "index field")?;
            let order = p.recognize::<Order>("index field")?;
            p.expect_symbol(']', "index field")?;
            Ok(IndexField { span, name, order })
        }) {
            return Ok(field);
        }

        let token = self.expect_identifier("index field")?;
        Ok(IndexField {
            span: token.span,
            name: token.lexeme,
            order: Order::Asc,
        })
    }

    /// Parses a function, method or lifecycle hook.
    ///
    /// The `function` keyword is optional, so `function del() {}` and
    /// `del() {}` build the same node.
    pub(crate) fn function(&mut self) -> Attempt<Function> {
        let span = self.span();
        let decorators = self.repeat(Self::decorator);
        let name = self.function_name()?;

        self.expect_symbol('(', "function")?;
        let parameters = self.comma_separated("function", Self::field);
        self.expect_symbol(')', "function")?;

        let return_type = self.optional(|p| {
            p.expect_symbol(':', "function")?;
            p.type_annotation()
        });

        let statements = self.braced("function", Self::statement)?;

        Ok(Function {
            span,
            decorators,
            name,
            parameters,
            return_type,
            statements,
        })
    }

    /// `'function' Ident | Ident`
    fn function_name(&mut self) -> Attempt<String> {
        if let Ok(name) = self.attempt(|p| {
            p.expect_keyword(keywords::FUNCTION, "function")?;
            p.expect_identifier("function")
        }) {
            return Ok(name.lexeme);
        }

        Ok(self.expect_identifier("function")?.lexeme)
    }

    /// `Decorator := '@' DecoratorName ('(' Ident ')')?`
    fn decorator(&mut self) -> Attempt<Decorator> {
        let span = self.expect_symbol('@', "decorator")?.span;
        let name = self.recognize::<DecoratorName>("decorator")?;

        let arguments = self
            .optional(|p| {
                p.expect_symbol('(', "decorator")?;
                let argument = p.expect_identifier("decorator")?.lexeme;
                p.expect_symbol(')', "decorator")?;
                Ok(vec![argument])
            })
            .unwrap_or_default();

        Ok(Decorator {
            span,
            name,
            arguments,
        })
    }

    /// Parses a type annotation.
    ///
    /// The four shapes are tried strictly in order: basic (with optional
    /// `[]`), `map<K, V>`, object literal, then a bare identifier as a
    /// foreign reference. A word is only foreign once nothing more specific
    /// matched, so `string` is never foreign and `map` alone is.
    pub(crate) fn type_annotation(&mut self) -> Attempt<Type> {
        let span = self.span();

        let kind = if let Ok(kind) = self.attempt(Self::basic_type) {
            kind
        } else if let Ok(kind) = self.attempt(Self::map_type) {
            kind
        } else if let Ok(kind) = self.attempt(Self::object_type) {
            kind
        } else {
            self.attempt(Self::foreign_type)?
        };

        Ok(Type::new(span, kind))
    }

    fn basic_type(&mut self) -> Attempt<TypeKind> {
        let basic = self.recognize::<BasicType>("type")?;
        let array = self
            .optional(|p| {
                p.expect_symbol('[', "array suffix")?;
                p.expect_symbol(']', "array suffix")
            })
            .is_some();

        Ok(TypeKind::Basic { basic, array })
    }

    fn map_type(&mut self) -> Attempt<TypeKind> {
        self.expect_keyword(keywords::MAP, "map type")?;
        self.expect_symbol('<', "map type")?;
        let key = self.recognize::<BasicType>("map type")?;
        self.expect_symbol(',', "map type")?;
        let value = self.type_annotation()?;
        self.expect_symbol('>', "map type")?;

        Ok(TypeKind::Map {
            key,
            value: Box::new(value),
        })
    }

    fn object_type(&mut self) -> Attempt<TypeKind> {
        let fields = self.braced("object type", |p| {
            let field = p.field()?;
            p.expect_symbol(';', "object type")?;
            Ok(field)
        })?;

        Ok(TypeKind::Object(fields))
    }

    fn foreign_type(&mut self) -> Attempt<TypeKind> {
        let name = self.expect_identifier("type")?.lexeme;
        Ok(TypeKind::Foreign(name))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::lexer::tokenize;
    use crate::parser::parser::{Attempt, Parser};
    use crate::span::Span;

    /// Runs one rule over the whole of `source`.
    fn parse_with<T>(source: &str, rule: impl FnOnce(&mut Parser) -> Attempt<T>) -> T {
        let mut parser = Parser::new(tokenize(source).unwrap());
        let value = rule(&mut parser).unwrap_or_else(|_| panic!("{}", parser.syntax_error()));
        assert!(parser.is_at_end(), "unconsumed input in {:?}", source);
        value
    }

    fn field(source: &str) -> Field {
        parse_with(source, Parser::field)
    }

    fn ty(source: &str) -> TypeKind {
        parse_with(source, Parser::type_annotation).kind
    }

    #[test]
    fn plain_field() {
        let f = field("id: string");
        assert_eq!(f.name, "id");
        assert!(!f.optional);
        assert!(f.decorators.is_empty());
        assert_eq!(f.ty.kind, TypeKind::Basic { basic: BasicType::String, array: false });
        assert_eq!(f.span, Span::new(1, 1));
    }

    #[test]
    fn optional_field() {
        let f = field("name?: string");
        assert_eq!(f.name, "name");
        assert!(f.optional);
    }

    #[test]
    fn decorated_field() {
        let f = field("@read name: string");
        assert_eq!(f.decorators.len(), 1);
        assert_eq!(f.decorators[0].name, DecoratorName::Read);
        assert!(f.decorators[0].arguments.is_empty());
    }

    #[test]
    fn type_shapes_in_order() {
        assert_eq!(ty("number[]"), TypeKind::Basic { basic: BasicType::Number, array: true });
        assert_eq!(ty("Account"), TypeKind::Foreign("Account".into()));
        assert_eq!(ty("map"), TypeKind::Foreign("map".into()));

        match ty("map<string, Account>") {
            TypeKind::Map { key, value } => {
                assert_eq!(key, BasicType::String);
                assert_eq!(value.foreign_name(), Some("Account"));
            }
            other => panic!("expected map, got {:?}", other),
        }

        match ty("{name: string; website?: string;}") {
            TypeKind::Object(fields) => {
                let names: Vec<_> = fields.iter().map(|f| (f.name.as_str(), f.optional)).collect();
                assert_eq!(names, vec![("name", false), ("website", true)]);
            }
            other => panic!("expected object, got {:?}", other),
        }

        match ty("map<string, map<string, number>>") {
            TypeKind::Map { key, value } => {
                assert_eq!(key, BasicType::String);
                assert_eq!(value.to_string(), "map<string, number>");
                assert!(matches!(value.kind, TypeKind::Map { key: BasicType::String, .. }));
            }
            other => panic!("expected map, got {:?}", other),
        }

        assert_eq!(ty("{}"), TypeKind::Object(Vec::new()));
    }

    #[test]
    fn map_key_must_be_basic() {
        let mut parser = Parser::new(tokenize("map<Account, string>").unwrap());
        let kind = parser.type_annotation().unwrap().kind;
        // Falls through to a foreign reference and leaves `<` unread.
        assert_eq!(kind, TypeKind::Foreign("map".into()));
        assert!(parser.check_symbol('<'));
    }

    #[test]
    fn index_fields_default_to_ascending() {
        let index = parse_with("@index(a, [b, desc])", Parser::index);
        assert!(!index.unique);
        let fields: Vec<_> = index.fields.iter().map(|f| (f.name.as_str(), f.order)).collect();
        assert_eq!(fields, vec![("a", Order::Asc), ("b", Order::Desc)]);
    }

    #[test]
    fn empty_and_unique_indexes() {
        assert!(parse_with("@index()", Parser::index).fields.is_empty());
        let unique = parse_with("@unique([id, asc])", Parser::index);
        assert!(unique.unique);
        assert_eq!(unique.fields[0].order, Order::Asc);
    }

    #[test]
    fn decorators_take_zero_or_one_argument() {
        let call = parse_with("@call(owner)", Parser::decorator);
        assert_eq!(call.name, DecoratorName::Call);
        assert_eq!(call.arguments, vec!["owner"]);

        let public = parse_with("@public", Parser::decorator);
        assert_eq!(public.name, DecoratorName::Public);
        assert!(public.arguments.is_empty());
    }

    #[test]
    fn function_keyword_is_optional() {
        let long = parse_with("function test() {}", Parser::function);
        let short = parse_with("test() {}", Parser::function);
        assert_eq!(long.name, "test");
        assert_eq!(short.name, "test");
        assert_eq!(long.parameters, short.parameters);
        assert_eq!(long.statements, short.statements);
    }

    #[test]
    fn function_signature() {
        let f = parse_with(
            "@call(owner) function transfer(to: Account, amount: number): boolean {}",
            Parser::function,
        );
        assert_eq!(f.decorators[0].arguments, vec!["owner"]);
        assert_eq!(f.span, Span::new(1, 1));
        let params: Vec<_> = f.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(params, vec!["to", "amount"]);
        assert_eq!(f.parameters[0].ty.foreign_name(), Some("Account"));
        assert_eq!(
            f.return_type.map(|t| t.kind),
            Some(TypeKind::Basic { basic: BasicType::Boolean, array: false })
        );
    }

    #[test]
    fn function_named_function() {
        let f = parse_with("function() {}", Parser::function);
        assert_eq!(f.name, "function");
    }

    #[test]
    fn items_keep_source_order() {
        let c = parse_with(
            "@public collection A { id: string; @index(id); del() {} @read n?: number; }",
            Parser::collection,
        );
        assert_eq!(c.decorators[0].name, DecoratorName::Public);
        let kinds: Vec<_> = c
            .items
            .iter()
            .map(|item| match item {
                Item::Field(f) => format!("field {}", f.name),
                Item::Function(f) => format!("function {}", f.name),
                Item::Index(_) => "index".to_string(),
            })
            .collect();
        assert_eq!(kinds, vec!["field id", "index", "function del", "field n"]);
    }

    #[test]
    fn contextual_keywords_are_legal_names() {
        let c = parse_with(
            "collection collection { index: number; map: string; function: boolean; }",
            Parser::collection,
        );
        assert_eq!(c.name, "collection");
        let names: Vec<_> = c.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["index", "map", "function"]);
    }
}
