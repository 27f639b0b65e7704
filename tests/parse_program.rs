use polylang::ast::*;
use polylang::lexer::{tokenize, TokenKind};
use polylang::{parse_str, Error, Span};

const ARTICLE: &str = include_str!("fixtures/article.polylang");
const ACCOUNT: &str = include_str!("fixtures/account.polylang");

fn only_collection(program: &Program) -> &Collection {
    assert_eq!(program.nodes.len(), 1);
    match &program.nodes[0] {
        Node::Collection(collection) => collection,
        other => panic!("expected collection, got {:?}", other),
    }
}

#[test]
fn article_items_in_source_order() {
    let program = parse_str(ARTICLE).unwrap();
    let article = only_collection(&program);

    assert_eq!(article.name, "Article");
    assert_eq!(article.decorators[0].name, DecoratorName::Public);
    assert_eq!(article.span, Span::new(2, 1));
    assert_eq!(article.items.len(), 5);

    match &article.items[..] {
        [Item::Field(id), Item::Field(title), Item::Field(info), Item::Function(ctor), Item::Function(del)] =>
        {
            assert_eq!(id.name, "id");
            assert_eq!(title.name, "title");
            assert_eq!(info.name, "info");
            assert_eq!(ctor.name, "constructor");
            assert_eq!(del.name, "del");
        }
        other => panic!("unexpected item layout: {:?}", other),
    }
}

#[test]
fn article_object_field() {
    let program = parse_str(ARTICLE).unwrap();
    let info = only_collection(&program).fields().nth(2).unwrap();

    match &info.ty.kind {
        TypeKind::Object(fields) => {
            assert_eq!(fields[0].name, "author");
            assert!(!fields[0].optional);
            assert_eq!(fields[1].name, "sponsor");
            assert!(fields[1].optional);
        }
        other => panic!("expected object type, got {:?}", other),
    }
    assert_eq!(info.ty.to_string(), "{ author: string; sponsor?: string; }");
}

#[test]
fn article_constructor_assigns_parameters() {
    let program = parse_str(ARTICLE).unwrap();
    let ctor = only_collection(&program).functions().next().unwrap();

    let params: Vec<_> = ctor.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, vec!["id", "title"]);

    let targets: Vec<_> = ctor
        .statements
        .iter()
        .map(|statement| match statement {
            Statement::Simple(SimpleStatement {
                small: SmallStatement::Expression(e),
                ..
            }) => {
                assert_eq!(e.operator(), Some(Operator::Assign));
                e.left.as_ident().unwrap().to_string()
            }
            other => panic!("expected assignment, got {:?}", other),
        })
        .collect();
    assert_eq!(targets, vec!["this.id", "this.title"]);
}

#[test]
fn article_del_calls_selfdestruct() {
    let program = parse_str(ARTICLE).unwrap();
    let del = only_collection(&program).functions().nth(1).unwrap();

    match &del.statements[..] {
        [Statement::Simple(SimpleStatement {
            small: SmallStatement::Expression(e),
            ..
        })] => match &e.left.kind {
            ValueKind::Call(call) => {
                assert_eq!(call.callee, "selfdestruct");
                assert!(call.arguments.is_empty());
            }
            other => panic!("expected call, got {:?}", other),
        },
        other => panic!("unexpected body: {:?}", other),
    }
}

#[test]
fn account_fixture() {
    let program = parse_str(ACCOUNT).unwrap();
    assert_eq!(program.nodes.len(), 2);
    assert_eq!(program.nodes[1].name(), "limit");
    assert_eq!(program.nodes[0].span(), Span::new(1, 1));
    assert_eq!(program.nodes[1].span(), Span::new(19, 1));

    let account = program.collection("Account").unwrap();
    let types: Vec<_> = account.fields().map(|f| f.ty.to_string()).collect();
    assert_eq!(
        types,
        vec!["string", "number", "PublicKey", "string[]", "map<string, Transfer>"]
    );

    let indexes: Vec<_> = account.indexes().collect();
    assert_eq!(indexes.len(), 2);
    assert!(!indexes[0].unique);
    assert_eq!(indexes[0].fields[1].order, Order::Desc);
    assert!(indexes[1].unique);

    let withdraw = account.functions().next().unwrap();
    assert_eq!(withdraw.decorators[0].arguments, vec!["owner"]);
    assert_eq!(withdraw.statements.len(), 3);
    match &withdraw.statements[0] {
        Statement::Compound(Compound::If(node)) => {
            assert!(matches!(node.then_branch, Branch::Simple(_)));
            assert!(node.else_branch.is_absent());
        }
        other => panic!("expected if, got {:?}", other),
    }

    let limit = program.functions().next().unwrap();
    assert!(matches!(
        limit.statements[1],
        Statement::Compound(Compound::For(_))
    ));
    assert!(matches!(
        limit.statements[2],
        Statement::Compound(Compound::While(_))
    ));
}

#[test]
fn dotted_identifier_is_one_token() {
    let tokens = tokenize("this.balance").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "this.balance");
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(parse_str(ACCOUNT).unwrap(), parse_str(ACCOUNT).unwrap());
}

#[test]
fn program_serializes_to_json() {
    let program = parse_str("collection A { @read id?: string; }").unwrap();
    let json = serde_json::to_value(&program).unwrap();

    let field = &json["nodes"][0]["collection"]["items"][0]["field"];
    assert_eq!(field["name"], "id");
    assert_eq!(field["optional"], true);
    assert_eq!(field["span"], serde_json::json!({"line": 1, "column": 16}));

    let back: Program = serde_json::from_value(json).unwrap();
    assert_eq!(back, program);
}

#[test]
fn in_memory_error_has_no_file() {
    match parse_str("collection {").unwrap_err() {
        Error::Syntax { file, error } => {
            assert!(file.is_none());
            assert_eq!(error.span, Span::new(1, 12));
            assert_eq!(error.rule, Some("collection"));
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}
