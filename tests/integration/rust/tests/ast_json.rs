//! AST JSON Integration Tests
//!
//! Checks the serialized shape callers see when dumping a parse.

use parser::{parse, parse_with, ParseOptions, SourceType};
use serde_json::{json, Value};

fn dump(source: &str) -> Value {
    serde_json::to_value(parse(source).unwrap()).unwrap()
}

#[test]
fn test_identifier_node_shape() {
    let ast = dump("foo");
    assert_eq!(
        ast["ast"]["body"][0]["expression"],
        json!({
            "type": "Identifier",
            "symbol": "foo",
            "span": {
                "start": { "line": 1, "column": 1, "offset": 0 },
                "end": { "line": 1, "column": 4, "offset": 3 }
            }
        })
    );
}

#[test]
fn test_binary_expression_shape() {
    let ast = dump("1 * 2");
    let binary = &ast["ast"]["body"][0]["expression"];
    assert_eq!(binary["type"], "BinaryExpression");
    assert_eq!(binary["kind"], "mul");
    assert_eq!(binary["operator"], "Asterisk");
    assert_eq!(binary["left"]["type"], "NumericLiteral");
    assert_eq!(binary["left"]["value"], 1.0);
    assert_eq!(binary["right"]["raw"], "2");
}

#[test]
fn test_function_flags_shape() {
    let ast = dump("async function f() {}");
    let function = &ast["ast"]["body"][0];
    assert_eq!(function["type"], "FunctionDeclaration");
    assert_eq!(function["async"], true);
    assert_eq!(function["generator"], false);
    assert_eq!(function["params"], json!([]));
}

#[test]
fn test_template_element_shape() {
    let ast = dump(r"`a\tb`");
    let element = &ast["ast"]["body"][0]["expression"]["quasis"][0];
    assert_eq!(element["raw"], r"a\tb");
    assert_eq!(element["cooked"], "atb");
    assert_eq!(element["tail"], true);
}

#[test]
fn test_properties_shape() {
    assert_eq!(dump("export default 1")["properties"], json!({ "source_type": "esm" }));
    let options: ParseOptions = serde_json::from_value(json!({})).unwrap();
    let output = parse_with("1", &options).unwrap();
    assert_eq!(output.properties.source_type, SourceType::Cjs);
}

#[test]
fn test_missing_optional_child_is_null() {
    let ast = dump("let x");
    assert_eq!(ast["ast"]["body"][0]["declarators"][0]["init"], Value::Null);
}
