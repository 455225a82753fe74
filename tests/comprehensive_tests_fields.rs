use values_scan::fields::{decode_hex, parse_field, unescape_string};
use values_scan::{SqlValue, ValuesError, parse_tuple, split_fields};

#[test]
fn test_split_fields_respects_quotes_and_parens() {
    let fields = split_fields("'a,b', 1, NOW(), CONCAT('x', 'y'), \"q,r\"");
    assert_eq!(
        fields,
        vec!["'a,b'", "1", "NOW()", "CONCAT('x', 'y')", "\"q,r\""]
    );
}

#[test]
fn test_split_fields_escaped_and_doubled_quotes() {
    let fields = split_fields(r"'it\'s, ok', 'say ''hi'', bye', 3");
    assert_eq!(fields, vec![r"'it\'s, ok'", "'say ''hi'', bye'", "3"]);
}

#[test]
fn test_split_fields_empty_and_blank() {
    assert!(split_fields("").is_empty());
    assert!(split_fields("   ").is_empty());
    assert_eq!(split_fields("1,,2"), vec!["1", "", "2"]);
}

#[test]
fn test_parse_field_classification() {
    assert_eq!(parse_field("NULL").unwrap(), SqlValue::Null);
    assert_eq!(parse_field(" null ").unwrap(), SqlValue::Null);
    assert_eq!(parse_field("42").unwrap(), SqlValue::Integer(42));
    assert_eq!(parse_field("-7").unwrap(), SqlValue::Integer(-7));
    assert_eq!(parse_field("3.5").unwrap(), SqlValue::Float(3.5));
    assert_eq!(parse_field("1e3").unwrap(), SqlValue::Float(1000.0));
    assert_eq!(
        parse_field("'hello'").unwrap(),
        SqlValue::Text("hello".to_string())
    );
    assert_eq!(parse_field("''").unwrap(), SqlValue::Text(String::new()));
    assert_eq!(
        parse_field("CURRENT_TIMESTAMP").unwrap(),
        SqlValue::Raw("CURRENT_TIMESTAMP".to_string())
    );
    assert_eq!(
        parse_field("(1+2)").unwrap(),
        SqlValue::Raw("(1+2)".to_string())
    );
    assert!(parse_field("NULL").unwrap().is_null());
}

#[test]
fn test_integer_overflow_falls_back_to_float() {
    let value = parse_field("99999999999999999999").unwrap();
    assert!(matches!(value, SqlValue::Float(_)));
}

#[test]
fn test_unescape_string() {
    assert_eq!(unescape_string(r"it\'s", '\''), "it's");
    assert_eq!(unescape_string(r"a\nb\tc", '\''), "a\nb\tc");
    assert_eq!(unescape_string(r"back\\slash", '\''), r"back\slash");
    assert_eq!(unescape_string("say ''hi''", '\''), "say 'hi'");
    assert_eq!(unescape_string(r#"a ""b"""#, '"'), r#"a "b""#);
    assert_eq!(unescape_string(r"trailing\", '\''), r"trailing\");
}

#[test]
fn test_hex_literal_uuid() {
    let raw = "X'30303833623233382D333639622D343733392D393564392D373366663834393365386435'";
    let value = parse_field(raw).unwrap();
    assert_eq!(
        value.hex_as_text(),
        Some("0083b238-369b-4739-95d9-73ff8493e8d5")
    );

    let value = parse_field("0x4142").unwrap();
    assert_eq!(value, SqlValue::Hex(vec![0x41, 0x42]));
    assert_eq!(value.hex_as_text(), Some("AB"));

    assert_eq!(parse_field("X''").unwrap(), SqlValue::Hex(Vec::new()));
    assert_eq!(parse_field("x'ff'").unwrap().hex_as_text(), None);
    assert_eq!(SqlValue::Integer(1).hex_as_text(), None);
}

#[test]
fn test_invalid_hex_literal() {
    match parse_field("X'ABC'") {
        Err(ValuesError::InvalidHexLiteral(digits)) => assert_eq!(digits, "ABC"),
        other => panic!("Expected InvalidHexLiteral, got: {other:?}"),
    }
    assert!(matches!(
        decode_hex("zz"),
        Err(ValuesError::InvalidHexLiteral(_))
    ));
    assert!(matches!(
        parse_field("0xGG"),
        Err(ValuesError::InvalidHexLiteral(_))
    ));
}

#[test]
fn test_parse_tuple_customer_row() {
    let row = "X'3031','Test F Name','Test L name','a.b@example.com',1,'2025-10-27 08:55:30',NULL";
    let values = parse_tuple(row).unwrap();
    assert_eq!(values.len(), 7);
    assert_eq!(values[0].hex_as_text(), Some("01"));
    assert_eq!(values[1], SqlValue::Text("Test F Name".to_string()));
    assert_eq!(values[4], SqlValue::Integer(1));
    assert_eq!(
        values[5],
        SqlValue::Text("2025-10-27 08:55:30".to_string())
    );
    assert_eq!(values[6], SqlValue::Null);
}

#[test]
fn test_sql_value_json_shape() {
    let values = parse_tuple("NULL, 7, 'x', X'4142'").unwrap();
    let json = serde_json::to_value(&values).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "type": "null" },
            { "type": "integer", "value": 7 },
            { "type": "text", "value": "x" },
            { "type": "hex", "value": "4142" }
        ])
    );
}

#[test]
fn test_unescape_keeps_like_wildcard_backslash() {
    assert_eq!(unescape_string(r"50\% off", '\''), r"50\% off");
    assert_eq!(unescape_string(r"snake\_case", '\''), r"snake\_case");
    assert_eq!(
        parse_field(r"'a\_b\%c\'d'").unwrap(),
        SqlValue::Text(r"a\_b\%c'd".to_string())
    );
}
