#[test]
fn test_str_utils_functionality() {
    use values_scan::str_utils;

    let sql = "INSERT INTO t VALUES ('a;b', \"c;d\", 'it\\'s;'); SELECT 1;";
    let end = str_utils::find_statement_end(sql, 0).unwrap();
    assert_eq!(&sql[end - 1..=end], ");");
    assert_eq!(str_utils::find_statement_end(sql, end + 1), Some(sql.len() - 1));
    assert_eq!(str_utils::find_statement_end("VALUES ('open;", 0), None);

    assert_eq!(str_utils::preview("héllo", 2), "hé");
    assert_eq!(str_utils::preview("hi", 200), "hi");
    assert_eq!(str_utils::char_len("héllo"), 5);

    for byte in [b',', b';', b' ', b'\n', b'\t'] {
        assert!(str_utils::is_tuple_separator(byte));
    }
    assert!(!str_utils::is_tuple_separator(b'\r'));
    assert!(!str_utils::is_tuple_separator(b'('));
}
