use properties_edit::{from_str, tokenize, to_string, Token, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).unwrap().iter().map(Token::kind).collect()
}

#[test]
fn test_separator_styles() {
    let props = from_str("a=1\nb:2\nc 3\nd\t4\ne = 5\nf : 6\ng\u{000C}7\n").unwrap();
    for (key, value) in [
        ("a", "1"),
        ("b", "2"),
        ("c", "3"),
        ("d", "4"),
        ("e", "5"),
        ("f", "6"),
        ("g", "7"),
    ] {
        assert_eq!(props.get(key), Some(value), "key {key}");
    }
}

#[test]
fn test_only_first_separator_splits() {
    let props = from_str("url=http://host:80/a=b\nkey:=x\n").unwrap();
    assert_eq!(props.get("url"), Some("http://host:80/a=b"));
    assert_eq!(props.get("key"), Some("=x"));
}

#[test]
fn test_whitespace_separator_then_equals() {
    let tokens = tokenize("key   =   value").unwrap();
    assert_eq!(tokens[1].raw(), "   =   ");
    assert_eq!(tokens[2].text(), "value");
}

#[test]
fn test_trailing_whitespace_stays_in_value() {
    let props = from_str("key=value  \n").unwrap();
    assert_eq!(props.get("key"), Some("value  "));
}

#[test]
fn test_key_only_lines() {
    let props = from_str("flag\nother=\n  spaced   \n").unwrap();
    assert_eq!(props.get("flag"), Some(""));
    assert_eq!(props.get("other"), Some(""));
    assert_eq!(props.get("spaced"), Some(""));
}

#[test]
fn test_comment_markers() {
    assert_eq!(
        kinds("#a\n!b\n   # c"),
        vec![
            TokenKind::Comment,
            TokenKind::Whitespace,
            TokenKind::Comment,
            TokenKind::Whitespace,
            TokenKind::Whitespace,
            TokenKind::Comment,
        ]
    );
    // A marker after the key is part of the value
    let props = from_str("key=value # not a comment").unwrap();
    assert_eq!(props.get("key"), Some("value # not a comment"));
}

#[test]
fn test_escaped_separators_in_keys() {
    let props = from_str("a\\:b\\=c\\ d = v\n\\#not\\!comment=1\n").unwrap();
    assert_eq!(props.get("a:b=c d"), Some("v"));
    assert_eq!(props.get("#not!comment"), Some("1"));
}

#[test]
fn test_escape_sequences_in_values() {
    let props = from_str("v=\\t\\n\\r\\f\\\\\\u0041\\q").unwrap();
    assert_eq!(props.get("v"), Some("\t\n\r\u{000C}\\Aq"));
}

#[test]
fn test_multi_line_continuation() {
    let source = "list = one, \\\n       two, \\\n\t\tthree\nnext=1\n";
    let props = from_str(source).unwrap();
    assert_eq!(props.get("list"), Some("one, two, three"));
    assert_eq!(props.get("next"), Some("1"));
    assert_eq!(to_string(&props), source);
}

#[test]
fn test_continuation_concrete() {
    let source = "key=line1\\\nline2";
    let props = from_str(source).unwrap();
    assert_eq!(props.get("key"), Some("line1line2"));
    assert_eq!(to_string(&props), source);
}

#[test]
fn test_continuation_onto_blank_line() {
    let props = from_str("key=a\\\n\nnext=b\n").unwrap();
    assert_eq!(props.get("key"), Some("a"));
    assert_eq!(props.get("next"), Some("b"));
}

#[test]
fn test_continuation_at_end_of_input() {
    let source = "key=a\\";
    let props = from_str(source).unwrap();
    assert_eq!(props.get("key"), Some("a"));
    assert_eq!(to_string(&props), source);
}

#[test]
fn test_mixed_line_endings_roundtrip() {
    let source = "a=1\r\n# c\rb=2\n\r\n  \rc=3";
    let props = from_str(source).unwrap();
    assert_eq!(props.get("b"), Some("2"));
    assert_eq!(props.get("c"), Some("3"));
    assert_eq!(props.comment("b").unwrap(), vec!["# c"]);
    assert_eq!(to_string(&props), source);
}

#[test]
fn test_blank_and_whitespace_lines_roundtrip() {
    let source = "\n\n   \n\t\n";
    let props = from_str(source).unwrap();
    assert!(props.is_empty());
    assert_eq!(kinds(source), vec![TokenKind::Whitespace; 4]);
    assert_eq!(to_string(&props), source);
}

#[test]
fn test_non_ascii_source_text_is_preserved() {
    let source = "# комментарий\nключ = значение\n";
    let props = from_str(source).unwrap();
    assert_eq!(props.get("ключ"), Some("значение"));
    assert_eq!(to_string(&props), source);
}

#[test]
fn test_invalid_unicode_escapes() {
    for source in ["k=\\u", "k=\\u123", "k=\\u12x4", "\\uGGGG=v", "k=\\ud800"] {
        assert!(from_str(source).is_err(), "{source:?} should fail");
    }
}

#[test]
fn test_end_of_line_flags() {
    let tokens = tokenize("# c\nk=v\\\n  w\n\n").unwrap();
    let flags: Vec<bool> = tokens.iter().map(Token::is_end_of_line).collect();
    assert_eq!(flags, vec![false, true, false, false, false, true, true]);
}
