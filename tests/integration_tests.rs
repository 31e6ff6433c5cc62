use properties_edit::{
    from_reader, from_str, to_string, CommentPrefix, Error, FormatOptions, Properties, Separator,
    TokenKind,
};
use std::io::{self, Read};

const APP_CONFIG: &str = "\
# Application settings
# (edit with care)

app.name = Demo
app.version : 1.2

! Database
db.url=jdbc:h2:mem:test
db.user   sa
db.password=

# Paths are continued
paths = /usr/bin:\\
        /usr/local/bin
unicode=caf\\u00e9 \\u20ac
";

#[test]
fn test_roundtrip_without_edits() {
    let props = from_str(APP_CONFIG).unwrap();
    println!("Tokens: {:?}", props.tokens());
    assert_eq!(to_string(&props), APP_CONFIG);
}

#[test]
fn test_decoded_view() {
    let props = from_str(APP_CONFIG).unwrap();

    assert_eq!(props.len(), 7);
    assert_eq!(props.get("app.name"), Some("Demo"));
    assert_eq!(props.get("app.version"), Some("1.2"));
    assert_eq!(props.get("db.user"), Some("sa"));
    assert_eq!(props.get("db.password"), Some(""));
    assert_eq!(props.get("paths"), Some("/usr/bin:/usr/local/bin"));
    assert_eq!(props.get("unicode"), Some("caf\u{e9} \u{20ac}"));

    let keys: Vec<&str> = props.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "app.name",
            "app.version",
            "db.url",
            "db.user",
            "db.password",
            "paths",
            "unicode"
        ]
    );
}

#[test]
fn test_comments_of_keys() {
    let props = from_str(APP_CONFIG).unwrap();

    // The header is separated from the first key by a blank line only
    assert_eq!(
        props.comment("app.name").unwrap(),
        vec!["# Application settings", "# (edit with care)"]
    );
    assert!(props.comment("app.version").unwrap().is_empty());
    assert_eq!(props.comment("db.url").unwrap(), vec!["! Database"]);
    assert_eq!(props.comment("paths").unwrap(), vec!["# Paths are continued"]);
    assert!(props.comment("unicode").unwrap().is_empty());
}

#[test]
fn test_in_place_replace_keeps_formatting() {
    let mut props = from_str(APP_CONFIG).unwrap();

    props.put("app.version", "1.3");
    props.put("app.version", "2.0");
    props.put("paths", "/bin");

    let expected = APP_CONFIG
        .replace("app.version : 1.2", "app.version : 2.0")
        .replace("paths = /usr/bin:\\\n        /usr/local/bin", "paths = /bin");
    assert_eq!(to_string(&props), expected);
    assert_eq!(props.comment("paths").unwrap(), vec!["# Paths are continued"]);
}

#[test]
fn test_append_new_key() {
    let mut props = from_str(APP_CONFIG).unwrap();
    assert_eq!(props.put("new key", "v\u{1F600}"), None);

    let output = to_string(&props);
    assert!(output.starts_with(APP_CONFIG));
    assert_eq!(&output[APP_CONFIG.len()..], "new\\ key=v\\ud83d\\ude00");

    let reloaded = from_str(&output).unwrap();
    assert_eq!(reloaded.get("new key"), Some("v\u{1F600}"));
}

#[test]
fn test_append_inserts_single_newline() {
    let mut props = from_str("a=1").unwrap();
    props.put("b", "2");
    props.put("c", "3");
    assert_eq!(to_string(&props), "a=1\nb=2\nc=3");

    let whitespace = props
        .tokens()
        .iter()
        .filter(|t| t.kind() == TokenKind::Whitespace)
        .count();
    assert_eq!(whitespace, 2);
}

#[test]
fn test_set_comment_roundtrip() {
    let mut props = from_str("k=v\n").unwrap();

    let old = props.set_comment("k", ["# a", "# b"]).unwrap();
    assert!(old.is_empty());
    assert_eq!(props.comment("k").unwrap(), vec!["# a", "# b"]);
    assert_eq!(to_string(&props), "# a\n# b\nk=v\n");

    let old = props.set_comment("k", ["# c"]).unwrap();
    assert_eq!(old, vec!["# a", "# b"]);
    assert_eq!(to_string(&props), "# c\nk=v\n");

    props.set_comment("k", ["# c", "# d", "# e"]).unwrap();
    assert_eq!(to_string(&props), "# c\n# d\n# e\nk=v\n");
}

#[test]
fn test_set_comment_reuses_existing_prefix() {
    let mut props = from_str(APP_CONFIG).unwrap();
    props
        .set_comment("db.url", ["Connection", "Credentials follow"])
        .unwrap();
    assert_eq!(
        props.comment("db.url").unwrap(),
        vec!["! Connection", "! Credentials follow"]
    );
    assert!(to_string(&props).contains("\n! Connection\n! Credentials follow\ndb.url="));
}

#[test]
fn test_set_comment_default_prefix_from_options() {
    let options = FormatOptions::new().with_comment_prefix(CommentPrefix::Bang);
    let mut props = Properties::with_options(options);
    props.load("a=1\n".as_bytes()).unwrap();
    props.set_comment("a", ["note"]).unwrap();
    assert_eq!(to_string(&props), "!note\na=1\n");
}

#[test]
fn test_comment_on_missing_key() {
    let mut props = from_str(APP_CONFIG).unwrap();
    assert_eq!(
        props.comment("nope"),
        Err(Error::KeyNotFound("nope".to_string()))
    );
    assert!(props.set_comment("nope", ["# x"]).is_err());
    assert_eq!(to_string(&props), APP_CONFIG);
}

#[test]
fn test_remove_cleans_up_text() {
    let mut props = from_str(APP_CONFIG).unwrap();

    assert_eq!(props.remove("paths"), Some("/usr/bin:/usr/local/bin".to_string()));
    assert_eq!(props.remove("paths"), None);
    assert!(props.get("paths").is_none());

    let output = to_string(&props);
    assert!(!output.contains("Paths are continued"));
    assert!(!output.contains("/usr/local/bin"));
    assert!(output.ends_with("db.password=\n\nunicode=caf\\u00e9 \\u20ac\n"));

    // Removed keys do not come back on reload
    let reloaded = from_str(&output).unwrap();
    assert_eq!(reloaded, props);
    assert!(!reloaded.contains_key("paths"));
}

#[test]
fn test_raw_accessors() {
    let mut props = from_str(APP_CONFIG).unwrap();

    assert_eq!(props.get_raw("unicode").unwrap(), Some("caf\\u00e9 \\u20ac"));
    assert_eq!(props.get_raw("missing").unwrap(), None);
    assert!(props.get_raw("bad\\u").is_err());

    props.put_raw("my\\ raw", "\\u0041\\=").unwrap();
    assert_eq!(props.get("my raw"), Some("A="));
    assert!(to_string(&props).ends_with("\nmy\\ raw=\\u0041\\="));

    let raw_values = props.raw_values();
    assert_eq!(raw_values.len(), 8);
    assert_eq!(raw_values[0], "Demo");
    assert_eq!(raw_values[7], "\\u0041\\=");
}

#[test]
fn test_raw_key_spellings_are_distinct() {
    let props = from_str("a\\ b=1\na\\u0020b=2\n").unwrap();

    assert_eq!(props.len(), 1);
    assert_eq!(props.get("a b"), Some("2"));

    let raw_keys: Vec<&str> = props.raw_keys().into_iter().collect();
    assert_eq!(raw_keys, vec!["a\\ b", "a\\u0020b"]);
}

#[test]
fn test_separator_option_for_new_records() {
    let options = FormatOptions::new().with_separator(Separator::SpacedEquals);
    let mut props = Properties::with_options(options);
    props.put("a", "1");
    props.put("b", "2");
    assert_eq!(to_string(&props), "a = 1\nb = 2");
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "connection reset"))
    }
}

#[test]
fn test_io_error_on_load() {
    let err = from_reader(BrokenReader).unwrap_err();
    assert!(matches!(err, Error::Io(ref msg) if msg.contains("connection reset")));

    let mut props = from_str("keep=me").unwrap();
    assert!(props.load(BrokenReader).is_err());
    assert_eq!(props.get("keep"), Some("me"));
}

#[test]
fn test_parse_error_reports_line() {
    let err = from_str("a=1\n# fine\nb=\\u12G4\n").unwrap_err();
    println!("Error: {}", err);
    assert!(matches!(err, Error::Syntax { line: 3, .. }));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_serde_view() {
    let props = from_str(APP_CONFIG).unwrap();
    let json = serde_json::to_value(&props).unwrap();
    assert_eq!(json["db.user"], "sa");
    assert_eq!(json["paths"], "/usr/bin:/usr/local/bin");

    let rebuilt: Properties = serde_json::from_value(json).unwrap();
    assert_eq!(rebuilt.len(), props.len());
    assert_eq!(rebuilt.get("unicode"), props.get("unicode"));
}
