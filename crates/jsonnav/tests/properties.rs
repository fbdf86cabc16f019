use std::io::{BufReader, Cursor};

use jsonnav::{DocumentBuf, Error, Kind, Trailing};
use serde_json::json;
use test_case::test_case;

#[test_case(r#""s""#, "string")]
#[test_case("-0.5", "number")]
#[test_case("false", "bool")]
#[test_case("{}", "map")]
#[test_case("[]", "array")]
#[test_case("null", "unknown")]
fn kind_labels(input: &str, label: &str) {
    let document = jsonnav::must_from_str(input);
    assert_eq!(document.kind().to_string(), label);
}

#[test]
fn member_lookup_matches_map_contents() {
    let value = json!({
        "s": "x",
        "n": 1,
        "b": true,
        "m": {},
        "a": [],
        "z": null
    });
    let document = jsonnav::must_from_str(&value.to_string());
    let members = document.must_map();
    assert_eq!(members.len(), 6);
    for (key, member) in &members {
        let found = document.at([*key]).expect("Every member is reachable");
        assert_eq!(found.kind(), member.kind());
    }
    for key in ["", "S", "missing", "s.x"] {
        assert!(document.at([key]).is_none(), "{key}");
    }
}

#[test_case("{}")]
#[test_case(r#"{"a": 1}"#)]
#[test_case("[1]")]
#[test_case("1")]
#[test_case("null")]
fn empty_path_never_resolves(input: &str) {
    let document = jsonnav::must_from_str(input);
    assert!(document.at(Vec::<&str>::new()).is_none());
}

#[test_case(r#""a""#)]
#[test_case("1")]
#[test_case("true")]
#[test_case(r#"[{"a": 1}]"#)]
#[test_case("null")]
fn non_map_never_resolves(input: &str) {
    let document = jsonnav::must_from_str(input);
    assert!(document.at(["a"]).is_none());
    assert!(document.at(["0"]).is_none());
    assert!(document.at(["a", "b"]).is_none());
}

#[test]
fn multi_level_path() {
    let document = jsonnav::must_from_str(r#"{"a":{"b":{"c":"world"}}}"#);
    let found = document.at(["a", "b", "c"]).expect("Path exists");
    assert_eq!(found.string(), Some("world"));
}

#[test]
fn type_mismatch_on_bool() {
    let document = jsonnav::must_from_str("true");
    assert_eq!(document.string(), None);
    let error = document.try_string().expect_err("Should be a mismatch");
    assert!(matches!(
        error,
        Error::TypeMismatch {
            expected: Kind::String,
            actual: Kind::Bool
        }
    ));
}

#[test]
#[should_panic(expected = "got bool expected string")]
fn must_string_on_bool() {
    let _ = jsonnav::must_from_str("true").must_string();
}

#[test_case("123456789012345678901234567890", "123456789012345678901234567890")]
#[test_case("-98765432109876543210987654321", "-98765432109876543210987654321")]
#[test_case("0.1000000000000000055511151231257827", "0.1000000000000000055511151231257827")]
#[test_case("2.50E-3", "2.50e-3"; "uppercase negative exponent")]
#[test_case("1E5", "1e+5"; "uppercase exponent without sign")]
#[test_case("1e400", "1e+400"; "exponent beyond f64")]
#[test_case("-12.50e3", "-12.50e+3"; "lowercase exponent without sign")]
#[test_case("6.0e+0", "6.0e+0"; "already canonical")]
fn numbers_keep_their_digits(input: &str, token: &str) {
    let input = format!(r#"{{"n": {input}}}"#);
    let document = jsonnav::must_from_str(&input);
    assert_eq!(document.must_at(["n"]).must_number().to_string(), token);
    let from_slice = jsonnav::must_from_slice(input.as_bytes());
    assert_eq!(from_slice.must_at(["n"]).must_number().to_string(), token);
    let from_reader = jsonnav::must_from_reader(BufReader::new(Cursor::new(input)));
    assert_eq!(
        from_reader.number_at(["n"]).map(ToString::to_string),
        Some(token.to_string())
    );
}

#[test]
fn baseline() {
    assert_eq!(
        jsonnav::must_from_str(r#"{"hello":"world"}"#)
            .must_at(["hello"])
            .must_string(),
        "world"
    );
}

#[test]
fn trailing_content_policy() {
    let input = r#"{"a": 1} garbage"#;
    let lenient = jsonnav::from_str(input).expect("Trailing content is ignored");
    assert_eq!(lenient.kind(), Kind::Map);
    let error = jsonnav::options()
        .with_trailing(Trailing::Reject)
        .from_str(input)
        .expect_err("Trailing content is rejected");
    assert!(matches!(error, Error::TrailingCharacters { .. }));
}

#[test]
fn parse_via_from_str_trait() {
    let document: DocumentBuf = r#"{"list": [1, "two", {"three": 3}]}"#
        .parse()
        .expect("Valid JSON");
    let list = document.must_at(["list"]).must_array();
    assert_eq!(list.len(), 3);
    assert_eq!(list[1].must_string(), "two");
    assert_eq!(
        list[2]
            .must_at(["three"])
            .must_number()
            .as_i64(),
        Some(3)
    );
}

#[test]
fn accessor_results_can_be_bound() {
    let document = jsonnav::must_from_str(r#"{"hello": "world", "list": [{"id": 7}]}"#);
    let hello = document.must_at(["hello"]).must_string();
    let list = document.must_at(["list"]).must_array();
    let first = list[0].must_map();
    let id = first["id"].must_number();
    assert_eq!(hello, "world");
    assert_eq!(id.as_u64(), Some(7));
}

#[test]
fn deeply_nested_input_decodes() {
    let input = format!("{}{}", "[".repeat(200), "]".repeat(200));
    let document = jsonnav::must_from_str(&input);
    assert_eq!(document.kind(), Kind::Array);
    let error = jsonnav::options()
        .with_max_depth(100)
        .from_str(&input)
        .expect_err("Deeper than the configured limit");
    assert!(matches!(error, Error::DepthLimitExceeded { limit: 100 }));
}

#[test_case(b"\"\xff\""; "invalid utf-8")]
#[test_case(br#""\ud800""#; "lone surrogate")]
fn malformed_text_is_not_replaced(input: &[u8]) {
    let error = jsonnav::from_slice(input).expect_err("Should fail");
    assert!(matches!(error, Error::Decode { .. }), "{error}");
}

#[test]
fn detached_children_outlive_their_parent() {
    let child = {
        let document = jsonnav::must_from_str(r#"{"a": {"b": 1}}"#);
        document
            .must_at(["a"])
            .to_document_buf()
            .expect("Path resolved to a value")
    };
    assert_eq!(child.number_at(["b"]).and_then(|n| n.as_u64()), Some(1));
}

#[test]
fn shared_between_threads() {
    let document = jsonnav::must_from_str(r#"{"workers": [{"id": "a"}, {"id": "b"}]}"#);
    let document = &document;
    let ids: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(move |_| {
                scope.spawn(move || {
                    document
                        .must_at(["workers"])
                        .must_array()
                        .iter()
                        .map(|worker| worker.must_at(["id"]).must_string().to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("Thread panicked"))
            .collect()
    });
    assert_eq!(ids, ["a,b", "a,b"]);
}
