#![no_main]
use jsonnav::{Document, Kind, Trailing};
use libfuzzer_sys::fuzz_target;

fn walk(document: Document<'_>, depth: usize) {
    if depth > 32 {
        return;
    }
    match document.kind() {
        Kind::String => assert!(document.string().is_some()),
        Kind::Number => {
            let number = document.must_number();
            let _ = number.as_f64();
            assert!(!number.to_string().is_empty());
        }
        Kind::Bool => assert!(document.bool().is_some()),
        Kind::Array => {
            for item in document.must_array() {
                walk(item, depth + 1);
            }
        }
        Kind::Map => {
            for (key, member) in document.must_map() {
                let found = document.at([key]).expect("Member must be reachable");
                assert_eq!(found.kind(), member.kind());
                walk(member, depth + 1);
            }
        }
        Kind::Unknown => assert!(document.at(["any"]).is_none()),
    }
}

fuzz_target!(|data: &[u8]| {
    let lenient = jsonnav::from_slice(data);
    let strict = jsonnav::options()
        .with_trailing(Trailing::Reject)
        .from_slice(data);
    if strict.is_ok() {
        assert!(lenient.is_ok());
    }
    if let Ok(document) = lenient {
        walk(document.as_document(), 0);
    }
});
