use persona::{AssertionError, assertion::normalize_origin, parse_assertion};

use crate::helpers::*;

#[test]
fn parse_yields_encoded_claims() {
    let cases = [
        ("u@x.com", "http://site.example", 0),
        ("jchris@couchbase.com", "http://localhost:4984", 1_373_071_000_000),
        ("ünïcode@例え.jp", "https://例え.jp:8443", NOW as i64),
        ("a+tag@b.org", "HTTPS://Mixed.Case.org/Path", 4_102_444_800_000),
    ];
    for (email, aud, exp) in cases {
        let claims = parse_assertion(&make_assertion(email, aud, exp)).unwrap();
        assert_eq!(claims.email, email);
        assert_eq!(claims.origin, aud, "audience is returned as issued");
        assert_eq!(claims.expiration_millis(), exp);
    }
}

#[test]
fn fewer_than_four_segments_is_malformed() {
    let full = make_assertion("u@x.com", "http://site.example", 1);
    let parts: Vec<&str> = full.split('.').collect();
    for count in 0..4 {
        let input = parts[..count].join(".");
        match parse_assertion(&input) {
            Err(AssertionError::MalformedAssertion { segments }) => assert!(segments < 4),
            other => panic!("{count} segments gave {other:?}"),
        }
    }
}

#[test]
fn extra_segments_are_ignored() {
    let a = format!("{}.extra.more", make_assertion("u@x.com", "http://a.example", 5));
    assert_eq!(parse_assertion(&a).unwrap().email, "u@x.com");
}

#[test]
fn bad_segment_is_reported() {
    let good = make_assertion("u@x.com", "http://site.example", 1);
    let mut parts: Vec<String> = good.split('.').map(str::to_string).collect();
    parts[3] = encode_json(&serde_json::json!({"aud": 17, "exp": 1}));
    let err = parse_assertion(&parts.join(".")).unwrap_err();
    assert!(err.is_invalid_encoding());
    assert_eq!(err.segment(), Some(3));

    parts[1] = "%%%".to_string();
    let err = parse_assertion(&parts.join(".")).unwrap_err();
    assert_eq!(err.segment(), Some(1));
}

#[test]
fn parsing_is_pure() {
    let a = make_assertion("u@x.com", "http://site.example", 99);
    assert_eq!(parse_assertion(&a).unwrap(), parse_assertion(&a).unwrap());
}

#[test]
fn normalization_is_shared_between_forms() {
    let site = url("HTTP://Example.com");
    assert_eq!(
        normalize_origin("http://EXAMPLE.com").unwrap(),
        persona::assertion::normalize_url(&site)
    );
}
