use std::sync::Arc;
use std::thread;

use persona::{AssertionRegistry, Error, assertion::AssertionError};

use crate::helpers::*;

#[test]
fn lookup_ignores_origin_casing() {
    let registry = AssertionRegistry::new();
    let a = make_assertion("u@x.com", "HTTP://Example.com", 1);
    registry.register(&a).unwrap();

    assert_eq!(registry.lookup("u@x.com", &url("http://example.com")), Some(a.clone()));
    assert_eq!(registry.lookup("u@x.com", &url("http://EXAMPLE.COM/")), Some(a));
}

#[test]
fn lookup_is_exact_on_email() {
    let registry = AssertionRegistry::new();
    registry
        .register(&make_assertion("u@x.com", "http://site.example", 1))
        .unwrap();

    assert_eq!(registry.lookup("U@x.com", &url("http://site.example")), None);
}

#[test]
fn overwrite_keeps_latest_only() {
    let registry = AssertionRegistry::new();
    let first = make_assertion_with_nonce("u@x.com", "http://site.example", 1, "first");
    let second = make_assertion_with_nonce("u@x.com", "http://site.example", 2, "second");

    registry.register(&first).unwrap();
    registry.register(&second).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.lookup("u@x.com", &url("http://site.example")),
        Some(second)
    );
}

#[test]
fn registration_errors_are_typed() {
    let registry = AssertionRegistry::new();

    match registry.register("a.b") {
        Err(Error::Assertion(AssertionError::MalformedAssertion { segments: 2 })) => {}
        other => panic!("Unexpected result: {other:?}"),
    }

    let bad_origin = make_assertion("u@x.com", "site.example", 1);
    let err = registry.register(&bad_origin).unwrap_err();
    assert!(err.is_invalid_origin());
    assert_eq!(err.module(), "assertion");

    assert!(registry.is_empty());
}

#[test]
fn registry_is_shared_across_threads() {
    let registry = Arc::new(AssertionRegistry::new());
    let writers: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let email = format!("user{i}@x.com");
                registry
                    .register(&make_assertion(&email, "http://site.example", 1))
                    .unwrap()
            })
        })
        .collect();
    let mut emails: Vec<String> = writers.into_iter().map(|w| w.join().unwrap()).collect();
    emails.sort();

    assert_eq!(emails, ["user0@x.com", "user1@x.com", "user2@x.com", "user3@x.com"]);
    for email in &emails {
        assert!(registry.lookup(email, &url("http://site.example")).is_some());
    }
}

#[test]
fn separate_registries_are_isolated() {
    let one = AssertionRegistry::new();
    let two = AssertionRegistry::new();
    one.register(&make_assertion("u@x.com", "http://site.example", 1))
        .unwrap();

    assert!(two.lookup("u@x.com", &url("http://site.example")).is_none());
}
