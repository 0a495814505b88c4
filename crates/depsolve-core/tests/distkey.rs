use depsolve_core::distkey::DistKey;

#[test]
fn test_parse_simple_distkey() {
    let key = DistKey::parse("django(1.8.3)").unwrap();
    assert_eq!(key.package(), "django");
    assert_eq!(key.version(), "1.8.3");
}

#[test]
fn test_parse_lowercases_package_only() {
    let key = DistKey::parse("Django(1.8RC1)").unwrap();
    assert_eq!(key.package(), "django");
    assert_eq!(key.version(), "1.8RC1");
}

#[test]
fn test_equality_is_case_insensitive_on_package() {
    assert_eq!(DistKey::new("Six", "1.9.0"), DistKey::new("six", "1.9.0"));
    assert_ne!(DistKey::new("six", "1.9.0"), DistKey::new("six", "1.9"));
}

#[test]
fn test_parse_version_with_dash() {
    let key = DistKey::parse("c(1-neg)").unwrap();
    assert_eq!(key.package(), "c");
    assert_eq!(key.version(), "1-neg");
}

#[test]
fn test_parse_rejects_malformed() {
    for input in ["django", "django()", "(1.0)", "django(1.0", "a(b(1))"] {
        assert!(DistKey::parse(input).is_err(), "{input} should not parse");
    }
}

#[test]
fn test_display_round_trips() {
    let key = DistKey::new("backports-abc", "0.4");
    assert_eq!(key.to_string(), "backports-abc(0.4)");
    assert_eq!(key.to_string().parse::<DistKey>().unwrap(), key);
}

#[test]
fn test_same_package() {
    let a = DistKey::new("pymongo", "2.5");
    let b = DistKey::new("PyMongo", "2.8");
    assert!(a.same_package(&b));
    assert!(a.is_package("PYMONGO"));
    assert!(!a.is_package("motor"));
}

#[test]
fn test_ordering_is_by_package_then_version() {
    let mut keys = vec![
        DistKey::new("x", "1"),
        DistKey::new("a", "3"),
        DistKey::new("c", "1"),
        DistKey::new("b", "1"),
    ];
    keys.sort();
    let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["a(3)", "b(1)", "c(1)", "x(1)"]);
}
