use depsolve_core::candidate::CandidateSet;
use depsolve_core::distkey::DistKey;

#[test]
fn test_with_leaves_original_untouched() {
    let base = CandidateSet::new().with(DistKey::new("x", "1"));
    let extended = base.with(DistKey::new("b", "2"));
    assert_eq!(base.len(), 1);
    assert_eq!(extended.len(), 2);
    assert!(extended.contains(&DistKey::new("b", "2")));
    assert!(!base.contains(&DistKey::new("b", "2")));
}

#[test]
fn test_find_package() {
    let set: CandidateSet = vec![DistKey::new("x", "1"), DistKey::new("b", "2")].into();
    assert_eq!(set.find_package("B"), Some(&DistKey::new("b", "2")));
    assert_eq!(set.find_package("c"), None);
}

#[test]
fn test_order_is_insertion_order() {
    let set: CandidateSet = [DistKey::new("x", "1"), DistKey::new("c", "1"), DistKey::new("a", "3")]
        .into_iter()
        .collect();
    let order: Vec<String> = set.iter().map(ToString::to_string).collect();
    assert_eq!(order, vec!["x(1)", "c(1)", "a(3)"]);
    let sorted: Vec<String> = set.sorted().iter().map(ToString::to_string).collect();
    assert_eq!(sorted, vec!["a(3)", "c(1)", "x(1)"]);
}

#[test]
fn test_display() {
    let set: CandidateSet = vec![DistKey::new("x", "1"), DistKey::new("b", "2")].into();
    assert_eq!(set.to_string(), "[x(1), b(2)]");
    assert_eq!(CandidateSet::new().to_string(), "[]");
}
