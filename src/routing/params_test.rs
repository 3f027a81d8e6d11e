use super::*;

#[test]
fn get_returns_inserted_value() {
    let mut params = Params::new();
    params.insert("id", "42");
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(params.get("missing"), None);
}

#[test]
fn insert_overwrites_existing_name() {
    let mut params = Params::new();
    params.insert("id", "1");
    params.insert("id", "2");
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("id"), Some("2"));
}

#[test]
fn iter_preserves_insertion_order() {
    let mut params = Params::new();
    params.insert("b", "2");
    params.insert("a", "1");
    let collected: Vec<_> = params.iter().collect();
    assert_eq!(collected, vec![("b", "2"), ("a", "1")]);
}

#[test]
fn default_is_empty() {
    assert!(Params::default().is_empty());
}
