use super::*;

fn resolve(path: &str) -> RouteMatch {
    let table = RouteTable::standard().unwrap();
    match table.resolve(path) {
        Some(matched) => matched,
        None => panic!("{path} should resolve"),
    }
}

#[test]
fn workout_id_is_forwarded_verbatim() {
    assert_eq!(workout_id(&resolve("/workout/42")), "42");
    assert_eq!(workout_id(&resolve("/workout/abc")), "abc");
}

#[test]
fn non_workout_routes_forward_no_id() {
    assert_eq!(workout_id(&resolve("/settings")), "");
    assert_eq!(workout_id(&resolve("/")), "");
}
