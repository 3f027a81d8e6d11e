use super::*;

fn standard() -> RouteTable {
    match RouteTable::standard() {
        Ok(table) => table,
        Err(e) => panic!("standard routes should compile: {e}"),
    }
}

#[test]
fn standard_table_keeps_declaration_order() {
    let table = standard();
    let patterns: Vec<_> = table.entries().map(|e| e.pattern).collect();
    assert_eq!(patterns, vec!["/", "/7frog", "/workout/:id", "/settings"]);
    assert_eq!(table.len(), 4);
}

#[test]
fn only_workout_route_forwards_params() {
    let forwarding: Vec<_> = ROUTES
        .iter()
        .filter(|e| e.forward_params)
        .map(|e| e.view)
        .collect();
    assert_eq!(forwarding, vec![ViewKind::WorkoutPlayer]);
}

#[test]
fn resolve_picks_first_matching_entry() {
    let entries = [
        RouteEntry {
            pattern: "/workout/:id",
            view: ViewKind::WorkoutPlayer,
            forward_params: true,
        },
        RouteEntry {
            pattern: "/workout/today",
            view: ViewKind::Settings,
            forward_params: false,
        },
    ];
    let table = RouteTable::new(&entries).unwrap();
    let matched = table.resolve("/workout/today").unwrap();
    assert_eq!(matched.view, ViewKind::WorkoutPlayer);
}

#[test]
fn non_forwarding_match_exposes_no_props() {
    let entries = [RouteEntry {
        pattern: "/circuit/:id",
        view: ViewKind::CircuitList,
        forward_params: false,
    }];
    let table = RouteTable::new(&entries).unwrap();
    let matched = table.resolve("/circuit/9").unwrap();
    assert_eq!(matched.params.get("id"), Some("9"));
    assert!(matched.props().is_empty());
}

#[test]
fn new_rejects_duplicate_patterns() {
    let entries = [
        RouteEntry {
            pattern: "/workout/:id",
            view: ViewKind::WorkoutPlayer,
            forward_params: true,
        },
        RouteEntry {
            pattern: "/workout/:name",
            view: ViewKind::Settings,
            forward_params: false,
        },
    ];
    let err = RouteTable::new(&entries).unwrap_err();
    assert_eq!(
        err,
        RouteError::DuplicatePattern {
            pattern: "/workout/:name".to_owned()
        }
    );
}

#[test]
fn new_propagates_pattern_errors() {
    let entries = [RouteEntry {
        pattern: "nope",
        view: ViewKind::Blank,
        forward_params: false,
    }];
    assert_eq!(
        RouteTable::new(&entries).unwrap_err().error_code(),
        "E_ROUTE_PATTERN"
    );
}

#[test]
fn empty_table_resolves_nothing() {
    let table = RouteTable::new(&[]).unwrap();
    assert!(table.is_empty());
    assert!(table.resolve("/").is_none());
}

#[test]
fn view_titles_are_distinct() {
    let titles: std::collections::HashSet<_> = ROUTES.iter().map(|e| e.view.title()).collect();
    assert_eq!(titles.len(), ROUTES.len());
}
