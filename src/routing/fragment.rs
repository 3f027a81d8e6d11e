//! Conversion between URL fragments and route paths.
//!
//! Routes live after the `#` in the URL (`https://host/#/workout/42`). A
//! canonical fragment always starts with `#/`; anything after a `?` or a
//! second `#` is not part of the route path.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

/// Route path encoded by a `location.hash` value.
pub fn path_from_hash(hash: &str) -> String {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    normalize_path(&raw[..end])
}

/// Ensure `path` starts with `/`; an empty path is the root.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Fragment href (`#/path`) for a route path.
pub fn href_for(path: &str) -> String {
    format!("#{}", normalize_path(path))
}

/// Whether `hash` already has the canonical `#/...` shape.
pub fn is_canonical(hash: &str) -> bool {
    hash.starts_with("#/")
}
