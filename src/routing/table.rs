//! The application route table.
//!
//! DESIGN
//! ======
//! Routes are a static ordered list of immutable records. Resolution walks
//! the list and returns the first entry whose pattern accepts the path; no
//! fallback entry is registered, so unknown paths resolve to nothing.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::RouteError;
use super::params::Params;
use super::pattern::PathPattern;

/// Views the router can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Empty landing view.
    Blank,
    CircuitList,
    /// Receives the `id` route parameter as an input property.
    WorkoutPlayer,
    Settings,
}

impl ViewKind {
    /// Document title shown while this view is active.
    pub fn title(self) -> &'static str {
        match self {
            Self::Blank => "Circuit Trainer",
            Self::CircuitList => "Circuits",
            Self::WorkoutPlayer => "Workout",
            Self::Settings => "Settings",
        }
    }
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub view: ViewKind,
    /// Whether captured parameters are passed to the view as props.
    pub forward_params: bool,
}

/// The routes registered at startup, in match order.
pub const ROUTES: [RouteEntry; 4] = [
    RouteEntry {
        pattern: "/",
        view: ViewKind::Blank,
        forward_params: false,
    },
    RouteEntry {
        pattern: "/7frog",
        view: ViewKind::CircuitList,
        forward_params: false,
    },
    RouteEntry {
        pattern: "/workout/:id",
        view: ViewKind::WorkoutPlayer,
        forward_params: true,
    },
    RouteEntry {
        pattern: "/settings",
        view: ViewKind::Settings,
        forward_params: false,
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
struct CompiledRoute {
    entry: RouteEntry,
    pattern: PathPattern,
}

/// Route entries with their compiled patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

/// Result of resolving a path against the [`RouteTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: ViewKind,
    pub pattern: &'static str,
    pub params: Params,
    forward_params: bool,
}

impl RouteMatch {
    /// Parameters handed to the view: the captured params for forwarding
    /// routes, nothing otherwise.
    pub fn props(&self) -> Params {
        if self.forward_params {
            self.params.clone()
        } else {
            Params::new()
        }
    }
}

impl RouteTable {
    /// Compile `entries` into a table, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] for a malformed pattern and
    /// [`RouteError::DuplicatePattern`] when two entries accept the same paths.
    pub fn new(entries: &[RouteEntry]) -> Result<Self, RouteError> {
        let mut routes: Vec<CompiledRoute> = Vec::with_capacity(entries.len());
        for entry in entries {
            let pattern = PathPattern::parse(entry.pattern)?;
            if routes.iter().any(|r| r.pattern.overlaps(&pattern)) {
                return Err(RouteError::DuplicatePattern {
                    pattern: entry.pattern.to_owned(),
                });
            }
            routes.push(CompiledRoute {
                entry: *entry,
                pattern,
            });
        }
        Ok(Self { routes })
    }

    /// The application's four routes.
    ///
    /// # Errors
    ///
    /// Fails only if [`ROUTES`] itself is malformed.
    pub fn standard() -> Result<Self, RouteError> {
        Self::new(&ROUTES)
    }

    /// First route, in declaration order, whose pattern accepts `path`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            route.pattern.matches(path).map(|params| RouteMatch {
                view: route.entry.view,
                pattern: route.entry.pattern,
                params,
                forward_params: route.entry.forward_params,
            })
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().map(|route| &route.entry)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
