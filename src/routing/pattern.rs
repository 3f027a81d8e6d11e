//! Route path patterns.
//!
//! A pattern is a `/`-separated list of static segments and `:name`
//! parameter segments. Matching ignores empty segments on both sides, so a
//! trailing slash is tolerated and `/` is the zero-segment root. Static
//! segments compare ASCII case-insensitively; parameter segments capture the
//! raw segment text.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use super::RouteError;
use super::params::Params;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A compiled route pattern such as `/workout/:id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

impl PathPattern {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] when the pattern does not start
    /// with `/`, has an unnamed `:` segment, or repeats a parameter name.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason,
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut segments = Vec::new();
        for raw in split_segments(pattern) {
            let segment = match raw.strip_prefix(':') {
                Some("") => return Err(invalid("parameter segment needs a name")),
                Some(name) => {
                    let taken = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if taken {
                        return Err(invalid("parameter name used twice"));
                    }
                    Segment::Param(name.to_owned())
                }
                None => Segment::Static(raw.to_owned()),
            };
            segments.push(segment);
        }

        Ok(Self {
            source: pattern.to_owned(),
            segments,
        })
    }

    /// The pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match `path` against this pattern, returning the captured parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut params = Params::new();
        let mut parts = split_segments(path);

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Static(expected) => {
                    if !expected.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name.as_str(), part),
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }

    /// True when both patterns accept exactly the same set of paths.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Static(a), Segment::Static(b)) => a.eq_ignore_ascii_case(b),
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }
}
