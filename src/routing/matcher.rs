//! Route matching module
//!
//! Matches split request paths against method + pattern entries.
//! Patterns are written as `courts/{id}/slots`: a literal segment must match
//! exactly, `{id}` only matches ASCII digits and any other `{name}` matches
//! a single arbitrary segment. A trailing `{*}` absorbs whatever follows,
//! including nothing.

use hyper::Method;

/// One segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// Digit-only segment
    Id,
    /// Any single segment
    Param,
    /// Zero or more trailing segments, never captured
    Rest,
}

impl Segment {
    fn matches(&self, segment: &str) -> bool {
        match self {
            Self::Literal(lit) => lit == segment,
            Self::Id => is_digits(segment),
            Self::Param | Self::Rest => true,
        }
    }

    const fn captures(&self) -> bool {
        matches!(self, Self::Id | Self::Param)
    }
}

/// Parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .into_iter()
            .map(|seg| match seg {
                "{id}" => Segment::Id,
                "{*}" => Segment::Rest,
                s if s.starts_with('{') && s.ends_with('}') => Segment::Param,
                s => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Match a split path, returning the captured segments on success
    pub fn matches(&self, path: &[&str]) -> Option<RouteParams> {
        let (fixed, open_ended) = match self.segments.split_last() {
            Some((Segment::Rest, fixed)) => (fixed, true),
            _ => (self.segments.as_slice(), false),
        };
        let count_ok = if open_ended {
            path.len() >= fixed.len()
        } else {
            path.len() == fixed.len()
        };
        if !count_ok {
            return None;
        }

        let mut params = RouteParams::default();
        for (pattern, segment) in fixed.iter().zip(path) {
            if !pattern.matches(segment) {
                return None;
            }
            if pattern.captures() {
                params.values.push((*segment).to_string());
            }
        }
        Some(params)
    }
}

/// Segments captured by `{...}` placeholders, in pattern order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<String>,
}

impl RouteParams {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Numeric value of a captured segment; `None` if absent or out of range
    pub fn id(&self, index: usize) -> Option<u64> {
        self.get(index).and_then(|v| v.parse().ok())
    }
}

/// A single table entry
#[derive(Debug)]
pub struct Route<H> {
    pub method: Method,
    pub pattern: PathPattern,
    pub handler: H,
}

/// Ordered route table; the first matching entry wins
#[derive(Debug)]
pub struct RouteTable<H> {
    routes: Vec<Route<H>>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn route(mut self, method: Method, pattern: &str, handler: H) -> Self {
        self.routes.push(Route {
            method,
            pattern: PathPattern::parse(pattern),
            handler,
        });
        self
    }

    /// Find the first route for the method whose pattern matches the path
    pub fn find(&self, method: &Method, path: &[&str]) -> Option<(&H, RouteParams)> {
        self.routes
            .iter()
            .filter(|route| route.method == *method)
            .find_map(|route| route.pattern.matches(path).map(|p| (&route.handler, p)))
    }
}

/// Strip leading/trailing slashes and split into segments
///
/// The root path yields no segments; inner empty segments are kept.
pub fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Non-empty and ASCII digits only
pub fn is_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::new()
            .route(Method::GET, "/", "root")
            .route(Method::GET, "courts", "list")
            .route(Method::GET, "courts/types", "types")
            .route(Method::GET, "courts/{id}", "court")
            .route(Method::GET, "courts/{id}/slots", "slots")
            .route(Method::GET, "auth/{action}/{*}", "auth")
            .route(Method::GET, "admin/dashboard/{*}", "dashboard")
            .route(Method::POST, "courts", "create")
    }

    #[test]
    fn test_split_path() {
        assert!(split_path("/").is_empty());
        assert!(split_path("").is_empty());
        assert_eq!(split_path("/courts/1/slots/"), vec!["courts", "1", "slots"]);
        assert_eq!(split_path("//courts//1"), vec!["courts", "", "1"]);
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("42"));
        assert!(!is_digits(""));
        assert!(!is_digits("4a"));
        assert!(!is_digits("-1"));
    }

    #[test]
    fn test_literal_wins_by_order() {
        let t = table();
        let (h, params) = t.find(&Method::GET, &["courts", "types"]).unwrap();
        assert_eq!(*h, "types");
        assert_eq!(params, RouteParams::default());
    }

    #[test]
    fn test_id_segment_requires_digits() {
        let t = table();
        let (h, params) = t.find(&Method::GET, &["courts", "12"]).unwrap();
        assert_eq!(*h, "court");
        assert_eq!(params.id(0), Some(12));
        assert!(t.find(&Method::GET, &["courts", "abc"]).is_none());
    }

    #[test]
    fn test_exact_segment_count() {
        let t = table();
        assert_eq!(*t.find(&Method::GET, &["courts", "3", "slots"]).unwrap().0, "slots");
        assert!(t.find(&Method::GET, &["courts", "3", "slots", "x"]).is_none());
        assert_eq!(*t.find(&Method::GET, &[]).unwrap().0, "root");
    }

    #[test]
    fn test_method_filter() {
        let t = table();
        assert_eq!(*t.find(&Method::POST, &["courts"]).unwrap().0, "create");
        assert!(t.find(&Method::DELETE, &["courts"]).is_none());
    }

    #[test]
    fn test_param_captures_any_segment() {
        let t = table();
        let (_, params) = t.find(&Method::GET, &["auth", "login"]).unwrap();
        assert_eq!(params.get(0), Some("login"));
        assert_eq!(params.id(0), None);
    }

    #[test]
    fn test_rest_absorbs_trailing_segments() {
        let t = table();
        assert_eq!(*t.find(&Method::GET, &["admin", "dashboard"]).unwrap().0, "dashboard");
        assert_eq!(
            *t.find(&Method::GET, &["admin", "dashboard", "x", "y"]).unwrap().0,
            "dashboard"
        );
        let (_, params) = t.find(&Method::GET, &["auth", "login", "x"]).unwrap();
        assert_eq!(params.get(0), Some("login"));
        assert_eq!(params.get(1), None);
        assert!(t.find(&Method::GET, &["auth"]).is_none());
    }

    #[test]
    fn test_id_overflow_is_none() {
        let t = table();
        let (_, params) = t
            .find(&Method::GET, &["courts", "99999999999999999999999"])
            .unwrap();
        assert_eq!(params.id(0), None);
    }
}
