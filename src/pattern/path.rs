use std::borrow::Cow;
use std::collections::HashSet;

use crate::params::ParamSet;

use super::PatternError;

/// One compiled pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must match a path segment byte for byte, case-sensitive.
    Literal(Box<str>),
    /// `:name`: consumes exactly one path segment.
    Param(Box<str>),
    /// `:name?`: consumes one path segment when one can be spared.
    OptionalParam(Box<str>),
    /// `*name` or a bare trailing `*`: consumes the whole remainder of the
    /// path, joined by `/`, possibly empty. Always the final segment.
    Wildcard(Box<str>),
}

/// A route path pattern compiled into segment descriptors.
///
/// Matching walks pattern and path segments in lockstep without
/// backtracking. The brace syntax (`{name}`, `{name?}`, `{name...}`) is
/// normalized to the colon/star syntax before compilation, so a single
/// matching engine exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: Box<str>,
    segments: Box<[Segment]>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let mut segments = Vec::new();
        let mut names = HashSet::new();
        for part in split(pattern) {
            if let Some(Segment::Wildcard(_)) = segments.last() {
                return Err(PatternError::WildcardNotLast {
                    pattern: pattern.to_string(),
                });
            }
            let part = normalize_braces(part);
            let segment = if let Some(name) = part.strip_prefix(':') {
                let (name, optional) = match name.strip_suffix('?') {
                    Some(name) => (name, true),
                    None => (name, false),
                };
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName {
                        pattern: pattern.to_string(),
                    });
                }
                if optional {
                    Segment::OptionalParam(name.into())
                } else {
                    Segment::Param(name.into())
                }
            } else if let Some(name) = part.strip_prefix('*') {
                let name = if name.is_empty() { "*" } else { name };
                Segment::Wildcard(name.into())
            } else {
                Segment::Literal(part.as_ref().into())
            };
            if let Segment::Param(name) | Segment::OptionalParam(name) | Segment::Wildcard(name) =
                &segment
            {
                if !names.insert(name.clone()) {
                    return Err(PatternError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
            }
            segments.push(segment);
        }
        Ok(Self {
            raw: pattern.into(),
            segments: segments.into_boxed_slice(),
        })
    }

    /// The pattern as registered, prefix included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Matches a request path, extracting parameters in declaration order.
    pub fn matches(&self, path: &str) -> Option<ParamSet> {
        let parts = split(path);
        let mut params = ParamSet::new();
        let mut pos = 0;
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(literal) => {
                    if parts.get(pos) != Some(&&**literal) {
                        return None;
                    }
                    pos += 1;
                }
                Segment::Param(name) => {
                    let part = parts.get(pos)?;
                    params.insert(name, *part);
                    pos += 1;
                }
                Segment::OptionalParam(name) => {
                    // Consume a segment whenever one is available, stepping
                    // aside only for literals still ahead; a present literal
                    // is never skipped and no backtracking is needed. A later
                    // required param gets no such protection and starves.
                    if parts.len() - pos > literal_arity(&self.segments[i + 1..]) {
                        params.insert(name, parts[pos]);
                        pos += 1;
                    }
                }
                Segment::Wildcard(name) => {
                    params.insert(name, parts[pos..].join("/"));
                    pos = parts.len();
                }
            }
        }
        if pos == parts.len() {
            Some(params)
        } else {
            None
        }
    }
}

/// Joins a scope prefix and a registered pattern into one full pattern.
pub(crate) fn join(prefix: &str, pattern: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let pattern = pattern.trim_start_matches('/');
    if pattern.is_empty() {
        if prefix.is_empty() {
            "/".to_string()
        } else {
            prefix.to_string()
        }
    } else {
        format!("{prefix}/{pattern}")
    }
}

/// Splits a pattern or request path into segments. A single trailing slash
/// is insignificant; repeated slashes yield empty segments that only an
/// empty literal can match.
fn split(path: &str) -> Vec<&str> {
    let path = if path.len() > 1 && path.ends_with('/') {
        &path[..path.len() - 1]
    } else {
        path
    };
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

/// The number of literal segments in the given pattern tail.
fn literal_arity(segments: &[Segment]) -> usize {
    segments
        .iter()
        .filter(|segment| matches!(segment, Segment::Literal(_)))
        .count()
}

/// Rewrites `{name}`, `{name?}` and `{name...}` to `:name`, `:name?` and
/// `*name`. Anything not brace-wrapped passes through untouched.
fn normalize_braces(part: &str) -> Cow<'_, str> {
    let inner = match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
        Some(inner) => inner,
        None => return Cow::Borrowed(part),
    };
    match inner.strip_suffix("...") {
        Some(name) => Cow::Owned(format!("*{name}")),
        None => Cow::Owned(format!(":{inner}")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pattern(raw: &str) -> PathPattern {
        PathPattern::parse(raw).unwrap()
    }

    fn matched(raw: &str, path: &str) -> Vec<(String, String)> {
        let params = pattern(raw).matches(path).expect("expected a match");
        let mut pairs: Vec<_> = params.to_map().into_iter().collect();
        pairs.sort();
        pairs
    }

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_literal_segments_match_byte_equal() {
        assert!(pattern("/hello/world").matches("/hello/world").is_some());
        assert!(pattern("/hello/world").matches("/hello/World").is_none());
        assert!(pattern("/hello/world").matches("/hello").is_none());
        assert!(pattern("/hello").matches("/hello/world").is_none());
        assert!(pattern("/").matches("/").is_some());
    }

    #[test]
    fn test_trailing_slash_is_insignificant_once() {
        assert!(pattern("/hello").matches("/hello/").is_some());
        assert!(pattern("/hello/").matches("/hello").is_some());
        assert!(pattern("/hello").matches("/hello//").is_none());
    }

    #[test]
    fn test_repeated_slashes_only_match_an_empty_literal() {
        assert!(pattern("/a/b").matches("/a//b").is_none());
        assert!(pattern("/a//b").matches("/a//b").is_some());
    }

    #[test]
    fn test_required_param() {
        assert_eq!(matched("/users/:id", "/users/123"), vec![pair("id", "123")]);
        assert!(pattern("/users/:id").matches("/users").is_none());
        assert!(pattern("/users/:id").matches("/users/123/extra").is_none());
    }

    #[test]
    fn test_optional_param() {
        assert_eq!(matched("/users/:id?", "/users"), vec![]);
        assert_eq!(matched("/users/:id?", "/users/42"), vec![pair("id", "42")]);
        assert!(pattern("/users/:id?").matches("/users/42/extra").is_none());
    }

    #[test]
    fn test_optional_param_never_starves_a_literal() {
        assert_eq!(matched("/a/:x?/b", "/a/b"), vec![]);
        assert_eq!(matched("/a/:x?/b", "/a/v/b"), vec![pair("x", "v")]);
        assert!(pattern("/a/:x?/b").matches("/a/v/c").is_none());
    }

    #[test]
    fn test_optional_param_takes_precedence_over_a_required_one() {
        assert_eq!(
            matched("/a/:x?/:y", "/a/v/w"),
            vec![pair("x", "v"), pair("y", "w")]
        );
        assert!(pattern("/a/:x?/:y").matches("/a/v").is_none());
    }

    #[test]
    fn test_greedy_wildcard() {
        assert_eq!(
            matched("/static/*filepath", "/static/js/a.js"),
            vec![pair("filepath", "js/a.js")]
        );
        assert_eq!(
            matched("/static/*filepath", "/static/"),
            vec![pair("filepath", "")]
        );
        assert_eq!(matched("/static/*", "/static/css/x.css"), vec![pair("*", "css/x.css")]);
    }

    #[test]
    fn test_brace_syntax_normalizes_to_colon_and_star() {
        assert_eq!(matched("/users/{id}", "/users/7"), vec![pair("id", "7")]);
        assert_eq!(matched("/users/{id?}", "/users"), vec![]);
        assert_eq!(
            matched("/files/{path...}", "/files/a/b"),
            vec![pair("path", "a/b")]
        );
    }

    #[test]
    fn test_extraction_order_is_left_to_right() {
        assert_eq!(
            matched("/:a/:b", "/one/two"),
            vec![pair("a", "one"), pair("b", "two")]
        );
    }

    #[test]
    fn test_duplicate_param_names_are_rejected() {
        assert_eq!(
            PathPattern::parse("/:id/:id"),
            Err(PatternError::DuplicateParam {
                pattern: "/:id/:id".to_string(),
                name: "id".to_string(),
            })
        );
    }

    #[test]
    fn test_non_trailing_wildcard_is_rejected() {
        assert_eq!(
            PathPattern::parse("/a/*rest/b"),
            Err(PatternError::WildcardNotLast {
                pattern: "/a/*rest/b".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_param_name_is_rejected() {
        assert_eq!(
            PathPattern::parse("/a/:"),
            Err(PatternError::EmptyParamName {
                pattern: "/a/:".to_string(),
            })
        );
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "/users"), "/users");
        assert_eq!(join("/api", "/users"), "/api/users");
        assert_eq!(join("/api/", "users"), "/api/users");
        assert_eq!(join("/api", ""), "/api");
        assert_eq!(join("", ""), "/");
    }
}
