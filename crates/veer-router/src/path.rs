//! Path pattern matching.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::params::PathParams;

/// A route path template, matched as an anchored regular expression.
///
/// The template is treated verbatim as a regex fragment, not a literal
/// string: parameter segments are written as named capture groups.
/// Matching anchors the template at both ends, so prefix matches never
/// count.
///
/// The template is not validated at registration. Compilation happens on
/// first use and is cached; a template that fails to compile is logged and
/// the route never matches.
///
/// # Example
///
/// ```
/// use veer_router::PathPattern;
///
/// let pattern = PathPattern::new("/hello/(?<name>[a-zA-Z]+)");
/// let params = pattern.match_path("/hello/World").unwrap();
/// assert_eq!(params.get("name"), Some("World"));
/// assert!(pattern.match_path("/hello/123").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// The original template string.
    pattern: String,
    /// Compiled anchored regex, built on first match attempt.
    /// `Some(None)` marks a template that failed to compile.
    compiled: OnceLock<Option<Regex>>,
}

impl PathPattern {
    /// Creates a pattern from a raw template string. No validation occurs.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            compiled: OnceLock::new(),
        }
    }

    /// Returns the original template string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Attempts to match a path against this pattern.
    ///
    /// Returns the named captures if the whole path matches. Positional
    /// (numbered) captures are discarded.
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let regex = self.compiled().as_ref()?;
        let caps = regex.captures(path)?;

        let mut params = PathParams::new();
        for name in regex.capture_names().flatten() {
            if let Some(value) = caps.name(name) {
                params.insert(name, value.as_str());
            }
        }

        Some(params)
    }

    fn compiled(&self) -> &Option<Regex> {
        self.compiled
            .get_or_init(|| match Regex::new(&format!("^{}$", self.pattern)) {
                Ok(regex) => Some(regex),
                Err(error) => {
                    warn!(pattern = %self.pattern, %error, "invalid route pattern, route will never match");
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_path() {
        let pattern = PathPattern::new("/users");
        assert!(pattern.match_path("/users").is_some());
        assert!(pattern.match_path("/posts").is_none());
    }

    #[test]
    fn test_anchored_at_both_ends() {
        let pattern = PathPattern::new("/test");
        assert!(pattern.match_path("/test/extra").is_none());
        assert!(pattern.match_path("/xtest").is_none());
        assert!(pattern.match_path("/test").is_some());
    }

    #[test]
    fn test_named_capture() {
        let pattern = PathPattern::new("/hello/(?<name>[a-zA-Z]+)");
        let params = pattern.match_path("/hello/World").unwrap();
        assert_eq!(params.get("name"), Some("World"));
    }

    #[test]
    fn test_character_class_excludes_digits() {
        let pattern = PathPattern::new("/hello/(?<name>[a-zA-Z]+)");
        assert!(pattern.match_path("/hello/123").is_none());
    }

    #[test]
    fn test_positional_captures_discarded() {
        let pattern = PathPattern::new("/posts/([0-9]{4})/(?<slug>[a-z-]+)");
        let params = pattern.match_path("/posts/2024/hello-world").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("slug"), Some("hello-world"));
    }

    #[test]
    fn test_multiple_captures_in_declaration_order() {
        let pattern = PathPattern::new("/archive/(?<year>[0-9]{4})/(?<month>[0-9]{2})");
        let params = pattern.match_path("/archive/2024/06").unwrap();
        let values: Vec<&str> = params.values().collect();
        assert_eq!(values, ["2024", "06"]);
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        let pattern = PathPattern::new("/broken/(?<unclosed");
        assert!(pattern.match_path("/broken/(?<unclosed").is_none());
        assert!(pattern.match_path("/anything").is_none());
    }

    #[test]
    fn test_raw_template_preserved() {
        let pattern = PathPattern::new("/hello/(?<name>[a-zA-Z]+)");
        assert_eq!(pattern.pattern(), "/hello/(?<name>[a-zA-Z]+)");
    }
}
