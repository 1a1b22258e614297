//! HTTP method sets.

use std::fmt;

/// A set of HTTP method tokens a route accepts.
///
/// Parsed from a pipe-delimited string such as `"GET"` or `"get|post"`.
/// Tokens are normalized to upper-case at registration; an incoming method
/// matches if it equals one of the tokens, case-insensitively. No fixed
/// method vocabulary is enforced: custom tokens route like any other.
///
/// # Example
///
/// ```
/// use veer_router::MethodSet;
///
/// let methods = MethodSet::new("get|post");
/// assert!(methods.matches("POST"));
/// assert!(methods.matches("get"));
/// assert!(!methods.matches("DELETE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet {
    tokens: Vec<String>,
}

impl MethodSet {
    /// Parses a pipe-delimited method specification.
    ///
    /// Empty tokens (`"GET|"`, `"|"`) are discarded; surrounding whitespace
    /// on each token is trimmed.
    pub fn new(spec: &str) -> Self {
        let tokens = spec
            .split('|')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_uppercase)
            .collect();
        Self { tokens }
    }

    /// Returns true if the incoming method equals one of the tokens,
    /// ignoring case.
    pub fn matches(&self, method: &str) -> bool {
        self.tokens.iter().any(|t| t.eq_ignore_ascii_case(method))
    }

    /// Returns the normalized tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_method() {
        let methods = MethodSet::new("GET");
        assert!(methods.matches("GET"));
        assert!(methods.matches("get"));
        assert!(!methods.matches("POST"));
    }

    #[test]
    fn test_alternation() {
        let methods = MethodSet::new("GET|POST");
        assert!(methods.matches("get"));
        assert!(methods.matches("Post"));
        assert!(!methods.matches("PUT"));
    }

    #[test]
    fn test_normalized_storage() {
        let methods = MethodSet::new("get|post");
        assert_eq!(methods.tokens(), ["GET", "POST"]);
        assert_eq!(methods.to_string(), "GET|POST");
    }

    #[test]
    fn test_no_partial_token_match() {
        let methods = MethodSet::new("GET");
        assert!(!methods.matches("GE"));
        assert!(!methods.matches("GETX"));
    }

    #[test]
    fn test_empty_tokens_discarded() {
        let methods = MethodSet::new("GET| |");
        assert_eq!(methods.tokens(), ["GET"]);
    }
}
