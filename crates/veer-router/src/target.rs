//! Route targets.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::params::PathParams;

/// A boxed handler closure invoked with the extracted path parameters.
pub type Handler<T> = Arc<dyn Fn(&PathParams) -> T + Send + Sync>;

/// What a route dispatches to, producing an opaque value `T`.
///
/// Four registration shapes are accepted, collapsed into three variants:
/// a handler closure, a controller+method descriptor (covering both the
/// mapping shape and the `(controller, method)` pair shape), and a lazy
/// `"Controller@method"` action string. The action string is kept unparsed
/// until dispatch — registration never validates.
pub enum Target<T> {
    /// A handler closure.
    Handler(Handler<T>),
    /// A controller name and method name, resolved through the registry at
    /// dispatch time.
    Controller {
        /// Registered controller name.
        controller: String,
        /// Method name dispatched on the instantiated controller.
        method: String,
    },
    /// A `"Controller@method"` action string, split at dispatch time.
    Action(String),
}

impl<T> Target<T> {
    /// Creates a handler target from a closure.
    pub fn handler<F>(f: F) -> Self
    where
        F: Fn(&PathParams) -> T + Send + Sync + 'static,
    {
        Self::Handler(Arc::new(f))
    }

    /// Creates a controller target from controller and method names.
    pub fn controller(controller: impl Into<String>, method: impl Into<String>) -> Self {
        Self::Controller {
            controller: controller.into(),
            method: method.into(),
        }
    }

    /// Splits an action string into its controller and method halves.
    ///
    /// Fails with [`RouterError::InvalidTarget`] when the `@` separator is
    /// missing or either half is empty.
    pub(crate) fn split_action(action: &str) -> Result<(&str, &str)> {
        match action.split_once('@') {
            Some((controller, method)) if !controller.is_empty() && !method.is_empty() => {
                Ok((controller, method))
            }
            _ => Err(RouterError::InvalidTarget(action.to_string())),
        }
    }
}

// Manual impl: `T` itself never needs to be `Clone`, the handler is shared
// behind an `Arc`.
impl<T> Clone for Target<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Handler(h) => Self::Handler(Arc::clone(h)),
            Self::Controller { controller, method } => Self::Controller {
                controller: controller.clone(),
                method: method.clone(),
            },
            Self::Action(action) => Self::Action(action.clone()),
        }
    }
}

impl<T> fmt::Debug for Target<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler(_) => f.write_str("Target::Handler"),
            Self::Controller { controller, method } => f
                .debug_struct("Target::Controller")
                .field("controller", controller)
                .field("method", method)
                .finish(),
            Self::Action(action) => f.debug_tuple("Target::Action").field(action).finish(),
        }
    }
}

/// The pair shape: `("Blog", "index")`.
impl<T> From<(&str, &str)> for Target<T> {
    fn from((controller, method): (&str, &str)) -> Self {
        Self::controller(controller, method)
    }
}

impl<T> From<(String, String)> for Target<T> {
    fn from((controller, method): (String, String)) -> Self {
        Self::Controller { controller, method }
    }
}

/// The action-string shape: `"Blog@index"`.
impl<T> From<&str> for Target<T> {
    fn from(action: &str) -> Self {
        Self::Action(action.to_string())
    }
}

impl<T> From<String> for Target<T> {
    fn from(action: String) -> Self {
        Self::Action(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_shape_converts_to_controller() {
        let target: Target<String> = ("Blog", "index").into();
        match target {
            Target::Controller { controller, method } => {
                assert_eq!(controller, "Blog");
                assert_eq!(method, "index");
            }
            other => panic!("unexpected target: {other:?}"),
        }
    }

    #[test]
    fn test_action_string_kept_unparsed() {
        let target: Target<String> = "Blog@index".into();
        assert!(matches!(target, Target::Action(ref a) if a == "Blog@index"));
    }

    #[test]
    fn test_split_action() {
        assert_eq!(
            Target::<String>::split_action("Blog@index").unwrap(),
            ("Blog", "index")
        );
    }

    #[test]
    fn test_split_action_rejects_malformed() {
        for action in ["Blog", "@index", "Blog@", "", "@"] {
            let err = Target::<String>::split_action(action).unwrap_err();
            assert_eq!(err, RouterError::InvalidTarget(action.to_string()));
        }
    }
}
