//! Controller resolution.
//!
//! Controller-shaped targets carry names, not code. Resolving a name to an
//! instance and a method to a call is the job of the [`ControllerRegistry`],
//! a registry of no-argument factories built at startup and injected into
//! the router. This replaces runtime reflection with an explicit port.

use std::collections::HashMap;

use crate::params::PathParams;

/// Method dispatch by name on a controller instance.
///
/// Returning `None` means the controller exposes no method by that name;
/// the router reports this as [`RouterError::UnknownMethod`](crate::RouterError::UnknownMethod).
///
/// # Example
///
/// ```
/// use veer_router::{Controller, PathParams};
///
/// #[derive(Default)]
/// struct Blog;
///
/// impl Controller<String> for Blog {
///     fn invoke(&self, method: &str, params: &PathParams) -> Option<String> {
///         match method {
///             "index" => Some("all posts".to_string()),
///             "show" => Some(format!("post {}", params.get("id")?)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Controller<T> {
    /// Invokes `method` with the extracted path parameters.
    fn invoke(&self, method: &str, params: &PathParams) -> Option<T>;
}

/// A no-argument controller constructor.
pub type ControllerFactory<T> = Box<dyn Fn() -> Box<dyn Controller<T>> + Send + Sync>;

/// Maps controller names to factories.
///
/// Built once at startup with the consuming [`register`](Self::register)
/// builder, then injected into [`Router::controllers`](crate::Router::controllers).
#[derive(Default)]
pub struct ControllerRegistry<T> {
    factories: HashMap<String, ControllerFactory<T>>,
}

impl<T> ControllerRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory under a controller name.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let registry = ControllerRegistry::new()
    ///     .register("Blog", || Box::new(Blog::default()));
    /// ```
    #[must_use]
    pub fn register<F, C>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: Controller<T> + 'static,
    {
        self.factories
            .insert(name.into(), Box::new(move || Box::new(factory())));
        self
    }

    /// Returns true if a controller is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Instantiates the controller registered under `name`.
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn Controller<T>>> {
        self.factories.get(name).map(|factory| factory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Echo;

    impl Controller<String> for Echo {
        fn invoke(&self, method: &str, _params: &PathParams) -> Option<String> {
            (method == "say").then(|| "echo".to_string())
        }
    }

    #[test]
    fn test_register_and_instantiate() {
        let registry = ControllerRegistry::new().register("Echo", Echo::default);
        assert!(registry.contains("Echo"));
        assert!(!registry.contains("Other"));

        let instance = registry.instantiate("Echo").unwrap();
        assert_eq!(
            instance.invoke("say", &PathParams::new()),
            Some("echo".to_string())
        );
        assert_eq!(instance.invoke("shout", &PathParams::new()), None);
    }

    #[test]
    fn test_instantiate_unknown_controller() {
        let registry: ControllerRegistry<String> = ControllerRegistry::new();
        assert!(registry.instantiate("Missing").is_none());
    }
}
