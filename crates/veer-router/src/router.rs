//! Main router implementation.

use std::collections::HashMap;

use tracing::debug;

use crate::controller::ControllerRegistry;
use crate::error::{Result, RouterError};
use crate::method::MethodSet;
use crate::params::PathParams;
use crate::path::PathPattern;
use crate::target::Target;

/// A single route definition.
#[derive(Debug, Clone)]
pub struct Route<T> {
    /// Accepted HTTP methods.
    pub methods: MethodSet,
    /// Path pattern.
    pub pattern: PathPattern,
    /// Dispatch target.
    pub target: Target<T>,
    /// Optional middleware tag, transported to the match result and
    /// interpreted by the caller.
    pub middleware: Option<String>,
}

/// A per-route descriptor for [`Router::group`].
///
/// Supports both a builder-style construction and fixed-position tuple
/// conversions:
///
/// ```
/// use veer_router::{GroupRoute, Target};
///
/// let spec: GroupRoute<String> =
///     GroupRoute::new("GET", "/posts", Target::controller("Blog", "posts")).name("blog.posts");
/// let terse: GroupRoute<String> = ("GET", "/", Target::controller("Blog", "index")).into();
/// # let _ = (spec, terse);
/// ```
#[derive(Debug, Clone)]
pub struct GroupRoute<T> {
    method: String,
    path: String,
    target: Target<T>,
    name: Option<String>,
}

impl<T> GroupRoute<T> {
    /// Creates a descriptor with a method, a path relative to the group
    /// base, and a target.
    pub fn new(method: impl Into<String>, path: impl Into<String>, target: Target<T>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            target,
            name: None,
        }
    }

    /// Sets the route name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<T> From<(&str, &str, Target<T>)> for GroupRoute<T> {
    fn from((method, path, target): (&str, &str, Target<T>)) -> Self {
        Self::new(method, path, target)
    }
}

impl<T> From<(&str, &str, Target<T>, &str)> for GroupRoute<T> {
    fn from((method, path, target, name): (&str, &str, Target<T>, &str)) -> Self {
        Self::new(method, path, target).name(name)
    }
}

/// The outcome of a successful match, consumed by [`Router::run`].
///
/// Ephemeral: produced per incoming request, discarded after dispatch.
#[derive(Debug, Clone)]
pub struct MatchResult<T> {
    /// The matched route's target.
    pub target: Target<T>,
    /// Named captures extracted from the path, in declaration order.
    pub params: PathParams,
    /// The matched route's middleware tag, if any. The router transports
    /// the tag unmodified; interpreting it is the caller's business.
    pub middleware: Option<String>,
}

/// The router: route registration, name indexing, matching, and dispatch.
///
/// `T` is the opaque value produced by dispatched targets; the caller is
/// responsible for rendering it.
///
/// Routes are matched in registration order and the first route whose
/// method set and path pattern both match wins. Registration is expected to
/// complete before the first match call; the router provides no interior
/// locking.
///
/// # Example
///
/// ```
/// use veer_router::{Router, Target};
///
/// let router: Router<String> = Router::new()
///     .route("GET|POST", "/hi", Target::handler(|_| "Hi!".to_string()))
///     .named_route(
///         "hello",
///         "GET",
///         "/hello/(?<name>[a-zA-Z]+)",
///         Target::handler(|p| format!("Hello, {}!", p.get("name").unwrap_or("stranger"))),
///     )
///     .middleware("authenticated");
///
/// let matched = router.match_route("/hello/World", "GET").unwrap();
/// assert_eq!(matched.middleware.as_deref(), Some("authenticated"));
/// assert_eq!(router.run(&matched).unwrap(), "Hello, World!");
/// ```
pub struct Router<T> {
    /// Registered routes, in registration order.
    routes: Vec<Route<T>>,
    /// Route name → raw path template, for static reverse lookup.
    named_routes: HashMap<String, String>,
    /// Injected controller resolution port.
    controllers: ControllerRegistry<T>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Creates a new empty router.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            named_routes: HashMap::new(),
            controllers: ControllerRegistry::new(),
        }
    }

    /// Injects the controller registry used to resolve controller-shaped
    /// targets at dispatch time.
    #[must_use]
    pub fn controllers(mut self, registry: ControllerRegistry<T>) -> Self {
        self.controllers = registry;
        self
    }

    /// Adds a route.
    ///
    /// `method` is a single token or a pipe-delimited set (`"GET|POST"`),
    /// matched case-insensitively. `path` is a regex fragment anchored at
    /// both ends at match time; neither it nor the target is validated
    /// here.
    #[must_use]
    pub fn route(mut self, method: &str, path: &str, target: impl Into<Target<T>>) -> Self {
        self.push_route(None, method, path, target.into());
        self
    }

    /// Adds a route and records `name -> path` for [`generate_path`](Self::generate_path).
    ///
    /// The first registration of a name wins; re-registering it is a no-op
    /// on the name index (the route itself is still added).
    #[must_use]
    pub fn named_route(
        mut self,
        name: &str,
        method: &str,
        path: &str,
        target: impl Into<Target<T>>,
    ) -> Self {
        self.push_route(Some(name), method, path, target.into());
        self
    }

    /// Adds a GET route with a handler closure.
    #[must_use]
    pub fn get<F>(self, path: &str, handler: F) -> Self
    where
        F: Fn(&PathParams) -> T + Send + Sync + 'static,
    {
        self.route("GET", path, Target::handler(handler))
    }

    /// Adds a POST route with a handler closure.
    #[must_use]
    pub fn post<F>(self, path: &str, handler: F) -> Self
    where
        F: Fn(&PathParams) -> T + Send + Sync + 'static,
    {
        self.route("POST", path, Target::handler(handler))
    }

    /// Adds a PUT route with a handler closure.
    #[must_use]
    pub fn put<F>(self, path: &str, handler: F) -> Self
    where
        F: Fn(&PathParams) -> T + Send + Sync + 'static,
    {
        self.route("PUT", path, Target::handler(handler))
    }

    /// Adds a DELETE route with a handler closure.
    #[must_use]
    pub fn delete<F>(self, path: &str, handler: F) -> Self
    where
        F: Fn(&PathParams) -> T + Send + Sync + 'static,
    {
        self.route("DELETE", path, Target::handler(handler))
    }

    /// Adds a group of routes under a common base path.
    ///
    /// Each descriptor's final path is the base and the relative path,
    /// trimmed of surrounding slashes and spaces and joined with a single
    /// `/`. Descriptors are registered in the given order, preserving
    /// global registration order relative to surrounding [`route`](Self::route)
    /// calls.
    #[must_use]
    pub fn group<I, R>(mut self, base_path: &str, routes: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<GroupRoute<T>>,
    {
        for descriptor in routes {
            let descriptor = descriptor.into();
            let path = join_paths(base_path, &descriptor.path);
            self.push_route(
                descriptor.name.as_deref(),
                &descriptor.method,
                &path,
                descriptor.target,
            );
        }
        self
    }

    /// Tags the most recently added route with a middleware name.
    ///
    /// Re-tagging overwrites; there is no removal. The tag is an opaque
    /// string surfaced on the match result.
    ///
    /// # Panics
    ///
    /// Panics if no route has been registered yet.
    #[must_use]
    pub fn middleware(mut self, name: impl Into<String>) -> Self {
        let route = self
            .routes
            .last_mut()
            .expect("middleware() called before any route was registered");
        route.middleware = Some(name.into());
        self
    }

    /// Returns the raw path template registered under `name`.
    ///
    /// No parameter substitution is performed: for a named route whose
    /// template contains capture groups, the template is returned as-is.
    pub fn generate_path(&self, name: &str) -> Option<&str> {
        self.named_routes.get(name).map(String::as_str)
    }

    /// Returns the registered routes, in registration order.
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    /// Matches an incoming path and method against the registered routes.
    ///
    /// Routes are tried in registration order; the method set is checked
    /// first (cheap), then the anchored path pattern. The first route
    /// satisfying both wins. `None` is the routine no-route-matched
    /// outcome, not an error.
    pub fn match_route(&self, path: &str, method: &str) -> Option<MatchResult<T>> {
        for route in &self.routes {
            if !route.methods.matches(method) {
                continue;
            }
            if let Some(params) = route.pattern.match_path(path) {
                debug!(path, method, pattern = route.pattern.pattern(), "route matched");
                return Some(MatchResult {
                    target: route.target.clone(),
                    params,
                    middleware: route.middleware.clone(),
                });
            }
        }

        debug!(path, method, "no route matched");
        None
    }

    /// Dispatches a match result, returning whatever value the target
    /// produces.
    ///
    /// Handler targets are invoked with the extracted params (possibly
    /// empty). Controller-shaped targets are resolved through the injected
    /// registry: the controller is instantiated by its no-argument factory
    /// and the method dispatched by name. Action strings are split on `@`
    /// here, never earlier.
    pub fn run(&self, matched: &MatchResult<T>) -> Result<T> {
        match &matched.target {
            Target::Handler(handler) => Ok(handler(&matched.params)),
            Target::Controller { controller, method } => {
                self.dispatch(controller, method, &matched.params)
            }
            Target::Action(action) => {
                let (controller, method) = Target::<T>::split_action(action)?;
                self.dispatch(controller, method, &matched.params)
            }
        }
    }

    fn dispatch(&self, controller: &str, method: &str, params: &PathParams) -> Result<T> {
        let instance = self
            .controllers
            .instantiate(controller)
            .ok_or_else(|| RouterError::UnknownController(controller.to_string()))?;
        instance
            .invoke(method, params)
            .ok_or_else(|| RouterError::UnknownMethod {
                controller: controller.to_string(),
                method: method.to_string(),
            })
    }

    fn push_route(&mut self, name: Option<&str>, method: &str, path: &str, target: Target<T>) {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            if !self.named_routes.contains_key(name) {
                self.named_routes.insert(name.to_string(), path.to_string());
            }
        }
        self.routes.push(Route {
            methods: MethodSet::new(method),
            pattern: PathPattern::new(path),
            target,
            middleware: None,
        });
    }
}

/// Joins a group base path and a relative path with exactly one `/`.
fn join_paths(base: &str, path: &str) -> String {
    let base = base.trim_matches(|c| c == '/' || c == ' ');
    let path = path.trim_matches(|c| c == '/' || c == ' ');
    match (base.is_empty(), path.is_empty()) {
        (true, true) => "/".to_string(),
        (false, true) => format!("/{base}"),
        (true, false) => format!("/{path}"),
        (false, false) => format!("/{base}/{path}"),
    }
}
