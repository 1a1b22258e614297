//! # veer-router
//!
//! A request-routing library with regex path parameters.
//!
//! This crate provides:
//! - Method-set routing (`"GET"`, `"GET|POST"`), matched case-insensitively
//! - Path patterns as anchored regex fragments with named capture groups
//! - First-match-wins matching in registration order
//! - Route groups with a common base path
//! - Named routes for static reverse lookup
//! - Middleware name tags, transported to the caller uninterpreted
//! - Dispatch to handler closures or registry-resolved controllers
//!
//! ## Quick Start
//!
//! ```
//! use veer_router::{Router, Target};
//!
//! let router: Router<String> = Router::new()
//!     .route("GET|POST", "/hi", Target::handler(|_| "Hi!".to_string()))
//!     .route(
//!         "GET",
//!         "/hello/(?<name>[a-zA-Z]+)",
//!         Target::handler(|p| format!("Hello, {}!", p.get("name").unwrap_or(""))),
//!     );
//!
//! let matched = router.match_route("/hello/World", "GET").unwrap();
//! assert_eq!(router.run(&matched).unwrap(), "Hello, World!");
//! ```
//!
//! ## Path Parameters
//!
//! Path patterns are regular-expression fragments, anchored at both ends at
//! match time. Parameter segments are named capture groups; only named
//! captures are extracted:
//!
//! ```ignore
//! router.route("GET", "/posts/(?<year>[0-9]{4})/(?<slug>[a-z-]+)", target)
//! ```
//!
//! ## Controllers
//!
//! Targets can name a controller instead of carrying a closure, in three
//! equivalent registration shapes:
//!
//! ```ignore
//! router
//!     .route("GET", "/posts", Target::controller("Blog", "index"))
//!     .route("GET", "/authors", ("Blog", "authors"))
//!     .route("GET", "/about", "Pages@about");
//! ```
//!
//! Controller names are resolved through a [`ControllerRegistry`] injected
//! at construction; resolution failures surface as [`RouterError`] values
//! from [`Router::run`].
//!
//! ## Middleware Tags
//!
//! A route can carry one opaque middleware name. The router only transports
//! it from registration to the match result; interpreting the tag (auth,
//! sessions, ...) is the caller's concern:
//!
//! ```ignore
//! let router = router
//!     .route("GET", "/admin", "Admin@index")
//!     .middleware("authenticated");
//!
//! if let Some(matched) = router.match_route(path, method) {
//!     if matched.middleware.as_deref() == Some("authenticated") {
//!         // enforce the policy, e.g. reject with 401
//!     }
//!     let body = router.run(&matched)?;
//! }
//! ```

mod controller;
mod error;
mod method;
mod params;
mod path;
mod router;
mod target;

pub use controller::{Controller, ControllerFactory, ControllerRegistry};
pub use error::{Result, RouterError};
pub use method::MethodSet;
pub use params::PathParams;
pub use path::PathPattern;
pub use router::{GroupRoute, MatchResult, Route, Router};
pub use target::{Handler, Target};
