//! Blog Routing Example
//!
//! Demonstrates the full routing flow: register routes (closures,
//! controllers, a named and middleware-tagged route), match simulated
//! requests, branch on the middleware tag, and dispatch.
//!
//! Run with: cargo run --example blog

use veer_router::{Controller, ControllerRegistry, PathParams, Router, Target};

#[derive(Default)]
struct Welcome;

impl Controller<String> for Welcome {
    fn invoke(&self, method: &str, _params: &PathParams) -> Option<String> {
        match method {
            "say_hello" => Some("Welcome!".to_string()),
            _ => None,
        }
    }
}

fn main() {
    let registry = ControllerRegistry::new().register("Welcome", Welcome::default);

    let router: Router<String> = Router::new()
        .controllers(registry)
        .route("GET", "/", Target::controller("Welcome", "say_hello"))
        .named_route("hi", "GET|POST", "/hi", Target::handler(|_| "Hi!".to_string()))
        .named_route(
            "say_hello",
            "GET",
            "/hello/(?<name>[a-zA-Z]+)",
            Target::handler(|p| format!("Hello, {}!", p.get("name").unwrap_or("stranger"))),
        )
        .middleware("authenticated");

    let session_authenticated = true;

    for (path, method) in [
        ("/", "GET"),
        ("/hi", "POST"),
        ("/hello/World", "GET"),
        ("/hello/123", "GET"),
        ("/nowhere", "GET"),
    ] {
        print!("{method} {path} -> ");

        let Some(matched) = router.match_route(path, method) else {
            println!("404 NOT FOUND");
            continue;
        };

        // The router only transports the tag; policy lives here.
        if let Some(tag) = matched.middleware.as_deref() {
            let granted = match tag {
                "authenticated" => session_authenticated,
                _ => false,
            };
            if !granted {
                println!("401 Access not granted");
                continue;
            }
        }

        match router.run(&matched) {
            Ok(body) => println!("200 {body}"),
            Err(error) => println!("500 {error}"),
        }
    }

    println!("named route 'hi' -> {:?}", router.generate_path("hi"));
}
