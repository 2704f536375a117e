//! Fuzz target: classifying arbitrary gateway request paths.

#![no_main]

use kruise_e2b::{route, GatewayTarget};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|path: &str| {
    if let Ok(GatewayTarget::Sandbox(route)) = route(path) {
        assert!(route.path.starts_with('/'));
    }
});
