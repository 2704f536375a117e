//! Fuzz target: loading a connection config from an arbitrary domain value.

#![no_main]

use kruise_e2b::{ConnectionConfig, ENV_DOMAIN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, bool)| {
    let (domain, secure) = input;
    let lookup = |key: &str| (key == ENV_DOMAIN).then(|| domain.clone());
    match ConnectionConfig::from_lookup(secure, lookup) {
        Ok(config) => assert_eq!(config.debug(), !secure),
        Err(_) => assert!(domain.is_empty()),
    }
});
