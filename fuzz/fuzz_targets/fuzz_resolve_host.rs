//! Fuzz target: gateway host resolution.
//!
//! Arbitrary ids and domains must never panic, and the instance hook must
//! always agree with the pre-connection hook.

#![no_main]

use std::sync::Arc;

use kruise_e2b::{HostResolver, KruiseResolver, Port, SandboxDomain, SandboxEndpoint, SandboxId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String, u16)| {
    let (id, domain, port) = input;
    let id = SandboxId::new(id);
    let domain = SandboxDomain::new(domain);
    let port = Port::new(port);

    let host = KruiseResolver.resolve_host(&id, &domain, port);
    let endpoint = SandboxEndpoint::new(id, domain, Arc::new(KruiseResolver));
    assert_eq!(endpoint.get_host(port), host);
});
