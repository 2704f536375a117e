//! Integration test: process-wide transport configuration.
//!
//! Everything runs in one test function because the steps share the process
//! environment and the test harness runs functions on parallel threads.

use kruise_e2b::{configure_transport, Port, RedirectError, SandboxId, ENV_API_URL, ENV_DEBUG, ENV_DOMAIN};

#[test]
fn configure_transport_writes_environment_in_order() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    std::env::remove_var(ENV_DOMAIN);
    std::env::remove_var(ENV_API_URL);
    std::env::remove_var(ENV_DEBUG);

    // Missing domain: reported immediately, nothing written.
    match configure_transport(true) {
        Err(RedirectError::MissingConfiguration { key }) => assert_eq!(key, ENV_DOMAIN),
        other => panic!("expected MissingConfiguration, got {other:?}"),
    }
    assert!(std::env::var(ENV_API_URL).is_err(), "API URL must not be written on error");

    std::env::set_var(ENV_DOMAIN, "example.com");

    // Secure transport: https, debug untouched.
    let config = match configure_transport(true) {
        Ok(c) => c,
        Err(e) => panic!("unexpected error: {e}"),
    };
    assert_eq!(std::env::var(ENV_API_URL).ok().as_deref(), Some("https://example.com/kruise/api"));
    assert!(std::env::var(ENV_DEBUG).is_err(), "secure transport must not set debug");
    assert_eq!(
        config.get_host(&SandboxId::new("sbx123"), Port::new(3000)),
        "example.com/kruise/sbx123/3000"
    );

    // Insecure transport: http plus debug flag.
    let config = match configure_transport(false) {
        Ok(c) => c,
        Err(e) => panic!("unexpected error: {e}"),
    };
    assert_eq!(std::env::var(ENV_API_URL).ok().as_deref(), Some("http://example.com/kruise/api"));
    assert_eq!(std::env::var(ENV_DEBUG).ok().as_deref(), Some("true"));
    assert!(config.debug());
    assert_eq!(
        config.endpoint(SandboxId::new("sbx123")).get_host(Port::new(3000)),
        "example.com/kruise/sbx123/3000"
    );

    // Secure again with E2B_DEBUG already enabled: the flag is left in place
    // and the returned config reports it.
    let config = match configure_transport(true) {
        Ok(c) => c,
        Err(e) => panic!("unexpected error: {e}"),
    };
    assert_eq!(std::env::var(ENV_API_URL).ok().as_deref(), Some("https://example.com/kruise/api"));
    assert_eq!(std::env::var(ENV_DEBUG).ok().as_deref(), Some("true"));
    assert!(config.debug(), "config must agree with the environment the client reads");
}
