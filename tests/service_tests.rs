// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the configuration-access service.
//!
//! These tests exercise the public API end to end: construction with and
//! without a configuration, the three accessors, shared-mutation visibility,
//! and the construction diagnostic.

use std::sync::Arc;
use tokencfg::adapters::CaptureSink;
use tokencfg::prelude::*;

#[test]
fn test_read_returns_injected_value() {
    let config = ExampleConfig::with_example_option("custom-value").shared();
    let service = TokenConfigService::new(Some(config));

    let value = service.example_option().unwrap();
    assert_eq!(value.unwrap().as_str(), "custom-value");
}

#[test]
fn test_write_then_read_returns_new_value() {
    let config = ExampleConfig::with_example_option("custom-value").shared();
    let service = TokenConfigService::new(Some(config));

    service
        .set_example_option(ConfigValue::from("new-value"))
        .unwrap();

    assert_eq!(
        service.example_option().unwrap().unwrap().as_str(),
        "new-value"
    );
    assert_eq!(
        service.get_example_option().unwrap().unwrap().as_str(),
        "new-value"
    );
}

#[test]
fn test_absent_configuration_read_errors() {
    let service = TokenConfigService::new(None);

    let result = service.example_option();
    assert!(matches!(
        result.unwrap_err(),
        ConfigError::NotConfigured { .. }
    ));
}

#[test]
fn test_absent_configuration_write_errors() {
    let service = TokenConfigService::new(None);

    let result = service.set_example_option(ConfigValue::from("new-value"));
    assert!(matches!(
        result.unwrap_err(),
        ConfigError::NotConfigured { .. }
    ));
}

#[test]
fn test_empty_configuration_reads_as_none() {
    // A present configuration with no exampleOption set is not an error.
    let service = TokenConfigService::new(Some(ExampleConfig::new().shared()));

    assert_eq!(service.example_option().unwrap(), None);
    assert_eq!(service.get_example_option().unwrap(), None);
}

#[test]
fn test_accessor_equivalence_across_states() {
    let configured = TokenConfigService::new(Some(
        ExampleConfig::with_example_option("custom-value").shared(),
    ));
    assert_eq!(
        configured.get_example_option().unwrap(),
        configured.example_option().unwrap()
    );

    let empty = TokenConfigService::new(Some(ExampleConfig::new().shared()));
    assert_eq!(
        empty.get_example_option().unwrap(),
        empty.example_option().unwrap()
    );

    let unconfigured = TokenConfigService::new(None);
    assert!(unconfigured.get_example_option().is_err());
    assert!(unconfigured.example_option().is_err());
}

#[test]
fn test_mutation_visible_to_second_service() {
    let config = ExampleConfig::with_example_option("custom-value").shared();
    let first = TokenConfigService::new(Some(Arc::clone(&config)));
    let second = TokenConfigService::new(Some(config));

    first
        .set_example_option(ConfigValue::from("new-value"))
        .unwrap();

    assert_eq!(
        second.example_option().unwrap().unwrap().as_str(),
        "new-value"
    );
}

#[test]
fn test_mutation_visible_to_caller_reference() {
    let config = ExampleConfig::new().shared();
    let service = TokenConfigService::new(Some(Arc::clone(&config)));

    service
        .set_example_option(ConfigValue::from("new-value"))
        .unwrap();

    assert_eq!(
        config.read().unwrap().example_option,
        Some(ConfigValue::from("new-value"))
    );
}

#[test]
fn test_poisoned_lock_errors_on_both_accessors() {
    let config = ExampleConfig::with_example_option("custom-value").shared();
    let service = TokenConfigService::new(Some(Arc::clone(&config)));

    // Poison the shared lock by panicking while holding the write guard.
    let writer = Arc::clone(&config);
    let result = std::thread::spawn(move || {
        let _guard = writer.write().unwrap();
        panic!("poisoning the configuration lock");
    })
    .join();
    assert!(result.is_err());

    assert!(matches!(
        service.example_option().unwrap_err(),
        ConfigError::LockPoisoned { .. }
    ));
    assert!(matches!(
        service
            .set_example_option(ConfigValue::from("new-value"))
            .unwrap_err(),
        ConfigError::LockPoisoned { .. }
    ));
}

#[test]
fn test_construction_diagnostic_captured() {
    let sink = CaptureSink::new();
    let config = ExampleConfig::with_example_option("custom-value").shared();

    let _service = TokenConfigService::builder()
        .with_config(config)
        .with_sink(Box::new(sink.clone()))
        .build();

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].token, "EXAMPLE_CONFIG");
    assert_eq!(
        events[0].config,
        Some(ExampleConfig::with_example_option("custom-value"))
    );
}

#[test]
fn test_construction_under_tracing_subscriber() {
    // The default sink goes through tracing; make sure emitting under a real
    // subscriber works for both the configured and unconfigured paths.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let configured = TokenConfigService::new(Some(
        ExampleConfig::with_example_option("custom-value").shared(),
    ));
    assert!(configured.is_configured());

    let unconfigured = TokenConfigService::new(None);
    assert!(!unconfigured.is_configured());
}

#[test]
fn test_guarding_with_is_configured() {
    let service = TokenConfigService::new(None);

    // The accessors do not check presence themselves; the caller guards.
    if service.is_configured() {
        panic!("service should be unconfigured");
    }
    assert!(service.example_option().is_err());
}
