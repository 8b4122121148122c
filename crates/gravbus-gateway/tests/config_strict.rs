#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gravbus_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
pods:
  - id: "billing"
    filter:
      type_inclusiv: false # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
pods:
  - id: "billing"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.pods[0].id, "billing");
    assert!(cfg.pods[0].filter.type_inclusive);
    assert!(cfg.pods[0].filter.uuid_inclusive);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.gateway.max_body_bytes, 1024 * 1024);
}

#[test]
fn full_pod_filter_config() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
  max_body_bytes: 4096
pods:
  - id: "audit"
    filter:
      type_inclusive: false
      types: { "audit.write": true }
      uuids: { "abc": false }
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let f = &cfg.pods[0].filter;
    assert!(!f.type_inclusive);
    assert!(f.uuid_inclusive);
    assert_eq!(f.types.get("audit.write"), Some(&true));
    assert_eq!(f.uuids.get("abc"), Some(&false));
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 9000);
}

#[test]
fn rejects_bad_version() {
    let bad = "version: 2\npods:\n  - id: a\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, gravbus_core::GravError::UnsupportedVersion));
}

#[test]
fn rejects_empty_and_duplicate_pods() {
    let empty = "version: 1\npods: []\n";
    assert!(config::load_from_str(empty).is_err());

    let dup = "version: 1\npods:\n  - id: a\n  - id: a\n";
    let err = config::load_from_str(dup).expect_err("must fail");
    assert!(err.to_string().contains("duplicate pod id"));

    let blank = "version: 1\npods:\n  - id: \"  \"\n";
    assert!(config::load_from_str(blank).is_err());
}

#[test]
fn rejects_out_of_range_gateway_section() {
    let tiny = "version: 1\ngateway:\n  max_body_bytes: 10\npods:\n  - id: a\n";
    assert!(config::load_from_str(tiny).is_err());

    let bad_listen = "version: 1\ngateway:\n  listen: \"nowhere\"\npods:\n  - id: a\n";
    assert!(config::load_from_str(bad_listen).is_err());
}

#[test]
fn missing_file_is_io_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert!(matches!(err, gravbus_core::GravError::Io(_)));
}
