#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gravbus_core::{Envelope, GravError, Message};
use gravbus_gateway::{config, pods::PodRegistry};

const CFG: &str = r#"
version: 1
pods:
  - id: "all"
  - id: "no-audit"
    filter:
      types: { "audit": false }
  - id: "audit-only"
    filter:
      type_inclusive: false
      types: { "audit": true }
"#;

fn registry() -> PodRegistry {
    let cfg = config::load_from_str(CFG).unwrap();
    PodRegistry::from_config(&cfg.pods)
}

#[test]
fn ids_are_sorted() {
    let reg = registry();
    assert_eq!(reg.ids(), vec!["all", "audit-only", "no-audit"]);
    assert_eq!(reg.len(), 3);
}

#[test]
fn admitting_applies_each_pod_filter() {
    let reg = registry();

    let audit = Envelope::new("audit", Vec::new());
    assert_eq!(reg.admitting(&audit), vec!["all", "audit-only"]);

    let order = Envelope::new("order", Vec::new());
    assert_eq!(reg.admitting(&order), vec!["all", "no-audit"]);
}

#[test]
fn runtime_mutation_through_registry_handle() {
    let reg = registry();
    let order = Envelope::new("order", Vec::new());

    reg.require("all").unwrap().filter_id(order.uuid(), false);
    assert_eq!(reg.admitting(&order), vec!["no-audit"]);

    // Other messages of the same type are unaffected.
    let other = Envelope::new("order", Vec::new());
    assert_eq!(reg.admitting(&other), vec!["all", "no-audit"]);
}

#[test]
fn unknown_pod_is_not_found() {
    let reg = registry();
    assert!(reg.get("ghost").is_none());
    let err = reg.require("ghost").unwrap_err();
    assert!(matches!(err, GravError::UnknownPod(ref p) if p == "ghost"));
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
}
