//! Envelope decode vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{DateTime, Utc};

use gravbus_core::{Envelope, Message};

use vector_loader::load;

#[test]
fn envelope_vectors() {
    let files = [
        "envelope_full.json",
        "envelope_sparse.json",
        "envelope_null_data.json",
        "envelope_null_meta_fields.json",
        "envelope_null_sections.json",
        "envelope_bad_json.json",
        "envelope_bad_uuid_shape.json",
        "envelope_bad_base64.json",
        "envelope_bad_timestamp.json",
        "envelope_not_object.json",
    ];

    for f in files {
        let v = load(f);
        let res = Envelope::from_bytes(v.raw.as_bytes());

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.client_code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let env = res.expect("expected ok envelope");
        let ex = v.expect.expect("missing expect block");
        let ts: DateTime<Utc> = ex.timestamp.parse().unwrap();

        assert_eq!(env.uuid(), ex.uuid, "vector={}", v.description);
        assert_eq!(env.parent_id(), ex.parent_id, "vector={}", v.description);
        assert_eq!(env.response_to(), ex.response_to, "vector={}", v.description);
        assert_eq!(env.msg_type(), ex.msg_type, "vector={}", v.description);
        assert_eq!(env.timestamp(), ts, "vector={}", v.description);
        assert_eq!(env.data(), ex.data_utf8.as_bytes(), "vector={}", v.description);
    }
}

#[test]
fn unmarshal_replaces_every_field() {
    let v = load("envelope_sparse.json");
    let mut env = Envelope::with_parent_id("old", "parent", b"payload".to_vec());
    env.unmarshal(v.raw.as_bytes()).unwrap();

    assert_eq!(env.uuid(), "abc");
    assert_eq!(env.msg_type(), "X");
    // Not partially merged: members missing on the wire are reset.
    assert_eq!(env.parent_id(), "");
    assert!(env.data().is_empty());
}

#[test]
fn sparse_envelope_remarshals_zero_timestamp() {
    let v = load("envelope_sparse.json");
    let env = Envelope::from_bytes(v.raw.as_bytes()).unwrap();

    let wire: serde_json::Value = serde_json::from_slice(&env.marshal().unwrap()).unwrap();
    assert_eq!(wire["meta"]["timestamp"], "0001-01-01T00:00:00Z");
    assert_eq!(wire["meta"]["parent_id"], "");
    assert_eq!(wire["payload"]["data"], "");
}

#[test]
fn null_uuid_is_empty_not_an_error() {
    let env = Envelope::from_bytes(br#"{"meta":{"uuid":null,"msg_type":"X"}}"#).unwrap();
    assert_eq!(env.uuid(), "");
    assert_eq!(env.msg_type(), "X");
}
