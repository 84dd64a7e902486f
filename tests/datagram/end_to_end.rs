//! Serialize → encrypt → persist → decrypt → deserialize.

use std::sync::Arc;
use std::thread;

use skiff_datagram::{
    create_json_wrapper_datagram, decode_container, encode_container, generate_key, open,
    satisfies, seal, Aes256GcmCipher, AliasData, Datagram, DatagramError, DatagramRegistry,
    DocumentDataDatagram, JsonDatagram, SymmetricCipher,
};

// ============================================================================
// Helpers
// ============================================================================

fn cipher() -> Aes256GcmCipher {
    let key = generate_key().expect("key");
    Aes256GcmCipher::new(&key[..]).expect("cipher")
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn hello_world_through_json_wrapper() {
    let c = cipher();
    let dg = create_json_wrapper_datagram::<String>("ddl://test/Greeting");

    let plaintext = dg.serialize(&"hello world".to_string()).unwrap();
    let ciphertext = c.encrypt(&plaintext, b"").unwrap();
    let decrypted = c.decrypt(&ciphertext, b"").unwrap();

    assert_eq!(dg.deserialize(&decrypted, dg.version()).unwrap(), "hello world");
}

#[test]
fn sealed_container_survives_persistence() {
    let c = cipher();
    let dg = DocumentDataDatagram::new();
    let payload = r#"{"type":"doc","content":[]}"#.to_string();

    let stored = encode_container(&seal(&dg, &payload, &c).unwrap()).unwrap();
    let container = decode_container(&stored).unwrap();

    assert_eq!(container.version, "0.2.0");
    assert_eq!(open(&dg, &container, &c).unwrap(), payload);
}

#[test]
fn registry_gates_before_open() {
    let registry = DatagramRegistry::standard();
    let c = cipher();
    let dg = registry
        .get::<DocumentDataDatagram>("ddl://skiff/DocumentDataDatagram")
        .unwrap();
    let container = seal(dg, &"SGVsbG8=".to_string(), &c).unwrap();

    assert!(satisfies(&container.version, dg.version_constraint().as_str()));
    registry
        .check_readable(&container.type_name, &container.version)
        .unwrap();
    assert_eq!(open(dg, &container, &c).unwrap(), "SGVsbG8=");
}

#[test]
fn alias_data_cannot_be_opened_as_document() {
    let registry = DatagramRegistry::standard();
    let c = cipher();
    let alias = registry
        .get::<JsonDatagram<AliasData>>("ddl://skiff/EncryptedAliasDataDatagram")
        .unwrap();
    let container = seal(
        alias,
        &AliasData {
            display_name: Some("Ada".to_string()),
            display_picture_data: None,
        },
        &c,
    )
    .unwrap();

    assert!(matches!(
        open(&DocumentDataDatagram::new(), &container, &c),
        Err(DatagramError::TypeMismatch { .. })
    ));
}

#[test]
fn shared_descriptors_across_threads() {
    let registry = Arc::new(DatagramRegistry::standard());
    let c = Arc::new(cipher());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let c = Arc::clone(&c);
            thread::spawn(move || {
                let dg = registry
                    .get::<DocumentDataDatagram>("ddl://skiff/DocumentDataDatagram")
                    .unwrap();
                let payload = format!(r#"{{"n":{}}}"#, i);
                let container = seal(dg, &payload, c.as_ref()).unwrap();
                assert_eq!(open(dg, &container, c.as_ref()).unwrap(), payload);
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
