//! End-to-end pass over the toolkit surface, exercised the way the
//! control-plane client consumes it.

use cpkit_core::config::{self, ClientConfig};
use cpkit_core::hash::{self, HashAlgorithm};
use cpkit_core::keyspace;
use cpkit_core::retry::{is_retryable, NetFailure, NetOp};
use cpkit_core::secret::Secret;
use std::io;

/// Deriving a store key for an object: join the path, shorten the seed.
#[test]
fn identifier_derivation_over_keyspace() {
    let id = keyspace::object_id("https://etcd-0.internal:2379");
    let key = keyspace::key_path(&["clusters", &id, "state"]);
    assert_eq!(key, format!("clusters/{id}/state"));
    assert_eq!(id.len(), HashAlgorithm::Fnv64a.hex_len());

    // The config's algorithm selector drives the same derivation.
    let cfg = ClientConfig::default();
    assert_eq!(
        hash::digest("seed", cfg.id_algorithm),
        hash::digest("seed", HashAlgorithm::Fnv64a)
    );
}

/// A config carrying a credential survives the TOML pipeline redacted and
/// the JSON pipeline redacted, while the in-memory value stays usable.
#[test]
fn secret_redaction_through_both_pipelines() {
    let mut cfg = ClientConfig::default();
    cfg.auth_token = Secret::from("s3cr3t-credential");

    let toml_out = toml::to_string_pretty(&cfg).unwrap();
    let json_out = serde_json::to_string(&cfg).unwrap();
    for out in [&toml_out, &json_out] {
        assert!(!out.contains("s3cr3t-credential"), "leaked in {out}");
        assert!(out.contains("<secret>"));
    }

    // The client itself can still authenticate.
    assert_eq!(cfg.auth_token.expose(), "s3cr3t-credential");

    // Reading the redacted TOML back yields the marker, not the secret.
    let reparsed: ClientConfig = toml::from_str(&toml_out).unwrap();
    assert_eq!(reparsed.auth_token.expose(), "<secret>");
}

/// Classification consumed the way a retry loop would: keep attempting
/// while failures classify as retryable, stop on the first hard failure.
#[test]
fn classifier_drives_a_retry_loop() {
    let failures = [
        NetFailure::timeout(NetOp::Dial),
        NetFailure::from_io(NetOp::Read, io::Error::from(io::ErrorKind::ConnectionReset)),
        NetFailure::from_io(NetOp::Other, io::Error::from(io::ErrorKind::ConnectionRefused)),
        NetFailure::bare(NetOp::Dial),
    ];
    let attempts = failures.iter().take_while(|f| is_retryable(f)).count();
    assert_eq!(attempts, 3, "loop stops at the dial rejection");
}

/// `load_or_init` writes a default config on first run and reads it back on
/// the next; the written file never contains a credential.
#[test]
fn config_file_lifecycle_under_temp_home() {
    let home = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", home.path());

    let first = config::load_or_init().unwrap();
    assert_eq!(first.endpoints, ClientConfig::default().endpoints);

    let path = config::config_path().unwrap();
    assert!(path.exists());
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert!(!on_disk.contains("auth_token"));

    let second = config::load_or_init().unwrap();
    assert_eq!(second.endpoints, first.endpoints);
    assert_eq!(second.id_algorithm, first.id_algorithm);

    std::env::remove_var("XDG_CONFIG_HOME");
}
