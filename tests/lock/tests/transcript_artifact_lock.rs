//! Transcript artifact locks.
//!
//! Proves that writing the canonical episodes to disk and re-verifying them
//! is stable: the same run always writes the same digest, and the digest
//! binds the transcript bytes.

use lock_tests::fixtures::{detour_report, open_grid_report};
use wayfind_harness::transcript::{
    verify_transcript, write_transcript, DIGEST_FILE, TRANSCRIPT_FILE,
};

#[test]
fn write_verify_rewrite_is_stable() {
    let dir_a = tempfile::tempdir().expect("tempdir");
    let dir_b = tempfile::tempdir().expect("tempdir");

    let digest_a = write_transcript(dir_a.path(), &detour_report()).expect("write");
    let digest_b = write_transcript(dir_b.path(), &detour_report()).expect("write");
    assert_eq!(digest_a, digest_b, "identical runs must write identical digests");

    assert_eq!(verify_transcript(dir_a.path()).expect("verify"), digest_a);
    assert_eq!(verify_transcript(dir_b.path()).expect("verify"), digest_b);
}

#[test]
fn different_worlds_write_different_digests() {
    let dir_a = tempfile::tempdir().expect("tempdir");
    let dir_b = tempfile::tempdir().expect("tempdir");

    let detour = write_transcript(dir_a.path(), &detour_report()).expect("write");
    let open = write_transcript(dir_b.path(), &open_grid_report()).expect("write");
    assert_ne!(detour, open, "distinct episodes must not collide");
}

#[test]
fn written_files_are_the_expected_artifacts() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_transcript(dir.path(), &detour_report()).expect("write");

    let transcript = std::fs::read(dir.path().join(TRANSCRIPT_FILE)).expect("transcript exists");
    let value: serde_json::Value = serde_json::from_slice(&transcript).expect("valid JSON");
    assert_eq!(value["world_id"], "detour:3x3");

    let sidecar = std::fs::read_to_string(dir.path().join(DIGEST_FILE)).expect("sidecar exists");
    assert!(sidecar.starts_with("sha256:"));
    assert!(sidecar.ends_with('\n'));
}

#[test]
fn flipping_one_transcript_byte_breaks_verification() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_transcript(dir.path(), &detour_report()).expect("write");

    let path = dir.path().join(TRANSCRIPT_FILE);
    let mut bytes = std::fs::read(&path).expect("read");
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    std::fs::write(&path, &bytes).expect("tamper");

    assert!(verify_transcript(dir.path()).is_err(), "tamper must be caught");
}
