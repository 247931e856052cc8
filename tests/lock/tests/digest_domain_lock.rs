//! Digest domain governance lock.
//!
//! Proves:
//! 1. All digest domain byte strings are unique (prevents domain collision)
//! 2. All domains are null-terminated (hashing input invariant)
//! 3. All domains follow the `WAYFIND::*::V1\0` naming convention
//! 4. Domain separation actually changes the digest

use std::collections::BTreeSet;

use wayfind_harness::transcript::DOMAIN_TRANSCRIPT;
use wayfind_search::trace::{content_digest, DOMAIN_EPISODE_TRACE};

const ALL_DOMAINS: [&[u8]; 2] = [DOMAIN_EPISODE_TRACE, DOMAIN_TRANSCRIPT];

#[test]
fn all_domains_are_unique() {
    let mut seen = BTreeSet::new();
    for domain in ALL_DOMAINS {
        assert!(
            seen.insert(domain),
            "duplicate domain bytes: {}",
            String::from_utf8_lossy(domain)
        );
    }
}

#[test]
fn all_domains_are_null_terminated() {
    for domain in ALL_DOMAINS {
        assert!(
            domain.ends_with(&[0]),
            "{} is not null-terminated",
            String::from_utf8_lossy(domain)
        );
    }
}

#[test]
fn all_domains_follow_naming_convention() {
    for domain in ALL_DOMAINS {
        assert!(
            domain.starts_with(b"WAYFIND::"),
            "{} does not start with WAYFIND::",
            String::from_utf8_lossy(domain)
        );
        assert!(
            domain.ends_with(b"::V1\0"),
            "{} does not end with ::V1\\0",
            String::from_utf8_lossy(domain)
        );
    }
}

#[test]
fn domain_separation_changes_the_digest() {
    let payload = b"identical payload";
    assert_ne!(
        content_digest(DOMAIN_EPISODE_TRACE, payload),
        content_digest(DOMAIN_TRANSCRIPT, payload),
        "trace and transcript domains must hash the same payload differently"
    );
}
