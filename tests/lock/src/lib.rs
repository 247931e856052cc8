//! Determinism lock tests for the wayfind workspace.
//!
//! The lock suite pins the externally observable artifacts of canonical
//! episode runs: trace bytes, transcript bytes, and their digests. The
//! fixture helpers here are the single source of truth for which episodes
//! count as canonical, shared by the in-process tests and the
//! `episode_fixture` cross-process binary.

#![forbid(unsafe_code)]

pub mod fixtures;
